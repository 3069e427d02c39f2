//! Overlay documents.
//!
//! An overlay document declares a layer stack in TOML. Each `[[layer]]` table
//! becomes one [`LayerConfig`]: its `type` key selects the factory, an
//! optional `args` array supplies positional arguments, and every other key is
//! a named argument, kept in document order.
//!
//! ```toml
//! [[layer]]
//! type = "baseline-grid"
//! step = 4
//!
//! [[layer]]
//! type = "grid-lines"
//! args = ["left", 72]
//! limit = 1
//! offset = 16
//! ```

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    error::RhythmError,
    layer_config::{ArgValue, LayerConfig, LayerConfigBuilder},
};

const TYPE_KEY: &str = "type";
const ARGS_KEY: &str = "args";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverlayDocument {
    #[serde(default, rename = "layer")]
    layers: Vec<toml::Table>,
}

/// Parses an overlay document into layer configs, in declaration order.
///
/// # Errors
///
/// Returns [`RhythmError::Parse`] for malformed TOML and
/// [`RhythmError::Document`] for a layer entry without a string `type` or with
/// an argument value that is not an integer, string or boolean.
pub fn parse(source: &str) -> Result<Vec<LayerConfig>, RhythmError> {
    let document: OverlayDocument =
        toml::from_str(source).map_err(|err| RhythmError::new_parse_error(&err, source))?;

    let configs = document
        .layers
        .into_iter()
        .enumerate()
        .map(|(index, table)| layer_config(index, table))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(layers_count = configs.len(); "Overlay document parsed");
    Ok(configs)
}

fn layer_config(index: usize, table: toml::Table) -> Result<LayerConfig, RhythmError> {
    let document_error = |message: String| RhythmError::Document { index, message };

    let layer_type = match table.get(TYPE_KEY) {
        Some(toml::Value::String(layer_type)) => layer_type.clone(),
        Some(other) => {
            return Err(document_error(format!(
                "`{TYPE_KEY}` must be a string, found {}",
                other.type_str()
            )));
        }
        None => return Err(document_error(format!("missing `{TYPE_KEY}` key"))),
    };

    let mut builder = LayerConfig::builder(layer_type);
    for (key, value) in table {
        builder = match key.as_str() {
            TYPE_KEY => builder,
            ARGS_KEY => positional_args(builder, value).map_err(document_error)?,
            _ => {
                let value = arg_value(&value)
                    .map_err(|found| document_error(format!("argument `{key}` {found}")))?;
                builder.arg(key, value)
            }
        };
    }

    let config = builder.build();
    trace!(index, config:%; "Layer config");
    Ok(config)
}

fn positional_args(
    builder: LayerConfigBuilder,
    value: toml::Value,
) -> Result<LayerConfigBuilder, String> {
    let values = match value {
        toml::Value::Array(values) => values,
        other => {
            return Err(format!(
                "`{ARGS_KEY}` must be an array, found {}",
                other.type_str()
            ));
        }
    };

    values
        .iter()
        .enumerate()
        .try_fold(builder, |builder, (position, value)| {
            let value = arg_value(value)
                .map_err(|found| format!("positional argument {} {found}", position + 1))?;
            Ok(builder.positional(value))
        })
}

fn arg_value(value: &toml::Value) -> Result<ArgValue, String> {
    match value {
        toml::Value::Integer(int) => Ok(ArgValue::Int(*int)),
        toml::Value::String(string) => Ok(ArgValue::Str(string.clone())),
        toml::Value::Boolean(boolean) => Ok(ArgValue::Bool(*boolean)),
        other => Err(format!(
            "must be an integer, string or boolean, found {}",
            other.type_str()
        )),
    }
}
