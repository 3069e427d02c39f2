//! Generic layer configuration.
//!
//! A [`LayerConfig`] is the bridge between a declarative overlay description
//! and a concrete spec layer: a layer type identifier plus an ordered list of
//! primitive arguments, either named or positional. Configs compare by value,
//! so two entries with the same type and arguments are interchangeable and
//! may share a cached layer instance.
//!
//! # Example
//!
//! ```
//! # use rhythm::layer_config::{ArgValue, LayerConfig};
//! let config = LayerConfig::builder("grid-lines")
//!     .positional("top")
//!     .arg("step", 8)
//!     .arg("color", "#60f50057")
//!     .build();
//!
//! assert_eq!(config.layer_type(), "grid-lines");
//! assert_eq!(config.positional(0), Some(&ArgValue::from("top")));
//! assert_eq!(config.int("step"), Ok(Some(8)));
//! ```

use std::fmt;

use thiserror::Error;

/// A primitive argument value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgValue {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl ArgValue {
    /// Returns a human-readable name of the value type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "an integer",
            Self::Str(_) => "a string",
            Self::Bool(_) => "a boolean",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A single argument: a value with an optional name. Unnamed arguments are
/// positional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    name: Option<String>,
    value: ArgValue,
}

impl Argument {
    /// Returns the argument name, or `None` for positional arguments
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the argument value
    pub fn value(&self) -> &ArgValue {
        &self.value
    }
}

/// Errors reported while reading arguments from a [`LayerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing required argument `{name}`")]
    Missing { name: String },

    #[error("argument `{name}` must be {expected}, found {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value for argument `{name}`: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("unexpected argument `{name}`")]
    Unexpected { name: String },
}

impl ArgumentError {
    /// Shorthand for an [`ArgumentError::InvalidValue`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`ArgumentError::WrongType`].
    pub fn wrong_type(name: &str, expected: &'static str, found: &ArgValue) -> Self {
        Self::WrongType {
            name: name.to_string(),
            expected,
            found: found.type_name(),
        }
    }
}

/// The configuration of a single layer entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerConfig {
    layer_type: String,
    args: Vec<Argument>,
}

impl LayerConfig {
    /// Creates a config with no arguments.
    pub fn new(layer_type: impl Into<String>) -> Self {
        Self {
            layer_type: layer_type.into(),
            args: Vec::new(),
        }
    }

    /// Starts building a config for the given layer type.
    pub fn builder(layer_type: impl Into<String>) -> LayerConfigBuilder {
        LayerConfigBuilder {
            config: Self::new(layer_type),
        }
    }

    /// Returns the layer type identifier
    pub fn layer_type(&self) -> &str {
        &self.layer_type
    }

    /// Returns all arguments in declaration order
    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    /// Returns the value of a named argument. If the name is repeated, the
    /// last occurrence wins.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.args
            .iter()
            .rev()
            .find(|arg| arg.name() == Some(name))
            .map(Argument::value)
    }

    /// Returns the positional argument at `index`, counting positional
    /// arguments only.
    pub fn positional(&self, index: usize) -> Option<&ArgValue> {
        self.args
            .iter()
            .filter(|arg| arg.name.is_none())
            .nth(index)
            .map(Argument::value)
    }

    /// Returns the number of positional arguments
    pub fn positional_count(&self) -> usize {
        self.args.iter().filter(|arg| arg.name.is_none()).count()
    }

    /// Returns a named argument, falling back to the positional argument at
    /// `index` when the name is absent.
    pub fn named_or_positional(&self, name: &str, index: usize) -> Option<&ArgValue> {
        self.get(name).or_else(|| self.positional(index))
    }

    /// Reads an optional integer argument.
    pub fn int(&self, name: &str) -> Result<Option<i64>, ArgumentError> {
        match self.get(name) {
            None => Ok(None),
            Some(ArgValue::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(ArgumentError::wrong_type(name, "an integer", other)),
        }
    }

    /// Reads an optional string argument.
    pub fn string(&self, name: &str) -> Result<Option<&str>, ArgumentError> {
        match self.get(name) {
            None => Ok(None),
            Some(ArgValue::Str(value)) => Ok(Some(value)),
            Some(other) => Err(ArgumentError::wrong_type(name, "a string", other)),
        }
    }

    /// Reads an optional boolean argument.
    pub fn bool(&self, name: &str) -> Result<Option<bool>, ArgumentError> {
        match self.get(name) {
            None => Ok(None),
            Some(ArgValue::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(ArgumentError::wrong_type(name, "a boolean", other)),
        }
    }

    /// Checks that every named argument is one of `allowed` and that there are
    /// at most `max_positional` positional arguments.
    pub fn ensure_known(
        &self,
        allowed: &[&str],
        max_positional: usize,
    ) -> Result<(), ArgumentError> {
        if let Some(name) = self
            .args
            .iter()
            .filter_map(Argument::name)
            .find(|name| !allowed.contains(name))
        {
            return Err(ArgumentError::Unexpected {
                name: name.to_string(),
            });
        }

        let positional = self.positional_count();
        if positional > max_positional {
            return Err(ArgumentError::Unexpected {
                name: format!("#{}", max_positional + 1),
            });
        }

        Ok(())
    }
}

impl fmt::Display for LayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer_type)?;
        for arg in &self.args {
            match arg.name() {
                Some(name) => write!(f, " {name}={}", arg.value)?,
                None => write!(f, " {}", arg.value)?,
            }
        }
        Ok(())
    }
}

/// Builder for [`LayerConfig`], preserving argument order.
#[derive(Debug, Clone)]
pub struct LayerConfigBuilder {
    config: LayerConfig,
}

impl LayerConfigBuilder {
    /// Appends a named argument.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.config.args.push(Argument {
            name: Some(name.into()),
            value: value.into(),
        });
        self
    }

    /// Appends a positional argument.
    pub fn positional(mut self, value: impl Into<ArgValue>) -> Self {
        self.config.args.push(Argument {
            name: None,
            value: value.into(),
        });
        self
    }

    /// Finishes the config.
    pub fn build(self) -> LayerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_named_and_positional_lookup() {
        let config = LayerConfig::builder("grid-lines")
            .positional("left")
            .arg("step", 72)
            .positional(16)
            .build();

        assert_eq!(config.positional(0), Some(&ArgValue::from("left")));
        assert_eq!(config.positional(1), Some(&ArgValue::Int(16)));
        assert_eq!(config.positional(2), None);
        assert_eq!(config.positional_count(), 2);
        assert_eq!(config.get("step"), Some(&ArgValue::Int(72)));
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_named_or_positional_prefers_name() {
        let config = LayerConfig::builder("grid-lines")
            .positional("left")
            .arg("gravity", "right")
            .build();
        assert_eq!(
            config.named_or_positional("gravity", 0),
            Some(&ArgValue::from("right"))
        );
        assert_eq!(
            config.named_or_positional("step", 0),
            Some(&ArgValue::from("left"))
        );
    }

    #[test]
    fn test_last_named_argument_wins() {
        let config = LayerConfig::builder("grid-lines")
            .arg("step", 4)
            .arg("step", 8)
            .build();
        assert_eq!(config.int("step"), Ok(Some(8)));
    }

    #[test]
    fn test_typed_accessors() {
        let config = LayerConfig::builder("grid-lines")
            .arg("step", 8)
            .arg("color", "red")
            .arg("enabled", true)
            .build();

        assert_eq!(config.int("step"), Ok(Some(8)));
        assert_eq!(config.string("color"), Ok(Some("red")));
        assert_eq!(config.bool("enabled"), Ok(Some(true)));
        assert_eq!(config.int("absent"), Ok(None));

        assert_eq!(
            config.int("color"),
            Err(ArgumentError::WrongType {
                name: "color".to_string(),
                expected: "an integer",
                found: "a string",
            })
        );
        assert!(config.string("step").is_err());
        assert!(config.bool("step").is_err());
    }

    #[test]
    fn test_ensure_known() {
        let config = LayerConfig::builder("grid-lines")
            .positional("top")
            .arg("step", 8)
            .build();
        assert!(config.ensure_known(&["step"], 1).is_ok());
        assert_eq!(
            config.ensure_known(&["color"], 1),
            Err(ArgumentError::Unexpected {
                name: "step".to_string()
            })
        );
        assert_eq!(
            config.ensure_known(&["step"], 0),
            Err(ArgumentError::Unexpected {
                name: "#1".to_string()
            })
        );
    }

    #[test]
    fn test_value_equality_and_hash() {
        let a = LayerConfig::builder("grid-lines").arg("step", 8).build();
        let b = LayerConfig::builder("grid-lines").arg("step", 8).build();
        let c = LayerConfig::builder("grid-lines").arg("step", 4).build();
        let d = LayerConfig::builder("baseline-grid").arg("step", 8).build();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: HashSet<_> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_display() {
        let config = LayerConfig::builder("grid-lines")
            .positional("top")
            .arg("step", 8)
            .arg("color", "red")
            .build();
        assert_eq!(config.to_string(), "grid-lines \"top\" step=8 color=\"red\"");
    }

    #[test]
    fn test_error_messages() {
        let err = ArgumentError::invalid("thickness", "must not be negative");
        assert_eq!(
            err.to_string(),
            "invalid value for argument `thickness`: must not be negative"
        );

        let err = ArgumentError::wrong_type("step", "an integer", &ArgValue::Bool(true));
        assert_eq!(
            err.to_string(),
            "argument `step` must be an integer, found a boolean"
        );
    }
}
