//! CLI logic for the Rhythm overlay renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use rhythm::{OverlayBuilder, RhythmError};

/// Run the Rhythm CLI application
///
/// Reads the overlay document, renders it over the configured canvas and
/// writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `RhythmError` for I/O errors, configuration errors, malformed
/// overlay documents and layers that cannot be inflated.
pub fn run(args: &Args) -> Result<(), RhythmError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing overlay"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_canvas_overrides(app_config, args.width, args.height)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = OverlayBuilder::new(app_config);
    let svg = builder.render_source(&source)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
