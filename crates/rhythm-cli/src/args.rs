//! Command-line argument definitions for the Rhythm CLI.

use clap::Parser;

/// Command-line arguments for the Rhythm overlay renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the overlay document (TOML)
    #[arg(help = "Path to the input overlay file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "overlay.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Canvas width in pixels, overriding the configuration
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels, overriding the configuration
    #[arg(long)]
    pub height: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Creates arguments for rendering `input` into `output` with defaults
    /// for everything else.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            config: None,
            width: None,
            height: None,
            log_level: "info".to_string(),
        }
    }
}
