//! Error types for Rhythm operations.
//!
//! This module provides the main error type [`RhythmError`] which wraps the
//! failures that can occur while turning an overlay document into rendered
//! output. Drawing itself never fails; every variant here is a configuration
//! or I/O problem detected before any layer is drawn.

use std::{io, ops::Range};

use thiserror::Error;

use crate::layer_config::ArgumentError;

/// The main error type for Rhythm operations.
///
/// Layer indices are zero-based in the variants and shown one-based in
/// messages.
#[derive(Debug, Error)]
pub enum RhythmError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The overlay document is not valid TOML or has an unexpected shape.
    #[error("{message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    /// A `[[layer]]` entry could not be turned into a layer config.
    #[error("layer {}: {message}", .index + 1)]
    Document { index: usize, message: String },

    #[error("layer {}: no factory registered for layer type `{layer_type}`", .index + 1)]
    UnknownLayerType { index: usize, layer_type: String },

    #[error("layer {} (`{layer_type}`): {source}", .index + 1)]
    InvalidArgument {
        index: usize,
        layer_type: String,
        #[source]
        source: ArgumentError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RhythmError {
    /// Create a new `Parse` error from a TOML deserialization error and the
    /// source it was produced from.
    pub fn new_parse_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
