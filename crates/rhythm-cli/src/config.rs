//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use rhythm::{
    RhythmError,
    config::{AppConfig, CanvasConfig},
};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for RhythmError {
    fn from(err: ConfigError) -> Self {
        RhythmError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (rhythm/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if an explicit path is provided but the file doesn't exist,
/// or if a config file exists but cannot be parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RhythmError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("rhythm/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "rhythm", "rhythm") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Replaces the configured canvas size with the command-line overrides, if
/// any.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] for a zero width or height.
pub fn apply_canvas_overrides(
    config: AppConfig,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<AppConfig, RhythmError> {
    if width.is_none() && height.is_none() {
        return Ok(config);
    }

    let canvas = config.canvas();
    let width = width.unwrap_or(canvas.width());
    let height = height.unwrap_or(canvas.height());
    if width == 0 || height == 0 {
        return Err(ConfigError::Validation(format!(
            "canvas size must be positive, got {width}x{height}"
        ))
        .into());
    }

    debug!(width, height; "Canvas size overridden");
    Ok(config.with_canvas(CanvasConfig::new(width, height)))
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, RhythmError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
