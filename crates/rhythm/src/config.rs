//! Configuration types for overlay rendering.
//!
//! All types implement [`serde::Deserialize`] and are usually loaded from a
//! TOML file:
//!
//! ```toml
//! [canvas]
//! width = 1080
//! height = 1920
//!
//! [style]
//! background_color = "white"
//! ```
//!
//! # Example
//!
//! ```
//! # use rhythm::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 360);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use rhythm_core::{color::Color, geometry::Rect};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns a copy of this configuration with a different canvas.
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Size of the surface overlays are rendered over, in pixels.
///
/// Defaults to a 360x640 portrait phone screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the canvas area as a rectangle anchored at the origin.
    ///
    /// Sizes beyond `i32::MAX` are clamped.
    pub fn bounds(&self) -> Rect {
        let clamp = |value: u32| i32::try_from(value).unwrap_or(i32::MAX);
        Rect::from_size(clamp(self.width), clamp(self.height))
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 360,
            height: 640,
        }
    }
}

/// Visual styling of rendered overlays.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Background color as a CSS color string; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            width = 1080
            height = 1920

            [style]
            background_color = "white"
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas(), &CanvasConfig::new(1080, 1920));
        assert_eq!(config.canvas().bounds(), Rect::from_size(1080, 1920));
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_deserialize_partial_canvas() {
        let config: AppConfig = toml::from_str("[canvas]\nwidth = 411\n").unwrap();
        assert_eq!(config.canvas(), &CanvasConfig::new(411, 640));
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        assert!(toml::from_str::<AppConfig>("[layout]\nkind = 1\n").is_err());
        assert!(toml::from_str::<AppConfig>("[canvas]\ndepth = 1\n").is_err());
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::new(Some("not-a-color".to_string()));
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_bounds_clamps_large_sizes() {
        let canvas = CanvasConfig::new(u32::MAX, 10);
        assert_eq!(canvas.bounds().width(), i32::MAX);
    }
}
