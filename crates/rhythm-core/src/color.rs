//! Color handling for Rhythm overlays
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors can be created either from CSS color strings or
//! from packed `0xAARRGGBB` integers, the format overlay colors are usually
//! written in.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use rhythm_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create a new `Color` from a packed `0xAARRGGBB` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhythm_core::color::Color;
    ///
    /// let opaque_red = Color::from_argb(0xFFFF0000);
    /// assert!((opaque_red.alpha() - 1.0).abs() < 1e-6);
    ///
    /// let transparent = Color::from_argb(0x00FF0000);
    /// assert!(transparent.alpha().abs() < 1e-6);
    /// ```
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        let srgb = AlphaColor::<Srgb>::from_rgba8(r, g, b, a);
        Self {
            color: DynamicColor::from_alpha_color(srgb),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, between 0.0 (fully transparent)
    ///   and 1.0 (fully opaque)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between 0.0
    /// and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("rgb(0, 145, 234)").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_from_argb_alpha() {
        let grid = Color::from_argb(0x60F50057);
        assert!(approx_eq!(f32, grid.alpha(), 96.0 / 255.0, epsilon = 0.001));

        let baseline = Color::from_argb(0x800091EA);
        assert!(approx_eq!(f32, baseline.alpha(), 128.0 / 255.0, epsilon = 0.001));
    }

    #[test]
    fn test_color_from_argb_matches_css() {
        let from_int = Color::from_argb(0xFF0000FF);
        let from_css = Color::new("#0000ff").unwrap();
        assert!(approx_eq!(f32, from_int.alpha(), from_css.alpha()));
        assert_eq!(from_int, Color::from_argb(0xFF0000FF));
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.5);
        assert!(approx_eq!(f32, transparent.alpha(), 0.5, epsilon = 0.001));
    }

    #[test]
    fn test_color_display() {
        let color = Color::from_argb(0x60F50057);
        assert!(!format!("{color}").is_empty());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::from_argb(0x60F50057);
        let color2 = Color::from_argb(0x60F50057);
        let color3 = Color::from_argb(0x800091EA);

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
