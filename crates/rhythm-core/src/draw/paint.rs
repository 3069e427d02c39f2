//! Paint definitions used by [`Canvas`](super::Canvas) calls.

use std::str::FromStr;

use crate::color::Color;

/// How a rectangle passed to a canvas is painted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    /// Fill the interior of the rectangle (default)
    #[default]
    Fill,
    /// Outline the rectangle with a one unit stroke
    Stroke,
}

impl PaintStyle {
    /// Returns the name used for this style in overlay documents
    pub fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

impl FromStr for PaintStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(Self::Fill),
            "stroke" => Ok(Self::Stroke),
            _ => Err(format!(
                "invalid paint style `{s}`, valid values: fill, stroke"
            )),
        }
    }
}

/// A color and style descriptor for a single drawing primitive.
///
/// # Examples
///
/// ```
/// use rhythm_core::color::Color;
/// use rhythm_core::draw::{Paint, PaintStyle};
///
/// let paint = Paint::fill(Color::from_argb(0x60F50057));
/// assert_eq!(paint.style(), PaintStyle::Fill);
///
/// let outline = paint.with_style(PaintStyle::Stroke);
/// assert_eq!(outline.color(), paint.color());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paint {
    color: Color,
    style: PaintStyle,
}

impl Paint {
    /// Creates a paint with the given color and style.
    pub fn new(color: Color, style: PaintStyle) -> Self {
        Self { color, style }
    }

    /// Creates a filling paint with the given color.
    pub fn fill(color: Color) -> Self {
        Self::new(color, PaintStyle::Fill)
    }

    /// Returns the paint color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the paint style
    pub fn style(&self) -> PaintStyle {
        self.style
    }

    /// Returns a copy of this paint with a different color
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Returns a copy of this paint with a different style
    pub fn with_style(self, style: PaintStyle) -> Self {
        Self { style, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_default_is_fill() {
        let paint = Paint::default();
        assert_eq!(paint.style(), PaintStyle::Fill);
        assert_eq!(paint.color(), Color::default());
    }

    #[test]
    fn test_paint_with_color() {
        let blue = Color::from_argb(0x800091EA);
        let paint = Paint::fill(Color::default()).with_color(blue);
        assert_eq!(paint.color(), blue);
        assert_eq!(paint.style(), PaintStyle::Fill);
    }

    #[test]
    fn test_paint_style_from_str() {
        assert_eq!(PaintStyle::from_str("fill").unwrap(), PaintStyle::Fill);
        assert_eq!(PaintStyle::from_str("stroke").unwrap(), PaintStyle::Stroke);

        let result = PaintStyle::from_str("hatch");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid paint style"));
    }

    #[test]
    fn test_paint_style_name_roundtrips() {
        for style in [PaintStyle::Fill, PaintStyle::Stroke] {
            assert_eq!(PaintStyle::from_str(style.name()).unwrap(), style);
        }
    }
}
