//! Geometric primitives for overlay rendering.
//!
//! This module provides the integer geometry types spec layers draw with.
//!
//! # Overview
//!
//! - [`Rect`] - An axis-aligned rectangle defined by its four edges
//! - [`Margins`] - Inward insets for four sides, in pixels or percent
//! - [`MarginUnit`] - Whether margins are absolute or relative to the bounds
//!
//! # Coordinate System
//!
//! Rhythm uses the usual screen coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Edges are half-open: a rectangle `(0, 0, 100, 34)` covers rows `0..34`.

/// An axis-aligned rectangle in absolute drawing units.
///
/// Rectangles are not normalized: `right < left` or `bottom < top` is
/// representable and simply yields a non-positive [`width`](Rect::width) or
/// [`height`](Rect::height).
///
/// # Examples
///
/// ```
/// # use rhythm_core::geometry::Rect;
/// let rect = Rect::new(10, 20, 110, 54);
/// assert_eq!(rect.width(), 100);
/// assert_eq!(rect.height(), 34);
/// assert!(!rect.is_empty());
///
/// assert!(Rect::new(10, 0, 10, 50).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle anchored at the origin with the given size.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the left edge
    pub fn left(self) -> i32 {
        self.left
    }

    /// Returns the top edge
    pub fn top(self) -> i32 {
        self.top
    }

    /// Returns the right edge
    pub fn right(self) -> i32 {
        self.right
    }

    /// Returns the bottom edge
    pub fn bottom(self) -> i32 {
        self.bottom
    }

    /// Returns the width of the rectangle, negative if it is inverted
    pub fn width(self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Returns the height of the rectangle, negative if it is inverted
    pub fn height(self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns true if the rectangle has no drawable area
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Moves each edge inwards by the given amount. Negative amounts move it
    /// outwards.
    pub fn inset(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            self.left.saturating_add(left),
            self.top.saturating_add(top),
            self.right.saturating_sub(right),
            self.bottom.saturating_sub(bottom),
        )
    }
}

/// The unit margin values are expressed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginUnit {
    /// Absolute drawing units
    #[default]
    Pixels,
    /// Percent of the corresponding bounds dimension, in range `0..=100`
    Percent,
}

/// Inward insets applied to drawable bounds before a layer lays itself out.
///
/// All four sides share a single [`MarginUnit`]. Percent margins scale off the
/// bounds they are resolved against: left and right off its width, top and
/// bottom off its height. Percentages outside `0..=100` resolve to zero.
///
/// # Examples
///
/// ```
/// # use rhythm_core::geometry::{Margins, Rect};
/// let bounds = Rect::from_size(200, 100);
///
/// let inner = Margins::pixels(8, 16, 8, 0).resolve(bounds);
/// assert_eq!(inner, Rect::new(8, 16, 192, 100));
///
/// let inner = Margins::percent(50, 0, 0, 10).resolve(bounds);
/// assert_eq!(inner, Rect::new(100, 0, 200, 90));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Margins {
    unit: MarginUnit,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Margins {
    /// Creates margins for four sides in the given unit.
    pub fn new(unit: MarginUnit, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            unit,
            left,
            top,
            right,
            bottom,
        }
    }

    /// Zero margins
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates margins in absolute drawing units.
    pub fn pixels(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(MarginUnit::Pixels, left, top, right, bottom)
    }

    /// Creates margins in percent of the bounds they are resolved against.
    pub fn percent(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(MarginUnit::Percent, left, top, right, bottom)
    }

    /// Creates margins with the same value on all four sides.
    pub fn uniform(unit: MarginUnit, value: i32) -> Self {
        Self::new(unit, value, value, value, value)
    }

    /// Returns the unit of these margins
    pub fn unit(self) -> MarginUnit {
        self.unit
    }

    /// Returns the left margin
    pub fn left(self) -> i32 {
        self.left
    }

    /// Returns the top margin
    pub fn top(self) -> i32 {
        self.top
    }

    /// Returns the right margin
    pub fn right(self) -> i32 {
        self.right
    }

    /// Returns the bottom margin
    pub fn bottom(self) -> i32 {
        self.bottom
    }

    /// Shrinks `bounds` by these margins, converting percent margins to
    /// absolute units first.
    ///
    /// The result may be empty or inverted when the margins exceed the bounds.
    pub fn resolve(self, bounds: Rect) -> Rect {
        let (left, top, right, bottom) = match self.unit {
            MarginUnit::Pixels => (self.left, self.top, self.right, self.bottom),
            MarginUnit::Percent => {
                let width = bounds.width();
                let height = bounds.height();
                (
                    percent_of(width, self.left),
                    percent_of(height, self.top),
                    percent_of(width, self.right),
                    percent_of(height, self.bottom),
                )
            }
        };

        bounds.inset(left, top, right, bottom)
    }
}

/// Integer percentage of a dimension, truncated toward zero.
fn percent_of(dimension: i32, percent: i32) -> i32 {
    if !(0..=100).contains(&percent) {
        return 0;
    }
    // |dimension * percent / 100| <= |dimension|, so the result always fits
    (i64::from(dimension) * i64::from(percent) / 100) as i32
}
