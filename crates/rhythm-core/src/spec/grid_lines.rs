//! Repeating grid lines.
//!
//! [`GridLines`] draws horizontal **or** vertical lines (never both) at a fixed
//! step. Combine several layers to form a regular grid, or use a single one for
//! a baseline grid or incremental keylines.
//!
//! # Line placement
//!
//! Unless an offset is applied, horizontal lines are always drawn *below* the
//! row they delimit and vertical lines *to the right* of the column they
//! delimit, whatever the gravity. If a child view is aligned to the grid on all
//! sides, top and left lines overdraw the view whereas bottom and right lines
//! touch it from the outside.
//!
//! # Example
//!
//! ```
//! # use rhythm_core::draw::RecordingCanvas;
//! # use rhythm_core::geometry::Rect;
//! # use rhythm_core::spec::{GridLines, Gravity, SpecLayer};
//! let layer = GridLines::builder(Gravity::Top, 8).build();
//!
//! let mut canvas = RecordingCanvas::new();
//! layer.draw(&mut canvas, Rect::from_size(100, 34));
//!
//! let tops: Vec<i32> = canvas.rects().iter().map(|r| r.top()).collect();
//! assert_eq!(tops, vec![0, 8, 16, 24, 32]);
//! ```

use log::trace;

use crate::{
    color::Color,
    draw::{Canvas, Paint, PaintStyle},
    geometry::{Margins, Rect},
    spec::{Gravity, SpecLayer},
};

/// A layer of evenly spaced parallel lines.
///
/// Instances are immutable; use [`GridLinesBuilder`] to configure one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridLines {
    gravity: Gravity,
    step: i32,
    thickness: u32,
    limit: Option<u32>,
    margins: Margins,
    offset: i32,
    paint: Paint,
}

impl GridLines {
    /// Default color for regular grids, translucent magenta.
    pub const DEFAULT_GRID_COLOR: u32 = 0x60F5_0057;
    /// Default color for baseline grids, translucent blue.
    pub const DEFAULT_BASELINE_COLOR: u32 = 0x8000_91EA;

    /// Starts configuring a grid line layer.
    ///
    /// # Arguments
    ///
    /// * `gravity` - Orientation of the lines and the edge steps are counted
    ///   from. A left-aligned and a right-aligned layer on each half of a view
    ///   is handy when the view width is not a multiple of the step.
    /// * `step` - Distance between consecutive lines. Nothing is drawn unless
    ///   it is positive.
    pub fn builder(gravity: Gravity, step: i32) -> GridLinesBuilder {
        GridLinesBuilder::new(gravity, step)
    }

    /// Starts configuring a baseline grid: horizontal lines counted from the
    /// top, painted with [`DEFAULT_BASELINE_COLOR`](Self::DEFAULT_BASELINE_COLOR).
    pub fn baseline(step: i32) -> GridLinesBuilder {
        GridLinesBuilder::new(Gravity::Top, step)
            .color(Color::from_argb(Self::DEFAULT_BASELINE_COLOR))
    }

    /// Returns the gravity of this layer
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Returns the distance between lines
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Returns the line thickness
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Returns the configured limit, or `None` if unlimited
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the layer margins
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Returns the offset applied to every line
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Returns the paint lines are drawn with
    pub fn paint(&self) -> Paint {
        self.paint
    }

    fn fill_horizontal(&self, canvas: &mut dyn Canvas, region: Rect, y: i64) {
        let rect = clamped_rect(
            i64::from(region.left()),
            y,
            i64::from(region.right()),
            y + i64::from(self.thickness),
        );
        canvas.fill_rect(rect, &self.paint);
    }

    fn fill_vertical(&self, canvas: &mut dyn Canvas, region: Rect, x: i64) {
        let rect = clamped_rect(
            x,
            i64::from(region.top()),
            x + i64::from(self.thickness),
            i64::from(region.bottom()),
        );
        canvas.fill_rect(rect, &self.paint);
    }
}

impl SpecLayer for GridLines {
    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let region = self.margins.resolve(bounds);
        if region.is_empty() {
            trace!(bounds:?, region:?; "Grid lines region is empty, nothing to draw");
            return;
        }
        if self.step <= 0 {
            trace!(step = self.step; "Grid lines step is not positive, nothing to draw");
            return;
        }

        let step = i64::from(self.step);
        let offset = i64::from(self.offset);
        let left = i64::from(region.left());
        let top = i64::from(region.top());
        let right = i64::from(region.right());
        let bottom = i64::from(region.bottom());
        // The limit counts cells, so one more delimiting line than the limit is admitted
        let limit = self.limit.map_or(u64::MAX, u64::from);

        let mut line: u64 = 0;
        match self.gravity {
            Gravity::Top => {
                let mut y = top + offset;
                while y < bottom && line <= limit {
                    self.fill_horizontal(canvas, region, y);
                    y += step;
                    line += 1;
                }
            }
            Gravity::Bottom => {
                let mut y = bottom + offset;
                while y >= top && line <= limit {
                    self.fill_horizontal(canvas, region, y);
                    y -= step;
                    line += 1;
                }
            }
            Gravity::Left => {
                let mut x = left + offset;
                while x < right && line <= limit {
                    self.fill_vertical(canvas, region, x);
                    x += step;
                    line += 1;
                }
            }
            Gravity::Right => {
                let mut x = right + offset;
                while x >= left && line <= limit {
                    self.fill_vertical(canvas, region, x);
                    x -= step;
                    line += 1;
                }
            }
        }

        trace!(gravity:% = self.gravity, region:?, lines = line; "Grid lines drawn");
    }

    fn name(&self) -> &'static str {
        "grid-lines"
    }
}

fn clamped_rect(left: i64, top: i64, right: i64, bottom: i64) -> Rect {
    let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Rect::new(clamp(left), clamp(top), clamp(right), clamp(bottom))
}

/// Fluent configuration for [`GridLines`].
///
/// Every option has a default: thickness 1, no limit, no margins, no offset,
/// and a filling paint in [`GridLines::DEFAULT_GRID_COLOR`].
///
/// # Example
///
/// ```
/// # use rhythm_core::color::Color;
/// # use rhythm_core::geometry::Margins;
/// # use rhythm_core::spec::{GridLines, Gravity};
/// let keylines = GridLines::builder(Gravity::Left, 72)
///     .color(Color::new("teal").unwrap())
///     .thickness(2)
///     .limit(1)
///     .offset(16)
///     .margins(Margins::percent(0, 0, 50, 0))
///     .build();
///
/// assert_eq!(keylines.limit(), Some(1));
/// assert_eq!(keylines.thickness(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridLinesBuilder {
    layer: GridLines,
}

impl GridLinesBuilder {
    /// Creates a builder for a layer with the given gravity and step.
    pub fn new(gravity: Gravity, step: i32) -> Self {
        Self {
            layer: GridLines {
                gravity,
                step,
                thickness: 1,
                limit: None,
                margins: Margins::none(),
                offset: 0,
                paint: Paint::fill(Color::from_argb(GridLines::DEFAULT_GRID_COLOR)),
            },
        }
    }

    /// Sets the line color.
    pub fn color(mut self, color: Color) -> Self {
        self.layer.paint = self.layer.paint.with_color(color);
        self
    }

    /// Sets how lines are painted. Grid lines are filled by default.
    pub fn paint_style(mut self, style: PaintStyle) -> Self {
        self.layer.paint = self.layer.paint.with_style(style);
        self
    }

    /// Sets the line thickness.
    pub fn thickness(mut self, thickness: u32) -> Self {
        self.layer.thickness = thickness;
        self
    }

    /// Sets the layer margins, in pixels or percent of the drawable bounds.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.layer.margins = margins;
        self
    }

    /// Sets the maximum number of cells to outline, counted from the gravity
    /// edge: a limit of 4 draws the five lines enclosing four cells.
    /// Zero or less means no limit.
    pub fn limit(mut self, limit: i32) -> Self {
        self.layer.limit = u32::try_from(limit).ok().filter(|&limit| limit > 0);
        self
    }

    /// Sets an offset applied to every line. Regardless of gravity, positive
    /// values move lines right or down and negative values left or up.
    pub fn offset(mut self, offset: i32) -> Self {
        self.layer.offset = offset;
        self
    }

    /// Finishes configuration.
    pub fn build(self) -> GridLines {
        self.layer
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::draw::RecordingCanvas;

    fn count(layer: &GridLines, bounds: Rect) -> usize {
        let mut canvas = RecordingCanvas::new();
        layer.draw(&mut canvas, bounds);
        canvas.len()
    }

    proptest! {
        /// Top gravity admits every line starting strictly above the bottom edge.
        #[test]
        fn top_count_is_ceiling(height in 1i32..2000, step in 1i32..200) {
            let layer = GridLines::builder(Gravity::Top, step).build();
            let expected = ((height + step - 1) / step) as usize;
            prop_assert_eq!(count(&layer, Rect::from_size(50, height)), expected);
        }

        /// Bottom gravity walks up to and including the top edge, so it draws one
        /// extra line exactly when the height is a multiple of the step.
        #[test]
        fn bottom_mirrors_top(height in 1i32..2000, step in 1i32..200) {
            let bounds = Rect::from_size(50, height);
            let top = count(&GridLines::builder(Gravity::Top, step).build(), bounds);
            let bottom = count(&GridLines::builder(Gravity::Bottom, step).build(), bounds);
            let extra = usize::from(height % step == 0);
            prop_assert_eq!(bottom, top + extra);
        }

        /// Vertical gravities follow the same rules on the other axis.
        #[test]
        fn vertical_matches_horizontal(size in 1i32..2000, step in 1i32..200) {
            let tall = Rect::from_size(10, size);
            let wide = Rect::from_size(size, 10);
            prop_assert_eq!(
                count(&GridLines::builder(Gravity::Top, step).build(), tall),
                count(&GridLines::builder(Gravity::Left, step).build(), wide)
            );
            prop_assert_eq!(
                count(&GridLines::builder(Gravity::Bottom, step).build(), tall),
                count(&GridLines::builder(Gravity::Right, step).build(), wide)
            );
        }

        /// A positive limit caps the drawn lines at one more than the limit.
        #[test]
        fn limit_caps_line_count(height in 1i32..2000, step in 1i32..200, limit in 1i32..50) {
            let bounds = Rect::from_size(50, height);
            for gravity in [Gravity::Top, Gravity::Bottom] {
                let unlimited = count(&GridLines::builder(gravity, step).build(), bounds);
                let limited = count(&GridLines::builder(gravity, step).limit(limit).build(), bounds);
                prop_assert_eq!(limited, unlimited.min(limit as usize + 1));
            }
        }

        /// Every line starts inside the region when no offset is applied.
        #[test]
        fn lines_start_inside_region(
            left in -500i32..500,
            top in -500i32..500,
            width in 1i32..500,
            height in 1i32..500,
            step in 1i32..100,
        ) {
            let bounds = Rect::new(left, top, left + width, top + height);
            let mut canvas = RecordingCanvas::new();
            GridLines::builder(Gravity::Top, step).build().draw(&mut canvas, bounds);
            for rect in canvas.rects() {
                prop_assert!(rect.top() >= top && rect.top() < top + height);
                prop_assert_eq!(rect.left(), left);
                prop_assert_eq!(rect.right(), left + width);
            }
        }
    }
}
