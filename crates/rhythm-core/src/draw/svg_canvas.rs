//! SVG rendering surface.
//!
//! [`SvgCanvas`] turns every [`Canvas::fill_rect`] call into an SVG
//! `<rect>` element. The collected elements can then be wrapped into a group
//! that is tagged with the layer it came from, mirroring how overlays are
//! stacked back to front.
//!
//! # Example
//!
//! ```
//! # use rhythm_core::color::Color;
//! # use rhythm_core::draw::{Canvas, Paint, SvgCanvas};
//! # use rhythm_core::geometry::Rect;
//! let mut canvas = SvgCanvas::new();
//! canvas.fill_rect(Rect::new(0, 8, 100, 9), &Paint::fill(Color::from_argb(0x60F50057)));
//!
//! let group = canvas.into_group("grid-lines");
//! let markup = group.to_string();
//! assert!(markup.contains("data-layer=\"grid-lines\""));
//! assert!(markup.contains("<rect"));
//! ```

use log::trace;
use svg::node::element::{Group, Rectangle};

use crate::{
    draw::{Canvas, Paint, PaintStyle},
    geometry::Rect,
};

/// A [`Canvas`] that collects SVG rectangles.
#[derive(Debug, Default, Clone)]
pub struct SvgCanvas {
    rects: Vec<Rectangle>,
}

impl SvgCanvas {
    /// Creates an empty SVG canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rectangles collected so far
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns true if no rectangle was collected
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Wraps all collected rectangles into a `<g>` element with a
    /// `data-layer` attribute, consuming the canvas.
    pub fn into_group(self, layer_name: &str) -> Group {
        self.rects
            .into_iter()
            .fold(Group::new().set("data-layer", layer_name), |group, rect| {
                group.add(rect)
            })
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        // Zero-area rectangles produce no pixels; keep the markup small
        if rect.is_empty() {
            trace!(rect:?; "Skipping empty rectangle");
            return;
        }

        let color = paint.color();
        let element = Rectangle::new()
            .set("x", rect.left())
            .set("y", rect.top())
            .set("width", rect.width())
            .set("height", rect.height());

        let element = match paint.style() {
            PaintStyle::Fill => element
                .set("fill", &color)
                .set("fill-opacity", color.alpha()),
            PaintStyle::Stroke => element
                .set("fill", "none")
                .set("stroke", &color)
                .set("stroke-opacity", color.alpha())
                .set("stroke-width", 1),
        };

        self.rects.push(element);
    }
}
