//! Drawing surfaces for overlay rendering.
//!
//! Spec layers never talk to a concrete renderer. They issue a single
//! primitive, [`Canvas::fill_rect`], against whatever surface the caller
//! provides. This module defines that trait together with the [`Paint`] used
//! for each call and two implementations:
//!
//! - [`SvgCanvas`]: Collects SVG `<rect>` elements and assembles a document
//! - [`RecordingCanvas`]: Records every call, for inspection and testing

mod paint;
mod recording;
mod svg_canvas;

pub use paint::{Paint, PaintStyle};
pub use recording::{DrawCall, RecordingCanvas};
pub use svg_canvas::SvgCanvas;

use crate::geometry::Rect;

/// A 2D drawing surface that spec layers render into.
///
/// Implementations are driven by a single rendering thread at a time; a canvas
/// is borrowed mutably for the duration of one draw pass.
pub trait Canvas {
    /// Fills `rect` using `paint`.
    ///
    /// The rectangle is in the same absolute units as the bounds handed to the
    /// layer. Empty or inverted rectangles are passed through unchanged; it is
    /// up to the surface whether they produce any output.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        (**self).fill_rect(rect, paint);
    }
}
