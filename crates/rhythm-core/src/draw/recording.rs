//! A canvas that remembers what was drawn on it.

use crate::{
    draw::{Canvas, Paint},
    geometry::Rect,
};

/// A single recorded [`Canvas::fill_rect`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    rect: Rect,
    paint: Paint,
}

impl DrawCall {
    /// Returns the rectangle that was filled
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the paint the rectangle was filled with
    pub fn paint(&self) -> Paint {
        self.paint
    }
}

/// A [`Canvas`] that records every call in order instead of drawing.
///
/// Useful for verifying layer geometry without a real rendering backend.
///
/// # Example
///
/// ```
/// # use rhythm_core::draw::{Canvas, Paint, RecordingCanvas};
/// # use rhythm_core::geometry::Rect;
/// let mut canvas = RecordingCanvas::new();
/// canvas.fill_rect(Rect::new(0, 0, 10, 1), &Paint::default());
///
/// assert_eq!(canvas.len(), 1);
/// assert_eq!(canvas.rects(), vec![Rect::new(0, 0, 10, 1)]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded calls in the order they were made
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns the recorded rectangles in the order they were filled
    pub fn rects(&self) -> Vec<Rect> {
        self.calls.iter().map(DrawCall::rect).collect()
    }

    /// Returns the number of recorded calls
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns true if nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.calls.push(DrawCall {
            rect,
            paint: *paint,
        });
    }
}
