//! Spec layers: the drawable building blocks of an overlay.
//!
//! A spec layer knows how to render itself into a rectangular region of a
//! [`Canvas`]. Layers are configured once and are read-only afterwards, so a
//! single instance can be shared between any number of layer stacks and drawn
//! repeatedly, from any thread, as long as each canvas is used by one thread at
//! a time.

mod gravity;
mod grid_lines;

pub use gravity::Gravity;
pub use grid_lines::{GridLines, GridLinesBuilder};

use std::fmt;

use crate::{draw::Canvas, geometry::Rect};

/// The capability shared by every overlay layer kind.
pub trait SpecLayer: fmt::Debug + Send + Sync {
    /// Draws this layer into `canvas`, confined to `bounds`.
    ///
    /// Drawing never fails: degenerate configurations or bounds result in
    /// fewer primitives, or none at all.
    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect);

    /// Returns a short identifier for this layer kind, used to label output.
    fn name(&self) -> &'static str {
        "spec-layer"
    }
}
