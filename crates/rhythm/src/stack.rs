//! Ordered stacks of inflated spec layers.

use std::{slice, sync::Arc};

use log::trace;

use rhythm_core::{draw::Canvas, geometry::Rect, spec::SpecLayer};

/// An ordered list of spec layers, drawn back to front.
///
/// The first layer is the bottom of the stack. Layers are shared, so the same
/// instance may appear in several stacks or several times in one stack.
#[derive(Debug, Default, Clone)]
pub struct LayerStack {
    layers: Vec<Arc<dyn SpecLayer>>,
}

impl LayerStack {
    /// Creates an empty layer stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a layer on top of the stack.
    pub fn push(&mut self, layer: Arc<dyn SpecLayer>) {
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterates over the layers from bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, Arc<dyn SpecLayer>> {
        self.layers.iter()
    }
}

impl SpecLayer for LayerStack {
    /// Draws every layer into `canvas` in stack order.
    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        for (index, layer) in self.layers.iter().enumerate() {
            trace!(index, layer = layer.name(); "Drawing layer");
            layer.draw(canvas, bounds);
        }
    }

    fn name(&self) -> &'static str {
        "layer-stack"
    }
}

impl FromIterator<Arc<dyn SpecLayer>> for LayerStack {
    fn from_iter<I: IntoIterator<Item = Arc<dyn SpecLayer>>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LayerStack {
    type Item = &'a Arc<dyn SpecLayer>;
    type IntoIter = slice::Iter<'a, Arc<dyn SpecLayer>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
