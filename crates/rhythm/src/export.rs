//! SVG export of layer stacks.
//!
//! Every layer is drawn into its own [`SvgCanvas`] so the resulting document
//! keeps one `<g>` per layer, tagged with the layer name and its position in
//! the stack. An optional background is painted below all layers.

use log::{debug, info};
use svg::{Document, node::element::Rectangle};

use rhythm_core::{color::Color, draw::SvgCanvas, geometry::Rect};

use crate::stack::LayerStack;

/// Builds SVG documents from layer stacks.
#[derive(Debug, Default, Clone)]
pub struct SvgExporter {
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color painted below all layers.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Renders `stack` over `bounds` into an SVG document.
    ///
    /// The document's view box matches `bounds`, so an overlay drawn at a
    /// non-zero origin keeps its coordinates.
    pub fn render(&self, stack: &LayerStack, bounds: Rect) -> Document {
        let width = bounds.width().max(0);
        let height = bounds.height().max(0);

        info!(width, height, layers_count = stack.len(); "Rendering SVG");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("{} {} {width} {height}", bounds.left(), bounds.top()),
            )
            .set("width", width)
            .set("height", height);

        if let Some(color) = &self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("x", bounds.left())
                    .set("y", bounds.top())
                    .set("width", width)
                    .set("height", height)
                    .set("fill", color)
                    .set("fill-opacity", color.alpha()),
            );
        }

        for (index, layer) in stack.iter().enumerate() {
            let mut canvas = SvgCanvas::new();
            layer.draw(&mut canvas, bounds);
            debug!(index, layer = layer.name(), rects_count = canvas.len(); "Layer rendered");

            doc = doc.add(canvas.into_group(layer.name()).set("data-index", index));
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use rhythm_core::spec::{Gravity, GridLines, SpecLayer};

    fn stack() -> LayerStack {
        [
            Arc::new(GridLines::baseline(8).build()) as Arc<dyn SpecLayer>,
            Arc::new(GridLines::builder(Gravity::Left, 16).build()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_render_groups_per_layer() {
        let doc = SvgExporter::new().render(&stack(), Rect::from_size(32, 16));
        let markup = doc.to_string();

        assert!(markup.contains("viewBox=\"0 0 32 16\""));
        assert!(markup.contains("data-index=\"0\""));
        assert!(markup.contains("data-index=\"1\""));
        assert_eq!(markup.matches("data-layer=\"grid-lines\"").count(), 2);
        // Rows at y = 0, 8 and columns at x = 0, 16
        assert_eq!(markup.matches("<rect").count(), 4);
    }

    #[test]
    fn test_render_background() {
        let background = Color::new("white").unwrap();
        let doc = SvgExporter::new()
            .with_background(Some(background))
            .render(&LayerStack::new(), Rect::new(10, 20, 110, 220));
        let markup = doc.to_string();

        assert!(markup.contains("viewBox=\"10 20 100 200\""));
        assert_eq!(markup.matches("<rect").count(), 1);
        assert!(!markup.contains("<g"));
    }

    #[test]
    fn test_render_inverted_bounds() {
        let doc = SvgExporter::new().render(&stack(), Rect::new(0, 0, -5, -5));
        let markup = doc.to_string();
        assert!(markup.contains("width=\"0\""));
        assert_eq!(markup.matches("<rect").count(), 0);
    }
}
