//! Rhythm - declarative spec overlays for checking layout rhythm.
//!
//! An overlay is a stack of spec layers, such as baseline grids, keylines and
//! column guides, drawn over a screen-sized area. Layers are declared in a
//! TOML overlay document, inflated through a registry of layer factories and
//! rendered to SVG.

pub mod config;
pub mod layer_config;
pub mod registry;

mod document;
mod error;
mod export;
mod inflate;
mod stack;

pub use rhythm_core::{color, draw, geometry, spec};

pub use error::RhythmError;
pub use inflate::Inflater;
pub use stack::LayerStack;

use log::{debug, info, trace};

use config::AppConfig;
use export::SvgExporter;
use geometry::Rect;
use layer_config::LayerConfig;
use registry::FactoryRegistry;

/// Builder for parsing, inflating and rendering overlays.
///
/// # Examples
///
/// ```
/// use rhythm::{OverlayBuilder, config::AppConfig};
///
/// let source = r#"
///     [[layer]]
///     type = "baseline-grid"
///     step = 8
/// "#;
///
/// let config = AppConfig::default();
/// let bounds = config.canvas().bounds();
/// let builder = OverlayBuilder::new(config);
///
/// let configs = builder.parse(source).expect("Failed to parse");
/// let stack = builder.inflate(&configs).expect("Failed to inflate");
/// let svg = builder.render_svg(&stack, bounds).expect("Failed to render");
/// assert!(svg.contains("data-layer=\"grid-lines\""));
/// ```
#[derive(Debug)]
pub struct OverlayBuilder {
    config: AppConfig,
    registry: FactoryRegistry,
}

impl OverlayBuilder {
    /// Create a new overlay builder with the given configuration and the
    /// built-in layer factories.
    pub fn new(config: AppConfig) -> Self {
        Self::with_registry(config, FactoryRegistry::with_builtin_layers())
    }

    /// Create a new overlay builder that inflates layers through `registry`.
    pub fn with_registry(config: AppConfig, registry: FactoryRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &FactoryRegistry {
        &self.registry
    }

    /// Returns the registry for registering additional layer factories.
    pub fn registry_mut(&mut self) -> &mut FactoryRegistry {
        &mut self.registry
    }

    /// Parse an overlay document into layer configs.
    ///
    /// # Errors
    ///
    /// Returns `RhythmError` for malformed TOML or malformed layer entries.
    pub fn parse(&self, source: &str) -> Result<Vec<LayerConfig>, RhythmError> {
        info!("Parsing overlay");
        let configs = document::parse(source)?;
        trace!(configs:?; "Parsed layer configs");
        Ok(configs)
    }

    /// Inflate layer configs into a layer stack.
    ///
    /// # Errors
    ///
    /// Returns `RhythmError` for unknown layer types or invalid arguments.
    pub fn inflate(&self, configs: &[LayerConfig]) -> Result<LayerStack, RhythmError> {
        Inflater::new(&self.registry).inflate(configs)
    }

    /// Render a layer stack over `bounds` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `RhythmError::Config` if the configured background color is
    /// invalid.
    pub fn render_svg(&self, stack: &LayerStack, bounds: Rect) -> Result<String, RhythmError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(RhythmError::Config)?;

        let doc = SvgExporter::new()
            .with_background(background)
            .render(stack, bounds);

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Parse, inflate and render an overlay document over the configured
    /// canvas.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage.
    pub fn render_source(&self, source: &str) -> Result<String, RhythmError> {
        let configs = self.parse(source)?;
        let stack = self.inflate(&configs)?;
        let bounds = self.config.canvas().bounds();
        debug!(bounds:?; "Rendering over configured canvas");
        self.render_svg(&stack, bounds)
    }
}

impl Default for OverlayBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
