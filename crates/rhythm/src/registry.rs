//! Layer factory registry.
//!
//! The registry decouples declarative layer configuration from concrete layer
//! construction. Each layer type identifier maps to a [`SpecLayerFactory`]
//! that turns a [`LayerConfig`] into a configured, shareable spec layer.
//! Registering a factory under a new identifier is all it takes to add a
//! layer kind; the inflater looks factories up by identifier at load time.
//!
//! # Example
//!
//! ```
//! # use rhythm::layer_config::LayerConfig;
//! # use rhythm::registry::FactoryRegistry;
//! let registry = FactoryRegistry::with_builtin_layers();
//! assert!(registry.contains("grid-lines"));
//!
//! let config = LayerConfig::builder("grid-lines")
//!     .arg("gravity", "top")
//!     .arg("step", 8)
//!     .build();
//!
//! let factory = registry.lookup(config.layer_type()).expect("built-in factory");
//! let layer = factory.layer_for_config(&config).expect("valid config");
//! assert_eq!(layer.name(), "grid-lines");
//! ```

mod cache;
mod grid_lines;

pub use cache::LayerCache;
pub use grid_lines::GridLinesFactory;

use std::{collections::HashMap, fmt, sync::Arc};

use log::debug;

use rhythm_core::spec::SpecLayer;

use crate::layer_config::{ArgumentError, LayerConfig};

/// Identifier of the built-in grid line layer.
pub const GRID_LINES: &str = "grid-lines";
/// Identifier of the built-in baseline grid layer.
pub const BASELINE_GRID: &str = "baseline-grid";

/// A factory producing configured spec layers of one kind.
///
/// Factories may hand out the same instance for equal configs; callers must
/// not rely on identity either way. A factory never checks that
/// [`LayerConfig::layer_type`] matches the identifier it is registered under,
/// and it must never alter an instance it has already returned.
pub trait SpecLayerFactory: Send + Sync {
    /// The kind of layer this factory produces
    type Layer: SpecLayer + 'static;

    /// Creates a layer for `config`, or returns a cached one if an equal
    /// config was serviced before.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentError`] if an argument is missing, of the wrong
    /// type, or out of range.
    fn get_for_config(&self, config: &LayerConfig) -> Result<Arc<Self::Layer>, ArgumentError>;
}

/// Object-safe view of a [`SpecLayerFactory`], as stored in the registry.
pub trait DynSpecLayerFactory: Send + Sync {
    /// Creates a type-erased layer for `config`.
    fn layer_for_config(&self, config: &LayerConfig)
    -> Result<Arc<dyn SpecLayer>, ArgumentError>;
}

impl<F: SpecLayerFactory> DynSpecLayerFactory for F {
    fn layer_for_config(
        &self,
        config: &LayerConfig,
    ) -> Result<Arc<dyn SpecLayer>, ArgumentError> {
        let layer: Arc<dyn SpecLayer> = self.get_for_config(config)?;
        Ok(layer)
    }
}

/// Maps layer type identifiers to factories.
///
/// The registry is plain data: build it once, register extensions, then hand
/// it to an [`Inflater`](crate::Inflater) by reference. Lookups only need
/// `&self`, so a fully built registry can be shared between threads.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, Arc<dyn DynSpecLayerFactory>>,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in layer kinds:
    /// [`GRID_LINES`] and [`BASELINE_GRID`].
    pub fn with_builtin_layers() -> Self {
        let mut registry = Self::new();
        registry.register(GRID_LINES, GridLinesFactory::new());
        registry.register(BASELINE_GRID, GridLinesFactory::baseline());
        registry
    }

    /// Registers `factory` under `layer_type`, replacing any factory that was
    /// registered under the same identifier before.
    pub fn register<F>(&mut self, layer_type: impl Into<String>, factory: F)
    where
        F: SpecLayerFactory + 'static,
    {
        let layer_type = layer_type.into();
        let replaced = self
            .factories
            .insert(layer_type.clone(), Arc::new(factory))
            .is_some();

        debug!(layer_type, replaced; "Registered layer factory");
    }

    /// Returns the factory registered under `layer_type`, if any.
    pub fn lookup(&self, layer_type: &str) -> Option<&dyn DynSpecLayerFactory> {
        self.factories.get(layer_type).map(|factory| &**factory)
    }

    /// Returns true if a factory is registered under `layer_type`
    pub fn contains(&self, layer_type: &str) -> bool {
        self.factories.contains_key(layer_type)
    }

    /// Returns all registered identifiers, sorted
    pub fn layer_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Returns the number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no factory is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("layer_types", &self.layer_types())
            .finish()
    }
}
