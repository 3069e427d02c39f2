//! Turns layer configs into a [`LayerStack`] through a [`FactoryRegistry`].

use std::sync::Arc;

use log::{debug, info};

use rhythm_core::spec::SpecLayer;

use crate::{
    error::RhythmError, layer_config::LayerConfig, registry::FactoryRegistry, stack::LayerStack,
};

/// Inflates declarative layer configs into configured spec layers.
///
/// Inflation stops at the first config that cannot be serviced. No partial
/// stack is returned in that case.
#[derive(Debug, Clone, Copy)]
pub struct Inflater<'a> {
    registry: &'a FactoryRegistry,
}

impl<'a> Inflater<'a> {
    pub fn new(registry: &'a FactoryRegistry) -> Self {
        Self { registry }
    }

    /// Inflates every config in order into a layer stack.
    ///
    /// # Errors
    ///
    /// Returns [`RhythmError::UnknownLayerType`] if no factory is registered
    /// for a config's layer type, or [`RhythmError::InvalidArgument`] if the
    /// factory rejects its arguments.
    pub fn inflate(&self, configs: &[LayerConfig]) -> Result<LayerStack, RhythmError> {
        info!(layers_count = configs.len(); "Inflating layers");

        let stack = configs
            .iter()
            .enumerate()
            .map(|(index, config)| self.inflate_layer(index, config))
            .collect::<Result<LayerStack, _>>()?;

        debug!(layers_count = stack.len(); "Layers inflated");
        Ok(stack)
    }

    /// Inflates a single config; `index` is its position in the document and
    /// is only used for error reporting.
    pub fn inflate_layer(
        &self,
        index: usize,
        config: &LayerConfig,
    ) -> Result<Arc<dyn SpecLayer>, RhythmError> {
        let layer_type = config.layer_type();
        let factory = self
            .registry
            .lookup(layer_type)
            .ok_or_else(|| RhythmError::UnknownLayerType {
                index,
                layer_type: layer_type.to_string(),
            })?;

        let layer = factory
            .layer_for_config(config)
            .map_err(|source| RhythmError::InvalidArgument {
                index,
                layer_type: layer_type.to_string(),
                source,
            })?;

        debug!(index, layer_type; "Layer inflated");
        Ok(layer)
    }
}
