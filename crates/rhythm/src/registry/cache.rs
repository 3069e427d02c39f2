//! Instance cache for layer factories.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use log::trace;

use crate::layer_config::LayerConfig;

/// An append-only cache of layers keyed by configuration value.
///
/// Equal configs resolve to the same shared instance. Entries are never
/// evicted, which keeps repeated inflation of the same overlay cheap; the
/// cache grows with the number of *distinct* configs serviced.
///
/// The cache is guarded by a mutex held for the duration of a lookup or
/// insertion, so concurrent requests for equal configs agree on one instance.
pub struct LayerCache<T> {
    entries: Mutex<HashMap<LayerConfig, Arc<T>>>,
}

impl<T> LayerCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the layer cached for `config`, or creates and caches one.
    ///
    /// Failed creations are not cached.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `create`.
    pub fn get_or_try_insert_with<E>(
        &self,
        config: &LayerConfig,
        create: impl FnOnce() -> Result<T, E>,
    ) -> Result<Arc<T>, E> {
        // Layers are immutable, so a poisoned map is still consistent
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(layer) = entries.get(config) {
            trace!(layer_type = config.layer_type(); "Reusing cached layer");
            return Ok(Arc::clone(layer));
        }

        let layer = Arc::new(create()?);
        entries.insert(config.clone(), Arc::clone(&layer));
        trace!(layer_type = config.layer_type(), cached = entries.len(); "Cached new layer");

        Ok(layer)
    }

    /// Returns the number of cached layers
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for LayerCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LayerCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn config(step: i64) -> LayerConfig {
        LayerConfig::builder("grid-lines").arg("step", step).build()
    }

    #[test]
    fn test_equal_configs_share_instance() {
        let cache = LayerCache::new();
        let first = cache
            .get_or_try_insert_with(&config(8), || Ok::<_, ()>(8))
            .unwrap();
        let second = cache
            .get_or_try_insert_with(&config(8), || Ok::<_, ()>(99))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, 8);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_configs_get_distinct_instances() {
        let cache = LayerCache::new();
        let a = cache
            .get_or_try_insert_with(&config(8), || Ok::<_, ()>(8))
            .unwrap();
        let b = cache
            .get_or_try_insert_with(&config(4), || Ok::<_, ()>(4))
            .unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!((*a, *b), (8, 4));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache: LayerCache<i32> = LayerCache::new();
        let result = cache.get_or_try_insert_with(&config(8), || Err("bad"));
        assert_eq!(result, Err("bad"));
        assert!(cache.is_empty());

        let layer = cache
            .get_or_try_insert_with(&config(8), || Ok::<_, &str>(1))
            .unwrap();
        assert_eq!(*layer, 1);
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let cache = Arc::new(LayerCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    cache
                        .get_or_try_insert_with(&config(8), || Ok::<_, ()>(i))
                        .unwrap()
                })
            })
            .collect();

        let layers: Vec<Arc<i32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(layers.iter().all(|layer| Arc::ptr_eq(layer, &layers[0])));
        assert_eq!(cache.len(), 1);
    }
}
