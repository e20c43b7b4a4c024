//! Process-lifetime cache of loaded models.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

/// Keyed once-only initialization.
///
/// Concurrent first requests for the same key share a single load. A failed
/// load leaves the slot empty so a later request retries it; successful loads
/// are kept until the cache is dropped.
#[derive(Debug)]
pub struct ModelCache<K, V> {
    slots: Mutex<HashMap<K, Arc<OnceCell<Arc<V>>>>>,
}

impl<K, V> Default for ModelCache<K, V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Clone, V> ModelCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, running `init` if there is none.
    pub async fn get_or_try_init<F, Fut>(&self, key: &K, init: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        let cell = self.slot(key)?;
        cell.get_or_try_init(|| async move { init().await.map(Arc::new) })
            .await
            .cloned()
    }

    /// Number of successfully loaded entries.
    pub fn loaded(&self) -> usize {
        self.slots
            .lock()
            .map(|slots| slots.values().filter(|cell| cell.initialized()).count())
            .unwrap_or(0)
    }

    fn slot(&self, key: &K) -> Result<Arc<OnceCell<Arc<V>>>> {
        let mut slots = self.slots.lock().map_err(|_| Error::Internal {
            message: "model cache lock is poisoned".to_string(),
        })?;
        Ok(Arc::clone(slots.entry(key.clone()).or_default()))
    }
}
