//! Volatile store used by tests and by `storage.path = ""`.

use std::collections::HashMap;
use std::sync::Arc;

use formarte_common::{BoxFuture, KeyValueStore};
use tokio::sync::RwLock;

use crate::error::StorageError;

/// In-memory key-value store. Cloning shares the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }
}

impl KeyValueStore for MemoryStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> BoxFuture<'_, Option<String>, Self::Error> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.entries.read().await.get(&key).cloned()) })
    }

    fn set(&self, key: &str, value: String) -> BoxFuture<'_, (), Self::Error> {
        let key = key.to_string();
        Box::pin(async move {
            self.entries.write().await.insert(key, value);
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> BoxFuture<'_, (), Self::Error> {
        let key = key.to_string();
        Box::pin(async move {
            self.entries.write().await.remove(&key);
            Ok(())
        })
    }
}
