//! Builds the configured store.

use std::sync::Arc;

use formarte_common::KeyValueStore;
use formarte_config::StorageConfig;
use tracing::info;

use crate::error::StorageError;
use crate::file::JsonFileStore;
use crate::memory::MemoryStore;

/// Shared handle used by the booking and account crates.
pub type SharedStore = Arc<dyn KeyValueStore<Error = StorageError>>;

#[derive(Debug, Clone, Default)]
pub struct StoreFactory;

impl StoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Opens the JSON file named by `storage.path`, or an in-memory store
    /// when the path is empty.
    pub async fn create_store(&self, config: &StorageConfig) -> Result<SharedStore, StorageError> {
        if config.path.trim().is_empty() {
            info!("storage.path is empty, using volatile in-memory store");
            return Ok(Arc::new(MemoryStore::new()));
        }
        let store = JsonFileStore::open(&config.path).await?;
        info!("Using JSON file store at {}", store.path().display());
        Ok(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_path_gives_memory_store() {
        let config = StorageConfig {
            path: String::new(),
            ..StorageConfig::default()
        };
        let store = StoreFactory::new().create_store(&config).await.unwrap();
        store.set("k", "v".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn corrupt_file_still_opens() {
        let path = std::env::temp_dir()
            .join(format!("formarte-factory-{}", uuid::Uuid::new_v4()))
            .join("store.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{\"allBookings\": [oops").unwrap();

        let config = StorageConfig {
            path: path.to_string_lossy().into_owned(),
            ..StorageConfig::default()
        };
        let store = StoreFactory::new().create_store(&config).await.unwrap();
        assert_eq!(store.get("allBookings").await.unwrap(), None);
    }
}
