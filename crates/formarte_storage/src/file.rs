//! JSON-file backed store.
//!
//! The whole store is one JSON object `{ "<key>": "<value>", ... }`. Every
//! write rewrites the file through a temporary sibling and a rename, so a
//! crash mid-write leaves the previous contents intact.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use formarte_common::{BoxFuture, KeyValueStore};
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::StorageError;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens (or lazily creates) the store at `path`.
    ///
    /// A missing file is an empty store. Values that are not strings are kept
    /// as their JSON text so readers apply their own fallback. A file that is
    /// not a JSON object is moved to `<path>.corrupt` and the store starts
    /// empty.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path).await {
            Ok(text) if text.trim().is_empty() => HashMap::new(),
            Ok(text) => match parse_entries(&text) {
                Some(entries) => entries,
                None => {
                    quarantine(&path).await;
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Storage file {} not found, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        debug!(
            "Opened storage file {} with {} entries",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let text = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            warn!("Rename of {} failed: {}", tmp.display(), e);
            return Err(e.into());
        }
        Ok(())
    }
}

fn parse_entries(text: &str) -> Option<HashMap<String, String>> {
    let raw: HashMap<String, Value> = serde_json::from_str(text).ok()?;
    Some(
        raw.into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect(),
    )
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".corrupt");
    PathBuf::from(name)
}

async fn quarantine(path: &Path) {
    let target = corrupt_path(path);
    match fs::rename(path, &target).await {
        Ok(()) => warn!(
            "Storage file {} is not a JSON object, moved to {} and starting empty",
            path.display(),
            target.display()
        ),
        Err(e) => warn!(
            "Storage file {} is not a JSON object and could not be moved aside ({}), starting empty",
            path.display(),
            e
        ),
    }
}

impl KeyValueStore for JsonFileStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> BoxFuture<'_, Option<String>, Self::Error> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.entries.lock().await.get(&key).cloned()) })
    }

    fn set(&self, key: &str, value: String) -> BoxFuture<'_, (), Self::Error> {
        let key = key.to_string();
        Box::pin(async move {
            let mut entries = self.entries.lock().await;
            let previous = entries.insert(key.clone(), value);
            if let Err(e) = self.persist(&entries).await {
                // Keep memory and disk in agreement.
                match previous {
                    Some(old) => entries.insert(key, old),
                    None => entries.remove(&key),
                };
                return Err(e);
            }
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> BoxFuture<'_, (), Self::Error> {
        let key = key.to_string();
        Box::pin(async move {
            let mut entries = self.entries.lock().await;
            if let Some(old) = entries.remove(&key) {
                if let Err(e) = self.persist(&entries).await {
                    entries.insert(key, old);
                    return Err(e);
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("formarte-store-{}", uuid::Uuid::new_v4()))
            .join("store.json")
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let path = temp_path();
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set("allBookings", "[]".to_string()).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("allBookings").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn missing_file_is_empty_store() {
        let store = JsonFileStore::open(temp_path()).await.unwrap();
        assert_eq!(store.get("users").await.unwrap(), None);
    }

    fn write_raw(path: &Path, text: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    #[tokio::test]
    async fn unreadable_file_is_moved_aside() {
        let path = temp_path();
        write_raw(&path, "{\"allBookings\": [oops");

        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.get("allBookings").await.unwrap(), None);
        assert!(!path.exists());
        assert_eq!(
            std::fs::read_to_string(corrupt_path(&path)).unwrap(),
            "{\"allBookings\": [oops"
        );

        store.set("users", "[]".to_string()).await.unwrap();
        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("users").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn non_string_values_are_kept_as_json_text() {
        let path = temp_path();
        write_raw(&path, r#"{"allBookings": [], "users": {"a": 1}, "n": 3}"#);

        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.get("allBookings").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("users").await.unwrap().as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(store.get("n").await.unwrap().as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn remove_deletes_from_disk() {
        let path = temp_path();
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set("a", "1".to_string()).await.unwrap();
        store.remove("a").await.unwrap();
        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("a").await.unwrap(), None);
    }
}
