//! File-backed key-value store.
//!
//! Stores every key in a single JSON object file, the way browser local
//! storage keeps one flat map per origin. Writes go through a temp file and
//! a rename so a crash never leaves a half-written file behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use concierge_core::storage::kv_store::KvStore;
use concierge_types::error::StorageError;
use tokio::sync::Mutex;

/// JSON-file implementation of [`KvStore`].
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at `{data_dir}/storage.json`.
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Corrupt(format!("{}: {e}", self.path.display()))
        })
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Io(format!("failed to encode store: {e}")))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await?;
        tracing::debug!(key, path = %self.path.display(), "Stored key");
        Ok(())
    }
}
