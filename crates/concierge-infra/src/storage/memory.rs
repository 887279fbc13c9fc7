//! Process-local key-value store.

use std::collections::HashMap;

use concierge_core::storage::kv_store::KvStore;
use concierge_types::error::StorageError;
use tokio::sync::RwLock;

/// In-memory [`KvStore`]. Nothing survives a restart, so a session id
/// resolved against it is new on every run.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
