//! Application state shared by the CLI commands.
//!
//! Resolves the data directory, loads configuration and picks the session
//! store. Services are generic over the core traits; this pins them to the
//! concrete infra implementations.

use std::path::{Path, PathBuf};

use concierge_core::storage::kv_store::KvStore;
use concierge_infra::config::{load_config, load_config_file};
use concierge_infra::resolve_data_dir;
use concierge_infra::storage::{FileKvStore, MemoryKvStore};
use concierge_types::config::ConciergeConfig;
use concierge_types::error::StorageError;

/// Where the session identifier lives for this run.
pub enum SessionStore {
    File(FileKvStore),
    Memory(MemoryKvStore),
}

impl KvStore for SessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            SessionStore::File(store) => store.get(key).await,
            SessionStore::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            SessionStore::File(store) => store.set(key, value).await,
            SessionStore::Memory(store) => store.set(key, value).await,
        }
    }
}

pub struct AppState {
    pub config: ConciergeConfig,
    pub data_dir: PathBuf,
    pub store: SessionStore,
}

impl AppState {
    /// Load configuration and open the session store.
    ///
    /// With `ephemeral`, or when the data directory cannot be created, the
    /// session id is kept in memory and regenerated on every run.
    pub async fn init(config_path: Option<&Path>, ephemeral: bool) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        let config = match config_path {
            Some(path) => load_config_file(path).await,
            None => load_config(&data_dir).await,
        };

        let store = if ephemeral {
            SessionStore::Memory(MemoryKvStore::new())
        } else {
            match tokio::fs::create_dir_all(&data_dir).await {
                Ok(()) => SessionStore::File(FileKvStore::in_data_dir(&data_dir)),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        dir = %data_dir.display(),
                        "Data directory unavailable, session id will not persist"
                    );
                    SessionStore::Memory(MemoryKvStore::new())
                }
            }
        };

        Ok(Self {
            config,
            data_dir,
            store,
        })
    }
}
