//! Infrastructure layer for Concierge.
//!
//! Contains implementations of the port traits defined in `concierge-core`:
//! the reqwest webhook backend, file-backed and in-memory key-value stores,
//! plus configuration loading and data directory resolution.

pub mod config;
pub mod storage;
pub mod webhook;

use std::path::PathBuf;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `CONCIERGE_DATA_DIR` environment variable
/// 2. `~/.concierge`
/// 3. `.concierge` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONCIERGE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".concierge");
    }

    PathBuf::from(".concierge")
}
