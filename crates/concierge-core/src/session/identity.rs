//! Session identifier manager.
//!
//! Reads the identifier from durable storage on start, creating and
//! persisting one on first use. Storage failures degrade silently to a
//! per-run identifier.

use concierge_types::session::SessionId;
use tracing::{debug, info, warn};

use crate::storage::kv_store::KvStore;

/// Load the session identifier stored under `key`, creating it if absent.
///
/// Never fails: when the store cannot be read, a fresh identifier is used
/// for this run only; when it cannot be written, the fresh identifier is
/// still returned and the next start generates another one.
pub async fn resolve_session_id<S: KvStore>(store: &S, key: &str) -> SessionId {
    match store.get(key).await {
        Ok(Some(stored)) => {
            if let Some(id) = SessionId::from_stored(stored) {
                debug!(session_id = %id, "Reusing stored session id");
                return id;
            }
            warn!(key, "Stored session id is blank, replacing it");
        }
        Ok(None) => {}
        Err(e) => {
            warn!(error = %e, key, "Session storage unavailable, using a per-run session id");
            return SessionId::generate();
        }
    }

    let id = SessionId::generate();
    match store.set(key, id.as_str()).await {
        Ok(()) => info!(session_id = %id, "Created new session id"),
        Err(e) => warn!(error = %e, key, "Failed to persist session id"),
    }
    id
}
