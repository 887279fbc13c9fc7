//! Session identifier type.
//!
//! A `SessionId` correlates every request from one storage scope with the
//! same server-side conversation. It is opaque to this client.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque per-profile session identifier.
///
/// Serializes as a bare string so it can be embedded directly in webhook
/// payloads as `session_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random identifier (UUID v4, hyphenated).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a previously stored identifier.
    ///
    /// Returns `None` for blank input so a corrupted store entry is treated
    /// like a missing one.
    pub fn from_stored(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for banners and prompts.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
