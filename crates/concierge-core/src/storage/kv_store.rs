//! Key-value store trait.
//!
//! Models the durable client-side storage that holds the session
//! identifier. Implementations live in concierge-infra.

use concierge_types::error::StorageError;

/// Trait for durable string key-value storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
