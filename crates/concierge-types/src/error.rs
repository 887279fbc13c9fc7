use thiserror::Error;

use crate::profile::ProfileField;

/// Errors from key-value storage (used by the `KvStore` trait in concierge-core).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("storage file is corrupt: {0}")]
    Corrupt(String),
}

/// Errors from a webhook round-trip.
///
/// Callers do not distinguish between these when reporting to the visitor;
/// the variants exist for logs.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Errors from submitting the visitor profile form.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("missing required field: {0}")]
    MissingField(ProfileField),

    #[error("profile rejected: {0}")]
    Rejected(#[from] WebhookError),

    #[error("profile already submitted")]
    AlreadySubmitted,
}

/// Errors from the conversation controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("a question is already in flight")]
    Busy,
}
