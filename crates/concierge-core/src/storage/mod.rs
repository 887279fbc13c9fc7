//! Storage abstractions for Concierge.
//!
//! Implementations live in concierge-infra.

pub mod kv_store;
