//! Business logic and port trait definitions for Concierge.
//!
//! This crate defines the "ports" (`KvStore`, `WebhookBackend`) that the
//! infrastructure layer implements, plus the session controller built on
//! top of them. It depends only on `concierge-types` -- never on
//! `concierge-infra` or any HTTP/filesystem crate.

pub mod chat;
pub mod profile;
pub mod render;
pub mod session;
pub mod storage;
pub mod webhook;

#[cfg(test)]
pub(crate) mod testing;
