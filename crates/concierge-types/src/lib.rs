//! Shared domain types for Concierge.
//!
//! This crate contains the domain types used across the workspace:
//! session identifiers, visitor profiles, chat messages, webhook payloads,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod profile;
pub mod session;
pub mod webhook;
