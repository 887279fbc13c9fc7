//! Conversation handling for Concierge.
//!
//! `controller` mediates question round-trips; `session` composes it with the
//! session identifier and the profile form into one chat session.

pub mod controller;
pub mod session;
