//! Session identity for Concierge.

pub mod identity;
