//! Remote webhook abstraction.
//!
//! The answering service is an opaque HTTP collaborator; this module only
//! defines the seam the controller talks through.

pub mod backend;
