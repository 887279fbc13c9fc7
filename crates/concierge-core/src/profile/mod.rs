//! Visitor profile form.
//!
//! Collects name, email and phone once per run and submits them before the
//! conversation opens.

pub mod form;

pub use form::{ProfileForm, notice_for};
