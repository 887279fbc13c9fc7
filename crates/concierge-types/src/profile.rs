//! Visitor profile types.
//!
//! The visitor fills in name, email and phone once per run before the chat
//! opens. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact details collected before the conversation is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl VisitorProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// First field that is empty, in form order.
    ///
    /// Only emptiness is checked; email and phone formats are not validated.
    pub fn first_missing_field(&self) -> Option<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
        }
    }
}

/// One of the three profile inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Name, ProfileField::Email, ProfileField::Phone];

    /// Placeholder label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Your Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone Number",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileField::Name => write!(f, "name"),
            ProfileField::Email => write!(f, "email"),
            ProfileField::Phone => write!(f, "phone"),
        }
    }
}

/// Whether the profile has been accepted by the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    #[default]
    Draft,
    Submitted,
}
