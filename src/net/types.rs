#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// JSON body POSTed to the email-us endpoint.
///
/// All four fields are always present and whitespace-trimmed; see
/// [`crate::state::fields::FormFields::trimmed`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Envelope the backend returns for both accepted and rejected submissions.
///
/// Rejections carry the same shape over a 400 status, so callers parse the
/// body regardless of the HTTP status code.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub errors: Option<HashMap<String, FieldMessages>>,
}

/// One field's validation messages: the backend sends either a single string
/// or a list of strings, depending on the validator that fired.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    /// Normalizes to a list of messages.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FieldMessages::One(msg) => vec![msg],
            FieldMessages::Many(msgs) => msgs,
        }
    }
}

/// A published contact email address.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// A published contact phone number.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PhoneAddress {
    pub number: String,
    #[serde(default)]
    pub is_primary: bool,
    /// Pre-formatted display form, when the backend provides one.
    #[serde(default)]
    pub international_format: Option<String>,
}

impl PhoneAddress {
    /// The form to display: international format when available, otherwise
    /// the raw number.
    pub fn display(&self) -> &str {
        self.international_format.as_deref().unwrap_or(&self.number)
    }
}
