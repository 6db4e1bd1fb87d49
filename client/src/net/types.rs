//! Wire types for the external contact-form service.
//!
//! DESIGN
//! ======
//! The service accepts a flat JSON record and answers either `{"ok": true}`
//! or a list of field-level errors. Unknown response fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The record posted to the form service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

/// One validation message from the service. An empty `field` means the
/// message applies to the whole form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What came back from a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// The service rejected specific fields.
    Rejected(Vec<FieldError>),
    /// Transport failure or an unreadable answer.
    Failed(String),
}

/// Trimmed value, or `None` when nothing was entered.
pub fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
