//! Contact form state: the draft, submission status, and service errors.
//!
//! DESIGN
//! ======
//! The form never validates locally. It moves `Editing -> Submitting` when
//! the user sends, and the service's answer decides between `Succeeded` and
//! back to `Editing` with the returned messages attached.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use crate::net::types::{ContactRecord, FieldError, SubmitOutcome, optional_field};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// Input fields, keyed by the names the form service reports errors under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Service,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

/// Raw text as typed, before optional fields are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields are sent as typed; blank optionals are omitted.
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            company: optional_field(&self.company),
            service: optional_field(&self.service),
            message: self.message.clone(),
        }
    }
}

/// Service messages grouped by field name. `""` holds form-level messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for err in errors {
            by_field.entry(err.field).or_default().push(err.message);
        }
        Self { by_field }
    }

    pub fn form_level(message: String) -> Self {
        Self::from_errors(vec![FieldError { field: String::new(), message }])
    }

    pub fn for_field(&self, field: Field) -> &[String] {
        self.by_field.get(field.key()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Messages not tied to an input this form renders.
    pub fn general(&self) -> Vec<&str> {
        self.by_field
            .iter()
            .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

const KNOWN_FIELDS: [&str; 5] = ["name", "email", "company", "service", "message"];

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: SubmissionStatus,
    pub errors: FieldErrors,
}

impl ContactForm {
    /// Edit a field. Ignored while a submission is in flight.
    pub fn set(&mut self, field: Field, value: String) {
        if self.status == SubmissionStatus::Submitting {
            return;
        }
        *self.draft.slot(field) = value;
    }

    /// Start a submission, returning the record to send.
    ///
    /// Returns `None` unless the form is `Editing`, so double clicks and
    /// resubmits after success are dropped.
    pub fn begin_submit(&mut self) -> Option<ContactRecord> {
        if self.status != SubmissionStatus::Editing {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.errors = FieldErrors::default();
        Some(self.draft.to_record())
    }

    /// Apply the service's answer to an in-flight submission.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match outcome {
            SubmitOutcome::Accepted => {
                self.status = SubmissionStatus::Succeeded;
            }
            SubmitOutcome::Rejected(errors) => {
                self.status = SubmissionStatus::Editing;
                self.errors = FieldErrors::from_errors(errors);
            }
            SubmitOutcome::Failed(message) => {
                self.status = SubmissionStatus::Editing;
                self.errors = FieldErrors::form_level(message);
            }
        }
    }

    /// Clear everything for another message.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}
