//! Submitted form snapshot

use super::contact_form::ContactForm;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable snapshot of the form values captured at submission time.
///
/// Created only when every required field passed validation; each later
/// successful submission replaces the whole record.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Snapshot the current field values
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            first_name: form.first_name.as_text().to_string(),
            last_name: form.last_name.as_text().to_string(),
            email: form.email.as_text().to_string(),
            message: form.message.as_text().to_string(),
            submitted_at: Utc::now(),
        }
    }

    /// The message text to display in the summary.
    ///
    /// Returns `None` when the submitted message was empty, in which case
    /// the summary renders no message line at all.
    pub fn message_display(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }
}
