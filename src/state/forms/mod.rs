//! Form domain layer
//!
//! Type-safe field, form, and submission-snapshot handling for the
//! contact form.

mod contact_form;
mod field;
mod submission;

pub use contact_form::{ContactForm, Form};
pub use field::{FieldId, FormField};
pub use submission::SubmissionRecord;
