//! Field validation rules for the contact form
//!
//! Each field has a fixed rule applied in two steps: required presence
//! first, then format. A field contributes at most one error per pass.

use crate::state::FieldId;
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum character count for the first name once it is non-empty.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field is empty
    #[error("{0} is a required field")]
    Required(FieldId),
    /// Non-empty value is shorter than the field's minimum length
    #[error("{field} must have at least {min} characters")]
    TooShort { field: FieldId, min: usize },
    /// Non-empty value does not look like an email address
    #[error("{0} must be a valid email address.")]
    InvalidEmail(FieldId),
}

/// Ordered map of invalid fields to their single surfaced error.
///
/// An entry exists iff the field's current value violates its rule.
pub type ValidationErrors = BTreeMap<FieldId, FieldError>;

/// Validate a single field value against its rule.
///
/// Returns `None` when the value satisfies the rule. Presence is checked
/// before format, so an empty required field yields only the required error.
pub fn validate_field(id: FieldId, value: &str) -> Option<FieldError> {
    match id {
        FieldId::FirstName => {
            if value.is_empty() {
                Some(FieldError::Required(id))
            } else if value.chars().count() < FIRST_NAME_MIN_LEN {
                Some(FieldError::TooShort {
                    field: id,
                    min: FIRST_NAME_MIN_LEN,
                })
            } else {
                None
            }
        }
        FieldId::LastName => {
            if value.is_empty() {
                Some(FieldError::Required(id))
            } else {
                None
            }
        }
        FieldId::Email => {
            if value.is_empty() {
                Some(FieldError::Required(id))
            } else if !is_valid_email(value) {
                Some(FieldError::InvalidEmail(id))
            } else {
                None
            }
        }
        // Message is optional and unconstrained
        FieldId::Message => None,
    }
}

/// Check that a value has the shape of an email address.
///
/// Exactly one `@`, a non-empty local part, and a domain made of at least
/// two non-empty dot-separated labels. No whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let first = labels.next().unwrap_or_default();
    let mut rest = labels.peekable();
    if first.is_empty() || rest.peek().is_none() {
        return false;
    }
    rest.all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod first_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required_error() {
            let err = validate_field(FieldId::FirstName, "").unwrap();
            assert_eq!(err, FieldError::Required(FieldId::FirstName));
            assert_eq!(err.to_string(), "firstName is a required field");
        }

        #[test]
        fn test_short_value_is_length_error() {
            let err = validate_field(FieldId::FirstName, "Joha").unwrap();
            assert_eq!(
                err.to_string(),
                "firstName must have at least 5 characters"
            );
        }

        #[test]
        fn test_presence_checked_before_length() {
            // Empty also fails the length rule, but only the required
            // error is surfaced.
            let err = validate_field(FieldId::FirstName, "").unwrap();
            assert!(matches!(err, FieldError::Required(_)));
        }

        #[test]
        fn test_five_chars_is_valid() {
            assert_eq!(validate_field(FieldId::FirstName, "Johan"), None);
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            assert_eq!(validate_field(FieldId::FirstName, "Øyvin"), None);
        }
    }

    mod last_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required_error() {
            let err = validate_field(FieldId::LastName, "").unwrap();
            assert_eq!(err.to_string(), "lastName is a required field");
        }

        #[test]
        fn test_single_char_is_valid() {
            assert_eq!(validate_field(FieldId::LastName, "R"), None);
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required_error() {
            let err = validate_field(FieldId::Email, "").unwrap();
            assert_eq!(err.to_string(), "email is a required field");
        }

        #[test]
        fn test_invalid_shape_is_format_error() {
            let err = validate_field(FieldId::Email, "t").unwrap();
            assert_eq!(err.to_string(), "email must be a valid email address.");
        }

        #[test]
        fn test_valid_email_passes() {
            assert_eq!(validate_field(FieldId::Email, "test@test.com"), None);
        }

        #[test]
        fn test_rejected_shapes() {
            for value in [
                "@test.com",
                "test@",
                "test@com",
                "test@.com",
                "test@test.",
                "a b@test.com",
                "a@b@test.com",
            ] {
                assert!(
                    validate_field(FieldId::Email, value).is_some(),
                    "expected {value:?} to be rejected"
                );
            }
        }

        #[test]
        fn test_accepted_shapes() {
            for value in ["a@b.co", "first.last@sub.example.org"] {
                assert_eq!(validate_field(FieldId::Email, value), None);
            }
        }
    }

    mod message {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_valid() {
            assert_eq!(validate_field(FieldId::Message, ""), None);
        }

        #[test]
        fn test_any_text_is_valid() {
            assert_eq!(validate_field(FieldId::Message, "this is a test"), None);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        // Re-validating an unchanged value yields the same outcome.
        let first = validate_field(FieldId::FirstName, "Johanna");
        let second = validate_field(FieldId::FirstName, "Johanna");
        assert_eq!(first, second);
        assert_eq!(first, None);
    }
}
