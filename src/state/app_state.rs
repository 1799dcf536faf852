//! Application state and form event handling

use super::forms::{ContactForm, FieldId, Form, SubmissionRecord};
use crate::validation::{self, ValidationErrors};

/// Observable views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Inputs visible, validation errors shown inline
    #[default]
    Editing,
    /// Read-only summary of the last successful submission
    Submitted,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: ContactForm,
    pub errors: ValidationErrors,
    pub submission: Option<SubmissionRecord>,
}

impl AppState {
    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Handle character input in the active form field
    ///
    /// The edited field is re-validated immediately, so its error entry
    /// appears or disappears on every keystroke.
    pub fn form_input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        let Some(id) = self.form.active_field_id() else {
            return; // submit row focused
        };
        self.form.field_mut(id).push_char(ch);
        self.revalidate(id);
    }

    /// Handle backspace in the active form field
    pub fn form_backspace(&mut self) {
        let Some(id) = self.form.active_field_id() else {
            return;
        };
        self.form.field_mut(id).pop_char();
        self.revalidate(id);
    }

    /// Re-validate a single field, updating its error entry in place
    fn revalidate(&mut self, id: FieldId) {
        match validation::validate_field(id, self.form.field(id).as_text()) {
            Some(err) => {
                self.errors.insert(id, err);
            }
            None => {
                self.errors.remove(&id);
            }
        }
    }

    /// Validate every field and, if all pass, snapshot a submission.
    ///
    /// On success the view switches to [`View::Submitted`]; field state is
    /// left untouched. On failure the view stays [`View::Editing`] with the
    /// full error map. Returns whether the submission succeeded.
    pub fn submit(&mut self) -> bool {
        let mut errors = ValidationErrors::new();
        for id in FieldId::ALL {
            if let Some(err) = validation::validate_field(id, self.form.field(id).as_text()) {
                errors.insert(id, err);
            }
        }
        self.errors = errors;

        if !self.errors.is_empty() {
            return false;
        }
        self.submission = Some(SubmissionRecord::from_form(&self.form));
        self.current_view = View::Submitted;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;
    use pretty_assertions::assert_eq;

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.form_input_char(c, false);
        }
    }

    fn fill_valid(state: &mut AppState, message: &str) {
        type_str(state, "Johanna");
        state.next_form_field();
        type_str(state, "Rodriguez");
        state.next_form_field();
        type_str(state, "test@test.com");
        state.next_form_field();
        type_str(state, message);
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let state = AppState::default();
            assert_eq!(state.current_view, View::Editing);
            assert!(state.errors.is_empty());
            assert!(state.submission.is_none());
        }

        #[test]
        fn test_short_first_name_yields_one_error() {
            let mut state = AppState::default();
            type_str(&mut state, "Joha");
            assert_eq!(state.errors.len(), 1);
            assert_eq!(
                state.errors[&FieldId::FirstName].to_string(),
                "firstName must have at least 5 characters"
            );
        }

        #[test]
        fn test_error_clears_once_field_becomes_valid() {
            let mut state = AppState::default();
            type_str(&mut state, "Joha");
            assert_eq!(state.errors.len(), 1);
            state.form_input_char('n', false);
            assert!(state.errors.is_empty());
        }

        #[test]
        fn test_backspace_to_empty_yields_required_error() {
            let mut state = AppState::default();
            type_str(&mut state, "J");
            state.form_backspace();
            assert_eq!(
                state.errors[&FieldId::FirstName],
                FieldError::Required(FieldId::FirstName)
            );
        }

        #[test]
        fn test_invalid_email_yields_one_error() {
            let mut state = AppState::default();
            type_str(&mut state, "Johanna");
            state.next_form_field();
            type_str(&mut state, "Rodriguez");
            state.next_form_field();
            type_str(&mut state, "t");
            assert_eq!(state.errors.len(), 1);
            assert_eq!(
                state.errors[&FieldId::Email].to_string(),
                "email must be a valid email address."
            );
        }

        #[test]
        fn test_input_on_submit_row_is_ignored() {
            let mut state = AppState::default();
            state.form.set_active_field(4);
            state.form_input_char('x', false);
            state.form_backspace();
            assert_eq!(state.form.first_name.as_text(), "");
            assert!(state.errors.is_empty());
        }

        #[test]
        fn test_shift_uppercases_input() {
            let mut state = AppState::default();
            state.form_input_char('j', true);
            assert_eq!(state.form.first_name.as_text(), "J");
        }

        #[test]
        fn test_revalidating_valid_field_adds_no_errors() {
            let mut state = AppState::default();
            type_str(&mut state, "Johanna");
            let before = state.errors.clone();
            state.form_input_char('a', false);
            state.form_backspace();
            assert_eq!(state.errors, before);
            assert!(state.errors.is_empty());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_yields_three_errors() {
            let mut state = AppState::default();
            assert!(!state.submit());
            assert_eq!(state.errors.len(), 3);
            assert!(state.errors.contains_key(&FieldId::FirstName));
            assert!(state.errors.contains_key(&FieldId::LastName));
            assert!(state.errors.contains_key(&FieldId::Email));
            assert!(!state.errors.contains_key(&FieldId::Message));
            assert_eq!(state.current_view, View::Editing);
            assert!(state.submission.is_none());
        }

        #[test]
        fn test_missing_last_name_error_message() {
            let mut state = AppState::default();
            state.submit();
            assert_eq!(
                state.errors[&FieldId::LastName].to_string(),
                "lastName is a required field"
            );
        }

        #[test]
        fn test_successful_submit_snapshots_and_switches_view() {
            let mut state = AppState::default();
            fill_valid(&mut state, "");
            assert!(state.submit());
            assert_eq!(state.current_view, View::Submitted);
            assert!(state.errors.is_empty());

            let record = state.submission.as_ref().unwrap();
            assert_eq!(record.first_name, "Johanna");
            assert_eq!(record.last_name, "Rodriguez");
            assert_eq!(record.email, "test@test.com");
            assert_eq!(record.message_display(), None);
        }

        #[test]
        fn test_submit_does_not_clear_fields() {
            let mut state = AppState::default();
            fill_valid(&mut state, "this is a test");
            state.submit();
            assert_eq!(state.form.first_name.as_text(), "Johanna");
            assert_eq!(state.form.message.as_text(), "this is a test");
        }

        #[test]
        fn test_resubmission_overwrites_record() {
            let mut state = AppState::default();
            fill_valid(&mut state, "");
            assert!(state.submit());

            state.form.set_active_field(3);
            type_str(&mut state, "this is a test");
            assert!(state.submit());
            assert_eq!(
                state.submission.as_ref().unwrap().message_display(),
                Some("this is a test")
            );
        }

        #[test]
        fn test_failed_submit_replaces_stale_errors() {
            let mut state = AppState::default();
            type_str(&mut state, "Joha");
            assert_eq!(state.errors.len(), 1);
            assert!(!state.submit());
            // Full pass now reports every invalid field
            assert_eq!(state.errors.len(), 3);
        }
    }
}
