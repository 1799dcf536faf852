//! Application core: key event routing and submission

use crate::config::TuiConfig;
use crate::state::{AppState, FieldId, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application
pub struct App {
    pub state: AppState,
    pub config: TuiConfig,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let config = match TuiConfig::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to load config, using defaults: {err:#}");
                TuiConfig::default()
            }
        };
        Self {
            state: AppState::default(),
            config,
            should_quit: false,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key event based on the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Editing => self.handle_form_key(key),
            View::Submitted => self.handle_summary_key(key),
        }
        Ok(())
    }

    /// Handle keys in the Editing view
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form();
            }
            KeyCode::Enter if on_submit_row => {
                self.submit_form();
            }
            KeyCode::Esc => self.should_quit = true,
            // Form field input (only when not on the submit row)
            KeyCode::Char(c) if !on_submit_row => self
                .state
                .form_input_char(c, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Backspace if !on_submit_row => self.state.form_backspace(),
            KeyCode::Enter if !on_submit_row => {
                // Enter in the message field adds a newline
                if self.state.form.active_field_id() == Some(FieldId::Message) {
                    self.state.form_input_char('\n', false);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in the Submitted view
    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Validate all fields and submit
    fn submit_form(&mut self) {
        if self.state.submit() {
            if let Some(record) = &self.state.submission {
                tracing::info!(email = %record.email, "Form submitted");
            }
        } else {
            tracing::debug!(
                invalid_fields = self.state.errors.len(),
                "Submission rejected"
            );
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
