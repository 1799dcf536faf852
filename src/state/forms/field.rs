//! Form field value objects

use std::fmt;

/// Identity of a contact form field.
///
/// The `Display` form is the field's wire name as it appears in validation
/// messages ("firstName is a required field").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    /// Whether the field accepts embedded newlines.
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldId::Message)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Message => "message",
        };
        f.write_str(name)
    }
}

/// A single form field with its identity and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
