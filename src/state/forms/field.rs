//! Form field value objects

use crate::validation::{FieldName, InputHandle};

/// Indicator state of a field after its last validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    /// Never validated
    #[default]
    Untouched,
    Error,
    Success,
}

/// Represents a single form input with its current text and indicator
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: String,
    pub mark: FieldMark,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            value: String::new(),
            mark: FieldMark::Untouched,
        }
    }

    /// Create a field with an initial value
    #[cfg(test)]
    pub fn with_value(name: FieldName, value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::new(name)
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and the indicator
    pub fn clear(&mut self) {
        self.value.clear();
        self.mark = FieldMark::Untouched;
    }

    pub fn is_errored(&self) -> bool {
        self.mark == FieldMark::Error
    }

    pub fn is_touched(&self) -> bool {
        self.mark != FieldMark::Untouched
    }

    /// Get the display value for rendering (secrets are masked)
    pub fn display_value(&self) -> String {
        if self.name.is_secret() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Inline hint, present only while the field is errored
    pub fn error_hint(&self) -> Option<&'static str> {
        self.is_errored().then(|| self.name.hint())
    }
}

impl InputHandle for FormField {
    fn field(&self) -> FieldName {
        self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_verdict(&mut self, is_valid: bool) {
        self.mark = if is_valid {
            FieldMark::Success
        } else {
            FieldMark::Error
        };
    }
}
