//! Form state management

use super::field::FormField;
use crate::validation::{
    validate_all_with, validate_report, FieldBindings, FieldName, FormValues, ValidationReport,
};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on the form's last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Reset,
    Submit,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Reset, FormButton::Submit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Submit => "Submit",
        }
    }
}

/// The signup form: six inputs followed by a button row
#[derive(Debug, Clone)]
pub struct SignupForm {
    /// One entry per [`FieldName`], in form order
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl SignupForm {
    /// Index of the buttons row
    pub const BUTTONS_ROW: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(FormField::new).collect(),
            active_field_index: 0,
            selected_button: FormButton::Submit,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Toggle between the two buttons
    pub fn next_button(&mut self) {
        self.selected_button = match self.selected_button {
            FormButton::Reset => FormButton::Submit,
            FormButton::Submit => FormButton::Reset,
        };
    }

    pub fn prev_button(&mut self) {
        self.next_button();
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[name.index()]
    }

    /// The field under the cursor, or `None` on the buttons row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Focus a specific field
    pub fn focus(&mut self, name: FieldName) {
        self.active_field_index = name.index();
    }

    /// Focus a button on the buttons row
    pub fn focus_button(&mut self, button: FormButton) {
        self.active_field_index = Self::BUTTONS_ROW;
        self.selected_button = button;
    }

    /// Bind every input for validation
    pub fn bindings(&mut self) -> FieldBindings<'_> {
        let mut bindings = FieldBindings::new();
        for field in self.fields.iter_mut() {
            bindings.bind(field);
        }
        bindings
    }

    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for field in &self.fields {
            values.set(field.name, field.value.as_str());
        }
        values
    }

    /// Type a character into the active field and re-validate it.
    ///
    /// Returns the edited field, or `None` when the buttons row is active.
    pub fn input_char(&mut self, c: char) -> Option<FieldName> {
        let name = self.active_field_name()?;
        self.field_mut(name).push_char(c);
        self.revalidate_after_edit(name);
        Some(name)
    }

    /// Delete the last character of the active field and re-validate it
    pub fn backspace(&mut self) -> Option<FieldName> {
        let name = self.active_field_name()?;
        self.field_mut(name).pop_char();
        self.revalidate_after_edit(name);
        Some(name)
    }

    /// Re-validate an edited field. A password edit also refreshes the
    /// confirmation once that field has been validated before.
    fn revalidate_after_edit(&mut self, name: FieldName) {
        let confirm_touched = self.field(FieldName::ConfirmPassword).is_touched();
        let mut bindings = self.bindings();
        bindings.validate(name);
        if name == FieldName::Password && confirm_touched {
            bindings.validate(FieldName::ConfirmPassword);
        }
    }

    /// Validate every field, updating all indicators; returns the aggregate gate
    pub fn validate_all(&mut self) -> bool {
        let values = self.values();
        let mut bindings = self.bindings();
        validate_all_with(&values, &mut bindings)
    }

    /// Per-field verdicts without touching any indicator
    pub fn report(&self) -> ValidationReport {
        validate_report(&self.values())
    }

    /// Clear every value and indicator and go back to the first field
    pub fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::Submit;
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1 // six inputs, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
