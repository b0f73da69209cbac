//! Seams between the validation core and whatever renders the inputs

use super::field::{FieldName, FormValues};
use super::form::{validate_field, ValidationResult};
use std::collections::BTreeMap;

/// Receives every verdict produced by a validation pass
#[cfg_attr(test, mockall::automock)]
pub trait ValidationObserver {
    fn on_verdict(&mut self, result: &ValidationResult);
}

/// One rendered input, as seen by the validation layer
pub trait InputHandle {
    fn field(&self) -> FieldName;
    fn value(&self) -> &str;
    /// Show (`false`) or clear (`true`) the inline error indicator
    fn set_verdict(&mut self, is_valid: bool);
}

/// Mapping from logical field to the input that currently renders it
#[derive(Default)]
pub struct FieldBindings<'a> {
    handles: BTreeMap<FieldName, &'a mut dyn InputHandle>,
}

impl<'a> FieldBindings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handle under its own field name, replacing any previous one
    pub fn bind(&mut self, handle: &'a mut dyn InputHandle) {
        self.handles.insert(handle.field(), handle);
    }

    pub fn is_bound(&self, field: FieldName) -> bool {
        self.handles.contains_key(&field)
    }

    /// Snapshot the bound inputs; unbound fields read as empty
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for (field, handle) in &self.handles {
            values.set(*field, handle.value());
        }
        values
    }

    /// Validate one field against the current snapshot and update its indicator
    pub fn validate(&mut self, field: FieldName) -> bool {
        let result = validate_field(field, &self.values());
        self.on_verdict(&result);
        result.is_valid
    }
}

impl ValidationObserver for FieldBindings<'_> {
    fn on_verdict(&mut self, result: &ValidationResult) {
        if let Some(handle) = self.handles.get_mut(&result.field) {
            handle.set_verdict(result.is_valid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_all_with;

    struct StubInput {
        field: FieldName,
        value: String,
        verdict: Option<bool>,
    }

    impl StubInput {
        fn new(field: FieldName, value: &str) -> Self {
            Self {
                field,
                value: value.to_string(),
                verdict: None,
            }
        }
    }

    impl InputHandle for StubInput {
        fn field(&self) -> FieldName {
            self.field
        }
        fn value(&self) -> &str {
            &self.value
        }
        fn set_verdict(&mut self, is_valid: bool) {
            self.verdict = Some(is_valid);
        }
    }

    #[test]
    fn test_values_reads_bound_inputs() {
        let mut name = StubInput::new(FieldName::FullName, "Ada Lovelace");
        let mut age = StubInput::new(FieldName::Age, "36");
        let mut bindings = FieldBindings::new();
        bindings.bind(&mut name);
        bindings.bind(&mut age);

        let values = bindings.values();
        assert_eq!(values.full_name, "Ada Lovelace");
        assert_eq!(values.age, "36");
        assert_eq!(values.email, "");
        assert!(bindings.is_bound(FieldName::Age));
        assert!(!bindings.is_bound(FieldName::Email));
    }

    #[test]
    fn test_validate_marks_only_target_field() {
        let mut name = StubInput::new(FieldName::FullName, "Ada");
        let mut email = StubInput::new(FieldName::Email, "ada@example.com");
        {
            let mut bindings = FieldBindings::new();
            bindings.bind(&mut name);
            bindings.bind(&mut email);
            assert!(!bindings.validate(FieldName::FullName));
        }
        assert_eq!(name.verdict, Some(false));
        assert_eq!(email.verdict, None);
    }

    #[test]
    fn test_confirm_reads_sibling_password() {
        let mut password = StubInput::new(FieldName::Password, "Abcdefg1");
        let mut confirm = StubInput::new(FieldName::ConfirmPassword, "Abcdefg1");
        {
            let mut bindings = FieldBindings::new();
            bindings.bind(&mut password);
            bindings.bind(&mut confirm);
            assert!(bindings.validate(FieldName::ConfirmPassword));
        }
        assert_eq!(confirm.verdict, Some(true));
    }

    #[test]
    fn test_validate_all_with_bindings_updates_every_input() {
        let mut inputs: Vec<StubInput> = vec![
            StubInput::new(FieldName::FullName, "Ada Lovelace"),
            StubInput::new(FieldName::Email, "not-an-email"),
            StubInput::new(FieldName::Phone, ""),
            StubInput::new(FieldName::Age, "36"),
            StubInput::new(FieldName::Password, "Abcdefg1"),
            StubInput::new(FieldName::ConfirmPassword, "Abcdefg1"),
        ];
        {
            let mut bindings = FieldBindings::new();
            for input in inputs.iter_mut() {
                bindings.bind(input);
            }
            let values = bindings.values();
            assert!(!validate_all_with(&values, &mut bindings));
        }

        let verdicts: Vec<_> = inputs.iter().map(|i| i.verdict).collect();
        assert_eq!(
            verdicts,
            vec![
                Some(true),
                Some(false),
                Some(true),
                Some(true),
                Some(true),
                Some(true)
            ]
        );
    }

    #[test]
    fn test_unbound_verdict_is_ignored() {
        let mut bindings = FieldBindings::new();
        bindings.on_verdict(&ValidationResult {
            is_valid: false,
            field: FieldName::Phone,
        });
        assert!(!bindings.is_bound(FieldName::Phone));
    }
}
