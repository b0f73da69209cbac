//! Form-level validation and the aggregate submission gate

use super::error::ValidationFailure;
use super::field::{FieldName, FormValues};
use super::observer::ValidationObserver;
use super::rules;

/// Verdict for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub field: FieldName,
}

impl ValidationResult {
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationFailure::new(self.field))
        }
    }
}

/// Verdicts for every field from one validation pass, in form order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// The aggregate gate
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid)
    }

    pub fn failures(&self) -> Vec<ValidationFailure> {
        self.results
            .iter()
            .filter(|r| !r.is_valid)
            .map(|r| ValidationFailure::new(r.field))
            .collect()
    }

    pub fn verdict(&self, field: FieldName) -> Option<bool> {
        self.results
            .iter()
            .find(|r| r.field == field)
            .map(|r| r.is_valid)
    }
}

/// Validate one field against the current snapshot
pub fn validate_field(field: FieldName, values: &FormValues) -> ValidationResult {
    let value = values.get(field);
    let is_valid = match field {
        FieldName::FullName => rules::validate_name(value),
        FieldName::Email => rules::validate_email(value),
        FieldName::Phone => rules::validate_phone(value),
        FieldName::Age => rules::validate_age(value),
        FieldName::Password => rules::validate_password(value),
        FieldName::ConfirmPassword => {
            rules::validate_confirm_password(&values.password, &values.confirm_password)
        }
    };

    tracing::debug!(field = %field, is_valid, "Validated field");

    ValidationResult { is_valid, field }
}

pub fn check_field(field: FieldName, values: &FormValues) -> Result<(), ValidationFailure> {
    validate_field(field, values).into_result()
}

pub fn validate_report(values: &FormValues) -> ValidationReport {
    ValidationReport {
        results: FieldName::ALL
            .into_iter()
            .map(|field| validate_field(field, values))
            .collect(),
    }
}

/// True iff every field passes
pub fn validate_all(values: &FormValues) -> bool {
    validate_report(values).is_valid()
}

/// Validate every field, reporting each verdict to `observer`.
///
/// Does not short-circuit: all indicators are refreshed even after the
/// first failure.
pub fn validate_all_with(values: &FormValues, observer: &mut dyn ValidationObserver) -> bool {
    let report = validate_report(values);
    for result in &report.results {
        observer.on_verdict(result);
    }
    report.is_valid()
}
