//! Signup form validation core
//!
//! Pure, stateless rules that map a field's current text to a verdict,
//! plus the form-level aggregate gate used on submission. Rendering and
//! indicator updates happen on the other side of [`ValidationObserver`].

mod error;
mod field;
mod form;
mod observer;
mod rules;

pub use error::ValidationFailure;
pub use field::{FieldName, FormValues};
pub use form::{
    check_field, validate_all, validate_all_with, validate_field, validate_report,
    ValidationReport, ValidationResult,
};
pub use observer::{FieldBindings, InputHandle, ValidationObserver};
pub use rules::{
    validate_age, validate_confirm_password, validate_email, validate_name, validate_password,
    validate_phone,
};

#[cfg(test)]
pub use observer::MockValidationObserver;
