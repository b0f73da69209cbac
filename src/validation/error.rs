//! Validation error type

use super::field::FieldName;
use thiserror::Error;

/// A field whose current value does not satisfy its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {}", .field.hint())]
pub struct ValidationFailure {
    pub field: FieldName,
}

impl ValidationFailure {
    pub fn new(field: FieldName) -> Self {
        Self { field }
    }
}
