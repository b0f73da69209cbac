//! Trait abstraction for submission targets to enable mocking in tests

use crate::validation::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// A form that passed the aggregate gate
#[derive(Clone, Serialize)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    /// `None` when the optional phone field was left empty
    pub phone: Option<String>,
    pub age: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Submission {
    /// Build a submission from trimmed field values. The password is kept as typed.
    pub fn from_values(values: &FormValues) -> Self {
        let phone = values.phone.trim();
        Self {
            full_name: values.full_name.trim().to_string(),
            email: values.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            age: values.age.trim().to_string(),
            password: values.password.clone(),
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("age", &self.age)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Receiver of accepted submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTarget: Send + Sync {
    /// Hand over a submission that passed validation
    async fn submit(&mut self, submission: &Submission) -> Result<()>;
}
