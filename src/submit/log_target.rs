//! Default submission target

use super::traits::{Submission, SubmitTarget};
use anyhow::Result;
use async_trait::async_trait;

/// Accepts every submission and records it in the log
#[derive(Debug, Default)]
pub struct LogSubmitTarget {
    accepted: usize,
}

impl LogSubmitTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions accepted so far
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

#[async_trait]
impl SubmitTarget for LogSubmitTarget {
    async fn submit(&mut self, submission: &Submission) -> Result<()> {
        self.accepted += 1;
        let payload = serde_json::to_string(submission)?;
        tracing::info!(count = self.accepted, %payload, "Form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldName, FormValues};

    #[tokio::test]
    async fn test_counts_accepted_submissions() {
        let mut target = LogSubmitTarget::new();
        let submission = Submission::from_values(
            &FormValues::default().with(FieldName::FullName, "Ada Lovelace"),
        );

        target.submit(&submission).await.unwrap();
        target.submit(&submission).await.unwrap();

        assert_eq!(target.accepted(), 2);
    }

    #[test]
    fn test_submit_with_block_on() {
        let mut target = LogSubmitTarget::new();
        let submission = Submission::from_values(&FormValues::default());
        tokio_test::block_on(target.submit(&submission)).unwrap();
        assert_eq!(target.accepted(), 1);
    }
}
