//! Submission handling for validated forms

mod log_target;
mod traits;

pub use log_target::LogSubmitTarget;
pub use traits::{Submission, SubmitTarget};

#[cfg(test)]
pub use traits::MockSubmitTarget;
