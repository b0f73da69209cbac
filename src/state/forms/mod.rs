//! Form domain layer
//!
//! Input fields, their validation indicators and the signup form that
//! binds them to the validation core.

mod field;
mod form_state;

pub use field::{FieldMark, FormField};
pub use form_state::{Form, FormButton, SignupForm};
