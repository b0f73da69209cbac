//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `signup_form`: The signup form view

mod field_renderer;
mod signup_form;

pub use signup_form::{draw_signup_form, regions};
