//! Signup TUI - a terminal playground for UI events and live form validation
//!
//! The [`validation`] module is the framework-independent core: pure rules
//! for each signup field and the aggregate gate used on submission. The
//! remaining modules wire it into a Ratatui interface.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod submit;
pub mod ui;
pub mod validation;
