//! Landing page TUI with a validated contact form.
//!
//! The form core lives in [`state::forms`]: fields carry ordered rules,
//! [`state::forms::validate`] reports the first failing rule per field, and
//! [`state::forms::FormSubmitter`] runs the simulated
//! `Idle -> Submitting -> Succeeded` submission. Everything else is the
//! terminal front end around it.

pub mod app;
pub mod config;
pub mod logging;
pub mod platform;
pub mod state;
pub mod ui;
