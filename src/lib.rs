//! regdash - terminal admin dashboard for event registrations.
//!
//! Provides:
//! - `model` - registration records and wire-schema validation
//! - `provider` - record sources (HTTP store, static fixtures)
//! - `view` - the pure projection pipeline and table view models
//! - `session` - load lifecycle with in-flight guard
//! - `tui` - interactive ratatui dashboard
//! - `config`, `logging`, `fmt`, `util` - shared plumbing

pub mod config;
pub mod fmt;
pub mod logging;
pub mod model;
pub mod provider;
pub mod session;
pub mod tui;
pub mod util;
pub mod view;
