//! Genesis CLI - assemble bundler configuration for Genesis applications.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `print`, `settings` and `check`
//! - [`error`] - Error types and miette rendering
//! - [`logger`] - Structured logging with tracing

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
