//! Error types for settings loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "unknown environment `{0}` (expected one of: development, staging, test, production)"
    )]
    UnknownEnvironment(String),

    #[error("global `{0}` is reserved and cannot be overridden")]
    ReservedGlobal(String),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported settings format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to load settings: {0}")]
    Load(Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}
