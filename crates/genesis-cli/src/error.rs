//! CLI error types and their miette rendering.

use std::path::PathBuf;

use genesis_config::ConfigError;
use miette::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the assembled configuration failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CLI error into a miette report with a hint where one helps.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::UnknownEnvironment(name)) => miette::miette!(
            help = "Set NODE_ENV or --env to development, staging, test or production",
            "Unknown environment `{}`",
            name
        ),
        CliError::Config(ConfigError::ReservedGlobal(name)) => miette::miette!(
            help = "Rename the global; __DEV__, __STAGING__, __TEST__, __PROD__ and process.env are derived from the environment",
            "Global `{}` is reserved",
            name
        ),
        CliError::Config(ConfigError::NotFound(path)) => miette::miette!(
            help = "Check --root and --config, or create the missing file",
            "Not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
