//! Command-line interface definition.
//!
//! - `genesis print` - Assemble the build config and write it as JSON
//! - `genesis settings` - Show the resolved project settings
//! - `genesis check` - Validate settings and summarize the build

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use genesis_config::{Environment, SettingsLoader};

/// Genesis - bundler configuration for Genesis applications
#[derive(Parser, Debug)]
#[command(
    name = "genesis",
    version,
    about = "Assemble bundler configuration for a Genesis application",
    long_about = "Reads project settings (genesis.toml, genesis.json, NODE_ENV and GENESIS_*\n\
                  variables) and assembles the build configuration consumed by the bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the build configuration and print it as JSON
    Print(PrintArgs),

    /// Print the resolved project settings as JSON
    Settings(SettingsArgs),

    /// Validate the project and summarize the assembled build
    Check(CheckArgs),
}

/// Where settings are loaded from.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Settings file (relative to the root), instead of genesis.toml/genesis.json
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Build environment, overriding NODE_ENV
    #[arg(short, long, value_parser = parse_environment)]
    pub env: Option<Environment>,
}

impl SettingsArgs {
    pub fn loader(&self) -> SettingsLoader {
        let mut loader = SettingsLoader::new(&self.root);
        if let Some(config) = &self.config {
            loader = loader.with_file(config);
        }
        if let Some(env) = self.env {
            loader = loader.with_env(env);
        }
        loader
    }
}

#[derive(Args, Debug, Clone)]
pub struct PrintArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Write the configuration to this file (relative to the root) instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Skip checks that touch the filesystem
    #[arg(long)]
    pub no_fs: bool,
}

/// Parse an environment name for `--env`.
pub fn parse_environment(value: &str) -> Result<Environment, String> {
    value.parse().map_err(|err: genesis_config::ConfigError| err.to_string())
}
