//! Configuration assembly.
//!
//! A [`BuildConfig`] is produced by folding the [`STEPS`] table over the
//! [`base`] configuration. Every step takes the configuration by value and
//! returns the extended one; none of them share state, so each can be run and
//! inspected on its own.
//!
//! # Example
//!
//! ```
//! use genesis_config::{assemble, Environment, ProjectSettings, HASHED_FILENAME};
//!
//! let settings = ProjectSettings::defaults_for("/app").with_env(Environment::Production);
//! let config = assemble(&settings);
//!
//! assert_eq!(config.output.filename, HASHED_FILENAME);
//! assert!(config.entry.contains_key("vendor"));
//! ```

mod base;
mod chunks;
mod define;
mod html;
mod optimize;
mod scripts;
mod styles;

use tracing::debug;

use crate::build::BuildConfig;
use crate::environment::{EnvFlags, Environment};
use crate::settings::ProjectSettings;

pub use base::{ASSET_PATTERN, VENDOR_DIR_PATTERN, base};
pub use chunks::commons_chunks;
pub use define::{PROCESS_ENV, define_globals};
pub(crate) use define::is_reserved;
pub use html::html_template;
pub use optimize::optimize;
pub use scripts::{SCRIPT_PATTERN, script_rule};
pub use styles::{STYLE_PATTERN, style_rule};

/// Inputs shared by every assembly step.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub settings: &'a ProjectSettings,
    pub flags: EnvFlags,
}

impl<'a> Context<'a> {
    pub fn new(settings: &'a ProjectSettings) -> Self {
        Self {
            settings,
            flags: settings.env.flags(),
        }
    }

    pub fn env(&self) -> Environment {
        self.settings.env
    }
}

/// One assembly step.
pub type Step = fn(BuildConfig, &Context<'_>) -> BuildConfig;

/// Steps applied after [`base`], in order. Rule order matters to the bundler.
pub const STEPS: [(&str, Step); 6] = [
    ("define_globals", define_globals),
    ("script_rule", script_rule),
    ("style_rule", style_rule),
    ("html_template", html_template),
    ("commons_chunks", commons_chunks),
    ("optimize", optimize),
];

pub struct Assembler<'a> {
    ctx: Context<'a>,
}

impl<'a> Assembler<'a> {
    pub fn new(settings: &'a ProjectSettings) -> Self {
        Self {
            ctx: Context::new(settings),
        }
    }

    pub fn context(&self) -> &Context<'a> {
        &self.ctx
    }

    pub fn assemble(&self) -> BuildConfig {
        let env = self.ctx.env();
        debug!(%env, base = %self.ctx.settings.base_path.display(), "assembling build config");

        STEPS
            .iter()
            .fold(base(&self.ctx), |config, (name, step)| {
                let config = step(config, &self.ctx);
                debug!(
                    step = name,
                    rules = config.module.rules.len(),
                    plugins = config.plugins.len(),
                    "applied assembly step"
                );
                config
            })
    }
}

/// Assemble the build configuration for `settings`.
pub fn assemble(settings: &ProjectSettings) -> BuildConfig {
    Assembler::new(settings).assemble()
}
