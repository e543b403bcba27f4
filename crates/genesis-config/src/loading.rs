//! Settings discovery and loading
//!
//! Sources are layered with figment, later ones overriding earlier ones:
//!
//! 1. built-in defaults rooted at the project directory
//! 2. `genesis.toml`
//! 3. `genesis.json` (or an explicit settings file)
//! 4. `NODE_ENV`, mapped onto `env`
//! 5. `GENESIS_*` environment variables (`GENESIS_OUT_DIR`, `GENESIS_ENV`, ...)
//! 6. explicit overrides such as a CLI `--env`

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use tracing::{debug, info};

use crate::environment::Environment;
use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;
use crate::validation::{SchemaValidator, SettingsValidator};

pub const TOML_FILE: &str = "genesis.toml";
pub const JSON_FILE: &str = "genesis.json";
pub const ENV_PREFIX: &str = "GENESIS_";
pub const NODE_ENV: &str = "NODE_ENV";
const GENESIS_ENV: &str = "GENESIS_ENV";

/// Layered settings loader
///
/// # Example
///
/// ```no_run
/// use genesis_config::{Environment, SettingsLoader};
///
/// let settings = SettingsLoader::new(".")
///     .with_env(Environment::Production)
///     .load()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    root: PathBuf,
    file: Option<PathBuf>,
    env: Option<Environment>,
    read_process_env: bool,
}

impl SettingsLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
            env: None,
            read_process_env: true,
        }
    }

    /// Load from this file instead of the conventional ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Force the environment, ignoring every other source for it.
    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Skip `NODE_ENV` and `GENESIS_*` variables.
    pub fn without_process_env(mut self) -> Self {
        self.read_process_env = false;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings files that will be read, in merge order.
    pub fn sources(&self) -> Result<Vec<PathBuf>> {
        if let Some(file) = &self.file {
            let path = self.root.join(file);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path));
            }
            return Ok(vec![path]);
        }

        Ok([TOML_FILE, JSON_FILE]
            .iter()
            .map(|name| self.root.join(name))
            .filter(|path| path.is_file())
            .collect())
    }

    pub fn figment(&self) -> Result<Figment> {
        let mut figment =
            Figment::from(Serialized::defaults(ProjectSettings::defaults_for(&self.root)));

        for path in self.sources()? {
            debug!(path = %path.display(), "merging settings file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => return Err(ConfigError::UnsupportedFormat(path)),
            };
        }

        if self.read_process_env {
            // Exported but empty environment names count as unset
            if !is_blank_var(NODE_ENV) {
                figment = figment.merge(Env::raw().only(&[NODE_ENV]).map(|_| "env".into()));
            }

            let mut prefixed = Env::prefixed(ENV_PREFIX);
            if is_blank_var(GENESIS_ENV) {
                prefixed = prefixed.ignore(&["env"]);
            }
            figment = figment.merge(prefixed);
        }

        if let Some(env) = self.env {
            figment = figment.merge(Serialized::default("env", env));
        }

        Ok(figment)
    }

    /// Load, resolve and validate the settings.
    pub fn load(&self) -> Result<ProjectSettings> {
        let figment = self.figment()?;

        // Checked on its own so a bad name surfaces as UnknownEnvironment
        let env: String = figment.extract_inner("env")?;
        let env: Environment = env.parse()?;

        let mut settings: ProjectSettings = figment.extract()?;
        settings.env = env;
        if settings.base_path.is_relative() {
            settings.base_path = self.root.join(&settings.base_path);
        }
        settings.base_path = settings.in_project("");

        SchemaValidator.validate(&settings)?;
        info!(
            env = %settings.env,
            base = %settings.base_path.display(),
            vendors = settings.vendors.len(),
            "loaded project settings"
        );
        Ok(settings)
    }
}

fn is_blank_var(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|value| value.to_string_lossy().trim().is_empty())
}

/// Load settings for the current directory (convenience function)
pub fn discover() -> Result<ProjectSettings> {
    let root = std::env::current_dir()?;
    SettingsLoader::new(root).load()
}
