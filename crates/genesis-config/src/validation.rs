//! Pluggable settings validation strategies
//!
//! Schema checks run on every load. Filesystem checks are opt-in (the `check`
//! command) since a missing file is otherwise reported by the bundler itself.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::assemble::is_reserved;
use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;

/// Trait for pluggable settings validation strategies
pub trait SettingsValidator {
    fn validate(&self, settings: &ProjectSettings) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use genesis_config::{ProjectSettings, SchemaValidator, SettingsValidator};
///
/// let settings = ProjectSettings::default().with_global("API_URL", "https://api.example.com");
/// SchemaValidator.validate(&settings).unwrap();
/// ```
pub struct SchemaValidator;

impl SettingsValidator for SchemaValidator {
    fn validate(&self, settings: &ProjectSettings) -> Result<()> {
        if settings.main.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "main",
                reason: "entry module name cannot be empty".to_string(),
            });
        }

        if settings.src_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "src_dir",
                reason: "source directory cannot be empty".to_string(),
            });
        }

        if settings.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "out_dir",
                reason: "output directory cannot be empty".to_string(),
            });
        }

        // Reserved constants are computed from the environment
        for name in settings.globals.keys() {
            if is_reserved(name) {
                return Err(ConfigError::ReservedGlobal(name.clone()));
            }
        }

        let mut seen = HashSet::new();
        for vendor in &settings.vendors {
            if vendor.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "vendors",
                    reason: "vendor package names cannot be empty".to_string(),
                });
            }
            if !seen.insert(vendor.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "vendors",
                    reason: format!("`{vendor}` is listed more than once"),
                });
            }
        }

        for (module, global) in &settings.externals {
            if module.trim().is_empty() || global.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "externals",
                    reason: "external module and global names cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator
///
/// Runs the schema checks, then confirms the source directory and the
/// configured template exist under the project root.
pub struct FsValidator;

impl SettingsValidator for FsValidator {
    fn validate(&self, settings: &ProjectSettings) -> Result<()> {
        SchemaValidator.validate(settings)?;

        let src = settings.in_project(&settings.src_dir);
        if !src.is_dir() {
            return Err(ConfigError::NotFound(src));
        }

        if let Some(template) = settings.resolved_template() {
            if !template.is_file() {
                return Err(ConfigError::NotFound(template));
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(settings: &ProjectSettings) -> Result<()> {
    SchemaValidator.validate(settings)
}

/// Convenience function for filesystem validation
pub fn validate_fs(settings: &ProjectSettings) -> Result<()> {
    FsValidator.validate(settings)
}

/// Source files the main bundle could resolve to, for diagnostics.
pub fn main_candidates(settings: &ProjectSettings) -> Vec<PathBuf> {
    let main = settings.in_project_src(&settings.main);
    if main.extension().is_some() {
        return vec![main];
    }
    ["js", "json"]
        .iter()
        .map(|ext| main.with_extension(ext))
        .chain(std::iter::once(main.join("index.js")))
        .collect()
}

/// Whether any candidate for the main module exists on disk.
pub fn main_exists(settings: &ProjectSettings) -> bool {
    main_candidates(settings).iter().any(|path| path.is_file())
}
