//! Project settings and bundler configuration assembly for Genesis applications.
//!
//! [`ProjectSettings`] describe a project: where sources live, which
//! environment is being built, which packages go in the vendor bundle.
//! [`assemble`] turns them into a [`BuildConfig`], the declarative description
//! an external bundler engine consumes to compile, extract and minify the app.
//!
//! ```
//! use genesis_config::{assemble, Plugin, ProjectSettings, STABLE_FILENAME};
//!
//! let settings = ProjectSettings::defaults_for("/app").with_vendors(Vec::<String>::new());
//! let config = assemble(&settings);
//!
//! assert_eq!(config.output.filename, STABLE_FILENAME);
//! assert!(!config.has_plugin(Plugin::UGLIFY));
//! ```

pub mod assemble;
pub mod build;
pub mod environment;
pub mod error;
pub mod loading;
pub mod settings;
pub mod validation;

pub use assemble::{Assembler, Context, STEPS, Step, assemble};
pub use build::*;
pub use environment::{EnvFlags, Environment};
pub use error::*;
pub use loading::{SettingsLoader, discover};
pub use settings::ProjectSettings;
pub use validation::{
    FsValidator, SchemaValidator, SettingsValidator, validate_fs, validate_schema,
};
