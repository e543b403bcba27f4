//! Project settings: paths, environment, globals and the vendor list.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::Environment;

/// Read-only description of a project, constructed once per build invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Environment being built for
    pub env: Environment,

    /// Entry module name, resolved inside `src_dir`
    #[serde(deserialize_with = "lenient::string")]
    pub main: String,

    /// Project root; every other path is resolved against it
    #[serde(deserialize_with = "lenient::path")]
    pub base_path: PathBuf,

    /// Source directory (relative to `base_path`)
    #[serde(deserialize_with = "lenient::path")]
    pub src_dir: PathBuf,

    /// Output directory (relative to `base_path`)
    #[serde(deserialize_with = "lenient::path")]
    pub out_dir: PathBuf,

    /// Emit source maps
    pub sourcemaps: bool,

    /// URL prefix assets are served from
    #[serde(deserialize_with = "lenient::string")]
    pub public_path: String,

    /// HTML template; `None` lets the HTML plugin use its built-in page
    #[serde(deserialize_with = "lenient::optional_path")]
    pub template_path: Option<PathBuf>,

    /// Title of the generated HTML page
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,

    /// Module name → global variable name, for modules provided at runtime
    pub externals: IndexMap<String, String>,

    /// Extra compile-time constants
    pub globals: IndexMap<String, Value>,

    /// Packages split into the long-lived vendor bundle
    pub vendors: Vec<String>,
}

impl ProjectSettings {
    /// Default settings rooted at `root`.
    pub fn defaults_for(root: impl Into<PathBuf>) -> Self {
        Self {
            base_path: root.into(),
            ..Self::default()
        }
    }

    /// Resolve `rel` against the project root.
    pub fn in_project(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.base_path.join(rel).clean()
    }

    /// Resolve `rel` against the source directory.
    pub fn in_project_src(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.in_project(self.src_dir.join(rel))
    }

    /// Template path resolved against the project root, if one is configured.
    pub fn resolved_template(&self) -> Option<PathBuf> {
        self.template_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .map(|path| self.in_project(path))
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors = vendors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_global(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.globals.insert(name.into(), value.into());
        self
    }

    pub fn without_template(mut self) -> Self {
        self.template_path = None;
        self
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            main: "main".to_string(),
            base_path: PathBuf::from("."),
            src_dir: PathBuf::from("src"),
            out_dir: PathBuf::from("dist"),
            sourcemaps: true,
            public_path: "/".to_string(),
            template_path: Some(PathBuf::from("src/index.html")),
            title: "Genesis Application".to_string(),
            externals: IndexMap::new(),
            globals: IndexMap::new(),
            vendors: [
                "react",
                "react-dom",
                "redux",
                "react-redux",
                "redux-thunk",
                "react-router",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Scalar text fields also accept numbers and booleans.
///
/// Environment variables such as `GENESIS_OUT_DIR=2024` arrive typed.
mod lenient {
    use std::path::PathBuf;

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    impl From<Scalar> for String {
        fn from(scalar: Scalar) -> Self {
            match scalar {
                Scalar::Text(text) => text,
                Scalar::Unsigned(n) => n.to_string(),
                Scalar::Signed(n) => n.to_string(),
                Scalar::Float(n) => n.to_string(),
                Scalar::Bool(b) => b.to_string(),
            }
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Scalar::deserialize(deserializer).map(String::from)
    }

    pub fn path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
        string(deserializer).map(PathBuf::from)
    }

    pub fn optional_path<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<PathBuf>, D::Error> {
        Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| String::from(scalar).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_against_base() {
        let settings = ProjectSettings::defaults_for("/app");
        assert_eq!(settings.in_project("dist"), PathBuf::from("/app/dist"));
        assert_eq!(settings.in_project_src("main"), PathBuf::from("/app/src/main"));
        assert_eq!(
            settings.in_project_src("./styles"),
            PathBuf::from("/app/src/styles")
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let settings = ProjectSettings::defaults_for("/app");
        assert_eq!(
            settings.in_project("/srv/out"),
            PathBuf::from("/srv/out")
        );
    }

    #[test]
    fn empty_template_resolves_to_none() {
        let mut settings = ProjectSettings::defaults_for("/app");
        assert_eq!(
            settings.resolved_template(),
            Some(PathBuf::from("/app/src/index.html"))
        );

        settings.template_path = Some(PathBuf::new());
        assert_eq!(settings.resolved_template(), None);

        assert_eq!(settings.without_template().resolved_template(), None);
    }

    #[test]
    fn partial_values_fill_in_defaults() {
        let settings: ProjectSettings =
            serde_json::from_value(serde_json::json!({ "env": "test", "vendors": [] })).unwrap();
        assert_eq!(settings.env, Environment::Test);
        assert!(settings.vendors.is_empty());
        assert_eq!(settings.main, "main");
        assert_eq!(settings.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn numeric_text_values_are_accepted() {
        let settings: ProjectSettings = serde_json::from_value(serde_json::json!({
            "main": 123,
            "out_dir": 2024,
            "title": true,
            "template_path": 7,
        }))
        .unwrap();
        assert_eq!(settings.main, "123");
        assert_eq!(settings.out_dir, PathBuf::from("2024"));
        assert_eq!(settings.title, "true");
        assert_eq!(settings.template_path, Some(PathBuf::from("7")));
    }

    #[test]
    fn structured_values_are_still_rejected() {
        let result: Result<ProjectSettings, _> =
            serde_json::from_value(serde_json::json!({ "main": ["app"] }));
        assert!(result.is_err());
    }
}
