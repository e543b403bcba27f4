//! The build configuration handed to the bundler engine.
//!
//! Field names serialize in the bundler's camelCase vocabulary, so the JSON
//! form of a [`BuildConfig`] can be consumed as-is.

mod plugin;
mod rule;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

pub use plugin::{
    CommonsChunkOptions, CompressOptions, DefineOptions, ExtractTextOptions, HtmlMinifyOptions,
    HtmlPluginOptions, HtmlTemplate, LoaderOptions, Plugin, UglifyOptions,
};
pub use rule::{FilePattern, LoaderStep, Rule};

/// Output filename for stable, uncached development bundles.
pub const STABLE_FILENAME: &str = "[name].js";

/// Output filename embedding a content hash for long-term caching.
pub const HASHED_FILENAME: &str = "[name].[hash].js";

/// Bundle that always exists.
pub const MAIN_BUNDLE: &str = "main";

/// Bundle holding third-party packages.
pub const VENDOR_BUNDLE: &str = "vendor";

/// Bundle holding the bundler runtime bootstrap.
pub const MANIFEST_BUNDLE: &str = "manifest";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfig {
    /// Bundle name → modules, in insertion order
    pub entry: IndexMap<String, Vec<String>>,
    pub devtool: Devtool,
    pub performance: Performance,
    pub output: Output,
    pub resolve: Resolve,
    pub externals: IndexMap<String, String>,
    pub module: ModuleRules,
    pub plugins: Vec<Plugin>,
}

impl BuildConfig {
    pub fn with_entry(mut self, bundle: impl Into<String>, modules: Vec<String>) -> Self {
        self.entry.insert(bundle.into(), modules);
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.module.rules.push(rule);
        self
    }

    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = Plugin>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    /// First plugin with the given descriptor name.
    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name() == name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugin(name).is_some()
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    /// Every rule that would process `path`, in execution order.
    pub fn rules_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a Rule> + 'a {
        self.module
            .rules
            .iter()
            .filter(move |rule| rule.applies_to(path))
    }

    /// First rule that would process `path`.
    pub fn rule_for(&self, path: impl AsRef<Path>) -> Option<&Rule> {
        let path = path.as_ref();
        self.module.rules.iter().find(|rule| rule.applies_to(path))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Source map setting: `"source-map"` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
    SourceMap,
    Disabled,
}

impl Devtool {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Devtool::SourceMap)
    }
}

impl From<bool> for Devtool {
    fn from(sourcemaps: bool) -> Self {
        if sourcemaps {
            Devtool::SourceMap
        } else {
            Devtool::Disabled
        }
    }
}

impl Serialize for Devtool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Devtool::SourceMap => serializer.serialize_str("source-map"),
            Devtool::Disabled => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Performance {
    /// Bundle size warnings
    pub hints: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub path: PathBuf,
    pub filename: String,
    pub public_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolve {
    /// Directories searched for bare module specifiers
    pub modules: Vec<String>,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleRules {
    pub rules: Vec<Rule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn devtool_serializes_as_string_or_false() {
        assert_eq!(serde_json::to_value(Devtool::SourceMap).unwrap(), json!("source-map"));
        assert_eq!(serde_json::to_value(Devtool::Disabled).unwrap(), json!(false));
        assert!(Devtool::from(true).is_enabled());
        assert!(!Devtool::from(false).is_enabled());
    }

    #[test]
    fn output_uses_camel_case() {
        let output = Output {
            path: PathBuf::from("/app/dist"),
            filename: STABLE_FILENAME.into(),
            public_path: "/".into(),
        };
        assert_eq!(
            serde_json::to_value(output).unwrap(),
            json!({ "path": "/app/dist", "filename": "[name].js", "publicPath": "/" })
        );
    }
}
