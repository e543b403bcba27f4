use std::path::PathBuf;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A plugin descriptor handed to the bundler, serialized as
/// `{ "name": ..., "options": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "options")]
pub enum Plugin {
    #[serde(rename = "define")]
    Define(DefineOptions),
    #[serde(rename = "extract-text")]
    ExtractText(ExtractTextOptions),
    #[serde(rename = "html")]
    Html(HtmlPluginOptions),
    #[serde(rename = "commons-chunk")]
    CommonsChunk(CommonsChunkOptions),
    #[serde(rename = "loader-options")]
    LoaderOptions(LoaderOptions),
    #[serde(rename = "uglify-js")]
    Uglify(UglifyOptions),
}

impl Plugin {
    pub const DEFINE: &'static str = "define";
    pub const EXTRACT_TEXT: &'static str = "extract-text";
    pub const HTML: &'static str = "html";
    pub const COMMONS_CHUNK: &'static str = "commons-chunk";
    pub const LOADER_OPTIONS: &'static str = "loader-options";
    pub const UGLIFY: &'static str = "uglify-js";

    pub fn name(&self) -> &'static str {
        match self {
            Plugin::Define(_) => Self::DEFINE,
            Plugin::ExtractText(_) => Self::EXTRACT_TEXT,
            Plugin::Html(_) => Self::HTML,
            Plugin::CommonsChunk(_) => Self::COMMONS_CHUNK,
            Plugin::LoaderOptions(_) => Self::LOADER_OPTIONS,
            Plugin::Uglify(_) => Self::UGLIFY,
        }
    }
}

/// Compile-time constants substituted into application code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefineOptions(pub IndexMap<String, Value>);

impl DefineOptions {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractTextOptions {
    pub filename: String,
    /// Styles stay inlined in the script bundle when disabled
    pub disable: bool,
}

/// Where the HTML page comes from.
///
/// `Builtin` serializes to nothing at all: the HTML plugin rejects a null or
/// empty `template`, so the key has to be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlTemplate {
    Builtin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for HtmlTemplate {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => HtmlTemplate::File(path),
            None => HtmlTemplate::Builtin,
        }
    }
}

impl Serialize for HtmlTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let HtmlTemplate::File(path) = self {
            map.serialize_entry("template", path)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlPluginOptions {
    pub title: String,
    pub inject: bool,
    #[serde(flatten)]
    pub template: HtmlTemplate,
    pub minify: HtmlMinifyOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonsChunkOptions {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderOptions {
    pub minimize: bool,
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UglifyOptions {
    pub source_map: bool,
    pub comments: bool,
    pub compress: CompressOptions,
}

/// Minifier policy toggles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressOptions {
    pub warnings: bool,
    pub screw_ie8: bool,
    pub conditionals: bool,
    pub unused: bool,
    pub comparisons: bool,
    pub sequences: bool,
    pub dead_code: bool,
    pub evaluate: bool,
    pub if_return: bool,
    pub join_vars: bool,
}

impl CompressOptions {
    /// Every elimination treated as safe, warnings off.
    pub fn aggressive() -> Self {
        Self {
            warnings: false,
            screw_ie8: true,
            conditionals: true,
            unused: true,
            comparisons: true,
            sequences: true,
            dead_code: true,
            evaluate: true,
            if_return: true,
            join_vars: true,
        }
    }
}
