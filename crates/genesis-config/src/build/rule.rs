use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// File matcher for a module rule, tested against the module path.
#[derive(Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
    /// Compile a pattern known at build time.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Only call this
    /// with literals; use [`FilePattern::parse`] for user input.
    pub fn literal(pattern: &'static str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => Self(re),
            Err(err) => panic!("invalid built-in file pattern `{pattern}`: {err}"),
        }
    }

    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.0.is_match(&path.to_string_lossy())
    }
}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One named transformation applied to matched modules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderStep {
    pub loader: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

/// A module rule. Steps run in the order listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub test: FilePattern,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,

    #[serde(rename = "use")]
    pub steps: Vec<LoaderStep>,
}

impl Rule {
    pub fn new(test: FilePattern) -> Self {
        Self {
            test,
            exclude: None,
            steps: Vec::new(),
        }
    }

    pub fn exclude(mut self, pattern: FilePattern) -> Self {
        self.exclude = Some(pattern);
        self
    }

    pub fn step(mut self, step: LoaderStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn applies_to(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }

    pub fn loaders(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.loader.as_str())
    }
}
