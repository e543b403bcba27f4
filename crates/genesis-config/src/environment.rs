//! Build environment and the compile-time flags derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment the application is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Pre-production deploys, optimized like production
    Staging,
    /// Test runner builds
    Test,
    /// Production deploys
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Staging,
        Environment::Test,
        Environment::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    /// Whether bundles are minified and dead code is stripped.
    pub fn is_optimized(&self) -> bool {
        matches!(self, Environment::Production | Environment::Staging)
    }

    pub fn flags(&self) -> EnvFlags {
        EnvFlags::from(*self)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four boolean globals exposed to application code.
///
/// Built from a closed [`Environment`], so exactly one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvFlags {
    pub dev: bool,
    pub staging: bool,
    pub test: bool,
    pub prod: bool,
}

impl EnvFlags {
    pub const DEV: &'static str = "__DEV__";
    pub const STAGING: &'static str = "__STAGING__";
    pub const TEST: &'static str = "__TEST__";
    pub const PROD: &'static str = "__PROD__";

    pub fn reserved_names() -> [&'static str; 4] {
        [Self::DEV, Self::STAGING, Self::TEST, Self::PROD]
    }

    /// Flag names paired with their values, in definition order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            (Self::DEV, self.dev),
            (Self::STAGING, self.staging),
            (Self::TEST, self.test),
            (Self::PROD, self.prod),
        ]
    }
}

impl From<Environment> for EnvFlags {
    fn from(env: Environment) -> Self {
        Self {
            dev: env == Environment::Development,
            staging: env == Environment::Staging,
            test: env == Environment::Test,
            prod: env == Environment::Production,
        }
    }
}
