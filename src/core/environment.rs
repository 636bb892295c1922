//! Deployment environment and the process signals settings are derived from

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding the default log level
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable naming the deployment environment
pub const DEPLOY_ENV: &str = "NODE_ENV";

/// Named runtime context, used only to pick defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Staging,
    Development,
    Local,
    #[default]
    Default,
}

impl Environment {
    pub fn to_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Development => "development",
            Environment::Local => "local",
            Environment::Default => "default",
        }
    }

    /// Validate a raw environment name. Unknown names yield `None`.
    pub fn validate(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Level used when neither the caller nor `LOG_LEVEL` supplies one
    pub fn default_level(&self) -> LogLevel {
        match self {
            Environment::Production => LogLevel::Info,
            Environment::Staging => LogLevel::Verbose,
            Environment::Development | Environment::Local | Environment::Default => {
                LogLevel::Debug
            }
        }
    }

    /// Whether the cloud sink is attached by default
    pub fn ships_to_cloud(&self) -> bool {
        !matches!(self, Environment::Local | Environment::Default)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            "local" => Ok(Environment::Local),
            "default" => Ok(Environment::Default),
            _ => Err(format!("Invalid environment: '{}'", s)),
        }
    }
}

/// Snapshot of the raw environment signals.
///
/// Values are kept unvalidated; [`EnvSignals::log_level`] and
/// [`EnvSignals::environment`] do the validation so an unrecognized value
/// behaves exactly like an unset one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSignals {
    log_level: Option<String>,
    environment: Option<String>,
}

impl EnvSignals {
    /// No signals set
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `LOG_LEVEL` and `NODE_ENV` from the process environment
    pub fn from_process() -> Self {
        Self {
            log_level: env::var(LOG_LEVEL_ENV).ok(),
            environment: env::var(DEPLOY_ENV).ok(),
        }
    }

    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// The override level, if set and valid
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level.as_deref().and_then(LogLevel::validate)
    }

    /// The deployment environment, `Default` when unset or invalid
    pub fn environment(&self) -> Environment {
        self.environment
            .as_deref()
            .and_then(Environment::validate)
            .unwrap_or_default()
    }
}
