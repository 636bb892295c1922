//! Settings resolution
//!
//! A complete [`LogSettings`] is produced from three layered sources, highest
//! precedence first:
//!
//! 1. explicit caller input ([`PartialLogSettings`])
//! 2. the `LOG_LEVEL` override signal
//! 3. the per-environment defaults keyed by `NODE_ENV`
//!
//! Each field has its own reducer so every rule can be checked in isolation.
//! Resolution never fails; invalid values are treated as absent.

use super::environment::{EnvSignals, Environment};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Fully resolved logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSettings {
    pub level: LogLevel,
    pub use_stack_driver: bool,
    pub use_console: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Caller-supplied settings where every field is optional.
///
/// `level` stays a raw string so that an unrecognized name can be passed in
/// and silently ignored during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialLogSettings {
    pub level: Option<String>,
    pub use_stack_driver: Option<bool>,
    pub use_console: Option<bool>,
    pub key_filename: Option<String>,
    pub project_id: Option<String>,
}

impl PartialLogSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn use_stack_driver(mut self, enabled: bool) -> Self {
        self.use_stack_driver = Some(enabled);
        self
    }

    #[must_use]
    pub fn use_console(mut self, enabled: bool) -> Self {
        self.use_console = Some(enabled);
        self
    }

    #[must_use]
    pub fn key_filename(mut self, path: impl Into<String>) -> Self {
        self.key_filename = Some(path.into());
        self
    }

    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

impl From<&LogSettings> for PartialLogSettings {
    fn from(settings: &LogSettings) -> Self {
        Self {
            level: Some(settings.level.to_str().to_string()),
            use_stack_driver: Some(settings.use_stack_driver),
            use_console: Some(settings.use_console),
            key_filename: settings.key_filename.clone(),
            project_id: settings.project_id.clone(),
        }
    }
}

impl From<LogSettings> for PartialLogSettings {
    fn from(settings: LogSettings) -> Self {
        Self::from(&settings)
    }
}

/// Resolve settings against explicit environment signals. Pure.
pub fn resolve(partial: Option<&PartialLogSettings>, env: &EnvSignals) -> LogSettings {
    let environment = env.environment();
    let use_stack_driver = resolve_use_stack_driver(partial, environment);
    LogSettings {
        level: resolve_level(partial, env),
        use_stack_driver,
        use_console: resolve_use_console(partial, environment, use_stack_driver),
        key_filename: resolve_optional(partial.and_then(|p| p.key_filename.as_deref())),
        project_id: resolve_optional(partial.and_then(|p| p.project_id.as_deref())),
    }
}

/// Resolve settings against the current process environment
pub fn resolve_settings(partial: Option<&PartialLogSettings>) -> LogSettings {
    resolve(partial, &EnvSignals::from_process())
}

/// Explicit level, then `LOG_LEVEL`, then the environment table
pub fn resolve_level(partial: Option<&PartialLogSettings>, env: &EnvSignals) -> LogLevel {
    partial
        .and_then(|p| p.level.as_deref())
        .and_then(LogLevel::validate)
        .or_else(|| env.log_level())
        .unwrap_or_else(|| env.environment().default_level())
}

/// Explicit flag (including `false`), else on outside local/default
pub fn resolve_use_stack_driver(
    partial: Option<&PartialLogSettings>,
    environment: Environment,
) -> bool {
    partial
        .and_then(|p| p.use_stack_driver)
        .unwrap_or_else(|| environment.ships_to_cloud())
}

/// Explicit flag, else the opposite of the cloud default.
///
/// The console can only be turned off while the cloud sink is on, so a
/// resolved configuration always has at least one sink.
pub fn resolve_use_console(
    partial: Option<&PartialLogSettings>,
    environment: Environment,
    use_stack_driver: bool,
) -> bool {
    let requested = partial
        .and_then(|p| p.use_console)
        .unwrap_or_else(|| !environment.ships_to_cloud());
    requested || !use_stack_driver
}

/// Pass through non-empty strings only
pub fn resolve_optional(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Field-by-field equality where two absent settings are equal and an
/// absent one never equals a present one.
pub fn are_settings_equal(a: Option<&LogSettings>, b: Option<&LogSettings>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.level == b.level
                && a.use_stack_driver == b.use_stack_driver
                && a.use_console == b.use_console
                && a.key_filename == b.key_filename
                && a.project_id == b.project_id
        }
        _ => false,
    }
}
