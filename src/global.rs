//! Process-wide convenience functions
//!
//! These operate on a lazily created [`LoggingContext`] that reads
//! `LOG_LEVEL` and `NODE_ENV` from the process environment. Hosts that need
//! isolated state (tests, multi-tenant services) should own a
//! `LoggingContext` instead.

use crate::context::LoggingContext;
use crate::core::{LogInfo, LogLevel, LogMessage, LogSettings, Logger, PartialLogSettings, Result};
use std::sync::{Arc, OnceLock};

static DEFAULT_CONTEXT: OnceLock<LoggingContext> = OnceLock::new();

/// The shared default context
pub fn default_context() -> &'static LoggingContext {
    DEFAULT_CONTEXT.get_or_init(LoggingContext::new)
}

/// Cached client of the default context for `partial`
pub fn get_client(partial: Option<&PartialLogSettings>) -> Result<Arc<Logger>> {
    default_context().client(partial)
}

/// Settings the default context's client was built with
pub fn current_settings() -> Option<LogSettings> {
    default_context().current_settings()
}

/// Clear the default context's cached client and settings
pub fn reset_state() {
    default_context().reset();
}

pub fn log(level: LogLevel, message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
    default_context().log(level, message, info)
}

pub fn log_error(message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
    default_context().error(message, info)
}

pub fn log_warn(message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
    default_context().warn(message, info)
}

pub fn log_info(message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
    default_context().info(message, info)
}

pub fn log_verbose(message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
    default_context().verbose(message, info)
}

pub fn log_debug(message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
    default_context().debug(message, info)
}
