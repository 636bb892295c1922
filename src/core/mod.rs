//! Core logger types and traits

pub mod appender;
pub mod environment;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod output_format;
pub mod settings;

pub use appender::Appender;
pub use environment::{EnvSignals, Environment, DEPLOY_ENV, LOG_LEVEL_ENV};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use message::{CallInfo, LogInfo, LogMessage};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use settings::{are_settings_equal, resolve_settings, LogSettings, PartialLogSettings};
