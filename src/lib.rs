//! # Rust Cloud Logger
//!
//! Console logging and cloud log-shipping behind one small API, with
//! defaults derived from the runtime environment.
//!
//! ## Features
//!
//! - **Environment Defaults**: `NODE_ENV` picks the level and sinks, `LOG_LEVEL` overrides the level
//! - **Two Sinks**: colorized console output and Google Cloud structured logging
//! - **Cached Client**: the engine is rebuilt only when resolved settings change
//! - **Structured Messages**: serializable values and errors are rendered as JSON
//!
//! ## Example
//!
//! ```no_run
//! use rust_cloud_logger::{log_error, log_info, LogInfo};
//!
//! log_info("service started", None).unwrap();
//! log_error(
//!     serde_json::json!({"job": "reindex", "failed": 3}),
//!     Some(LogInfo::new().prefix("[worker] ")),
//! )
//! .unwrap();
//! ```

pub mod appenders;
pub mod context;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{
        ChannelTransport, CloudLoggingAppender, ConsoleAppender, StdoutTransport,
    };
    pub use crate::context::{ClientFactory, DefaultClientFactory, LoggingContext};
    pub use crate::core::{
        are_settings_equal, resolve_settings, Appender, EnvSignals, Environment, LogEntry,
        LogInfo, LogLevel, LogMessage, LogSettings, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, OutputFormat, PartialLogSettings, Result,
    };
}

pub use appenders::{CloudLoggingAppender, ConsoleAppender};
pub use context::{ClientFactory, DefaultClientFactory, LoggingContext, LoggingContextBuilder};
pub use core::{
    are_settings_equal, resolve_settings, Appender, CallInfo, EnvSignals, Environment, LogEntry,
    LogInfo, LogLevel, LogMessage, LogSettings, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    OutputFormat, PartialLogSettings, Result,
};
pub use global::{
    current_settings, default_context, get_client, log, log_debug, log_error, log_info,
    log_verbose, log_warn, reset_state,
};
