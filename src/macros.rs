//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes a [`LoggingContext`](crate::LoggingContext) and
//! `format!`-style arguments and evaluates to the `Result` of the call.
//!
//! # Examples
//!
//! ```
//! use rust_cloud_logger::prelude::*;
//! use rust_cloud_logger::info;
//!
//! let context = LoggingContext::builder().env(EnvSignals::new()).build();
//!
//! // Basic logging
//! info!(context, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(context, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_cloud_logger::prelude::*;
/// # let context = LoggingContext::builder().env(EnvSignals::new()).build();
/// use rust_cloud_logger::log;
/// log!(context, LogLevel::Info, "Simple message").unwrap();
/// log!(context, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($context:expr, $level:expr, $($arg:tt)+) => {
        $context.log($level, format!($($arg)+), None)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($context:expr, $($arg:tt)+) => {
        $crate::log!($context, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($context:expr, $($arg:tt)+) => {
        $crate::log!($context, $crate::LogLevel::Verbose, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_cloud_logger::prelude::*;
/// # let context = LoggingContext::builder().env(EnvSignals::new()).build();
/// use rust_cloud_logger::info;
/// info!(context, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($context:expr, $($arg:tt)+) => {
        $crate::log!($context, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($context:expr, $($arg:tt)+) => {
        $crate::log!($context, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_cloud_logger::prelude::*;
/// # let context = LoggingContext::builder().env(EnvSignals::new()).build();
/// use rust_cloud_logger::error;
/// error!(context, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($context:expr, $($arg:tt)+) => {
        $crate::log!($context, $crate::LogLevel::Error, $($arg)+)
    };
}
