//! Appender implementations

pub mod cloud;
pub mod console;

pub use cloud::{
    ChannelTransport, CloudLogEntry, CloudLoggingAppender, CloudLoggingBuilder, CloudTransport,
    ServiceAccountKey, StdoutTransport,
};
pub use console::{ConsoleAppender, SharedBuffer};

// Re-export trait for convenience
pub use crate::core::Appender;
