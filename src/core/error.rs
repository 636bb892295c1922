//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Credential file could not be read or parsed
    #[error("Invalid credentials in '{path}': {message}")]
    CredentialsError { path: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Cloud channel receiver was dropped
    #[error("Failed to send log entry to cloud channel")]
    ChannelSendError,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a credentials error for a key file
    pub fn credentials(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::CredentialsError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::credentials("/etc/keys/sa.json", "missing field");
        assert!(matches!(err, LoggerError::CredentialsError { .. }));

        let err = LoggerError::config("CloudLoggingAppender", "empty log name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("stdout closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::credentials("/etc/keys/sa.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Invalid credentials in '/etc/keys/sa.json': expected value at line 1"
        );

        let err = LoggerError::config("CloudLoggingAppender", "empty log name");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for CloudLoggingAppender: empty log name"
        );

        assert_eq!(
            LoggerError::ChannelSendError.to_string(),
            "Failed to send log entry to cloud channel"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LoggerError::io_operation("reading key file", "/tmp/missing.json", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("reading key file"));
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
