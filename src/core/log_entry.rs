//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_NAME_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread label (name, or id for unnamed threads)
fn get_thread_label() -> String {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let current = std::thread::current();
                current
                    .name()
                    .map(String::from)
                    .unwrap_or_else(|| format!("{:?}", current.id()))
            })
            .clone()
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl LogEntry {
    /// The message is kept verbatim; line-oriented formats escape it on output.
    pub fn new(level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            level,
            message: message.as_ref().to_string(),
            timestamp: Utc::now(),
            thread: get_thread_label(),
            meta: None,
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Option<serde_json::Value>) -> Self {
        self.meta = meta.filter(|m| !m.is_null());
        self
    }

    /// Metadata rendered as compact JSON, if any
    pub fn meta_json(&self) -> Option<String> {
        self.meta.as_ref().map(|m| m.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_is_kept_verbatim() {
        let entry = LogEntry::new(LogLevel::Info, "line one\nline two\ttab");
        assert_eq!(entry.message, "line one\nline two\ttab");
    }

    #[test]
    fn test_null_meta_is_dropped() {
        let entry = LogEntry::new(LogLevel::Info, "x").with_meta(Some(serde_json::Value::Null));
        assert!(entry.meta.is_none());

        let entry = LogEntry::new(LogLevel::Info, "x").with_meta(Some(json!({"user": 7})));
        assert_eq!(entry.meta_json().as_deref(), Some(r#"{"user":7}"#));
    }
}
