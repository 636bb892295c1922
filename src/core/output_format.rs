//! Output format configuration for log entries
//!
//! - Text: Human-readable format (default)
//! - Json: One JSON object per line

use super::log_entry::LogEntry;
use colored::Colorize;
use serde_json::{Map, Value};

/// Timestamp layout shared by every format
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08T10:30:45.123Z info: Request processed {"path":"/"}`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"level":"info","message":"Request processed","timestamp":"2025-01-08T10:30:45.123Z"}`
    Json,
}

impl OutputFormat {
    /// Format a log entry according to this output format
    pub fn format(&self, entry: &LogEntry, colorize: bool) -> String {
        match self {
            OutputFormat::Text => Self::format_text(entry, colorize),
            OutputFormat::Json => Self::format_json(entry),
        }
    }

    /// Escape newlines, carriage returns and tabs so one record stays on one
    /// line and a message cannot forge further entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn format_text(entry: &LogEntry, colorize: bool) -> String {
        let timestamp = entry.timestamp.format(TIMESTAMP_FORMAT);
        let level = entry.level.to_str();
        let message = Self::sanitize_message(&entry.message);
        let mut line = if colorize {
            let color = entry.level.color_code();
            format!(
                "{} {}: {}",
                timestamp,
                level.color(color),
                message.as_str().color(color)
            )
        } else {
            format!("{} {}: {}", timestamp, level, message)
        };

        if let Some(meta) = entry.meta_json() {
            line.push(' ');
            line.push_str(&meta);
        }

        line
    }

    /// Object metadata is merged into the top level; anything else is kept
    /// under `meta`. Core fields win over metadata keys.
    fn format_json(entry: &LogEntry) -> String {
        let mut json_obj = Map::new();

        match &entry.meta {
            Some(Value::Object(fields)) => {
                for (key, value) in fields {
                    json_obj.insert(key.clone(), value.clone());
                }
            }
            Some(other) => {
                json_obj.insert("meta".to_string(), other.clone());
            }
            None => {}
        }

        json_obj.insert(
            "timestamp".to_string(),
            Value::String(entry.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        );
        json_obj.insert(
            "level".to_string(),
            Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert("message".to_string(), Value::String(entry.message.clone()));
        json_obj.insert("thread".to_string(), Value::String(entry.thread.clone()));

        Value::Object(json_obj).to_string()
    }
}
