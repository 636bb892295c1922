//! Message and call-info normalization for the logging facade

use super::settings::PartialLogSettings;
use serde::Serialize;
use serde_json::{json, Value};
use std::error::Error as StdError;

/// The message half of a log call: plain text or a structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    Text(String),
    Structured(Value),
}

impl LogMessage {
    /// Serialize any value into a structured message.
    ///
    /// A failing `Serialize` impl is contained: the message becomes a text
    /// marker naming the failure instead of failing the log call.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => LogMessage::Structured(value),
            Err(e) => LogMessage::Text(format!("[unserializable: {}]", e)),
        }
    }

    /// Capture an error's name, message and cause chain.
    ///
    /// Errors carry no serializable fields of their own, so they are read
    /// explicitly into an object before rendering. The name is the concrete
    /// type's; behind a trait object it is the leading identifier of the
    /// `Debug` output, which is the type or variant name for derived impls.
    pub fn from_error<E: StdError + ?Sized>(error: &E) -> Self {
        let type_name = std::any::type_name::<E>();
        let name = if type_name.starts_with("dyn ") {
            let debug = format!("{:?}", error);
            debug_name(&debug).unwrap_or("Error").to_string()
        } else {
            short_type_name(type_name).to_string()
        };

        let mut stack = vec![error.to_string()];
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        LogMessage::Structured(json!({
            "name": name,
            "message": error.to_string(),
            "stack": stack.join("\n"),
        }))
    }

    /// Render with a prefix: text verbatim, structured values as compact JSON
    pub fn render(&self, prefix: &str) -> String {
        match self {
            LogMessage::Text(text) => format!("{}{}", prefix, text),
            LogMessage::Structured(value) => format!("{}{}", prefix, value),
        }
    }
}

/// `alloc::boxed::Box<T>` -> `Box`, `dyn core::error::Error + Send` -> `Error`
fn short_type_name(full: &str) -> &str {
    let trimmed = full.trim_start_matches("dyn ");
    let base = trimmed.split(['<', ' ']).next().unwrap_or(trimmed);
    base.rsplit("::").next().unwrap_or(base)
}

/// `SaveFailed(RootCause)` -> `SaveFailed`, `Custom { kind: .. }` -> `Custom`
fn debug_name(debug: &str) -> Option<&str> {
    let end = debug
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(debug.len());
    let name = &debug[..end];
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        None
    } else {
        Some(name)
    }
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::Text(s.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::Text(s)
    }
}

impl From<&String> for LogMessage {
    fn from(s: &String) -> Self {
        LogMessage::Text(s.clone())
    }
}

impl From<Value> for LogMessage {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => LogMessage::Text(s),
            other => LogMessage::Structured(other),
        }
    }
}

impl From<&dyn StdError> for LogMessage {
    fn from(error: &dyn StdError) -> Self {
        LogMessage::from_error(error)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for LogMessage {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        LogMessage::from_error(&*error)
    }
}

/// Optional per-call settings override, line prefix and metadata.
///
/// Fields left unset keep their defaults: empty prefix, no metadata, no
/// settings override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogInfo {
    pub prefix: Option<String>,
    pub meta: Option<Value>,
    pub settings: Option<PartialLogSettings>,
}

impl LogInfo {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn meta(mut self, meta: impl Into<Value>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: PartialLogSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Call info with defaults applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallInfo {
    pub prefix: String,
    pub meta: Option<Value>,
    pub settings: Option<PartialLogSettings>,
}

impl CallInfo {
    /// Shallow merge of `info` over the defaults
    pub fn normalize(info: Option<LogInfo>) -> Self {
        let defaults = CallInfo::default();
        match info {
            None => defaults,
            Some(info) => CallInfo {
                prefix: info.prefix.unwrap_or(defaults.prefix),
                meta: info.meta.or(defaults.meta),
                settings: info.settings.or(defaults.settings),
            },
        }
    }
}
