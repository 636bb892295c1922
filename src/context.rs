//! Logging context: settings resolution, client caching and the level
//! entry points.
//!
//! A [`LoggingContext`] owns the cached [`Logger`] and the settings it was
//! built from. Each call resolves settings, reuses the cached client when
//! they are unchanged, rebuilds it otherwise, and then emits one record.
//!
//! # Example
//!
//! ```
//! use rust_cloud_logger::prelude::*;
//!
//! let context = LoggingContext::builder()
//!     .env(EnvSignals::new().with_environment("local"))
//!     .build();
//!
//! context.info("service started", None).unwrap();
//! context
//!     .warn("slow request", Some(LogInfo::new().prefix("[http] ")))
//!     .unwrap();
//! assert_eq!(context.current_settings().unwrap().level, LogLevel::Debug);
//! ```

use crate::appenders::{CloudLoggingAppender, ConsoleAppender};
use crate::core::{
    are_settings_equal, settings, CallInfo, EnvSignals, LogInfo, LogLevel, LogMessage,
    LogSettings, Logger, PartialLogSettings, Result,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Builds a logging engine for a set of resolved settings
pub trait ClientFactory: Send + Sync {
    fn build(&self, settings: &LogSettings) -> Result<Logger>;
}

impl<F> ClientFactory for F
where
    F: Fn(&LogSettings) -> Result<Logger> + Send + Sync,
{
    fn build(&self, settings: &LogSettings) -> Result<Logger> {
        self(settings)
    }
}

/// Console sink when `use_console`, cloud sink when `use_stack_driver`,
/// both at the resolved level.
#[derive(Debug, Clone, Default)]
pub struct DefaultClientFactory;

impl ClientFactory for DefaultClientFactory {
    fn build(&self, settings: &LogSettings) -> Result<Logger> {
        let mut builder = Logger::builder().min_level(settings.level);

        if settings.use_console {
            builder = builder.appender(
                ConsoleAppender::new(settings.level)
                    .with_colors(true)
                    .with_panic_interception(),
            );
        }

        if settings.use_stack_driver {
            builder = builder.appender(
                CloudLoggingAppender::builder(settings.level)
                    .key_filename(settings.key_filename.clone())
                    .project_id(settings.project_id.clone())
                    .build()?,
            );
        }

        Ok(builder.build())
    }
}

enum EnvSource {
    Process,
    Fixed(EnvSignals),
}

#[derive(Default)]
struct ClientCache {
    client: Option<Arc<Logger>>,
    settings: Option<LogSettings>,
}

pub struct LoggingContext {
    env: EnvSource,
    factory: Box<dyn ClientFactory>,
    cache: Mutex<ClientCache>,
}

impl LoggingContext {
    /// Context reading the process environment, with the default sinks
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggingContextBuilder {
        LoggingContextBuilder::new()
    }

    /// Current environment signals (re-read on every call for process env)
    pub fn env_signals(&self) -> EnvSignals {
        match &self.env {
            EnvSource::Process => EnvSignals::from_process(),
            EnvSource::Fixed(signals) => signals.clone(),
        }
    }

    pub fn resolve_settings(&self, partial: Option<&PartialLogSettings>) -> LogSettings {
        settings::resolve(partial, &self.env_signals())
    }

    /// Return the cached client, rebuilding it if the resolved settings
    /// differ from the ones it was built with.
    ///
    /// # Errors
    ///
    /// Sink construction failures are returned as-is and leave the cache
    /// untouched.
    pub fn client(&self, partial: Option<&PartialLogSettings>) -> Result<Arc<Logger>> {
        let settings = self.resolve_settings(partial);
        let mut cache = self.cache.lock();

        if let Some(client) = &cache.client {
            if are_settings_equal(Some(&settings), cache.settings.as_ref()) {
                return Ok(Arc::clone(client));
            }
        }

        let client = Arc::new(self.factory.build(&settings)?);
        cache.client = Some(Arc::clone(&client));
        cache.settings = Some(settings);
        Ok(client)
    }

    /// Settings the cached client was built with
    pub fn current_settings(&self) -> Option<LogSettings> {
        self.cache.lock().settings.clone()
    }

    /// Drop the cached client and settings
    pub fn reset(&self) {
        *self.cache.lock() = ClientCache::default();
    }

    /// Emit one record at `level`.
    ///
    /// Without a settings override the previously used settings are kept,
    /// so the client is only rebuilt when a call asks for something else.
    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<LogMessage>,
        info: Option<LogInfo>,
    ) -> Result<()> {
        let call = CallInfo::normalize(info);
        let previous = match call.settings {
            Some(_) => None,
            None => self.current_settings().map(PartialLogSettings::from),
        };

        let client = self.client(call.settings.as_ref().or(previous.as_ref()))?;
        let text = message.into().render(&call.prefix);
        client.log_with_meta(level, text, call.meta);
        Ok(())
    }

    pub fn error(&self, message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
        self.log(LogLevel::Error, message, info)
    }

    pub fn warn(&self, message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
        self.log(LogLevel::Warn, message, info)
    }

    pub fn info(&self, message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
        self.log(LogLevel::Info, message, info)
    }

    pub fn verbose(&self, message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
        self.log(LogLevel::Verbose, message, info)
    }

    pub fn debug(&self, message: impl Into<LogMessage>, info: Option<LogInfo>) -> Result<()> {
        self.log(LogLevel::Debug, message, info)
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`LoggingContext`]
pub struct LoggingContextBuilder {
    env: EnvSource,
    factory: Option<Box<dyn ClientFactory>>,
}

impl LoggingContextBuilder {
    pub fn new() -> Self {
        Self {
            env: EnvSource::Process,
            factory: None,
        }
    }

    /// Resolve against fixed signals instead of the process environment
    #[must_use = "builder methods return a new value"]
    pub fn env(mut self, signals: EnvSignals) -> Self {
        self.env = EnvSource::Fixed(signals);
        self
    }

    /// Replace the sinks built for each set of settings
    #[must_use = "builder methods return a new value"]
    pub fn factory<F: ClientFactory + 'static>(mut self, factory: F) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> LoggingContext {
        LoggingContext {
            env: self.env,
            factory: self
                .factory
                .unwrap_or_else(|| Box::new(DefaultClientFactory)),
            cache: Mutex::new(ClientCache::default()),
        }
    }
}

impl Default for LoggingContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
