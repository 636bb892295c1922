//! Console appender implementation

use crate::core::{Appender, LogEntry, LogLevel, OutputFormat, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Where console output goes
enum ConsoleTarget {
    Stdout,
    Writer(Box<dyn Write + Send + Sync>),
}

pub struct ConsoleAppender {
    level: LogLevel,
    use_colors: bool,
    output_format: OutputFormat,
    target: ConsoleTarget,
}

impl ConsoleAppender {
    /// Colorized, human-readable output on stdout
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            use_colors: true,
            output_format: OutputFormat::Text,
            target: ConsoleTarget::Stdout,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use rust_cloud_logger::appenders::ConsoleAppender;
    /// use rust_cloud_logger::{LogLevel, OutputFormat};
    ///
    /// let appender = ConsoleAppender::new(LogLevel::Info)
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Write to `writer` instead of stdout
    #[must_use]
    pub fn with_writer<W: Write + Send + Sync + 'static>(mut self, writer: W) -> Self {
        self.target = ConsoleTarget::Writer(Box::new(writer));
        self
    }

    /// Report uncaught panics through the console format.
    ///
    /// The hook is installed once per process and chains to the hook that
    /// was active before it. Later calls are no-ops.
    #[must_use]
    pub fn with_panic_interception(self) -> Self {
        install_panic_hook(self.use_colors, self.output_format);
        self
    }

    fn render(&self, entry: &LogEntry) -> String {
        self.output_format.format(entry, self.use_colors)
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry);
        match self.target {
            ConsoleTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", output)?;
            }
            ConsoleTarget::Writer(ref mut writer) => writeln!(writer, "{}", output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Writer(ref mut writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}

fn install_panic_hook(use_colors: bool, output_format: OutputFormat) {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());
        let location = info
            .location()
            .map(|l| format!(" at {}:{}", l.file(), l.line()))
            .unwrap_or_default();

        let entry = LogEntry::new(
            LogLevel::Error,
            format!("uncaught panic: {}{}", payload, location),
        );
        eprintln!("{}", output_format.format(&entry, use_colors));
        previous(info);
    }));
}

/// Cloneable in-memory writer, handy for capturing console output
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
