//! Main logger implementation
//!
//! A [`Logger`] is a cheap handle: an `Arc` to state shared by every clone and
//! derived logger (level, format, colors, sink, metrics) plus the handle's own
//! immutable [`FieldSet`]. Changing the level or format through any handle is
//! seen by all of them; fields only ever grow by deriving a new handle.

use super::{
    error::{LoggerError, Result},
    field_set::FieldSet,
    log_entry::LogEntry,
    log_level::LogLevel,
    log_writer::LogWriter,
    metrics::LoggerMetrics,
    output_format::{trim_line_ending, OutputFormat},
    sink::Sink,
    timestamp::FormatterConfig,
};
use crate::sinks::{DiscardSink, MemorySink, StreamSink};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Exit code used after a fatal entry has been written
pub const FATAL_EXIT_CODE: i32 = 1;

struct SharedState {
    level: RwLock<LogLevel>,
    format: RwLock<OutputFormat>,
    colors: RwLock<bool>,
    formatter: FormatterConfig,
    sink: Mutex<Box<dyn Sink>>,
    metrics: LoggerMetrics,
}

#[derive(Clone)]
pub struct Logger {
    shared: Arc<SharedState>,
    fields: FieldSet,
    error_stream: bool,
}

impl Logger {
    /// Create a text logger at `Info` writing to `sink`
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::from_parts(
            Box::new(sink),
            LogLevel::Info,
            OutputFormat::Text,
            false,
            FormatterConfig::default(),
            FieldSet::new(),
        )
    }

    pub(crate) fn from_parts(
        sink: Box<dyn Sink>,
        level: LogLevel,
        format: OutputFormat,
        colors: bool,
        formatter: FormatterConfig,
        fields: FieldSet,
    ) -> Self {
        Self {
            shared: Arc::new(SharedState {
                level: RwLock::new(level),
                format: RwLock::new(format),
                colors: RwLock::new(colors),
                formatter,
                sink: Mutex::new(sink),
                metrics: LoggerMetrics::new(),
            }),
            fields,
            error_stream: false,
        }
    }

    /// Colored text logger on standard output and standard error
    #[must_use]
    pub fn stdio() -> Self {
        let logger = Self::new(StreamSink::stdio());
        logger.set_colors(true);
        logger
    }

    /// Logger that accepts everything and writes nothing
    #[must_use]
    pub fn discard() -> Self {
        Self::new(DiscardSink)
    }

    /// Logger writing into a shared buffer, and a handle to read it back
    #[must_use]
    pub fn memory() -> (Self, MemorySink) {
        let sink = MemorySink::new();
        (Self::new(sink.clone()), sink)
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.shared.level.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.shared.level.read()
    }

    pub fn set_format(&self, format: OutputFormat) {
        *self.shared.format.write() = format;
    }

    pub fn format(&self) -> OutputFormat {
        *self.shared.format.read()
    }

    pub fn set_colors(&self, colors: bool) {
        *self.shared.colors.write() = colors;
    }

    pub fn colors(&self) -> bool {
        *self.shared.colors.read()
    }

    /// Whether an entry at `level` would currently be written
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level())
    }

    /// Fields attached to every entry from this handle
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Derive a logger carrying `fields` on top of this one's.
    ///
    /// The result shares level, format and sink with `self`. `self` keeps
    /// its own fields.
    #[must_use]
    pub fn with_fields(&self, fields: FieldSet) -> Logger {
        Logger {
            shared: Arc::clone(&self.shared),
            fields: self.fields.merge(&fields),
            error_stream: self.error_stream,
        }
    }

    /// Derive a logger whose entries all go to the sink's error stream.
    ///
    /// Level, format and fields are shared with `self`; only the routing
    /// changes. Loggers derived from the result keep that routing.
    #[must_use]
    pub fn error_stream_only(&self) -> Logger {
        Logger {
            shared: Arc::clone(&self.shared),
            fields: self.fields.clone(),
            error_stream: true,
        }
    }

    /// Whether entries from this handle are routed to the error stream
    pub fn is_error_stream_only(&self) -> bool {
        self.error_stream
    }

    /// Derive a logger with a single extra field
    #[must_use]
    pub fn with_field(
        &self,
        key: impl Into<String>,
        value: impl Into<super::field_set::FieldValue>,
    ) -> Logger {
        self.with_fields(FieldSet::new().with(key, value))
    }

    /// Emit `message` at a caller-chosen level.
    ///
    /// `LogLevel::Fatal` terminates the process like [`Logger::fatal`].
    pub fn print(&self, level: LogLevel, message: impl Into<String>) {
        if level == LogLevel::Fatal {
            self.fatal(message);
        }
        if !self.is_enabled(level) {
            self.shared.metrics.record_filtered();
            return;
        }
        self.emit(LogEntry::new(level, message).with_fields(self.fields.clone()));
    }

    pub fn printf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level == LogLevel::Fatal {
            self.fatalf(args);
        }
        if !self.is_enabled(level) {
            self.shared.metrics.record_filtered();
            return;
        }
        self.print(level, args.to_string());
    }

    /// Alias of [`Logger::print`], used by the logging macros
    #[inline]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.print(level, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.print(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.print(LogLevel::Info, message);
    }

    /// Success notice, visible whenever `Info` is
    #[inline]
    pub fn done(&self, message: impl Into<String>) {
        self.print(LogLevel::Done, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.print(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.print(LogLevel::Error, message);
    }

    /// Write a fatal entry, flush the sink and exit the process with
    /// [`FATAL_EXIT_CODE`].
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.emit(LogEntry::new(LogLevel::Fatal, message).with_fields(self.fields.clone()));
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Debug, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Info, args);
    }

    #[inline]
    pub fn donef(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Done, args);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Warn, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Error, args);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args.to_string())
    }

    /// Line-oriented `io::Write` adapter emitting at `level`.
    ///
    /// With `raw`, lines are written to the sink verbatim instead of being
    /// encoded as entries.
    pub fn writer(&self, level: LogLevel, raw: bool) -> LogWriter {
        LogWriter::new(self.clone(), level, raw)
    }

    /// Write `message` as a single entry without message decoration.
    ///
    /// Text output receives the string verbatim, terminated with `\n` if it
    /// does not already end with one; JSON output wraps it in an entry. Sink
    /// failures are counted and reported, never returned.
    pub fn write_string(&self, level: LogLevel, message: &str) {
        let _ = self.write_level(level, message.as_bytes());
    }

    /// Byte-level variant of [`Logger::write_string`].
    ///
    /// Returns the input length when the bytes were accepted or filtered out,
    /// and the sink's error when writing failed.
    pub fn write_level(&self, level: LogLevel, message: &[u8]) -> io::Result<usize> {
        if !self.is_enabled(level) {
            self.shared.metrics.record_filtered();
            return Ok(message.len());
        }

        let result = match self.format() {
            OutputFormat::Text if message.ends_with(b"\n") => self.write_bytes(level, message),
            OutputFormat::Text => {
                let mut line = Vec::with_capacity(message.len() + 1);
                line.extend_from_slice(message);
                line.push(b'\n');
                self.write_bytes(level, &line)
            }
            OutputFormat::Json => {
                let text = String::from_utf8_lossy(message);
                let entry = LogEntry::new(level, trim_line_ending(&text))
                    .with_fields(self.fields.clone());
                let line = OutputFormat::Json.encode(&entry, &self.shared.formatter, false);
                self.write_bytes(level, line.as_bytes())
            }
        };

        into_io_result(result, message.len())
    }

    /// Write `bytes` to the sink unchanged in either format, if `level` passes
    pub(crate) fn write_raw(&self, level: LogLevel, bytes: &[u8]) -> io::Result<usize> {
        if !self.is_enabled(level) {
            self.shared.metrics.record_filtered();
            return Ok(bytes.len());
        }
        into_io_result(self.write_bytes(level, bytes), bytes.len())
    }

    pub fn flush(&self) -> Result<()> {
        self.shared.sink.lock().flush()
    }

    /// Flush and release the sink. Entries logged afterwards depend on the
    /// sink's behavior once closed.
    pub fn close(&self) -> Result<()> {
        self.shared.sink.lock().close()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    /// Name of the configured sink
    pub fn sink_name(&self) -> String {
        self.shared.sink.lock().name().to_string()
    }

    /// Whether two handles share the same underlying state
    pub fn shares_state_with(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    fn emit(&self, entry: LogEntry) {
        let format = self.format();
        let colors = self.colors();
        let line = format.encode(&entry, &self.shared.formatter, colors);
        let _ = self.write_bytes(entry.level, line.as_bytes());
    }

    /// Write to the sink with panic isolation, counting the outcome
    fn write_bytes(&self, level: LogLevel, bytes: &[u8]) -> Result<()> {
        let result = {
            let mut sink = self.shared.sink.lock();
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                if self.error_stream {
                    sink.write_error_stream(level, bytes)
                } else {
                    sink.write(level, bytes)
                }
            }))
        };

        match result {
            Ok(Ok(())) => {
                self.shared.metrics.record_written();
                Ok(())
            }
            Ok(Err(e)) => {
                self.report_failure(&format!("Sink write failed: {}", e));
                Err(e)
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                self.report_failure(&format!("Sink panicked: {}", panic_msg));
                Err(LoggerError::other(format!("sink panicked: {}", panic_msg)))
            }
        }
    }

    /// Report on the first failure and every 1000th after that
    fn report_failure(&self, message: &str) {
        let failed = self.shared.metrics.record_failed();
        if failed == 0 || (failed + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER ERROR] {} ({} entries lost so far)",
                message,
                failed + 1
            );
        }
    }
}

fn into_io_result(result: Result<()>, len: usize) -> io::Result<usize> {
    match result {
        Ok(()) => Ok(len),
        Err(LoggerError::IoError(e)) => Err(e),
        Err(e) => Err(io::Error::other(e.to_string())),
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdio()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("format", &self.format())
            .field("fields", &self.fields)
            .field("error_stream", &self.error_stream)
            .finish_non_exhaustive()
    }
}
