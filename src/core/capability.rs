//! Narrow logging capabilities
//!
//! Code that only needs to emit messages should depend on [`SimpleLogger`] or
//! [`LeveledLogger`]; [`FieldLogger`] adds field derivation and the stream
//! plumbing used by the table printer. [`Logger`] implements all three.

use super::{
    field_set::FieldSet, log_level::LogLevel, log_writer::LogWriter, logger::Logger,
    output_format::OutputFormat,
};
use std::fmt;
use std::io;

/// Minimal emit-only capability
pub trait SimpleLogger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, &args.to_string());
    }
}

/// Leveled emission with a shared threshold
pub trait LeveledLogger: SimpleLogger {
    fn set_level(&self, level: LogLevel);
    fn level(&self) -> LogLevel;

    /// Write a fatal entry and terminate the process
    fn fatal(&self, message: &str) -> !;

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn done(&self, message: &str) {
        self.log(LogLevel::Done, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Full capability: field derivation, format switching and stream access
pub trait FieldLogger: LeveledLogger {
    fn with_fields(&self, fields: FieldSet) -> Box<dyn FieldLogger>;
    /// Derive a logger whose entries all go to the sink's error stream
    fn error_stream_only(&self) -> Box<dyn FieldLogger>;
    fn set_format(&self, format: OutputFormat);
    fn format(&self) -> OutputFormat;
    fn writer(&self, level: LogLevel, raw: bool) -> LogWriter;
    fn write_string(&self, level: LogLevel, message: &str);
    fn write_level(&self, level: LogLevel, message: &[u8]) -> io::Result<usize>;
}

impl SimpleLogger for Logger {
    fn log(&self, level: LogLevel, message: &str) {
        Logger::print(self, level, message);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        Logger::infof(self, args);
    }
}

impl LeveledLogger for Logger {
    fn set_level(&self, level: LogLevel) {
        Logger::set_level(self, level);
    }

    fn level(&self) -> LogLevel {
        Logger::level(self)
    }

    fn fatal(&self, message: &str) -> ! {
        Logger::fatal(self, message)
    }
}

impl FieldLogger for Logger {
    fn with_fields(&self, fields: FieldSet) -> Box<dyn FieldLogger> {
        Box::new(Logger::with_fields(self, fields))
    }

    fn error_stream_only(&self) -> Box<dyn FieldLogger> {
        Box::new(Logger::error_stream_only(self))
    }

    fn set_format(&self, format: OutputFormat) {
        Logger::set_format(self, format);
    }

    fn format(&self) -> OutputFormat {
        Logger::format(self)
    }

    fn writer(&self, level: LogLevel, raw: bool) -> LogWriter {
        Logger::writer(self, level, raw)
    }

    fn write_string(&self, level: LogLevel, message: &str) {
        Logger::write_string(self, level, message);
    }

    fn write_level(&self, level: LogLevel, message: &[u8]) -> io::Result<usize> {
        Logger::write_level(self, level, message)
    }
}
