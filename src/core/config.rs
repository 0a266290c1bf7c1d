//! Logger construction: a fluent builder and a serde-loadable config

use super::{
    error::Result,
    field_set::{FieldSet, FieldValue},
    log_level::LogLevel,
    logger::Logger,
    output_format::OutputFormat,
    sink::Sink,
    timestamp::{FormatterConfig, TimestampFormat},
};
use crate::sinks::{DiscardSink, StreamSink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_cli_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .format(OutputFormat::Json)
///     .field("service", "deploy")
///     .sink(DiscardSink)
///     .build();
///
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    format: OutputFormat,
    colors: bool,
    formatter: FormatterConfig,
    fields: FieldSet,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            format: OutputFormat::Text,
            colors: false,
            formatter: FormatterConfig::default(),
            fields: FieldSet::new(),
            sink: None,
        }
    }

    /// Set the visibility threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Color level tags in text output
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter.timestamp_format = format;
        self
    }

    /// Prefix text lines with a timestamp
    #[must_use = "builder methods return a new value"]
    pub fn text_timestamps(mut self, enabled: bool) -> Self {
        self.formatter.text_timestamps = enabled;
        self
    }

    /// Base fields for every entry, merged over any already set
    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, fields: FieldSet) -> Self {
        self.fields = self.fields.merge(&fields);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields = self.fields.with(key, value);
        self
    }

    /// Output destination. Defaults to standard output/error.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink: Box<dyn Sink> = match self.sink {
            Some(sink) => sink,
            None => Box::new(StreamSink::stdio()),
        };
        Logger::from_parts(
            sink,
            self.level,
            self.format,
            self.colors,
            self.formatter,
            self.fields,
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

/// Where a configured logger writes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Standard output, with errors on standard error
    #[default]
    Stdout,
    /// Everything on standard error
    Stderr,
    Discard,
    File { path: PathBuf },
}

/// Declarative logger configuration
///
/// # Example
/// ```
/// use rust_cli_logger::core::LoggerConfig;
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{"level": "debug", "format": "json", "destination": "discard"}"#,
/// ).unwrap();
/// let logger = config.build().unwrap();
/// assert_eq!(logger.sink_name(), "discard");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: OutputFormat,
    pub colors: bool,
    pub timestamp_format: TimestampFormat,
    pub text_timestamps: bool,
    pub destination: Destination,
    pub fields: BTreeMap<String, FieldValue>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Result<Logger> {
        let builder = Logger::builder()
            .level(self.level)
            .format(self.format)
            .colors(self.colors)
            .timestamp_format(self.timestamp_format.clone())
            .text_timestamps(self.text_timestamps)
            .fields(FieldSet::from(self.fields.clone()));

        let builder = match &self.destination {
            Destination::Stdout => builder.sink(StreamSink::stdio()),
            Destination::Stderr => builder.sink(StreamSink::stderr_only()),
            Destination::Discard => builder.sink(DiscardSink),
            Destination::File { path } => builder.boxed_sink(file_sink(path)?),
        };

        Ok(builder.build())
    }
}

#[cfg(feature = "file")]
fn file_sink(path: &std::path::Path) -> Result<Box<dyn Sink>> {
    Ok(Box::new(crate::sinks::FileSink::new(path)?))
}

#[cfg(not(feature = "file"))]
fn file_sink(path: &std::path::Path) -> Result<Box<dyn Sink>> {
    Err(super::error::LoggerError::config(
        "destination",
        format!(
            "cannot log to '{}': file sinks require the `file` feature",
            path.display()
        ),
    ))
}
