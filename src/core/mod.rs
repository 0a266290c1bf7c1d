//! Core logger types and traits

pub mod capability;
pub mod config;
pub mod error;
pub mod field_set;
pub mod global;
pub mod log_entry;
pub mod log_level;
pub mod log_writer;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sink;
pub mod timestamp;

pub use capability::{FieldLogger, LeveledLogger, SimpleLogger};
pub use config::{Destination, LoggerBuilder, LoggerConfig};
pub use error::{LoggerError, Result};
pub use field_set::{FieldSet, FieldValue};
pub use global::{global, init_global};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use log_writer::LogWriter;
pub use logger::{Logger, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use sink::Sink;
pub use timestamp::{FormatterConfig, TimestampFormat};
