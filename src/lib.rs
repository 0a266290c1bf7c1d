//! # Rust CLI Logger
//!
//! A leveled, field-annotated logging facade for command-line tools, with a
//! table printer that streams its output through the logger line by line.
//!
//! ## Features
//!
//! - **Leveled**: `fatal`, `error`, `warn`, `info`, `done` and `debug` with a
//!   shared, runtime-adjustable threshold
//! - **Structured**: immutable field sets merged into derived loggers
//! - **Two formats**: human-readable text or one JSON object per line
//! - **Tables**: bordered tables written through the logger, never interleaved
//!   with later output
//!
//! ## Example
//!
//! ```
//! use rust_cli_logger::prelude::*;
//!
//! let (logger, sink) = Logger::memory();
//! let walrus = logger.with_fields(FieldSet::new().with("animal", "walrus"));
//! walrus.info("A group of walrus emerges from the ocean");
//!
//! print_table(&logger, &["Name", "Size"], &[["walrus", "10"]]).unwrap();
//! assert!(sink.contents().contains("animal=walrus"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;
pub mod streaming;
pub mod table;

pub mod prelude {
    pub use crate::core::{
        FieldLogger, FieldSet, FieldValue, LeveledLogger, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, OutputFormat, Result, SimpleLogger,
    };
    pub use crate::sinks::{DiscardSink, MemorySink, StreamSink};
    pub use crate::table::{print_table, print_table_with_options, Alignment, AsciiTable};
}

pub use crate::core::{
    global, init_global, Destination, FieldLogger, FieldSet, FieldValue, FormatterConfig,
    LeveledLogger, LogEntry, LogLevel, LogWriter, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, OutputFormat, Result, SimpleLogger, Sink, TimestampFormat,
    FATAL_EXIT_CODE,
};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{DiscardSink, MemorySink, StreamSink};
pub use streaming::{active_readers, pipe, stream_lines, LineStreamer, PipeReader, PipeWriter};
pub use table::{
    print_table, print_table_with_options, print_table_with_renderer, Alignment, AsciiTable,
    TableRenderer,
};
