//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_cli_logger::prelude::*;
//! use rust_cli_logger::{fields, info};
//!
//! let logger = Logger::discard();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Annotated with fields
//! let request = logger.with_fields(fields! { "user" => 42, "action" => "login" });
//! info!(request, "Request accepted");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// use rust_cli_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.print($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// # logger.set_level(LogLevel::Debug);
/// use rust_cli_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a success notice.
///
/// # Examples
///
/// ```
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// use rust_cli_logger::done;
/// done!(logger, "Deployed {} services", 3);
/// ```
#[macro_export]
macro_rules! done {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Done, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// use rust_cli_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// use rust_cli_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

/// Build a [`FieldSet`](crate::FieldSet) from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_cli_logger::fields;
///
/// let set = fields! { "animal" => "walrus", "size" => 10 };
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldSet::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::FieldSet::new()$(.with($key, $value))+
    };
}
