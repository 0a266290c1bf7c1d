//! Process-wide default logger
//!
//! For the outermost composition boundary only (a binary's `main`). Library
//! code should take a [`Logger`] or one of the capability traits instead.

use super::{
    error::{LoggerError, Result},
    field_set::FieldSet,
    logger::Logger,
};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide default.
///
/// Fails if a logger was already installed or [`global`] was already used.
pub fn init_global(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::GlobalAlreadyInitialized)
}

/// The process-wide logger, defaulting to [`Logger::stdio`]
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::stdio)
}

/// Derive a logger from the process-wide one
pub fn with_fields(fields: FieldSet) -> Logger {
    global().with_fields(fields)
}
