//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A destination for encoded log bytes.
///
/// The level is passed along so a sink can route by severity; the bytes are
/// already encoded and newline-terminated where the format requires it.
pub trait Sink: Send {
    fn write(&mut self, level: LogLevel, bytes: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Write to the sink's error stream regardless of `level`.
    ///
    /// Sinks without a separate error stream treat this like [`Sink::write`].
    fn write_error_stream(&mut self, level: LogLevel, bytes: &[u8]) -> Result<()> {
        self.write(level, bytes)
    }

    /// Release the destination. Later writes may fail.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}
