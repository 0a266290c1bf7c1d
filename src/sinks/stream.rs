//! Stream sink implementation

use crate::core::{LogLevel, Result, Sink};
use std::io::{self, Write};

/// Writes to a pair of byte streams, routing `Error` and `Fatal` to the
/// error stream and everything else to the output stream.
pub struct StreamSink {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl StreamSink {
    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Standard output and standard error
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Everything to standard error
    pub fn stderr_only() -> Self {
        Self::new(io::stderr(), io::stderr())
    }
}

impl Default for StreamSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl Sink for StreamSink {
    fn write(&mut self, level: LogLevel, bytes: &[u8]) -> Result<()> {
        match level {
            LogLevel::Error | LogLevel::Fatal => self.err.write_all(bytes)?,
            _ => self.out.write_all(bytes)?,
        }
        Ok(())
    }

    fn write_error_stream(&mut self, _level: LogLevel, bytes: &[u8]) -> Result<()> {
        self.err.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both since we write to both
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stream"
    }
}
