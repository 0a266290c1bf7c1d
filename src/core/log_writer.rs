//! `io::Write` adapter that turns a byte stream into log entries

use super::log_level::LogLevel;
use super::logger::Logger;
use super::output_format::trim_line_ending;
use std::io::{self, Write};

/// Emits one log entry per complete line written to it.
///
/// Created by [`Logger::writer`]. A trailing line without a newline is emitted
/// on [`LogWriter::close`] or when the writer is dropped. Sink failures while
/// writing are counted in the logger metrics; `write` always consumes `buf`.
pub struct LogWriter {
    logger: Logger,
    level: LogLevel,
    raw: bool,
    buffer: Vec<u8>,
    closed: bool,
}

impl LogWriter {
    pub(crate) fn new(logger: Logger, level: LogLevel, raw: bool) -> Self {
        Self {
            logger,
            level,
            raw,
            buffer: Vec::new(),
            closed: false,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Emit any buffered partial line and stop accepting writes
    pub fn close(mut self) -> io::Result<()> {
        self.finish()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.buffer.is_empty() {
            return Ok(());
        }
        let rest = std::mem::take(&mut self.buffer);
        self.emit_line(&rest)
    }

    fn emit_line(&self, line: &[u8]) -> io::Result<()> {
        if self.raw {
            self.logger.write_raw(self.level, line)?;
        } else {
            let text = String::from_utf8_lossy(line);
            self.logger.print(self.level, trim_line_ending(&text));
        }
        Ok(())
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "log writer is closed"));
        }

        self.buffer.extend_from_slice(buf);
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let _ = self.emit_line(&line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.logger.flush().map_err(|e| io::Error::other(e.to_string()))
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LoggerError, OutputFormat, Result, Sink};

    struct FailingSink;

    impl Sink for FailingSink {
        fn write(&mut self, _level: LogLevel, _bytes: &[u8]) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_emits_complete_lines() {
        let (logger, sink) = Logger::memory();
        let mut writer = logger.writer(LogLevel::Info, false);

        writer.write_all(b"first\nsec").unwrap();
        assert_eq!(sink.lines(), vec!["info  first"]);

        writer.write_all(b"ond\n").unwrap();
        assert_eq!(sink.lines(), vec!["info  first", "info  second"]);
    }

    #[test]
    fn test_close_flushes_partial_line() {
        let (logger, sink) = Logger::memory();
        let mut writer = logger.writer(LogLevel::Warn, false);

        writer.write_all(b"no newline").unwrap();
        assert!(sink.is_empty());

        writer.close().unwrap();
        assert_eq!(sink.contents(), "warn  no newline\n");
    }

    #[test]
    fn test_drop_flushes_partial_line() {
        let (logger, sink) = Logger::memory();
        {
            let mut writer = logger.writer(LogLevel::Info, true);
            writer.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.contents(), "tail");
    }

    #[test]
    fn test_raw_skips_decoration() {
        let (logger, sink) = Logger::memory();
        let logger = logger.with_field("k", "v");
        let mut writer = logger.writer(LogLevel::Info, true);

        writer.write_all(b"verbatim\n").unwrap();
        assert_eq!(sink.contents(), "verbatim\n");
    }

    #[test]
    fn test_raw_skips_json_encoding() {
        let (logger, sink) = Logger::memory();
        logger.set_format(OutputFormat::Json);
        let mut writer = logger.with_field("k", "v").writer(LogLevel::Info, true);

        writer.write_all(b"verbatim\n").unwrap();
        writer.write_all(b"no newline").unwrap();
        writer.close().unwrap();
        assert_eq!(sink.contents(), "verbatim\nno newline");
    }

    #[test]
    fn test_sink_failure_consumes_whole_buffer() {
        for raw in [false, true] {
            let logger = Logger::new(FailingSink);
            let mut writer = logger.writer(LogLevel::Info, raw);

            assert_eq!(writer.write(b"one\ntwo\nthree").unwrap(), 13);
            writer.write_all(b"four\n").unwrap();
            assert_eq!(logger.metrics().failed_count(), 3);
            assert_eq!(logger.metrics().total_written(), 0);
        }
    }

    #[test]
    fn test_decorated_lines_carry_fields() {
        let (logger, sink) = Logger::memory();
        logger.set_format(OutputFormat::Json);
        let mut writer = logger.with_field("step", 2).writer(LogLevel::Info, false);

        writer.write_all(b"building\n").unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&sink.contents()).unwrap();
        assert_eq!(parsed["message"], "building");
        assert_eq!(parsed["fields"]["step"], 2);
    }

    #[test]
    fn test_filtered_level_writes_nothing() {
        let (logger, sink) = Logger::memory();
        let mut writer = logger.writer(LogLevel::Debug, false);
        writer.write_all(b"hidden\n").unwrap();
        writer.close().unwrap();
        assert!(sink.is_empty());
    }
}
