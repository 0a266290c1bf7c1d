//! Forward a blocking byte-stream producer into a logger, line by line
//!
//! A [`LineStreamer`] owns one [`pipe`] and one background reader thread.
//! The producer writes into [`LineStreamer::writer`]; the reader splits the
//! stream on `\n` and hands every line to [`FieldLogger::write_string`].
//!
//! Teardown always runs in the same order: close the write end, wait for the
//! reader's completion signal, join the thread. [`LineStreamer::finish`] does
//! this explicitly and `Drop` does it on every other exit path, so the reader
//! can neither block forever on an open pipe nor outlive the session.

use super::pipe::{pipe, PipeReader, PipeWriter};
use crate::core::output_format::trim_line_ending;
use crate::core::{FieldLogger, LogLevel, LoggerError, Result};
use crossbeam_channel::{bounded, Receiver};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

static ACTIVE_READERS: AtomicUsize = AtomicUsize::new(0);

/// Number of line reader threads currently running in this process
pub fn active_readers() -> usize {
    ACTIVE_READERS.load(Ordering::SeqCst)
}

/// Keeps [`ACTIVE_READERS`] accurate even if the reader unwinds
struct ActiveReader;

impl ActiveReader {
    fn enter() -> Self {
        ACTIVE_READERS.fetch_add(1, Ordering::SeqCst);
        ActiveReader
    }
}

impl Drop for ActiveReader {
    fn drop(&mut self) {
        ACTIVE_READERS.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct LineStreamer {
    writer: PipeWriter,
    done: Receiver<usize>,
    handle: Option<JoinHandle<()>>,
    finished: bool,
}

impl LineStreamer {
    /// Start a session forwarding lines unchanged at `level`
    pub fn start<L>(target: L, level: LogLevel) -> Result<Self>
    where
        L: FieldLogger + 'static,
    {
        Self::with_prefix(target, level, "")
    }

    /// Start a session forwarding `prefix + line + "\n"` at `level`
    pub fn with_prefix<L>(target: L, level: LogLevel, prefix: impl Into<String>) -> Result<Self>
    where
        L: FieldLogger + 'static,
    {
        let (reader, writer) = pipe();
        let (done_tx, done_rx) = bounded(1);
        let prefix = prefix.into();

        let handle = thread::Builder::new()
            .name("line-streamer".to_string())
            .spawn(move || {
                let _active = ActiveReader::enter();
                let forwarded = forward_lines(reader, &target, level, &prefix);
                let _ = done_tx.send(forwarded);
            })
            .map_err(|e| {
                LoggerError::io_operation("spawning line reader", "thread creation failed", e)
            })?;

        Ok(Self {
            writer,
            done: done_rx,
            handle: Some(handle),
            finished: false,
        })
    }

    /// Write end of the session's pipe
    pub fn writer(&mut self) -> &mut PipeWriter {
        &mut self.writer
    }

    /// Close the write end and block until every line has been forwarded.
    ///
    /// Returns the number of lines forwarded.
    pub fn finish(mut self) -> Result<usize> {
        self.complete()
    }

    fn complete(&mut self) -> Result<usize> {
        if self.finished {
            return Ok(0);
        }
        self.finished = true;

        self.writer.close();
        let forwarded = self.done.recv();
        let joined = match self.handle.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        };

        match (forwarded, joined) {
            (Ok(count), Ok(())) => Ok(count),
            (_, Err(panic_info)) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!("[LOGGER CRITICAL] Line reader panicked: {}", panic_msg);
                Err(LoggerError::StreamReaderPanicked(panic_msg))
            }
            (Err(_), Ok(())) => Err(LoggerError::StreamReaderPanicked(
                "reader exited without signaling completion".to_string(),
            )),
        }
    }
}

impl Write for LineStreamer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for LineStreamer {
    fn drop(&mut self) {
        let _ = self.complete();
    }
}

fn forward_lines<L: FieldLogger>(
    mut reader: PipeReader,
    target: &L,
    level: LogLevel,
    prefix: &str,
) -> usize {
    let mut forwarded = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                let mut out = String::with_capacity(prefix.len() + text.len() + 1);
                out.push_str(prefix);
                out.push_str(trim_line_ending(&text));
                out.push('\n');
                target.write_string(level, &out);
                forwarded += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    forwarded
}

/// Run `producer` against a fresh session and tear it down before returning.
///
/// The session is finished even when `producer` fails; the producer's error
/// wins over a teardown error.
pub fn stream_lines<L, F, T>(
    target: L,
    level: LogLevel,
    prefix: &str,
    producer: F,
) -> Result<T>
where
    L: FieldLogger + 'static,
    F: FnOnce(&mut PipeWriter) -> Result<T>,
{
    let mut streamer = LineStreamer::with_prefix(target, level, prefix)?;
    let produced = producer(streamer.writer());
    let forwarded = streamer.finish();

    let value = produced?;
    forwarded?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Logger, OutputFormat};

    #[test]
    fn test_forwards_every_line() {
        let (logger, sink) = Logger::memory();
        let mut streamer = LineStreamer::start(logger, LogLevel::Info).unwrap();

        streamer.write_all(b"one\ntwo\n").unwrap();
        streamer.write_all(b"three").unwrap();

        assert_eq!(streamer.finish().unwrap(), 3);
        assert_eq!(sink.contents(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_prefix_and_crlf() {
        let (logger, sink) = Logger::memory();
        let mut streamer = LineStreamer::with_prefix(logger, LogLevel::Info, "> ").unwrap();

        streamer.write_all(b"windows\r\n\n").unwrap();
        streamer.finish().unwrap();

        assert_eq!(sink.contents(), "> windows\n> \n");
    }

    #[test]
    fn test_lines_below_threshold_are_filtered() {
        let (logger, sink) = Logger::memory();
        let mut streamer = LineStreamer::start(logger.clone(), LogLevel::Debug).unwrap();

        streamer.write_all(b"quiet\n").unwrap();
        assert_eq!(streamer.finish().unwrap(), 1);
        assert!(sink.is_empty());
        assert_eq!(logger.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_drop_drains_stream() {
        let (logger, sink) = Logger::memory();
        {
            let mut streamer = LineStreamer::start(logger, LogLevel::Warn).unwrap();
            streamer.write_all(b"dropped early\n").unwrap();
        }
        assert_eq!(sink.contents(), "dropped early\n");
    }

    #[test]
    fn test_json_lines_become_entries() {
        let (logger, sink) = Logger::memory();
        logger.set_format(OutputFormat::Json);

        stream_lines(logger, LogLevel::Info, "", |w| {
            w.write_all(b"alpha\nbeta\n")?;
            Ok(())
        })
        .unwrap();

        let messages: Vec<String> = sink
            .lines()
            .iter()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["message"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(messages, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_stream_lines_drains_on_producer_error() {
        let (logger, sink) = Logger::memory();

        let result: Result<()> = stream_lines(logger, LogLevel::Info, "", |w| {
            w.write_all(b"partial output\n")?;
            Err(LoggerError::other("producer failed"))
        });

        assert!(matches!(result, Err(LoggerError::Other(_))));
        assert_eq!(sink.contents(), "partial output\n");
    }
}
