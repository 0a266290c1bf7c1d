//! In-memory sink, mainly for tests and for capturing output

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Shared in-memory buffer. Clones refer to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    write_delay: Option<Duration>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep before every write to simulate a slow destination
    #[must_use]
    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    fn append(&self, bytes: &[u8]) {
        if let Some(delay) = self.write_delay {
            std::thread::sleep(delay);
        }
        self.buffer.lock().extend_from_slice(bytes);
    }
}

impl Sink for MemorySink {
    fn write(&mut self, _level: LogLevel, bytes: &[u8]) -> Result<()> {
        self.append(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl io::Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        Sink::write(&mut writer, LogLevel::Info, b"hello\nworld\n").unwrap();

        assert_eq!(sink.lines(), vec!["hello", "world"]);
        assert_eq!(sink.len(), 12);

        sink.clear();
        assert!(writer.is_empty());
    }
}
