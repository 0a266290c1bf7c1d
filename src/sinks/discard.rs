//! Sink that drops everything

use crate::core::{LogLevel, Result, Sink};

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl DiscardSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for DiscardSink {
    fn write(&mut self, _level: LogLevel, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
