//! In-memory byte pipe with rendezvous semantics
//!
//! Every write is a handoff: it blocks until the reading side takes the
//! chunk. Closing (or dropping) the writer ends the stream; dropping the
//! reader makes further writes fail with `BrokenPipe`.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::io::{self, BufRead, Read, Write};

/// Create a connected reader/writer pair
pub fn pipe() -> (PipeReader, PipeWriter) {
    let (sender, receiver) = bounded(0);
    (
        PipeReader {
            receiver,
            chunk: Vec::new(),
            pos: 0,
        },
        PipeWriter {
            sender: Some(sender),
        },
    )
}

/// Write end of a [`pipe`]
#[derive(Debug)]
pub struct PipeWriter {
    sender: Option<Sender<Vec<u8>>>,
}

impl PipeWriter {
    /// Close the write end. Returns `true` only for the call that closed it.
    pub fn close(&mut self) -> bool {
        self.sender.take().is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "write on closed pipe"))?;
        if buf.is_empty() {
            return Ok(0);
        }

        sender
            .send(buf.to_vec())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "pipe reader has gone away"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Read end of a [`pipe`]
#[derive(Debug)]
pub struct PipeReader {
    receiver: Receiver<Vec<u8>>,
    chunk: Vec<u8>,
    pos: usize,
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for PipeReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.pos >= self.chunk.len() {
            match self.receiver.recv() {
                Ok(chunk) => {
                    self.chunk = chunk;
                    self.pos = 0;
                }
                // All writers are gone: end of stream
                Err(_) => {
                    self.chunk.clear();
                    self.pos = 0;
                    return Ok(&[]);
                }
            }
        }
        Ok(&self.chunk[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.chunk.len());
    }
}
