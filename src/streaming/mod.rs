//! Streaming a blocking writer into a logger

pub mod line_streamer;
pub mod pipe;

pub use line_streamer::{active_readers, stream_lines, LineStreamer};
pub use pipe::{pipe, PipeReader, PipeWriter};
