//! Sink implementations

pub mod discard;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
pub mod stream;

pub use discard::DiscardSink;
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
pub use stream::StreamSink;

pub use crate::core::Sink;
