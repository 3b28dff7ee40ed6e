//! Storage Backend Module
//!
//! Defines the async key-value capability interface the cache persists
//! through, plus the bundled in-process implementation.

mod backend;
mod memory;

pub use backend::StorageBackend;
pub use memory::MemoryBackend;
