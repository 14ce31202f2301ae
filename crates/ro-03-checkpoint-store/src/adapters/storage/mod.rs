//! Key-value store implementations.

mod file;
mod memory;

pub use file::FileKVStore;
pub use memory::InMemoryKVStore;
