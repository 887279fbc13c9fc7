//! Key-value store implementations.
//!
//! `FileKvStore` persists to a JSON file in the data directory and is what
//! the CLI uses by default; `MemoryKvStore` lives only as long as the process.

pub mod file;
pub mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;
