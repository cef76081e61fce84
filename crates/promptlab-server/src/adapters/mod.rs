//! Infrastructure Adapters
//!
//! Implementations of the Storage port: one volatile, one backed by JSON files.

pub mod json_file;
pub mod memory;
mod tables;

// Re-exports
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
