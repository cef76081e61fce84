//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with persistence.
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod storage;

// Re-exports
pub use storage::*;
