//! Value Objects
//!
//! Immutable values and helpers shared by the entities.

pub mod field;
pub mod identifier;
pub mod timestamp;

pub use identifier::generate_id;
pub use timestamp::current_time;
