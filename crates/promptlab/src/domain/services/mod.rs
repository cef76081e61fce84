//! Domain Services
//!
//! Side-effect-free functions over entities already held in memory.

pub mod prompt_query;
pub mod template;

pub use prompt_query::{filter_by_collection, search, sort_by_date};
pub use template::{extract_variables, validate_content};
