//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of the Storage port and enforces
//! the rules that span both entity types.

mod collection_service;
mod prompt_service;

pub use collection_service::CollectionService;
pub use prompt_service::PromptService;
