//! PromptLab Domain Library
//!
//! Core domain types and interfaces for the PromptLab prompt manager.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, Collection) and their input shapes
//!   - `value_objects/`: Ids, timestamps, field constraints
//!   - `services/`: Sort, filter, search and template helpers
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `storage`: Data access interface implemented by the storage backends
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::{Prompt, PromptDraft, Storage};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    current_time, extract_variables, filter_by_collection, generate_id, search, sort_by_date,
    validate_content, Collection, CollectionDraft, DomainError, Prompt, PromptDraft, PromptPatch,
};
pub use ports::Storage;
