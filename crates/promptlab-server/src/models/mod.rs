//! PromptLab Request/Response Models
//!
//! - Prompt: create, replace and patch bodies, list query and response
//! - Collection: create body and list response

mod collection;
mod prompt;

pub use collection::*;
pub use prompt::*;
