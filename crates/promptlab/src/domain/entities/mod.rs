//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: Titled template text
//! - Collection: Named grouping of prompts

mod collection;
mod prompt;

pub use collection::*;
pub use prompt::*;
