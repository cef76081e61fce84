//! Storage Port
//!
//! Key-value persistence for Prompts and Collections, keyed by id.
//! Every backend must behave identically from the caller's point of view:
//! values go in and come out by copy, lookups of unknown ids return `None`
//! or `false` rather than an error, and only persistence failures are
//! reported as `Err`.

use async_trait::async_trait;

use crate::domain::services::filter_by_collection;
use crate::domain::{errors::DomainError, Collection, Prompt};

/// Storage interface for Prompt and Collection entities
#[async_trait]
pub trait Storage: Send + Sync {
    // --- Prompts ---

    /// Store a new prompt under its id
    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, DomainError>;

    /// Find a prompt by id
    async fn get_prompt(&self, id: &str) -> Result<Option<Prompt>, DomainError>;

    /// All stored prompts, in no particular order
    async fn get_all_prompts(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Replace the prompt stored under `id`; `None` if there is none
    async fn update_prompt(&self, id: &str, prompt: Prompt)
        -> Result<Option<Prompt>, DomainError>;

    /// Remove a prompt; `false` if it did not exist
    async fn delete_prompt(&self, id: &str) -> Result<bool, DomainError>;

    /// Prompts whose `collection_id` equals `collection_id`
    async fn get_prompts_by_collection(
        &self,
        collection_id: &str,
    ) -> Result<Vec<Prompt>, DomainError> {
        let prompts = self.get_all_prompts().await?;
        Ok(filter_by_collection(prompts, collection_id))
    }

    // --- Collections ---

    /// Store a new collection under its id
    async fn create_collection(&self, collection: Collection) -> Result<Collection, DomainError>;

    /// Find a collection by id
    async fn get_collection(&self, id: &str) -> Result<Option<Collection>, DomainError>;

    /// All stored collections, in no particular order
    async fn get_all_collections(&self) -> Result<Vec<Collection>, DomainError>;

    /// Remove a collection; `false` if it did not exist
    async fn delete_collection(&self, id: &str) -> Result<bool, DomainError>;
}
