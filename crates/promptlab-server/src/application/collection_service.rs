//! Collection Application Service (Use Case)
//!
//! Orchestrates domain operations for Collection management, including the
//! detach cascade that keeps prompts from pointing at deleted collections.

use std::sync::Arc;

use promptlab::{Collection, CollectionDraft, DomainError, Storage};

/// Application service for Collection operations
pub struct CollectionService<S: Storage + ?Sized = dyn Storage> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> CollectionService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Get all Collections, oldest first
    pub async fn list(&self) -> Result<Vec<Collection>, DomainError> {
        let mut collections = self.storage.get_all_collections().await?;
        collections.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(collections)
    }

    /// Get a Collection by ID
    pub async fn get(&self, id: &str) -> Result<Collection, DomainError> {
        self.storage
            .get_collection(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Collection", id))
    }

    /// Create a new Collection
    pub async fn create(&self, draft: CollectionDraft) -> Result<Collection, DomainError> {
        let collection = Collection::new(draft)?;
        let saved = self.storage.create_collection(collection).await?;

        tracing::info!("Created Collection: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete a Collection after detaching its prompts
    ///
    /// Not atomic: prompts detached before a failure stay detached.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.get(id).await?;

        let prompts = self.storage.get_prompts_by_collection(id).await?;
        let detached = prompts.len();
        for prompt in prompts {
            self.storage.update_prompt(&prompt.id, prompt.detached()).await?;
        }

        if !self.storage.delete_collection(id).await? {
            return Err(DomainError::not_found("Collection", id));
        }

        tracing::info!("Deleted Collection: {} ({} prompts detached)", id, detached);

        Ok(())
    }
}
