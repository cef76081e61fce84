//! In-memory implementation of Storage
//!
//! Nothing survives a restart. Used for tests and throwaway servers.

use async_trait::async_trait;
use tokio::sync::RwLock;

use promptlab::{Collection, DomainError, Prompt, Storage};

use super::tables::Tables;

/// Volatile storage backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every prompt and collection
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn clear(&self) {
        self.tables.write().await.clear();
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, DomainError> {
        let mut tables = self.tables.write().await;
        tables.prompts.insert(prompt.id.clone(), prompt.clone());
        Ok(prompt)
    }

    async fn get_prompt(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        Ok(self.tables.read().await.prompts.get(id).cloned())
    }

    async fn get_all_prompts(&self) -> Result<Vec<Prompt>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.prompts_in_order().into_iter().cloned().collect())
    }

    async fn update_prompt(
        &self,
        id: &str,
        prompt: Prompt,
    ) -> Result<Option<Prompt>, DomainError> {
        Ok(self.tables.write().await.replace_prompt(id, prompt))
    }

    async fn delete_prompt(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.tables.write().await.prompts.remove(id).is_some())
    }

    async fn create_collection(&self, collection: Collection) -> Result<Collection, DomainError> {
        let mut tables = self.tables.write().await;
        tables
            .collections
            .insert(collection.id.clone(), collection.clone());
        Ok(collection)
    }

    async fn get_collection(&self, id: &str) -> Result<Option<Collection>, DomainError> {
        Ok(self.tables.read().await.collections.get(id).cloned())
    }

    async fn get_all_collections(&self) -> Result<Vec<Collection>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.collections_in_order().into_iter().cloned().collect())
    }

    async fn delete_collection(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.tables.write().await.collections.remove(id).is_some())
    }
}
