//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for Prompt management.

use std::sync::Arc;

use promptlab::{
    filter_by_collection, search, sort_by_date, DomainError, Prompt, PromptDraft, PromptPatch,
    Storage,
};

/// Application service for Prompt operations
pub struct PromptService<S: Storage + ?Sized = dyn Storage> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> PromptService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// List prompts, newest first
    ///
    /// Empty `collection_id` or `query` values are ignored.
    pub async fn list(
        &self,
        collection_id: Option<&str>,
        query: Option<&str>,
    ) -> Result<Vec<Prompt>, DomainError> {
        let mut prompts = self.storage.get_all_prompts().await?;

        if let Some(collection_id) = collection_id.filter(|id| !id.is_empty()) {
            prompts = filter_by_collection(prompts, collection_id);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            prompts = search(prompts, query);
        }

        Ok(sort_by_date(prompts, true))
    }

    /// Get a prompt by ID
    pub async fn get(&self, id: &str) -> Result<Prompt, DomainError> {
        self.storage
            .get_prompt(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// Create a new prompt
    pub async fn create(&self, draft: PromptDraft) -> Result<Prompt, DomainError> {
        draft.validate()?;
        if let Some(collection_id) = draft.collection_reference() {
            self.require_collection(collection_id).await?;
        }

        let prompt = Prompt::new(draft)?;
        let saved = self.storage.create_prompt(prompt).await?;

        tracing::info!("Created Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Replace every editable field of a prompt
    pub async fn replace(&self, id: &str, draft: PromptDraft) -> Result<Prompt, DomainError> {
        let current = self.get(id).await?;

        draft.validate()?;
        if let Some(collection_id) = draft.collection_reference() {
            self.require_collection(collection_id).await?;
        }

        let updated = current.replaced_with(draft)?;
        let saved = self.store(id, updated).await?;

        tracing::info!("Updated Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Apply the fields present in `patch`
    pub async fn patch(&self, id: &str, patch: PromptPatch) -> Result<Prompt, DomainError> {
        let current = self.get(id).await?;

        let reference = patch.collection_reference().map(str::to_string);
        let updated = current.patched_with(patch)?;
        if let Some(collection_id) = reference {
            self.require_collection(&collection_id).await?;
        }

        let saved = self.store(id, updated).await?;

        tracing::info!("Patched Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Delete a prompt
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.storage.delete_prompt(id).await? {
            return Err(DomainError::not_found("Prompt", id));
        }

        tracing::info!("Deleted Prompt: {}", id);

        Ok(())
    }

    async fn require_collection(&self, collection_id: &str) -> Result<(), DomainError> {
        match self.storage.get_collection(collection_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::invalid_reference("Collection", collection_id)),
        }
    }

    // the prompt may have been deleted since it was read
    async fn store(&self, id: &str, prompt: Prompt) -> Result<Prompt, DomainError> {
        self.storage
            .update_prompt(id, prompt)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use promptlab::{Collection, CollectionDraft};

    fn service() -> (PromptService<MemoryStorage>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (PromptService::new(storage.clone()), storage)
    }

    fn draft(title: &str, collection_id: Option<&str>) -> PromptDraft {
        PromptDraft {
            title: title.to_string(),
            content: format!("{} content", title),
            description: Some(format!("{} description", title)),
            collection_id: collection_id.map(str::to_string),
        }
    }

    async fn collection(storage: &MemoryStorage, name: &str) -> Collection {
        let collection = Collection::new(CollectionDraft {
            name: name.to_string(),
            description: None,
        })
        .unwrap();
        storage.create_collection(collection).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_generates_distinct_ids() {
        let (service, _) = service();
        let a = service.create(draft("a", None)).await.unwrap();
        let b = service.create(draft("b", None)).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn test_create_with_unknown_collection() {
        let (service, storage) = service();
        let err = service
            .create(draft("a", Some("missing")))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidReference { .. }));
        assert!(storage.get_all_prompts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_validates_before_reference_check() {
        let (service, _) = service();
        let err = service
            .create(draft("", Some("missing")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "title", .. }));
    }

    #[tokio::test]
    async fn test_create_with_empty_collection_id_is_uncategorized() {
        let (service, _) = service();
        let created = service.create(draft("a", Some(""))).await.unwrap();
        assert_eq!(created.collection_id, None);
    }

    #[tokio::test]
    async fn test_get_missing_prompt() {
        let (service, _) = service();
        let err = service.get("missing").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_filters_searches_and_sorts() {
        let (service, storage) = service();
        let eng = collection(&storage, "Engineering").await;

        let review = service
            .create(draft("Code Review", Some(&eng.id)))
            .await
            .unwrap();
        let unrelated = service
            .create(draft("unrelated", Some(&eng.id)))
            .await
            .unwrap();
        service.create(draft("Review elsewhere", None)).await.unwrap();

        let all = service.list(None, None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let in_eng = service.list(Some(&eng.id), None).await.unwrap();
        let ids: Vec<&str> = in_eng.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&review.id.as_str()));
        assert!(ids.contains(&unrelated.id.as_str()));

        let found = service.list(Some(&eng.id), Some("review")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, review.id);
    }

    #[tokio::test]
    async fn test_list_ignores_empty_parameters() {
        let (service, _) = service();
        service.create(draft("a", None)).await.unwrap();
        service.create(draft("b", None)).await.unwrap();

        assert_eq!(service.list(Some(""), Some("")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_replace_overwrites_omitted_fields() {
        let (service, storage) = service();
        let eng = collection(&storage, "Engineering").await;
        let created = service.create(draft("a", Some(&eng.id))).await.unwrap();

        let replaced = service
            .replace(
                &created.id,
                PromptDraft {
                    title: "new".to_string(),
                    content: "new content".to_string(),
                    description: None,
                    collection_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.description, None);
        assert_eq!(replaced.collection_id, None);
        assert_eq!(replaced.created_at, created.created_at);
        assert!(replaced.updated_at >= created.updated_at);
        assert_eq!(storage.get_prompt(&created.id).await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn test_replace_errors() {
        let (service, _) = service();
        let err = service.replace("missing", draft("a", None)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let created = service.create(draft("a", None)).await.unwrap();
        let err = service
            .replace(&created.id, draft("a", Some("missing")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference { .. }));
        assert_eq!(service.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_patch_keeps_omitted_fields() {
        let (service, storage) = service();
        let eng = collection(&storage, "Engineering").await;
        let created = service.create(draft("a", Some(&eng.id))).await.unwrap();

        let patched = service
            .patch(
                &created.id,
                PromptPatch {
                    title: Some(Some("patched".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.title, "patched");
        assert_eq!(patched.content, created.content);
        assert_eq!(patched.description, created.description);
        assert_eq!(patched.collection_id, Some(eng.id));
        assert_eq!(patched.created_at, created.created_at);
        assert!(patched.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_patch_applies_explicit_null() {
        let (service, _) = service();
        let created = service.create(draft("a", None)).await.unwrap();

        let patched = service
            .patch(
                &created.id,
                PromptPatch {
                    description: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.description, None);

        let err = service
            .patch(
                &created.id,
                PromptPatch {
                    content: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "content", .. }));
    }

    #[tokio::test]
    async fn test_patch_with_unknown_collection() {
        let (service, _) = service();
        let created = service.create(draft("a", None)).await.unwrap();

        let err = service
            .patch(
                &created.id,
                PromptPatch {
                    collection_id: Some(Some("missing".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidReference { .. }));
        assert_eq!(service.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_patch_with_empty_collection_id_is_rejected() {
        let (service, storage) = service();
        let eng = collection(&storage, "Engineering").await;
        let created = service.create(draft("a", Some(&eng.id))).await.unwrap();

        let err = service
            .patch(
                &created.id,
                PromptPatch {
                    collection_id: Some(Some(String::new())),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidReference { .. }));
        let stored = service.get(&created.id).await.unwrap();
        assert_eq!(stored.collection_id, Some(eng.id));
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, storage) = service();
        let keep = service.create(draft("keep", None)).await.unwrap();
        let gone = service.create(draft("gone", None)).await.unwrap();

        service.delete(&gone.id).await.unwrap();
        let err = service.delete(&gone.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let remaining = storage.get_all_prompts().await.unwrap();
        assert_eq!(remaining, vec![keep]);
    }

    #[tokio::test]
    async fn test_works_behind_dyn_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let service: PromptService = PromptService::new(storage);
        let created = service.create(draft("a", None)).await.unwrap();
        assert_eq!(service.get(&created.id).await.unwrap(), created);
    }
}
