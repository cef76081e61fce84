//! Prompt - Titled template text, optionally filed in a Collection
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::field::{limit_length, normalize_reference, require_length};
use crate::domain::value_objects::{current_time, generate_id, timestamp};

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Prompt - A prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    /// `None` means uncategorized
    pub collection_id: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or fully replacing a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

/// Partial update for a prompt
///
/// Outer `None` leaves the field untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptPatch {
    pub title: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub collection_id: Option<Option<String>>,
}

fn validate_fields(title: &str, content: &str, description: Option<&str>) -> Result<(), DomainError> {
    require_length("title", title, 1, Some(TITLE_MAX_LEN))?;
    require_length("content", content, 1, None)?;
    limit_length("description", description, DESCRIPTION_MAX_LEN)
}

impl PromptDraft {
    /// Collection id that must resolve before this draft is accepted
    pub fn collection_reference(&self) -> Option<&str> {
        self.collection_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.title, &self.content, self.description.as_deref())
    }
}

impl PromptPatch {
    /// Collection id that must resolve before this patch is applied
    pub fn collection_reference(&self) -> Option<&str> {
        match &self.collection_id {
            Some(Some(id)) => Some(id),
            None | Some(None) => None,
        }
    }
}

impl Prompt {
    /// Create a new prompt with generated ID and timestamps
    pub fn new(draft: PromptDraft) -> Result<Self, DomainError> {
        draft.validate()?;
        let now = current_time();
        Ok(Self {
            id: generate_id(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: normalize_reference(draft.collection_id),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every editable field, keeping `id` and `created_at`
    pub fn replaced_with(&self, draft: PromptDraft) -> Result<Self, DomainError> {
        draft.validate()?;
        Ok(Self {
            id: self.id.clone(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: normalize_reference(draft.collection_id),
            created_at: self.created_at,
            updated_at: self.next_updated_at(),
        })
    }

    /// Apply only the fields present in `patch`
    pub fn patched_with(&self, patch: PromptPatch) -> Result<Self, DomainError> {
        let title = match patch.title {
            Some(Some(title)) => title,
            Some(None) => return Err(DomainError::validation("title", "must not be null")),
            None => self.title.clone(),
        };
        let content = match patch.content {
            Some(Some(content)) => content,
            Some(None) => return Err(DomainError::validation("content", "must not be null")),
            None => self.content.clone(),
        };
        let description = match patch.description {
            Some(description) => description,
            None => self.description.clone(),
        };
        let collection_id = match patch.collection_id {
            Some(collection_id) => collection_id,
            None => self.collection_id.clone(),
        };

        validate_fields(&title, &content, description.as_deref())?;

        Ok(Self {
            id: self.id.clone(),
            title,
            content,
            description,
            collection_id,
            created_at: self.created_at,
            updated_at: self.next_updated_at(),
        })
    }

    /// Copy with the collection reference cleared; timestamps untouched
    pub fn detached(&self) -> Self {
        Self {
            collection_id: None,
            ..self.clone()
        }
    }

    /// Check a stored record against the field constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::validation("id", "must not be empty"));
        }
        validate_fields(&self.title, &self.content, self.description.as_deref())
    }

    // never earlier than the previous value, even if the clock steps back
    fn next_updated_at(&self) -> DateTime<Utc> {
        current_time().max(self.updated_at)
    }
}
