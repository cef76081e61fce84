//! Collection - Named grouping of Prompts
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::field::{limit_length, require_length};
use crate::domain::value_objects::{current_time, generate_id, timestamp};

pub const NAME_MAX_LEN: usize = 100;

/// Collection - A named group of prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Input for creating a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionDraft {
    pub name: String,
    pub description: Option<String>,
}

fn validate_fields(name: &str, description: Option<&str>) -> Result<(), DomainError> {
    require_length("name", name, 1, Some(NAME_MAX_LEN))?;
    limit_length("description", description, super::DESCRIPTION_MAX_LEN)
}

impl Collection {
    /// Create a new collection with generated ID and timestamp
    pub fn new(draft: CollectionDraft) -> Result<Self, DomainError> {
        validate_fields(&draft.name, draft.description.as_deref())?;
        Ok(Self {
            id: generate_id(),
            name: draft.name,
            description: draft.description,
            created_at: current_time(),
        })
    }

    /// Check a stored record against the field constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::validation("id", "must not be empty"));
        }
        validate_fields(&self.name, self.description.as_deref())
    }
}
