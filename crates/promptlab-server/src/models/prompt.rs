//! Prompt DTOs

use serde::{Deserialize, Deserializer, Serialize};

use promptlab::{Prompt, PromptDraft, PromptPatch};

/// Create or replace Prompt request
#[derive(Debug, Deserialize)]
pub struct CreatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

impl From<CreatePromptRequest> for PromptDraft {
    fn from(req: CreatePromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            description: req.description,
            collection_id: req.collection_id,
        }
    }
}

/// Patch Prompt request
///
/// A missing key leaves the field alone; an explicit `null` is applied.
#[derive(Debug, Default, Deserialize)]
pub struct PatchPromptRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub collection_id: Option<Option<String>>,
}

// only called when the key exists, so `null` becomes Some(None)
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<PatchPromptRequest> for PromptPatch {
    fn from(req: PatchPromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            description: req.description,
            collection_id: req.collection_id,
        }
    }
}

/// Query parameters for listing prompts
#[derive(Debug, Default, Deserialize)]
pub struct ListPromptsQuery {
    pub collection_id: Option<String>,
    pub search: Option<String>,
}

/// Prompt list response
#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    pub prompts: Vec<Prompt>,
    pub total: usize,
}

impl From<Vec<Prompt>> for PromptListResponse {
    fn from(prompts: Vec<Prompt>) -> Self {
        Self {
            total: prompts.len(),
            prompts,
        }
    }
}
