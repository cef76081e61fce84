//! Collection DTOs

use serde::{Deserialize, Serialize};

use promptlab::{Collection, CollectionDraft};

/// Create Collection request
#[derive(Debug, Deserialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateCollectionRequest> for CollectionDraft {
    fn from(req: CreateCollectionRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Collection list response
#[derive(Debug, Serialize)]
pub struct CollectionListResponse {
    pub collections: Vec<Collection>,
    pub total: usize,
}

impl From<Vec<Collection>> for CollectionListResponse {
    fn from(collections: Vec<Collection>) -> Self {
        Self {
            total: collections.len(),
            collections,
        }
    }
}
