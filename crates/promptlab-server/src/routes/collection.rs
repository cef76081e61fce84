//! Collection Routes - Collection CRUD
//!
//! HTTP handlers that delegate to CollectionService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptlab::Collection;

use super::error_status;
use crate::models::{CollectionListResponse, CreateCollectionRequest};
use crate::AppState;

/// List all collections
pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<CollectionListResponse>, (StatusCode, String)> {
    let collections = state
        .collection_service
        .list()
        .await
        .map_err(error_status)?;

    Ok(Json(collections.into()))
}

/// Get collection by ID
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Collection>, (StatusCode, String)> {
    let collection = state
        .collection_service
        .get(&id)
        .await
        .map_err(error_status)?;

    Ok(Json(collection))
}

/// Create new collection
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<Collection>), (StatusCode, String)> {
    let collection = state
        .collection_service
        .create(payload.into())
        .await
        .map_err(error_status)?;

    Ok((StatusCode::CREATED, Json(collection)))
}

/// Delete collection, detaching its prompts first
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .collection_service
        .delete(&id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/collections/:id",
            get(get_collection).delete(delete_collection),
        )
}
