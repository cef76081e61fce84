//! Prompt Routes - Prompt CRUD, filtering and search
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptlab::Prompt;

use super::error_status;
use crate::models::{
    CreatePromptRequest, ListPromptsQuery, PatchPromptRequest, PromptListResponse,
};
use crate::AppState;

/// List prompts
///
/// GET /prompts?collection_id=...&search=...
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> Result<Json<PromptListResponse>, (StatusCode, String)> {
    let prompts = state
        .prompt_service
        .list(query.collection_id.as_deref(), query.search.as_deref())
        .await
        .map_err(error_status)?;

    Ok(Json(prompts.into()))
}

/// Get prompt by ID
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Prompt>, (StatusCode, String)> {
    let prompt = state.prompt_service.get(&id).await.map_err(error_status)?;
    Ok(Json(prompt))
}

/// Create new prompt
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<Prompt>), (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .create(payload.into())
        .await
        .map_err(error_status)?;

    Ok((StatusCode::CREATED, Json(prompt)))
}

/// Replace prompt
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<Json<Prompt>, (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .replace(&id, payload.into())
        .await
        .map_err(error_status)?;

    Ok(Json(prompt))
}

/// Partially update prompt
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PatchPromptRequest>,
) -> Result<Json<Prompt>, (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .patch(&id, payload.into())
        .await
        .map_err(error_status)?;

    Ok(Json(prompt))
}

/// Delete prompt
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .prompt_service
        .delete(&id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt)
                .put(update_prompt)
                .patch(patch_prompt)
                .delete(delete_prompt),
        )
}
