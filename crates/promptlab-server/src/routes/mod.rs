//! PromptLab API Routes
//!
//! - /prompts - Prompt management, filtering and search
//! - /collections - Collection management

pub mod collection;
pub mod prompt;

use axum::{http::StatusCode, Router};

use promptlab::DomainError;

use crate::AppState;

/// All API routes, without the health check and middleware
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(prompt::router())
        .merge(collection::router())
}

/// Map a domain error onto an HTTP status and message
pub fn error_status(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
        DomainError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Persistence(_) => {
            tracing::error!("❌ {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}
