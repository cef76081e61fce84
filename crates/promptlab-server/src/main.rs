use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use promptlab::Storage;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{JsonFileStorage, MemoryStorage};
use application::{CollectionService, PromptService};
use config::{ServerConfig, StorageKind};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<PromptService>,
    pub collection_service: Arc<CollectionService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            prompt_service: Arc::new(PromptService::new(storage.clone())),
            collection_service: Arc::new(CollectionService::new(storage)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router: health check, API routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<Arc<dyn Storage>> {
    let storage: Arc<dyn Storage> = match config.storage {
        StorageKind::Json => {
            let storage = JsonFileStorage::open(&config.data_dir)
                .await
                .with_context(|| {
                    format!("Failed to open storage in {}", config.data_dir.display())
                })?;
            Arc::new(storage)
        }
        StorageKind::Memory => {
            tracing::warn!("⚠️  Using in-memory storage - data is lost on restart");
            Arc::new(MemoryStorage::new())
        }
    };
    Ok(storage)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("📝 PromptLab API initializing...");

    let config = ServerConfig::from_env()?;
    tracing::info!("💾 Storage backend: {}", config.storage);

    let storage = open_storage(&config).await?;
    let router = build_router(AppState::new(storage));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("✅ PromptLab API ready on {}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
