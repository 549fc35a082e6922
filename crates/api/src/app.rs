//! Application assembly: service wiring and the route tree.

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tracing::warn;

use shortfall_core::AppConfig;
use shortfall_infra::{InMemoryInventoryStore, InventoryStore, PostgresInventoryStore};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use self::services::AppServices;

/// Build the route tree against already-constructed services. Tests use
/// this directly with stub collaborators.
pub fn build_router(services: Arc<AppServices>) -> Router {
    Router::new()
        .nest("/inventory", routes::inventory::router())
        .nest("/predict", routes::predict::router())
        .nest("/chat", routes::chat::router())
        .merge(routes::system::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}

/// Assemble services from configuration and build the app.
///
/// Uses Postgres when `DATABASE_URL` is configured and reachable, otherwise
/// the built-in sample dataset served from memory.
pub async fn build_app(config: &AppConfig) -> Router {
    let store: Arc<dyn InventoryStore> = match &config.database_url {
        Some(url) => match PostgresInventoryStore::connect(url).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!(error = %e, "database unavailable; falling back to the in-memory dataset");
                Arc::new(InMemoryInventoryStore::seeded())
            }
        },
        None => {
            warn!("DATABASE_URL not set; serving the in-memory sample dataset");
            Arc::new(InMemoryInventoryStore::seeded())
        }
    };

    build_router(Arc::new(AppServices::new(store, &config.model_service_url)))
}
