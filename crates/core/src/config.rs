//! Runtime configuration, read once at startup.

use tracing::warn;

/// Process configuration for the dashboard backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the model service hosting the prediction endpoints and
    /// the `/rag` chat endpoint.
    pub model_service_url: String,

    /// Postgres connection string. When unset the API serves the built-in
    /// sample dataset from memory.
    pub database_url: Option<String>,

    /// Listen address for the HTTP server.
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to local dev
    /// defaults where a value is missing.
    pub fn from_env() -> Self {
        let model_service_url = std::env::var("MODEL_SERVICE_URL").unwrap_or_else(|_| {
            warn!("MODEL_SERVICE_URL not set; using local dev default");
            "http://127.0.0.1:8000".to_string()
        });

        let database_url = std::env::var("DATABASE_URL").ok();

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            model_service_url,
            database_url,
            bind_addr,
        }
    }
}
