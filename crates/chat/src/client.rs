use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chat client errors. A failed turn is logged and swallowed by the
/// session; nothing here reaches the dashboard user.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("chat service returned {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed chat response: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
struct RagRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct RagResponse {
    answer: String,
}

/// Client for the shared retrieval-augmented chat endpoint.
#[derive(Debug, Clone)]
pub struct RagClient {
    http: reqwest::Client,
    base_url: String,
}

impl RagClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Ask one question. The answer is pre-rendered HTML.
    pub async fn ask(&self, query: &str) -> Result<String, ChatError> {
        let url = format!("{}/rag", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(&RagRequest { query })
            .send()
            .await
            .map_err(ChatError::Network)?;

        if !resp.status().is_success() {
            return Err(ChatError::Status(resp.status()));
        }

        let body: RagResponse = resp
            .json()
            .await
            .map_err(|e| ChatError::Malformed(e.to_string()))?;

        Ok(body.answer)
    }
}
