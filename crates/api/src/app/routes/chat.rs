use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use shortfall_chat::{ChatSessionId, TurnRejected};

use crate::app::services::{AppServices, BeginTurnError};
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session))
        .route("/sessions/:id/messages", post(post_message))
}

pub async fn create_session(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let (session_id, messages) = services.create_session();

    (
        StatusCode::CREATED,
        Json(dto::SessionResponse {
            session_id,
            messages,
        }),
    )
        .into_response()
}

pub async fn get_session(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ChatSessionId>,
) -> axum::response::Response {
    match services.transcript(id) {
        Some(messages) => (
            StatusCode::OK,
            Json(dto::SessionResponse {
                session_id: id,
                messages,
            }),
        )
            .into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "unknown chat session"),
    }
}

/// Submit one user turn.
///
/// Accepted only while no turn is in flight for this session. An upstream
/// failure still answers 200 with the transcript — the user message stays,
/// the reply is simply missing.
pub async fn post_message(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ChatSessionId>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    let query = match services.begin_turn(id, &body.query) {
        Ok(query) => query,
        Err(BeginTurnError::UnknownSession) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "unknown chat session");
        }
        Err(BeginTurnError::Rejected(TurnRejected::EmptyInput)) => {
            return errors::json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "empty_query",
                "query must not be blank",
            );
        }
        Err(BeginTurnError::Rejected(TurnRejected::Busy)) => {
            return errors::json_error(
                StatusCode::CONFLICT,
                "busy",
                "a turn is already in flight for this session",
            );
        }
    };

    let answer = match services.rag().ask(&query).await {
        Ok(answer) => Some(answer),
        Err(e) => {
            warn!(session = %id, error = %e, "chat turn failed; returning transcript without a reply");
            None
        }
    };

    match services.finish_turn(id, answer) {
        Some(messages) => (
            StatusCode::OK,
            Json(dto::SessionResponse {
                session_id: id,
                messages,
            }),
        )
            .into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "unknown chat session"),
    }
}
