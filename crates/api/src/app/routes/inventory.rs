use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use shortfall_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/:id", get(get_item))
}

/// All rows, or one page when both `page` and `limit` are given.
///
/// A store failure degrades to an empty table rather than an error status;
/// the dashboard renders "no data" either way.
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    let fetched = match (query.page, query.limit) {
        (Some(page), Some(limit)) => services.store().fetch_page(page, limit).await,
        _ => services.store().fetch_all().await,
    };

    let items = match fetched {
        Ok(items) => items,
        Err(e) => {
            error!(error = %e, "inventory read failed; rendering an empty row set");
            Vec::new()
        }
    };

    (StatusCode::OK, Json(dto::ItemsResponse { items })).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item_encoded: i64 = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::domain_error_to_response(DomainError::invalid_id(
                "item id must be an integer",
            ));
        }
    };

    match services.store().fetch_by_id(item_encoded).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => errors::domain_error_to_response(DomainError::not_found()),
        Err(e) => {
            error!(error = %e, item = item_encoded, "inventory read failed");
            errors::domain_error_to_response(DomainError::not_found())
        }
    }
}
