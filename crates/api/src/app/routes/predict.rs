use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use tracing::error;

use shortfall_core::DomainError;
use shortfall_inventory::{DateParts, InventoryItem, sort_by_probability_desc};
use shortfall_predict::PredictVariant;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/:variant", post(run_round))
}

/// Run one prediction round: fetch the base rows, fan one request per row
/// out to the model service, and respond with the annotated table.
///
/// An all-failed round still answers 200 with the base rows — the dashboard
/// must keep rendering when the model service is down.
pub async fn run_round(
    Extension(services): Extension<Arc<AppServices>>,
    Path(variant): Path<String>,
    Json(body): Json<dto::PredictRequest>,
) -> axum::response::Response {
    let variant: PredictVariant = match variant.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(DomainError::validation(e.to_string())),
    };

    let date = match NaiveDate::parse_from_str(&body.date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return errors::domain_error_to_response(DomainError::validation(
                "date must be formatted YYYY-MM-DD",
            ));
        }
    };

    let fetched = match body.item_id {
        Some(id) => services
            .store()
            .fetch_by_id(id)
            .await
            .map(|row| row.into_iter().collect::<Vec<InventoryItem>>()),
        None => services.store().fetch_all().await,
    };

    let rows = match fetched {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "inventory read failed; predicting over an empty row set");
            Vec::new()
        }
    };

    let mut items = services.predictor().predict_batch(variant, rows, date).await;
    sort_by_probability_desc(&mut items);

    (
        StatusCode::OK,
        Json(dto::PredictResponse {
            date_parts: DateParts::from_date(date),
            items,
        }),
    )
        .into_response()
}
