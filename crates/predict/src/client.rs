use chrono::NaiveDate;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use shortfall_inventory::{DateParts, InventoryItem};

use crate::variant::PredictVariant;

/// Prediction client errors.
///
/// All of these are soft at the batch level: a failed row keeps its
/// original, unannotated form and the batch carries on.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("prediction service returned {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed prediction response: {0}")]
    Malformed(String),
}

/// Wire shape of one prediction input: the row's statistics flattened
/// together with the calendar features, under a `data` key.
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    data: FeatureRow<'a>,
}

#[derive(Debug, Serialize)]
struct FeatureRow<'a> {
    #[serde(flatten)]
    item: &'a InventoryItem,
    #[serde(flatten)]
    date: &'a DateParts,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    probability: f64,
}

/// Client for the variant-specific prediction endpoints.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Request one shortage probability for a single row on `date`.
    pub async fn predict(
        &self,
        variant: PredictVariant,
        item: &InventoryItem,
        date: &DateParts,
    ) -> Result<f64, PredictError> {
        let url = format!("{}/{}", self.base_url, variant.endpoint_path());

        let resp = self
            .http
            .post(&url)
            .json(&PredictRequest {
                data: FeatureRow { item, date },
            })
            .send()
            .await
            .map_err(PredictError::Network)?;

        if !resp.status().is_success() {
            return Err(PredictError::Status(resp.status()));
        }

        let body: PredictResponse = resp
            .json()
            .await
            .map_err(|e| PredictError::Malformed(e.to_string()))?;

        Ok(body.probability)
    }

    /// Annotate every row with a predicted probability for `date`.
    ///
    /// The calendar features are derived once; one request per row is then
    /// issued without waiting on prior rows. Result position is input
    /// position, never completion order. A row whose request fails — on the
    /// wire, by status, or with an unreadable body — comes back unchanged,
    /// and the batch resolves only once every row's outcome is known. No
    /// retries, no cap, no cancellation.
    pub async fn predict_batch(
        &self,
        variant: PredictVariant,
        rows: Vec<InventoryItem>,
        date: NaiveDate,
    ) -> Vec<InventoryItem> {
        let parts = DateParts::from_date(date);

        let requests = rows.into_iter().map(|row| async move {
            match self.predict(variant, &row, &parts).await {
                Ok(probability) => {
                    debug!(item = row.item_encoded, probability, "prediction succeeded");
                    row.with_probability(probability)
                }
                Err(e) => {
                    warn!(
                        item = row.item_encoded,
                        error = %e,
                        "prediction failed; keeping row unannotated"
                    );
                    row
                }
            }
        });

        join_all(requests).await
    }
}
