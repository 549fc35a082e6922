use async_trait::async_trait;
use thiserror::Error;

use shortfall_inventory::InventoryItem;

/// Storage-layer failure.
///
/// Non-fatal to the service: callers log the error and render a degraded
/// (empty) row set instead of propagating it to the dashboard.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("row decode failed: {0}")]
    Decode(String),
}

/// Read-side access to the `inventory_data` dataset.
#[async_trait]
pub trait InventoryStore: Send + Sync + 'static {
    /// Every row in the dataset, ordered by `item_encoded`.
    async fn fetch_all(&self) -> Result<Vec<InventoryItem>, StoreError>;

    /// One row by its encoded item id.
    async fn fetch_by_id(&self, item_encoded: i64) -> Result<Option<InventoryItem>, StoreError>;

    /// One page of rows. `page` is 1-based: the offset is
    /// `(page - 1) * limit`.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<InventoryItem>, StoreError>;
}
