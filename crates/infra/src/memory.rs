//! In-memory inventory store, used by the test suites and when the service
//! runs without a database.

use async_trait::async_trait;

use shortfall_inventory::{InventoryItem, sample_rows};

use crate::store::{InventoryStore, StoreError};

pub struct InMemoryInventoryStore {
    rows: Vec<InventoryItem>,
}

impl InMemoryInventoryStore {
    pub fn new(mut rows: Vec<InventoryItem>) -> Self {
        rows.sort_by_key(|r| r.item_encoded);
        Self { rows }
    }

    /// Store preloaded with the built-in sample dataset.
    pub fn seeded() -> Self {
        Self::new(sample_rows())
    }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn fetch_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        Ok(self.rows.clone())
    }

    async fn fetch_by_id(&self, item_encoded: i64) -> Result<Option<InventoryItem>, StoreError> {
        Ok(self
            .rows
            .iter()
            .find(|r| r.item_encoded == item_encoded)
            .cloned())
    }

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<InventoryItem>, StoreError> {
        let offset = page.saturating_sub(1) as usize * limit as usize;
        Ok(self
            .rows
            .iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
