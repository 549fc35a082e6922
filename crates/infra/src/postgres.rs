//! Postgres-backed inventory store.
//!
//! Maps the `inventory_data` table (one row per encoded item) to the domain
//! type here, so the domain crate stays storage-free.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

use shortfall_inventory::InventoryItem;

use crate::store::{InventoryStore, StoreError};

pub struct PostgresInventoryStore {
    pool: PgPool,
}

impl PostgresInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        debug!("connected to the inventory database");
        Ok(Self::new(pool))
    }
}

fn decode_row(row: &PgRow) -> Result<InventoryItem, StoreError> {
    fn col<'r, T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>>(
        row: &'r PgRow,
        name: &str,
    ) -> Result<T, StoreError> {
        row.try_get(name).map_err(|e| StoreError::Decode(e.to_string()))
    }

    Ok(InventoryItem {
        item_encoded: col(row, "item_encoded")?,
        total_observations: col(row, "total_observations")?,
        historical_shortage_prob: col(row, "historical_shortage_prob")?,
        avg_shortage_qty: col(row, "avg_shortage_qty")?,
        max_shortage_qty: col(row, "max_shortage_qty")?,
        total_shortage_qty: col(row, "total_shortage_qty")?,
        shortage_qty_7d_avg: col(row, "shortage_qty_7d_avg")?,
        shortage_qty_30d_avg: col(row, "shortage_qty_30d_avg")?,
        shortage_freq_7d: col(row, "shortage_freq_7d")?,
        shortage_freq_30d: col(row, "shortage_freq_30d")?,
        is_shortage: col(row, "is_shortage")?,
        probability: None,
    })
}

fn query_err(e: sqlx::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

#[async_trait]
impl InventoryStore for PostgresInventoryStore {
    async fn fetch_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT *
            FROM inventory_data
            ORDER BY item_encoded
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_err)?;

        rows.iter().map(decode_row).collect()
    }

    async fn fetch_by_id(&self, item_encoded: i64) -> Result<Option<InventoryItem>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT *
            FROM inventory_data
            WHERE item_encoded = $1
            "#,
        )
        .bind(item_encoded)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_err)?;

        row.as_ref().map(decode_row).transpose()
    }

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<InventoryItem>, StoreError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

        let rows = sqlx::query(
            r#"
            SELECT *
            FROM inventory_data
            ORDER BY item_encoded
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(query_err)?;

        rows.iter().map(decode_row).collect()
    }
}
