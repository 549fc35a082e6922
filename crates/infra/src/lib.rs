//! Storage adapters for the shortage dashboard: read-only access to the
//! `inventory_data` table behind the [`InventoryStore`] trait, plus an
//! in-memory twin for tests and database-less runs.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryInventoryStore;
pub use postgres::PostgresInventoryStore;
pub use store::{InventoryStore, StoreError};
