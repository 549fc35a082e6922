//! `shortfall-predict`
//!
//! Client for the external prediction service. One POST per inventory row,
//! fanned out concurrently and merged back in input order; a failed row
//! degrades to its unannotated form instead of aborting the batch.

pub mod client;
pub mod variant;

pub use client::{PredictClient, PredictError};
pub use variant::{PredictVariant, UnknownVariant};
