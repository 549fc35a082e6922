//! `shortfall-core` — shared foundation for the shortage dashboard backend.
//!
//! This crate contains the error model and runtime configuration. No IO
//! beyond reading the process environment at startup.

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{DomainError, DomainResult};
