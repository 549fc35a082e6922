//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic request failures (validation, lookup
/// misses). Transport and storage concerns carry their own error types in
/// the client and infra crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed date, unknown variant).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_the_cause() {
        let err = DomainError::validation("date must be formatted YYYY-MM-DD");
        assert_eq!(
            err.to_string(),
            "validation failed: date must be formatted YYYY-MM-DD"
        );

        let err = DomainError::invalid_id("item id must be an integer");
        assert_eq!(
            err.to_string(),
            "invalid identifier: item id must be an integer"
        );
    }
}
