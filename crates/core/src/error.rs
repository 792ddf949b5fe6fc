//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is raised synchronously to the immediate caller; nothing in
/// the domain layer catches or retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (blank name, negative price, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::not_found("product 42");
        assert_eq!(err.to_string(), "not found: product 42");

        let err = DomainError::invalid_argument("price cannot be negative");
        assert_eq!(err.to_string(), "invalid argument: price cannot be negative");
    }
}
