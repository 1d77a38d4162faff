//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while validating SDK input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A version string is not three dot-separated non-negative integers.
    #[error("invalid version number: {0}")]
    InvalidVersionNumber(String),

    /// A document address is malformed.
    #[error("invalid document address: {0}")]
    InvalidAddress(String),

    /// No API key was supplied.
    #[error("an API key is required")]
    MissingApiKey,

    /// The configured base URL cannot be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
