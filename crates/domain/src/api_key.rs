//! API key newtype

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// The key sent with every request to authenticate the caller.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

/// Redacted so the key never leaks into logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

impl ApiKey {
    /// Wraps a key, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingApiKey` if the key is blank.
    pub fn new(key: impl Into<String>) -> DomainResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(DomainError::MissingApiKey);
        }
        Ok(Self(key))
    }

    /// Returns the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
