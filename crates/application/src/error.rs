//! SDK error types
//!
//! Every failure an SDK operation can surface is a [`ContextError`]. Transport
//! failures are classified exactly once, where the response (or lack of one)
//! is first observed: no response at all is a connection failure, a status
//! of 400 or above is an HTTP failure whose message comes from the response
//! body, and anything else keeps the underlying error's message.

use context_domain::{DomainError, ResourceKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a failure carries no message of its own.
pub const DEFAULT_INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Errors returned by SDK operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    /// The API key was rejected (401/403).
    #[error("authentication failed: {message}")]
    Auth {
        /// Status code returned by the server
        status: u16,
        /// Server message
        message: String,
        /// Machine-readable error code
        code: Option<String>,
    },

    /// The addressed domain does not exist (404).
    #[error("domain not found: {message}")]
    DomainNotFound {
        /// Server message
        message: String,
        /// Machine-readable error code
        code: Option<String>,
    },

    /// The addressed document or version does not exist (404).
    #[error("document not found: {message}")]
    DocumentNotFound {
        /// Server message
        message: String,
        /// Machine-readable error code
        code: Option<String>,
    },

    /// No response was received.
    #[error("connection failed: {message}")]
    Connection {
        /// Underlying transport message
        message: String,
    },

    /// Input was rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// The operation does not apply to this kind of resource.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Any other error response (status >= 400).
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code
        status: u16,
        /// Server message
        message: String,
        /// Machine-readable error code
        code: Option<String>,
    },

    /// An unclassified failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error body sent by the API on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ContextError {
    /// Classifies an error response.
    ///
    /// The message is taken from the body's `message` field, then from the
    /// raw body text, then from the status itself. The body's `error` field
    /// becomes the error code. `resource` scopes 404 responses.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8], resource: ResourceKind) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let text = String::from_utf8_lossy(body);
        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let text = text.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));
        let code = parsed.error;

        match (status, resource) {
            (401 | 403, _) => Self::Auth {
                status,
                message,
                code,
            },
            (404, ResourceKind::Domain) => Self::DomainNotFound { message, code },
            (404, ResourceKind::Document | ResourceKind::Asset) => {
                Self::DocumentNotFound { message, code }
            }
            _ => Self::Http {
                status,
                message,
                code,
            },
        }
    }

    /// Creates a connection failure.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an unclassified failure, substituting the default message for
    /// an empty one.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Internal(DEFAULT_INTERNAL_ERROR_MESSAGE.to_string())
        } else {
            Self::Internal(message)
        }
    }

    /// Human-readable message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Auth { message, .. }
            | Self::DomainNotFound { message, .. }
            | Self::DocumentNotFound { message, .. }
            | Self::Connection { message }
            | Self::Http { message, .. } => message.clone(),
            Self::Validation(e) => e.to_string(),
            Self::UnsupportedOperation(message) | Self::Internal(message) => message.clone(),
        }
    }

    /// Machine-readable error code sent by the server, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Auth { code, .. }
            | Self::DomainNotFound { code, .. }
            | Self::DocumentNotFound { code, .. }
            | Self::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status that produced this error, if one was received.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::DomainNotFound { .. } | Self::DocumentNotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Returns true for domain- or document-scoped "not found" errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DomainNotFound { .. } | Self::DocumentNotFound { .. }
        )
    }

    /// Converts to the portable error shape.
    #[must_use]
    pub fn to_error_object(&self) -> ErrorObject {
        ErrorObject {
            message: self.message(),
            error: self.code().map(str::to_string),
            status_code: self.status_code(),
        }
    }
}

/// Serialisable error shape: message, optional code, optional status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject {
    /// Human-readable message
    pub message: String,
    /// Machine-readable error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}
