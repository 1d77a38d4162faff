//! Transport port

use std::path::PathBuf;

use async_trait::async_trait;
use context_domain::{HttpMethod, ResourceKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ContextError;
use crate::result::ContextResult;

/// Body of an API request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(serde_json::Value),
    /// Multipart form holding a file and a JSON `body` part
    Multipart(AssetUpload),
}

/// A file upload with its accompanying JSON description.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetUpload {
    /// Local file sent as the `file` part
    pub file_path: PathBuf,
    /// JSON sent as the `body` part
    pub body: serde_json::Value,
}

/// A request against the document API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Route, e.g. `/documents/acme/readme`
    pub path: String,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Resource the route addresses; scopes "not found" responses
    pub resource: ResourceKind,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>, resource: ResourceKind) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            resource,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>, resource: ResourceKind) -> Self {
        Self::new(HttpMethod::Get, path, resource)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>, resource: ResourceKind) -> Self {
        Self::new(HttpMethod::Post, path, resource)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>, resource: ResourceKind) -> Self {
        Self::new(HttpMethod::Patch, path, resource)
    }

    /// Adds one query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds the fields of a filter as query parameters.
    ///
    /// Unset (`null`) fields are skipped; scalars are rendered as text.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the filter does not serialise to an object.
    pub fn with_filter<F: Serialize>(mut self, filter: &F) -> ContextResult<Self> {
        let value =
            serde_json::to_value(filter).map_err(|e| ContextError::internal(e.to_string()))?;
        let serde_json::Value::Object(fields) = value else {
            return Err(ContextError::internal("filter must serialise to an object"));
        };
        for (key, value) in fields {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => self.query.push((key, s)),
                other => self.query.push((key, other.to_string())),
            }
        }
        Ok(self)
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Sets a multipart asset body.
    #[must_use]
    pub fn with_asset(mut self, upload: AssetUpload) -> Self {
        self.body = RequestBody::Multipart(upload);
        self
    }
}

/// A successful (2xx) API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body; `null` for an empty body
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> ContextResult<T> {
        serde_json::from_value(self.body)
            .map_err(|e| ContextError::internal(format!("unexpected response body: {e}")))
    }
}

/// Port for sending requests to the document API.
///
/// Implementations attach the API key header, resolve the route against
/// the configured base URL and classify failures with
/// [`ContextError::from_response`] (status >= 400) or
/// [`ContextError::connection`] (no response). They never retry.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends a request and returns its successful response.
    ///
    /// # Errors
    ///
    /// Returns the classified failure.
    async fn send(&self, request: ApiRequest) -> ContextResult<ApiResponse>;
}
