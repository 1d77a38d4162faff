//! Transport implementation using reqwest.
//!
//! This adapter implements the `ApiTransport` port using the reqwest library.
//! It resolves routes against the configured base URL, attaches the API key
//! and classifies every failure before handing it back.

use std::sync::Arc;

use async_trait::async_trait;
use context_application::{
    API_KEY_HEADER, ApiRequest, ApiResponse, ApiTransport, ContextConfig, ContextError,
    ContextResult,
};
use context_domain::HttpMethod;
use reqwest::{Client, Method, Url};
use tracing::{debug, warn};

use crate::http::{BuiltBody, build_body};

/// Transport implementation using reqwest.
///
/// Wraps a `reqwest::Client` and the shared client configuration. Requests
/// are sent once; nothing is retried.
pub struct ReqwestTransport {
    client: Client,
    config: Arc<ContextConfig>,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: `context-sdk/<version>`
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: Arc<ContextConfig>) -> ContextResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ContextError::internal(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Creates a transport over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, config: Arc<ContextConfig>) -> Self {
        Self { client, config }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
        }
    }

    /// Resolves the request route and query against the base URL.
    fn request_url(&self, request: &ApiRequest) -> ContextResult<Url> {
        let mut url = self.config.endpoint_url(&request.path)?;
        if !request.query.is_empty() {
            let encoded = serde_urlencoded::to_string(&request.query)
                .map_err(|e| ContextError::internal(e.to_string()))?;
            url.set_query(Some(&encoded));
        }
        Ok(url)
    }

    /// Maps errors raised before a response arrived.
    fn map_error(error: &reqwest::Error) -> ContextError {
        if error.is_connect() || error.is_timeout() || error.is_request() {
            return ContextError::connection(error.to_string());
        }
        ContextError::internal(error.to_string())
    }

    /// Maps a failure while reading a response whose status already arrived.
    fn read_error(status: u16, error: &reqwest::Error) -> ContextError {
        ContextError::internal(format!("failed to read {status} response body: {error}"))
    }

    fn decode_body(bytes: &[u8]) -> ContextResult<serde_json::Value> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(bytes)
            .map_err(|e| ContextError::internal(format!("response is not JSON: {e}")))
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ContextResult<ApiResponse> {
        let url = self.request_url(&request)?;
        debug!(
            method = %request.method,
            url = %url,
            resource = ?request.resource,
            "sending request"
        );

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .header(API_KEY_HEADER, self.config.api_key().as_str());

        let body = build_body(&request.body).await?;
        if let Some(content_type) = body.content_type() {
            builder = builder.header("Content-Type", content_type);
        }
        builder = match body {
            BuiltBody::None => builder,
            BuiltBody::Json(content) => builder.body(content),
            BuiltBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::read_error(status, &e))?;
        debug!(status, size = bytes.len(), "received response");

        if status >= 400 {
            if status == 403 {
                warn!(path = %request.path, "API key rejected");
            }
            return Err(ContextError::from_response(status, &bytes, request.resource));
        }

        Ok(ApiResponse::new(status, Self::decode_body(&bytes)?))
    }
}
