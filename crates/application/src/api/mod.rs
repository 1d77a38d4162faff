//! Endpoint operations
//!
//! [`ContextApi`] turns typed inputs into [`ApiRequest`]s, hands them to the
//! transport port and decodes the responses into wire records. Accessors and
//! the facade are built on top of it.

mod assets;
mod documents;
mod domains;
mod versions;

use std::fmt;
use std::sync::Arc;

use context_domain::{Metadata, VersionNumber};
use serde_json::Value;

use crate::config::ContextConfig;
use crate::ports::{ApiRequest, ApiResponse, ApiTransport};
use crate::result::ContextResult;

pub use documents::TemplateAction;

/// Typed operations over the document API.
///
/// Cheap to clone; every accessor keeps one.
#[derive(Clone)]
pub struct ContextApi {
    config: Arc<ContextConfig>,
    transport: Arc<dyn ApiTransport>,
}

impl ContextApi {
    /// Creates the API over a transport.
    #[must_use]
    pub fn new(config: Arc<ContextConfig>, transport: Arc<dyn ApiTransport>) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    async fn send(&self, request: ApiRequest) -> ContextResult<ApiResponse> {
        self.transport.send(request).await
    }
}

impl fmt::Debug for ContextApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextApi")
            .field("base_url", &self.config.base_url().as_str())
            .finish_non_exhaustive()
    }
}

/// Adds `metadata` to an object body; absent metadata leaves the key out.
fn insert_metadata(body: &mut Value, metadata: Option<Metadata>) {
    if let (Some(metadata), Value::Object(fields)) = (metadata, body) {
        fields.insert("metadata".to_string(), Value::Object(metadata));
    }
}

fn insert_version_number(body: &mut Value, version: Option<VersionNumber>) {
    if let (Some(version), Value::Object(fields)) = (version, body) {
        fields.insert(
            "versionNumber".to_string(),
            Value::String(version.to_string()),
        );
    }
}
