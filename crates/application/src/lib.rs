//! Context Application - Endpoint operations and ports
//!
//! This crate defines the application layer with:
//! - The transport port (interface for the HTTP adapter)
//! - Typed endpoint operations over that port
//! - Resource accessors for domains, documents and versions
//! - Client configuration and error classification

pub mod api;
pub mod config;
pub mod error;
pub mod ports;
pub mod resources;
pub mod result;

#[cfg(test)]
mod testing;

pub use api::{ContextApi, TemplateAction};
pub use config::{
    API_KEY_HEADER, ConfigOverrides, ContextConfig, DEFAULT_API_URL, DEFAULT_SDK_VERSION,
    ENV_API_KEY, ENV_API_URL, ENV_API_VERSION, ENV_DEFAULT_DOMAIN,
};
pub use error::{ContextError, DEFAULT_INTERNAL_ERROR_MESSAGE, ErrorObject};
pub use ports::{ApiRequest, ApiResponse, ApiTransport, AssetUpload, RequestBody};
pub use resources::{Document, Domain, Version};
pub use result::{ContextResult, ContextResultExt, Outcome};
