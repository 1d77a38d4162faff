//! Context SDK - Typed client for the Context document service
//!
//! ```no_run
//! use context_sdk::{ConfigOverrides, Context};
//!
//! # async fn run() -> context_sdk::ContextResult<()> {
//! let ctx = Context::new("my-api-key", ConfigOverrides::new())?;
//! let readme = ctx.document("acme/readme?v=1.0.0").await?;
//! println!("{}", readme.data());
//! # Ok(())
//! # }
//! ```
//!
//! Every operation returns a [`ContextResult`]. Use
//! [`ContextResultExt::into_outcome`] for the serialisable
//! `{success, data | error}` shape.

mod context;

pub use context::{Context, PublicContext};

pub use context_application::{
    API_KEY_HEADER, ApiRequest, ApiResponse, ApiTransport, AssetUpload, ConfigOverrides,
    ContextApi, ContextConfig, ContextError, ContextResult, ContextResultExt,
    DEFAULT_API_URL, DEFAULT_INTERNAL_ERROR_MESSAGE, DEFAULT_SDK_VERSION, Document, Domain,
    ENV_API_KEY, ENV_API_URL, ENV_API_VERSION, ENV_DEFAULT_DOMAIN, ErrorObject, Outcome,
    RequestBody, TemplateAction, Version,
};
pub use context_domain::{
    DEFAULT_INITIAL_VERSION, DocumentAddress, DocumentFilter, DocumentType, DomainError,
    DomainFilter, DomainStatus, Endpoint, HttpMethod, Metadata, Page, ResourceKind,
    VersionFilter, VersionNumber, VersionSummary,
};
pub use context_infrastructure::ReqwestTransport;
