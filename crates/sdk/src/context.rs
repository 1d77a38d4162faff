//! Client facade

use std::path::Path;
use std::sync::Arc;

use context_application::{
    ApiTransport, ConfigOverrides, ContextApi, ContextConfig, ContextError, ContextResult,
    Document, Domain,
};
use context_domain::{DocumentFilter, DomainFilter, Endpoint, Metadata, Page};
use context_infrastructure::ReqwestTransport;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

/// Entry point of the SDK.
///
/// Holds one configuration and one transport. Clones share both, along with
/// the memoised default domain.
#[derive(Debug, Clone)]
pub struct Context {
    api: ContextApi,
    default_domain: Arc<OnceCell<ContextResult<Domain>>>,
}

impl Context {
    /// Creates a client talking HTTP through reqwest.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank key or invalid base URL. No
    /// request is sent.
    pub fn new(api_key: impl Into<String>, overrides: ConfigOverrides) -> ContextResult<Self> {
        Self::from_config(ContextConfig::new(api_key, overrides)?)
    }

    /// Creates a client from `CONTEXT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key is missing or the URL invalid.
    pub fn from_env() -> ContextResult<Self> {
        Self::from_config(ContextConfig::from_env()?)
    }

    /// Creates a client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the HTTP client cannot be built.
    pub fn from_config(config: ContextConfig) -> ContextResult<Self> {
        let config = Arc::new(config);
        let transport = ReqwestTransport::new(Arc::clone(&config))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over any transport.
    #[must_use]
    pub fn with_transport(config: Arc<ContextConfig>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            api: ContextApi::new(config, transport),
            default_domain: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ContextConfig {
        self.api.config()
    }

    /// Returns the endpoint operations behind this client.
    #[must_use]
    pub const fn api(&self) -> &ContextApi {
        &self.api
    }

    /// Read-only access through the `/public` routes.
    #[must_use]
    pub fn public(&self) -> PublicContext {
        PublicContext {
            api: self.api.clone(),
        }
    }

    /// Lists the domains the key can see.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    #[instrument(skip_all)]
    pub async fn domains(&self, filter: &DomainFilter) -> ContextResult<Page<Domain>> {
        self.api.domains(Endpoint::Authenticated, filter).await
    }

    /// Fetches a domain by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainNotFound` for an unknown name, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(name = %name))]
    pub async fn domain(&self, name: &str) -> ContextResult<Domain> {
        self.api.domain(Endpoint::Authenticated, name).await
    }

    /// Lists documents.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    #[instrument(skip_all)]
    pub async fn documents(&self, filter: &DocumentFilter) -> ContextResult<Page<Document>> {
        self.api.documents(Endpoint::Authenticated, filter).await
    }

    /// Fetches a document from a `domain/path[?v=X.Y.Z]` address.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed address,
    /// `DocumentNotFound` for an unknown document, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(address = %address))]
    pub async fn document(&self, address: &str) -> ContextResult<Document> {
        self.api.document(Endpoint::Authenticated, address).await
    }

    /// Uploads a file as an asset document at `address`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed address, an internal
    /// error if the file cannot be read, or the classified transport failure.
    #[instrument(skip_all, fields(address = %address))]
    pub async fn upload_asset(
        &self,
        address: &str,
        file_path: impl AsRef<Path>,
        metadata: Option<Metadata>,
    ) -> ContextResult<Document> {
        self.api.asset(address, file_path.as_ref(), metadata).await
    }

    /// The client's default domain.
    ///
    /// Resolved on first use: the configured default domain by name, or the
    /// first domain the key can see. The lookup runs at most once per client
    /// and its outcome, failure included, is reused.
    ///
    /// # Errors
    ///
    /// Returns the bootstrap failure, or `DomainNotFound` when no domain is
    /// configured and the key owns none.
    pub async fn default_domain(&self) -> ContextResult<Domain> {
        self.default_domain
            .get_or_init(|| self.resolve_default_domain())
            .await
            .clone()
    }

    #[instrument(skip_all)]
    async fn resolve_default_domain(&self) -> ContextResult<Domain> {
        if let Some(name) = self.config().default_domain() {
            info!(domain = name, "resolving configured default domain");
            return self.api.domain(Endpoint::Authenticated, name).await;
        }

        info!("resolving first available domain");
        let page = self
            .api
            .domains(Endpoint::Authenticated, &DomainFilter::new().with_limit(1))
            .await?;
        page.items
            .into_iter()
            .next()
            .ok_or_else(|| ContextError::DomainNotFound {
                message: "no domain is available for this API key".to_string(),
                code: None,
            })
    }
}

/// Read-only client surface served by the `/public` routes.
#[derive(Debug, Clone)]
pub struct PublicContext {
    api: ContextApi,
}

impl PublicContext {
    /// Lists public domains.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    #[instrument(skip_all)]
    pub async fn domains(&self, filter: &DomainFilter) -> ContextResult<Page<Domain>> {
        self.api.domains(Endpoint::Public, filter).await
    }

    /// Fetches a public domain by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainNotFound` for an unknown name, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(name = %name))]
    pub async fn domain(&self, name: &str) -> ContextResult<Domain> {
        self.api.domain(Endpoint::Public, name).await
    }

    /// Lists public documents.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    #[instrument(skip_all)]
    pub async fn documents(&self, filter: &DocumentFilter) -> ContextResult<Page<Document>> {
        self.api.documents(Endpoint::Public, filter).await
    }

    /// Fetches a public document from a `domain/path[?v=X.Y.Z]` address.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed address,
    /// `DocumentNotFound` for an unknown document, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(address = %address))]
    pub async fn document(&self, address: &str) -> ContextResult<Document> {
        self.api.document(Endpoint::Public, address).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use context_domain::DomainError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_key_is_rejected() {
        let err = Context::new("   ", ConfigOverrides::new()).unwrap_err();
        assert_eq!(err, ContextError::Validation(DomainError::MissingApiKey));
    }

    #[test]
    fn test_overrides_reach_config() {
        let ctx = Context::new(
            "key",
            ConfigOverrides::new()
                .with_url("http://localhost:4000/v2")
                .with_default_domain("acme"),
        )
        .unwrap();
        assert_eq!(ctx.config().base_url().as_str(), "http://localhost:4000/v2");
        assert_eq!(ctx.config().default_domain(), Some("acme"));
    }
}
