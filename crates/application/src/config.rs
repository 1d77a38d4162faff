//! Client configuration
//!
//! A [`ContextConfig`] is built once per client and shared (behind an `Arc`)
//! with the transport and every accessor the client hands out. Several
//! clients with different keys or base URLs can coexist in one process.

use context_domain::{ApiKey, DEFAULT_INITIAL_VERSION, DomainError, VersionNumber};
use url::Url;

use crate::result::ContextResult;

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.ctx.xyz/v1";

/// SDK version reported to the server when none is configured.
pub const DEFAULT_SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "CONTEXT_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "CONTEXT_API_URL";
/// Environment variable overriding the SDK version string.
pub const ENV_API_VERSION: &str = "CONTEXT_API_VERSION";
/// Environment variable naming the default domain.
pub const ENV_DEFAULT_DOMAIN: &str = "CONTEXT_DEFAULT_DOMAIN";

/// Optional settings layered over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Base URL of the API
    pub url: Option<String>,
    /// SDK version string
    pub version: Option<String>,
    /// Domain resolved by the client's default-domain bootstrap
    pub default_domain: Option<String>,
    /// Version given to new documents whose address pins none
    pub initial_version: Option<VersionNumber>,
}

impl ConfigOverrides {
    /// Creates empty overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the SDK version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the default domain.
    #[must_use]
    pub fn with_default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = Some(domain.into());
        self
    }

    /// Sets the initial version for new documents.
    #[must_use]
    pub const fn with_initial_version(mut self, version: VersionNumber) -> Self {
        self.initial_version = Some(version);
        self
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    api_key: ApiKey,
    base_url: Url,
    version: String,
    default_domain: Option<String>,
    initial_version: VersionNumber,
}

impl ContextConfig {
    /// Builds a configuration, validating the key and base URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key is blank or the URL is invalid.
    pub fn new(api_key: impl Into<String>, overrides: ConfigOverrides) -> ContextResult<Self> {
        let api_key = ApiKey::new(api_key)?;
        let raw_url = overrides.url.as_deref().unwrap_or(DEFAULT_API_URL);
        let base_url = Url::parse(raw_url.trim_end_matches('/'))
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {raw_url}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::InvalidBaseUrl(raw_url.to_string()).into());
        }

        Ok(Self {
            api_key,
            base_url,
            version: overrides
                .version
                .unwrap_or_else(|| DEFAULT_SDK_VERSION.to_string()),
            default_domain: overrides.default_domain,
            initial_version: overrides.initial_version.unwrap_or(DEFAULT_INITIAL_VERSION),
        })
    }

    /// Builds a configuration from `CONTEXT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `CONTEXT_API_KEY` is unset or blank,
    /// or `CONTEXT_API_URL` is invalid.
    pub fn from_env() -> ContextResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ContextResult<Self> {
        let api_key = lookup(ENV_API_KEY).unwrap_or_default();
        let overrides = ConfigOverrides {
            url: lookup(ENV_API_URL),
            version: lookup(ENV_API_VERSION),
            default_domain: lookup(ENV_DEFAULT_DOMAIN),
            initial_version: None,
        };
        Self::new(api_key, overrides)
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the SDK version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the configured default domain.
    #[must_use]
    pub fn default_domain(&self) -> Option<&str> {
        self.default_domain.as_deref()
    }

    /// Returns the version given to new documents that pin none.
    #[must_use]
    pub const fn initial_version(&self) -> VersionNumber {
        self.initial_version
    }

    /// Returns the `User-Agent` sent with each request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("context-sdk/{}", self.version)
    }

    /// Resolves an API route such as `/documents/acme/x` against the base URL.
    ///
    /// Each `/`-separated segment is appended percent-encoded, so `#`, `?`
    /// and `%` in a document path stay part of that path.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the base URL cannot take path segments.
    pub fn endpoint_url(&self, path: &str) -> ContextResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.trim_start_matches('/').split('/'));
        Ok(url)
    }
}
