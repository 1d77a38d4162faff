//! Domain operations

use context_domain::{DomainEnvelope, DomainFilter, DomainRecord, Endpoint, Page, ResourceKind};
use tracing::instrument;

use super::ContextApi;
use crate::ports::ApiRequest;
use crate::result::ContextResult;

impl ContextApi {
    /// Lists domains.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    #[instrument(skip_all, fields(endpoint = ?endpoint))]
    pub async fn list_domains(
        &self,
        endpoint: Endpoint,
        filter: &DomainFilter,
    ) -> ContextResult<Page<DomainRecord>> {
        let request =
            ApiRequest::get(endpoint.route("domains"), ResourceKind::Domain).with_filter(filter)?;
        self.send(request).await?.decode()
    }

    /// Fetches one domain by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainNotFound` for an unknown name, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(endpoint = ?endpoint, name = %name))]
    pub async fn get_domain(&self, endpoint: Endpoint, name: &str) -> ContextResult<DomainRecord> {
        let request = ApiRequest::get(
            endpoint.route(&format!("domains/{name}")),
            ResourceKind::Domain,
        );
        let envelope: DomainEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.domain)
    }
}
