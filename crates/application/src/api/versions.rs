//! Version history operations

use context_domain::{DocumentAddress, Page, ResourceKind, VersionFilter, VersionSummary};
use tracing::instrument;

use super::ContextApi;
use crate::ports::ApiRequest;
use crate::result::ContextResult;

impl ContextApi {
    /// Lists the versions of a document, newest first as ordered by the server.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an address without a domain, or the
    /// classified transport failure.
    #[instrument(skip_all, fields(address = %address))]
    pub async fn list_versions(
        &self,
        address: &DocumentAddress,
        filter: &VersionFilter,
    ) -> ContextResult<Page<VersionSummary>> {
        let request = ApiRequest::get(
            format!("/documents/versions/{}", address.key()?),
            ResourceKind::Document,
        )
        .with_filter(filter)?;
        self.send(request).await?.decode()
    }
}
