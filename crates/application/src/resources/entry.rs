//! Entry points handing out accessors

use std::path::Path;

use context_domain::{DocumentAddress, DocumentFilter, DomainFilter, Endpoint, Metadata, Page};

use super::{Document, Domain};
use crate::api::ContextApi;
use crate::result::ContextResult;

impl ContextApi {
    /// Lists domains as accessors.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    pub async fn domains(
        &self,
        endpoint: Endpoint,
        filter: &DomainFilter,
    ) -> ContextResult<Page<Domain>> {
        let page = self.list_domains(endpoint, filter).await?;
        Ok(page.map(|record| Domain::new(record, self.clone())))
    }

    /// Fetches a domain accessor by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainNotFound` for an unknown name, or the classified
    /// transport failure.
    pub async fn domain(&self, endpoint: Endpoint, name: &str) -> ContextResult<Domain> {
        let record = self.get_domain(endpoint, name).await?;
        Ok(Domain::new(record, self.clone()))
    }

    /// Lists documents as accessors.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    pub async fn documents(
        &self,
        endpoint: Endpoint,
        filter: &DocumentFilter,
    ) -> ContextResult<Page<Document>> {
        let page = self.list_documents(endpoint, filter).await?;
        Ok(page.map(|record| Document::new(record, self.clone())))
    }

    /// Fetches a document accessor from a `domain/path[?v=X.Y.Z]` address.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed address or one without a
    /// domain, `DocumentNotFound` for an unknown document, or the classified
    /// transport failure.
    pub async fn document(&self, endpoint: Endpoint, address: &str) -> ContextResult<Document> {
        let address: DocumentAddress = address.parse()?;
        let record = self.get_document(endpoint, &address).await?;
        Ok(Document::new(record, self.clone()))
    }

    /// Uploads a file as an asset document at `address`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed address, an internal
    /// error if the file cannot be read, or the classified transport failure.
    pub async fn asset(
        &self,
        address: &str,
        file_path: &Path,
        metadata: Option<Metadata>,
    ) -> ContextResult<Document> {
        let address: DocumentAddress = address.parse()?;
        let asset = self.upload_asset(&address, file_path, metadata).await?;
        Ok(Document::new(asset.document, self.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ContextError;
    use crate::testing::{MockTransport, api, document_json, domain_json};
    use context_domain::{DomainError, HttpMethod};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_domains_page() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/domains",
            200,
            json!({"domains": [domain_json("acme"), domain_json("globex")], "total": 2}),
        ));

        let page = api(&transport)
            .domains(Endpoint::Authenticated, &DomainFilter::new().with_limit(2))
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(Domain::name).collect();
        assert_eq!(names, vec!["acme", "globex"]);
    }

    #[tokio::test]
    async fn test_unknown_domain() {
        let transport = Arc::new(MockTransport::new());
        let err = api(&transport)
            .domain(Endpoint::Public, "nowhere")
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::DomainNotFound { .. }));
        assert_eq!(transport.requests()[0].path, "/public/domains/nowhere");
    }

    #[tokio::test]
    async fn test_document_without_domain_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let err = api(&transport)
            .document(Endpoint::Authenticated, "readme")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ContextError::Validation(DomainError::InvalidAddress(_))
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_document_by_address() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/documents/acme/readme",
            200,
            document_json("acme", "readme", "3.1.4", "normal"),
        ));
        let doc = api(&transport)
            .document(Endpoint::Authenticated, "acme/readme")
            .await
            .unwrap();
        assert_eq!(doc.version_number(), "3.1.4");
        assert!(transport.requests()[0].query.is_empty());
    }
}
