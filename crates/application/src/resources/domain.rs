//! Domain accessor

use std::path::Path;

use chrono::{DateTime, Utc};
use context_domain::{
    DocumentAddress, DocumentFilter, DomainRecord, DomainStatus, Endpoint, Metadata, Page,
};
use serde_json::Value;

use super::Document;
use crate::api::ContextApi;
use crate::result::ContextResult;

/// A snapshot of a domain, scoping document operations to it.
#[derive(Debug, Clone)]
pub struct Domain {
    record: DomainRecord,
    api: ContextApi,
}

impl Domain {
    pub(crate) const fn new(record: DomainRecord, api: ContextApi) -> Self {
        Self { record, api }
    }

    /// Domain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Hash of the name.
    #[must_use]
    pub fn name_hash(&self) -> &str {
        &self.record.name_hash
    }

    /// Registration status.
    #[must_use]
    pub const fn status(&self) -> DomainStatus {
        self.record.status
    }

    /// Owner account.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.record.owner
    }

    /// Delegated editor, if any.
    #[must_use]
    pub fn editor(&self) -> Option<&str> {
        self.record.editor.as_deref()
    }

    /// Raw document references held by the domain.
    #[must_use]
    pub fn documents(&self) -> &[Value] {
        &self.record.documents
    }

    /// Creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.record.timestamps.created_at
    }

    /// Last update instant.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.record.timestamps.updated_at
    }

    /// The underlying record.
    #[must_use]
    pub const fn record(&self) -> &DomainRecord {
        &self.record
    }

    /// Fetches a document of this domain.
    ///
    /// `path` is relative to the domain and may pin a version with `?v=`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed path, `DocumentNotFound`
    /// for an unknown document, or the classified transport failure.
    pub async fn document(&self, path: &str, endpoint: Endpoint) -> ContextResult<Document> {
        let address = self.address(path)?;
        let record = self.api.get_document(endpoint, &address).await?;
        Ok(Document::new(record, self.api.clone()))
    }

    /// Lists this domain's documents; any domain set on `filter` is replaced.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    pub async fn list_documents(
        &self,
        filter: DocumentFilter,
        endpoint: Endpoint,
    ) -> ContextResult<Page<Document>> {
        let filter = filter.in_domain(self.record.name.clone());
        let page = self.api.list_documents(endpoint, &filter).await?;
        Ok(page.map(|record| Document::new(record, self.api.clone())))
    }

    /// Creates a document in this domain.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed path or template address,
    /// the failure of any template lookup, or the classified transport
    /// failure.
    pub async fn create_document(
        &self,
        path: &str,
        data: Value,
        templates: &[&str],
    ) -> ContextResult<Document> {
        self.create(path, data, templates, false).await
    }

    /// Creates a template document in this domain.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed path, or the classified
    /// transport failure.
    pub async fn create_template(&self, path: &str, data: Value) -> ContextResult<Document> {
        self.create(path, data, &[], true).await
    }

    /// Uploads a file as an asset document of this domain.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed path, an internal error if
    /// the file cannot be read, or the classified transport failure.
    pub async fn upload_asset(
        &self,
        path: &str,
        file_path: impl AsRef<Path>,
        metadata: Option<Metadata>,
    ) -> ContextResult<Document> {
        let address = self.address(path)?;
        let asset = self
            .api
            .upload_asset(&address, file_path.as_ref(), metadata)
            .await?;
        Ok(Document::new(asset.document, self.api.clone()))
    }

    async fn create(
        &self,
        path: &str,
        data: Value,
        templates: &[&str],
        is_template: bool,
    ) -> ContextResult<Document> {
        let address = self.address(path)?;
        let record = self
            .api
            .create_document(&address, data, templates, is_template)
            .await?;
        Ok(Document::new(record, self.api.clone()))
    }

    fn address(&self, path: &str) -> ContextResult<DocumentAddress> {
        let address = format!("{}/{}", self.record.name, path.trim_start_matches('/'));
        Ok(address.parse()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ContextError;
    use crate::ports::RequestBody;
    use crate::testing::{MockTransport, api, document_json, domain_json};
    use context_domain::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn domain(transport: &Arc<MockTransport>) -> Domain {
        let record: DomainRecord = serde_json::from_value(domain_json("acme")).unwrap();
        Domain::new(record, api(transport))
    }

    #[test]
    fn test_projections() {
        let transport = Arc::new(MockTransport::new());
        let acme = domain(&transport);
        assert_eq!(acme.name(), "acme");
        assert_eq!(acme.name_hash(), "hash-acme");
        assert_eq!(acme.owner(), "0xowner");
        assert_eq!(acme.editor(), None);
        assert!(acme.documents().is_empty());
        assert!(acme.updated_at() > acme.created_at());
    }

    #[tokio::test]
    async fn test_document_scopes_path_to_domain() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/documents/acme/docs/readme",
            200,
            json!({"document": document_json("acme", "docs/readme", "1.2.0", "normal")}),
        ));
        let acme = domain(&transport);

        let doc = acme
            .document("docs/readme?v=1.2.0", Endpoint::Authenticated)
            .await
            .unwrap();
        assert_eq!(doc.path(), "acme/docs/readme");
        assert_eq!(
            transport.requests()[0].query,
            vec![("v".to_string(), "1.2.0".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_document_is_document_not_found() {
        let transport = Arc::new(MockTransport::new());
        let acme = domain(&transport);

        let err = acme
            .document("missing/path", Endpoint::Authenticated)
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::DocumentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_document_uses_initial_version() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Post,
            "/documents",
            200,
            json!({"document": document_json("acme", "notes", "1.0.0", "normal")}),
        ));
        let acme = domain(&transport);

        let doc = acme
            .create_document("notes", json!({"body": "hi"}), &[])
            .await
            .unwrap();
        assert_eq!(doc.version_number(), "1.0.0");
        assert_eq!(
            transport.requests()[0].body,
            RequestBody::Json(json!({
                "document": {"path": "acme/notes", "isTemplate": false},
                "version": {
                    "data": {"body": "hi"},
                    "templates": [],
                    "major": 1,
                    "minor": 0,
                    "patch": 0
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_create_template_flags_document() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Post,
            "/documents",
            200,
            json!({"document": document_json("acme", "base", "2.0.0", "normal")}),
        ));
        let acme = domain(&transport);

        acme.create_template("base?v=2.0.0", json!({}))
            .await
            .unwrap();
        let RequestBody::Json(body) = &transport.requests()[0].body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["document"]["isTemplate"], json!(true));
        assert_eq!(body["version"]["major"], json!(2));
    }

    #[tokio::test]
    async fn test_failed_template_lookup_aborts_create() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/documents/shared/a",
            200,
            json!({"document": document_json("shared", "a", "1.0.0", "normal")}),
        ));
        let acme = domain(&transport);

        let err = acme
            .create_document("notes", json!({}), &["shared/a", "shared/gone"])
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::DocumentNotFound { .. }));
        assert!(
            transport
                .requests()
                .iter()
                .all(|request| request.method == HttpMethod::Get)
        );
    }

    #[tokio::test]
    async fn test_invalid_template_address_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let acme = domain(&transport);

        let err = acme
            .create_document("notes", json!({}), &["shared/a?v=1.x"])
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_documents_pins_domain() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/public/documents",
            200,
            json!({
                "documents": [document_json("acme", "a", "1.0.0", "normal")],
                "total": 1,
                "limit": 10,
                "offset": 0
            }),
        ));
        let acme = domain(&transport);

        let page = acme
            .list_documents(DocumentFilter::new().in_domain("other"), Endpoint::Public)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.items[0].path(), "acme/a");
        assert!(
            transport.requests()[0]
                .query
                .contains(&("domain".to_string(), "acme".to_string()))
        );
    }
}
