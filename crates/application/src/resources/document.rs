//! Document accessor

use std::path::Path;

use chrono::{DateTime, Utc};
use context_domain::{
    DocumentAddress, DocumentRecord, DocumentType, Endpoint, Metadata, Page, VersionFilter,
    VersionNumber, VersionSummary,
};
use serde_json::{Value, json};

use super::Version;
use crate::api::{ContextApi, TemplateAction};
use crate::error::ContextError;
use crate::result::ContextResult;

/// A snapshot of a document at one version.
#[derive(Debug, Clone)]
pub struct Document {
    record: DocumentRecord,
    api: ContextApi,
}

impl Document {
    pub(crate) const fn new(record: DocumentRecord, api: ContextApi) -> Self {
        Self { record, api }
    }

    /// `domain/path`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", self.record.domain.name, self.record.path)
    }

    /// Address of the latest version of this document.
    #[must_use]
    pub fn address(&self) -> DocumentAddress {
        DocumentAddress::new(self.record.domain.name.clone(), self.record.path.clone())
    }

    /// Name of the owning domain.
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.record.domain.name
    }

    /// Version number of this snapshot.
    #[must_use]
    pub fn version_number(&self) -> &str {
        &self.record.version.version_number
    }

    /// Payload of this snapshot.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.record.version.data
    }

    /// Metadata of this snapshot.
    #[must_use]
    pub const fn metadata(&self) -> Option<&Metadata> {
        self.record.version.metadata.as_ref()
    }

    /// Templates as `domain/path?v=X.Y.Z` addresses.
    #[must_use]
    pub fn templates(&self) -> Vec<String> {
        self.record.version.template_addresses()
    }

    /// Transaction that recorded this snapshot's version.
    #[must_use]
    pub fn tx_id(&self) -> Option<&str> {
        self.record.version.tx_id.as_deref()
    }

    /// Payload kind.
    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        self.record.document_type
    }

    /// Whether the payload is an uploaded file.
    #[must_use]
    pub fn is_asset(&self) -> bool {
        self.record.document_type == DocumentType::Asset
    }

    /// Whether the document is a template.
    #[must_use]
    pub const fn is_template(&self) -> bool {
        self.record.is_template
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

    /// The version this snapshot holds.
    #[must_use]
    pub fn version(&self) -> Version {
        Version::new(self.record.version.clone())
    }

    /// The underlying record.
    #[must_use]
    pub const fn record(&self) -> &DocumentRecord {
        &self.record
    }

    /// Summary of the snapshot as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "path": self.path(),
            "versionNumber": self.version_number(),
            "data": self.data(),
            "templates": self.templates(),
            "txId": self.tx_id(),
            "createdAt": self.created_at(),
            "updatedAt": self.updated_at(),
        })
    }

    /// Lists this document's versions.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    pub async fn versions(&self, filter: &VersionFilter) -> ContextResult<Page<VersionSummary>> {
        self.api.list_versions(&self.address(), filter).await
    }

    /// Fetches this document at another version.
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` for an unknown version, or the classified
    /// transport failure.
    pub async fn get_version(
        &self,
        version: VersionNumber,
        endpoint: Endpoint,
    ) -> ContextResult<Self> {
        let address = self.address().at_version(version);
        Ok(self.refreshed(self.api.get_document(endpoint, &address).await?))
    }

    /// Records a new version with `data` and `templates`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for asset documents, the failure of
    /// any template lookup, or the classified transport failure.
    pub async fn update(
        &self,
        data: Value,
        templates: &[&str],
        version: Option<VersionNumber>,
    ) -> ContextResult<Self> {
        self.require_type(DocumentType::Normal, "update")?;
        let record = self
            .api
            .update_document(&self.address(), data, templates, version)
            .await?;
        Ok(self.refreshed(record))
    }

    /// Attaches metadata, recording a new version.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    pub async fn add_metadata(&self, metadata: Metadata) -> ContextResult<Self> {
        self.update_metadata(metadata, None).await
    }

    /// Replaces the metadata of `version`, or records a new version when
    /// `version` is `None`.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    pub async fn update_metadata(
        &self,
        metadata: Metadata,
        version: Option<VersionNumber>,
    ) -> ContextResult<Self> {
        let record = self
            .api
            .update_metadata(&self.address(), metadata, version)
            .await?;
        Ok(self.refreshed(record))
    }

    /// Installs templates on this document.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for asset documents, the failure of
    /// any template lookup, or the classified transport failure.
    pub async fn install_templates(&self, templates: &[&str]) -> ContextResult<Self> {
        self.change_templates(TemplateAction::Install, templates)
            .await
    }

    /// Uninstalls templates from this document.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for asset documents, the failure of
    /// any template lookup, or the classified transport failure.
    pub async fn uninstall_templates(&self, templates: &[&str]) -> ContextResult<Self> {
        self.change_templates(TemplateAction::Uninstall, templates)
            .await
    }

    /// Replaces the file behind an asset document.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for non-asset documents (no request is
    /// sent), an internal error if the file cannot be read, or the
    /// classified transport failure.
    pub async fn update_asset(
        &self,
        file_path: impl AsRef<Path>,
        metadata: Option<Metadata>,
        version: Option<VersionNumber>,
    ) -> ContextResult<Self> {
        self.require_type(DocumentType::Asset, "update_asset")?;
        let asset = self
            .api
            .update_asset(&self.address(), file_path.as_ref(), metadata, version)
            .await?;
        Ok(self.refreshed(asset.document))
    }

    async fn change_templates(
        &self,
        action: TemplateAction,
        templates: &[&str],
    ) -> ContextResult<Self> {
        self.require_type(DocumentType::Normal, action.as_str())?;
        let record = self
            .api
            .change_templates(action, &self.address(), templates)
            .await?;
        Ok(self.refreshed(record))
    }

    fn require_type(&self, expected: DocumentType, operation: &str) -> ContextResult<()> {
        if self.record.document_type == expected {
            return Ok(());
        }
        Err(ContextError::UnsupportedOperation(format!(
            "{operation} needs a {expected:?} document but {} is {:?}",
            self.path(),
            self.record.document_type
        )))
    }

    fn refreshed(&self, record: DocumentRecord) -> Self {
        Self::new(record, self.api.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::RequestBody;
    use crate::testing::{MockTransport, api, document_json};
    use context_domain::{HttpMethod, VersionRecord};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn document(transport: &Arc<MockTransport>, document_type: &str) -> Document {
        let json = document_json("acme", "config", "1.0.0", document_type);
        let record: DocumentRecord = serde_json::from_value(json).unwrap();
        Document::new(record, api(transport))
    }

    #[test]
    fn test_projections() {
        let transport = Arc::new(MockTransport::new());
        let doc = document(&transport, "normal");

        assert_eq!(doc.path(), "acme/config");
        assert_eq!(doc.domain_name(), "acme");
        assert_eq!(doc.version_number(), "1.0.0");
        assert_eq!(doc.data(), &json!({"title": "config"}));
        assert_eq!(doc.metadata().unwrap().get("lang"), Some(&json!("en")));
        assert_eq!(doc.tx_id(), Some("0xtx"));
        assert!(!doc.is_asset());
        assert_eq!(doc.version().semver(), VersionNumber::new(1, 0, 0));
        assert_eq!(doc.to_json()["path"], json!("acme/config"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_returns_new_snapshot() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Patch,
            "/documents/acme/config",
            200,
            json!({"document": document_json("acme", "config", "1.1.0", "normal")}),
        ));
        let original = document(&transport, "normal");

        let updated = original
            .update(
                json!({"title": "new"}),
                &[],
                Some(VersionNumber::new(1, 1, 0)),
            )
            .await
            .unwrap();

        assert_eq!(updated.version_number(), "1.1.0");
        assert_eq!(original.version_number(), "1.0.0");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({
                "data": {"title": "new"},
                "templates": [],
                "versionNumber": "1.1.0"
            }))
        );
    }

    #[tokio::test]
    async fn test_update_asset_on_normal_document_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let doc = document(&transport, "normal");

        let err = doc
            .update_asset("/tmp/missing.png", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, ContextError::UnsupportedOperation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_and_templates_on_asset_send_nothing() {
        let transport = Arc::new(MockTransport::new());
        let doc = document(&transport, "asset");

        assert!(matches!(
            doc.update(json!({}), &[], None).await,
            Err(ContextError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            doc.install_templates(&["shared/base"]).await,
            Err(ContextError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            doc.uninstall_templates(&["shared/base"]).await,
            Err(ContextError::UnsupportedOperation(_))
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_install_templates_resolves_versions_first() {
        let transport = Arc::new(
            MockTransport::new()
                .route(
                    HttpMethod::Get,
                    "/documents/shared/base",
                    200,
                    json!({"document": document_json("shared", "base", "2.0.0", "normal")}),
                )
                .route(
                    HttpMethod::Patch,
                    "/documents/install/acme/config",
                    200,
                    json!({"document": document_json("acme", "config", "1.0.1", "normal")}),
                ),
        );
        let doc = document(&transport, "normal");

        let updated = doc
            .install_templates(&["shared/base?v=2.0.0"])
            .await
            .unwrap();
        assert_eq!(updated.version_number(), "1.0.1");

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(
            requests[0].query,
            vec![("v".to_string(), "2.0.0".to_string())]
        );
        assert_eq!(
            requests[1].body,
            RequestBody::Json(json!({"templates": ["ver-shared-base-2.0.0"]}))
        );
    }

    #[tokio::test]
    async fn test_add_metadata_omits_version() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Patch,
            "/documents/metadata/acme/config",
            200,
            document_json("acme", "config", "1.0.1", "normal"),
        ));
        let doc = document(&transport, "normal");

        let mut metadata = Metadata::new();
        metadata.insert("author".to_string(), json!("ada"));
        let updated = doc.add_metadata(metadata).await.unwrap();

        assert_eq!(updated.version_number(), "1.0.1");
        assert_eq!(
            transport.requests()[0].body,
            RequestBody::Json(json!({"metadata": {"author": "ada"}}))
        );
    }

    #[tokio::test]
    async fn test_get_version_pins_query() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/public/documents/acme/config",
            200,
            json!({"document": document_json("acme", "config", "0.9.0", "normal")}),
        ));
        let doc = document(&transport, "normal");

        let old = doc
            .get_version(VersionNumber::new(0, 9, 0), Endpoint::Public)
            .await
            .unwrap();
        assert_eq!(old.version_number(), "0.9.0");
        assert_eq!(
            transport.requests()[0].query,
            vec![("v".to_string(), "0.9.0".to_string())]
        );
    }

    #[tokio::test]
    async fn test_versions_listing() {
        let transport = Arc::new(MockTransport::new().route(
            HttpMethod::Get,
            "/documents/versions/acme/config",
            200,
            json!({
                "versions": [
                    {"versionNumber": "1.0.0", "createdAt": "2024-05-01T10:00:00Z"},
                    {"versionNumber": "0.9.0", "createdAt": "2024-04-01T10:00:00Z"}
                ],
                "total": 2
            }),
        ));
        let doc = document(&transport, "normal");

        let page = doc
            .versions(&VersionFilter {
                offset: None,
                limit: Some(10),
            })
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[1].version_number, "0.9.0");
        assert_eq!(
            transport.requests()[0].query,
            vec![("limit".to_string(), "10".to_string())]
        );
    }

    #[test]
    fn test_version_record_projection() {
        let transport = Arc::new(MockTransport::new());
        let doc = document(&transport, "asset");
        let version = doc.version();
        let record: &VersionRecord = version.record();
        assert_eq!(record.id, "ver-acme-config-1.0.0");
        assert!(doc.is_asset());
    }
}
