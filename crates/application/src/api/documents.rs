//! Document operations

use context_domain::{
    DocumentAddress, DocumentEnvelope, DocumentFilter, DocumentRecord, Endpoint, Metadata, Page,
    ResourceKind, VERSION_QUERY_KEY, VersionNumber,
};
use futures::future::try_join_all;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::{ContextApi, insert_version_number};
use crate::ports::ApiRequest;
use crate::result::ContextResult;

/// Direction of a template change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateAction {
    /// Add templates to the document's current version
    Install,
    /// Remove templates from the document's current version
    Uninstall,
}

impl TemplateAction {
    /// Route segment for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

impl ContextApi {
    /// Lists documents.
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure.
    #[instrument(skip_all, fields(endpoint = ?endpoint))]
    pub async fn list_documents(
        &self,
        endpoint: Endpoint,
        filter: &DocumentFilter,
    ) -> ContextResult<Page<DocumentRecord>> {
        let request = ApiRequest::get(endpoint.route("documents"), ResourceKind::Document)
            .with_filter(filter)?;
        self.send(request).await?.decode()
    }

    /// Fetches a document, at the address's pinned version or the latest.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an address without a domain,
    /// `DocumentNotFound` for an unknown document, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(endpoint = ?endpoint, address = %address))]
    pub async fn get_document(
        &self,
        endpoint: Endpoint,
        address: &DocumentAddress,
    ) -> ContextResult<DocumentRecord> {
        let mut request = ApiRequest::get(
            endpoint.route(&format!("documents/{}", address.key()?)),
            ResourceKind::Document,
        );
        if let Some(version) = address.version_number {
            request = request.with_param(VERSION_QUERY_KEY, version.to_string());
        }
        let envelope: DocumentEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.into_record())
    }

    /// Creates a document with its first version.
    ///
    /// The version comes from the address's `?v=` or, failing that, the
    /// configured initial version. Template addresses are resolved to
    /// version ids first; if any lookup fails nothing is created.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed addresses, the failure of
    /// any template lookup, or the classified transport failure.
    #[instrument(skip_all, fields(address = %address, templates = templates.len()))]
    pub async fn create_document(
        &self,
        address: &DocumentAddress,
        data: Value,
        templates: &[&str],
        is_template: bool,
    ) -> ContextResult<DocumentRecord> {
        let key = address.key()?;
        let version = address
            .version_number
            .unwrap_or_else(|| self.config().initial_version());
        let template_ids = self.resolve_templates(templates).await?;

        let body = json!({
            "document": {
                "path": key,
                "isTemplate": is_template,
            },
            "version": {
                "data": data,
                "templates": template_ids,
                "major": version.major,
                "minor": version.minor,
                "patch": version.patch,
            },
        });
        let request = ApiRequest::post("/documents", ResourceKind::Document).with_json(body);
        let envelope: DocumentEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.into_record())
    }

    /// Records a new version of a document.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed addresses, the failure of
    /// any template lookup, or the classified transport failure.
    #[instrument(skip_all, fields(address = %address))]
    pub async fn update_document(
        &self,
        address: &DocumentAddress,
        data: Value,
        templates: &[&str],
        version: Option<VersionNumber>,
    ) -> ContextResult<DocumentRecord> {
        let key = address.key()?;
        let template_ids = self.resolve_templates(templates).await?;

        let mut body = json!({
            "data": data,
            "templates": template_ids,
        });
        insert_version_number(&mut body, version);

        let request =
            ApiRequest::patch(format!("/documents/{key}"), ResourceKind::Document).with_json(body);
        let envelope: DocumentEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.into_record())
    }

    /// Replaces the metadata of a document version.
    ///
    /// Without `version` the server records a new version.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an address without a domain, or the
    /// classified transport failure.
    #[instrument(skip_all, fields(address = %address))]
    pub async fn update_metadata(
        &self,
        address: &DocumentAddress,
        metadata: Metadata,
        version: Option<VersionNumber>,
    ) -> ContextResult<DocumentRecord> {
        let key = address.key()?;
        let mut body = json!({ "metadata": metadata });
        insert_version_number(&mut body, version);

        let route = format!("/documents/metadata/{key}");
        let request = ApiRequest::patch(route, ResourceKind::Document).with_json(body);
        let envelope: DocumentEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.into_record())
    }

    /// Installs or uninstalls templates on a document.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed addresses, the failure of
    /// any template lookup, or the classified transport failure.
    #[instrument(skip_all, fields(action = action.as_str(), address = %address))]
    pub async fn change_templates(
        &self,
        action: TemplateAction,
        address: &DocumentAddress,
        templates: &[&str],
    ) -> ContextResult<DocumentRecord> {
        let key = address.key()?;
        let template_ids = self.resolve_templates(templates).await?;

        let request = ApiRequest::patch(
            format!("/documents/{}/{key}", action.as_str()),
            ResourceKind::Document,
        )
        .with_json(json!({ "templates": template_ids }));
        let envelope: DocumentEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.into_record())
    }

    /// Resolves template addresses to the ids of the versions they name.
    ///
    /// All addresses are validated before any lookup is sent; lookups then
    /// run concurrently and the first failure aborts the rest.
    pub(crate) async fn resolve_templates(&self, templates: &[&str]) -> ContextResult<Vec<String>> {
        if templates.is_empty() {
            return Ok(Vec::new());
        }

        let addresses = templates
            .iter()
            .map(|template| template.parse::<DocumentAddress>())
            .collect::<Result<Vec<_>, _>>()?;
        for address in &addresses {
            address.key()?;
        }

        debug!(count = addresses.len(), "resolving template versions");
        let documents = try_join_all(
            addresses
                .iter()
                .map(|address| self.get_document(Endpoint::Authenticated, address)),
        )
        .await?;

        Ok(documents.into_iter().map(|d| d.version.id).collect())
    }
}
