//! Asset uploads

use std::path::Path;

use context_domain::{
    AssetEnvelope, AssetRecord, DocumentAddress, Metadata, ResourceKind, VersionNumber,
};
use serde_json::json;
use tracing::instrument;

use super::{ContextApi, insert_metadata, insert_version_number};
use crate::ports::{ApiRequest, AssetUpload};
use crate::result::ContextResult;

impl ContextApi {
    /// Uploads a file as a new asset document.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an address without a domain, an
    /// internal error if the file cannot be read, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(address = %address, file = %file_path.display()))]
    pub async fn upload_asset(
        &self,
        address: &DocumentAddress,
        file_path: &Path,
        metadata: Option<Metadata>,
    ) -> ContextResult<AssetRecord> {
        let mut body = json!({ "path": address.key()? });
        insert_metadata(&mut body, metadata);

        let upload = AssetUpload {
            file_path: file_path.to_path_buf(),
            body,
        };
        let request = ApiRequest::post("/assets", ResourceKind::Asset).with_asset(upload);
        let envelope: AssetEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.asset)
    }

    /// Replaces the file of an asset document.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an address without a domain, an
    /// internal error if the file cannot be read, or the classified
    /// transport failure.
    #[instrument(skip_all, fields(address = %address, file = %file_path.display()))]
    pub async fn update_asset(
        &self,
        address: &DocumentAddress,
        file_path: &Path,
        metadata: Option<Metadata>,
        version: Option<VersionNumber>,
    ) -> ContextResult<AssetRecord> {
        let key = address.key()?;
        let mut body = json!({});
        insert_metadata(&mut body, metadata);
        insert_version_number(&mut body, version);

        let upload = AssetUpload {
            file_path: file_path.to_path_buf(),
            body,
        };
        let request =
            ApiRequest::patch(format!("/assets/{key}"), ResourceKind::Asset).with_asset(upload);
        let envelope: AssetEnvelope = self.send(request).await?.decode()?;
        Ok(envelope.asset)
    }
}
