//! HTTP request body builder.
//!
//! Turns the application's `RequestBody` into something reqwest can send.
//! Asset uploads become a multipart form with the file under `file` and the
//! JSON description under `body`.

use std::path::Path;

use context_application::{AssetUpload, ContextError, ContextResult, RequestBody};
use reqwest::multipart::{Form, Part};

/// Multipart field holding the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Multipart field holding the JSON description.
pub const BODY_FIELD: &str = "body";

/// Result of building a body.
pub enum BuiltBody {
    /// No body.
    None,
    /// Serialised JSON.
    Json(String),
    /// Multipart form data.
    Multipart(Form),
}

impl BuiltBody {
    /// Get the Content-Type header value.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some("application/json"),
            // reqwest sets this with the boundary
            Self::None | Self::Multipart(_) => None,
        }
    }
}

/// Build an HTTP body from a request body.
///
/// # Errors
///
/// Returns an internal error if the JSON cannot be serialised or the upload
/// file cannot be read.
pub async fn build_body(body: &RequestBody) -> ContextResult<BuiltBody> {
    match body {
        RequestBody::Empty => Ok(BuiltBody::None),
        RequestBody::Json(value) => serde_json::to_string(value)
            .map(BuiltBody::Json)
            .map_err(|e| ContextError::internal(e.to_string())),
        RequestBody::Multipart(upload) => build_asset_form(upload).await.map(BuiltBody::Multipart),
    }
}

/// Build the multipart form for an asset upload.
async fn build_asset_form(upload: &AssetUpload) -> ContextResult<Form> {
    let file_part = file_part(&upload.file_path).await?;
    let description =
        serde_json::to_string(&upload.body).map_err(|e| ContextError::internal(e.to_string()))?;

    Ok(Form::new()
        .part(FILE_FIELD, file_part)
        .text(BODY_FIELD, description))
}

async fn file_part(file_path: &Path) -> ContextResult<Part> {
    let content = tokio::fs::read(file_path)
        .await
        .map_err(|e| ContextError::internal(format!("{}: {e}", file_path.display())))?;

    let filename = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    let mime_type = mime_guess::from_path(file_path)
        .first_or_octet_stream()
        .to_string();

    Part::bytes(content)
        .file_name(filename)
        .mime_str(&mime_type)
        .map_err(|e| ContextError::internal(format!("Invalid MIME type: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn test_build_json_body() {
        let body = RequestBody::Json(json!({"key": "value"}));

        let result = build_body(&body).await.unwrap();
        assert_eq!(result.content_type(), Some("application/json"));
        match result {
            BuiltBody::Json(content) => assert_eq!(content, r#"{"key":"value"}"#),
            _ => panic!("Expected JSON body"),
        }
    }

    #[tokio::test]
    async fn test_build_empty_body() {
        let result = build_body(&RequestBody::Empty).await.unwrap();
        assert!(matches!(result, BuiltBody::None));
        assert_eq!(result.content_type(), None);
    }

    #[tokio::test]
    async fn test_build_asset_form() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let body = RequestBody::Multipart(AssetUpload {
            file_path: file.path().to_path_buf(),
            body: json!({"path": "acme/logo"}),
        });

        let result = build_body(&body).await.unwrap();
        assert!(matches!(result, BuiltBody::Multipart(_)));
        assert_eq!(result.content_type(), None);
    }

    #[tokio::test]
    async fn test_missing_file_is_internal_error() {
        let body = RequestBody::Multipart(AssetUpload {
            file_path: "/nonexistent/context/asset.bin".into(),
            body: json!({}),
        });

        let result = build_body(&body).await;
        assert!(matches!(result, Err(ContextError::Internal(_))));
    }
}
