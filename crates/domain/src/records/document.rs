//! Document records

use serde::{Deserialize, Serialize};

use super::{DomainSummary, Reference, Timestamps, VersionRecord};

/// What a document's payload is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Structured JSON data
    #[default]
    Normal,
    /// An uploaded binary file
    Asset,
}

/// A document as returned by the API, with its current version populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Id of the top-level document this one belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_document: Option<String>,
    /// Path inside the domain
    pub path: String,
    /// Hash of the path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_hash: Option<String>,
    /// Owning domain
    #[serde(rename = "domainId")]
    pub domain: DomainSummary,
    /// Whether the document is a template
    #[serde(default)]
    pub is_template: bool,
    /// Payload kind
    #[serde(rename = "type", default)]
    pub document_type: DocumentType,
    /// Current version number, as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
    /// Current version
    pub version: VersionRecord,
    /// Timestamps
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// The part of a document embedded in version records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Server id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Path inside the domain
    pub path: String,
    /// Owning domain
    #[serde(rename = "domainId")]
    pub domain: Reference<DomainSummary>,
}

/// Single-document response body.
///
/// Most routes wrap the document as `{"document": ...}`; some answer with
/// the bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocumentEnvelope {
    /// `{"document": ...}`
    Wrapped {
        /// The document
        document: Box<DocumentRecord>,
    },
    /// The document itself
    Bare(Box<DocumentRecord>),
}

impl DocumentEnvelope {
    /// Unwraps the document.
    #[must_use]
    pub fn into_record(self) -> DocumentRecord {
        match self {
            Self::Wrapped { document } | Self::Bare(document) => *document,
        }
    }
}

/// The document/version pair created by an asset upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetRecord {
    /// The asset document
    pub document: DocumentRecord,
    /// The version holding the file
    #[serde(default)]
    pub version: Option<VersionRecord>,
}

/// `{"asset": {...}}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetEnvelope {
    /// The uploaded asset
    pub asset: AssetRecord,
}

/// Filter for document listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Match on document name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Restrict to one domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Only templates (`true`) or only non-templates (`false`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<bool>,
}

impl DocumentFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one domain.
    #[must_use]
    pub fn in_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Filters by name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters on the template flag.
    #[must_use]
    pub const fn templates(mut self, template: bool) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets offset and limit.
    #[must_use]
    pub const fn page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}
