//! Version records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DocumentSummary, Metadata, Reference};
use crate::address::{DocumentAddress, VersionNumber};

/// A document version as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning document
    #[serde(
        rename = "documentId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document: Option<Reference<DocumentSummary>>,
    /// Id of the version this one replaced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_version_id: Option<String>,
    /// Opaque payload
    #[serde(default)]
    pub data: serde_json::Value,
    /// Optional metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Template versions this version builds on
    #[serde(default)]
    pub templates: Vec<Reference<Self>>,
    /// Transaction that recorded this version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Major component
    #[serde(default)]
    pub major: u32,
    /// Minor component
    #[serde(default)]
    pub minor: u32,
    /// Patch component
    #[serde(default)]
    pub patch: u32,
    /// `major.minor.patch` as sent by the server
    #[serde(default)]
    pub version_number: String,
    /// Creation instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl VersionRecord {
    /// Returns the version triple.
    #[must_use]
    pub const fn semver(&self) -> VersionNumber {
        VersionNumber::new(self.major, self.minor, self.patch)
    }

    /// Returns the `domain/path?v=X.Y.Z` address of this version when the
    /// owning document and its domain are populated.
    #[must_use]
    pub fn address(&self) -> Option<DocumentAddress> {
        let document = self.document.as_ref()?.populated()?;
        let domain = document.domain.populated()?;
        let address = DocumentAddress::new(domain.name.clone(), document.path.clone());
        Some(address.at_version(self.semver()))
    }

    /// Renders each template as an address, or as its id when the server
    /// did not populate it.
    #[must_use]
    pub fn template_addresses(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| match template {
                Reference::Id(id) => id.clone(),
                Reference::Populated(version) => version
                    .address()
                    .map_or_else(|| version.id.clone(), |address| address.to_string()),
            })
            .collect()
    }
}

/// An entry in a document's version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    /// `major.minor.patch`
    pub version_number: String,
    /// When the version was recorded
    pub created_at: DateTime<Utc>,
}

/// Paging filter for version listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFilter {
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
