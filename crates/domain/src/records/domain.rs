//! Domain records

use serde::{Deserialize, Serialize};

use super::Timestamps;

/// Registration state of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Reserved but not yet registered
    Temporary,
    /// Registered by its owner
    Registered,
    /// Registered and ownership verified
    Verified,
}

/// A domain as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Id of the user that registered the domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Domain name
    pub name: String,
    /// Hash of the name
    #[serde(default)]
    pub name_hash: String,
    /// Registration state
    pub status: DomainStatus,
    /// Owner address
    #[serde(default)]
    pub owner: String,
    /// Child documents, by reference
    #[serde(default)]
    pub documents: Vec<serde_json::Value>,
    /// Optional editor address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// Timestamps
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// The part of a domain embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSummary {
    /// Server id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Domain name
    pub name: String,
}

/// `{"domain": ...}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainEnvelope {
    /// The domain
    pub domain: DomainRecord,
}

/// Paging filter for domain listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFilter {
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl DomainFilter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: None,
            limit: None,
        }
    }

    /// Sets the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
