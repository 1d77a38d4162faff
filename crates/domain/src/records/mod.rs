//! Wire records returned by the document API.
//!
//! These mirror the server's JSON representation. They are plain data;
//! behaviour lives on the accessors built from them in the application
//! layer.

mod document;
mod domain;
mod version;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use document::{
    AssetEnvelope, AssetRecord, DocumentEnvelope, DocumentFilter, DocumentRecord,
    DocumentSummary, DocumentType,
};
pub use domain::{DomainEnvelope, DomainFilter, DomainRecord, DomainStatus, DomainSummary};
pub use version::{VersionFilter, VersionRecord, VersionSummary};

/// Arbitrary key/value metadata attached to a version.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Creation and last-update instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    /// When the resource was created
    pub created_at: DateTime<Utc>,
    /// When the resource was last modified
    pub updated_at: DateTime<Utc>,
}

/// A reference that the server either sends as a bare id or populates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    /// Unpopulated id
    Id(String),
    /// Populated object
    Populated(Box<T>),
}

impl<T> Reference<T> {
    /// Returns the populated object, if any.
    #[must_use]
    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Populated(value) => Some(value),
            Self::Id(_) => None,
        }
    }

    /// Returns the bare id, if the reference was not populated.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Populated(_) => None,
        }
    }
}

/// One page of a listing.
///
/// The server names the item array after the resource (`domains`,
/// `documents`, `versions`); all three are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    #[serde(alias = "domains", alias = "documents", alias = "versions")]
    pub items: Vec<T>,
    /// Total number of matching items
    #[serde(default)]
    pub total: u64,
    /// Page size the server applied
    #[serde(default)]
    pub limit: u64,
    /// Offset of the first item
    #[serde(default)]
    pub offset: u64,
}

impl<T> Page<T> {
    /// Converts every item, keeping the paging fields.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Returns the number of items on this page.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if this page holds no items.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
