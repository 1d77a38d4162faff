//! Version accessor

use chrono::{DateTime, Utc};
use context_domain::{Metadata, VersionNumber, VersionRecord};
use serde_json::Value;

/// A snapshot of one document version.
#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    record: VersionRecord,
}

impl Version {
    pub(crate) const fn new(record: VersionRecord) -> Self {
        Self { record }
    }

    /// Server id of the version.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// `major.minor.patch` as sent by the server.
    #[must_use]
    pub fn version_number(&self) -> &str {
        &self.record.version_number
    }

    /// The version triple.
    #[must_use]
    pub const fn semver(&self) -> VersionNumber {
        self.record.semver()
    }

    /// Opaque payload.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.record.data
    }

    /// Metadata, if any was attached.
    #[must_use]
    pub const fn metadata(&self) -> Option<&Metadata> {
        self.record.metadata.as_ref()
    }

    /// Templates as `domain/path?v=X.Y.Z` addresses.
    #[must_use]
    pub fn templates(&self) -> Vec<String> {
        self.record.template_addresses()
    }

    /// Transaction that recorded the version.
    #[must_use]
    pub fn tx_id(&self) -> Option<&str> {
        self.record.tx_id.as_deref()
    }

    /// Id of the version this one replaced.
    #[must_use]
    pub fn prev_version_id(&self) -> Option<&str> {
        self.record.prev_version_id.as_deref()
    }

    /// Creation instant.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.record.created_at
    }

    /// Last update instant.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.record.updated_at
    }

    /// The underlying record.
    #[must_use]
    pub const fn record(&self) -> &VersionRecord {
        &self.record
    }
}
