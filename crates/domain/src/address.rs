//! Document addresses and semantic version numbers.
//!
//! A document is addressed as `[domain/]path[?v=major.minor.patch]`. The
//! domain segment is everything before the first `/`; the query string
//! after the first `?` may carry a `v` key pinning a version. An address
//! without `v` refers to the latest version.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{DomainError, DomainResult};

/// Query key that pins a document version inside an address.
pub const VERSION_QUERY_KEY: &str = "v";

/// Version given to a newly created document when its address does not pin one.
///
/// Clients can override it through their configuration.
pub const DEFAULT_INITIAL_VERSION: VersionNumber = VersionNumber::new(1, 0, 0);

/// A `major.minor.patch` version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionNumber {
    /// Major component
    pub major: u32,
    /// Minor component
    pub minor: u32,
    /// Patch component
    pub patch: u32,
}

impl VersionNumber {
    /// Creates a version triple.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidVersionNumber(s.to_string());

        let mut parts = s.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Ok(Self::new(
            parse_component(major).ok_or_else(invalid)?,
            parse_component(minor).ok_or_else(invalid)?,
            parse_component(patch).ok_or_else(invalid)?,
        ))
    }
}

/// Digits only; `u32::from_str` alone would also accept a leading `+`.
fn parse_component(component: &str) -> Option<u32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// A parsed `[domain/]path[?v=X.Y.Z]` address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentAddress {
    /// Domain segment, if the address had one
    pub domain_name: Option<String>,
    /// Document path inside the domain
    pub document_path: String,
    /// Pinned version; `None` means latest
    pub version_number: Option<VersionNumber>,
}

impl DocumentAddress {
    /// Creates an address for the latest version of `path` in `domain`.
    #[must_use]
    pub fn new(domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            domain_name: Some(domain.into()),
            document_path: path.into(),
            version_number: None,
        }
    }

    /// Pins this address to a version.
    #[must_use]
    pub const fn at_version(mut self, version: VersionNumber) -> Self {
        self.version_number = Some(version);
        self
    }

    /// Returns the domain segment, failing for domain-less addresses.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` when the address has no domain.
    pub fn require_domain(&self) -> DomainResult<&str> {
        self.domain_name
            .as_deref()
            .ok_or_else(|| DomainError::InvalidAddress(self.to_string()))
    }

    /// Returns `domain/path` without the version query.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` when the address has no domain.
    pub fn key(&self) -> DomainResult<String> {
        let domain = self.require_domain()?;
        Ok(format!("{domain}/{}", self.document_path))
    }
}

impl FromStr for DocumentAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let (domain_name, rest) = match s.split_once('/') {
            Some((domain, rest)) => (Some(domain), rest),
            None => (None, s),
        };

        let (document_path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        if domain_name.is_some_and(|domain| domain.is_empty() || is_dot_segment(domain))
            || document_path.is_empty()
            || document_path.split('/').any(is_dot_segment)
        {
            return Err(DomainError::InvalidAddress(s.to_string()));
        }

        let version_number = query
            .and_then(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == VERSION_QUERY_KEY)
                    .map(|(_, value)| value.into_owned())
            })
            .map(|value| value.parse::<VersionNumber>())
            .transpose()?;

        Ok(Self {
            domain_name: domain_name.map(str::to_string),
            document_path: document_path.to_string(),
            version_number,
        })
    }
}

/// `.` and `..` would be collapsed by URL resolution and escape the route.
fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

impl fmt::Display for DocumentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(domain) = &self.domain_name {
            write!(f, "{domain}/")?;
        }
        f.write_str(&self.document_path)?;
        if let Some(version) = self.version_number {
            write!(f, "?{VERSION_QUERY_KEY}={version}")?;
        }
        Ok(())
    }
}
