//! Route families and resource kinds

use serde::{Deserialize, Serialize};

/// Which route family a read goes through.
///
/// Public routes are served under `/public` and only expose published
/// resources; authenticated routes see everything the key owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `/domains`, `/documents`, ...
    #[default]
    Authenticated,
    /// `/public/domains`, `/public/documents`, ...
    Public,
}

impl Endpoint {
    /// Prefix prepended to the resource route.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Authenticated => "",
            Self::Public => "/public",
        }
    }

    /// Builds the route for `resource`, e.g. `/public/documents`.
    #[must_use]
    pub fn route(self, resource: &str) -> String {
        format!("{}/{}", self.prefix(), resource.trim_start_matches('/'))
    }
}

/// The kind of resource a request addresses.
///
/// Used to scope "not found" responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A domain
    Domain,
    /// A document or one of its versions
    Document,
    /// An uploaded asset
    Asset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_routes() {
        assert_eq!(Endpoint::Authenticated.route("domains"), "/domains");
        assert_eq!(
            Endpoint::Public.route("/documents/acme/a"),
            "/public/documents/acme/a"
        );
    }
}
