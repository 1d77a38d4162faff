//! Context Domain - Core types for the document SDK
//!
//! This crate defines the data model of the document service: wire
//! records for domains, documents and versions, listing filters, the
//! address/version parser and the API key type.
//! All types here are pure Rust with no I/O dependencies.

pub mod address;
pub mod api_key;
pub mod error;
pub mod records;
pub mod request;

pub use address::{DEFAULT_INITIAL_VERSION, DocumentAddress, VERSION_QUERY_KEY, VersionNumber};
pub use api_key::ApiKey;
pub use error::{DomainError, DomainResult};
pub use records::{
    AssetEnvelope, AssetRecord, DocumentEnvelope, DocumentFilter, DocumentRecord,
    DocumentSummary, DocumentType, DomainEnvelope, DomainFilter, DomainRecord, DomainStatus,
    DomainSummary, Metadata, Page, Reference, Timestamps, VersionFilter, VersionRecord,
    VersionSummary,
};
pub use request::{Endpoint, HttpMethod, ResourceKind};
