//! Resource accessors
//!
//! Read-only snapshots of server records. Getters never touch the network;
//! the async methods do, and every mutation hands back a fresh accessor
//! built from the server's answer instead of changing the snapshot.
//! Accessors are only constructed inside this crate.

mod document;
mod domain;
mod entry;
mod version;

pub use document::Document;
pub use domain::Domain;
pub use version::Version;
