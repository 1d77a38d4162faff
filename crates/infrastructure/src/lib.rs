//! Context Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod http;

pub use adapters::ReqwestTransport;
pub use http::{BuiltBody, build_body};
