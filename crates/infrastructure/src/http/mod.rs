//! HTTP infrastructure utilities.
//!
//! This module provides:
//! - Body building for JSON and multipart asset uploads

mod body_builder;

pub use body_builder::{BODY_FIELD, BuiltBody, FILE_FIELD, build_body};
