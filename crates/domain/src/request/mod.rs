//! Request-shaping types shared by the transport port and its adapters.

mod endpoint;
mod method;

pub use endpoint::{Endpoint, ResourceKind};
pub use method::HttpMethod;
