//! In-memory transport and wire fixtures for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use context_domain::HttpMethod;
use serde_json::{Value, json};

use crate::api::ContextApi;
use crate::config::{ConfigOverrides, ContextConfig};
use crate::error::ContextError;
use crate::ports::{ApiRequest, ApiResponse, ApiTransport};
use crate::result::ContextResult;

/// Transport that answers from a route table and records every request.
///
/// Unknown routes answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(HttpMethod, String), (u16, Value)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, method: HttpMethod, path: &str, status: u16, body: Value) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ContextResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let route = self
            .routes
            .lock()
            .unwrap()
            .get(&(request.method, request.path.clone()))
            .cloned();
        match route {
            Some((status, body)) if status < 400 => Ok(ApiResponse::new(status, body)),
            Some((status, body)) => Err(ContextError::from_response(
                status,
                body.to_string().as_bytes(),
                request.resource,
            )),
            None => Err(ContextError::from_response(
                404,
                br#"{"message":"no such route"}"#,
                request.resource,
            )),
        }
    }
}

pub fn api(transport: &Arc<MockTransport>) -> ContextApi {
    let config = ContextConfig::new("test-key", ConfigOverrides::new()).unwrap();
    ContextApi::new(Arc::new(config), transport.clone())
}

pub fn domain_json(name: &str) -> Value {
    json!({
        "_id": format!("domain-{name}"),
        "name": name,
        "nameHash": format!("hash-{name}"),
        "status": "registered",
        "owner": "0xowner",
        "documents": [],
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-02T10:00:00Z"
    })
}

pub fn document_json(domain: &str, path: &str, version: &str, document_type: &str) -> Value {
    let parts: Vec<u32> = version.split('.').map(|p| p.parse().unwrap()).collect();
    json!({
        "_id": format!("doc-{domain}-{path}"),
        "path": path,
        "domainId": {"_id": format!("domain-{domain}"), "name": domain},
        "type": document_type,
        "isTemplate": false,
        "versionNumber": version,
        "version": {
            "_id": format!("ver-{domain}-{path}-{version}"),
            "data": {"title": path},
            "metadata": {"lang": "en"},
            "templates": [],
            "txId": "0xtx",
            "major": parts[0],
            "minor": parts[1],
            "patch": parts[2],
            "versionNumber": version,
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        },
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-03T10:00:00Z"
    })
}
