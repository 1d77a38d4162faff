//! Shared fixtures for the SDK integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use context_sdk::{ConfigOverrides, Context};
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

pub const API_KEY: &str = "integration-key";

pub fn context(server: &MockServer) -> Context {
    context_with(server, ConfigOverrides::new())
}

pub fn context_with(server: &MockServer, overrides: ConfigOverrides) -> Context {
    Context::new(API_KEY, overrides.with_url(server.uri())).unwrap()
}

pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn document_envelope(domain: &str, path: &str, version: &str, kind: &str) -> Value {
    json!({"document": document_json(domain, path, version, kind)})
}

pub fn domain_json(name: &str) -> Value {
    json!({
        "_id": format!("domain-{name}"),
        "name": name,
        "nameHash": format!("hash-{name}"),
        "status": "verified",
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
            "templates": [],
            "major": parts[0],
            "minor": parts[1],
            "patch": parts[2],
            "versionNumber": version
        },
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-03T10:00:00Z"
    })
}
