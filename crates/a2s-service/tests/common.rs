//! Common test utilities for waitlist integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};

use a2s_service::{create_router, AppState, ServiceConfig};
use a2s_store::{MemoryStore, Store};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The store behind the server, for direct inspection.
    pub store: Arc<MemoryStore>,
}

impl TestHarness {
    /// Create a new test harness with an empty store.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let server = server_with_store(store.clone());

        Self { server, store }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a test server around any store implementation.
pub fn server_with_store(store: Arc<dyn Store>) -> TestServer {
    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        ..ServiceConfig::default()
    };

    let state = AppState::new(store, config);
    let router: Router = create_router(state);

    TestServer::new(router).expect("Failed to create test server")
}

/// The example submission from the landing page copy.
pub fn user_body() -> Value {
    json!({
        "name": "Asha",
        "contact": "asha@example.com",
        "preferredPlan": "premium",
        "location": "Pune",
        "reason": "Looking for a smarter way to manage my apartment."
    })
}

/// A valid vendor submission without a portfolio link.
pub fn vendor_body() -> Value {
    json!({
        "name": "Ravi Kulkarni",
        "contact": "ravi@example.com",
        "role": "interior",
        "experience": "Twelve years designing compact city apartments.",
        "location": "Mumbai"
    })
}

/// Field names from a 400 body's `errors` list.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|issue| issue["path"][0].as_str().map(str::to_string))
        .collect()
}
