#![allow(dead_code)]

use axum_test::TestServer;
use axum_test::http::HeaderName;
use insurance_company_service::core::{AppState, encode_jwt};
use insurance_company_service::repositories::MemoryCollection;
use serde_json::{Value, json};
use std::sync::Arc;

pub const JWT_SECRET: &str = "test-secret-that-must-be-changed";

/// Creates an AppState for the tests
///
/// # Returns
/// The in-memory collection (to seed or inspect it) and the state built on top of it
pub fn create_test_state() -> (Arc<MemoryCollection>, Arc<AppState>) {
    let collection = Arc::new(MemoryCollection::new());
    let state = Arc::new(AppState::new(collection.clone(), JWT_SECRET.to_string()));
    (collection, state)
}

/// Creates a TestServer for the tests
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = insurance_company_service::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// TestServer over a fresh in-memory collection
pub fn create_server() -> TestServer {
    let (_, state) = create_test_state();
    create_test_server(state)
}

/// Valid JWT token for the test secret
pub fn create_test_jwt() -> String {
    encode_jwt("integration-tests", JWT_SECRET).expect("Failed to create JWT token")
}

pub fn authorization() -> (HeaderName, String) {
    (
        HeaderName::from_static("authorization"),
        format!("Bearer {}", create_test_jwt()),
    )
}

pub fn company_body(name: &str, email: &str) -> Value {
    json!({
        "insurer_custom_name": "132",
        "name": name,
        "email": email,
        "phones": "2341213123",
        "fax": "2341213123",
        "direction": "2341213123",
        "status": "Active",
        "business_line": ["2341213123"]
    })
}

/// Creates an insurance company through the API and returns the created record
pub async fn create_company(server: &TestServer, name: &str, email: &str) -> Value {
    let response = server
        .post("/insurance_company")
        .json(&company_body(name, email))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["data"].clone()
}
