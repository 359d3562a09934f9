//! Vendor waitlist integration tests.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{error_fields, user_body, vendor_body, TestHarness};

#[tokio::test]
async fn create_entry_without_link() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/vendor-waitlist")
        .json(&vendor_body())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["entry"]["role"], "interior");
    assert_eq!(body["entry"]["portfolioLink"], Value::Null);
    assert!(body["entry"]["id"].is_string());
    assert!(body["entry"]["createdAt"].is_string());
}

#[tokio::test]
async fn empty_link_is_stored_as_no_link() {
    let harness = TestHarness::new();

    let mut body = vendor_body();
    body["portfolioLink"] = json!("");

    let response = harness.server.post("/api/vendor-waitlist").json(&body).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["entry"]["portfolioLink"], Value::Null);
}

#[tokio::test]
async fn invalid_link_is_rejected() {
    let harness = TestHarness::new();

    let mut body = vendor_body();
    body["portfolioLink"] = json!("not-a-url");

    let response = harness.server.post("/api/vendor-waitlist").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_fields(&body), ["portfolioLink"]);
    assert_eq!(body["errors"][0]["message"], "Please enter a valid URL");
}

#[tokio::test]
async fn valid_link_is_stored_verbatim() {
    let harness = TestHarness::new();

    let mut body = vendor_body();
    body["portfolioLink"] = json!("https://example.com");

    let created: Value = harness
        .server
        .post("/api/vendor-waitlist")
        .json(&body)
        .await
        .json();
    assert_eq!(created["entry"]["portfolioLink"], "https://example.com");

    let listed: Value = harness.server.get("/api/vendor-waitlist").await.json();
    assert_eq!(listed["entries"][0]["portfolioLink"], "https://example.com");
}

#[tokio::test]
async fn experience_boundary() {
    let harness = TestHarness::new();

    let mut body = vendor_body();
    body["experience"] = json!("a".repeat(19));
    let response = harness.server.post("/api/vendor-waitlist").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let rejected: Value = response.json();
    assert_eq!(error_fields(&rejected), ["experience"]);

    body["experience"] = json!("a".repeat(20));
    harness
        .server
        .post("/api/vendor-waitlist")
        .json(&body)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn every_violation_is_listed() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/vendor-waitlist")
        .json(&json!({
            "name": "",
            "contact": "ravi@",
            "role": "plumber",
            "portfolioLink": "ravi dot com",
            "experience": "Too short",
            "location": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        error_fields(&body),
        ["name", "contact", "role", "portfolioLink", "experience", "location"]
    );
}

#[tokio::test]
async fn user_body_is_not_a_vendor_body() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/vendor-waitlist")
        .json(&user_body())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_fields(&body), ["role", "experience"]);
}

#[tokio::test]
async fn vendor_and_user_lists_are_separate() {
    let harness = TestHarness::new();

    harness
        .server
        .post("/api/vendor-waitlist")
        .json(&vendor_body())
        .await
        .assert_status_ok();

    let users: Value = harness.server.get("/api/user-waitlist").await.json();
    let vendors: Value = harness.server.get("/api/vendor-waitlist").await.json();
    assert_eq!(users["entries"], json!([]));
    assert_eq!(vendors["entries"].as_array().unwrap().len(), 1);
}
