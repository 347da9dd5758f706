//! Classified error responses observed over the wire

mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::json;
use uuid::Uuid;

async fn start() -> TestServer {
    TestServer::start(ConfigBuilder::new().build()).await.unwrap()
}

#[tokio::test]
async fn missing_contact_yields_not_found_body() {
    let server = start().await;
    let id = Uuid::new_v4();

    let resp = server
        .client()
        .get(server.url(&format!("/api/contacts/{id}")))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains(&id.to_string()));
    assert!(body["stackTrace"].is_string());
}

// A 404 must produce exactly one body. The classification is a single
// exhaustive match, so no later kind can write a second body; this pins
// that down by requiring the response to be one well-formed JSON document.
#[tokio::test]
async fn not_found_writes_exactly_one_body() {
    let server = start().await;

    let resp = server
        .client()
        .delete(server.url(&format!("/api/contacts/{}", Uuid::new_v4())))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let raw = resp.text().await.unwrap();
    let body: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body["title"], "Not Found");
}

#[tokio::test]
async fn invalid_contact_payload_yields_validation_body() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/api/contacts"))
        .json(&json!({"name": "Ada"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Validation Failed");
    assert_eq!(body["message"], "name, email and phone are all mandatory");
}

#[tokio::test]
async fn update_with_missing_fields_fails_before_store_lookup() {
    let server = start().await;

    let resp = server
        .client()
        .put(server.url(&format!("/api/contacts/{}", Uuid::new_v4())))
        .json(&json!({"email": "ada@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Validation Failed");
}

#[tokio::test]
async fn bad_store_url_fails_startup() {
    let config = ConfigBuilder::new()
        .with_store_url("mongodb://localhost:27017/rolodex")
        .build();

    let err = TestServer::start(config).await.unwrap_err();
    assert!(err.to_string().contains("unsupported store URL scheme"));
}
