use crate::helpers;

use helpers::stubs::{StubScriptRepository, StubSpeechRepository};
use hyper::StatusCode;
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
async fn it_should_return_ok_for_health_check() {
    let app = helpers::spawn_app(
        Arc::new(StubScriptRepository::returning("hi")),
        Arc::new(StubSpeechRepository::returning(b"mp3")),
    )
    .await;

    let response = app.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
#[serial]
async fn it_should_report_not_ready_without_credentials() {
    std::env::remove_var("GOOGLE_APPLICATION_CREDENTIALS");

    let app = helpers::spawn_app(
        Arc::new(StubScriptRepository::returning("hi")),
        Arc::new(StubSpeechRepository::returning(b"mp3")),
    )
    .await;

    let response = app.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json_object();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(
        body.get("credentials").and_then(|v| v.as_str()),
        Some("missing")
    );
}

#[tokio::test]
#[serial]
async fn it_should_report_ready_when_the_credentials_file_exists() {
    let path = std::env::temp_dir().join("insightcast-e2e-credentials.json");
    std::fs::write(&path, "{}").unwrap();
    std::env::set_var("GOOGLE_APPLICATION_CREDENTIALS", &path);

    let app = helpers::spawn_app(
        Arc::new(StubScriptRepository::returning("hi")),
        Arc::new(StubSpeechRepository::returning(b"mp3")),
    )
    .await;

    let response = app.client.get("/health/ready").await.unwrap();

    std::env::remove_var("GOOGLE_APPLICATION_CREDENTIALS");
    std::fs::remove_file(&path).ok();

    response.assert_status(StatusCode::OK);

    let body = response.json_object();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let app = helpers::spawn_app(
        Arc::new(StubScriptRepository::returning("hi")),
        Arc::new(StubSpeechRepository::returning(b"mp3")),
    )
    .await;

    let response = app.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = app
        .client
        .post("/podcast", &serde_json::json!({"insights": {}}))
        .await
        .unwrap();
    response.assert_header_exists("x-request-id");
}
