//! End-to-end tests for the image analysis endpoint.
//!
//! The Gemini API is replaced by a wiremock server so the full pipeline
//! (request gate, model call, reply normalization, error mapping) runs.

mod common;

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use common::{GENERATE_PATH, mount_model_text, mount_no_call, test_app};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn valid_body() -> Value {
    json!({
        "imageData": "aGVsbG8=",
        "mimeType": "image/jpeg",
        "languageCode": "en"
    })
}

#[tokio::test]
async fn test_fenced_reply_is_returned_as_object() {
    let mock_server = MockServer::start().await;
    mount_model_text(
        &mock_server,
        "```json\n{\"dish_name\":\"Apple\",\"weight\":150}\n```",
    )
    .await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server.post("/analyzeImage").json(&valid_body()).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"dish_name": "Apple", "weight": 150})
    );
}

#[tokio::test]
async fn test_prose_wrapped_reply_is_recovered() {
    let mock_server = MockServer::start().await;
    mount_model_text(
        &mock_server,
        "Sure! Here is the result: {\"dish_name\":\"Soup\",\"weight\":300} Hope that helps!",
    )
    .await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server
        .post("/analyzeImage")
        .json(&json!({ "data": valid_body() }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"dish_name": "Soup", "weight": 300})
    );
}

#[tokio::test]
async fn test_language_code_reaches_prompt() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains(r#"language code \"fr\""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"dish_name\":\"Ratatouille\"}" }] } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server
        .post("/analyzeImage")
        .json(&json!({
            "imageBase64": "aGVsbG8=",
            "mimeType": "image/png",
            "languageCode": "fr"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["dish_name"], "Ratatouille");
}

#[tokio::test]
async fn test_missing_fields_are_rejected_without_upstream_call() {
    let mock_server = MockServer::start().await;
    mount_no_call(&mock_server).await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    for body in [
        json!({}),
        json!({ "imageData": "aGVsbG8=" }),
        json!({ "mimeType": "image/png" }),
        json!({ "data": { "imageData": "", "mimeType": "image/png" } }),
    ] {
        let response = server.post("/analyzeImage").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Missing imageData or mimeType" })
        );
    }
}

#[tokio::test]
async fn test_non_json_body_is_rejected_as_missing_fields() {
    let mock_server = MockServer::start().await;
    mount_no_call(&mock_server).await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server.post("/analyzeImage").text("imageData=abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Missing imageData or mimeType" })
    );
}

#[tokio::test]
async fn test_non_post_methods_are_rejected() {
    let mock_server = MockServer::start().await;
    mount_no_call(&mock_server).await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server.method(method.clone(), "/analyzeImage").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Method Not Allowed" }),
            "method: {}",
            method
        );
    }
}

#[tokio::test]
async fn test_garbage_reply_returns_raw_text() {
    let mock_server = MockServer::start().await;
    let raw = "I am not able to identify this dish.";
    mount_model_text(&mock_server, raw).await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server.post("/analyzeImage").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "error": "Internal Server Error",
            "details": "Failed to parse JSON response from AI.",
            "raw_response": raw
        })
    );
}

#[tokio::test]
async fn test_reply_without_text_is_invalid_structure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [] } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server.post("/analyzeImage").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "error": "Internal Server Error",
            "details": "Received invalid response structure from AI."
        })
    );
}

#[tokio::test]
async fn test_upstream_failure_is_reported_without_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&mock_server)
        .await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server.post("/analyzeImage").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Internal Server Error");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("429"), "details: {details}");
    assert!(!details.contains("test-key"));
    assert!(body.get("raw_response").is_none());
}

#[tokio::test]
async fn test_model_key_order_is_kept() {
    let mock_server = MockServer::start().await;
    mount_model_text(
        &mock_server,
        "{\"weight\":150,\"dish_name\":\"Apple\",\"calories\":78}",
    )
    .await;
    let server = TestServer::new(test_app(&mock_server).await).unwrap();

    let response = server.post("/analyzeImage").json(&valid_body()).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.text(),
        "{\"weight\":150,\"dish_name\":\"Apple\",\"calories\":78}"
    );
}
