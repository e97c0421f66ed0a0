//! Shared setup for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_MODEL: &str = "gemini-test";
pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

/// Builds the application router against a mocked Gemini endpoint.
pub async fn test_app(mock_server: &MockServer) -> Router {
    test_app_with(mock_server, &[]).await
}

/// Like [`test_app`], with some `(flag, value)` arguments overridden.
pub async fn test_app_with(mock_server: &MockServer, overrides: &[(&str, &str)]) -> Router {
    let uri = mock_server.uri();
    let defaults = [
        ("--gemini-api-key", "test-key"),
        ("--gemini-model", TEST_MODEL),
        ("--gemini-base-url", uri.as_str()),
        ("--metrics-enabled", "false"),
        ("--allowed-origins", "*"),
        ("--server-root-path", ""),
    ];

    let mut argv = vec!["nutrilens-api"];
    for (flag, value) in defaults {
        if !overrides.iter().any(|(name, _)| *name == flag) {
            argv.extend([flag, value]);
        }
    }
    for (flag, value) in overrides {
        argv.extend([*flag, *value]);
    }
    let args = Args::try_parse_from(argv).expect("valid test args");

    let app_state = state(Arc::new(args)).await.expect("state");
    router(app_state).expect("router")
}

/// Mounts a Gemini reply whose single text part is `text`.
pub async fn mount_model_text(mock_server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })))
        .expect(1)
        .mount(mock_server)
        .await;
}

/// Mounts a Gemini endpoint that must never be reached.
pub async fn mount_no_call(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(mock_server)
        .await;
}
