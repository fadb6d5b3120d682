//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use tokio_rusqlite::Connection;

use maya::api::{AppState, SharedState, app, reset_db};
use maya::core::AppConfig;

pub const REPLY_BODY: &str = r#"{
    "candidates": [{
        "content": {
            "role": "model",
            "parts": [{"text": "Hi! How can I help?"}]
        },
        "finishReason": "STOP"
    }]
}"#;

pub fn test_config(api_hostname: &str) -> AppConfig {
    AppConfig {
        db_path: String::from(":memory:"),
        gemini_api_hostname: api_hostname.to_string(),
        gemini_api_key: String::from("test-api-key"),
        gemini_model: String::from("gemini-1.5-flash"),
        temperature: 0.7,
        system_message: String::from("You are Maya."),
    }
}

/// Creates a test application router backed by an in-memory db with
/// the Gemini API pointed at `api_hostname`. The shared state is
/// returned too so tests can inspect conversations.
pub async fn test_app(api_hostname: &str) -> (Router, SharedState) {
    let db = Connection::open_in_memory()
        .await
        .expect("Failed to open in-memory db");
    reset_db(&db).await.expect("Failed to initialize db");

    let app_state =
        AppState::new(db, test_config(api_hostname)).expect("Failed to build app state");
    let shared_state = Arc::new(RwLock::new(app_state));
    (app(Arc::clone(&shared_state)), shared_state)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

/// Pull the `name=value` pair out of a `set-cookie` header so it can
/// be sent back on the next request.
pub fn session_cookie(response: &axum::response::Response) -> String {
    let set_cookie = response
        .headers()
        .get(http::header::SET_COOKIE)
        .expect("Missing set-cookie header")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}
