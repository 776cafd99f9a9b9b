use super::mocks::MockLlmClient;
use axum::{Router, body::Body, http::Request, response::Response};
use judgment_relay::{
    config::{LlmConfig, ServerConfig},
    judgment::Judge,
    llm::LlmClient,
    server::{AppState, router},
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-test";

/// LLM config pointing at a local mock upstream.
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        model: TEST_MODEL.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
    }
}

/// Path the Gemini client posts to for the test model.
pub fn generate_path() -> String {
    format!("/models/{}:generateContent", TEST_MODEL)
}

pub fn create_app(llm: Arc<dyn LlmClient>) -> Router {
    let state = AppState {
        judge: Arc::new(Judge::new(llm)),
    };
    router(state, &ServerConfig::default())
}

pub fn create_test_app(mock: &MockLlmClient) -> Router {
    create_app(Arc::new(mock.clone()))
}

pub fn judgment_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/get-judgment")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Upstream success payload carrying a single candidate.
pub fn candidate_payload(text: &str) -> Value {
    serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }
        ]
    })
}
