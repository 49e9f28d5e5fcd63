//! HTTP-level integration tests for the help chat.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, StubCompletions};
use narratix_core::prompts::CHAT_SYSTEM_PROMPT;
use serde_json::json;

#[tokio::test]
async fn chat_returns_assistant_message() {
    let test = common::build_test_app_with(
        StubCompletions::replying("NarratixAI writes ad scripts."),
        Default::default(),
    );

    let response = post_json(test.app(), "/api/chat", json!({ "message": "What can you do?" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "NarratixAI writes ad scripts." })
    );

    let request = test.completions.last_request();
    assert_eq!(request.messages[0].content, CHAT_SYSTEM_PROMPT);
    assert_eq!(request.messages[1].content, "What can you do?");
}

#[tokio::test]
async fn chat_needs_no_token() {
    let test = common::build_test_app();
    let response = post_json(test.app(), "/api/chat", json!({ "message": "hi" })).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn blank_chat_message_is_400() {
    let test = common::build_test_app();
    let response = post_json(test.app(), "/api/chat", json!({ "message": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test.completions.requests().is_empty());
}

#[tokio::test]
async fn upstream_rate_limit_passes_through() {
    let test = common::build_test_app_with(StubCompletions::failing(429), Default::default());
    let response = post_json(test.app(), "/api/chat", json!({ "message": "hi" })).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let json = body_json(response).await;
    assert_eq!(json["code"], "RATE_LIMITED");
    assert_eq!(
        json["error"],
        "OpenAI API rate limit exceeded. Please try again in a few minutes."
    );
}
