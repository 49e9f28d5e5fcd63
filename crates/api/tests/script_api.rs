//! HTTP-level integration tests for project scripts and script generation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth, StubCompletions};
use serde_json::{json, Value};

/// Register a user, create a project, return `(token, project_id)`.
async fn user_with_project(test: &common::TestApp) -> (String, i64) {
    let token = common::access_token_for(test.app(), "writer").await;
    let response =
        post_json_auth(test.app(), "/api/projects", json!({ "name": "Campaign" }), &token).await;
    let project = body_json(response).await;
    (token, project["id"].as_i64().unwrap())
}

fn brief() -> Value {
    json!({ "prompt": "Launch our e-bike", "tone": "bold", "audience": "commuters" })
}

#[tokio::test]
async fn generate_stores_script_with_brief_metadata() {
    let test = common::build_test_app_with(
        StubCompletions::replying("Ride past the traffic."),
        Default::default(),
    );
    let (token, project_id) = user_with_project(&test).await;

    let uri = format!("/api/projects/{project_id}/scripts/generate");
    let response = post_json_auth(test.app(), &uri, brief(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["content"], "Ride past the traffic.");
    assert_eq!(json["projectId"], project_id);
    assert_eq!(json["metadata"], brief());

    let request = test.completions.last_request();
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.max_tokens, Some(500));
    assert!(request.messages[0].content.contains("bold"));
    assert!(request.messages[0].content.contains("commuters"));

    let listed = body_json(
        get_auth(test.app(), &format!("/api/projects/{project_id}/scripts"), &token).await,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_completion_uses_fallback_content() {
    let test = common::build_test_app_with(StubCompletions::empty(), Default::default());
    let (token, project_id) = user_with_project(&test).await;

    let uri = format!("/api/projects/{project_id}/scripts/generate");
    let json = body_json(post_json_auth(test.app(), &uri, brief(), &token).await).await;
    assert_eq!(json["content"], "Failed to generate script");
}

#[tokio::test]
async fn malformed_generate_payload_is_400_with_details() {
    let test = common::build_test_app();
    let (token, project_id) = user_with_project(&test).await;
    let uri = format!("/api/projects/{project_id}/scripts/generate");

    let response = post_json_auth(test.app(), &uri, json!({ "prompt": "x", "tone": 3 }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"].is_string());

    let response = post_json_auth(
        test.app(),
        &uri,
        json!({ "prompt": "", "tone": "calm", "audience": "all" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["prompt"].is_array());
    assert!(test.completions.requests().is_empty());
}

#[tokio::test]
async fn manual_script_create_and_list() {
    let test = common::build_test_app();
    let (token, project_id) = user_with_project(&test).await;
    let uri = format!("/api/projects/{project_id}/scripts");

    let response = post_json_auth(
        test.app(),
        &uri,
        json!({ "content": "Hand-written copy", "metadata": { "draft": true } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = body_json(get_auth(test.app(), &uri, &token).await).await;
    assert_eq!(listed[0]["content"], "Hand-written copy");
    assert_eq!(listed[0]["metadata"]["draft"], true);
}

#[tokio::test]
async fn other_users_project_is_404() {
    let test = common::build_test_app();
    let (_owner, project_id) = user_with_project(&test).await;
    let intruder = common::access_token_for(test.app(), "intruder").await;

    let uri = format!("/api/projects/{project_id}/scripts");
    let response = get_auth(test.app(), &uri, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let generate = format!("{uri}/generate");
    let response = post_json_auth(test.app(), &generate, brief(), &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(test.completions.requests().is_empty());
}

#[tokio::test]
async fn missing_project_is_404() {
    let test = common::build_test_app();
    let token = common::access_token_for(test.app(), "writer").await;

    let response = get_auth(test.app(), "/api/projects/999/scripts", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_integer_project_id_is_400() {
    let test = common::build_test_app();
    let token = common::access_token_for(test.app(), "writer").await;

    let response = get_auth(test.app(), "/api/projects/abc/scripts", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    let message = json["error"].as_str().expect("error should be a string");
    assert!(message.contains("abc"), "unexpected message: {message}");
}

#[tokio::test]
async fn non_integer_project_id_on_create_is_json_400() {
    let test = common::build_test_app();
    let token = common::access_token_for(test.app(), "writer").await;

    let response = post_json_auth(
        test.app(),
        "/api/projects/first/scripts",
        json!({ "content": "Opening line" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn scripts_require_auth() {
    let test = common::build_test_app();
    let response = get(test.app(), "/api/projects/1/scripts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
