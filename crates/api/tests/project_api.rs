//! HTTP-level integration tests for projects and templates.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use narratix_core::templates::builtin_templates;
use narratix_store::repositories::TemplateRepo;
use serde_json::json;

#[tokio::test]
async fn projects_require_auth() {
    let test = common::build_test_app();

    let response = get(test.app(), "/api/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(test.app(), "/api/projects", json!({ "name": "Launch" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn fresh_store_has_no_projects() {
    let test = common::build_test_app();
    let token = common::access_token_for(test.app(), "ada").await;

    let response = get_auth(test.app(), "/api/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_project_returns_201_with_id() {
    let test = common::build_test_app();
    let registered = common::register_user(test.app(), "ada").await;
    let token = registered["accessToken"].as_str().unwrap();

    let response = post_json_auth(
        test.app(),
        "/api/projects",
        json!({ "name": "Spring launch", "description": "Sneakers" }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Spring launch");
    assert_eq!(json["description"], "Sneakers");
    assert_eq!(json["userId"], registered["user"]["id"]);
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn blank_project_name_is_rejected() {
    let test = common::build_test_app();
    let token = common::access_token_for(test.app(), "ada").await;

    let response = post_json_auth(test.app(), "/api/projects", json!({ "name": "   " }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["details"]["name"][0], "must not be blank");
}

#[tokio::test]
async fn overlong_project_name_is_rejected() {
    let test = common::build_test_app();
    let token = common::access_token_for(test.app(), "ada").await;

    let name = "x".repeat(201);
    let response = post_json_auth(test.app(), "/api/projects", json!({ "name": name }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn users_only_see_their_own_projects() {
    let test = common::build_test_app();
    let ada = common::access_token_for(test.app(), "ada").await;
    let grace = common::access_token_for(test.app(), "grace").await;

    post_json_auth(test.app(), "/api/projects", json!({ "name": "Ada's" }), &ada).await;
    post_json_auth(test.app(), "/api/projects", json!({ "name": "Grace's" }), &grace).await;

    let json = body_json(get_auth(test.app(), "/api/projects", &ada).await).await;
    let names: Vec<_> = json.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
    assert_eq!(names, vec![json!("Ada's")]);
}

#[tokio::test]
async fn templates_list_full_catalog() {
    let test = common::build_test_app();
    let seeded = TemplateRepo::seed(&test.store, &builtin_templates()).await.unwrap();
    let token = common::access_token_for(test.app(), "ada").await;

    let response = get_auth(test.app(), "/api/templates", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), seeded);
    assert!(json[0]["thumbnailUrl"].is_string());
}

#[tokio::test]
async fn templates_require_auth() {
    let test = common::build_test_app();
    let response = get(test.app(), "/api/templates").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
