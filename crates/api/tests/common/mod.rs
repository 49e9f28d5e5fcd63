#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use narratix_api::auth::jwt::{JwtConfig, DEFAULT_ISSUER};
use narratix_api::config::{AiConfig, ServerConfig};
use narratix_api::router::build_app_router;
use narratix_api::state::AppState;
use narratix_core::vendor::Vendor;
use narratix_providers::openai::{
    ChatChoice, ChatCompletion, ChatRequest, CompletionProvider, ResponseMessage,
};
use narratix_providers::vendor::VendorSettings;
use narratix_providers::{ProviderError, VendorRegistry};
use narratix_store::StoreHandle;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and no provider keys.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_templates: false,
        jwt: JwtConfig {
            secret: "narratix-integration-secret".to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
        ai: AiConfig {
            openai_api_key: None,
            openai_base_url: "http://127.0.0.1:9".to_string(),
            openai_model: "gpt-4o".to_string(),
            vendors: HashMap::new(),
        },
    }
}

// ---------------------------------------------------------------------------
// Completion stub
// ---------------------------------------------------------------------------

/// Answers every completion with a canned reply, or fails with an upstream
/// status, and records what it was asked.
pub struct StubCompletions {
    content: Option<String>,
    fail_status: Option<u16>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl StubCompletions {
    pub fn replying(content: &str) -> Arc<Self> {
        Arc::new(Self {
            content: Some(content.to_string()),
            fail_status: None,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            content: None,
            fail_status: None,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            content: None,
            fail_status: Some(status),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ChatRequest {
        self.requests().pop().expect("no completion was requested")
    }
}

#[async_trait]
impl CompletionProvider for StubCompletions {
    fn default_model(&self) -> &str {
        "gpt-4o"
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        self.seen.lock().unwrap().push(request);
        if let Some(status) = self.fail_status {
            return Err(ProviderError::Api {
                provider: "OpenAI",
                status,
                reason: "stubbed failure".to_string(),
                body: "{}".to_string(),
            });
        }
        Ok(ChatCompletion {
            id: Some("chatcmpl-test".to_string()),
            model: Some("gpt-4o".to_string()),
            choices: vec![ChatChoice {
                index: 0,
                message: ResponseMessage {
                    role: "assistant".to_string(),
                    content: self.content.clone(),
                    extra: Map::new(),
                },
                finish_reason: Some("stop".to_string()),
            }],
        })
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Everything a test needs: the router plus handles on its shared state.
pub struct TestApp {
    pub router: Router,
    pub store: StoreHandle,
    pub completions: Arc<StubCompletions>,
}

impl TestApp {
    /// A fresh clone of the router for one request.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router (same middleware stack as production)
/// over a fresh store, a replying completion stub and unconfigured vendors.
pub fn build_test_app() -> TestApp {
    build_test_app_with(StubCompletions::replying("Stub reply"), HashMap::new())
}

pub fn build_test_app_with(
    completions: Arc<StubCompletions>,
    vendors: HashMap<Vendor, VendorSettings>,
) -> TestApp {
    let config = test_config();
    let store = narratix_store::create_store();

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
        completions: completions.clone(),
        vendors: Arc::new(VendorRegistry::new(reqwest::Client::new(), &vendors)),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        completions,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register `username` through the API and return the auth response JSON.
pub async fn register_user(app: Router, username: &str) -> Value {
    let body = json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/register", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// Register `username` and return only its access token.
pub async fn access_token_for(app: Router, username: &str) -> String {
    let json = register_user(app, username).await;
    json["accessToken"].as_str().unwrap().to_string()
}
