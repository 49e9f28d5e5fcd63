//! OpenAI chat completions client.
//!
//! Wraps `POST {base_url}/chat/completions` using [`reqwest`]. Handlers talk
//! to the [`CompletionProvider`] trait so tests can substitute a canned
//! backend without an HTTP server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProviderError;

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const PROVIDER_NAME: &str = "OpenAI";

/// A message sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// `response_format` request field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".into(),
        }
    }
}

/// Body of a chat completion request.
///
/// `extra` carries caller-supplied options verbatim (e.g. `top_p`, `n`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    /// Spread caller options over the request; caller values win.
    ///
    /// A string `model` replaces the model, `messages` is ignored, and every
    /// other key is forwarded untouched. Typed fields named by an option are
    /// cleared so the key is serialized exactly once.
    pub fn with_options(mut self, options: &Value) -> Self {
        let Some(map) = options.as_object() else {
            return self;
        };
        for (key, value) in map {
            match key.as_str() {
                "model" => {
                    if let Some(model) = value.as_str() {
                        self.model = model.to_string();
                    }
                }
                "messages" => {}
                other => {
                    match other {
                        "temperature" => self.temperature = None,
                        "max_tokens" => self.max_tokens = None,
                        "response_format" => self.response_format = None,
                        _ => {}
                    }
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
        self
    }
}

/// A message returned by the model. Unknown fields (tool calls, refusals)
/// are kept so the message can be relayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Chat completion response (only the fields the backend reads).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletion {
    /// The first choice's message.
    pub fn into_first_message(self) -> Result<ResponseMessage, ProviderError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(ProviderError::EmptyCompletion)
    }
}

/// Anything that can answer a chat completion request.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Model name used when a request does not pick one.
    fn default_model(&self) -> &str;

    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError>;
}

/// HTTP client for the OpenAI API.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiClient {
    /// * `base_url` - API root without trailing slash, e.g. [`DEFAULT_BASE_URL`].
    /// * `api_key` - `None` makes every call fail with [`ProviderError::MissingApiKey`].
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key, model)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (shared
    /// connection pool with the vendor clients).
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    fn default_model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(PROVIDER_NAME))?;

        tracing::debug!(model = %request.model, messages = request.messages.len(), "Sending chat completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let response = ensure_success(PROVIDER_NAME, response).await?;
        Ok(response.json::<ChatCompletion>().await?)
    }
}

/// Return the response unchanged on a 2xx status, or a
/// [`ProviderError::Api`] with status, reason and body text otherwise.
pub(crate) async fn ensure_success(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::warn!(provider, status = status.as_u16(), "Upstream API returned an error");
        return Err(ProviderError::Api {
            provider,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn completion_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    #[test]
    fn options_override_model_and_pass_through() {
        let request = ChatRequest::new("gpt-4o", vec![ChatMessage::user("hi")])
            .with_options(&json!({ "model": "gpt-4o-mini", "top_p": 0.5, "messages": [] }));
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["top_p"], 0.5);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn option_replaces_typed_field_once() {
        let mut request = ChatRequest::new("gpt-4o", vec![]);
        request.temperature = Some(0.7);
        let body = serde_json::to_value(request.with_options(&json!({ "temperature": 1.2 }))).unwrap();
        assert_eq!(body["temperature"], 1.2);
    }

    #[test]
    fn typed_fields_are_omitted_when_unset() {
        let body = serde_json::to_value(ChatRequest::new("gpt-4o", vec![])).unwrap();
        assert!(body.get("temperature").is_none());
        assert!(body.get("response_format").is_none());
    }

    #[tokio::test]
    async fn complete_posts_with_bearer_auth() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .body_contains("\"model\":\"gpt-4o\"");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(completion_body("Hello there"));
            })
            .await;

        let client = OpenAiClient::new(server.base_url(), Some("sk-test".into()), "gpt-4o".into());
        let completion = client
            .complete(ChatRequest::new("gpt-4o", vec![ChatMessage::user("Hi")]))
            .await
            .unwrap();

        mock.assert_async().await;
        let message = completion.into_first_message().unwrap();
        assert_eq!(message.content.as_deref(), Some("Hello there"));
    }

    #[tokio::test]
    async fn rate_limit_surfaces_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("slow down");
            })
            .await;

        let client = OpenAiClient::new(server.base_url(), Some("sk-test".into()), "gpt-4o".into());
        let result = client.complete(ChatRequest::new("gpt-4o", vec![])).await;

        assert_matches!(result, Err(ProviderError::Api { status: 429, ref body, .. }) if body == "slow down");
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let client = OpenAiClient::new(DEFAULT_BASE_URL.into(), None, "gpt-4o".into());
        let result = client.complete(ChatRequest::new("gpt-4o", vec![])).await;
        assert_matches!(result, Err(ProviderError::MissingApiKey("OpenAI")));
        assert!(!client.is_configured());
    }

    #[test]
    fn empty_choices_is_an_error() {
        let completion: ChatCompletion = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_matches!(
            completion.into_first_message(),
            Err(ProviderError::EmptyCompletion)
        );
    }
}
