//! Ad-copy tasks: scripts, help chat, free-form text, and the JSON analyses
//! (optimization, platform variations, audience insights, performance).

use narratix_core::prompts::{self, AdScriptBrief};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProviderError;
use crate::openai::{ChatMessage, ChatRequest, CompletionProvider, ResponseFormat, ResponseMessage};

/// Structured ad script with self-assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdScript {
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub tone_analysis: ToneAnalysis,
}

/// Scores between 0 and 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToneAnalysis {
    #[serde(default)]
    pub persuasiveness: f64,
    #[serde(default)]
    pub clarity: f64,
    #[serde(default)]
    pub engagement: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    #[serde(default)]
    pub performance_score: f64,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
}

/// Write a short ad script for a project. Returns [`prompts::EMPTY_SCRIPT_FALLBACK`]
/// when the model answers without text.
pub async fn generate_script(
    provider: &dyn CompletionProvider,
    prompt: &str,
    tone: &str,
    audience: &str,
) -> Result<String, ProviderError> {
    let mut request = ChatRequest::new(
        provider.default_model(),
        vec![
            ChatMessage::system(prompts::script_system_prompt(tone, audience)),
            ChatMessage::user(prompt),
        ],
    );
    request.temperature = Some(prompts::SCRIPT_TEMPERATURE);
    request.max_tokens = Some(prompts::SCRIPT_MAX_TOKENS);

    let message = provider.complete(request).await?.into_first_message()?;
    Ok(message
        .content
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| prompts::EMPTY_SCRIPT_FALLBACK.to_string()))
}

/// Answer a help-chat message as the NarratixAI assistant.
pub async fn chat_reply(
    provider: &dyn CompletionProvider,
    message: &str,
) -> Result<Option<String>, ProviderError> {
    let request = ChatRequest::new(
        provider.default_model(),
        vec![
            ChatMessage::system(prompts::CHAT_SYSTEM_PROMPT),
            ChatMessage::user(message),
        ],
    );
    Ok(provider.complete(request).await?.into_first_message()?.content)
}

/// Single-turn completion with caller options spread over the request.
///
/// Non-string prompts are sent as their JSON text.
pub async fn generate_text(
    provider: &dyn CompletionProvider,
    prompt: &Value,
    options: &Value,
) -> Result<ResponseMessage, ProviderError> {
    let content = match prompt {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let request = ChatRequest::new(provider.default_model(), vec![ChatMessage::user(content)])
        .with_options(options);
    provider.complete(request).await?.into_first_message()
}

pub async fn generate_ad_script(
    provider: &dyn CompletionProvider,
    brief: &AdScriptBrief<'_>,
) -> Result<AdScript, ProviderError> {
    let value = json_completion(
        provider,
        prompts::COPYWRITER_SYSTEM_PROMPT,
        prompts::ad_script_user_prompt(brief),
        None,
    )
    .await?;
    Ok(serde_json::from_value(value)?)
}

pub async fn analyze_performance(
    provider: &dyn CompletionProvider,
    script: &str,
) -> Result<PerformanceAnalysis, ProviderError> {
    let value = json_completion(
        provider,
        prompts::ANALYST_SYSTEM_PROMPT,
        prompts::performance_user_prompt(script),
        None,
    )
    .await?;
    Ok(serde_json::from_value(value)?)
}

/// Audience, engagement and tone suggestions for a piece of ad content.
pub async fn optimize_content(
    provider: &dyn CompletionProvider,
    content: &str,
) -> Result<Value, ProviderError> {
    json_completion(
        provider,
        prompts::OPTIMIZATION_SYSTEM_PROMPT,
        content.to_string(),
        Some(prompts::OPTIMIZATION_TEMPERATURE),
    )
    .await
}

/// One adapted script per platform, keyed by platform name.
pub async fn generate_variations(
    provider: &dyn CompletionProvider,
    base_script: &str,
    platforms: &[String],
) -> Result<Map<String, Value>, ProviderError> {
    let value = json_completion(
        provider,
        prompts::VARIATIONS_SYSTEM_PROMPT,
        prompts::variations_user_prompt(base_script, platforms),
        Some(prompts::VARIATIONS_TEMPERATURE),
    )
    .await?;
    Ok(serde_json::from_value(value)?)
}

pub async fn audience_insights(
    provider: &dyn CompletionProvider,
    demographics: &str,
    behavior: &str,
) -> Result<Value, ProviderError> {
    json_completion(
        provider,
        prompts::AUDIENCE_SYSTEM_PROMPT,
        prompts::audience_user_prompt(demographics, behavior),
        Some(prompts::AUDIENCE_TEMPERATURE),
    )
    .await
}

/// Run a JSON-mode completion and parse the answer. A missing answer parses as `{}`.
async fn json_completion(
    provider: &dyn CompletionProvider,
    system: &str,
    user: String,
    temperature: Option<f32>,
) -> Result<Value, ProviderError> {
    let mut request = ChatRequest::new(
        provider.default_model(),
        vec![ChatMessage::system(system), ChatMessage::user(user)],
    );
    request.response_format = Some(ResponseFormat::json_object());
    request.temperature = temperature;

    let message = provider.complete(request).await?.into_first_message()?;
    let raw = message.content.unwrap_or_else(|| "{}".to_string());
    Ok(serde_json::from_str(&raw)?)
}
