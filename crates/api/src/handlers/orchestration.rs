//! AI orchestration: the `/ai/generate` dispatcher and the text and speech
//! services it routes to.
//!
//! All responses use the `{ success, data | error }` envelope.

use axum::extract::State;
use axum::Json;
use narratix_core::service::{
    is_present, ServiceType, INVALID_TYPE_MESSAGE, MISSING_FIELDS_MESSAGE,
};
use narratix_providers::copywriter;
use narratix_providers::speech::{self, SpeechResult};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::{ServiceError, ServiceResult};
use crate::extract::ServiceJson;
use crate::response::ServiceResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub service_type: Option<Value>,
    pub input: Option<Value>,
    #[serde(default)]
    pub options: Value,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub prompt: Option<Value>,
    #[serde(default)]
    pub options: Value,
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Value,
    pub voice: Option<String>,
}

/// POST /api/ai/generate
pub async fn generate(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<GenerateRequest>,
) -> ServiceResult<Json<ServiceResponse<Value>>> {
    if !is_present(input.service_type.as_ref()) || !is_present(input.input.as_ref()) {
        return Err(ServiceError::bad_request(MISSING_FIELDS_MESSAGE));
    }

    let service: ServiceType = input
        .service_type
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .parse()
        .map_err(|_| ServiceError::bad_request(INVALID_TYPE_MESSAGE))?;
    let payload = input.input.unwrap_or(Value::Null);

    tracing::info!(service = %service, "Dispatching AI request");

    let data = dispatch(&state, service, payload, input.options).await?;
    Ok(Json(ServiceResponse::ok(data)))
}

async fn dispatch(
    state: &AppState,
    service: ServiceType,
    payload: Value,
    options: Value,
) -> ServiceResult<Value> {
    match service {
        ServiceType::Text => {
            let message =
                copywriter::generate_text(state.completions.as_ref(), &payload, &options).await?;
            Ok(to_value(message)?)
        }
        ServiceType::Speech => Ok(to_value(speech_with_options(payload, &options))?),
        ServiceType::Optimization => {
            let content = match &payload {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Ok(copywriter::optimize_content(state.completions.as_ref(), &content).await?)
        }
        ServiceType::Avatar | ServiceType::Video => {
            Ok(json!({ "message": service.placeholder_message() }))
        }
    }
}

/// Speech request as `{ text: input, ...options }`: option keys win.
fn speech_with_options(input: Value, options: &Value) -> SpeechResult {
    let mut merged = Map::new();
    merged.insert("text".into(), input);
    if let Value::Object(opts) = options {
        merged.extend(opts.clone());
    }

    let voice = merged
        .get("voice")
        .and_then(Value::as_str)
        .map(str::to_string);
    let text = merged.remove("text").unwrap_or(Value::Null);
    speech::synthesize(text, voice.as_deref())
}

/// POST /api/ai/text/generate
pub async fn generate_text(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<TextRequest>,
) -> ServiceResult<Json<ServiceResponse<Value>>> {
    let prompt = input
        .prompt
        .filter(|p| is_present(Some(p)))
        .ok_or_else(|| ServiceError::bad_request("Missing required field: prompt"))?;

    let message =
        copywriter::generate_text(state.completions.as_ref(), &prompt, &input.options).await?;
    Ok(Json(ServiceResponse::ok(to_value(message)?)))
}

/// POST /api/ai/speech/synthesize
pub async fn synthesize_speech(
    ServiceJson(input): ServiceJson<SpeechRequest>,
) -> ServiceResult<Json<ServiceResponse<SpeechResult>>> {
    Ok(Json(ServiceResponse::ok(speech::synthesize(
        input.text,
        input.voice.as_deref(),
    ))))
}

fn to_value<T: serde::Serialize>(value: T) -> ServiceResult<Value> {
    serde_json::to_value(value).map_err(|e| ServiceError::internal(e.to_string()))
}
