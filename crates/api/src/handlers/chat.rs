//! Help-chat endpoint.

use axum::extract::State;
use axum::Json;
use narratix_core::validation::not_blank;
use narratix_providers::copywriter;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant reply; `null` when the model answered without text.
    pub message: Option<String>,
}

/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = copywriter::chat_reply(state.completions.as_ref(), &input.message).await?;
    Ok(Json(ChatResponse { message }))
}
