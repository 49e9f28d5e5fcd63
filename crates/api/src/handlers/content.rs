//! Ad-copy helpers: structured scripts, performance analysis, optimization,
//! platform variations and audience insights.
//!
//! Each runs one JSON-mode completion. Upstream rate limits and key errors
//! keep their status; anything else is a 500.

use axum::extract::State;
use axum::Json;
use narratix_core::prompts::AdScriptBrief;
use narratix_providers::copywriter::{self, AdScript, PerformanceAnalysis};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ServiceError, ServiceResult};
use crate::extract::ServiceJson;
use crate::response::ServiceResponse;
use crate::state::AppState;

const DEFAULT_DURATION_SECS: u32 = 30;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdScriptRequest {
    pub industry: String,
    pub tone: String,
    pub target_audience: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Seconds.
    pub duration: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub script: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationsRequest {
    pub base_script: String,
    pub platforms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AudienceRequest {
    pub demographics: String,
    pub behavior: String,
}

/// POST /api/ai/content/ad-script
pub async fn ad_script(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<AdScriptRequest>,
) -> ServiceResult<Json<ServiceResponse<AdScript>>> {
    let brief = AdScriptBrief {
        industry: &input.industry,
        tone: &input.tone,
        target_audience: &input.target_audience,
        key_points: &input.key_points,
        duration_secs: input.duration.unwrap_or(DEFAULT_DURATION_SECS),
    };
    let script = copywriter::generate_ad_script(state.completions.as_ref(), &brief)
        .await
        .map_err(ServiceError::upstream)?;
    Ok(Json(ServiceResponse::ok(script)))
}

/// POST /api/ai/content/analyze
pub async fn analyze(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<AnalyzeRequest>,
) -> ServiceResult<Json<ServiceResponse<PerformanceAnalysis>>> {
    let analysis = copywriter::analyze_performance(state.completions.as_ref(), &input.script)
        .await
        .map_err(ServiceError::upstream)?;
    Ok(Json(ServiceResponse::ok(analysis)))
}

/// POST /api/ai/content/optimize
pub async fn optimize(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<OptimizeRequest>,
) -> ServiceResult<Json<ServiceResponse<Value>>> {
    let suggestions = copywriter::optimize_content(state.completions.as_ref(), &input.content)
        .await
        .map_err(ServiceError::upstream)?;
    Ok(Json(ServiceResponse::ok(suggestions)))
}

/// POST /api/ai/content/variations
pub async fn variations(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<VariationsRequest>,
) -> ServiceResult<Json<ServiceResponse<Map<String, Value>>>> {
    if input.platforms.is_empty() {
        return Err(ServiceError::bad_request("At least one platform is required"));
    }
    let variations = copywriter::generate_variations(
        state.completions.as_ref(),
        &input.base_script,
        &input.platforms,
    )
    .await
    .map_err(ServiceError::upstream)?;
    Ok(Json(ServiceResponse::ok(variations)))
}

/// POST /api/ai/content/audience-insights
pub async fn audience_insights(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<AudienceRequest>,
) -> ServiceResult<Json<ServiceResponse<Value>>> {
    let insights = copywriter::audience_insights(
        state.completions.as_ref(),
        &input.demographics,
        &input.behavior,
    )
    .await
    .map_err(ServiceError::upstream)?;
    Ok(Json(ServiceResponse::ok(insights)))
}
