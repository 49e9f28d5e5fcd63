//! Provider routers: thin proxies in front of each creative-AI vendor.
//!
//! Each route shapes the vendor's request body from `{ prompt | scene |
//! parameters, options }`, forwards it with the vendor key, and relays the
//! upstream JSON in the `{ success, data }` envelope. Every failure is a 500
//! naming the vendor.

use axum::extract::{Path, State};
use axum::Json;
use narratix_core::vendor::{self as shapes, Vendor};
use narratix_providers::ProviderError;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ServiceError, ServiceResult};
use crate::extract::ServiceJson;
use crate::response::ServiceResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Value,
    #[serde(default)]
    pub options: Value,
}

#[derive(Debug, Deserialize)]
pub struct SceneRequest {
    #[serde(default)]
    pub scene: Value,
    #[serde(default)]
    pub options: Value,
}

#[derive(Debug, Deserialize)]
pub struct CharacterRequest {
    #[serde(default)]
    pub parameters: Value,
    #[serde(default)]
    pub options: Value,
}

type VendorResponse = ServiceResult<Json<ServiceResponse<Value>>>;

/// POST /api/ai/3d/runway/generate
pub async fn runway_generate(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<PromptRequest>,
) -> VendorResponse {
    let body = shapes::runway_body(&input.prompt, &input.options);
    submit(&state, Vendor::Runway, &body).await
}

/// GET /api/ai/3d/runway/status/{job_id}
pub async fn runway_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> VendorResponse {
    let data = state
        .vendors
        .get(Vendor::Runway)
        .job_status(&job_id)
        .await
        .map_err(|e| vendor_error(Vendor::Runway, e))?;
    Ok(Json(ServiceResponse::ok(data)))
}

/// POST /api/ai/3d/stable-diffusion/generate
pub async fn stable_diffusion_generate(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<PromptRequest>,
) -> VendorResponse {
    let body = shapes::stable_diffusion_body(&input.prompt, &input.options);
    submit(&state, Vendor::StableDiffusion, &body).await
}

/// POST /api/ai/3d/omniverse/render
pub async fn omniverse_render(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<SceneRequest>,
) -> VendorResponse {
    let body = shapes::omniverse_body(&input.scene, &input.options);
    submit(&state, Vendor::Omniverse, &body).await
}

/// POST /api/ai/3d/metahuman/create
pub async fn metahuman_create(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<CharacterRequest>,
) -> VendorResponse {
    if !input.parameters.is_object() {
        return Err(ServiceError::bad_request(
            "Missing required field: parameters",
        ));
    }
    let body = shapes::metahuman_body(&input.parameters, &input.options);
    submit(&state, Vendor::Metahuman, &body).await
}

/// POST /api/ai/3d/maya/render
pub async fn maya_render(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<SceneRequest>,
) -> VendorResponse {
    let body = shapes::maya_body(&input.scene, &input.options);
    submit(&state, Vendor::Maya, &body).await
}

/// POST /api/ai/3d/blender/render
pub async fn blender_render(
    State(state): State<AppState>,
    ServiceJson(input): ServiceJson<SceneRequest>,
) -> VendorResponse {
    let body = shapes::blender_body(&input.scene, &input.options);
    submit(&state, Vendor::Blender, &body).await
}

async fn submit(state: &AppState, vendor: Vendor, body: &Value) -> VendorResponse {
    let data = state
        .vendors
        .get(vendor)
        .submit(body)
        .await
        .map_err(|e| vendor_error(vendor, e))?;
    Ok(Json(ServiceResponse::ok(data)))
}

fn vendor_error(vendor: Vendor, err: ProviderError) -> ServiceError {
    let message = match &err {
        ProviderError::MissingApiKey(_) => vendor.missing_key_message(),
        ProviderError::Api { reason, .. } => vendor.api_error_message(reason),
        other => other.to_string(),
    };
    tracing::error!(vendor = %vendor, error = %err, "Vendor request failed");
    ServiceError::internal(message)
}
