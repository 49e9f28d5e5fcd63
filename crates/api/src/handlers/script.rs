//! Handlers for scripts nested under `/projects/{project_id}/scripts`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use narratix_core::types::DbId;
use narratix_core::validation::not_blank;
use narratix_providers::copywriter;
use narratix_store::models::script::{CreateScript, Script};
use narratix_store::repositories::ScriptRepo;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateScriptRequest {
    pub content: String,
    pub metadata: Option<serde_json::Value>,
}

/// Brief for a generated script. All three fields are required strings.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateScriptRequest {
    #[validate(custom(function = "not_blank"))]
    pub prompt: String,
    pub tone: String,
    pub audience: String,
}

/// GET /api/projects/{project_id}/scripts
pub async fn list_by_project(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<Json<Vec<Script>>> {
    owned_project(&state, project_id, auth_user.user_id).await?;
    let scripts = ScriptRepo::list_by_project(&state.store, project_id).await?;
    Ok(Json(scripts))
}

/// POST /api/projects/{project_id}/scripts
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(project_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<CreateScriptRequest>,
) -> AppResult<(StatusCode, Json<Script>)> {
    owned_project(&state, project_id, auth_user.user_id).await?;
    let create = CreateScript {
        content: input.content,
        metadata: input.metadata,
    };
    let script = ScriptRepo::create(&state.store, project_id, &create).await?;
    Ok((StatusCode::CREATED, Json(script)))
}

/// POST /api/projects/{project_id}/scripts/generate
///
/// Generates copy from the brief and stores it with the brief as metadata.
pub async fn generate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(project_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<GenerateScriptRequest>,
) -> AppResult<(StatusCode, Json<Script>)> {
    owned_project(&state, project_id, auth_user.user_id).await?;

    let content = copywriter::generate_script(
        state.completions.as_ref(),
        &input.prompt,
        &input.tone,
        &input.audience,
    )
    .await?;

    let create = CreateScript {
        content,
        metadata: Some(json!({
            "prompt": input.prompt,
            "tone": input.tone,
            "audience": input.audience,
        })),
    };
    let script = ScriptRepo::create(&state.store, project_id, &create).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        project_id,
        script_id = script.id,
        "Script generated"
    );
    Ok((StatusCode::CREATED, Json(script)))
}
