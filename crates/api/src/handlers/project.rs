//! Handlers for the `/projects` resource. Every project belongs to the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use narratix_core::error::CoreError;
use narratix_core::types::DbId;
use narratix_core::validation::{not_blank, MAX_PROJECT_NAME_LEN};
use narratix_store::models::project::{CreateProject, Project};
use narratix_store::repositories::ProjectRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_PROJECT_NAME_LEN, message = "must be at most 200 characters")
    )]
    pub name: String,
    pub description: Option<String>,
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_user(&state.store, auth_user.user_id).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let create = CreateProject {
        name: input.name,
        description: input.description,
    };
    let project = ProjectRepo::create(&state.store, auth_user.user_id, &create).await?;
    tracing::info!(user_id = auth_user.user_id, project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// Load a project owned by `user_id`.
///
/// Projects of other users answer the same 404 as missing ones.
pub async fn owned_project(state: &AppState, project_id: DbId, user_id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.store, project_id)
        .await?
        .filter(|p| p.user_id == user_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
}
