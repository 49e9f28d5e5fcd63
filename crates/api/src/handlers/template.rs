//! Handlers for the `/templates` resource.

use axum::extract::State;
use axum::Json;
use narratix_store::models::template::Template;
use narratix_store::repositories::TemplateRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/templates
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Template>>> {
    let templates = TemplateRepo::list(&state.store).await?;
    Ok(Json(templates))
}
