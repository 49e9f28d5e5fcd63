//! Route definitions for the `/projects` resource.
//!
//! Also nests script routes under `/projects/{project_id}/scripts`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, script};
use crate::state::AppState;

/// Routes mounted at `/projects`. All require auth.
///
/// ```text
/// GET  /                                  -> list
/// POST /                                  -> create
///
/// GET  /{project_id}/scripts              -> list_by_project
/// POST /{project_id}/scripts              -> create
/// POST /{project_id}/scripts/generate     -> generate
/// ```
pub fn router() -> Router<AppState> {
    let script_routes = Router::new()
        .route("/", get(script::list_by_project).post(script::create))
        .route("/generate", post(script::generate));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .nest("/{project_id}/scripts", script_routes)
}
