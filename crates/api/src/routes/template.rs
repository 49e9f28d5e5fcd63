//! Route definitions for the `/templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::template;
use crate::state::AppState;

/// Routes mounted at `/templates`.
///
/// ```text
/// GET /  -> list (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(template::list))
}
