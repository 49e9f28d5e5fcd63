pub mod ai;
pub mod auth;
pub mod chat;
pub mod health;
pub mod project;
pub mod template;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                                            liveness (public)
///
/// /register                                        register (public)
/// /login                                           login (public)
/// /refresh                                         refresh (public)
/// /logout                                          logout (requires auth)
/// /user                                            current user (requires auth)
///
/// /projects                                        list, create (requires auth)
/// /projects/{project_id}/scripts                   list, create
/// /projects/{project_id}/scripts/generate          generate (POST)
///
/// /templates                                       list (requires auth)
///
/// /chat                                            help chat (public)
///
/// /ai/generate                                     orchestration dispatcher
/// /ai/text/generate                                text completion
/// /ai/speech/synthesize                            speech placeholder
/// /ai/content/...                                  ad-copy helpers
/// /ai/3d/...                                       vendor proxies
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .merge(auth::router())
        .nest("/projects", project::router())
        .nest("/templates", template::router())
        .nest("/chat", chat::router())
        .nest("/ai", ai::router())
}
