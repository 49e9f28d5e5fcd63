use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use narratix_store::repositories::{ProjectRepo, UserRepo};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Registered users held by the store.
    pub users: usize,
    pub projects: usize,
}

#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    /// RFC 3339 server time.
    pub timestamp: String,
}

/// GET /health -- returns service status and store counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let users = UserRepo::count(&state.store).await.unwrap_or_default();
    let projects = ProjectRepo::count(&state.store).await.unwrap_or_default();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        users,
        projects,
    })
}

/// GET /api/ping -- liveness probe.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
