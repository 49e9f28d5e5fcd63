//! Route definitions for the `/ai` tree: orchestration, ad-copy helpers and
//! the creative-AI vendor proxies. All public.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content, orchestration, vendor};
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST /generate                          -> orchestration::generate
/// POST /text/generate                     -> orchestration::generate_text
/// POST /speech/synthesize                 -> orchestration::synthesize_speech
///
/// POST /content/ad-script                 -> content::ad_script
/// POST /content/analyze                   -> content::analyze
/// POST /content/optimize                  -> content::optimize
/// POST /content/variations                -> content::variations
/// POST /content/audience-insights         -> content::audience_insights
///
/// POST /3d/runway/generate                -> vendor::runway_generate
/// GET  /3d/runway/status/{job_id}         -> vendor::runway_status
/// POST /3d/stable-diffusion/generate      -> vendor::stable_diffusion_generate
/// POST /3d/omniverse/render               -> vendor::omniverse_render
/// POST /3d/metahuman/create               -> vendor::metahuman_create
/// POST /3d/maya/render                    -> vendor::maya_render
/// POST /3d/blender/render                 -> vendor::blender_render
/// ```
pub fn router() -> Router<AppState> {
    let content_routes = Router::new()
        .route("/ad-script", post(content::ad_script))
        .route("/analyze", post(content::analyze))
        .route("/optimize", post(content::optimize))
        .route("/variations", post(content::variations))
        .route("/audience-insights", post(content::audience_insights));

    let vendor_routes = Router::new()
        .route("/runway/generate", post(vendor::runway_generate))
        .route("/runway/status/{job_id}", get(vendor::runway_status))
        .route(
            "/stable-diffusion/generate",
            post(vendor::stable_diffusion_generate),
        )
        .route("/omniverse/render", post(vendor::omniverse_render))
        .route("/metahuman/create", post(vendor::metahuman_create))
        .route("/maya/render", post(vendor::maya_render))
        .route("/blender/render", post(vendor::blender_render));

    Router::new()
        .route("/generate", post(orchestration::generate))
        .route("/text/generate", post(orchestration::generate_text))
        .route("/speech/synthesize", post(orchestration::synthesize_speech))
        .nest("/content", content_routes)
        .nest("/3d", vendor_routes)
}
