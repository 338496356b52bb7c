//! Simulated video generation (`POST /api/generate`).

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::generate::{GenerateRequest, GenerateResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(generate_videos),
    components(schemas(GenerateRequest, GenerateResponse, genvision_core::GenerationResult))
)]
pub struct GenerateApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(generate_videos))
}

/// Generate one placeholder video per selected model.
///
/// The request waits for the configured simulated latency; other requests
/// are served meanwhile. On success a summary is added to the prompt history.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Videos generated", body = GenerateResponse),
        (status = 400, description = "Empty prompt, no models, or unknown model keys"),
        (status = 500, description = "Generation failed"),
    )
)]
pub async fn generate_videos(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ServerError> {
    let Json(req) = payload.map_err(|e| ServerError::GenerationFailed(e.body_text()))?;

    debug!(prompt_len = req.prompt.len(), models = ?req.models, "video generation request");

    let generated = state.generator.generate(&req.prompt, &req.models).await?;

    info!(videos = generated.results.len(), "video generation done");

    Ok(Json(GenerateResponse {
        success: true,
        results: generated.results,
        message: generated.message,
    }))
}
