use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::schemas::models::ModelsResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_models),
    components(schemas(ModelsResponse, genvision_core::Model))
)]
pub struct ModelsApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/models", get(get_models))
}

/// Every available model keyed by identifier (`GET /api/models`).
#[utoipa::path(
    get,
    path = "/api/models",
    tag = "models",
    responses((status = 200, description = "Available models", body = ModelsResponse))
)]
pub async fn get_models(State(state): State<Arc<AppState>>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.generator.registry().models().clone(),
    })
}
