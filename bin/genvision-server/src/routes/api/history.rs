use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::schemas::history::HistoryResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_history),
    components(schemas(HistoryResponse, genvision_core::HistoryEntry))
)]
pub struct HistoryApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/history", get(get_history))
}

/// Recent generation requests, newest first (`GET /api/history`).
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "history",
    responses((status = 200, description = "Prompt history", body = HistoryResponse))
)]
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.generator.history().list(),
    })
}
