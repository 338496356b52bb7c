//! Like a generated video (`POST /api/like`).
//!
//! Nothing is stored: the like is acknowledged and discarded.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::like::{LikeRequest, LikeResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(like_video), components(schemas(LikeRequest, LikeResponse)))]
pub struct LikeApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/like", post(like_video))
}

#[utoipa::path(
    post,
    path = "/api/like",
    tag = "like",
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Like acknowledged", body = LikeResponse),
        (status = 500, description = "Missing video_id or malformed body"),
    )
)]
pub async fn like_video(
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Json<LikeResponse>, ServerError> {
    let Json(req) = payload.map_err(|e| ServerError::LikeFailed(e.body_text()))?;

    genvision_core::like(req.video_id.as_deref())?;

    Ok(Json(LikeResponse {
        success: true,
        message: "Video liked successfully".into(),
    }))
}
