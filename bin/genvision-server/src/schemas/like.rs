use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/like`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeRequest {
    /// The liked video's `video_url`.
    pub video_id: Option<String>,
}

/// Response body for a successful `POST /api/like`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeResponse {
    /// Always `true`.
    pub success: bool,
    pub message: String,
}
