use genvision_core::GenerationResult;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/generate`.
///
/// Missing fields, and a `null` model list, default to empty and are rejected
/// by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Text description of the desired video.
    #[serde(default)]
    pub prompt: String,
    /// Model keys from `GET /api/models`, in the order results should appear.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub models: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body for a successful `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Always `true`.
    pub success: bool,
    pub results: Vec<GenerationResult>,
    pub message: String,
}
