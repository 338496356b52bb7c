use genvision_core::HistoryEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for `GET /api/history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Newest first, at most ten entries.
    pub history: Vec<HistoryEntry>,
}
