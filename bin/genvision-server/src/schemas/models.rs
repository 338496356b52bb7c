use std::collections::BTreeMap;

use genvision_core::Model;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for `GET /api/models`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelsResponse {
    /// Models keyed by identifier, e.g. `"pika"`.
    pub models: BTreeMap<String, Model>,
}
