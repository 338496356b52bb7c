//! JSON API consumed by the web client, nested under `/api`.

pub mod generate;
pub mod history;
pub mod like;
pub mod models;

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use crate::state::AppState;

/// Routes nested under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(generate::router())
        .merge(history::router())
        .merge(models::router())
        .merge(like::router())
}

#[derive(OpenApi)]
#[openapi()]
pub struct Api;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = Api::openapi();
    spec.merge(generate::GenerateApi::openapi());
    spec.merge(history::HistoryApi::openapi());
    spec.merge(models::ModelsApi::openapi());
    spec.merge(like::LikeApi::openapi());
    spec
}
