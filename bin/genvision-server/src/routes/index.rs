//! Landing page (`GET /`).

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;

use crate::error::ServerError;
use crate::pages;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// HTML page listing the available models.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let html = pages::render_index(&state.templates, state.generator.registry())?;
    Ok(Html(html))
}
