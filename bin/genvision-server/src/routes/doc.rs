use utoipa::OpenApi;

use crate::routes::{api, health};

#[derive(OpenApi)]
#[openapi(info(
    title = "genvision-server",
    description = "Simulated multi-model video generation API",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(api::api_docs());
    root.merge(health::HealthApi::openapi());
    root
}
