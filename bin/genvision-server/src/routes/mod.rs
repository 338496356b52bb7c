//! Axum router construction.
//!
//! [`build`] assembles the complete application router:
//! - `GET /` landing page
//! - `/api` JSON routes (generate, history, models, like)
//! - `/health` liveness route
//! - `/static` files (placeholder videos)
//! - optional Swagger UI (disable with `GENVISION_ENABLE_SWAGGER=false`)
//! - CORS and per-request trace-id middleware

pub mod api;
pub mod doc;
mod health;
mod index;

use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::services::ServeDir;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(index::router())
        .merge(health::router())
        .nest("/api", api::router())
        .nest_service("/static", ServeDir::new(&state.config.static_dir));

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(cors::cors_layer(&state.config))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use genvision_core::{GenerationService, HistoryStore, ModelRegistry, PLACEHOLDER_VIDEOS};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::error::{GENERATION_FAILED_MESSAGE, LIKE_FAILED_MESSAGE};

    fn test_config() -> Config {
        Config::from_lookup(|_| None).expect("development defaults")
    }

    fn test_app_with(generator: GenerationService) -> Router {
        let state = AppState::with_generator(test_config(), generator).unwrap();
        build(Arc::new(state))
    }

    fn test_generator() -> GenerationService {
        GenerationService::new(
            Arc::new(ModelRegistry::builtin()),
            Arc::new(HistoryStore::new()),
        )
        .with_latency(Duration::ZERO)
    }

    fn test_app() -> Router {
        test_app_with(test_generator())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        post_raw(uri, body.to_string())
    }

    fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    // ── /api/models ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn models_lists_the_builtin_registry() {
        let (status, body) = send(&test_app(), get("/api/models")).await;
        assert_eq!(status, StatusCode::OK);

        let models = body["models"].as_object().unwrap();
        assert_eq!(models.len(), 3);
        assert_eq!(models["pika"]["name"], "Pika Labs");
        assert_eq!(models["runway"]["capabilities"][1], "Style Transfer");
        assert!(models["sora"]["description"].as_str().unwrap().contains("complex scenes"));
    }

    // ── /api/generate ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn generate_returns_one_result_per_model() {
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json("/api/generate", json!({"prompt": " a cat ", "models": ["pika", "runway", "sora", "pika"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Generated 4 videos successfully");

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result["video_url"], PLACEHOLDER_VIDEOS[i % 3]);
            assert_eq!(result["generation_time"], format!("{}s", 2 + i));
            assert_eq!(result["prompt"], "a cat");
            assert_eq!(result["likes"], 0);
            assert!(result["timestamp"].is_string());
        }
        assert_eq!(results[1]["model_id"], "runway");
        assert_eq!(results[1]["model_name"], "RunwayML");
    }

    #[tokio::test]
    async fn generate_validation_errors_are_400() {
        let app = test_app();
        let cases = [
            (json!({"prompt": "", "models": ["pika"]}), "Prompt is required"),
            (json!({"models": ["pika"]}), "Prompt is required"),
            (json!({"prompt": "a cat", "models": []}), "At least one model must be selected"),
            (json!({"prompt": "a cat"}), "At least one model must be selected"),
            (
                json!({"prompt": "a cat", "models": ["pika", "bogus", "nope"]}),
                "Invalid models: bogus, nope",
            ),
        ];

        for (request, message) in cases {
            let (status, body) = send(&app, post_json("/api/generate", request)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": message }));
        }

        let (_, body) = send(&app, get("/api/history")).await;
        assert!(body["history"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_generate_body_is_a_generic_500() {
        let (status, body) = send(&test_app(), post_raw("/api/generate", "{not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED_MESSAGE }));
    }

    #[tokio::test]
    async fn internal_fault_is_a_generic_500() {
        let app = test_app_with(test_generator().with_placeholders(Vec::new()));
        let (status, body) = send(
            &app,
            post_json("/api/generate", json!({"prompt": "a cat", "models": ["pika"]})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED_MESSAGE }));
    }

    #[tokio::test]
    async fn null_models_is_a_validation_error() {
        let (status, body) = send(
            &test_app(),
            post_json("/api/generate", json!({"prompt": "a cat", "models": null})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "At least one model must be selected" }));
    }

    #[tokio::test]
    async fn oversized_json_bodies_are_rejected() {
        // Above axum's default 2 MB extractor limit, but otherwise valid JSON.
        let padding = "x".repeat(3 * 1024 * 1024);
        let app = test_app();

        let request = post_json("/api/like", json!({ "video_id": padding }));
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": LIKE_FAILED_MESSAGE }));

        let request = post_json("/api/generate", json!({ "prompt": padding, "models": ["pika"] }));
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED_MESSAGE }));

        let (_, body) = send(&app, get("/api/history")).await;
        assert!(body["history"].as_array().unwrap().is_empty());
    }

    // ── /api/history ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn history_reflects_generations_newest_first() {
        let app = test_app();
        for i in 1..=11 {
            let (status, _) = send(
                &app,
                post_json("/api/generate", json!({"prompt": format!("call {i}"), "models": ["sora", "pika"]})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(&app, get("/api/history")).await;
        assert_eq!(status, StatusCode::OK);

        let history = body["history"].as_array().unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0]["prompt"], "call 11");
        assert_eq!(history[0]["models"], json!(["Sora", "Pika Labs"]));
        assert_eq!(history[0]["results"], 2);
        assert!(history.iter().all(|h| h["prompt"] != "call 1"));
    }

    // ── /api/like ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn like_always_succeeds_and_changes_nothing() {
        let app = test_app();
        send(&app, post_json("/api/generate", json!({"prompt": "a cat", "models": ["pika"]}))).await;
        let (_, before) = send(&app, get("/api/history")).await;

        let (status, body) = send(
            &app,
            post_json("/api/like", json!({"video_id": "/static/videos/placeholder1.mp4"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "Video liked successfully"}));

        let (_, after) = send(&app, get("/api/history")).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn like_without_video_id_fails() {
        let app = test_app();
        for request in [post_json("/api/like", json!({})), post_raw("/api/like", "nope")] {
            let (status, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "error": LIKE_FAILED_MESSAGE }));
        }
    }

    // ── Misc ──────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn index_renders_models() {
        let response = test_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Pika Labs"));
        assert!(html.contains("RunwayML"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(&test_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["models"], 3);
    }

    #[tokio::test]
    async fn responses_carry_a_trace_id() {
        let response = test_app().oneshot(get("/api/models")).await.unwrap();
        let trace_id = response.headers().get(trace::X_TRACE_ID).expect("trace id header");
        assert!(uuid::Uuid::parse_str(trace_id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn incoming_trace_id_is_echoed() {
        let id = uuid::Uuid::new_v4().to_string();
        let request = Request::builder()
            .uri("/health")
            .header(trace::X_TRACE_ID, &id)
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[trace::X_TRACE_ID], id.as_str());
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = send(&test_app(), get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/generate"].is_object());
        assert!(body["paths"]["/api/like"].is_object());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_generation_does_not_block_reads() {
        let app = test_app_with(test_generator().with_latency(Duration::from_secs(2)));

        let pending = {
            let app = app.clone();
            tokio::spawn(async move {
                send(&app, post_json("/api/generate", json!({"prompt": "slow", "models": ["pika"]}))).await
            })
        };

        // Let the generation start and sleep part of its delay.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!pending.is_finished());

        let (status, body) = send(&app, get("/api/history")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["history"].as_array().unwrap().is_empty());
        assert!(!pending.is_finished());

        let (status, _) = pending.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, get("/api/history")).await;
        assert_eq!(body["history"][0]["prompt"], "slow");
    }
}
