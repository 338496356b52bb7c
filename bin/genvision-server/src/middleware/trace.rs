use std::time::Instant;

use axum::body::{Body, HttpBody};
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::BodyExt;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

/// JSON bodies up to this size are logged at debug level.
const MAX_LOGGED_BODY: usize = 1024;

/// Tag every request with a trace id and log its outcome.
///
/// An incoming `x-trace-id` header is reused when it holds a valid UUID;
/// otherwise a fresh one is generated. The id is echoed on the response.
pub async fn trace_middleware(req: Request, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        info!("→ request started");
        let header_value = HeaderValue::from_str(&trace_id.to_string()).ok();

        let (parts, body) = req.into_parts();
        let body = log_json_body("request", &parts.headers, body).await;
        let mut req = Request::from_parts(parts, body);
        if let Some(v) = &header_value {
            req.headers_mut().insert(X_TRACE_ID, v.clone());
        }

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();
        let body = log_json_body("response", &parts.headers, body).await;
        let mut response = Response::from_parts(parts, body);
        if let Some(v) = header_value {
            response.headers_mut().insert(X_TRACE_ID, v);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis() as u64,
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}

// Only small JSON bodies with a known length are buffered; everything else
// streams through untouched so request size limits stay with the extractors.
async fn log_json_body(direction: &str, headers: &HeaderMap, body: Body) -> Body {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return body;
    }

    match body.size_hint().upper() {
        Some(len) if len <= MAX_LOGGED_BODY as u64 => {}
        Some(len) => {
            debug!("{direction} body: [skipped: size={len}]");
            return body;
        }
        None => {
            debug!("{direction} body: [skipped: size=unknown]");
            return body;
        }
    }

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            debug!(error = %e, "failed to buffer {direction} body");
            return Body::empty();
        }
    };

    match std::str::from_utf8(&bytes) {
        Ok(text) => debug!("{direction} body: {text}"),
        Err(_) => debug!("{direction} body: [skipped: not utf-8]"),
    }

    Body::from(bytes)
}
