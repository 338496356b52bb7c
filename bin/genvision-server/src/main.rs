//! genvision-server – entry point.
//!
//! Startup order:
//! 1. Parse configuration from environment variables (fails fast on an
//!    invalid environment or a missing production secret).
//! 2. Initialise structured tracing (JSON when `GENVISION_LOG_JSON` is set).
//! 3. Build the shared state: model registry, prompt history, templates.
//! 4. Build the Axum router and serve HTTP with graceful shutdown.

mod config;
mod error;
mod middleware;
mod pages;
mod routes;
mod schemas;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Configuration ───────────────────────────────────────────────────────
    let cfg = Config::from_env().context("invalid configuration")?;

    // ── 2. Tracing ─────────────────────────────────────────────────────────────
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: GENVISION_LOG='{}' is not a valid tracing filter ({}); \
                     falling back to 'info'",
                    cfg.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?cfg.environment,
        "genvision-server starting"
    );
    if cfg.secret_key.is_dev_fallback() {
        warn!("SESSION_SECRET is not set; using the insecure development key");
    }

    // ── 3. Shared application state ────────────────────────────────────────────
    let state = Arc::new(AppState::new(cfg.clone()).context("failed to load templates")?);
    info!(
        models = state.generator.registry().models().len(),
        simulated_latency_ms = cfg.simulated_latency.as_millis() as u64,
        static_dir = %cfg.static_dir,
        "application state ready"
    );

    // ── 4. HTTP server with graceful shutdown ──────────────────────────────────
    let app = routes::build(Arc::clone(&state));
    let addr: SocketAddr = cfg
        .bind_address
        .parse()
        .with_context(|| format!("invalid GENVISION_BIND '{}'", cfg.bind_address))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("genvision-server stopped");
    Ok(())
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
