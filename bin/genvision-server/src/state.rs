//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use genvision_core::{GenerationService, HistoryStore, ModelRegistry};
use minijinja::Environment;

use crate::config::Config;
use crate::pages;

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Owns the model registry and the prompt history.
    pub generator: Arc<GenerationService>,
    /// Compiled HTML templates.
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Wire the built-in registry and a fresh history into a new state.
    pub fn new(config: Config) -> Result<Self, minijinja::Error> {
        let generator = GenerationService::new(
            Arc::new(ModelRegistry::builtin()),
            Arc::new(HistoryStore::new()),
        )
        .with_latency(config.simulated_latency);

        Self::with_generator(config, generator)
    }

    pub fn with_generator(
        config: Config,
        generator: GenerationService,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
            templates: Arc::new(pages::templates()?),
        })
    }
}
