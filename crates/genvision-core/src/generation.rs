//! Simulated multi-model video generation.
//!
//! [`GenerationService::generate`] validates the request, waits for the
//! configured simulated latency without blocking the runtime, fabricates one
//! placeholder result per requested model and records a summary in the
//! shared [`HistoryStore`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::error::GenerationError;
use crate::history::{HistoryEntry, HistoryStore};
use crate::registry::{Model, ModelRegistry};

/// Static placeholder videos, assigned round-robin by request position.
pub const PLACEHOLDER_VIDEOS: [&str; 3] = [
    "/static/videos/placeholder1.mp4",
    "/static/videos/placeholder2.mp4",
    "/static/videos/placeholder3.mp4",
];

pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_secs(2);

/// One fabricated video, one per requested model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    pub model_id: String,
    pub model_name: String,
    pub video_url: String,
    pub prompt: String,
    /// Synthetic elapsed time, e.g. `"3s"`.
    pub generation_time: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Results in request order.
    pub results: Vec<GenerationResult>,
    /// Human-readable summary, e.g. `"Generated 2 videos successfully"`.
    pub message: String,
}

#[derive(Debug)]
pub struct GenerationService {
    registry: Arc<ModelRegistry>,
    history: Arc<HistoryStore>,
    latency: Duration,
    placeholders: Vec<String>,
}

impl GenerationService {
    pub fn new(registry: Arc<ModelRegistry>, history: Arc<HistoryStore>) -> Self {
        Self {
            registry,
            history,
            latency: DEFAULT_SIMULATED_LATENCY,
            placeholders: PLACEHOLDER_VIDEOS.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    /// Override the simulated processing delay.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override the placeholder video list.
    pub fn with_placeholders(mut self, placeholders: Vec<String>) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Check a request without side effects.
    ///
    /// Returns the trimmed prompt and the resolved models in request order.
    /// Checks run in a fixed order: prompt, model count, model keys.
    pub fn validate<'a>(
        &'a self,
        prompt: &'a str,
        model_keys: &'a [String],
    ) -> Result<(&'a str, Vec<(&'a str, &'a Model)>), GenerationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        if model_keys.is_empty() {
            return Err(GenerationError::NoModelsSelected);
        }

        let mut resolved = Vec::with_capacity(model_keys.len());
        let mut unknown = Vec::new();
        for key in model_keys {
            match self.registry.get(key) {
                Some(model) => resolved.push((key.as_str(), model)),
                None => unknown.push(key.clone()),
            }
        }
        if !unknown.is_empty() {
            return Err(GenerationError::UnknownModel(unknown));
        }

        Ok((prompt, resolved))
    }

    /// Run one simulated generation.
    ///
    /// The delay suspends only the calling task. History is written after all
    /// results are built, so a failed request never leaves an entry behind.
    pub async fn generate(
        &self,
        prompt: &str,
        model_keys: &[String],
    ) -> Result<GenerationResponse, GenerationError> {
        let (prompt, models) = self.validate(prompt, model_keys)?;

        debug!(
            prompt_len = prompt.len(),
            models = model_keys.len(),
            latency_ms = self.latency.as_millis() as u64,
            "simulating generation"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.placeholders.is_empty() {
            return Err(GenerationError::Internal(
                "no placeholder videos configured".into(),
            ));
        }

        let results: Vec<GenerationResult> = models
            .iter()
            .enumerate()
            .map(|(i, (key, model))| GenerationResult {
                model_id: (*key).to_owned(),
                model_name: model.name.clone(),
                video_url: self.placeholders[i % self.placeholders.len()].clone(),
                prompt: prompt.to_owned(),
                generation_time: format!("{}s", 2 + i),
                timestamp: Utc::now(),
                likes: 0,
            })
            .collect();

        self.history.record(HistoryEntry {
            prompt: prompt.to_owned(),
            models: models.iter().map(|(_, model)| model.name.clone()).collect(),
            timestamp: Utc::now(),
            results: results.len(),
        });

        info!(results = results.len(), "generation complete");

        Ok(GenerationResponse {
            message: format!("Generated {} videos successfully", results.len()),
            results,
        })
    }
}
