//! The fixed table of simulated video-generation models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One simulated generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    /// Display name, e.g. `"Pika Labs"`.
    pub name: String,
    pub description: String,
    /// Capability labels, in display order.
    pub capabilities: Vec<String>,
}

impl Model {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        capabilities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            capabilities: capabilities.into_iter().map(Into::into).collect(),
        }
    }
}

// (key, name, description, capabilities)
const BUILTIN_MODELS: &[(&str, &str, &str, &[&str])] = &[
    (
        "pika",
        "Pika Labs",
        "Excellent for character-driven narratives and smooth motion. Best for cinematic scenes with realistic lighting.",
        &["Character Animation", "Cinematic Quality", "Realistic Lighting"],
    ),
    (
        "runway",
        "RunwayML",
        "Great for creative and artistic video generation. Excels at abstract and stylized content.",
        &["Creative Effects", "Style Transfer", "Abstract Art"],
    ),
    (
        "sora",
        "Sora",
        "OpenAI's advanced model for high-quality, coherent video generation with complex scenes.",
        &["Complex Scenes", "High Quality", "Long Duration"],
    ),
];

/// Read-only mapping from model key to [`Model`].
///
/// Built once at startup and shared behind an `Arc`; it is never mutated, so
/// no locking is needed. Keys iterate in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRegistry {
    models: BTreeMap<String, Model>,
}

impl ModelRegistry {
    pub fn new(models: impl IntoIterator<Item = (String, Model)>) -> Self {
        Self {
            models: models.into_iter().collect(),
        }
    }

    /// The registry shipped with the service: `pika`, `runway` and `sora`.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_MODELS
                .iter()
                .map(|(key, name, description, capabilities)| {
                    (
                        (*key).to_owned(),
                        Model::new(*name, *description, capabilities.iter().copied()),
                    )
                }),
        )
    }

    /// All models keyed by identifier.
    pub fn models(&self) -> &BTreeMap<String, Model> {
        &self.models
    }

    pub fn get(&self, key: &str) -> Option<&Model> {
        self.models.get(key)
    }

}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
