//! genvision-core – the simulated video-generation domain.
//!
//! This crate has no HTTP dependency. It owns:
//! - [`ModelRegistry`]: the fixed table of generation models.
//! - [`HistoryStore`]: the bounded, newest-first prompt history.
//! - [`GenerationService`]: request validation, simulated latency and
//!   placeholder result fabrication.
//! - [`like`]: the stub "like a video" operation.

pub mod error;
pub mod generation;
pub mod history;
pub mod like;
pub mod registry;

pub use error::{GenerationError, LikeError};
pub use generation::{
    DEFAULT_SIMULATED_LATENCY, GenerationResponse, GenerationResult, GenerationService,
    PLACEHOLDER_VIDEOS,
};
pub use history::{HISTORY_CAPACITY, HistoryEntry, HistoryStore};
pub use like::like;
pub use registry::{Model, ModelRegistry};
