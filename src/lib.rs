//! Facade crate for the TrailAI recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the Ollama model
//! backend behind the `ollama` feature flag.

#![forbid(unsafe_code)]

pub use trailai_core::{
    DEFAULT_MINUTES, DEFAULT_TRAIL_NAME, GenerationRequest, INSTRUCTIONS, LanguageModel,
    MIN_ESTIMATED_MINUTES, ModelAvailability, ModelError, PayloadError, Recommendation,
    RecommendationEngine, RecommendationId, RecommendationInput, Trail, TrailError, TrailId,
    TrailRecommendationPayload, UnavailableModel, UnavailableReason, build_prompt,
    fallback_recommendation, response_schema,
};

#[cfg(feature = "ollama")]
pub use trailai_model::{ModelBuildError, OllamaConfig, OllamaLanguageModel};
