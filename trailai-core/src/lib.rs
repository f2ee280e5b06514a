//! Core domain types and the recommendation engine for TrailAI.
//!
//! The crate holds the trail catalogue records, the model boundary
//! ([`LanguageModel`]) and the [`RecommendationEngine`] that combines them.
//! Model backends and presentation live in sibling crates.

#![forbid(unsafe_code)]

pub mod engine;
pub mod model;
pub mod payload;
pub mod prompt;
pub mod recommendation;
pub mod trail;

#[doc(hidden)]
pub mod test_support;

pub use engine::{
    DEFAULT_MINUTES, DEFAULT_TRAIL_NAME, RecommendationEngine, RecommendationInput,
    fallback_recommendation,
};
pub use model::{
    GenerationRequest, LanguageModel, ModelAvailability, ModelError, UnavailableModel,
    UnavailableReason,
};
pub use payload::{PayloadError, TrailRecommendationPayload, response_schema};
pub use prompt::{INSTRUCTIONS, build_prompt, trail_line};
pub use recommendation::{Recommendation, RecommendationId};
pub use trail::{MIN_ESTIMATED_MINUTES, Trail, TrailError, TrailId};
