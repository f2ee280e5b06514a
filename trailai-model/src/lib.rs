//! Language model backends for TrailAI.
//!
//! [`ollama::OllamaLanguageModel`] implements [`trailai_core::LanguageModel`]
//! against a local Ollama server using its JSON-schema structured outputs.

#![forbid(unsafe_code)]

pub mod ollama;

pub use ollama::{DEFAULT_USER_AGENT, ModelBuildError, OllamaConfig, OllamaLanguageModel};
