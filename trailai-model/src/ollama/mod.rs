//! HTTP backend speaking the Ollama chat API.
//!
//! Availability is established by probing `GET /api/tags` with
//! [`OllamaLanguageModel::refresh_availability`] and cached, so the
//! synchronous [`trailai_core::LanguageModel::availability`] query never
//! touches the network. Generation posts to `/api/chat` with the response
//! schema in the `format` field.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use trailai_core::{RecommendationEngine, RecommendationInput};
//! use trailai_model::ollama::{OllamaConfig, OllamaLanguageModel};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OllamaConfig::new("http://localhost:11434", "llama3.2")
//!     .with_request_timeout(Duration::from_secs(120));
//! let model = OllamaLanguageModel::with_config(config)?;
//! model.refresh_availability().await;
//!
//! let engine = RecommendationEngine::new(model);
//! let weather = vec!["Sunny".to_owned()];
//! let recommendation = engine
//!     .generate_recommendation(&RecommendationInput::new(&[], &[], &weather))
//!     .await?;
//! assert!(!recommendation.message().is_empty());
//! # Ok(())
//! # }
//! ```

mod client;
mod wire;

pub use client::{DEFAULT_USER_AGENT, ModelBuildError, OllamaConfig, OllamaLanguageModel};
