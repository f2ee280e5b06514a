//! Boundary between the engine and a generative language model.
//!
//! The [`LanguageModel`] trait exposes a synchronous availability query and an
//! asynchronous structured `respond` call. Backends live in other crates; this
//! module only fixes the contract and the error vocabulary.

mod availability;
mod error;
mod language_model;

pub use availability::{ModelAvailability, UnavailableReason};
pub use error::ModelError;
pub use language_model::{GenerationRequest, LanguageModel, UnavailableModel};
