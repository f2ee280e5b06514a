use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{ModelAvailability, ModelError, UnavailableReason};

/// Everything a backend needs to generate one structured response.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    instructions: String,
    prompt: String,
    schema: Value,
}

impl GenerationRequest {
    /// Bundle the system instructions, the user prompt and the JSON schema the
    /// output must follow.
    #[must_use]
    pub fn new(instructions: impl Into<String>, prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            instructions: instructions.into(),
            prompt: prompt.into(),
            schema,
        }
    }

    /// Role and constraints for the model.
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// The per-request prompt.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// JSON schema describing the expected output.
    #[must_use]
    pub const fn schema(&self) -> &Value {
        &self.schema
    }
}

/// A generative model able to answer with structured JSON.
///
/// Implementations must be `Send + Sync` so a single handle can serve
/// concurrent recommendation requests.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use serde_json::{Value, json};
/// use trailai_core::{GenerationRequest, LanguageModel, ModelAvailability, ModelError};
///
/// struct EchoModel;
///
/// #[async_trait]
/// impl LanguageModel for EchoModel {
///     fn availability(&self) -> ModelAvailability {
///         ModelAvailability::Available
///     }
///
///     async fn respond(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
///         Ok(json!({ "message": request.prompt() }))
///     }
/// }
///
/// assert!(EchoModel.availability().is_available());
/// ```
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Report whether the model can serve requests.
    ///
    /// This must not block on I/O; backends report cached state.
    fn availability(&self) -> ModelAvailability;

    /// Generate a JSON value for `request`.
    ///
    /// Callers validate the value against [`GenerationRequest::schema`]
    /// themselves.
    async fn respond(&self, request: &GenerationRequest) -> Result<Value, ModelError>;
}

#[async_trait]
impl<M: LanguageModel + ?Sized> LanguageModel for Box<M> {
    fn availability(&self) -> ModelAvailability {
        (**self).availability()
    }

    async fn respond(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
        (**self).respond(request).await
    }
}

#[async_trait]
impl<M: LanguageModel + ?Sized> LanguageModel for Arc<M> {
    fn availability(&self) -> ModelAvailability {
        (**self).availability()
    }

    async fn respond(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
        (**self).respond(request).await
    }
}

/// A model that is always switched off.
///
/// Used for offline runs; the engine never calls [`LanguageModel::respond`]
/// on it, and doing so directly yields [`ModelError::Backend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableModel;

#[async_trait]
impl LanguageModel for UnavailableModel {
    fn availability(&self) -> ModelAvailability {
        ModelAvailability::Unavailable(UnavailableReason::Disabled)
    }

    async fn respond(&self, _request: &GenerationRequest) -> Result<Value, ModelError> {
        Err(ModelError::Backend {
            message: "language model is disabled".to_owned(),
        })
    }
}
