//! Test doubles for the model boundary, used by unit and behaviour tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use serde_json::Value;

use crate::{
    GenerationRequest, LanguageModel, ModelAvailability, ModelError, Trail,
    TrailRecommendationPayload, UnavailableReason,
};

/// Deterministic [`LanguageModel`] returning a pre-configured reply.
///
/// Every request passed to [`LanguageModel::respond`] is recorded so tests can
/// inspect the prompt the engine built.
#[derive(Debug)]
pub struct StubLanguageModel {
    availability: ModelAvailability,
    response: StubResponse,
    requests: Mutex<Vec<GenerationRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Value(Value),
    Error(ModelError),
}

impl StubLanguageModel {
    fn build(availability: ModelAvailability, response: StubResponse) -> Self {
        Self {
            availability,
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A model reporting `reason` that fails if asked anyway.
    #[must_use]
    pub fn unavailable(reason: UnavailableReason) -> Self {
        Self::build(
            ModelAvailability::Unavailable(reason),
            StubResponse::Error(ModelError::Backend {
                message: format!("stub model is unavailable ({reason})"),
            }),
        )
    }

    /// An available model answering with `value` verbatim.
    #[must_use]
    pub fn replying(value: Value) -> Self {
        Self::build(ModelAvailability::Available, StubResponse::Value(value))
    }

    /// An available model answering with a serialised `payload`.
    ///
    /// # Panics
    ///
    /// Panics when `payload` cannot be serialised.
    #[must_use]
    #[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
    pub fn replying_with(payload: &TrailRecommendationPayload) -> Self {
        Self::replying(serde_json::to_value(payload).expect("payload serialises to JSON"))
    }

    /// An available model whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: ModelError) -> Self {
        Self::build(ModelAvailability::Available, StubResponse::Error(error))
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of `respond` calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().map_or(0, |requests| requests.len())
    }
}

#[async_trait]
impl LanguageModel for StubLanguageModel {
    fn availability(&self) -> ModelAvailability {
        self.availability
    }

    async fn respond(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match &self.response {
            StubResponse::Value(value) => Ok(value.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Build a trail at the origin with the given name, difficulty and duration.
///
/// # Panics
///
/// Panics when `name` is blank.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
pub fn trail(name: &str, difficulty: &str, estimated_secs: u64) -> Trail {
    Trail::new(
        name,
        Coord { x: 0.0, y: 0.0 },
        difficulty,
        Duration::from_secs(estimated_secs),
    )
    .expect("test trail name must not be blank")
}
