//! [`LanguageModel`] implementation backed by an Ollama server.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use trailai_core::{
    GenerationRequest, LanguageModel, ModelAvailability, ModelError, UnavailableReason,
};

use super::wire::{ChatMessage, ChatRequest, ChatResponse, TagsResponse};

/// Default user agent for Ollama requests.
pub const DEFAULT_USER_AGENT: &str = "trailai/0.1";

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.2";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Error type for [`OllamaLanguageModel`] construction failures.
#[derive(Debug, Error)]
pub enum ModelBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`OllamaLanguageModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server (e.g. `"http://localhost:11434"`).
    pub base_url: String,
    /// Model to generate with.
    pub model: String,
    /// Overall request timeout. `None` waits for as long as the model takes.
    pub request_timeout: Option<Duration>,
    /// Timeout for establishing connections, including availability probes.
    pub connect_timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            request_timeout: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OllamaConfig {
    /// Create a configuration for `model` served from `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Bound the total time of each request.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Ollama-backed language model.
///
/// Availability starts as [`UnavailableReason::Unknown`] and is updated by
/// [`OllamaLanguageModel::refresh_availability`]. Generation requests are
/// independent and may run concurrently.
#[derive(Debug)]
pub struct OllamaLanguageModel {
    client: Client,
    config: OllamaConfig,
    availability: RwLock<ModelAvailability>,
}

impl OllamaLanguageModel {
    /// Create a model handle with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ModelBuildError> {
        Self::with_config(OllamaConfig::new(base_url, model))
    }

    /// Create a model handle with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: OllamaConfig) -> Result<Self, ModelBuildError> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ModelBuildError::HttpClient)?;
        Ok(Self {
            client,
            config,
            availability: RwLock::new(ModelAvailability::Unavailable(UnavailableReason::Unknown)),
        })
    }

    /// The configuration this handle was built with.
    #[must_use]
    pub const fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Probe the server and cache the resulting availability.
    ///
    /// Never fails: an unreachable server reads as
    /// [`UnavailableReason::BackendUnreachable`] and an undecodable listing
    /// as [`UnavailableReason::Unknown`].
    pub async fn refresh_availability(&self) -> ModelAvailability {
        let state = self.probe().await;
        log::debug!("model {} is {state}", self.config.model);
        self.store_availability(state);
        state
    }

    async fn probe(&self) -> ModelAvailability {
        let url = self.endpoint("tags");
        let response = match self
            .client
            .get(&url)
            .send()
            .await
            .and_then(Response::error_for_status)
        {
            Ok(response) => response,
            Err(err) => {
                log::warn!("availability probe to {url} failed: {err}");
                return ModelAvailability::Unavailable(UnavailableReason::BackendUnreachable);
            }
        };
        match response.json::<TagsResponse>().await {
            Ok(tags) => self.availability_from_tags(&tags),
            Err(err) => {
                log::warn!("could not decode model listing from {url}: {err}");
                ModelAvailability::Unavailable(UnavailableReason::Unknown)
            }
        }
    }

    fn availability_from_tags(&self, tags: &TagsResponse) -> ModelAvailability {
        if tags.lists(&self.config.model) {
            ModelAvailability::Available
        } else {
            ModelAvailability::Unavailable(UnavailableReason::ModelNotReady)
        }
    }

    fn store_availability(&self, state: ModelAvailability) {
        if let Ok(mut current) = self.availability.write() {
            *current = state;
        }
    }

    /// Build an API URL as `{base_url}/api/{path}`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn build_chat_request<'a>(&'a self, request: &'a GenerationRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.instructions(),
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt(),
                },
            ],
            stream: false,
            format: request.schema(),
        }
    }

    async fn chat(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
        let url = self.endpoint("chat");

        let response = self
            .client
            .post(&url)
            .json(&self.build_chat_request(request))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                log::debug!("could not read error body from {url}: {err}");
                String::new()
            });
            return Err(ModelError::HttpStatus {
                url,
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|err| ModelError::InvalidResponse {
                    message: err.to_string(),
                })?;

        convert_response(chat_response)
    }

    /// Convert a reqwest error to a `ModelError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ModelError {
        if error.is_timeout() {
            return ModelError::Timeout {
                url: url.to_owned(),
                timeout_secs: self
                    .config
                    .request_timeout
                    .unwrap_or(self.config.connect_timeout)
                    .as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ModelError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        ModelError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Describe a non-success response, preferring the server's `error` field.
fn status_message(status: StatusCode, body: &str) -> String {
    if let Some(error) = serde_json::from_str::<ChatResponse>(body)
        .ok()
        .and_then(|response| response.error)
    {
        return error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_owned()
    }
}

/// Extract the assistant's JSON document from a chat response.
fn convert_response(response: ChatResponse) -> Result<Value, ModelError> {
    if let Some(message) = response.error {
        return Err(ModelError::Backend { message });
    }
    let content = response
        .message
        .map(|message| message.content)
        .unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ModelError::InvalidResponse {
            message: "chat response has no assistant content".to_owned(),
        });
    }
    serde_json::from_str(&content).map_err(|err| ModelError::InvalidResponse {
        message: format!("assistant content is not JSON: {err}"),
    })
}

#[async_trait]
impl LanguageModel for OllamaLanguageModel {
    fn availability(&self) -> ModelAvailability {
        self.availability.read().map_or(
            ModelAvailability::Unavailable(UnavailableReason::Unknown),
            |current| *current,
        )
    }

    async fn respond(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
        self.chat(request).await
    }
}
