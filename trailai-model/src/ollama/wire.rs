//! Ollama API request and response bodies.
//!
//! Only the fields TrailAI reads or writes are modelled; everything else in
//! the responses is ignored.
//!
//! See: <https://github.com/ollama/ollama/blob/main/docs/api.md>

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    /// Model name, e.g. `"llama3.2"`.
    pub model: &'a str,
    /// System instructions followed by the user prompt.
    pub messages: [ChatMessage<'a>; 2],
    /// Always `false`: TrailAI wants one complete JSON document.
    pub stream: bool,
    /// JSON schema constraining the assistant output.
    pub format: &'a Value,
}

/// One chat turn in a [`ChatRequest`].
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    /// `"system"` or `"user"`.
    pub role: &'static str,
    /// Turn text.
    pub content: &'a str,
}

/// Body returned by `POST /api/chat` when streaming is disabled.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Assistant turn; absent when the server reports an error.
    #[serde(default)]
    pub message: Option<AssistantMessage>,
    /// Error reported by the server in an otherwise successful response.
    #[serde(default)]
    pub error: Option<String>,
}

/// Assistant turn inside a [`ChatResponse`].
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    /// Generated text; a JSON document when `format` was supplied.
    #[serde(default)]
    pub content: String,
}

/// Body returned by `GET /api/tags`.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    /// Locally installed models.
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// One installed model in a [`TagsResponse`].
#[derive(Debug, Deserialize)]
pub struct ModelTag {
    /// Model name including its tag, e.g. `"llama3.2:latest"`.
    pub name: String,
}

impl TagsResponse {
    /// Whether `model` is installed. A bare name matches its `:latest` tag.
    #[must_use]
    pub fn lists(&self, model: &str) -> bool {
        self.models
            .iter()
            .any(|tag| tag.name == model || tag.name.strip_suffix(":latest") == Some(model))
    }
}
