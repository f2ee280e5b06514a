use thiserror::Error;

use crate::PayloadError;

/// Errors from [`crate::LanguageModel::respond`].
///
/// This is the only failure the engine surfaces; it is passed through to the
/// caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The model refused or failed to generate a response.
    #[error("language model failed: {message}")]
    Backend {
        /// Description reported by the backend.
        message: String,
    },
    /// The model service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpStatus {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The request could not reach the model service.
    #[error("network error calling {url}: {message}")]
    Network {
        /// Endpoint that was called.
        url: String,
        /// Error description.
        message: String,
    },
    /// A configured request timeout elapsed.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was called.
        url: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The service response could not be decoded.
    #[error("invalid model response: {message}")]
    InvalidResponse {
        /// Decoding failure description.
        message: String,
    },
    /// The decoded output did not match the response schema.
    #[error("model output failed schema validation: {0}")]
    Schema(#[from] PayloadError),
    /// The request was cancelled before completing.
    #[error("model request was cancelled")]
    Cancelled,
}
