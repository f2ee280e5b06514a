//! Error types emitted by the TrailAI CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use trailai_core::TrailError;
use trailai_model::ModelBuildError;

/// Errors emitted by the TrailAI CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the request file failed.
    #[error("failed to open recommendation request at {path:?}: {source}")]
    OpenRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse recommendation request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A trail in the request was rejected.
    #[error("trail #{index} in {origin} is invalid: {source}")]
    InvalidTrail {
        /// Where the trail came from: a path or the built-in demo data.
        origin: String,
        /// Zero-based position of the trail.
        index: usize,
        /// Validation failure.
        #[source]
        source: TrailError,
    },
    /// Constructing the language model client failed.
    #[error("failed to build language model client for {base_url:?}: {source}")]
    BuildModel {
        /// Configured server URL.
        base_url: String,
        /// Underlying failure.
        #[source]
        source: ModelBuildError,
    },
    /// Building the async runtime failed.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The language model failed to produce a recommendation.
    #[error("failed to generate a recommendation: {message}")]
    Generation {
        /// Error text shown to the user.
        message: String,
    },
    /// Writing the recommendation failed.
    #[error("failed to write recommendation: {0}")]
    WriteOutput(#[source] std::io::Error),
}
