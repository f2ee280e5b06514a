//! Command-line presentation layer for the TrailAI recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod demo;
mod error;
mod presenter;
mod recommend;
mod request;

pub use error::CliError;
pub use presenter::RecommendationPresenter;

use recommend::RecommendArgs;

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_MODEL_URL: &str = "model-url";
pub(crate) const ARG_MODEL: &str = "model";
pub(crate) const ARG_OFFLINE: &str = "offline";

/// Run the TrailAI CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, when
/// the request cannot be loaded, or when the model fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trailai",
    about = "Weather-aware trail recommendations from a local language model",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend a trail for the demo data or a JSON request.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
