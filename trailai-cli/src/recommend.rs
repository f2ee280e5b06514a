//! Recommend command implementation for the TrailAI CLI.

use std::io::Write;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailai_core::{LanguageModel, RecommendationEngine, UnavailableModel};
use trailai_fs::file_is_file;
use trailai_model::{OllamaConfig, OllamaLanguageModel};

use crate::demo::{DEMO_ORIGIN, demo_request};
use crate::presenter::RecommendationPresenter;
use crate::request::{RecommendationRequest, load_request};
use crate::{ARG_MODEL, ARG_MODEL_URL, ARG_OFFLINE, ARG_REQUEST, CliError};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend a trail using the built-in demo data or a \
                 JSON request file. The recommendation comes from a local \
                 Ollama model when it is reachable and installed, and from a \
                 fixed template otherwise.",
    about = "Recommend a trail"
)]
#[ortho_config(prefix = "TRAILAI")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON request with trails, preferences, weather and nearby places.
    #[arg(long = ARG_REQUEST, value_name = "path")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Base URL of the Ollama server (e.g. "http://localhost:11434").
    #[arg(long = ARG_MODEL_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) model_url: Option<String>,
    /// Name of the Ollama model to use.
    #[arg(long = ARG_MODEL, value_name = "name")]
    #[serde(default)]
    pub(crate) model: Option<String>,
    /// Skip the language model and use the templated recommendation.
    #[arg(
        long = ARG_OFFLINE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) offline: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RecommendConfig::from(merged))
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file; demo data when absent.
    pub(crate) request: Option<Utf8PathBuf>,
    /// Ollama server URL.
    pub(crate) model_url: String,
    /// Ollama model name.
    pub(crate) model: String,
    /// Whether to bypass the language model.
    pub(crate) offline: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.request {
            Some(path) => Self::require_existing(path, ARG_REQUEST),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn load_request(&self) -> Result<RecommendationRequest, CliError> {
        match &self.request {
            Some(path) => load_request(path),
            None => demo_request().map_err(|(index, source)| CliError::InvalidTrail {
                origin: DEMO_ORIGIN.to_owned(),
                index,
                source,
            }),
        }
    }
}

impl From<RecommendArgs> for RecommendConfig {
    fn from(args: RecommendArgs) -> Self {
        let defaults = OllamaConfig::default();
        Self {
            request: args.request,
            model_url: args.model_url.unwrap_or(defaults.base_url),
            model: args.model.unwrap_or(defaults.model),
            offline: args.offline.unwrap_or(false),
        }
    }
}

/// Builds the language model for the current recommend invocation.
#[async_trait(?Send)]
pub(super) trait ModelBuilder {
    async fn build(&self, config: &RecommendConfig) -> Result<Box<dyn LanguageModel>, CliError>;
}

/// Builds an Ollama client and probes it, or the disabled model when
/// running offline.
pub(super) struct DefaultModelBuilder;

#[async_trait(?Send)]
impl ModelBuilder for DefaultModelBuilder {
    async fn build(&self, config: &RecommendConfig) -> Result<Box<dyn LanguageModel>, CliError> {
        if config.offline {
            return Ok(Box::new(UnavailableModel));
        }
        let model = OllamaLanguageModel::with_config(OllamaConfig::new(
            config.model_url.clone(),
            config.model.clone(),
        ))
        .map_err(|source| CliError::BuildModel {
            base_url: config.model_url.clone(),
            source,
        })?;
        model.refresh_availability().await;
        Ok(Box::new(model))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(run_recommend_with(args, &DefaultModelBuilder, &mut stdout))
}

pub(super) async fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn ModelBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    execute_recommend(&config, builder, writer).await
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) async fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn ModelBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request = config.load_request()?;
    let engine = RecommendationEngine::new(builder.build(config).await?);
    let mut presenter = RecommendationPresenter::default();
    presenter.generate(&engine, &request.input()).await;
    if let Some(message) = presenter.error_message() {
        return Err(CliError::Generation {
            message: message.to_owned(),
        });
    }
    write_rendered(writer, &presenter)
}

fn write_rendered(writer: &mut dyn Write, presenter: &RecommendationPresenter) -> Result<(), CliError> {
    writer
        .write_all(presenter.render().as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(RecommendConfig::from(merged))
}
