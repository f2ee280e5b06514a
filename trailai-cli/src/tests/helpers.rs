//! Shared fixtures for CLI tests.

use std::fs;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;
use trailai_core::LanguageModel;
use trailai_core::test_support::StubLanguageModel;

use super::*;
use crate::recommend::{ModelBuilder, RecommendConfig};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn config_for(request: Option<Utf8PathBuf>) -> RecommendConfig {
    RecommendConfig {
        request,
        model_url: "http://localhost:11434".to_owned(),
        model: "llama3.2".to_owned(),
        offline: false,
    }
}

/// Model reply handed out by [`StubModelBuilder`].
#[derive(Debug, Clone)]
pub(super) enum StubReply {
    Unavailable,
    Value(Value),
    Failure(trailai_core::ModelError),
}

/// Builder producing a fresh stub model per invocation.
#[derive(Debug, Clone)]
pub(super) struct StubModelBuilder {
    reply: StubReply,
}

impl StubModelBuilder {
    pub(super) const fn new(reply: StubReply) -> Self {
        Self { reply }
    }
}

#[async_trait(?Send)]
impl ModelBuilder for StubModelBuilder {
    async fn build(&self, _config: &RecommendConfig) -> Result<Box<dyn LanguageModel>, CliError> {
        let model = match &self.reply {
            StubReply::Unavailable => {
                StubLanguageModel::unavailable(trailai_core::UnavailableReason::ModelNotReady)
            }
            StubReply::Value(value) => StubLanguageModel::replying(value.clone()),
            StubReply::Failure(error) => StubLanguageModel::failing(error.clone()),
        };
        Ok(Box::new(model))
    }
}

pub(super) const SAMPLE_REQUEST: &str = r#"{
  "trails": [
    {
      "name": "Riverside Loop",
      "latitude": 37.3349,
      "longitude": -122.009,
      "difficulty": "Easy",
      "estimatedTimeSeconds": 2700
    },
    {
      "name": "Cafe Stroll",
      "latitude": 37.332,
      "longitude": -122.029,
      "difficulty": "Easy",
      "estimatedTimeSeconds": 1800
    }
  ],
  "preferences": ["cafes"],
  "weather": ["Overcast"],
  "nearbyPlaces": ["City Park Cafe"]
}"#;
