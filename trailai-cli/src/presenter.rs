//! Display state for one recommendation screen.

use trailai_core::{LanguageModel, Recommendation, RecommendationEngine, RecommendationInput};

/// Text shown before anything has been generated.
pub const IDLE_PROMPT: &str =
    "Run `trailai recommend` to get a smart suggestion based on weather and your preferences.";

/// Loading flag, latest recommendation and latest error.
///
/// A recommendation takes precedence over an error when rendering, so a
/// failed refresh leaves the previous suggestion on screen.
#[derive(Debug, Clone, Default)]
pub struct RecommendationPresenter {
    is_generating: bool,
    recommendation: Option<Recommendation>,
    error_message: Option<String>,
}

impl RecommendationPresenter {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Most recent successful recommendation.
    #[must_use]
    pub const fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Error text from the most recent failed request.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Run the engine and store its outcome.
    ///
    /// The loading flag is set for the duration of the call and cleared on
    /// both the success and the failure path.
    pub async fn generate<M: LanguageModel>(
        &mut self,
        engine: &RecommendationEngine<M>,
        input: &RecommendationInput<'_>,
    ) {
        self.is_generating = true;
        self.error_message = None;
        match engine.generate_recommendation(input).await {
            Ok(recommendation) => self.recommendation = Some(recommendation),
            Err(err) => {
                log::warn!("recommendation failed: {err}");
                self.error_message = Some(err.to_string());
            }
        }
        self.is_generating = false;
    }

    /// Text for the current state.
    #[must_use]
    pub fn render(&self) -> String {
        self.recommendation.as_ref().map_or_else(
            || {
                self.error_message
                    .clone()
                    .unwrap_or_else(|| IDLE_PROMPT.to_owned())
            },
            render_recommendation,
        )
    }
}

fn render_recommendation(recommendation: &Recommendation) -> String {
    recommendation.suggested_trail().map_or_else(
        || recommendation.message().to_owned(),
        |trail| {
            format!(
                "{}\n\nSuggested trail: {}\nDifficulty: {}",
                recommendation.message(),
                trail.name(),
                trail.difficulty()
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use trailai_core::test_support::{StubLanguageModel, trail};
    use trailai_core::{ModelError, TrailRecommendationPayload, UnavailableReason};

    #[rstest]
    fn idle_presenter_shows_prompt() {
        let presenter = RecommendationPresenter::default();
        assert!(!presenter.is_generating());
        assert_eq!(presenter.render(), IDLE_PROMPT);
    }

    #[rstest]
    #[tokio::test]
    async fn success_stores_recommendation_and_clears_loading() {
        let trails = vec![trail("Cafe Stroll", "Easy", 1800)];
        let engine = RecommendationEngine::new(StubLanguageModel::unavailable(
            UnavailableReason::Disabled,
        ));
        let mut presenter = RecommendationPresenter::default();

        presenter
            .generate(&engine, &RecommendationInput::new(&trails, &[], &[]))
            .await;

        assert!(!presenter.is_generating());
        assert!(presenter.error_message().is_none());
        assert_eq!(
            presenter.render(),
            "I recommend Cafe Stroll (~30 minutes).\n\nSuggested trail: Cafe Stroll\nDifficulty: Easy"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn failure_stores_error_and_clears_loading() {
        let engine = RecommendationEngine::new(StubLanguageModel::failing(ModelError::Cancelled));
        let mut presenter = RecommendationPresenter::default();

        presenter
            .generate(&engine, &RecommendationInput::default())
            .await;

        assert!(!presenter.is_generating());
        assert!(presenter.recommendation().is_none());
        assert_eq!(
            presenter.error_message(),
            Some("model request was cancelled")
        );
        assert_eq!(presenter.render(), "model request was cancelled");
    }

    #[rstest]
    #[tokio::test]
    async fn failure_after_success_keeps_previous_recommendation() {
        let mut presenter = RecommendationPresenter::default();
        let ok_engine = RecommendationEngine::new(StubLanguageModel::replying_with(
            &TrailRecommendationPayload {
                message: "Stretch your legs by the river.".to_owned(),
                ..TrailRecommendationPayload::default()
            },
        ));
        presenter
            .generate(&ok_engine, &RecommendationInput::default())
            .await;

        let failing_engine =
            RecommendationEngine::new(StubLanguageModel::failing(ModelError::Cancelled));
        presenter
            .generate(&failing_engine, &RecommendationInput::default())
            .await;

        assert!(!presenter.is_generating());
        assert!(presenter.error_message().is_some());
        assert_eq!(presenter.render(), "Stretch your legs by the river.");
    }
}
