//! Property-based tests for the recommendation engine.
//!
//! # Invariants tested
//!
//! - **Non-empty message:** Every successful recommendation carries text.
//! - **Fallback duration:** The template quotes the first trail's rounded
//!   minutes, floored at five.
//! - **Offered trails only:** A suggested trail always comes from the input.

use std::time::Duration;

use geo::Coord;
use proptest::prelude::*;
use serde_json::json;
use trailai_core::{
    MIN_ESTIMATED_MINUTES, RecommendationEngine, RecommendationInput, Trail,
    fallback_recommendation,
};
use trailai_core::test_support::StubLanguageModel;

fn trail_strategy() -> impl Strategy<Value = Trail> {
    (
        "[A-Za-z][A-Za-z ]{0,20}",
        -90.0_f64..=90.0,
        -180.0_f64..=180.0,
        prop::sample::select(vec!["Easy", "Moderate", "Hard"]),
        0_u64..20_000,
    )
        .prop_map(|(name, latitude, longitude, difficulty, secs)| {
            Trail::new(
                name,
                Coord {
                    x: longitude,
                    y: latitude,
                },
                difficulty,
                Duration::from_secs(secs),
            )
            .expect("generated trail is valid")
        })
}

fn text_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ A-Za-z]{0,16}", 0..3)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime")
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the templated path always yields a non-empty message.
    #[test]
    fn fallback_message_is_never_empty(
        trails in prop::collection::vec(trail_strategy(), 0..4),
        weather in text_list(),
        nearby in text_list(),
    ) {
        let input = RecommendationInput::new(&trails, &[], &weather).with_nearby_places(&nearby);
        let recommendation = fallback_recommendation(&input);
        prop_assert!(!recommendation.message().trim().is_empty());
        prop_assert!(recommendation.message().contains("I recommend "));
    }

    /// Property: the fallback quotes the first trail's minutes, floored at five.
    #[test]
    fn fallback_quotes_first_trail_minutes(
        trails in prop::collection::vec(trail_strategy(), 1..4),
        weather in text_list(),
    ) {
        let input = RecommendationInput::new(&trails, &[], &weather);
        let first = &trails[0];
        let expected = (first.estimated_time().as_secs() / 60).max(MIN_ESTIMATED_MINUTES);

        let recommendation = fallback_recommendation(&input);

        let needle = format!("I recommend {} (~{expected} minutes", first.name());
        prop_assert!(
            recommendation.message().contains(&needle),
            "{:?} lacks {:?}", recommendation.message(), needle
        );
        prop_assert_eq!(
            recommendation.suggested_trail().map(Trail::id),
            Some(first.id())
        );
    }

    /// Property: model replies never produce an empty message or a trail
    /// outside the offered list.
    #[test]
    fn model_path_keeps_invariants(
        trails in prop::collection::vec(trail_strategy(), 0..4),
        weather in text_list(),
        nearby in text_list(),
        message in "[ A-Za-z.]{0,24}",
        suggestion in proptest::option::of("[A-Za-z ]{0,20}"),
        minutes in proptest::option::of(0_u32..300),
    ) {
        let engine = RecommendationEngine::new(StubLanguageModel::replying(json!({
            "message": message,
            "suggestedTrailName": suggestion,
            "estimatedDurationMinutes": minutes,
        })));
        let input = RecommendationInput::new(&trails, &[], &weather).with_nearby_places(&nearby);

        let recommendation = block_on(engine.generate_recommendation(&input))
            .expect("well-formed payload is accepted");

        prop_assert!(!recommendation.message().trim().is_empty());
        if let Some(suggested) = recommendation.suggested_trail() {
            prop_assert!(trails.iter().any(|trail| trail.id() == suggested.id()));
        }
    }
}
