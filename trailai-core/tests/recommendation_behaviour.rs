//! Behavioural tests for [`RecommendationEngine`].
//!
//! Scenarios run against [`StubLanguageModel`] so no model server is needed.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use trailai_core::test_support::{StubLanguageModel, trail};
use trailai_core::{
    ModelError, Recommendation, RecommendationEngine, RecommendationInput, Trail, UnavailableReason,
};

type OutcomeCell = RefCell<Option<Result<Recommendation, ModelError>>>;

#[derive(Debug, Default)]
struct RecommendationContext {
    trails: RefCell<Vec<Trail>>,
    weather: RefCell<Vec<String>>,
    nearby_places: RefCell<Vec<String>>,
    model: RefCell<Option<StubLanguageModel>>,
    outcome: OutcomeCell,
    model_calls: RefCell<usize>,
}

#[fixture]
fn context() -> RecommendationContext {
    RecommendationContext::default()
}

fn demo_catalogue() -> Vec<Trail> {
    vec![
        trail("Riverside Loop", "Easy", 45 * 60),
        trail("Summit Ascent", "Hard", 95 * 60),
        trail("Cafe Stroll", "Easy", 30 * 60),
    ]
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime")
        .block_on(future)
}

fn recommendation(ctx: &RecommendationContext) -> Recommendation {
    match ctx.outcome.borrow().as_ref() {
        Some(Ok(recommendation)) => recommendation.clone(),
        Some(Err(err)) => panic!("expected a recommendation, got {err}"),
        None => panic!("no recommendation was requested"),
    }
}

// --- Given steps ---

#[given("no trails are on offer")]
fn no_trails(#[from(context)] ctx: &RecommendationContext) {
    ctx.trails.borrow_mut().clear();
}

#[given("the cafe stroll is on offer")]
fn cafe_stroll(#[from(context)] ctx: &RecommendationContext) {
    *ctx.trails.borrow_mut() = vec![trail("Cafe Stroll", "Easy", 30 * 60)];
}

#[given("the demo catalogue is on offer")]
fn demo_trails(#[from(context)] ctx: &RecommendationContext) {
    *ctx.trails.borrow_mut() = demo_catalogue();
}

#[given("the weather is sunny with a light breeze")]
fn sunny(#[from(context)] ctx: &RecommendationContext) {
    *ctx.weather.borrow_mut() = vec!["Sunny with a light breeze".to_owned()];
}

#[given("the weather is overcast")]
fn overcast(#[from(context)] ctx: &RecommendationContext) {
    *ctx.weather.borrow_mut() = vec!["Overcast".to_owned()];
}

#[given("no nearby places are known")]
fn no_nearby_places(#[from(context)] ctx: &RecommendationContext) {
    ctx.nearby_places.borrow_mut().clear();
}

#[given("City Park Cafe is nearby")]
fn city_park_cafe(#[from(context)] ctx: &RecommendationContext) {
    *ctx.nearby_places.borrow_mut() = vec!["City Park Cafe".to_owned()];
}

#[given("the language model is unavailable")]
fn model_unavailable(#[from(context)] ctx: &RecommendationContext) {
    *ctx.model.borrow_mut() = Some(StubLanguageModel::unavailable(
        UnavailableReason::BackendUnreachable,
    ));
}

#[given("the model replies with an empty message for Summit Ascent ending near Blue Bottle Coffee")]
fn model_empty_message(#[from(context)] ctx: &RecommendationContext) {
    *ctx.model.borrow_mut() = Some(StubLanguageModel::replying(json!({
        "message": "",
        "suggestedTrailName": "Summit Ascent",
        "endNear": "Blue Bottle Coffee"
    })));
}

#[given("the model suggests riverside loop")]
fn model_suggests_known(#[from(context)] ctx: &RecommendationContext) {
    *ctx.model.borrow_mut() = Some(StubLanguageModel::replying(json!({
        "message": "Try the river path today.",
        "suggestedTrailName": "riverside loop"
    })));
}

#[given("the model suggests an unknown trail")]
fn model_suggests_unknown(#[from(context)] ctx: &RecommendationContext) {
    *ctx.model.borrow_mut() = Some(StubLanguageModel::replying(json!({
        "message": "Try the river path today.",
        "suggestedTrailName": "Moonlight Ridge"
    })));
}

#[given("the model fails with a network error")]
fn model_fails(#[from(context)] ctx: &RecommendationContext) {
    *ctx.model.borrow_mut() = Some(StubLanguageModel::failing(ModelError::Network {
        url: "http://localhost:11434/api/chat".to_owned(),
        message: "connection refused".to_owned(),
    }));
}

// --- When steps ---

#[when("I ask for a recommendation")]
fn ask(#[from(context)] ctx: &RecommendationContext) {
    let model = ctx
        .model
        .borrow_mut()
        .take()
        .expect("model must be configured");
    let engine = RecommendationEngine::new(model);
    let trails = ctx.trails.borrow();
    let weather = ctx.weather.borrow();
    let nearby_places = ctx.nearby_places.borrow();
    let input =
        RecommendationInput::new(&trails, &[], &weather).with_nearby_places(&nearby_places);

    let outcome = block_on(engine.generate_recommendation(&input));

    *ctx.model_calls.borrow_mut() = engine.model().call_count();
    *ctx.outcome.borrow_mut() = Some(outcome);
}

// --- Then steps ---

#[then("the message recommends a nearby walk in the sunshine")]
fn then_default_walk(#[from(context)] ctx: &RecommendationContext) {
    assert_eq!(
        recommendation(ctx).message(),
        "It's sunny with a light breeze. I recommend a nearby walk (~45 minutes)."
    );
}

#[then("the message recommends the cafe stroll ending near City Park Cafe")]
fn then_cafe_stroll(#[from(context)] ctx: &RecommendationContext) {
    assert_eq!(
        recommendation(ctx).message(),
        "It's overcast. I recommend Cafe Stroll (~30 minutes and you'll end near City Park Cafe)."
    );
}

#[then("the message recommends Summit Ascent ending near Blue Bottle Coffee")]
fn then_summit(#[from(context)] ctx: &RecommendationContext) {
    assert_eq!(
        recommendation(ctx).message(),
        "It's sunny with a light breeze. I recommend Summit Ascent (~95 minutes and you'll \
         end near Blue Bottle Coffee)."
    );
}

#[then("the model message is kept")]
fn then_model_message(#[from(context)] ctx: &RecommendationContext) {
    assert_eq!(recommendation(ctx).message(), "Try the river path today.");
}

#[then("no trail is suggested")]
fn then_no_trail(#[from(context)] ctx: &RecommendationContext) {
    assert!(recommendation(ctx).suggested_trail().is_none());
}

#[then("the suggested trail is Cafe Stroll")]
fn then_cafe_stroll_trail(#[from(context)] ctx: &RecommendationContext) {
    assert_suggested(ctx, "Cafe Stroll");
}

#[then("the suggested trail is Summit Ascent")]
fn then_summit_trail(#[from(context)] ctx: &RecommendationContext) {
    assert_suggested(ctx, "Summit Ascent");
}

#[then("the suggested trail is Riverside Loop")]
fn then_riverside_trail(#[from(context)] ctx: &RecommendationContext) {
    assert_suggested(ctx, "Riverside Loop");
}

fn assert_suggested(ctx: &RecommendationContext, expected: &str) {
    let outcome = recommendation(ctx);
    let suggested = outcome
        .suggested_trail()
        .expect("a trail should be suggested");
    assert_eq!(suggested.name(), expected);
    let offered = ctx.trails.borrow();
    assert!(
        offered.iter().any(|trail| trail.id() == suggested.id()),
        "suggested trail must come from the offered list"
    );
}

#[then("the model was not called")]
fn then_not_called(#[from(context)] ctx: &RecommendationContext) {
    assert_eq!(*ctx.model_calls.borrow(), 0);
}

#[then("a network error is returned")]
fn then_network_error(#[from(context)] ctx: &RecommendationContext) {
    let outcome = ctx.outcome.borrow();
    assert!(
        matches!(&*outcome, Some(Err(ModelError::Network { .. }))),
        "expected Network error, got {outcome:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/recommendation.feature", name = $title)]
        fn $fn_name(context: RecommendationContext) {
            let _ = context;
        }
    };
}

register_scenario!(
    offline_without_trails,
    "offline recommendation without trails"
);
register_scenario!(
    offline_first_trail,
    "offline recommendation picks the first trail"
);
register_scenario!(
    empty_message_composed,
    "empty model message is composed from the payload"
);
register_scenario!(
    case_insensitive_match,
    "model suggestion is matched ignoring case"
);
register_scenario!(
    unknown_suggestion,
    "unknown model suggestion keeps the message"
);
register_scenario!(model_failure, "model failure is reported");
