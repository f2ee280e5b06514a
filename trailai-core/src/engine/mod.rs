//! Turn trails, preferences, weather and nearby places into a
//! [`Recommendation`].
//!
//! The engine asks the model for help only when it reports itself
//! [`crate::ModelAvailability::Available`]; otherwise it renders a fixed
//! template. On the model path an empty message is replaced by the same
//! template, filled from the payload where it has the data.

mod template;

pub use template::{DEFAULT_MINUTES, DEFAULT_TRAIL_NAME};

use template::{TemplateFields, compose, non_blank};

use crate::{
    GenerationRequest, INSTRUCTIONS, LanguageModel, ModelError, Recommendation, Trail,
    TrailRecommendationPayload, build_prompt, response_schema,
};

/// Borrowed inputs for one recommendation.
///
/// # Examples
///
/// ```
/// use trailai_core::RecommendationInput;
///
/// let weather = vec!["Overcast".to_owned()];
/// let nearby = vec!["City Park Cafe".to_owned()];
/// let input = RecommendationInput::new(&[], &[], &weather).with_nearby_places(&nearby);
/// assert_eq!(input.nearby_places.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationInput<'a> {
    /// Candidate trails in catalogue order.
    pub trails: &'a [Trail],
    /// Free-text user preferences.
    pub preferences: &'a [String],
    /// Weather description fragments, joined with `", "`.
    pub weather_summary: &'a [String],
    /// Nearby places the walk could end near.
    pub nearby_places: &'a [String],
}

impl<'a> RecommendationInput<'a> {
    /// Build an input with no nearby places.
    #[must_use]
    pub const fn new(
        trails: &'a [Trail],
        preferences: &'a [String],
        weather_summary: &'a [String],
    ) -> Self {
        Self {
            trails,
            preferences,
            weather_summary,
            nearby_places: &[],
        }
    }

    /// Set the nearby places.
    #[must_use]
    pub const fn with_nearby_places(mut self, nearby_places: &'a [String]) -> Self {
        self.nearby_places = nearby_places;
        self
    }

    fn first_nearby_place(&self) -> Option<&'a str> {
        self.nearby_places
            .first()
            .and_then(|place| non_blank(place))
    }
}

/// Stateless recommendation service over a [`LanguageModel`] handle.
///
/// The engine keeps no state between calls, so one instance can serve
/// concurrent requests whenever the model handle can.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine<M> {
    model: M,
}

impl<M> RecommendationEngine<M> {
    /// Wrap a model handle.
    #[must_use]
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    /// The underlying model handle.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }
}

impl<M: LanguageModel> RecommendationEngine<M> {
    /// Produce a recommendation for `input`.
    ///
    /// When the model is unavailable this never fails and returns
    /// [`fallback_recommendation`]. Otherwise the model is called once, with
    /// no retry and no timeout of its own.
    ///
    /// # Errors
    ///
    /// Returns the model's [`ModelError`] unchanged, or
    /// [`ModelError::Schema`] when its output does not match
    /// [`response_schema`].
    pub async fn generate_recommendation(
        &self,
        input: &RecommendationInput<'_>,
    ) -> Result<Recommendation, ModelError> {
        let availability = self.model.availability();
        if !availability.is_available() {
            log::debug!("language model {availability}; using templated recommendation");
            return Ok(fallback_recommendation(input));
        }

        let request = GenerationRequest::new(INSTRUCTIONS, build_prompt(input), response_schema());
        log::debug!(
            "requesting recommendation over {} trail option(s)",
            input.trails.len()
        );
        let raw = self.model.respond(&request).await?;
        let payload = TrailRecommendationPayload::from_value(raw)?;
        Ok(resolve_payload(input, &payload))
    }
}

/// Deterministic recommendation used when the model cannot be asked.
///
/// Picks the first trail, if any, and ends near the first nearby place, if
/// any.
///
/// # Examples
///
/// ```
/// use trailai_core::{RecommendationInput, fallback_recommendation};
///
/// let recommendation = fallback_recommendation(&RecommendationInput::default());
/// assert_eq!(recommendation.message(), "I recommend a nearby walk (~45 minutes).");
/// assert!(recommendation.suggested_trail().is_none());
/// ```
#[must_use]
pub fn fallback_recommendation(input: &RecommendationInput<'_>) -> Recommendation {
    let trail = input.trails.first();
    let message = compose(
        input.weather_summary,
        TemplateFields {
            trail_name: trail.map_or(DEFAULT_TRAIL_NAME, Trail::name),
            minutes: trail.map_or(DEFAULT_MINUTES, Trail::estimated_minutes),
            end_near: input.first_nearby_place(),
        },
    );
    Recommendation::new(message, trail.cloned())
}

fn resolve_payload(
    input: &RecommendationInput<'_>,
    payload: &TrailRecommendationPayload,
) -> Recommendation {
    let selected = payload
        .suggested_trail_name
        .as_deref()
        .and_then(|name| select_trail(input.trails, name));

    let trimmed = payload.message.trim();
    let message = if trimmed.is_empty() {
        log::debug!("model returned an empty message; composing one from its fields");
        compose(
            input.weather_summary,
            TemplateFields {
                trail_name: selected.map_or(DEFAULT_TRAIL_NAME, Trail::name),
                minutes: payload
                    .estimated_duration_minutes
                    .map(u64::from)
                    .or_else(|| selected.map(Trail::estimated_minutes))
                    .unwrap_or(DEFAULT_MINUTES),
                end_near: payload
                    .end_near
                    .as_deref()
                    .map_or_else(|| input.first_nearby_place(), non_blank),
            },
        )
    } else {
        trimmed.to_owned()
    };
    Recommendation::new(message, selected.cloned())
}

fn select_trail<'a>(trails: &'a [Trail], name: &str) -> Option<&'a Trail> {
    let found = trails.iter().find(|trail| trail.name_matches(name));
    if found.is_none() {
        log::warn!("model suggested {name:?}, which is not among the offered trails");
    }
    found
}
