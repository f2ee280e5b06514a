//! Fixed instructions and prompt serialisation for the model-assisted path.

use crate::{RecommendationInput, Trail};

/// Role and constraints handed to the model on every request.
pub const INSTRUCTIONS: &str = "\
You are TrailAI, an assistant that recommends outdoor routes and places.
Constraints:
- Keep the message to 1-2 sentences.
- Be friendly and address the user in the second person.
- Reference today's weather succinctly.
- Suggest a trail by name only if it appears in the provided options.
- If appropriate, mention an estimated duration like \"~45 minutes\".
- Optionally mention a nearby place to end near (e.g., a cafe) if provided.
- Be safe: avoid risky suggestions in severe weather.
Output using the provided schema fields.";

const LIST_SEPARATOR: &str = ", ";
const NONE_LABEL: &str = "none";

/// Serialise the request inputs into the user prompt.
///
/// Weather is passed through with its original casing.
///
/// # Examples
///
/// ```
/// use trailai_core::{RecommendationInput, build_prompt};
///
/// let weather = vec!["Sunny with a light breeze".to_owned()];
/// let input = RecommendationInput::new(&[], &[], &weather);
/// let prompt = build_prompt(&input);
/// assert!(prompt.contains("Weather: Sunny with a light breeze"));
/// assert!(prompt.contains("Nearby places: none"));
/// ```
#[must_use]
pub fn build_prompt(input: &RecommendationInput<'_>) -> String {
    let nearby = if input.nearby_places.is_empty() {
        NONE_LABEL.to_owned()
    } else {
        input.nearby_places.join(LIST_SEPARATOR)
    };
    let trail_lines = if input.trails.is_empty() {
        NONE_LABEL.to_owned()
    } else {
        input
            .trails
            .iter()
            .map(trail_line)
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "User preferences: {preferences}\n\
         Weather: {weather}\n\
         Nearby places: {nearby}\n\
         Trail options:\n{trail_lines}\n\
         Create a concise recommendation.",
        preferences = input.preferences.join(LIST_SEPARATOR),
        weather = input.weather_summary.join(LIST_SEPARATOR),
    )
}

/// One catalogue entry as offered to the model.
#[must_use]
pub fn trail_line(trail: &Trail) -> String {
    format!(
        "- {} - difficulty: {} - est: {}m - lat: {}",
        trail.name(),
        trail.difficulty(),
        trail.estimated_minutes(),
        trail.latitude()
    )
}
