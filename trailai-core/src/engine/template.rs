//! The templated sentence used whenever the model's own text is unusable.

/// Trail name used when no trail is selected.
pub const DEFAULT_TRAIL_NAME: &str = "a nearby walk";

/// Minutes quoted when no trail or model estimate is available.
pub const DEFAULT_MINUTES: u64 = 45;

/// Inputs to [`compose`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TemplateFields<'a> {
    pub(crate) trail_name: &'a str,
    pub(crate) minutes: u64,
    pub(crate) end_near: Option<&'a str>,
}

/// Render the fallback sentence.
///
/// Weather is joined with `", "` and lowercased. The weather sentence is
/// dropped when there is no weather text, so the result always starts with
/// a full sentence.
pub(crate) fn compose(weather_summary: &[String], fields: TemplateFields<'_>) -> String {
    let weather = weather_summary.join(", ").trim().to_lowercase();
    let end = fields
        .end_near
        .map(|place| format!(" and you'll end near {place}"))
        .unwrap_or_default();
    let recommendation = format!(
        "I recommend {} (~{} minutes{end}).",
        fields.trail_name, fields.minutes
    );
    if weather.is_empty() {
        recommendation
    } else {
        format!("It's {weather}. {recommendation}")
    }
}

/// Treat blank place names as absent.
pub(crate) fn non_blank(place: &str) -> Option<&str> {
    let trimmed = place.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
