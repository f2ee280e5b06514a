//! Structured model output and the JSON schema describing it.
//!
//! Backends receive [`response_schema`] alongside the prompt and return a raw
//! JSON value. [`TrailRecommendationPayload::from_value`] checks that value
//! field by field and names the offending field in a [`PayloadError`].

use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

const FIELD_MESSAGE: &str = "message";
const FIELD_SUGGESTED_TRAIL_NAME: &str = "suggestedTrailName";
const FIELD_ESTIMATED_DURATION_MINUTES: &str = "estimatedDurationMinutes";
const FIELD_END_NEAR: &str = "endNear";

/// Recommendation fields produced by the language model.
///
/// Consumed immediately to build a [`crate::Recommendation`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailRecommendationPayload {
    /// Free-text recommendation, possibly empty.
    pub message: String,
    /// Name of the trail the model picked from the offered options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_trail_name: Option<String>,
    /// Duration the model quoted, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration_minutes: Option<u32>,
    /// Place the walk should finish near.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_near: Option<String>,
}

/// Errors returned by [`TrailRecommendationPayload::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The model output was not a JSON object.
    #[error("model output must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was returned instead.
        found: &'static str,
    },
    /// A required field was absent or `null`.
    #[error("model output is missing required field `{field}`")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// A field held a value of the wrong type.
    #[error("model output field `{field}` must be {expected}, found {found}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the accepted values.
        expected: &'static str,
        /// JSON type that was returned instead.
        found: &'static str,
    },
}

impl TrailRecommendationPayload {
    /// Validate a raw model response against the payload schema.
    ///
    /// Unknown fields are ignored. Optional fields may be absent or `null`.
    ///
    /// # Errors
    ///
    /// Returns a [`PayloadError`] when the value is not an object, when
    /// `message` is missing or not a string, or when an optional field has
    /// the wrong type. `estimatedDurationMinutes` must be a non-negative
    /// integer that fits in `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use trailai_core::TrailRecommendationPayload;
    ///
    /// let payload = TrailRecommendationPayload::from_value(json!({
    ///     "message": "Enjoy the sun on Riverside Loop.",
    ///     "suggestedTrailName": "Riverside Loop",
    ///     "estimatedDurationMinutes": null
    /// }))
    /// .expect("valid payload");
    /// assert_eq!(payload.suggested_trail_name.as_deref(), Some("Riverside Loop"));
    /// assert_eq!(payload.estimated_duration_minutes, None);
    /// ```
    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        let Value::Object(fields) = value else {
            return Err(PayloadError::NotAnObject {
                found: json_type(&value),
            });
        };
        let message = match fields.get(FIELD_MESSAGE) {
            None | Some(Value::Null) => {
                return Err(PayloadError::MissingField {
                    field: FIELD_MESSAGE,
                });
            }
            Some(Value::String(text)) => text.clone(),
            Some(other) => return Err(invalid(FIELD_MESSAGE, "a string", other)),
        };
        Ok(Self {
            message,
            suggested_trail_name: optional_string(&fields, FIELD_SUGGESTED_TRAIL_NAME)?,
            estimated_duration_minutes: optional_minutes(&fields)?,
            end_near: optional_string(&fields, FIELD_END_NEAR)?,
        })
    }
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, PayloadError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(invalid(field, "a string or null", other)),
    }
}

fn optional_minutes(fields: &Map<String, Value>) -> Result<Option<u32>, PayloadError> {
    const EXPECTED: &str = "a non-negative integer or null";
    match fields.get(FIELD_ESTIMATED_DURATION_MINUTES) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|minutes| u32::try_from(minutes).ok())
            .map(Some)
            .ok_or_else(|| invalid(FIELD_ESTIMATED_DURATION_MINUTES, EXPECTED, value)),
    }
}

fn invalid(field: &'static str, expected: &'static str, found: &Value) -> PayloadError {
    PayloadError::InvalidField {
        field,
        expected,
        found: json_type(found),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON schema sent to the model describing [`TrailRecommendationPayload`].
///
/// # Examples
///
/// ```
/// let schema = trailai_core::response_schema();
/// assert_eq!(schema["required"][0], "message");
/// ```
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            FIELD_MESSAGE: {
                "type": "string",
                "description": "One or two friendly sentences addressed to the user."
            },
            FIELD_SUGGESTED_TRAIL_NAME: {
                "type": ["string", "null"],
                "description": "Exact name of one of the offered trails, if suggesting one."
            },
            FIELD_ESTIMATED_DURATION_MINUTES: {
                "type": ["integer", "null"],
                "minimum": 0,
                "description": "Estimated walk duration in minutes."
            },
            FIELD_END_NEAR: {
                "type": ["string", "null"],
                "description": "Nearby place the walk could end near."
            }
        },
        "required": [FIELD_MESSAGE],
        "additionalProperties": false
    })
}
