//! The engine's output value.

use std::fmt;

use uuid::Uuid;

use crate::Trail;

/// Opaque unique identifier for a [`Recommendation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecommendationId(Uuid);

impl fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A display message plus the trail it refers to, if any.
///
/// The message is never blank. The suggested trail is a copy of the
/// catalogue record with the same [`crate::TrailId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    id: RecommendationId,
    message: String,
    suggested_trail: Option<Trail>,
}

impl Recommendation {
    /// Only the engine builds recommendations, after it has ensured the
    /// message is non-empty.
    pub(crate) fn new(message: String, suggested_trail: Option<Trail>) -> Self {
        debug_assert!(!message.trim().is_empty(), "recommendation message is blank");
        Self {
            id: RecommendationId(Uuid::new_v4()),
            message,
            suggested_trail,
        }
    }

    /// Unique identifier of this recommendation.
    #[must_use]
    pub const fn id(&self) -> RecommendationId {
        self.id
    }

    /// Text to show to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trail picked for the user, if any.
    #[must_use]
    pub const fn suggested_trail(&self) -> Option<&Trail> {
        self.suggested_trail.as_ref()
    }
}
