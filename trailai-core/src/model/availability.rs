use std::fmt;

/// Readiness reported by a [`crate::LanguageModel`].
///
/// Only [`ModelAvailability::Available`] permits a model call. The enum is
/// non-exhaustive: callers must treat any other variant, including ones added
/// later, as unavailable. [`ModelAvailability::is_available`] does exactly
/// that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelAvailability {
    /// The model can serve requests.
    Available,
    /// The model cannot serve requests right now.
    Unavailable(UnavailableReason),
}

impl ModelAvailability {
    /// Whether the model is ready to serve a request.
    ///
    /// # Examples
    /// ```
    /// use trailai_core::{ModelAvailability, UnavailableReason};
    ///
    /// assert!(ModelAvailability::Available.is_available());
    /// assert!(!ModelAvailability::Unavailable(UnavailableReason::Disabled).is_available());
    /// ```
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for ModelAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Unavailable(reason) => write!(f, "unavailable ({reason})"),
        }
    }
}

/// Why a model reported itself unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnavailableReason {
    /// Model use is switched off for this run.
    Disabled,
    /// The model service could not be reached.
    BackendUnreachable,
    /// The service is up but the model is not installed or still loading.
    ModelNotReady,
    /// Readiness has not been established.
    Unknown,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Disabled => "disabled",
            Self::BackendUnreachable => "backend unreachable",
            Self::ModelNotReady => "model not ready",
            Self::Unknown => "unknown",
        };
        f.write_str(text)
    }
}
