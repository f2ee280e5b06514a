//! Trail catalogue records.
//!
//! A [`Trail`] is immutable once built. The catalogue that loads trails owns
//! them; recommendations carry clones that keep the same [`TrailId`].

use std::fmt;
use std::time::Duration;

use geo::Coord;
use thiserror::Error;
use uuid::Uuid;

/// Lower bound applied when converting a trail duration to whole minutes.
pub const MIN_ESTIMATED_MINUTES: u64 = 5;

const SECONDS_PER_MINUTE: u64 = 60;

/// Opaque unique identifier for a [`Trail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrailId(Uuid);

impl TrailId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TrailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A candidate outdoor route.
///
/// `location.x` holds the longitude and `location.y` the latitude, both in
/// degrees, following the `geo` convention.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use trailai_core::Trail;
///
/// # fn main() -> Result<(), trailai_core::TrailError> {
/// let trail = Trail::new(
///     "Cafe Stroll",
///     Coord { x: -122.029, y: 37.332 },
///     "Easy",
///     Duration::from_secs(30 * 60),
/// )?;
/// assert_eq!(trail.estimated_minutes(), 30);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    id: TrailId,
    name: String,
    location: Coord<f64>,
    difficulty: String,
    estimated_time: Duration,
}

/// Errors returned by [`Trail::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrailError {
    /// The trail name was empty or whitespace.
    #[error("trail name must not be blank")]
    EmptyName,
    /// Latitude or longitude was non-finite or out of range.
    #[error("trail coordinate must be a finite longitude in [-180, 180] and latitude in [-90, 90]")]
    InvalidCoordinate,
}

impl Trail {
    /// Validates and constructs a [`Trail`] with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::EmptyName`] for a blank name and
    /// [`TrailError::InvalidCoordinate`] when `location` is not a valid
    /// longitude/latitude pair.
    pub fn new(
        name: impl Into<String>,
        location: Coord<f64>,
        difficulty: impl Into<String>,
        estimated_time: Duration,
    ) -> Result<Self, TrailError> {
        let trail_name = name.into();
        if trail_name.trim().is_empty() {
            return Err(TrailError::EmptyName);
        }
        if !is_valid_location(location) {
            return Err(TrailError::InvalidCoordinate);
        }
        Ok(Self {
            id: TrailId::random(),
            name: trail_name,
            location,
            difficulty: difficulty.into(),
            estimated_time,
        })
    }

    /// Identifier shared by every clone of this record.
    #[must_use]
    pub const fn id(&self) -> TrailId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the trailhead.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Free-form difficulty label, e.g. `"Easy"`.
    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    /// Estimated time needed to walk the trail.
    #[must_use]
    pub const fn estimated_time(&self) -> Duration {
        self.estimated_time
    }

    /// Estimated duration in whole minutes, never below
    /// [`MIN_ESTIMATED_MINUTES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use geo::Coord;
    /// use trailai_core::Trail;
    ///
    /// let trail = Trail::new("Quick Loop", Coord { x: 0.0, y: 0.0 }, "Easy", Duration::from_secs(90))
    ///     .expect("valid trail");
    /// assert_eq!(trail.estimated_minutes(), 5);
    /// ```
    #[must_use]
    pub const fn estimated_minutes(&self) -> u64 {
        let minutes = self.estimated_time.as_secs().div_euclid(SECONDS_PER_MINUTE);
        if minutes < MIN_ESTIMATED_MINUTES {
            MIN_ESTIMATED_MINUTES
        } else {
            minutes
        }
    }

    /// Case-insensitive exact comparison against `candidate`.
    #[must_use]
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.to_lowercase() == candidate.to_lowercase()
    }
}

fn is_valid_location(location: Coord<f64>) -> bool {
    let Coord { x: longitude, y: latitude } = location;
    longitude.is_finite()
        && latitude.is_finite()
        && (-180.0..=180.0).contains(&longitude)
        && (-90.0..=90.0).contains(&latitude)
}
