//! JSON request files describing one recommendation.
//!
//! ```json
//! {
//!   "trails": [
//!     {
//!       "name": "Riverside Loop",
//!       "latitude": 37.3349,
//!       "longitude": -122.009,
//!       "difficulty": "Easy",
//!       "estimatedTimeSeconds": 2700
//!     }
//!   ],
//!   "preferences": ["hiking"],
//!   "weather": ["Sunny with a light breeze"],
//!   "nearbyPlaces": ["Blue Bottle Coffee"]
//! }
//! ```
//!
//! Every list defaults to empty.

use std::io::BufReader;
use std::time::Duration;

use camino::Utf8Path;
use geo::Coord;
use serde::Deserialize;
use trailai_core::{RecommendationInput, Trail, TrailError};
use trailai_fs::open_utf8_file;

use crate::CliError;

/// Owned inputs for one engine call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendationRequest {
    pub(crate) trails: Vec<Trail>,
    pub(crate) preferences: Vec<String>,
    pub(crate) weather: Vec<String>,
    pub(crate) nearby_places: Vec<String>,
}

impl RecommendationRequest {
    /// Borrow the request as engine input.
    pub(crate) fn input(&self) -> RecommendationInput<'_> {
        RecommendationInput::new(&self.trails, &self.preferences, &self.weather)
            .with_nearby_places(&self.nearby_places)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RequestFile {
    #[serde(default)]
    trails: Vec<TrailRecord>,
    #[serde(default)]
    preferences: Vec<String>,
    #[serde(default)]
    weather: Vec<String>,
    #[serde(default)]
    nearby_places: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TrailRecord {
    name: String,
    latitude: f64,
    longitude: f64,
    difficulty: String,
    estimated_time_seconds: u64,
}

impl TrailRecord {
    fn into_trail(self) -> Result<Trail, TrailError> {
        Trail::new(
            self.name,
            Coord {
                x: self.longitude,
                y: self.latitude,
            },
            self.difficulty,
            Duration::from_secs(self.estimated_time_seconds),
        )
    }
}

impl RequestFile {
    fn into_request(self) -> Result<RecommendationRequest, (usize, TrailError)> {
        let trails = self
            .trails
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_trail().map_err(|err| (index, err)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecommendationRequest {
            trails,
            preferences: self.preferences,
            weather: self.weather,
            nearby_places: self.nearby_places,
        })
    }
}

/// Loads a JSON-encoded request from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<RecommendationRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let parsed: RequestFile =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
            path: path.to_path_buf(),
            source,
        })?;
    parsed
        .into_request()
        .map_err(|(index, source)| CliError::InvalidTrail {
            origin: path.to_string(),
            index,
            source,
        })
}
