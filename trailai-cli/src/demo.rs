//! Built-in sample data used when no request file is given.

use std::time::Duration;

use geo::Coord;
use trailai_core::{Trail, TrailError};

use crate::request::RecommendationRequest;

const SECONDS_PER_MINUTE: u64 = 60;

/// Origin label reported when a demo trail fails validation.
pub(crate) const DEMO_ORIGIN: &str = "built-in demo data";

struct DemoTrail {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    difficulty: &'static str,
    minutes: u64,
}

const DEMO_TRAILS: [DemoTrail; 3] = [
    DemoTrail {
        name: "Riverside Loop",
        latitude: 37.3349,
        longitude: -122.0090,
        difficulty: "Easy",
        minutes: 45,
    },
    DemoTrail {
        name: "Summit Ascent",
        latitude: 37.3317,
        longitude: -122.0307,
        difficulty: "Hard",
        minutes: 95,
    },
    DemoTrail {
        name: "Cafe Stroll",
        latitude: 37.332,
        longitude: -122.029,
        difficulty: "Easy",
        minutes: 30,
    },
];

const DEMO_PREFERENCES: [&str; 3] = ["hiking", "cafes", "short walks"];
const DEMO_WEATHER: [&str; 1] = ["Sunny with a light breeze"];
const DEMO_NEARBY: [&str; 2] = ["Blue Bottle Coffee", "City Park Cafe"];

/// Build the demo request.
///
/// Returns the index of the offending trail alongside the validation error.
pub(crate) fn demo_request() -> Result<RecommendationRequest, (usize, TrailError)> {
    let trails = DEMO_TRAILS
        .iter()
        .enumerate()
        .map(|(index, demo)| {
            Trail::new(
                demo.name,
                Coord {
                    x: demo.longitude,
                    y: demo.latitude,
                },
                demo.difficulty,
                Duration::from_secs(demo.minutes.saturating_mul(SECONDS_PER_MINUTE)),
            )
            .map_err(|err| (index, err))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RecommendationRequest {
        trails,
        preferences: to_owned_all(&DEMO_PREFERENCES),
        weather: to_owned_all(&DEMO_WEATHER),
        nearby_places: to_owned_all(&DEMO_NEARBY),
    })
}

fn to_owned_all(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
