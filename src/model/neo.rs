//! Near-Earth Object feed

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// NEO feed for a date window
///
/// `element_count` comes straight from the upstream and is not guaranteed to
/// equal the number of objects listed per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObjectFeed {
    #[serde(default)]
    pub element_count: u64,
    /// Objects keyed by ISO date, in the order the upstream listed them
    #[serde(default)]
    pub near_earth_objects: IndexMap<String, Vec<NearEarthObject>>,
}

impl NearEarthObjectFeed {
    /// Number of distinct dates in the feed
    pub fn days_tracked(&self) -> usize {
        self.near_earth_objects.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_approach_date: Option<String>,
    pub miss_distance: MissDistance,
}

/// Miss distance; the upstream encodes the numbers as strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

impl NearEarthObject {
    pub fn is_hazardous(&self) -> bool {
        self.is_potentially_hazardous_asteroid
    }

    /// Miss distance of the first close approach in km, NaN if missing or unparsable
    pub fn first_miss_distance_km(&self) -> f64 {
        self.close_approach_data
            .first()
            .and_then(|approach| approach.miss_distance.kilometers.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}
