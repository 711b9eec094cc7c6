use crate::models::{DistanceKm, PointOfInterest};
use serde::{Deserialize, Serialize};

/// A catalog entry annotated with its distance from a reference point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyCandidate {
    #[serde(flatten)]
    pub poi: PointOfInterest,
    pub distance_km: f64,
    pub distance_formatted: String,
}

impl NearbyCandidate {
    pub fn new(poi: PointOfInterest, distance_km: f64) -> Self {
        NearbyCandidate {
            poi,
            distance_km,
            distance_formatted: DistanceKm::from_raw(distance_km).to_string(),
        }
    }
}
