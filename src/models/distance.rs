use crate::constants::METERS_DISPLAY_THRESHOLD_KM;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Distance in kilometers
/// Prevents mixing up units and provides type safety
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceKm(pub f64);

impl DistanceKm {
    pub fn new(km: f64) -> Result<Self, String> {
        if km < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !km.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceKm(km))
    }

    pub fn as_meters(self) -> f64 {
        self.0 * 1000.0
    }

    /// Create from raw value without validation (use carefully)
    pub fn from_raw(km: f64) -> Self {
        DistanceKm(km)
    }

    /// Kilometers rounded to one decimal, as shown in itinerary totals.
    pub fn rounded(self) -> f64 {
        round_to_tenth(self.0)
    }
}

/// Human-readable form: whole meters below 1 km, else kilometers with one decimal.
impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < METERS_DISPLAY_THRESHOLD_KM {
            write!(f, "{:.0} m", self.as_meters())
        } else {
            write!(f, "{:.1} km", self.0)
        }
    }
}

impl Add for DistanceKm {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceKm(self.0 + other.0)
    }
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
