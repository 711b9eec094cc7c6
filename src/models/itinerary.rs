use crate::config::PlannerConfig;
use crate::error::{AppError, Result};
use crate::models::NearbyCandidate;
use serde::{Deserialize, Serialize};
use time::Time;

/// One stop of a planned itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryStop {
    #[serde(flatten)]
    pub candidate: NearbyCandidate,
    /// 1-based position in the itinerary
    pub order: u32,
    pub visit_duration_hours: f64,
    /// Travel time from the previous stop, or from the origin for the first one
    pub travel_time_minutes: u32,
    /// Great-circle length of the leg that reaches this stop
    pub leg_distance_km: f64,
    /// Predicted clock time of arrival, "HH:MM"
    pub estimated_arrival: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Itinerary {
    pub stops: Vec<ItineraryStop>,
    pub total_monuments: usize,
    pub total_duration_hours: f64,
    pub total_distance_km: f64,
}

impl Itinerary {
    pub fn empty() -> Self {
        Itinerary::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Budgets for one recommendation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub max_distance_km: f64,
    pub max_stops: u32,
    pub max_duration_hours: f64,
    /// Clock time the walk starts at; the current local time when `None`
    pub start_time: Option<Time>,
}

impl PlanRequest {
    pub fn from_config(config: &PlannerConfig) -> Self {
        PlanRequest {
            max_distance_km: config.max_distance_km,
            max_stops: config.max_stops,
            max_duration_hours: config.max_duration_hours,
            start_time: None,
        }
    }

    pub fn with_start_time(mut self, start_time: Time) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_distance_budget(self.max_distance_km)?;
        validate_route_budgets(self.max_stops, self.max_duration_hours)
    }
}

pub(crate) fn validate_distance_budget(max_distance_km: f64) -> Result<()> {
    if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
        return Err(AppError::InvalidParameter(format!(
            "max_distance_km must be a positive number, got {}",
            max_distance_km
        )));
    }
    Ok(())
}

pub(crate) fn validate_route_budgets(max_stops: u32, max_duration_hours: f64) -> Result<()> {
    if max_stops == 0 {
        return Err(AppError::InvalidParameter(
            "max_stops must be at least 1".to_string(),
        ));
    }
    if !max_duration_hours.is_finite() || max_duration_hours <= 0.0 {
        return Err(AppError::InvalidParameter(format!(
            "max_duration_hours must be a positive number, got {}",
            max_duration_hours
        )));
    }
    Ok(())
}
