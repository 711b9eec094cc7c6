use crate::config::PlannerConfig;
use crate::error::{AppError, Result};
use crate::models::PoiCategory;

/// Constant-speed travel over great-circle legs, plus per-category visit times.
#[derive(Debug, Clone)]
pub struct TravelModel {
    speed_kmh: f64,
    default_visit_hours: f64,
}

impl TravelModel {
    pub fn new(speed_kmh: f64, default_visit_hours: f64) -> Result<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(AppError::InvalidParameter(format!(
                "walking speed must be a positive number of km/h, got {}",
                speed_kmh
            )));
        }
        if !default_visit_hours.is_finite() || default_visit_hours <= 0.0 {
            return Err(AppError::InvalidParameter(format!(
                "default visit duration must be a positive number of hours, got {}",
                default_visit_hours
            )));
        }
        Ok(Self {
            speed_kmh,
            default_visit_hours,
        })
    }

    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        Self::new(config.walking_speed_kmh, config.default_visit_hours)
    }

    /// Travel time rounded to the nearest whole minute, saturating at `u32::MAX`.
    pub fn travel_minutes(&self, distance_km: f64) -> u32 {
        (distance_km / self.speed_kmh * 60.0).round() as u32
    }

    pub fn visit_hours(&self, category: &PoiCategory) -> f64 {
        category
            .visit_duration_hours()
            .unwrap_or(self.default_visit_hours)
    }

    pub fn visit_minutes(&self, category: &PoiCategory) -> u32 {
        (self.visit_hours(category) * 60.0).round() as u32
    }
}
