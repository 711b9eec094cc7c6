use crate::constants::*;
use crate::models::Coordinates;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    pub visits_path: PathBuf,
    /// Fixed device position, standing in for a real location service
    pub device_position: Option<Coordinates>,
    pub location_timeout: Duration,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Constant speed applied to great-circle legs
    pub walking_speed_kmh: f64,

    /// Visit duration for categories without a fixed one
    pub default_visit_hours: f64,

    /// Search radius used when the caller does not supply one
    pub max_distance_km: f64,

    /// Stop cap used when the caller does not supply one
    pub max_stops: u32,

    /// Time budget used when the caller does not supply one
    pub max_duration_hours: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            default_visit_hours: DEFAULT_VISIT_DURATION_HOURS,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            max_stops: DEFAULT_MAX_STOPS,
            max_duration_hours: DEFAULT_MAX_DURATION_HOURS,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            walking_speed_kmh: env::var("PLANNER_WALKING_SPEED_KMH")
                .unwrap_or_else(|_| defaults.walking_speed_kmh.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_WALKING_SPEED_KMH")?,

            default_visit_hours: env::var("PLANNER_DEFAULT_VISIT_HOURS")
                .unwrap_or_else(|_| defaults.default_visit_hours.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_DEFAULT_VISIT_HOURS")?,

            max_distance_km: env::var("PLANNER_MAX_DISTANCE_KM")
                .unwrap_or_else(|_| defaults.max_distance_km.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_MAX_DISTANCE_KM")?,

            max_stops: env::var("PLANNER_MAX_STOPS")
                .unwrap_or_else(|_| defaults.max_stops.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_MAX_STOPS")?,

            max_duration_hours: env::var("PLANNER_MAX_DURATION_HOURS")
                .unwrap_or_else(|_| defaults.max_duration_hours.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_MAX_DURATION_HOURS")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("walking_speed_kmh", self.walking_speed_kmh),
            ("default_visit_hours", self.default_visit_hours),
            ("max_distance_km", self.max_distance_km),
            ("max_duration_hours", self.max_duration_hours),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if self.max_stops == 0 {
            return Err("max_stops must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let device_position = match (env::var("TOURPLAN_LAT"), env::var("TOURPLAN_LNG")) {
            (Ok(lat), Ok(lng)) => {
                let lat: f64 = lat.parse().map_err(|_| "Invalid TOURPLAN_LAT")?;
                let lng: f64 = lng.parse().map_err(|_| "Invalid TOURPLAN_LNG")?;
                Some(Coordinates::new(lat, lng)?)
            }
            (Err(_), Err(_)) => None,
            _ => return Err("TOURPLAN_LAT and TOURPLAN_LNG must be set together".to_string()),
        };

        let location_timeout_secs: u64 = env::var("TOURPLAN_LOCATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_LOCATION_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid TOURPLAN_LOCATION_TIMEOUT_SECS")?;

        if location_timeout_secs == 0 {
            return Err("TOURPLAN_LOCATION_TIMEOUT_SECS must be at least 1".to_string());
        }

        Ok(Config {
            catalog_path: env::var("TOURPLAN_CATALOG_PATH").ok().map(PathBuf::from),
            visits_path: env::var("TOURPLAN_VISITS_PATH")
                .unwrap_or_else(|_| DEFAULT_VISITS_PATH.to_string())
                .into(),
            device_position,
            location_timeout: Duration::from_secs(location_timeout_secs),
            planner: PlannerConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const PLANNER_VARS: [&str; 5] = [
        "PLANNER_WALKING_SPEED_KMH",
        "PLANNER_DEFAULT_VISIT_HOURS",
        "PLANNER_MAX_DISTANCE_KM",
        "PLANNER_MAX_STOPS",
        "PLANNER_MAX_DURATION_HOURS",
    ];

    fn clear_planner_env() {
        for var in PLANNER_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_distance_km, 10.0);
        assert_eq!(config.max_stops, 5);
        assert_eq!(config.max_duration_hours, 6.0);
        assert_eq!(config.walking_speed_kmh, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn planner_from_env_uses_defaults_when_unset() {
        clear_planner_env();
        let config = PlannerConfig::from_env().unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    #[serial]
    fn planner_from_env_reads_overrides() {
        clear_planner_env();
        env::set_var("PLANNER_WALKING_SPEED_KMH", "5.5");
        env::set_var("PLANNER_MAX_STOPS", "3");
        let config = PlannerConfig::from_env().unwrap();
        clear_planner_env();

        assert_eq!(config.walking_speed_kmh, 5.5);
        assert_eq!(config.max_stops, 3);
        assert_eq!(config.max_duration_hours, DEFAULT_MAX_DURATION_HOURS);
    }

    #[test]
    #[serial]
    fn planner_from_env_rejects_garbage_and_zero() {
        clear_planner_env();
        env::set_var("PLANNER_MAX_DISTANCE_KM", "far");
        assert!(PlannerConfig::from_env().is_err());

        env::set_var("PLANNER_MAX_DISTANCE_KM", "0");
        assert!(PlannerConfig::from_env().is_err());
        clear_planner_env();

        env::set_var("PLANNER_MAX_STOPS", "0");
        assert!(PlannerConfig::from_env().is_err());
        clear_planner_env();
    }

    #[test]
    #[serial]
    fn device_position_requires_both_coordinates() {
        clear_planner_env();
        env::set_var("TOURPLAN_LAT", "48.8566");
        env::remove_var("TOURPLAN_LNG");
        assert!(Config::from_env().is_err());

        env::set_var("TOURPLAN_LNG", "2.3522");
        let config = Config::from_env().unwrap();
        env::remove_var("TOURPLAN_LAT");
        env::remove_var("TOURPLAN_LNG");

        let position = config.device_position.unwrap();
        assert_eq!(position.lat, 48.8566);
        assert_eq!(position.lng, 2.3522);
    }
}
