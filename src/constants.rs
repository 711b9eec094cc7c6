//! Stable application-wide constants.
//!
//! Values here are structural invariants, model coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`PlannerConfig`](crate::config::PlannerConfig) instead.

// --- Geodesy ---

/// Mean Earth radius used by the haversine distance. Fixed so distances are
/// reproducible across hosts.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Below this distance, candidates are displayed in whole meters.
pub const METERS_DISPLAY_THRESHOLD_KM: f64 = 1.0;

// --- Planner defaults (used when PLANNER_* env vars are absent) ---

/// Assumed walking/transit speed for travel-time estimates.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 4.0;
/// Visit duration for categories without a fixed duration.
pub const DEFAULT_VISIT_DURATION_HOURS: f64 = 1.0;
/// Default search radius around the user.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;
/// Default cap on stops in a single-day itinerary.
pub const DEFAULT_MAX_STOPS: u32 = 5;
/// Default total time budget for a single-day itinerary.
pub const DEFAULT_MAX_DURATION_HOURS: f64 = 6.0;

// --- Host defaults (used when TOURPLAN_* env vars are absent) ---

/// Default location of the JSON visit store.
pub const DEFAULT_VISITS_PATH: &str = "visits.json";
/// Upper bound on waiting for the location collaborator.
pub const DEFAULT_LOCATION_TIMEOUT_SECS: u64 = 10;
