// Library exports for testing and reusability

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, LocationError, Result};
pub use services::proximity::select_nearby;
pub use services::recommendation::{Recommendation, RecommendationService};
pub use services::route_planner::RoutePlanner;
