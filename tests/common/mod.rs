use async_trait::async_trait;
use std::time::Duration;
use tourplan::config::PlannerConfig;
use tourplan::models::{Coordinates, GeoPosition, PoiCategory, PointOfInterest};
use tourplan::services::location::LocationProvider;
use tourplan::LocationError;

/// Hôtel de Ville, the reference origin used across tests
#[allow(dead_code)]
pub fn paris_origin() -> Coordinates {
    Coordinates::new(48.8566, 2.3522).unwrap()
}

/// Create a test POI
#[allow(dead_code)]
pub fn create_test_poi(id: &str, category: PoiCategory, lat: f64, lng: f64) -> PointOfInterest {
    PointOfInterest::new(id, id, category, Coordinates::new(lat, lng).unwrap())
        .with_description(format!("Test POI: {}", id))
}

#[allow(dead_code)]
pub fn test_planner_config() -> PlannerConfig {
    PlannerConfig::default()
}

/// Location provider with a scripted answer
#[allow(dead_code)]
pub struct StubLocation(pub Result<GeoPosition, LocationError>);

#[async_trait]
impl LocationProvider for StubLocation {
    async fn current_position(&self) -> Result<GeoPosition, LocationError> {
        self.0.clone()
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Location provider that answers only after a delay
#[allow(dead_code)]
pub struct SlowLocation(pub Duration, pub GeoPosition);

#[async_trait]
impl LocationProvider for SlowLocation {
    async fn current_position(&self) -> Result<GeoPosition, LocationError> {
        tokio::time::sleep(self.0).await;
        Ok(self.1)
    }

    fn provider_name(&self) -> &'static str {
        "slow"
    }
}

/// Unique temp file path for store tests
#[allow(dead_code)]
pub fn temp_visits_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("tourplan-test-{}.json", uuid::Uuid::new_v4()))
}
