use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{GeoPosition, Itinerary, NearbyCandidate, PlanRequest, PointOfInterest};
use crate::services::location::{acquire_position, LocationProvider};
use crate::services::proximity::select_nearby;
use crate::services::route_planner::RoutePlanner;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use time::{OffsetDateTime, Time};

#[derive(Debug, Clone, Serialize)]
pub struct Nearby {
    pub origin: GeoPosition,
    pub candidates: Vec<NearbyCandidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub origin: GeoPosition,
    pub nearby: Vec<NearbyCandidate>,
    pub itinerary: Itinerary,
}

/// Resolves the user's position, then runs the proximity filter and the planner.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
pub struct RecommendationService {
    location: Arc<dyn LocationProvider>,
    location_timeout: Duration,
    planner: RoutePlanner,
}

impl RecommendationService {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        location_timeout: Duration,
        config: &PlannerConfig,
    ) -> Result<Self> {
        Ok(Self {
            location,
            location_timeout,
            planner: RoutePlanner::new(config)?,
        })
    }

    /// Catalog entries within `max_distance_km` of the user, nearest first.
    pub async fn nearby(
        &self,
        catalog: &[PointOfInterest],
        max_distance_km: f64,
    ) -> Result<Nearby> {
        let origin = self.resolve_origin().await?;
        let candidates = select_nearby(catalog, &origin, max_distance_km)?;
        Ok(Nearby { origin, candidates })
    }

    /// Full recommendation run: position, nearby candidates, itinerary.
    ///
    /// Either a complete (possibly empty) itinerary or an error, never both.
    pub async fn recommend(
        &self,
        catalog: &[PointOfInterest],
        request: &PlanRequest,
    ) -> Result<Recommendation> {
        request.validate()?;

        let Nearby { origin, candidates } = self.nearby(catalog, request.max_distance_km).await?;

        if candidates.is_empty() {
            tracing::info!(
                max_distance_km = request.max_distance_km,
                "No monuments within {}km",
                request.max_distance_km
            );
        }

        let start_time = request.start_time.unwrap_or_else(local_time_now);
        let itinerary = self.planner.plan_route(
            &origin,
            &candidates,
            request.max_stops,
            request.max_duration_hours,
            start_time,
        )?;

        Ok(Recommendation {
            origin,
            nearby: candidates,
            itinerary,
        })
    }

    async fn resolve_origin(&self) -> Result<GeoPosition> {
        let origin = acquire_position(self.location.as_ref(), self.location_timeout).await?;
        Ok(origin)
    }
}

/// Current wall-clock time in the local offset, UTC when the offset is unknown.
pub fn local_time_now() -> Time {
    match OffsetDateTime::now_local() {
        Ok(now) => now.time(),
        Err(e) => {
            tracing::warn!("Local offset unavailable ({}), using UTC", e);
            OffsetDateTime::now_utc().time()
        }
    }
}

/// Today's date in the local offset, UTC when the offset is unknown.
pub fn local_date_today() -> time::Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
