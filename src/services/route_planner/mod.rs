//! Single-day itinerary planning.
//!
//! Stops are sequenced with a nearest-neighbor greedy walk from the origin,
//! pruned by the stop cap and the time budget. This is an approximation of
//! the budgeted shortest-path problem, not an exact solve; a 2-opt pass over
//! the chosen stops could be added later without changing `plan_route`.

mod schedule;
mod travel_model;

pub use schedule::{format_clock, ArrivalClock};
pub use travel_model::TravelModel;

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::distance::round_to_tenth;
use crate::models::itinerary::validate_route_budgets;
use crate::models::{
    Coordinates, DistanceKm, GeoPosition, Itinerary, ItineraryStop, NearbyCandidate,
};
use crate::services::proximity::ensure_resolved;
use time::Time;

/// A stop accepted by the greedy pass, before clock stamping.
struct PlannedLeg<'a> {
    candidate: &'a NearbyCandidate,
    distance_km: f64,
    travel_minutes: u32,
    visit_minutes: u32,
}

impl PlannedLeg<'_> {
    /// Widened so an unreachable leg cannot overflow into a small cost.
    fn cost_minutes(&self) -> u64 {
        u64::from(self.travel_minutes) + u64::from(self.visit_minutes)
    }
}

#[derive(Debug, Clone)]
pub struct RoutePlanner {
    travel_model: TravelModel,
}

impl RoutePlanner {
    /// Fails with `InvalidParameter` when the speed or default visit time is not positive.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        Ok(Self {
            travel_model: TravelModel::from_config(config)?,
        })
    }

    /// Build an itinerary from distance-sorted candidates.
    ///
    /// `origin` must be the position the candidates were measured from; the
    /// first leg starts there. Never fails for valid budgets; an empty
    /// itinerary means nothing fit.
    pub fn plan_route(
        &self,
        origin: &GeoPosition,
        candidates: &[NearbyCandidate],
        max_stops: u32,
        max_duration_hours: f64,
        start_time: Time,
    ) -> Result<Itinerary> {
        validate_route_budgets(max_stops, max_duration_hours)?;
        ensure_resolved(origin)?;

        if candidates.is_empty() {
            tracing::debug!("No candidates to plan, returning empty itinerary");
            return Ok(Itinerary::empty());
        }

        let legs = self.select_stops(origin, candidates, max_stops, max_duration_hours);
        let itinerary = assemble(legs, start_time);

        tracing::info!(
            candidates = candidates.len(),
            stops = itinerary.total_monuments,
            total_duration_hours = itinerary.total_duration_hours,
            total_distance_km = itinerary.total_distance_km,
            "Planned {} of {} candidates ({}h, {}km)",
            itinerary.total_monuments,
            candidates.len(),
            itinerary.total_duration_hours,
            itinerary.total_distance_km
        );

        Ok(itinerary)
    }

    /// Greedy nearest-neighbor pass over the candidate pool.
    ///
    /// A candidate that does not fit the remaining budget is dropped for good
    /// and the walk continues, so one long stop cannot block shorter ones.
    fn select_stops<'a>(
        &self,
        origin: &Coordinates,
        candidates: &'a [NearbyCandidate],
        max_stops: u32,
        max_duration_hours: f64,
    ) -> Vec<PlannedLeg<'a>> {
        let mut pool: Vec<&NearbyCandidate> = candidates.iter().collect();
        let mut chosen: Vec<PlannedLeg<'a>> = Vec::new();
        let mut current = *origin;
        let mut remaining_minutes = max_duration_hours * 60.0;

        while chosen.len() < max_stops as usize && !pool.is_empty() {
            let (pool_index, distance_km) = nearest_in_pool(&current, &pool);
            let candidate = pool.remove(pool_index);

            let leg = PlannedLeg {
                candidate,
                distance_km,
                travel_minutes: self.travel_model.travel_minutes(distance_km),
                visit_minutes: self.travel_model.visit_minutes(&candidate.poi.category),
            };

            if leg.cost_minutes() as f64 > remaining_minutes {
                tracing::debug!(
                    poi = %candidate.poi.name,
                    cost_minutes = leg.cost_minutes(),
                    remaining_minutes = remaining_minutes,
                    "Skipping candidate over remaining budget"
                );
                continue;
            }

            tracing::debug!(
                order = chosen.len() + 1,
                poi = %candidate.poi.name,
                leg_km = %format!("{:.2}", distance_km),
                travel_minutes = leg.travel_minutes,
                "Added stop"
            );

            remaining_minutes -= leg.cost_minutes() as f64;
            current = candidate.poi.coordinates;
            chosen.push(leg);
        }

        chosen
    }
}

/// Index and distance of the pool member closest to `from`.
///
/// Strict comparison in pool order, so ties go to the candidate that was
/// nearer the origin. The pool must not be empty.
fn nearest_in_pool(from: &Coordinates, pool: &[&NearbyCandidate]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (index, candidate) in pool.iter().enumerate() {
        let distance = from.distance_to(&candidate.poi.coordinates);
        if distance < best.1 {
            best = (index, distance);
        }
    }
    best
}

/// Stamp order and arrival times, and compute the totals.
fn assemble(legs: Vec<PlannedLeg<'_>>, start_time: Time) -> Itinerary {
    let mut clock = ArrivalClock::starting_at(start_time);
    let mut total_minutes: u64 = 0;
    let mut total_distance = DistanceKm::from_raw(0.0);

    let stops: Vec<ItineraryStop> = legs
        .into_iter()
        .enumerate()
        .map(|(index, leg)| {
            let arrival = clock.arrive(leg.travel_minutes);
            clock.stay(leg.visit_minutes);
            total_minutes = total_minutes.saturating_add(leg.cost_minutes());
            total_distance = total_distance + DistanceKm::from_raw(leg.distance_km);

            ItineraryStop {
                candidate: leg.candidate.clone(),
                order: index as u32 + 1,
                visit_duration_hours: f64::from(leg.visit_minutes) / 60.0,
                travel_time_minutes: leg.travel_minutes,
                leg_distance_km: leg.distance_km,
                estimated_arrival: format_clock(arrival),
            }
        })
        .collect();

    Itinerary {
        total_monuments: stops.len(),
        stops,
        total_duration_hours: round_to_tenth(total_minutes as f64 / 60.0),
        total_distance_km: total_distance.rounded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{PoiCategory, PointOfInterest};
    use time::macros::time;

    fn origin() -> Coordinates {
        Coordinates::new(48.8566, 2.3522).unwrap()
    }

    fn candidate(id: &str, category: PoiCategory, lat: f64, lng: f64) -> NearbyCandidate {
        let coordinates = Coordinates::new(lat, lng).unwrap();
        NearbyCandidate::new(
            PointOfInterest::new(id, id, category, coordinates),
            origin().distance_to(&coordinates),
        )
    }

    fn sorted(mut candidates: Vec<NearbyCandidate>) -> Vec<NearbyCandidate> {
        candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        candidates
    }

    fn planner() -> RoutePlanner {
        RoutePlanner::new(&PlannerConfig::default()).unwrap()
    }

    #[test]
    fn single_stop_cap_picks_nearest() {
        let candidates = sorted(vec![
            candidate("eiffel", PoiCategory::HistoricMonument, 48.8584, 2.2945),
            candidate("notre-dame", PoiCategory::ReligiousBuilding, 48.8530, 2.3499),
        ]);
        let itinerary = planner()
            .plan_route(&origin(), &candidates, 1, 6.0, time!(9:00))
            .unwrap();

        assert_eq!(itinerary.total_monuments, 1);
        assert_eq!(itinerary.stops[0].candidate.poi.id, "notre-dame");
        assert_eq!(itinerary.stops[0].order, 1);
    }

    #[test]
    fn stop_too_long_for_budget_yields_empty_itinerary() {
        let candidates = vec![candidate("louvre", PoiCategory::Museum, 48.8606, 2.3376)];
        let itinerary = planner()
            .plan_route(&origin(), &candidates, 5, 0.5, time!(9:00))
            .unwrap();

        assert!(itinerary.is_empty());
        assert_eq!(itinerary.total_monuments, 0);
        assert_eq!(itinerary.total_duration_hours, 0.0);
    }

    #[test]
    fn long_stop_does_not_block_shorter_ones() {
        // The castle is nearest but needs 3h; the viewpoint still fits in 1h
        let candidates = sorted(vec![
            candidate("castle", PoiCategory::Castle, 48.8570, 2.3525),
            candidate("viewpoint", PoiCategory::Viewpoint, 48.8600, 2.3522),
        ]);
        let itinerary = planner()
            .plan_route(&origin(), &candidates, 5, 1.0, time!(9:00))
            .unwrap();

        assert_eq!(itinerary.total_monuments, 1);
        assert_eq!(itinerary.stops[0].candidate.poi.id, "viewpoint");
    }

    #[test]
    fn sequences_from_current_stop_not_origin() {
        // b is farthest from the origin but nearest to a
        let candidates = sorted(vec![
            candidate("a", PoiCategory::Viewpoint, 48.8600, 2.3522),
            candidate("b", PoiCategory::Viewpoint, 48.8730, 2.3522),
            candidate("c", PoiCategory::Viewpoint, 48.8566, 2.3300),
        ]);
        assert_eq!(candidates[1].poi.id, "c");

        let itinerary = planner()
            .plan_route(&origin(), &candidates, 3, 8.0, time!(9:00))
            .unwrap();
        let ids: Vec<&str> = itinerary
            .stops
            .iter()
            .map(|s| s.candidate.poi.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn arrival_times_and_totals() {
        let candidates = vec![candidate(
            "notre-dame",
            PoiCategory::ReligiousBuilding,
            48.8530,
            2.3499,
        )];
        let itinerary = planner()
            .plan_route(&origin(), &candidates, 5, 6.0, time!(9:00))
            .unwrap();

        let stop = &itinerary.stops[0];
        assert_eq!(stop.travel_time_minutes, 7);
        assert_eq!(stop.estimated_arrival, "09:07");
        assert_eq!(stop.visit_duration_hours, 1.0);
        // 7 + 60 minutes
        assert_eq!(itinerary.total_duration_hours, 1.1);
        assert_eq!(itinerary.total_distance_km, 0.4);
    }

    #[test]
    fn first_leg_is_measured_from_origin() {
        let candidates = vec![candidate("a", PoiCategory::Park, 48.8700, 2.3522)];
        let itinerary = planner()
            .plan_route(&origin(), &candidates, 1, 6.0, time!(9:00))
            .unwrap();
        assert_eq!(
            itinerary.stops[0].leg_distance_km,
            candidates[0].distance_km
        );
    }

    #[test]
    fn equidistant_candidates_keep_input_order() {
        let candidates = vec![
            candidate("first", PoiCategory::Viewpoint, 48.8600, 2.3522),
            candidate("second", PoiCategory::Viewpoint, 48.8600, 2.3522),
        ];
        let itinerary = planner()
            .plan_route(&origin(), &candidates, 1, 6.0, time!(9:00))
            .unwrap();
        assert_eq!(itinerary.stops[0].candidate.poi.id, "first");
    }

    #[test]
    fn empty_candidates_yield_empty_itinerary() {
        let itinerary = planner()
            .plan_route(&origin(), &[], 5, 6.0, time!(9:00))
            .unwrap();
        assert_eq!(itinerary, Itinerary::empty());
    }

    #[test]
    fn rejects_invalid_budgets() {
        let candidates = vec![candidate("a", PoiCategory::Park, 48.87, 2.35)];
        assert!(planner()
            .plan_route(&origin(), &candidates, 0, 6.0, time!(9:00))
            .is_err());
        assert!(planner()
            .plan_route(&origin(), &candidates, 3, 0.0, time!(9:00))
            .is_err());
        assert!(planner()
            .plan_route(&origin(), &[], 3, -2.0, time!(9:00))
            .is_err());
    }

    #[test]
    fn unreachable_candidate_at_crawling_speed_is_skipped() {
        let config = PlannerConfig {
            walking_speed_kmh: 0.0001,
            ..PlannerConfig::default()
        };
        let planner = RoutePlanner::new(&config).unwrap();
        let origin = Coordinates::new(0.0, 0.0).unwrap();
        let far = Coordinates::new(0.0, 179.0).unwrap();
        let candidates = vec![NearbyCandidate::new(
            PointOfInterest::new("far", "far", PoiCategory::Museum, far),
            origin.distance_to(&far),
        )];

        let itinerary = planner
            .plan_route(&origin, &candidates, 1, 6.0, time!(9:00))
            .unwrap();
        assert!(itinerary.is_empty());

        // Even an absurd budget sums the saturated cost without wrapping
        let itinerary = planner
            .plan_route(&origin, &candidates, 1, 1e12, time!(9:00))
            .unwrap();
        assert_eq!(itinerary.stops[0].travel_time_minutes, u32::MAX);
        assert!(itinerary.total_duration_hours > 7e7);
    }

    #[test]
    fn zero_speed_is_rejected_at_construction() {
        let config = PlannerConfig {
            walking_speed_kmh: 0.0,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            RoutePlanner::new(&config),
            Err(AppError::InvalidParameter(_))
        ));
    }

    #[test]
    fn reported_visit_duration_matches_scheduled_minutes() {
        let config = PlannerConfig {
            default_visit_hours: 1.01,
            ..PlannerConfig::default()
        };
        let candidates = sorted(vec![
            candidate("a", PoiCategory::Other, 48.8600, 2.3522),
            candidate("b", PoiCategory::Other, 48.8630, 2.3522),
        ]);
        let itinerary = RoutePlanner::new(&config)
            .unwrap()
            .plan_route(&origin(), &candidates, 2, 6.0, time!(9:00))
            .unwrap();

        // 1.01 h is 60.6 min, scheduled as 61
        let first = &itinerary.stops[0];
        assert_eq!(first.visit_duration_hours, 61.0 / 60.0);
        let second = &itinerary.stops[1];
        let elapsed = first.travel_time_minutes + 61 + second.travel_time_minutes;
        let expected_arrival = time!(9:00) + time::Duration::minutes(i64::from(elapsed));
        assert_eq!(second.estimated_arrival, format_clock(expected_arrival));
    }
}
