use crate::error::{AppError, LocationError, Result};
use crate::models::itinerary::validate_distance_budget;
use crate::models::{GeoPosition, NearbyCandidate, PointOfInterest};

/// Select the catalog entries within `max_distance_km` of `origin`.
///
/// The boundary is inclusive. Survivors are sorted nearest-first; equal
/// distances keep catalog order. An empty result is not an error.
pub fn select_nearby(
    catalog: &[PointOfInterest],
    origin: &GeoPosition,
    max_distance_km: f64,
) -> Result<Vec<NearbyCandidate>> {
    validate_distance_budget(max_distance_km)?;
    ensure_resolved(origin)?;

    let mut candidates: Vec<NearbyCandidate> = catalog
        .iter()
        .filter_map(|poi| {
            let distance_km = origin.distance_to(&poi.coordinates);
            if distance_km <= max_distance_km {
                Some(NearbyCandidate::new(poi.clone(), distance_km))
            } else {
                tracing::debug!(
                    poi = %poi.name,
                    distance_km = %format!("{:.2}", distance_km),
                    "Outside search radius"
                );
                None
            }
        })
        .collect();

    // Vec::sort_by is stable, so ties keep catalog order
    candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    tracing::debug!(
        catalog = catalog.len(),
        nearby = candidates.len(),
        max_distance_km = max_distance_km,
        "Proximity filter: {} of {} within {}km",
        candidates.len(),
        catalog.len(),
        max_distance_km
    );

    Ok(candidates)
}

/// A NaN or out-of-range origin means the position was never resolved.
pub(crate) fn ensure_resolved(origin: &GeoPosition) -> Result<()> {
    if origin.is_valid() {
        Ok(())
    } else {
        Err(AppError::PositionUnavailable(LocationError::Unavailable(
            format!("unresolved position {:?}", origin),
        )))
    }
}
