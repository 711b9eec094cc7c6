pub mod candidate;
pub mod coordinates;
pub mod distance;
pub mod itinerary;
pub mod poi;
pub mod visit;

pub use candidate::NearbyCandidate;
pub use coordinates::{Coordinates, GeoPosition};
pub use distance::DistanceKm;
pub use itinerary::{Itinerary, ItineraryStop, PlanRequest};
pub use poi::{PoiCategory, PointOfInterest};
pub use visit::{VisitRecord, VisitStatus};
