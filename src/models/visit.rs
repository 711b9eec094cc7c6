use crate::models::{Itinerary, PointOfInterest};
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    #[default]
    #[serde(alias = "planifié")]
    Planned,
    #[serde(alias = "complété")]
    Completed,
}

impl VisitStatus {
    pub fn toggled(self) -> Self {
        match self {
            VisitStatus::Planned => VisitStatus::Completed,
            VisitStatus::Completed => VisitStatus::Planned,
        }
    }
}

/// A calendar entry, as persisted by the visit store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRecord {
    pub id: Uuid,
    pub monument_id: String,
    pub monument_name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub status: VisitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<String>,
}

impl VisitRecord {
    /// A single visit added straight from the catalog, outside any itinerary.
    pub fn planned(poi: &PointOfInterest, date: Date) -> Self {
        VisitRecord {
            id: Uuid::new_v4(),
            monument_id: poi.id.clone(),
            monument_name: poi.name.clone(),
            date,
            status: VisitStatus::Planned,
            order: None,
            estimated_arrival: None,
        }
    }
}

impl Itinerary {
    /// Map every stop to a planned visit on `date`, keeping order and arrival time.
    pub fn to_visit_records(&self, date: Date) -> Vec<VisitRecord> {
        self.stops
            .iter()
            .map(|stop| VisitRecord {
                order: Some(stop.order),
                estimated_arrival: Some(stop.estimated_arrival.clone()),
                ..VisitRecord::planned(&stop.candidate.poi, date)
            })
            .collect()
    }
}
