use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monument categories known to the catalog.
///
/// Accepts the snake_case names as well as the French display labels used by
/// the legacy French catalog files. Anything else deserializes to `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    #[serde(alias = "Monument historique")]
    HistoricMonument,
    #[serde(alias = "Édifice religieux")]
    ReligiousBuilding,
    #[serde(alias = "Musée")]
    Museum,
    #[serde(alias = "Château")]
    Castle,
    Park,
    Viewpoint,
    #[serde(other)]
    Other,
}

impl PoiCategory {
    /// Fixed visit duration for the category, `None` when it has none.
    pub fn visit_duration_hours(&self) -> Option<f64> {
        match self {
            PoiCategory::HistoricMonument => Some(1.5),
            PoiCategory::ReligiousBuilding => Some(1.0),
            PoiCategory::Museum => Some(2.0),
            PoiCategory::Castle => Some(3.0),
            PoiCategory::Park => Some(1.0),
            PoiCategory::Viewpoint => Some(0.5),
            PoiCategory::Other => None,
        }
    }

    /// Label shown to visitors.
    pub fn label(&self) -> &'static str {
        match self {
            PoiCategory::HistoricMonument => "Monument historique",
            PoiCategory::ReligiousBuilding => "Édifice religieux",
            PoiCategory::Museum => "Musée",
            PoiCategory::Castle => "Château",
            PoiCategory::Park => "Parc",
            PoiCategory::Viewpoint => "Point de vue",
            PoiCategory::Other => "Autre",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoiCategory::HistoricMonument => "historic_monument",
            PoiCategory::ReligiousBuilding => "religious_building",
            PoiCategory::Museum => "museum",
            PoiCategory::Castle => "castle",
            PoiCategory::Park => "park",
            PoiCategory::Viewpoint => "viewpoint",
            PoiCategory::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PoiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "historic_monument" | "monument historique" => Ok(PoiCategory::HistoricMonument),
            "religious_building" | "édifice religieux" => Ok(PoiCategory::ReligiousBuilding),
            "museum" | "musée" => Ok(PoiCategory::Museum),
            "castle" | "château" => Ok(PoiCategory::Castle),
            "park" | "parc" => Ok(PoiCategory::Park),
            "viewpoint" | "point de vue" => Ok(PoiCategory::Viewpoint),
            "other" | "autre" => Ok(PoiCategory::Other),
            _ => Err(format!("Invalid POI category: {}", s)),
        }
    }
}

/// An immutable catalog record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: PoiCategory,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(default, alias = "horaires")]
    pub opening_hours: String,
    #[serde(default, alias = "tarif")]
    pub price: String,
}

impl PointOfInterest {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: PoiCategory,
        coordinates: Coordinates,
    ) -> Self {
        PointOfInterest {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            coordinates,
            opening_hours: String::new(),
            price: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_practical_info(
        mut self,
        opening_hours: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        self.opening_hours = opening_hours.into();
        self.price = price.into();
        self
    }
}
