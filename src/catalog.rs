//! Monument catalog: the built-in Paris set, JSON loading and list filtering.

use crate::error::{AppError, Result};
use crate::models::{Coordinates, PoiCategory, PointOfInterest};
use std::collections::HashSet;
use std::path::Path;

/// The seven Paris monuments shipped with the app.
pub fn builtin_catalog() -> Vec<PointOfInterest> {
    let entry = |id: &str, name: &str, category, lat, lng| {
        PointOfInterest::new(id, name, category, Coordinates { lat, lng })
    };

    vec![
        entry("1", "Tour Eiffel", PoiCategory::HistoricMonument, 48.8584, 2.2945)
            .with_description("Monument emblématique de Paris, construit en 1889")
            .with_practical_info("9h30 - 23h45", "26€"),
        entry("2", "Arc de Triomphe", PoiCategory::HistoricMonument, 48.8738, 2.2950)
            .with_description("Monument commémoratif au centre de la Place Charles de Gaulle")
            .with_practical_info("10h - 22h30", "13€"),
        entry("3", "Notre-Dame de Paris", PoiCategory::ReligiousBuilding, 48.8530, 2.3499)
            .with_description("Cathédrale gothique située sur l'île de la Cité")
            .with_practical_info("En restauration", "Gratuit"),
        entry("4", "Sacré-Cœur", PoiCategory::ReligiousBuilding, 48.8867, 2.3431)
            .with_description("Basilique située au sommet de la butte Montmartre")
            .with_practical_info("6h - 22h30", "Gratuit (Dôme: 6€)"),
        entry("5", "Musée du Louvre", PoiCategory::Museum, 48.8606, 2.3376)
            .with_description("Plus grand musée d'art du monde")
            .with_practical_info("9h - 18h (fermé mardi)", "17€"),
        entry("6", "Panthéon", PoiCategory::HistoricMonument, 48.8462, 2.3464)
            .with_description(
                "Monument néoclassique abritant les tombeaux de grandes personnalités",
            )
            .with_practical_info("10h - 18h", "11.50€"),
        entry("7", "Versailles", PoiCategory::Castle, 48.8049, 2.1204)
            .with_description("Château royal célèbre pour la Galerie des Glaces")
            .with_practical_info("9h - 18h30 (fermé lundi)", "19.50€"),
    ]
}

/// Parse a catalog from a JSON array of records.
pub fn parse_catalog(json: &str) -> Result<Vec<PointOfInterest>> {
    let catalog: Vec<PointOfInterest> = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Read and parse a JSON catalog file.
pub async fn load_catalog(path: &Path) -> Result<Vec<PointOfInterest>> {
    let json = tokio::fs::read_to_string(path).await?;
    let catalog = parse_catalog(&json)?;
    tracing::info!(
        path = %path.display(),
        entries = catalog.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

fn validate_catalog(catalog: &[PointOfInterest]) -> Result<()> {
    let mut seen = HashSet::new();
    for poi in catalog {
        if !seen.insert(poi.id.as_str()) {
            return Err(AppError::Catalog(format!("duplicate id '{}'", poi.id)));
        }
        if !poi.coordinates.is_valid() {
            return Err(AppError::Catalog(format!(
                "'{}' (id {}) has invalid coordinates {:?}",
                poi.name, poi.id, poi.coordinates
            )));
        }
    }
    Ok(())
}

/// Category and free-text filter for the monument list.
///
/// `query` matches case-insensitively against name and description. `None`
/// (or an empty query) disables that filter. Catalog order is preserved.
pub fn filter_catalog<'a>(
    catalog: &'a [PointOfInterest],
    category: Option<PoiCategory>,
    query: Option<&str>,
) -> Vec<&'a PointOfInterest> {
    let needle = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    catalog
        .iter()
        .filter(|poi| category.map_or(true, |c| poi.category == c))
        .filter(|poi| match &needle {
            Some(needle) => {
                poi.name.to_lowercase().contains(needle.as_str())
                    || poi.description.to_lowercase().contains(needle.as_str())
            }
            None => true,
        })
        .collect()
}
