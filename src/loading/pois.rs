//! POI registry sources: the built-in campus table and CSV overrides

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::Error;
use crate::model::PoiRegistry;

/// Campus locations, in the order the UI lists them.
const CAMPUS_POIS: [(&str, f64, f64); 17] = [
    ("Flag post", 13.22310, 77.75580),
    ("Entry gate", 13.22077, 77.75412),
    ("Exit gate", 13.22105, 77.75368),
    ("Check post 1", 13.22140, 77.75445),
    ("Check post 2", 13.22436, 77.75790),
    ("Acad 1", 13.22262, 77.75601),
    ("Acad 2", 13.22333, 77.75668),
    ("Library", 13.22199, 77.75540),
    ("Food Court", 13.22488, 77.75716),
    ("Faculty Block", 13.22395, 77.75620),
    ("Hostel Block", 13.22554, 77.75820),
    ("Cricket Ground", 13.22471, 77.75529),
    ("Basket Ball", 13.22413, 77.75477),
    ("Volley Ball", 13.22440, 77.75445),
    ("Tennis Ball", 13.22392, 77.75430),
    ("Foot Ball", 13.22530, 77.75610),
    ("Rest Area", 13.22285, 77.75500),
];

/// The fixed built-in registry of campus locations.
pub fn default_campus_pois() -> PoiRegistry {
    let mut registry = PoiRegistry::new();
    for (name, lat, lon) in CAMPUS_POIS {
        registry.insert(name, lon, lat);
    }
    registry
}

#[derive(Debug, Deserialize)]
struct PoiRecord {
    name: String,
    lat: f64,
    lon: f64,
}

/// Loads a POI registry from a CSV table with `name,lat,lon` columns.
///
/// # Errors
///
/// Fails on unreadable or malformed rows, or when the table defines
/// fewer than two locations (nothing could ever be routed).
pub fn pois_from_csv(path: &Path) -> Result<PoiRegistry, Error> {
    let file = std::fs::File::open(path)?;
    let registry = pois_from_reader(file)?;
    info!(
        "Loaded {} locations from POI table {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

pub(crate) fn pois_from_reader(reader: impl Read) -> Result<PoiRegistry, Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut registry = PoiRegistry::new();

    for record in csv_reader.deserialize() {
        let record: PoiRecord = record?;
        if !(-90.0..=90.0).contains(&record.lat) || !(-180.0..=180.0).contains(&record.lon) {
            return Err(Error::InvalidData(format!(
                "POI '{}' has out-of-range coordinates ({}, {})",
                record.name, record.lat, record.lon
            )));
        }
        registry.insert(record.name, record.lon, record.lat);
    }

    if registry.len() < 2 {
        return Err(Error::InvalidData(
            "POI table must define at least two locations".to_string(),
        ));
    }

    Ok(registry)
}
