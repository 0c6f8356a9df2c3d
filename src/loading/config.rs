use std::path::PathBuf;

use crate::Meters;

/// Configuration for a one-time campus model build.
#[derive(Debug, Clone)]
pub struct CampusModelConfig {
    /// OSM PBF extract of the campus
    pub osm_path: PathBuf,
    /// Optional CSV table (`name,lat,lon`) overriding the built-in
    /// campus POI registry
    pub poi_path: Option<PathBuf>,
    /// Snap distance above which a POI-to-node snap is logged as suspect
    pub max_snap_distance: Meters,
}

impl CampusModelConfig {
    pub fn new(osm_path: impl Into<PathBuf>) -> Self {
        Self {
            osm_path: osm_path.into(),
            poi_path: None,
            max_snap_distance: 500.0,
        }
    }
}
