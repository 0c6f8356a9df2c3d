use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Map extract is unusable: {0}")]
    Parse(String),
    #[error("Failed to read map extract: {0}")]
    Pbf(#[from] osmpbf::Error),
    #[error("Invalid POI table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown location: {0}")]
    LocationNotFound(String),
    #[error("Node is not part of the campus graph")]
    InvalidNode,
    #[error("No nearby graph nodes found for snapping")]
    NoPointsFound,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
