pub use crate::WALKING_SPEED;

// Re-export key components
pub use crate::algo::comparison::{ComparisonRow, compare_algorithms, compare_heuristics};
pub use crate::loading::{CampusModelConfig, create_campus_model};
pub use crate::model::{CampusModel, LocationInfo, PoiRegistry, PointOfInterest};
pub use crate::routing::{
    Algorithm, Heuristic, PathOutcome, Route, RouteMetrics, find_path, walking_time_minutes,
};

// Core types for the path network
pub use crate::Meters;
pub use crate::OsmNodeId;
pub use crate::error::Error;
pub use crate::model::CampusGraph;
