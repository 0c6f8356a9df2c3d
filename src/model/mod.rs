//! Data model for campus route planning
//!
//! Contains the path network graph, the POI registry and the shared
//! read-only model that ties them together.

pub mod campus_model;
pub mod network;
pub mod pois;

pub use campus_model::{CampusModel, LocationInfo};
pub use network::{CampusGraph, CampusNode, IndexedPoint, PathEdge};
pub use pois::{PoiRegistry, PointOfInterest};
