//! Campus walking-route engine.
//!
//! Builds an immutable weighted graph from an OSM extract of a campus,
//! snaps named points of interest onto it, and computes walking routes
//! with a family of classical search algorithms (BFS, DFS, uniform-cost
//! and A* with several heuristics). A comparison harness runs the whole
//! family over a fixed workload and aggregates per-algorithm statistics.
//!
//! The model is built once via [`loading::create_campus_model`] and then
//! shared read-only by every route query.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Average pedestrian speed used for time estimates, in meters per second.
pub const WALKING_SPEED: f64 = 1.4;

/// OSM node identifier as found in the map extract.
pub type OsmNodeId = i64;

/// Edge length and route distances, in meters.
pub type Meters = f64;
