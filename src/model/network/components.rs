//! Campus path network components - nodes and walkable segments

use geo::Point;

use crate::{Meters, OsmNodeId, WALKING_SPEED};

/// Path network node
#[derive(Debug, Clone)]
pub struct CampusNode {
    /// OSM ID of the node
    pub id: OsmNodeId,
    /// Node coordinates (lon/lat)
    pub geometry: Point<f64>,
}

/// Walkable segment between two adjacent nodes
#[derive(Debug, Clone)]
pub struct PathEdge {
    /// Great-circle length of the segment in meters
    pub length: Meters,
}

impl PathEdge {
    /// Time to walk this segment in seconds.
    pub fn walking_time(&self) -> f64 {
        self.length / WALKING_SPEED
    }
}
