//! Shared read-only campus model: graph, POI registry and snapped anchors

use hashbrown::HashMap;
use log::warn;
use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::{Error, Meters};

use super::network::CampusGraph;
use super::pois::PoiRegistry;

/// Coordinate and display data for a single named location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationInfo {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// The process-wide routing model.
///
/// Built once by [`crate::loading::create_campus_model`] and passed by
/// shared reference into every route query; nothing mutates it after
/// construction. Each POI is snapped to its nearest graph node when the
/// model is created, so name resolution is deterministic.
#[derive(Debug, Clone)]
pub struct CampusModel {
    pub graph: CampusGraph,
    pub pois: PoiRegistry,
    anchors: HashMap<String, NodeIndex>,
}

impl CampusModel {
    /// Assembles a model from a built graph and a POI registry, snapping
    /// every registered location onto the graph.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoPointsFound`] when the graph has no nodes to
    /// snap to. Snaps farther than `max_snap_distance` meters are kept
    /// but logged, since metrics are then relative to the snapped node
    /// rather than the exact POI coordinate.
    pub fn new(
        graph: CampusGraph,
        pois: PoiRegistry,
        max_snap_distance: Meters,
    ) -> Result<Self, Error> {
        let mut anchors = HashMap::with_capacity(pois.len());

        for poi in pois.iter() {
            let (node, distance) = graph
                .nearest_node(&poi.geometry)
                .ok_or(Error::NoPointsFound)?;
            if distance > max_snap_distance {
                warn!(
                    "POI '{}' snapped to a node {distance:.0} m away (max: {max_snap_distance:.0} m) - \
                     reported routes start from the snapped node",
                    poi.name
                );
            }
            anchors.insert(poi.name, node);
        }

        Ok(Self {
            graph,
            pois,
            anchors,
        })
    }

    /// Names of all registered locations, in fixed registry order.
    pub fn locations(&self) -> Vec<String> {
        self.pois.names().map(str::to_owned).collect()
    }

    /// Display information for a named location.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::LocationNotFound`] for names absent from the
    /// registry.
    pub fn location_info(&self, name: &str) -> Result<LocationInfo, Error> {
        let point = self
            .pois
            .get(name)
            .ok_or_else(|| Error::LocationNotFound(name.to_owned()))?;
        Ok(LocationInfo {
            name: name.to_owned(),
            lat: point.y(),
            lon: point.x(),
        })
    }

    /// Graph node a named location is anchored to.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::LocationNotFound`] for unknown names.
    pub fn resolve(&self, name: &str) -> Result<NodeIndex, Error> {
        self.anchors
            .get(name)
            .copied()
            .ok_or_else(|| Error::LocationNotFound(name.to_owned()))
    }

}
