//! Campus path network model

pub mod components;

use geo::{Distance, Haversine, Point};
use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::{Error, Meters, OsmNodeId};
pub use components::{CampusNode, PathEdge};

/// R-tree entry: node position with its graph index attached.
pub type IndexedPoint = GeomWithData<Point<f64>, NodeIndex>;

/// Number of R-tree candidates inspected when snapping a coordinate.
/// The tree orders neighbors in degree space; re-ranking a handful of
/// candidates by haversine distance makes the snap metric-correct.
const SNAP_CANDIDATES: usize = 8;

/// Immutable weighted graph of the campus path network.
///
/// Built once at startup and shared read-only by every search.
#[derive(Debug, Clone)]
pub struct CampusGraph {
    pub graph: UnGraph<CampusNode, PathEdge>,
    rtree: RTree<IndexedPoint>,
    node_indices: HashMap<OsmNodeId, NodeIndex>,
}

impl CampusGraph {
    pub(crate) fn new(graph: UnGraph<CampusNode, PathEdge>) -> Self {
        let points: Vec<IndexedPoint> = graph
            .node_indices()
            .map(|idx| IndexedPoint::new(graph[idx].geometry, idx))
            .collect();
        let node_indices = graph
            .node_indices()
            .map(|idx| (graph[idx].id, idx))
            .collect();

        Self {
            graph,
            rtree: RTree::bulk_load(points),
            node_indices,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Graph index of an OSM node, if it survived into the network.
    pub fn node_index(&self, id: OsmNodeId) -> Option<NodeIndex> {
        self.node_indices.get(&id).copied()
    }

    /// Coordinates of a node, failing with [`Error::InvalidNode`] for
    /// indices that do not belong to this graph.
    pub fn point(&self, node: NodeIndex) -> Result<Point<f64>, Error> {
        self.graph
            .node_weight(node)
            .map(|n| n.geometry)
            .ok_or(Error::InvalidNode)
    }

    /// Checks that a node index belongs to this graph.
    pub fn validate_node(&self, node: NodeIndex) -> Result<(), Error> {
        if self.graph.node_weight(node).is_some() {
            Ok(())
        } else {
            Err(Error::InvalidNode)
        }
    }

    /// Nearest graph node to a coordinate by haversine distance,
    /// together with that distance in meters. `None` on an empty graph.
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<(NodeIndex, Meters)> {
        self.rtree
            .nearest_neighbor_iter(point)
            .take(SNAP_CANDIDATES)
            .map(|candidate| {
                let distance = Haversine.distance(*candidate.geom(), *point);
                (candidate.data, distance)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
