//! Concrete route returned by a search

use geo::Point;
use log::error;
use petgraph::graph::NodeIndex;

use crate::model::CampusGraph;
use crate::{Error, Meters};

/// Ordered node sequence from start to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    nodes: Vec<NodeIndex>,
}

impl Route {
    pub(crate) fn new(nodes: Vec<NodeIndex>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Number of edges traversed.
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Coordinates of the route, in order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNode`] if any node is not in the graph.
    pub fn points(&self, graph: &CampusGraph) -> Result<Vec<Point<f64>>, Error> {
        self.nodes.iter().map(|&node| graph.point(node)).collect()
    }

    /// Total distance in meters, summed from the stored edge weights.
    ///
    /// The same weights drive the searches, so the reported metric
    /// cannot drift from the cost a search minimized.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNode`] if consecutive route nodes are
    /// not connected in the graph; a route can only come from a search,
    /// so this indicates an internal consistency bug.
    pub fn total_distance(&self, graph: &CampusGraph) -> Result<Meters, Error> {
        let mut total = 0.0;
        for pair in self.nodes.windows(2) {
            let edge = graph.graph.find_edge(pair[0], pair[1]).ok_or_else(|| {
                error!(
                    "Route contains consecutive nodes {:?} -> {:?} with no connecting edge",
                    pair[0], pair[1]
                );
                Error::InvalidNode
            })?;
            // find_edge succeeded, so the weight exists
            if let Some(weight) = graph.graph.edge_weight(edge) {
                total += weight.length;
            }
        }
        Ok(total)
    }
}
