//! OSM extract processing
//!
//! Decodes an OSM PBF extract into a raw node/way form and builds the
//! weighted campus graph from it. The two steps are split so synthetic
//! networks can be fed straight into [`build_campus_graph`].

use std::path::Path;

use geo::{Distance, Haversine, Point};
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::{debug, info};
use osmpbf::{Element, ElementReader};
use petgraph::graph::UnGraph;

use crate::model::{CampusGraph, CampusNode, PathEdge};
use crate::{Error, OsmNodeId};

/// `highway` values considered walkable on a campus.
const WALKABLE_HIGHWAYS: [&str; 14] = [
    "footway",
    "path",
    "pedestrian",
    "steps",
    "corridor",
    "living_street",
    "residential",
    "service",
    "track",
    "cycleway",
    "unclassified",
    "tertiary",
    "secondary",
    "primary",
];

/// Map extract reduced to coordinates and traversable ways.
#[derive(Debug, Clone, Default)]
pub struct RawNetwork {
    /// Node coordinates keyed by OSM id (lon/lat)
    pub nodes: HashMap<OsmNodeId, Point<f64>>,
    /// Node-id sequences of the traversable ways
    pub ways: Vec<Vec<OsmNodeId>>,
}

/// Reads a PBF extract into a [`RawNetwork`], keeping only walkable ways
/// and the nodes they reference.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded or contains no
/// traversable ways.
pub fn read_raw_network(path: &Path) -> Result<RawNetwork, Error> {
    // Ways first, so the node pass can keep only referenced coordinates.
    let mut ways = Vec::new();
    ElementReader::from_path(path)?.for_each(|element| {
        if let Element::Way(way) = element
            && is_walkable(way.tags())
        {
            ways.push(way.refs().collect::<Vec<_>>());
        }
    })?;

    if ways.is_empty() {
        return Err(Error::Parse(
            "extract contains no traversable ways".to_string(),
        ));
    }

    let referenced: HashSet<OsmNodeId> = ways.iter().flatten().copied().collect();
    let mut nodes = HashMap::with_capacity(referenced.len());
    ElementReader::from_path(path)?.for_each(|element| match element {
        Element::Node(node) => {
            if referenced.contains(&node.id()) {
                nodes.insert(node.id(), Point::new(node.lon(), node.lat()));
            }
        }
        Element::DenseNode(node) => {
            if referenced.contains(&node.id()) {
                nodes.insert(node.id(), Point::new(node.lon(), node.lat()));
            }
        }
        _ => {}
    })?;

    if nodes.is_empty() {
        return Err(Error::Parse(
            "extract contains no nodes for its traversable ways".to_string(),
        ));
    }

    Ok(RawNetwork { nodes, ways })
}

fn is_walkable<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>) -> bool {
    let mut walkable_highway = false;
    for (key, value) in tags {
        match key {
            "highway" => walkable_highway = WALKABLE_HIGHWAYS.contains(&value),
            "foot" if value == "no" => return false,
            "access" if value == "no" || value == "private" => return false,
            _ => {}
        }
    }
    walkable_highway
}

/// Builds the weighted campus graph from a raw network.
///
/// Consecutive way nodes become undirected edges weighted by haversine
/// distance in meters. Way references without a matching node are
/// skipped; duplicate segments collapse into a single edge.
///
/// # Errors
///
/// Returns [`Error::Parse`] when no usable edge remains.
pub fn build_campus_graph(raw: &RawNetwork) -> Result<CampusGraph, Error> {
    let mut graph = UnGraph::new_undirected();
    let mut indices = HashMap::with_capacity(raw.nodes.len());

    for way in &raw.ways {
        for (&from, &to) in way.iter().tuple_windows() {
            let (Some(&from_point), Some(&to_point)) =
                (raw.nodes.get(&from), raw.nodes.get(&to))
            else {
                debug!("Way references missing node ({from} -> {to}) - skipping segment");
                continue;
            };

            let from_idx = *indices.entry(from).or_insert_with(|| {
                graph.add_node(CampusNode {
                    id: from,
                    geometry: from_point,
                })
            });
            let to_idx = *indices.entry(to).or_insert_with(|| {
                graph.add_node(CampusNode {
                    id: to,
                    geometry: to_point,
                })
            });

            if from_idx == to_idx {
                continue;
            }
            let length = Haversine.distance(from_point, to_point);
            graph.update_edge(from_idx, to_idx, PathEdge { length });
        }
    }

    if graph.edge_count() == 0 {
        return Err(Error::Parse(
            "no usable path segments in the extract".to_string(),
        ));
    }

    Ok(CampusGraph::new(graph))
}

/// Full pipeline: PBF extract on disk to a ready campus graph.
pub fn create_campus_graph(path: &Path) -> Result<CampusGraph, Error> {
    let raw = read_raw_network(path)?;
    info!(
        "Map extract: {} nodes referenced by {} traversable ways",
        raw.nodes.len(),
        raw.ways.len()
    );
    build_campus_graph(&raw)
}
