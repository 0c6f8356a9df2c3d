//! Shared synthetic networks for the integration suites

use campusnav::loading::osm::{RawNetwork, build_campus_graph};
use campusnav::model::{CampusModel, PoiRegistry};
use geo::Point;

/// Grid spacing in degrees, roughly 55 m on either axis at this latitude.
pub const SPACING: f64 = 0.0005;
/// South-west grid corner (lon, lat).
pub const ORIGIN: (f64, f64) = (77.7550, 13.2220);
pub const GRID_DIM: usize = 4;

pub fn node_id(row: usize, col: usize) -> i64 {
    (row * 10 + col + 1) as i64
}

pub fn node_position(row: usize, col: usize) -> Point<f64> {
    Point::new(
        ORIGIN.0 + col as f64 * SPACING,
        ORIGIN.1 + row as f64 * SPACING,
    )
}

/// Axis-aligned grid: every row and every column is a traversable way.
pub fn grid_network(dim: usize) -> RawNetwork {
    let mut raw = RawNetwork::default();
    for row in 0..dim {
        for col in 0..dim {
            raw.nodes.insert(node_id(row, col), node_position(row, col));
        }
    }
    for row in 0..dim {
        raw.ways.push((0..dim).map(|col| node_id(row, col)).collect());
    }
    for col in 0..dim {
        raw.ways.push((0..dim).map(|row| node_id(row, col)).collect());
    }
    raw
}

pub fn corner_registry() -> PoiRegistry {
    let mut registry = PoiRegistry::new();
    let last = GRID_DIM - 1;
    for (name, row, col) in [
        ("Library", 0, 0),
        ("Food Court", last, last),
        ("Entry gate", 0, last),
        ("Cricket Ground", last, 0),
    ] {
        let position = node_position(row, col);
        registry.insert(name, position.x(), position.y());
    }
    registry
}

/// Grid model with one POI per corner.
pub fn grid_model() -> CampusModel {
    let graph = build_campus_graph(&grid_network(GRID_DIM)).unwrap();
    CampusModel::new(graph, corner_registry(), 500.0).unwrap()
}

/// Grid model plus a far-away two-node island holding "Hostel Block".
pub fn disconnected_model() -> CampusModel {
    let mut raw = grid_network(GRID_DIM);
    raw.nodes.insert(9001, Point::new(77.8000, 13.3000));
    raw.nodes.insert(9002, Point::new(77.8005, 13.3000));
    raw.ways.push(vec![9001, 9002]);

    let mut registry = corner_registry();
    registry.insert("Hostel Block", 77.8000, 13.3000);

    let graph = build_campus_graph(&raw).unwrap();
    CampusModel::new(graph, registry, 500.0).unwrap()
}
