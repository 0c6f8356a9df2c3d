//! Model construction, location listing and POI resolution

mod common;

use campusnav::loading::osm::build_campus_graph;
use campusnav::model::CampusModel;
use campusnav::prelude::*;
use geo::Point;

use common::{GRID_DIM, corner_registry, grid_model, grid_network, node_id};

#[test]
fn locations_follow_registry_order() {
    let model = grid_model();
    assert_eq!(
        model.locations(),
        ["Library", "Food Court", "Entry gate", "Cricket Ground"]
    );
}

#[test]
fn location_info_is_stable_and_exact() {
    let model = grid_model();
    let first = model.location_info("Food Court").unwrap();
    let second = model.location_info("Food Court").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.name, "Food Court");

    assert!(matches!(
        model.location_info("Observatory"),
        Err(Error::LocationNotFound(_))
    ));
}

#[test]
fn off_node_poi_snaps_to_nearest_node() {
    let graph = build_campus_graph(&grid_network(GRID_DIM)).unwrap();
    let mut registry = corner_registry();
    // A few meters north-east of the grid's south-west corner node.
    registry.insert("Rest Area", 77.75502, 13.22203);

    let model = CampusModel::new(graph, registry, 500.0).unwrap();
    let anchor = model.resolve("Rest Area").unwrap();
    assert_eq!(model.graph.graph[anchor].id, node_id(0, 0));

    // Resolution is deterministic for a fixed graph.
    assert_eq!(model.resolve("Rest Area").unwrap(), anchor);
}

#[test]
fn far_pois_still_snap() {
    let graph = build_campus_graph(&grid_network(GRID_DIM)).unwrap();
    assert!(
        graph
            .nearest_node(&Point::new(0.0, 0.0))
            .is_some_and(|(_, distance)| distance > 1_000_000.0)
    );

    // Snapping beyond max_snap_distance is logged, not fatal: metrics
    // are simply relative to the snapped node.
    let mut registry = corner_registry();
    registry.insert("Rest Area", 0.0, 0.0);
    let model = CampusModel::new(graph, registry, 500.0).unwrap();
    assert!(model.resolve("Rest Area").is_ok());
}

#[test]
fn anchored_nodes_expose_graph_coordinates() {
    let model = grid_model();
    let anchor = model.resolve("Library").unwrap();
    let point = model.graph.point(anchor).unwrap();
    let info = model.location_info("Library").unwrap();
    assert_eq!(point.x(), info.lon);
    assert_eq!(point.y(), info.lat);
}
