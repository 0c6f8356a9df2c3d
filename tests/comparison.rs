//! Comparison harness over a fixed synthetic workload

mod common;

use campusnav::algo::sample_pairs;
use campusnav::prelude::*;

use common::{disconnected_model, grid_model};

#[test]
fn one_row_per_algorithm_in_fixed_order() {
    let model = grid_model();
    let rows = compare_algorithms(&model).unwrap();

    let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["BFS", "DFS", "UCS", "A*"]);
    for row in &rows {
        assert_eq!(row.routes_found, 6, "all sample pairs are connected");
        assert!(row.avg_distance > 0.0);
        assert!(row.avg_explored > 0.0);
        assert!(row.efficiency.is_none());
    }
}

#[test]
fn one_row_per_heuristic_with_efficiency() {
    let model = grid_model();
    let rows = compare_heuristics(&model).unwrap();

    let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Euclidean", "Manhattan", "Combined"]);
    for row in &rows {
        let efficiency = row.efficiency.expect("heuristic rows carry the score");
        assert!((efficiency - row.avg_distance / row.avg_explored).abs() < 1e-12);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let model = grid_model();
    assert_eq!(
        compare_algorithms(&model).unwrap(),
        compare_algorithms(&model).unwrap()
    );
    assert_eq!(
        compare_heuristics(&model).unwrap(),
        compare_heuristics(&model).unwrap()
    );
}

#[test]
fn sample_pairs_are_fixed_by_registry_order() {
    let model = grid_model();
    let pairs = sample_pairs(&model).unwrap();
    assert_eq!(pairs.len(), 6);
    assert_eq!(
        pairs[0],
        ("Library".to_string(), "Food Court".to_string())
    );
    assert_eq!(pairs, sample_pairs(&model).unwrap());
}

#[test]
fn ucs_row_is_never_longer_than_uninformed_rows() {
    let model = grid_model();
    let rows = compare_algorithms(&model).unwrap();
    let ucs = rows.iter().find(|r| r.name == "UCS").unwrap();
    for name in ["BFS", "DFS"] {
        let row = rows.iter().find(|r| r.name == name).unwrap();
        assert!(row.avg_distance >= ucs.avg_distance - 1e-6);
    }
}

#[test]
fn disconnected_pairs_are_skipped_in_averages() {
    // "Hostel Block" sits on an island but is outside the first four
    // names, so the default workload stays fully connected.
    let model = disconnected_model();
    let pairs = sample_pairs(&model).unwrap();
    assert!(pairs.iter().all(|(a, b)| a != "Hostel Block" && b != "Hostel Block"));

    // Pull the island into the sample window and the three pairs that
    // touch it drop out of the averages.
    let model = island_in_sample_window();
    let rows = compare_algorithms(&model).unwrap();
    for row in rows {
        assert_eq!(row.routes_found, 3, "{} averaged over wrong pairs", row.name);
        assert!(row.avg_distance > 0.0);
    }
}

fn island_in_sample_window() -> campusnav::model::CampusModel {
    use campusnav::loading::osm::build_campus_graph;
    use campusnav::model::{CampusModel, PoiRegistry};
    use common::{GRID_DIM, grid_network, node_position};
    use geo::Point;

    let mut raw = grid_network(GRID_DIM);
    raw.nodes.insert(9001, Point::new(77.8000, 13.3000));
    raw.nodes.insert(9002, Point::new(77.8005, 13.3000));
    raw.ways.push(vec![9001, 9002]);

    let mut registry = PoiRegistry::new();
    let last = GRID_DIM - 1;
    let corners = [
        ("Library", node_position(0, 0)),
        ("Food Court", node_position(last, last)),
        ("Entry gate", node_position(0, last)),
    ];
    registry.insert("Hostel Block", 77.8000, 13.3000);
    for (name, position) in corners {
        registry.insert(name, position.x(), position.y());
    }

    CampusModel::new(build_campus_graph(&raw).unwrap(), registry, 500.0).unwrap()
}
