//! Search dispatch over the campus graph

mod best_first;
mod state;
mod uninformed;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use crate::Error;
use crate::model::CampusGraph;

use super::algorithm::Algorithm;

/// Raw outcome of a single search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Node sequence from start to goal; `None` when the goal is
    /// unreachable from the start
    pub path: Option<Vec<NodeIndex>>,
    /// Nodes taken off the frontier during the run
    pub explored: usize,
}

/// Runs the selected algorithm between two graph nodes.
///
/// # Errors
///
/// Fails with [`Error::InvalidNode`] when either index does not belong
/// to the graph; that is a resolver defect, not a "no route" outcome,
/// so it is logged before propagating.
pub fn search(
    graph: &CampusGraph,
    start: NodeIndex,
    goal: NodeIndex,
    algorithm: Algorithm,
) -> Result<SearchResult, Error> {
    for node in [start, goal] {
        if let Err(e) = graph.validate_node(node) {
            log::error!("Search asked for node {node:?} which is not in the graph");
            return Err(e);
        }
    }

    let result = match algorithm {
        Algorithm::Bfs => uninformed::breadth_first(graph, start, goal),
        Algorithm::Dfs => uninformed::depth_first(graph, start, goal),
        Algorithm::Ucs => best_first::best_first(graph, start, goal, None),
        Algorithm::AStar(heuristic) => best_first::best_first(graph, start, goal, Some(heuristic)),
    };
    Ok(result)
}

/// Follows predecessors backward from goal to start.
fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::osm::{RawNetwork, build_campus_graph};
    use crate::routing::algorithm::Heuristic;
    use geo::Point;

    /// Two ways from node 1 to node 3: a two-edge shortcut through a
    /// node far off to the north (4) and a four-edge chain straight
    /// along the parallel (5, 6, 7). Fewest edges is the long way
    /// around; shortest distance is the chain.
    fn detour_network() -> CampusGraph {
        let raw = RawNetwork {
            nodes: [
                (1, Point::new(77.7550, 13.2220)),
                (3, Point::new(77.7570, 13.2220)),
                (4, Point::new(77.7560, 13.2260)),
                (5, Point::new(77.7555, 13.2220)),
                (6, Point::new(77.7560, 13.2220)),
                (7, Point::new(77.7565, 13.2220)),
            ]
            .into_iter()
            .collect(),
            ways: vec![vec![1, 4, 3], vec![1, 5, 6, 7, 3]],
        };
        build_campus_graph(&raw).unwrap()
    }

    fn idx(graph: &CampusGraph, id: i64) -> NodeIndex {
        graph.node_index(id).unwrap()
    }

    #[test]
    fn bfs_returns_fewest_edges() {
        let graph = detour_network();
        let (a, c) = (idx(&graph, 1), idx(&graph, 3));
        let result = search(&graph, a, c, Algorithm::Bfs).unwrap();
        assert_eq!(result.path.unwrap().len(), 3);
    }

    #[test]
    fn ucs_and_a_star_agree_on_cost() {
        let graph = detour_network();
        let (a, c) = (idx(&graph, 1), idx(&graph, 3));

        let ucs = search(&graph, a, c, Algorithm::Ucs).unwrap();
        for heuristic in Heuristic::ALL {
            let astar = search(&graph, a, c, Algorithm::AStar(heuristic)).unwrap();
            assert_eq!(astar.path, ucs.path, "heuristic {heuristic} diverged");
            assert!(astar.explored <= ucs.explored);
        }
    }

    #[test]
    fn start_equals_goal_is_single_node_path() {
        let graph = detour_network();
        let a = idx(&graph, 1);
        for algorithm in Algorithm::ALL {
            let result = search(&graph, a, a, algorithm).unwrap();
            assert_eq!(result.path, Some(vec![a]));
        }
    }

    #[test]
    fn invalid_node_is_a_distinct_failure() {
        let graph = detour_network();
        let a = idx(&graph, 1);
        let bogus = NodeIndex::new(999);
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                search(&graph, a, bogus, algorithm),
                Err(Error::InvalidNode)
            ));
        }
    }
}
