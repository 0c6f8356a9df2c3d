//! Shared best-first core for UCS and A*
//!
//! Uniform-cost search is the degenerate case with no heuristic; A*
//! adds the remaining-distance estimate to the heap priority (f = g + h).
//! With an admissible heuristic both settle on the minimum-distance
//! path; A* settles fewer nodes along the way.

use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::model::CampusGraph;
use crate::routing::algorithm::Heuristic;

use super::state::State;
use super::{SearchResult, reconstruct_path};

pub(super) fn best_first(
    graph: &CampusGraph,
    start: NodeIndex,
    goal: NodeIndex,
    heuristic: Option<Heuristic>,
) -> SearchResult {
    let goal_point = graph.graph[goal].geometry;
    let estimate = |node: NodeIndex| -> f64 {
        match heuristic {
            Some(h) => h.estimate(graph.graph[node].geometry, goal_point),
            None => 0.0,
        }
    };

    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);
    let mut seq: u64 = 0;
    let mut explored = 0;

    heap.push(State {
        priority: estimate(start),
        cost: 0.0,
        seq,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Skip stale entries for which a better path was already found
        if let Some(&best) = distances.get(&node)
            && cost > best
        {
            continue;
        }

        explored += 1;

        if node == goal {
            return SearchResult {
                path: Some(reconstruct_path(&predecessors, start, goal)),
                explored,
            };
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().length;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    seq += 1;
                    heap.push(State {
                        priority: next_cost + estimate(next),
                        cost: next_cost,
                        seq,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        seq += 1;
                        heap.push(State {
                            priority: next_cost + estimate(next),
                            cost: next_cost,
                            seq,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    SearchResult {
        path: None,
        explored,
    }
}
