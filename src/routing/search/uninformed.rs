//! Uninformed searches: breadth-first and depth-first
//!
//! Both ignore edge weights. BFS returns the fewest-edge path; DFS
//! returns the first path it stumbles on. Exploration counts are nodes
//! taken off the frontier, the same effort measure the weighted
//! searches report.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::model::CampusGraph;

use super::{SearchResult, reconstruct_path};

pub(super) fn breadth_first(
    graph: &CampusGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> SearchResult {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut frontier = VecDeque::new();
    let mut explored = 0;

    visited.insert(start.index());
    frontier.push_back(start);

    while let Some(node) = frontier.pop_front() {
        explored += 1;

        if node == goal {
            return SearchResult {
                path: Some(reconstruct_path(&predecessors, start, goal)),
                explored,
            };
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            if !visited.contains(next.index()) {
                visited.insert(next.index());
                predecessors.insert(next, node);
                frontier.push_back(next);
            }
        }
    }

    SearchResult {
        path: None,
        explored,
    }
}

pub(super) fn depth_first(graph: &CampusGraph, start: NodeIndex, goal: NodeIndex) -> SearchResult {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut stack = vec![start];
    let mut explored = 0;

    // Visited is marked on pop, so the predecessor recorded at push time
    // for the entry that actually gets popped is the one on the path.
    while let Some(node) = stack.pop() {
        if visited.contains(node.index()) {
            continue;
        }
        visited.insert(node.index());
        explored += 1;

        if node == goal {
            return SearchResult {
                path: Some(reconstruct_path(&predecessors, start, goal)),
                explored,
            };
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            if !visited.contains(next.index()) {
                predecessors.insert(next, node);
                stack.push(next);
            }
        }
    }

    SearchResult {
        path: None,
        explored,
    }
}
