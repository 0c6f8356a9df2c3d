use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Frontier entry for the best-first searches.
///
/// `priority` is the heap key (cumulative cost for UCS, cost plus
/// heuristic for A*); `seq` is a monotonically increasing insertion
/// counter so equal priorities expand in insertion order, keeping
/// results deterministic.
#[derive(Copy, Clone)]
pub(super) struct State {
    pub(super) priority: f64,
    pub(super) cost: f64,
    pub(super) seq: u64,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap),
        // earliest insertion first on ties
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
