//! Closed selector types for the search-algorithm family
//!
//! Algorithm choice is a tagged enum dispatched once in
//! [`crate::routing::search::search`]; illegal selectors cannot be
//! constructed. `FromStr` accepts the selector strings the UI layer has
//! always used.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Remaining-distance estimate used to guide A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Straight-line (great-circle) distance to the goal
    Euclidean,
    /// Latitude-axis plus longitude-axis great-circle components
    Manhattan,
    /// 0.7 x euclidean + 0.3 x manhattan
    Combined,
}

impl Heuristic {
    /// All heuristic variants, in fixed comparison order.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Euclidean,
        Heuristic::Manhattan,
        Heuristic::Combined,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Euclidean => "Euclidean",
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Combined => "Combined",
        }
    }
}

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search: fewest edges, weights ignored
    Bfs,
    /// Depth-first search: first path found, no optimality guarantee
    Dfs,
    /// Uniform-cost search: minimum-distance path
    Ucs,
    /// A*: uniform-cost guided by a remaining-distance heuristic
    AStar(Heuristic),
}

impl Algorithm {
    /// The fixed battery the comparison harness runs.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStar(Heuristic::Euclidean),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::AStar(Heuristic::Euclidean) => "A* (Euclidean)",
            Algorithm::AStar(Heuristic::Manhattan) => "A* (Manhattan)",
            Algorithm::AStar(Heuristic::Combined) => "A* (Combined)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "BFS" => Ok(Algorithm::Bfs),
            "DFS" => Ok(Algorithm::Dfs),
            "UCS" => Ok(Algorithm::Ucs),
            // A plain "A*" has always meant the euclidean variant.
            "A*" | "A* (Euclidean)" => Ok(Algorithm::AStar(Heuristic::Euclidean)),
            "A* (Manhattan)" => Ok(Algorithm::AStar(Heuristic::Manhattan)),
            "A* (Combined)" => Ok(Algorithm::AStar(Heuristic::Combined)),
            other => Err(Error::InvalidData(format!(
                "unknown algorithm selector: {other}"
            ))),
        }
    }
}
