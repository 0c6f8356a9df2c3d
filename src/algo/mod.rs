//! Analyses built on top of the routing layer

pub mod comparison;

pub use comparison::{ComparisonRow, compare_algorithms, compare_heuristics, sample_pairs};
