//! Comparison harness for the search-algorithm family
//!
//! Runs every algorithm (or every A* heuristic) over a fixed set of
//! POI-pair samples and folds the outcomes into one averaged row per
//! variant. The sample set is derived from registry order alone, so
//! repeated runs on the same model compare identical workloads; the
//! per-variant runs are mutually independent and execute in parallel.

use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::model::CampusModel;
use crate::routing::{Algorithm, Heuristic, PathOutcome, find_path};
use crate::{Error, Meters};

/// Number of leading registry locations the sample pairs are drawn from.
const SAMPLE_LOCATIONS: usize = 4;

/// Averaged outcome of one algorithm or heuristic over the sample set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Algorithm or heuristic display name
    pub name: String,
    /// Mean route distance in meters over the pairs with a route
    pub avg_distance: Meters,
    /// Mean nodes explored over the pairs with a route
    pub avg_explored: f64,
    /// Sample pairs that produced a route
    pub routes_found: usize,
    /// Distance per explored node; reported for heuristic rows only.
    /// Higher values mean more route meters per unit of search effort,
    /// which favors cheap-to-discover routes over short ones.
    pub efficiency: Option<f64>,
}

/// The fixed, reproducible sample workload: ordered pair combinations of
/// the first [`SAMPLE_LOCATIONS`] registry names.
pub fn sample_pairs(model: &CampusModel) -> Result<Vec<(String, String)>, Error> {
    let names: Vec<String> = model
        .pois
        .names()
        .take(SAMPLE_LOCATIONS)
        .map(str::to_owned)
        .collect();
    if names.len() < 2 {
        return Err(Error::InvalidData(
            "comparison needs at least two registered locations".to_string(),
        ));
    }
    Ok(names.into_iter().tuple_combinations().collect())
}

/// Runs the four-algorithm battery over the sample set.
///
/// Returns exactly one row per algorithm, in the fixed order of
/// [`Algorithm::ALL`].
pub fn compare_algorithms(model: &CampusModel) -> Result<Vec<ComparisonRow>, Error> {
    let pairs = sample_pairs(model)?;
    info!(
        "Comparing {} algorithms over {} sample pairs",
        Algorithm::ALL.len(),
        pairs.len()
    );

    Algorithm::ALL
        .par_iter()
        .map(|&algorithm| {
            // The battery's A* entry is labeled plainly, as the UI has
            // always shown it.
            let label = match algorithm {
                Algorithm::AStar(_) => "A*",
                other => other.name(),
            };
            summarize(model, &pairs, algorithm, label, false)
        })
        .collect()
}

/// Runs the three A* heuristics over the sample set, including the
/// efficiency score per row.
///
/// Returns exactly one row per heuristic, in the fixed order of
/// [`Heuristic::ALL`].
pub fn compare_heuristics(model: &CampusModel) -> Result<Vec<ComparisonRow>, Error> {
    let pairs = sample_pairs(model)?;
    info!(
        "Comparing {} heuristics over {} sample pairs",
        Heuristic::ALL.len(),
        pairs.len()
    );

    Heuristic::ALL
        .par_iter()
        .map(|&heuristic| {
            summarize(
                model,
                &pairs,
                Algorithm::AStar(heuristic),
                heuristic.name(),
                true,
            )
        })
        .collect()
}

fn summarize(
    model: &CampusModel,
    pairs: &[(String, String)],
    algorithm: Algorithm,
    label: &str,
    with_efficiency: bool,
) -> Result<ComparisonRow, Error> {
    let mut total_distance = 0.0;
    let mut total_explored = 0usize;
    let mut routes_found = 0usize;

    for (start, end) in pairs {
        if let PathOutcome::Found { metrics, .. } = find_path(model, start, end, algorithm)? {
            total_distance += metrics.distance;
            total_explored += metrics.nodes_explored;
            routes_found += 1;
        }
    }

    let (avg_distance, avg_explored) = if routes_found > 0 {
        let n = routes_found as f64;
        (total_distance / n, total_explored as f64 / n)
    } else {
        (0.0, 0.0)
    };

    let efficiency = (with_efficiency && avg_explored > 0.0).then(|| avg_distance / avg_explored);

    Ok(ComparisonRow {
        name: label.to_string(),
        avg_distance,
        avg_explored,
        routes_found,
        efficiency,
    })
}
