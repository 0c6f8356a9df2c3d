//! Route queries over the shared campus model

use serde::Serialize;

use crate::model::CampusModel;
use crate::{Error, Meters, WALKING_SPEED};

use super::algorithm::Algorithm;
use super::route::Route;
use super::search::search;

/// Metrics derived from a single route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    /// Total distance in meters
    pub distance: Meters,
    /// Estimated walking time in minutes
    pub time: f64,
    /// Nodes taken off the frontier while searching
    pub nodes_explored: usize,
    pub start_location: String,
    pub end_location: String,
}

/// Result of a route query.
///
/// "No route found" is a legitimate outcome (the two locations sit in
/// disconnected parts of the path network), not an error; callers must
/// handle it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found { route: Route, metrics: RouteMetrics },
    NoPath { nodes_explored: usize },
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    pub fn metrics(&self) -> Option<&RouteMetrics> {
        match self {
            PathOutcome::Found { metrics, .. } => Some(metrics),
            PathOutcome::NoPath { .. } => None,
        }
    }
}

/// Estimated walking time in minutes for a distance in meters.
pub fn walking_time_minutes(distance: Meters) -> f64 {
    distance / WALKING_SPEED / 60.0
}

/// Computes a route between two named locations.
///
/// Repeated calls with identical arguments on the same model return
/// identical outcomes.
///
/// # Errors
///
/// Fails with [`Error::LocationNotFound`] for names absent from the
/// registry, or [`Error::InvalidNode`] on an internal resolver/graph
/// mismatch. An unreachable goal is reported as
/// [`PathOutcome::NoPath`], not as an error.
pub fn find_path(
    model: &CampusModel,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<PathOutcome, Error> {
    let start_node = model.resolve(start)?;
    let end_node = model.resolve(end)?;

    let result = search(&model.graph, start_node, end_node, algorithm)?;
    match result.path {
        Some(nodes) => {
            let route = Route::new(nodes);
            let distance = route.total_distance(&model.graph)?;
            let metrics = RouteMetrics {
                distance,
                time: walking_time_minutes(distance),
                nodes_explored: result.explored,
                start_location: start.to_owned(),
                end_location: end.to_owned(),
            };
            Ok(PathOutcome::Found { route, metrics })
        }
        None => Ok(PathOutcome::NoPath {
            nodes_explored: result.explored,
        }),
    }
}
