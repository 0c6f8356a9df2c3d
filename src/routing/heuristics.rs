//! Remaining-distance estimates for A*, in meters

use geo::{Distance, Haversine, Point};

use crate::Meters;

use super::algorithm::Heuristic;

impl Heuristic {
    /// Estimated remaining distance from `from` to `to` in meters.
    pub fn estimate(self, from: Point<f64>, to: Point<f64>) -> Meters {
        match self {
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Combined => 0.7 * euclidean(from, to) + 0.3 * manhattan(from, to),
        }
    }
}

/// Straight-line great-circle distance.
fn euclidean(from: Point<f64>, to: Point<f64>) -> Meters {
    Haversine.distance(from, to)
}

/// Axis-aligned approximation: great-circle length of the latitude leg
/// plus the longitude leg, via the shared corner point.
fn manhattan(from: Point<f64>, to: Point<f64>) -> Meters {
    let corner = Point::new(from.x(), to.y());
    Haversine.distance(from, corner) + Haversine.distance(corner, to)
}
