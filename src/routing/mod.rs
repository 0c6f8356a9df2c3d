//! Route computation: algorithm selectors, searches, routes and metrics

pub mod algorithm;
mod heuristics;
pub mod query;
pub mod route;
pub mod search;
mod to_geojson;

pub use algorithm::{Algorithm, Heuristic};
pub use query::{PathOutcome, RouteMetrics, find_path, walking_time_minutes};
pub use route::Route;
pub use search::{SearchResult, search};
