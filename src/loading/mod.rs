//! This module is responsible for loading the map extract and POI table
//! and building the immutable campus routing model.

mod builder;
mod config;
pub mod osm;
pub mod pois;

pub use builder::create_campus_model;
pub use config::CampusModelConfig;
