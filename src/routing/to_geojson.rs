//! GeoJSON export of routes for the rendering layer

use geo::LineString;
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::model::CampusGraph;

use super::query::RouteMetrics;
use super::route::Route;

impl Route {
    /// Converts the route to a `GeoJSON` `Feature` with a LineString
    /// geometry and the route metrics as properties.
    pub fn to_geojson(
        &self,
        graph: &CampusGraph,
        metrics: &RouteMetrics,
    ) -> Result<Feature, Error> {
        let coords: Vec<_> = self
            .points(graph)?
            .into_iter()
            .map(geo::Coord::from)
            .collect();
        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "start_location": metrics.start_location,
                "end_location": metrics.end_location,
                "distance_m": metrics.distance,
                "time_min": metrics.time,
                "nodes_explored": metrics.nodes_explored,
                "segments": self.segment_count(),
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(
        &self,
        graph: &CampusGraph,
        metrics: &RouteMetrics,
    ) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(graph, metrics)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
