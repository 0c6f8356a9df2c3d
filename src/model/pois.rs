//! Named points of interest on the campus

use geo::Point;
use indexmap::IndexMap;

/// A named, coordinate-tagged campus location.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub name: String,
    /// Location coordinates (lon/lat)
    pub geometry: Point<f64>,
}

/// Fixed registry of named locations, populated at model build time.
///
/// Iteration follows insertion order, so location listings are stable
/// for the lifetime of the model.
#[derive(Debug, Clone, Default)]
pub struct PoiRegistry {
    pois: IndexMap<String, Point<f64>>,
}

impl PoiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location. A repeated name replaces the previous
    /// coordinate but keeps its original position in the ordering.
    pub fn insert(&mut self, name: impl Into<String>, lon: f64, lat: f64) {
        self.pois.insert(name.into(), Point::new(lon, lat));
    }

    pub fn get(&self, name: &str) -> Option<Point<f64>> {
        self.pois.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pois.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pois.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = PointOfInterest> + '_ {
        self.pois.iter().map(|(name, point)| PointOfInterest {
            name: name.clone(),
            geometry: *point,
        })
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_keep_insertion_order() {
        let mut registry = PoiRegistry::new();
        registry.insert("Library", 77.7554, 13.22199);
        registry.insert("Food Court", 77.75716, 13.22488);
        registry.insert("Entry gate", 77.7540, 13.2210);

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["Library", "Food Court", "Entry gate"]);
    }

    #[test]
    fn reinsert_updates_coordinate_in_place() {
        let mut registry = PoiRegistry::new();
        registry.insert("Library", 77.0, 13.0);
        registry.insert("Flag post", 77.1, 13.1);
        registry.insert("Library", 77.2, 13.2);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().next(), Some("Library"));
        assert_eq!(registry.get("Library"), Some(Point::new(77.2, 13.2)));
    }
}
