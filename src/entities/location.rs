use geo_types::Coord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type LocationId = String;

/// Locations keyed by identifier, in the order the server listed them.
pub type Locations = IndexMap<LocationId, Location>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            amenities: Vec::new(),
        }
    }

    pub fn with_amenity(mut self, name: impl Into<String>, category: impl Into<String>) -> Self {
        self.amenities.push(Amenity {
            name: name.into(),
            category: category.into(),
        });
        self
    }

    pub fn coordinates(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    /// Amenity names joined for a one-line listing, `None` when there are none.
    pub fn amenity_names(&self) -> Option<String> {
        if self.amenities.is_empty() {
            return None;
        }

        let names: Vec<&str> = self.amenities.iter().map(|a| a.name.as_str()).collect();
        Some(names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_amenities_deserialize_as_empty() {
        let location: Location =
            serde_json::from_str(r#"{"name": "Pier", "lat": 40.7, "lon": -74.0}"#).unwrap();

        assert!(location.amenities.is_empty());
        assert_eq!(location.amenity_names(), None);
    }

    #[test]
    fn amenity_type_maps_to_category() {
        let location: Location = serde_json::from_str(
            r#"{"name": "Square", "lat": 1.0, "lon": 2.0,
                "amenities": [{"name": "Deli", "type": "restaurant"}, {"name": "Lot 4", "type": "parking"}]}"#,
        )
        .unwrap();

        assert_eq!(location.amenities[0].category, "restaurant");
        assert_eq!(location.amenity_names().as_deref(), Some("Deli, Lot 4"));
        assert_eq!(location.coordinates(), Coord { x: 2.0, y: 1.0 });
    }

    #[test]
    fn location_map_keeps_server_order() {
        let locations: Locations = serde_json::from_str(
            r#"{"zeta": {"name": "Z", "lat": 0, "lon": 0},
                "alpha": {"name": "A", "lat": 0, "lon": 0},
                "mid": {"name": "M", "lat": 0, "lon": 0}}"#,
        )
        .unwrap();

        let ids: Vec<&str> = locations.keys().map(|k| k.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }
}
