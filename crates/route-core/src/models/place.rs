//! Place models
//!
//! Mirrors the shape of a place returned by the Maps autocomplete widget.
//! Only `place_id` and `formatted_address` are read by the pipeline; the rest
//! is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single geographic point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Human-readable address, used verbatim in route links
    pub formatted_address: String,
    /// Location and viewport data
    pub geometry: Geometry,
    /// Opaque identifier, the deduplication key
    pub place_id: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Attribution strings, an empty list when the key is missing
    #[serde(default = "default_attributions")]
    pub html_attributions: Option<Vec<String>>,
}

fn default_attributions() -> Option<Vec<String>> {
    Some(Vec::new())
}

/// Location data of a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Provider-specific location object (lat/lng or similar), never inspected
    pub location: Map<String, Value>,
    pub viewport: Viewport,
}

/// Bounding box of a place
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Place {
    /// Create a place with an empty location and a zero viewport
    pub fn new(place_id: impl Into<String>, formatted_address: impl Into<String>) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            geometry: Geometry {
                location: Map::new(),
                viewport: Viewport::default(),
            },
            place_id: place_id.into(),
            name: None,
            html_attributions: default_attributions(),
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a lat/lng location
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        let mut location = Map::new();
        location.insert("lat".to_string(), Value::from(lat));
        location.insert("lng".to_string(), Value::from(lng));
        self.geometry.location = location;
        self
    }

    /// Set the viewport bounds
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.geometry.viewport = viewport;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_full() {
        let place: Place = serde_json::from_value(json!({
            "formatted_address": "1 Main St",
            "geometry": {
                "location": {"lat": 1.5, "lng": -2.25},
                "viewport": {"south": 1, "west": -3.0, "north": 2.0, "east": -1.0}
            },
            "place_id": "abc",
            "name": "Main",
            "html_attributions": ["<a>x</a>"]
        }))
        .unwrap();

        assert_eq!(place.place_id, "abc");
        assert_eq!(place.name.as_deref(), Some("Main"));
        assert_eq!(place.geometry.viewport.south, 1.0);
        assert_eq!(place.geometry.location["lat"], json!(1.5));
        assert_eq!(place.html_attributions, Some(vec!["<a>x</a>".to_string()]));
    }

    #[test]
    fn test_defaults_are_serialized() {
        let place: Place = serde_json::from_value(json!({
            "formatted_address": "1 Main St",
            "geometry": {
                "location": {},
                "viewport": {"south": 0, "west": 0, "north": 0, "east": 0}
            },
            "place_id": "abc"
        }))
        .unwrap();

        let value = serde_json::to_value(&place).unwrap();
        assert_eq!(value["name"], Value::Null);
        assert_eq!(value["html_attributions"], json!([]));
    }

    #[test]
    fn test_explicit_null_attributions_kept() {
        let place: Place = serde_json::from_value(json!({
            "formatted_address": "a",
            "geometry": {"location": {}, "viewport": {"south": 0, "west": 0, "north": 0, "east": 0}},
            "place_id": "p",
            "html_attributions": null
        }))
        .unwrap();

        assert_eq!(place.html_attributions, None);
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result = serde_json::from_value::<Place>(json!({
            "formatted_address": "a",
            "geometry": {"location": {}, "viewport": {"south": 0, "west": 0, "north": 0, "east": 0}}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_location_must_be_object() {
        let result = serde_json::from_value::<Place>(json!({
            "formatted_address": "a",
            "geometry": {"location": [1, 2], "viewport": {"south": 0, "west": 0, "north": 0, "east": 0}},
            "place_id": "p"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_location_key_order_preserved() {
        let input = r#"{"formatted_address":"a","geometry":{"location":{"lng":2.0,"lat":1.0,"alt":{"z":1,"a":2}},"viewport":{"south":0.0,"west":0.0,"north":0.0,"east":0.0}},"place_id":"p","name":null,"html_attributions":[]}"#;

        let place: Place = serde_json::from_str(input).unwrap();
        assert_eq!(serde_json::to_string(&place).unwrap(), input);
    }

    #[test]
    fn test_builder() {
        let place = Place::new("id", "Addr").with_name("Cafe").with_location(1.0, 2.0);
        assert_eq!(place.name.as_deref(), Some("Cafe"));
        assert_eq!(place.geometry.location["lng"], json!(2.0));
        assert_eq!(place.html_attributions, Some(vec![]));
    }
}
