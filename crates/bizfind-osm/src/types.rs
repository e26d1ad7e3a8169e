//! Response types for the Nominatim and Overpass APIs.

use std::collections::HashMap;

use serde::Deserialize;

/// The free-form OSM tag set of one element.
pub type Tags = HashMap<String, String>;

/// A resolved latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// One entry of a Nominatim `/search?format=json` response.
///
/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Top-level Overpass `[out:json]` response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
    /// Set when the server aborted the query, e.g. `"runtime error: Query timed out ..."`.
    #[serde(default)]
    pub remark: Option<String>,
}

/// A node, way, or relation returned by Overpass.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// `"node"`, `"way"`, or `"relation"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Centroid emitted for ways and relations by `out center`.
    #[serde(default)]
    pub center: Option<LatLon>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// Node position, or the centroid for ways and relations.
    #[must_use]
    pub fn position(&self) -> Option<Coordinates> {
        match (self.lat, self.lon, self.center) {
            (Some(lat), Some(lon), _) => Some(Coordinates { lat, lon }),
            (_, _, Some(c)) => Some(Coordinates {
                lat: c.lat,
                lon: c.lon,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_position_uses_lat_lon() {
        let element: OverpassElement = serde_json::from_value(serde_json::json!({
            "type": "node",
            "id": 1,
            "lat": 36.16,
            "lon": -86.78,
            "tags": { "shop": "bakery" }
        }))
        .unwrap();
        assert_eq!(
            element.position(),
            Some(Coordinates {
                lat: 36.16,
                lon: -86.78
            })
        );
        assert_eq!(element.tags["shop"], "bakery");
    }

    #[test]
    fn way_position_uses_center() {
        let element: OverpassElement = serde_json::from_value(serde_json::json!({
            "type": "way",
            "id": 2,
            "center": { "lat": 36.1, "lon": -86.7 },
            "tags": {}
        }))
        .unwrap();
        assert_eq!(element.kind, "way");
        assert_eq!(
            element.position(),
            Some(Coordinates {
                lat: 36.1,
                lon: -86.7
            })
        );
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let element: OverpassElement =
            serde_json::from_value(serde_json::json!({ "type": "relation", "id": 3 })).unwrap();
        assert!(element.tags.is_empty());
        assert!(element.position().is_none());
    }
}
