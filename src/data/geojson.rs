use crate::core::geo::LatLng;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Vec<f64>,
    },
    LineString {
        coordinates: Vec<Vec<f64>>,
    },
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPoint {
        coordinates: Vec<Vec<f64>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// Parses a GeoJSON document from a raw JSON string
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    /// All features in the document
    pub fn features(&self) -> &[GeoJsonFeature] {
        match self {
            GeoJson::Feature(feature) => std::slice::from_ref(feature),
            GeoJson::FeatureCollection { features } => features,
        }
    }
}

/// One earthquake from the USGS summary feed. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub place: String,
    pub magnitude: f64,
    /// Origin time in milliseconds since the Unix epoch
    pub time_ms: i64,
    pub position: LatLng,
}

impl EarthquakeFeature {
    /// Extracts an earthquake from a feed feature. Returns None for features
    /// without a Point geometry or a numeric `mag` property; the feed carries
    /// the occasional analyst-deleted event with `mag: null`.
    pub fn from_feature(feature: &GeoJsonFeature) -> Option<Self> {
        let position = match feature.geometry.as_ref()? {
            GeoJsonGeometry::Point { coordinates } if coordinates.len() >= 2 => {
                LatLng::from_lon_lat([coordinates[0], coordinates[1]])
            }
            _ => return None,
        };

        let properties = feature.properties.as_ref()?;
        let magnitude = properties.get("mag")?.as_f64()?;
        let time_ms = properties.get("time")?.as_i64()?;
        let place = properties
            .get("place")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown location")
            .to_string();

        Some(Self {
            place,
            magnitude,
            time_ms,
            position,
        })
    }
}

/// A tectonic-plate edge: one or more polylines. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub lines: Vec<Vec<LatLng>>,
}

impl BoundaryFeature {
    /// Extracts boundary polylines from a feature. Line and polygon
    /// geometries all flatten to polylines; point geometries carry no edge
    /// and yield None.
    pub fn from_feature(feature: &GeoJsonFeature) -> Option<Self> {
        let lines = match feature.geometry.as_ref()? {
            GeoJsonGeometry::LineString { coordinates } => {
                vec![line_to_lat_lngs(coordinates)]
            }
            GeoJsonGeometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|l| line_to_lat_lngs(l)).collect()
            }
            GeoJsonGeometry::Polygon { coordinates } => {
                coordinates.iter().map(|r| line_to_lat_lngs(r)).collect()
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|r| line_to_lat_lngs(r)))
                .collect(),
            _ => return None,
        };

        if lines.iter().all(|l| l.is_empty()) {
            return None;
        }

        Some(Self { lines })
    }
}

fn line_to_lat_lngs(coordinates: &[Vec<f64>]) -> Vec<LatLng> {
    coordinates
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| LatLng::from_lon_lat([c[0], c[1]]))
        .collect()
}

/// Extracts every parseable earthquake from a feed document, logging and
/// skipping the rest
pub fn extract_earthquakes(geojson: &GeoJson) -> Vec<EarthquakeFeature> {
    let features = geojson.features();
    let quakes: Vec<_> = features
        .iter()
        .filter_map(EarthquakeFeature::from_feature)
        .collect();

    let skipped = features.len() - quakes.len();
    if skipped > 0 {
        log::warn!(
            "skipped {} of {} earthquake features without usable geometry or magnitude",
            skipped,
            features.len()
        );
    }

    quakes
}

/// Extracts every boundary geometry from a feed document
pub fn extract_boundaries(geojson: &GeoJson) -> Vec<BoundaryFeature> {
    geojson
        .features()
        .iter()
        .filter_map(BoundaryFeature::from_feature)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAKE_FEED: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 4.2, "place": "50km W of Somewhere, CA", "time": 1554172800000},
                "geometry": {"type": "Point", "coordinates": [-122.4194, 37.7749, 10.3]}
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": "Deleted event", "time": 1554172900000},
                "geometry": {"type": "Point", "coordinates": [-120.0, 36.0]}
            }
        ]
    }
    "#;

    #[test]
    fn test_extract_earthquakes() {
        let geojson = GeoJson::from_str(QUAKE_FEED).unwrap();
        let quakes = extract_earthquakes(&geojson);

        // The null-magnitude event is skipped
        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].magnitude, 4.2);
        assert_eq!(quakes[0].place, "50km W of Somewhere, CA");
        assert_eq!(quakes[0].time_ms, 1554172800000);
        assert_eq!(quakes[0].position, LatLng::new(37.7749, -122.4194));
    }

    #[test]
    fn test_point_with_elevation_parses() {
        // USGS positions are [lon, lat, depth]; the third element is ignored
        let geojson = GeoJson::from_str(QUAKE_FEED).unwrap();
        let quakes = extract_earthquakes(&geojson);
        assert!(quakes[0].position.is_valid());
    }

    #[test]
    fn test_extract_boundaries_from_linestrings() {
        let boundary_feed = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"Name": "AF-AN"},
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, -54.0], [1.5, -54.5], [3.0, -55.0]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "MultiLineString",
                        "coordinates": [[[10.0, 0.0], [11.0, 1.0]], [[12.0, 2.0], [13.0, 3.0]]]
                    }
                }
            ]
        }
        "#;

        let geojson = GeoJson::from_str(boundary_feed).unwrap();
        let boundaries = extract_boundaries(&geojson);

        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].lines.len(), 1);
        assert_eq!(boundaries[0].lines[0].len(), 3);
        assert_eq!(boundaries[0].lines[0][0], LatLng::new(-54.0, 0.0));
        assert_eq!(boundaries[1].lines.len(), 2);
    }

    #[test]
    fn test_feature_without_geometry_is_skipped() {
        let feature = GeoJsonFeature {
            id: None,
            geometry: None,
            properties: Some(HashMap::new()),
        };
        assert!(EarthquakeFeature::from_feature(&feature).is_none());
        assert!(BoundaryFeature::from_feature(&feature).is_none());
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = GeoJson::from_str("{\"type\": \"Nonsense\"}").unwrap_err();
        assert!(matches!(err, crate::MapError::ParseError(_)));
    }
}
