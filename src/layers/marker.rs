//! Earthquake marker layer
//!
//! Each earthquake becomes one circle marker whose radius and fill color come
//! from the magnitude encoding in [`crate::style`]. Marker geometry is in
//! meters so it scales with the map rather than the screen.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::geojson::EarthquakeFeature,
    layers::base::{LayerKind, LayerProperties, LayerTrait},
    style::{self, MarkerColor},
    ui::popup::QuakePopup,
};

/// Stroke and fill treatment shared by all earthquake markers
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub fill_color: MarkerColor,
    pub fill_opacity: f64,
    pub stroke: bool,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
}

impl CircleStyle {
    fn for_magnitude(magnitude: f64) -> Self {
        Self {
            fill_color: style::color_for(magnitude),
            fill_opacity: 0.75,
            stroke: true,
            stroke_color: "black",
            stroke_weight: 0.5,
        }
    }
}

/// A single styled circle marker with its popup
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub position: LatLng,
    /// Radius in meters
    pub radius: f64,
    pub style: CircleStyle,
    pub popup: QuakePopup,
}

impl CircleMarker {
    pub fn from_feature(feature: &EarthquakeFeature) -> Self {
        Self {
            position: feature.position,
            radius: style::radius_for(feature.magnitude),
            style: CircleStyle::for_magnitude(feature.magnitude),
            popup: QuakePopup::new(&feature.place, feature.magnitude, feature.time_ms),
        }
    }
}

/// Overlay holding one marker per earthquake
pub struct EarthquakeLayer {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl EarthquakeLayer {
    pub const ID: &'static str = "earthquakes";

    /// Builds the marker layer from parsed feed features
    pub fn from_features(features: &[EarthquakeFeature]) -> Self {
        let markers = features.iter().map(CircleMarker::from_feature).collect();
        Self {
            properties: LayerProperties::new(
                Self::ID.to_string(),
                "Earthquakes".to_string(),
                LayerKind::Marker,
            ),
            markers,
        }
    }

    /// An overlay with no markers, used when the feed yields nothing
    pub fn empty() -> Self {
        Self::from_features(&[])
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl LayerTrait for EarthquakeLayer {
    crate::impl_layer_trait!(EarthquakeLayer, properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        let positions: Vec<LatLng> = self.markers.iter().map(|m| m.position).collect();
        LatLngBounds::from_points(&positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(place: &str, magnitude: f64, lat: f64, lng: f64) -> EarthquakeFeature {
        EarthquakeFeature {
            place: place.to_string(),
            magnitude,
            time_ms: 1554172800000,
            position: LatLng::new(lat, lng),
        }
    }

    #[test]
    fn test_marker_styling_follows_magnitude() {
        let layer = EarthquakeLayer::from_features(&[quake("offshore", 6.2, 37.7, -122.4)]);

        assert_eq!(layer.len(), 1);
        let marker = &layer.markers()[0];
        assert_eq!(marker.radius, 124_000.0);
        assert_eq!(marker.style.fill_color, MarkerColor::Red);
        assert_eq!(marker.style.fill_opacity, 0.75);
        assert!(marker.style.stroke);
        assert_eq!(marker.style.stroke_weight, 0.5);
    }

    #[test]
    fn test_marker_popup_carries_feature_data() {
        let layer = EarthquakeLayer::from_features(&[quake("10km N of Anywhere", 3.0, 35.0, -118.0)]);
        let popup = &layer.markers()[0].popup;

        assert_eq!(popup.place, "10km N of Anywhere");
        assert_eq!(popup.magnitude, 3.0);
    }

    #[test]
    fn test_layer_bounds_cover_all_markers() {
        let layer = EarthquakeLayer::from_features(&[
            quake("a", 1.0, 30.0, -120.0),
            quake("b", 2.0, 40.0, -110.0),
        ]);

        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(30.0, -120.0));
        assert_eq!(bounds.north_east, LatLng::new(40.0, -110.0));
        assert!(EarthquakeLayer::empty().bounds().is_none());
    }

    #[test]
    fn test_layer_identity() {
        let layer = EarthquakeLayer::empty();
        assert_eq!(layer.id(), "earthquakes");
        assert_eq!(layer.kind(), LayerKind::Marker);
        assert!(layer.is_visible());
    }
}
