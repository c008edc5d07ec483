//! Tectonic-plate boundary layer
//!
//! Boundary edges render as fixed-style polylines; there is nothing data
//! driven about their appearance.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::geojson::BoundaryFeature,
    layers::base::{LayerKind, LayerProperties, LayerTrait},
};

/// Stroke treatment for plate edges
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryStyle {
    pub color: &'static str,
    pub weight: f64,
}

impl Default for BoundaryStyle {
    fn default() -> Self {
        Self {
            color: "orange",
            weight: 2.0,
        }
    }
}

/// Overlay holding every plate-edge polyline
pub struct BoundaryLayer {
    properties: LayerProperties,
    polylines: Vec<Vec<LatLng>>,
    style: BoundaryStyle,
}

impl BoundaryLayer {
    pub const ID: &'static str = "tectonic-plates";

    /// Builds the boundary layer from parsed feed features
    pub fn from_features(features: &[BoundaryFeature]) -> Self {
        let polylines = features
            .iter()
            .flat_map(|f| f.lines.iter().cloned())
            .collect();
        Self {
            properties: LayerProperties::new(
                Self::ID.to_string(),
                "TectonicPlates".to_string(),
                LayerKind::Vector,
            ),
            polylines,
            style: BoundaryStyle::default(),
        }
    }

    /// The overlay a failed boundary fetch leaves behind
    pub fn empty() -> Self {
        Self::from_features(&[])
    }

    pub fn polylines(&self) -> &[Vec<LatLng>] {
        &self.polylines
    }

    pub fn style(&self) -> &BoundaryStyle {
        &self.style
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

impl LayerTrait for BoundaryLayer {
    crate::impl_layer_trait!(BoundaryLayer, properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for line in &self.polylines {
            if let Some(line_bounds) = LatLngBounds::from_points(line) {
                bounds = Some(match bounds {
                    Some(b) => b.union(&line_bounds),
                    None => line_bounds,
                });
            }
        }
        bounds
    }
}
