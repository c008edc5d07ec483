//! Basemap tile layers
//!
//! A [`TileLayer`] wraps a [`TileSource`] with the display metadata the layer
//! switcher needs: a human-readable name, attribution, and a zoom ceiling.

use crate::{
    core::geo::{LatLngBounds, TileCoord},
    layers::base::{LayerKind, LayerProperties, LayerTrait},
    tiles::{MapboxSource, MapboxStyle, TileSource},
};

const MAPBOX_ATTRIBUTION: &str = "Map data © OpenStreetMap contributors, CC-BY-SA, Imagery © Mapbox";

pub struct TileLayer {
    properties: LayerProperties,
    source: Box<dyn TileSource>,
    attribution: String,
    max_zoom: u8,
}

impl TileLayer {
    pub fn new(
        id: String,
        name: String,
        source: Box<dyn TileSource>,
        attribution: String,
        max_zoom: u8,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::Tile),
            source,
            attribution,
            max_zoom,
        }
    }

    /// The "Grey Scale" basemap
    pub fn mapbox_light(access_token: &str) -> Self {
        Self::mapbox(MapboxStyle::Light, "light", "Grey Scale", access_token)
    }

    /// The "Outdoors" basemap
    pub fn mapbox_outdoors(access_token: &str) -> Self {
        Self::mapbox(MapboxStyle::Outdoors, "outdoors", "Outdoors", access_token)
    }

    /// The "Satellite" basemap
    pub fn mapbox_satellite(access_token: &str) -> Self {
        Self::mapbox(MapboxStyle::Satellite, "satellite", "Satellite", access_token)
    }

    fn mapbox(style: MapboxStyle, id: &str, name: &str, access_token: &str) -> Self {
        Self::new(
            id.to_string(),
            name.to_string(),
            Box::new(MapboxSource::new(style, access_token)),
            MAPBOX_ATTRIBUTION.to_string(),
            18,
        )
    }

    /// URL of the tile at `coord`
    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.source.url(coord)
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        // Basemaps cover the whole world
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basemap_names() {
        let token = "pk.test";
        assert_eq!(TileLayer::mapbox_light(token).name(), "Grey Scale");
        assert_eq!(TileLayer::mapbox_outdoors(token).name(), "Outdoors");
        assert_eq!(TileLayer::mapbox_satellite(token).name(), "Satellite");
    }

    #[test]
    fn test_basemap_metadata() {
        let layer = TileLayer::mapbox_light("pk.test");
        assert_eq!(layer.kind(), LayerKind::Tile);
        assert_eq!(layer.max_zoom(), 18);
        assert!(layer.attribution().contains("OpenStreetMap"));
    }

    #[test]
    fn test_tile_url_carries_token() {
        let layer = TileLayer::mapbox_satellite("pk.secret");
        let url = layer.tile_url(TileCoord::new(0, 0, 0));
        assert!(url.contains("mapbox.satellite"));
        assert!(url.ends_with("access_token=pk.secret"));
    }
}
