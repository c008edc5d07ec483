use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// The three Mapbox basemap styles the viewer offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapboxStyle {
    Light,
    Outdoors,
    Satellite,
}

impl MapboxStyle {
    /// Mapbox v4 style id
    pub fn style_id(&self) -> &'static str {
        match self {
            MapboxStyle::Light => "mapbox.light",
            MapboxStyle::Outdoors => "mapbox.outdoors",
            MapboxStyle::Satellite => "mapbox.satellite",
        }
    }
}

/// Tile source hitting the Mapbox v4 raster API with a caller-supplied
/// access token.
pub struct MapboxSource {
    style: MapboxStyle,
    access_token: String,
}

impl MapboxSource {
    pub fn new(style: MapboxStyle, access_token: impl Into<String>) -> Self {
        Self {
            style,
            access_token: access_token.into(),
        }
    }

    pub fn style(&self) -> MapboxStyle {
        self.style
    }
}

impl TileSource for MapboxSource {
    fn url(&self, coord: TileCoord) -> String {
        format!(
            "https://api.tiles.mapbox.com/v4/{}/{}/{}/{}.png?access_token={}",
            self.style.style_id(),
            coord.z,
            coord.x,
            coord.y,
            self.access_token
        )
    }
}
