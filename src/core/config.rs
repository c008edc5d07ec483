//! Viewer configuration
//!
//! All externally supplied state lives here: the Mapbox access token for tile
//! requests, the two feed URLs, and the initial view. Nothing in the crate
//! reads process-wide mutable state; callers construct a config and pass it to
//! [`crate::MapComposer`].

use crate::core::geo::LatLng;
use crate::Result;

/// USGS summary feed of all earthquakes from the past week
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic-plate boundaries
pub const PLATE_BOUNDARY_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Initial view over the continental US
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 37.09,
    lng: -95.71,
};
pub const DEFAULT_ZOOM: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub mapbox_access_token: String,
    pub earthquake_url: String,
    pub boundary_url: String,
    pub center: LatLng,
    pub zoom: f64,
}

impl ViewerConfig {
    /// Create a config with the default feeds and view for the given token
    pub fn new(mapbox_access_token: impl Into<String>) -> Self {
        Self {
            mapbox_access_token: mapbox_access_token.into(),
            earthquake_url: EARTHQUAKE_FEED_URL.to_string(),
            boundary_url: PLATE_BOUNDARY_URL.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Read the access token from the `MAPBOX_ACCESS_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("MAPBOX_ACCESS_TOKEN")
            .map_err(|_| crate::Error::Config("MAPBOX_ACCESS_TOKEN is not set".to_string()))?;
        Ok(Self::new(token))
    }

    /// Override the earthquake feed URL
    pub fn with_earthquake_url(mut self, url: impl Into<String>) -> Self {
        self.earthquake_url = url.into();
        self
    }

    /// Override the plate-boundary feed URL
    pub fn with_boundary_url(mut self, url: impl Into<String>) -> Self {
        self.boundary_url = url.into();
        self
    }

    /// Set the initial center and zoom level
    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }
}
