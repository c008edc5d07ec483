//! # quakemap
//!
//! An earthquake map viewer built on two public GeoJSON feeds: the USGS
//! all-week earthquake summary and the PB2002 tectonic-plate boundaries.
//!
//! The crate fetches both feeds, styles each earthquake as a circle marker
//! sized and colored by magnitude, renders plate boundaries as fixed-style
//! polylines, and composes everything into a [`MapView`] with three
//! interchangeable Mapbox basemaps, two toggleable overlays, and a magnitude
//! legend. Rendering the composed view to pixels is left to the host.

pub mod compose;
pub mod core;
pub mod data;
pub mod layers;
pub mod style;
pub mod tiles;
pub mod ui;

// Re-export public API
pub use crate::core::{
    config::ViewerConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::MapView,
};

pub use compose::MapComposer;

pub use data::{
    feed::{FeedSource, HttpFeedClient},
    geojson::{BoundaryFeature, EarthquakeFeature},
};

pub use layers::{
    base::LayerTrait, boundary::BoundaryLayer, marker::EarthquakeLayer, tile::TileLayer,
};

pub use style::{color_for, radius_for, MagnitudeScale, MarkerColor};

pub use ui::{legend::LegendControl, popup::QuakePopup};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;
