pub mod feed;
pub mod geojson;

// Re-exports for convenience
pub use feed::{FeedSource, HttpFeedClient};
pub use geojson::{BoundaryFeature, EarthquakeFeature, GeoJson, GeoJsonFeature, GeoJsonGeometry};
