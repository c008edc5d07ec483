pub mod base;
pub mod boundary;
pub mod marker;
pub mod tile;

// Re-exports for convenience
pub use base::{LayerKind, LayerProperties, LayerTrait};
pub use boundary::{BoundaryLayer, BoundaryStyle};
pub use marker::{CircleMarker, CircleStyle, EarthquakeLayer};
pub use tile::TileLayer;
