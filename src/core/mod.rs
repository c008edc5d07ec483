pub mod config;
pub mod geo;
pub mod map;

pub use config::ViewerConfig;
pub use geo::{LatLng, LatLngBounds, TileCoord};
pub use map::MapView;
