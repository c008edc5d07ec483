use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a LatLng from a GeoJSON `[lon, lat]` position
    pub fn from_lon_lat(coord: [f64; 2]) -> Self {
        Self::new(coord[1], coord[0])
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Clamps latitude to the Web Mercator range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates the tightest bounds containing every point, or None if empty
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self::new(*first, *first);
        for point in &points[1..] {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Returns the union of this bounds with another bounds
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let south = self.south_west.lat.min(other.south_west.lat);
        let west = self.south_west.lng.min(other.south_west.lng);
        let north = self.north_east.lat.max(other.north_east.lat);
        let east = self.north_east.lng.max(other.north_east.lng);

        LatLngBounds::new(LatLng::new(south, west), LatLng::new(north, east))
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LatLng and zoom level
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);

        let x = ((lat_lng.lng + 180.0) / 360.0 * n).floor() as u32;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;

        Self::new(x, y, zoom)
    }

    /// Checks if the tile is valid for the given zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = 2_u32.pow(self.z as u32);
        self.x < max_coord && self.y < max_coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(37.09, -95.71);
        assert_eq!(coord.lat, 37.09);
        assert_eq!(coord.lng, -95.71);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_from_lon_lat() {
        // GeoJSON positions are [lon, lat]
        let coord = LatLng::from_lon_lat([-122.4194, 37.7749]);
        assert_eq!(coord.lat, 37.7749);
        assert_eq!(coord.lng, -122.4194);
    }

    #[test]
    fn test_bounds_contains() {
        let mut bounds = LatLngBounds::new(LatLng::new(40.0, -75.0), LatLng::new(41.0, -73.0));
        assert!(bounds.contains(&LatLng::new(40.5, -74.0)));
        assert!(!bounds.contains(&LatLng::new(42.0, -74.0)));

        bounds.extend(&LatLng::new(42.0, -74.0));
        assert!(bounds.contains(&LatLng::new(42.0, -74.0)));
    }

    #[test]
    fn test_bounds_from_points() {
        assert!(LatLngBounds::from_points(&[]).is_none());

        let points = [
            LatLng::new(40.7128, -74.0060),
            LatLng::new(40.7489, -73.9857),
        ];
        let bounds = LatLngBounds::from_points(&points).unwrap();
        assert_eq!(bounds.south_west.lat, 40.7128);
        assert_eq!(bounds.north_east.lat, 40.7489);
    }

    #[test]
    fn test_tile_coord_validity() {
        let tile = TileCoord::from_lat_lng(&LatLng::new(37.09, -95.71), 5);
        assert!(tile.is_valid());
        assert_eq!(tile.z, 5);
    }
}
