//! Geographic primitives.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a new coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Create bounds from explicit south-west and north-east corners.
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Create bounds from any two opposite corners, normalizing the extent.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Get the center of the bounds.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Get the four corners as a closed ring: SW, NW, NE, SE.
    pub fn corners(&self) -> [LatLng; 4] {
        [
            self.south_west,
            LatLng::new(self.north_east.lat, self.south_west.lng),
            self.north_east,
            LatLng::new(self.south_west.lat, self.north_east.lng),
        ]
    }

    /// Check whether a coordinate lies inside the bounds.
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let bounds = LatLngBounds::from_corners(LatLng::new(10.0, 20.0), LatLng::new(-5.0, 3.0));
        assert_eq!(bounds.south_west, LatLng::new(-5.0, 3.0));
        assert_eq!(bounds.north_east, LatLng::new(10.0, 20.0));
    }

    #[test]
    fn test_center() {
        let bounds = LatLngBounds::from_corners(LatLng::new(0.0, 0.0), LatLng::new(10.0, 20.0));
        assert_eq!(bounds.center(), LatLng::new(5.0, 10.0));
    }

    #[test]
    fn test_corners_order() {
        let bounds = LatLngBounds::from_corners(LatLng::new(0.0, 0.0), LatLng::new(1.0, 2.0));
        let corners = bounds.corners();
        assert_eq!(corners[0], LatLng::new(0.0, 0.0));
        assert_eq!(corners[1], LatLng::new(1.0, 0.0));
        assert_eq!(corners[2], LatLng::new(1.0, 2.0));
        assert_eq!(corners[3], LatLng::new(0.0, 2.0));
    }

    #[test]
    fn test_contains() {
        let bounds = LatLngBounds::from_corners(LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0));
        assert!(bounds.contains(LatLng::new(5.0, 5.0)));
        assert!(!bounds.contains(LatLng::new(11.0, 5.0)));
    }
}
