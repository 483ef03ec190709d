//! Rectangle shape.

use crate::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its geographic bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Bounding box of the rectangle.
    pub bounds: LatLngBounds,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(bounds: LatLngBounds) -> Self {
        Self { bounds }
    }

    /// Create a rectangle from any two opposite corners.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            bounds: LatLngBounds::from_corners(a, b),
        }
    }

    /// The four corner vertices as a closed ring.
    pub fn corners(&self) -> [LatLng; 4] {
        self.bounds.corners()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(LatLng::new(10.0, 10.0), LatLng::new(5.0, 5.0));
        assert_eq!(rect.bounds.south_west, LatLng::new(5.0, 5.0));
        assert_eq!(rect.bounds.north_east, LatLng::new(10.0, 10.0));
    }
}
