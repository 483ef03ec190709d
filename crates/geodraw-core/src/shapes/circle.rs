//! Circle shape.

use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A circle defined by a center and a radius in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position.
    pub center: LatLng,
    /// Radius in meters.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: LatLng, radius: f64) -> Self {
        Self { center, radius }
    }
}
