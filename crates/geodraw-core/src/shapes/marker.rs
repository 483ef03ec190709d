//! Marker shape.

use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A point marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker position.
    pub position: LatLng,
}

impl Marker {
    /// Create a new marker.
    pub fn new(position: LatLng) -> Self {
        Self { position }
    }
}
