//! Polyline shape.

use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// An open sequence of connected line segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertices in draw order.
    pub points: Vec<LatLng>,
}

impl Polyline {
    /// Create a new polyline.
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
