//! Polygon shape.

use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A closed polygon with an outer ring and optional hole rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Rings of vertices; the first ring is the outer boundary.
    pub rings: Vec<Vec<LatLng>>,
}

impl Polygon {
    /// Create a polygon from a single outer ring.
    pub fn new(outer: Vec<LatLng>) -> Self {
        Self { rings: vec![outer] }
    }

    /// Create a polygon from an outer ring plus hole rings.
    pub fn with_holes(outer: Vec<LatLng>, holes: Vec<Vec<LatLng>>) -> Self {
        let mut rings = vec![outer];
        rings.extend(holes);
        Self { rings }
    }

    /// The outer boundary ring, if present.
    pub fn outer(&self) -> Option<&[LatLng]> {
        self.rings.first().map(|r| r.as_slice())
    }
}
