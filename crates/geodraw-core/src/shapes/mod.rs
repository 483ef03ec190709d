//! Shape definitions for the drawing surface.
//!
//! Shapes are value-like: the host receives freshly constructed snapshots,
//! never references to the live instances the gesture toolkit mutates.

mod circle;
mod marker;
mod polygon;
mod polyline;
mod rectangle;

pub use circle::Circle;
pub use marker::Marker;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rectangle::Rectangle;

use crate::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by geometry operations on shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry of one kind was applied to a shape of another kind.
    #[error("geometry kind {found:?} does not match shape kind {expected:?}")]
    KindMismatch {
        expected: ShapeKind,
        found: ShapeKind,
    },
}

/// The kind of a shape value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Marker,
    Circle,
    Polyline,
    Polygon,
    Rectangle,
}

impl ShapeKind {
    /// All kinds, in the fixed per-kind collection order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Marker,
        ShapeKind::Circle,
        ShapeKind::Polyline,
        ShapeKind::Polygon,
        ShapeKind::Rectangle,
    ];
}

/// The active shape kind while in draw mode.
///
/// Draw kinds name gestures, not value types: drawing a `Line` produces a
/// [`Polyline`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawKind {
    #[default]
    Marker,
    Circle,
    Line,
    Polygon,
    Rectangle,
}

impl DrawKind {
    /// The shape kind a finished draw gesture of this kind produces.
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            DrawKind::Marker => ShapeKind::Marker,
            DrawKind::Circle => ShapeKind::Circle,
            DrawKind::Line => ShapeKind::Polyline,
            DrawKind::Polygon => ShapeKind::Polygon,
            DrawKind::Rectangle => ShapeKind::Rectangle,
        }
    }
}

/// Detached geometry payload, one variant per shape kind.
///
/// This is what gesture events carry: the live instance's current geometry
/// without any shape identity attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(LatLng),
    Circle { center: LatLng, radius: f64 },
    Path(Vec<LatLng>),
    Rings(Vec<Vec<LatLng>>),
    Bounds(LatLngBounds),
}

impl Geometry {
    /// The shape kind this geometry belongs to.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Point(_) => ShapeKind::Marker,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Path(_) => ShapeKind::Polyline,
            Geometry::Rings(_) => ShapeKind::Polygon,
            Geometry::Bounds(_) => ShapeKind::Rectangle,
        }
    }
}

/// Tagged union over all shape kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Marker(Marker),
    Circle(Circle),
    Polyline(Polyline),
    Polygon(Polygon),
    Rectangle(Rectangle),
}

impl Shape {
    /// Get the kind tag.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Marker(_) => ShapeKind::Marker,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Extract the geometry payload.
    pub fn geometry(&self) -> Geometry {
        match self {
            Shape::Marker(s) => Geometry::Point(s.position),
            Shape::Circle(s) => Geometry::Circle {
                center: s.center,
                radius: s.radius,
            },
            Shape::Polyline(s) => Geometry::Path(s.points.clone()),
            Shape::Polygon(s) => Geometry::Rings(s.rings.clone()),
            Shape::Rectangle(s) => Geometry::Bounds(s.bounds),
        }
    }

    /// Construct a fresh detached shape from a geometry payload.
    pub fn from_geometry(geometry: Geometry) -> Shape {
        match geometry {
            Geometry::Point(position) => Shape::Marker(Marker::new(position)),
            Geometry::Circle { center, radius } => Shape::Circle(Circle::new(center, radius)),
            Geometry::Path(points) => Shape::Polyline(Polyline::new(points)),
            Geometry::Rings(rings) => Shape::Polygon(Polygon { rings }),
            Geometry::Bounds(bounds) => Shape::Rectangle(Rectangle::new(bounds)),
        }
    }

    /// Construct a new shape of this shape's kind from a geometry payload.
    ///
    /// Fails if the payload belongs to a different kind; callers are
    /// expected to never mix kinds, so this is a contract check rather than
    /// a coercion.
    pub fn with_geometry(&self, geometry: Geometry) -> Result<Shape, GeometryError> {
        if geometry.kind() != self.kind() {
            return Err(GeometryError::KindMismatch {
                expected: self.kind(),
                found: geometry.kind(),
            });
        }
        Ok(Shape::from_geometry(geometry))
    }

    /// Replace this shape's geometry in place.
    pub fn apply_geometry(&mut self, geometry: Geometry) -> Result<(), GeometryError> {
        *self = self.with_geometry(geometry)?;
        Ok(())
    }

    /// Serialize the shape to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a shape from JSON.
    pub fn from_json(json: &str) -> Result<Shape, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Marker> for Shape {
    fn from(s: Marker) -> Self {
        Shape::Marker(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Polyline> for Shape {
    fn from(s: Polyline) -> Self {
        Shape::Polyline(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}
