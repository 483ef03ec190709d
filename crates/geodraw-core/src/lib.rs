//! Geodraw Core Library
//!
//! Reconciliation core between a host application's declared shape state
//! and a gesture toolkit drawing on a map surface.

pub mod drawing;
pub mod geo;
pub mod hooks;
pub mod lang;
pub mod mode;
pub mod options;
pub mod registry;
pub mod shapes;
pub mod style;
pub mod toolkit;

pub use drawing::{Drawing, DrawingProps};
pub use geo::{LatLng, LatLngBounds};
pub use hooks::DrawingHooks;
pub use lang::{Lang, Translation};
pub use mode::{Mode, transition_required};
pub use options::{
    DrawOptions, EditOptions, FinishOn, ResolvedDrawOptions, resolve_draw_options,
};
pub use shapes::{
    Circle, DrawKind, Geometry, GeometryError, Marker, Polygon, Polyline, Rectangle, Shape,
    ShapeKind,
};
pub use style::{Color, Icon, LineCap, LineJoin, MarkerStyle, PathStyle, Theme};
pub use toolkit::{GestureToolkit, LayerFlags, LayerId, SurfaceEvent};
