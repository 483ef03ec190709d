//! Host callback set.
//!
//! Every hook is optional; an absent hook means that event class is simply
//! unobserved. Draw hooks receive `(new_shape, resulting_array)`; change
//! and remove hooks additionally receive the shape's index. Kind-specific
//! hooks receive indices and arrays local to that kind's own collection,
//! not the combined one.

use crate::shapes::Shape;

/// Callback for draw events: `(new_shape, resulting_array)`.
pub type DrawHook = Box<dyn FnMut(&Shape, &[Shape])>;

/// Callback for change events: `(changed_shape, index, resulting_array)`.
pub type ChangeHook = Box<dyn FnMut(&Shape, usize, &[Shape])>;

/// Callback for remove events: `(removed_shape, pre_removal_index, resulting_array)`.
pub type RemoveHook = Box<dyn FnMut(&Shape, usize, &[Shape])>;

/// The full optional callback surface exposed to the host.
#[derive(Default)]
pub struct DrawingHooks {
    pub on_draw_layer: Option<DrawHook>,
    pub on_draw_marker: Option<DrawHook>,
    pub on_draw_circle: Option<DrawHook>,
    pub on_draw_polyline: Option<DrawHook>,
    pub on_draw_polygon: Option<DrawHook>,
    pub on_draw_rectangle: Option<DrawHook>,
    pub on_layer_change: Option<ChangeHook>,
    pub on_marker_change: Option<ChangeHook>,
    pub on_circle_change: Option<ChangeHook>,
    pub on_polyline_change: Option<ChangeHook>,
    pub on_polygon_change: Option<ChangeHook>,
    pub on_rectangle_change: Option<ChangeHook>,
    pub on_remove_layer: Option<RemoveHook>,
    pub on_remove_marker: Option<RemoveHook>,
    pub on_remove_circle: Option<RemoveHook>,
    pub on_remove_polyline: Option<RemoveHook>,
    pub on_remove_polygon: Option<RemoveHook>,
    pub on_remove_rectangle: Option<RemoveHook>,
}

impl std::fmt::Debug for DrawingHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingHooks")
            .field("on_draw_layer", &self.on_draw_layer.is_some())
            .field("on_layer_change", &self.on_layer_change.is_some())
            .field("on_remove_layer", &self.on_remove_layer.is_some())
            .finish_non_exhaustive()
    }
}

impl DrawingHooks {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe every finished draw on the combined collection.
    pub fn on_draw_layer(mut self, f: impl FnMut(&Shape, &[Shape]) + 'static) -> Self {
        self.on_draw_layer = Some(Box::new(f));
        self
    }

    /// Observe every shape change on the combined collection.
    pub fn on_layer_change(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_layer_change = Some(Box::new(f));
        self
    }

    /// Observe every removal on the combined collection.
    pub fn on_remove_layer(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_remove_layer = Some(Box::new(f));
        self
    }

    /// Observe finished marker draws.
    pub fn on_draw_marker(mut self, f: impl FnMut(&Shape, &[Shape]) + 'static) -> Self {
        self.on_draw_marker = Some(Box::new(f));
        self
    }

    /// Observe finished circle draws.
    pub fn on_draw_circle(mut self, f: impl FnMut(&Shape, &[Shape]) + 'static) -> Self {
        self.on_draw_circle = Some(Box::new(f));
        self
    }

    /// Observe finished polyline draws.
    pub fn on_draw_polyline(mut self, f: impl FnMut(&Shape, &[Shape]) + 'static) -> Self {
        self.on_draw_polyline = Some(Box::new(f));
        self
    }

    /// Observe finished polygon draws.
    pub fn on_draw_polygon(mut self, f: impl FnMut(&Shape, &[Shape]) + 'static) -> Self {
        self.on_draw_polygon = Some(Box::new(f));
        self
    }

    /// Observe finished rectangle draws.
    pub fn on_draw_rectangle(mut self, f: impl FnMut(&Shape, &[Shape]) + 'static) -> Self {
        self.on_draw_rectangle = Some(Box::new(f));
        self
    }

    /// Observe marker changes.
    pub fn on_marker_change(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_marker_change = Some(Box::new(f));
        self
    }

    /// Observe circle changes.
    pub fn on_circle_change(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_circle_change = Some(Box::new(f));
        self
    }

    /// Observe polyline changes.
    pub fn on_polyline_change(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_polyline_change = Some(Box::new(f));
        self
    }

    /// Observe polygon changes.
    pub fn on_polygon_change(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_polygon_change = Some(Box::new(f));
        self
    }

    /// Observe rectangle changes.
    pub fn on_rectangle_change(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_rectangle_change = Some(Box::new(f));
        self
    }

    /// Observe marker removals.
    pub fn on_remove_marker(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_remove_marker = Some(Box::new(f));
        self
    }

    /// Observe circle removals.
    pub fn on_remove_circle(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_remove_circle = Some(Box::new(f));
        self
    }

    /// Observe polyline removals.
    pub fn on_remove_polyline(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_remove_polyline = Some(Box::new(f));
        self
    }

    /// Observe polygon removals.
    pub fn on_remove_polygon(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_remove_polygon = Some(Box::new(f));
        self
    }

    /// Observe rectangle removals.
    pub fn on_remove_rectangle(mut self, f: impl FnMut(&Shape, usize, &[Shape]) + 'static) -> Self {
        self.on_remove_rectangle = Some(Box::new(f));
        self
    }
}
