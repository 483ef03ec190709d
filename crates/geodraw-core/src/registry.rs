//! Per-kind dispatch table.
//!
//! Keeps the event bridge generic over shape kinds: projections, kind-local
//! indexing and hook routing all go through this one module, so adding a
//! kind touches the matches here instead of every event site.

use crate::hooks::DrawingHooks;
use crate::shapes::{Shape, ShapeKind};

/// Filter-by-kind projection of a combined shape list.
///
/// Re-derived on every call; never cached.
pub fn project_kind(layers: &[Shape], kind: ShapeKind) -> Vec<Shape> {
    layers
        .iter()
        .filter(|s| s.kind() == kind)
        .cloned()
        .collect()
}

/// Position of a combined-list index within its own kind's projection.
pub fn kind_index(layers: &[Shape], combined_index: usize) -> usize {
    let kind = layers[combined_index].kind();
    layers[..combined_index]
        .iter()
        .filter(|s| s.kind() == kind)
        .count()
}

/// Copy of `layers` with `shape` appended.
pub fn with_appended(layers: &[Shape], shape: &Shape) -> Vec<Shape> {
    let mut next = layers.to_vec();
    next.push(shape.clone());
    next
}

/// Copy of `layers` with the element at `index` replaced by `shape`.
///
/// Out-of-range indices leave the copy unchanged.
pub fn with_replaced(layers: &[Shape], index: usize, shape: &Shape) -> Vec<Shape> {
    let mut next = layers.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = shape.clone();
    }
    next
}

/// Copy of `layers` with the element at `index` removed.
pub fn with_removed(layers: &[Shape], index: usize) -> Vec<Shape> {
    let mut next = layers.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Route a draw event to the one kind-specific draw hook.
pub(crate) fn dispatch_draw(hooks: &mut DrawingHooks, shape: &Shape, kind_array: &[Shape]) {
    let hook = match shape.kind() {
        ShapeKind::Marker => &mut hooks.on_draw_marker,
        ShapeKind::Circle => &mut hooks.on_draw_circle,
        ShapeKind::Polyline => &mut hooks.on_draw_polyline,
        ShapeKind::Polygon => &mut hooks.on_draw_polygon,
        ShapeKind::Rectangle => &mut hooks.on_draw_rectangle,
    };
    if let Some(hook) = hook {
        hook(shape, kind_array);
    }
}

/// Route a change event to the one kind-specific change hook.
pub(crate) fn dispatch_change(
    hooks: &mut DrawingHooks,
    shape: &Shape,
    index: usize,
    kind_array: &[Shape],
) {
    let hook = match shape.kind() {
        ShapeKind::Marker => &mut hooks.on_marker_change,
        ShapeKind::Circle => &mut hooks.on_circle_change,
        ShapeKind::Polyline => &mut hooks.on_polyline_change,
        ShapeKind::Polygon => &mut hooks.on_polygon_change,
        ShapeKind::Rectangle => &mut hooks.on_rectangle_change,
    };
    if let Some(hook) = hook {
        hook(shape, index, kind_array);
    }
}

/// Route a remove event to the one kind-specific remove hook.
pub(crate) fn dispatch_remove(
    hooks: &mut DrawingHooks,
    shape: &Shape,
    index: usize,
    kind_array: &[Shape],
) {
    let hook = match shape.kind() {
        ShapeKind::Marker => &mut hooks.on_remove_marker,
        ShapeKind::Circle => &mut hooks.on_remove_circle,
        ShapeKind::Polyline => &mut hooks.on_remove_polyline,
        ShapeKind::Polygon => &mut hooks.on_remove_polygon,
        ShapeKind::Rectangle => &mut hooks.on_remove_rectangle,
    };
    if let Some(hook) = hook {
        hook(shape, index, kind_array);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::shapes::{Circle, Marker};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn marker(lat: f64) -> Shape {
        Shape::Marker(Marker::new(LatLng::new(lat, 0.0)))
    }

    fn circle(lat: f64) -> Shape {
        Shape::Circle(Circle::new(LatLng::new(lat, 0.0), 10.0))
    }

    #[test]
    fn test_project_kind_keeps_order() {
        let layers = vec![marker(1.0), circle(2.0), marker(3.0)];
        let markers = project_kind(&layers, ShapeKind::Marker);
        assert_eq!(markers, vec![marker(1.0), marker(3.0)]);
        assert_eq!(project_kind(&layers, ShapeKind::Circle), vec![circle(2.0)]);
        assert!(project_kind(&layers, ShapeKind::Polygon).is_empty());
    }

    #[test]
    fn test_project_kind_rederives() {
        let mut layers = vec![marker(1.0)];
        assert_eq!(project_kind(&layers, ShapeKind::Marker).len(), 1);
        layers.push(marker(2.0));
        assert_eq!(project_kind(&layers, ShapeKind::Marker).len(), 2);
    }

    #[test]
    fn test_kind_index_is_kind_local() {
        let layers = vec![circle(1.0), marker(2.0), circle(3.0), marker(4.0)];
        assert_eq!(kind_index(&layers, 0), 0);
        assert_eq!(kind_index(&layers, 1), 0);
        assert_eq!(kind_index(&layers, 2), 1);
        assert_eq!(kind_index(&layers, 3), 1);
    }

    #[test]
    fn test_with_removed() {
        let layers = vec![marker(1.0), marker(2.0), marker(3.0)];
        assert_eq!(with_removed(&layers, 1), vec![marker(1.0), marker(3.0)]);
        assert_eq!(with_removed(&layers, 9).len(), 3);
    }

    #[test]
    fn test_with_replaced_out_of_range() {
        let layers = vec![marker(1.0)];
        assert_eq!(with_replaced(&layers, 5, &marker(9.0)), layers);
    }

    #[test]
    fn test_dispatch_draw_routes_by_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_markers = seen.clone();
        let mut hooks = DrawingHooks::new()
            .on_draw_marker(move |shape, array| {
                seen_markers.borrow_mut().push((shape.clone(), array.len()));
            })
            .on_draw_circle(|_, _| panic!("circle hook must not fire for a marker"));

        let shape = marker(1.0);
        dispatch_draw(&mut hooks, &shape, &[shape.clone()]);
        assert_eq!(&*seen.borrow(), &[(marker(1.0), 1)]);
    }

    #[test]
    fn test_dispatch_missing_hook_is_silent() {
        let mut hooks = DrawingHooks::new();
        dispatch_remove(&mut hooks, &circle(1.0), 0, &[]);
    }
}
