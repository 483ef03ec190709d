//! The drawing controller.
//!
//! Reconciles three things: the toolkit's live operating mode, the
//! authoritative shape collection (host-controlled or internally owned),
//! and the per-kind projections of that collection. Mode changes become
//! toolkit commands; toolkit events become immutable shape snapshots
//! delivered to host hooks.

use crate::hooks::DrawingHooks;
use crate::mode::{Mode, transition_required};
use crate::options::{DrawOptions, EditOptions, resolve_draw_options};
use crate::registry;
use crate::shapes::{
    Circle, DrawKind, Geometry, GeometryError, Marker, Polygon, Polyline, Rectangle, Shape,
    ShapeKind,
};
use crate::style::Theme;
use crate::toolkit::{GestureToolkit, LayerFlags, LayerId, SurfaceEvent};
use crate::{Lang, Translation};
use log::{debug, trace};
use std::collections::HashMap;

/// Host-declared intent: mode, configuration and (optionally) the shape
/// collections themselves.
///
/// Supplying any of the six collection fields makes the component
/// controlled: the host owns the shape lists and the controller only
/// reports what it would change. With all six unset the controller owns
/// the collection itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingProps {
    pub lang: Lang,
    pub translation: Translation,
    pub mode: Mode,
    pub draw_kind: DrawKind,
    pub draw_options: DrawOptions,
    pub edit_options: EditOptions,
    /// Combined shape list; authoritative over the per-kind lists.
    pub layers: Option<Vec<Shape>>,
    pub markers: Option<Vec<Marker>>,
    pub circles: Option<Vec<Circle>>,
    pub polylines: Option<Vec<Polyline>>,
    pub polygons: Option<Vec<Polygon>>,
    pub rectangles: Option<Vec<Rectangle>>,
}

/// Drag lifecycle of a single live layer.
#[derive(Debug, Clone)]
enum DragState {
    Idle,
    Dragging { captured: Geometry },
}

/// Registry entry for one mounted live layer.
#[derive(Debug, Clone)]
struct LayerEntry {
    kind: ShapeKind,
    /// Position in the combined list, refreshed on mount and update.
    index: usize,
    flags: LayerFlags,
    drag: DragState,
}

/// Reconciliation controller between a host application and a gesture
/// toolkit mutating live shapes on a map surface.
pub struct Drawing<T: GestureToolkit> {
    props: DrawingProps,
    hooks: DrawingHooks,
    theme: Theme,
    toolkit: T,
    /// Internally-owned collection, used only while uncontrolled.
    state: Vec<Shape>,
    /// Live layer registry, keyed by stable layer identity.
    live: HashMap<LayerId, LayerEntry>,
}

impl<T: GestureToolkit> Drawing<T> {
    /// Create a controller, install the translation and enable the initial
    /// mode.
    pub fn new(props: DrawingProps, hooks: DrawingHooks, theme: Theme, toolkit: T) -> Self {
        let mut drawing = Self {
            props,
            hooks,
            theme,
            toolkit,
            state: Vec::new(),
            live: HashMap::new(),
        };
        drawing
            .toolkit
            .set_language(drawing.props.lang, &drawing.props.translation);
        drawing.enable_mode();
        drawing
    }

    /// The current props.
    pub fn props(&self) -> &DrawingProps {
        &self.props
    }

    /// The toolkit handle.
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Replace the props, transitioning the toolkit mode when required.
    ///
    /// A transition happens iff the mode changed, or the mode stayed
    /// `Draw` while the draw kind or draw configuration changed.
    pub fn set_props(&mut self, props: DrawingProps) {
        let needs_transition = transition_required(
            self.props.mode,
            self.props.draw_kind,
            &self.props.draw_options,
            props.mode,
            props.draw_kind,
            &props.draw_options,
        );
        let language_changed =
            props.lang != self.props.lang || props.translation != self.props.translation;
        let prev_mode = self.props.mode;
        self.props = props;

        if language_changed {
            self.toolkit
                .set_language(self.props.lang, &self.props.translation);
        }
        if needs_transition {
            debug!("mode transition: {:?} -> {:?}", prev_mode, self.props.mode);
            self.disable_mode(prev_mode);
            self.enable_mode();
        }
    }

    /// Whether the host owns the shape collection.
    ///
    /// Recomputed on every call: true iff any of the six collection props
    /// is supplied.
    pub fn is_controlled(&self) -> bool {
        self.props.layers.is_some()
            || self.props.markers.is_some()
            || self.props.circles.is_some()
            || self.props.polylines.is_some()
            || self.props.polygons.is_some()
            || self.props.rectangles.is_some()
    }

    /// The effective ordered shape list to render.
    ///
    /// Controlled: the combined list verbatim if supplied, else the
    /// per-kind lists concatenated in fixed order [markers, circles,
    /// polylines, polygons, rectangles]. Uncontrolled: the internally
    /// owned collection. Pure and idempotent.
    pub fn effective_layers(&self) -> Vec<Shape> {
        if self.is_controlled() {
            if let Some(layers) = &self.props.layers {
                return layers.clone();
            }
            let mut combined = Vec::new();
            combined.extend(self.props.markers.iter().flatten().cloned().map(Shape::from));
            combined.extend(self.props.circles.iter().flatten().cloned().map(Shape::from));
            combined.extend(
                self.props
                    .polylines
                    .iter()
                    .flatten()
                    .cloned()
                    .map(Shape::from),
            );
            combined.extend(
                self.props
                    .polygons
                    .iter()
                    .flatten()
                    .cloned()
                    .map(Shape::from),
            );
            combined.extend(
                self.props
                    .rectangles
                    .iter()
                    .flatten()
                    .cloned()
                    .map(Shape::from),
            );
            return combined;
        }
        self.state.clone()
    }

    /// Feed one toolkit/surface event through the bridge.
    ///
    /// Fails only when an event carries geometry of the wrong kind for its
    /// target layer, which is a caller contract violation.
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Result<(), GeometryError> {
        match event {
            SurfaceEvent::Created {
                draw_kind,
                layer,
                geometry,
            } => {
                self.on_created(draw_kind, layer, geometry);
                Ok(())
            }
            SurfaceEvent::Mounted {
                layer,
                index,
                kind,
                flags,
            } => {
                self.live.insert(
                    layer,
                    LayerEntry {
                        kind,
                        index,
                        flags,
                        drag: DragState::Idle,
                    },
                );
                if self.props.mode == Mode::Edit {
                    self.toolkit.enable_edit(layer, &self.props.edit_options);
                }
                Ok(())
            }
            SurfaceEvent::Updated { layer, index } => {
                if let Some(entry) = self.live.get_mut(&layer) {
                    entry.index = index;
                }
                // Controlled updates can replace the live instance wholesale;
                // edit interaction has to follow the new instance.
                if self.props.mode == Mode::Edit {
                    self.toolkit.enable_edit(layer, &self.props.edit_options);
                }
                Ok(())
            }
            SurfaceEvent::DragStart { layer, geometry }
            | SurfaceEvent::VertexDragStart { layer, geometry } => {
                self.on_drag_start(layer, geometry)
            }
            SurfaceEvent::DragMove { layer, geometry } => self.on_drag_move(layer, geometry),
            SurfaceEvent::DragEnd { layer, geometry } => self.on_drag_end(layer, geometry, false),
            SurfaceEvent::VertexDragEnd { layer, geometry } => {
                self.on_drag_end(layer, geometry, true)
            }
            SurfaceEvent::RemoveClick { layer } => {
                self.on_remove_click(layer);
                Ok(())
            }
            SurfaceEvent::Unmounted { layer } => {
                self.live.remove(&layer);
                Ok(())
            }
        }
    }

    /// A draw gesture finished: export the new shape, then immediately
    /// re-arm drawing for the same kind.
    fn on_created(&mut self, draw_kind: DrawKind, layer: LayerId, geometry: Geometry) {
        // The toolkit's preview instance is transient; the shape re-enters
        // through the effective list.
        self.toolkit.remove_layer(layer);

        let shape = Shape::from_geometry(geometry);
        debug!("draw finished: {:?}", shape.kind());
        let layers = self.effective_layers();
        let combined = registry::with_appended(&layers, &shape);
        if let Some(hook) = self.hooks.on_draw_layer.as_mut() {
            hook(&shape, &combined);
        }
        if draw_kind.shape_kind() == shape.kind() {
            let kind_array = registry::with_appended(
                &registry::project_kind(&layers, shape.kind()),
                &shape,
            );
            registry::dispatch_draw(&mut self.hooks, &shape, &kind_array);
        }
        if !self.is_controlled() {
            self.state.push(shape);
        }

        // Continuous multi-draw until the host changes mode.
        let resolved =
            resolve_draw_options(self.props.draw_kind, &self.props.draw_options, &self.theme);
        self.toolkit.enable_draw(self.props.draw_kind, &resolved);
    }

    fn on_drag_start(&mut self, layer: LayerId, geometry: Geometry) -> Result<(), GeometryError> {
        let Some(entry) = self.live.get_mut(&layer) else {
            return Ok(());
        };
        if geometry.kind() != entry.kind {
            return Err(GeometryError::KindMismatch {
                expected: entry.kind,
                found: geometry.kind(),
            });
        }
        entry.drag = DragState::Dragging { captured: geometry };
        Ok(())
    }

    /// Continuous marker drag. While controlled, the live instance is
    /// pinned to its captured position and only the exported snapshot
    /// carries the in-progress position.
    fn on_drag_move(&mut self, layer: LayerId, geometry: Geometry) -> Result<(), GeometryError> {
        let Some(entry) = self.live.get(&layer) else {
            return Ok(());
        };
        if geometry.kind() != entry.kind {
            return Err(GeometryError::KindMismatch {
                expected: entry.kind,
                found: geometry.kind(),
            });
        }
        if entry.kind != ShapeKind::Marker || !self.is_controlled() {
            return Ok(());
        }
        let DragState::Dragging { captured } = entry.drag.clone() else {
            return Ok(());
        };
        let index = entry.index;
        let shape = Shape::from_geometry(geometry);
        self.toolkit.set_geometry(layer, &captured);
        self.emit_change(index, &shape);
        Ok(())
    }

    /// Drag or vertex drag finished. Non-marker kinds export a snapshot of
    /// the post-drag geometry and, while controlled, reset the live
    /// instance to its captured pre-drag geometry.
    fn on_drag_end(
        &mut self,
        layer: LayerId,
        geometry: Geometry,
        vertex: bool,
    ) -> Result<(), GeometryError> {
        let Some(entry) = self.live.get_mut(&layer) else {
            return Ok(());
        };
        if geometry.kind() != entry.kind {
            return Err(GeometryError::KindMismatch {
                expected: entry.kind,
                found: geometry.kind(),
            });
        }
        let drag = std::mem::replace(&mut entry.drag, DragState::Idle);
        let index = entry.index;
        let kind = entry.kind;
        let DragState::Dragging { captured } = drag else {
            return Ok(());
        };
        // Marker changes were already emitted continuously during the drag.
        if kind == ShapeKind::Marker {
            return Ok(());
        }
        if self.is_controlled() {
            let shape = Shape::from_geometry(geometry);
            self.toolkit.set_geometry(layer, &captured);
            self.emit_change(index, &shape);
            if vertex {
                // The geometry reset implicitly disables edit handles.
                self.toolkit.enable_edit(layer, &self.props.edit_options);
            }
        }
        Ok(())
    }

    fn on_remove_click(&mut self, layer: LayerId) {
        if self.props.mode != Mode::Remove {
            return;
        }
        let Some(entry) = self.live.get(&layer) else {
            return;
        };
        let relevant =
            entry.flags.interactive && !entry.flags.prevent_marker_removal && !entry.flags.group;
        let removable = !entry.flags.transient && matches!(entry.drag, DragState::Idle);
        if !relevant || !removable {
            trace!("removal click ignored for layer {layer}");
            return;
        }

        let index = entry.index;
        let layers = self.effective_layers();
        let Some(shape) = layers.get(index).cloned() else {
            return;
        };
        let combined = registry::with_removed(&layers, index);
        if let Some(hook) = self.hooks.on_remove_layer.as_mut() {
            hook(&shape, index, &combined);
        }
        let kind_index = registry::kind_index(&layers, index);
        let kind_array = registry::with_removed(
            &registry::project_kind(&layers, shape.kind()),
            kind_index,
        );
        registry::dispatch_remove(&mut self.hooks, &shape, kind_index, &kind_array);
        if !self.is_controlled() {
            self.state.remove(index);
        }
        self.live.remove(&layer);
    }

    /// Emit combined and kind-local change hooks for a shape snapshot.
    fn emit_change(&mut self, combined_index: usize, shape: &Shape) {
        let layers = self.effective_layers();
        if layers
            .get(combined_index)
            .is_none_or(|current| current.kind() != shape.kind())
        {
            // Host lists and surface indices are out of step.
            return;
        }
        let combined = registry::with_replaced(&layers, combined_index, shape);
        if let Some(hook) = self.hooks.on_layer_change.as_mut() {
            hook(shape, combined_index, &combined);
        }
        let kind_index = registry::kind_index(&layers, combined_index);
        let kind_array = registry::with_replaced(
            &registry::project_kind(&layers, shape.kind()),
            kind_index,
            shape,
        );
        registry::dispatch_change(&mut self.hooks, shape, kind_index, &kind_array);
    }

    fn disable_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Draw => self.toolkit.disable_draw(),
            Mode::Edit => {
                for id in self.live.keys() {
                    self.toolkit.disable_edit(*id);
                }
            }
            Mode::Drag => {
                for id in self.live.keys() {
                    self.toolkit.disable_drag(*id);
                }
            }
            Mode::None | Mode::Remove => {}
        }
    }

    fn enable_mode(&mut self) {
        match self.props.mode {
            Mode::Draw => {
                let resolved = resolve_draw_options(
                    self.props.draw_kind,
                    &self.props.draw_options,
                    &self.theme,
                );
                debug!("enable draw: {:?}", self.props.draw_kind);
                self.toolkit.enable_draw(self.props.draw_kind, &resolved);
            }
            Mode::Edit => {
                for id in self.live.keys() {
                    self.toolkit.enable_edit(*id, &self.props.edit_options);
                }
            }
            Mode::Drag => {
                for id in self.live.keys() {
                    self.toolkit.enable_drag(*id);
                }
            }
            Mode::None | Mode::Remove => {}
        }
    }
}
