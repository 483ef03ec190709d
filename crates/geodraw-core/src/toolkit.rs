//! The boundary to the external rendering surface and gesture toolkit.
//!
//! The core issues fire-and-forget commands through [`GestureToolkit`] and
//! observes results as [`SurfaceEvent`]s. It never reaches into toolkit
//! state directly.

use crate::lang::{Lang, Translation};
use crate::options::{EditOptions, ResolvedDrawOptions};
use crate::shapes::{DrawKind, Geometry, ShapeKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a mounted live shape instance.
pub type LayerId = Uuid;

/// Toolkit-side properties of a live layer, reported at mount time and
/// consulted by the removal gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFlags {
    /// The layer has active toolkit state attached.
    pub interactive: bool,
    /// Edit options forbid removing this marker.
    pub prevent_marker_removal: bool,
    /// The layer is a group container, not a single shape.
    pub group: bool,
    /// The layer is a transient toolkit helper (draw preview, hint line).
    pub transient: bool,
}

impl Default for LayerFlags {
    fn default() -> Self {
        Self {
            interactive: true,
            prevent_marker_removal: false,
            group: false,
            transient: false,
        }
    }
}

/// Commands the core sends to the gesture toolkit and rendering surface.
pub trait GestureToolkit {
    /// Install translation overrides for the given language.
    fn set_language(&mut self, lang: Lang, translation: &Translation);

    /// Start a draw session for a shape kind.
    fn enable_draw(&mut self, kind: DrawKind, options: &ResolvedDrawOptions);

    /// Cancel any in-progress draw session.
    fn disable_draw(&mut self);

    /// Enable vertex editing on a live layer.
    fn enable_edit(&mut self, layer: LayerId, options: &EditOptions);

    /// Disable vertex editing on a live layer.
    fn disable_edit(&mut self, layer: LayerId);

    /// Enable whole-shape dragging on a live layer.
    fn enable_drag(&mut self, layer: LayerId);

    /// Disable whole-shape dragging on a live layer.
    fn disable_drag(&mut self, layer: LayerId);

    /// Overwrite a live layer's geometry.
    fn set_geometry(&mut self, layer: LayerId, geometry: &Geometry);

    /// Remove a live layer from the surface.
    fn remove_layer(&mut self, layer: LayerId);
}

/// Events the rendering surface and gesture toolkit report back.
///
/// Geometry payloads always describe the live instance at the moment the
/// event fired.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The toolkit finished drawing a new shape. `layer` identifies the
    /// transient preview instance still on the surface.
    Created {
        draw_kind: DrawKind,
        layer: LayerId,
        geometry: Geometry,
    },
    /// A shape instance was added to the surface at `index` in the
    /// combined list.
    Mounted {
        layer: LayerId,
        index: usize,
        kind: ShapeKind,
        flags: LayerFlags,
    },
    /// A mounted instance was replaced or re-rendered at `index`.
    Updated { layer: LayerId, index: usize },
    /// A whole-shape drag started; geometry is the pre-drag state.
    DragStart { layer: LayerId, geometry: Geometry },
    /// Continuous drag motion (markers only); geometry is the current
    /// in-progress position.
    DragMove { layer: LayerId, geometry: Geometry },
    /// A whole-shape drag ended; geometry is the post-drag state.
    DragEnd { layer: LayerId, geometry: Geometry },
    /// A vertex drag started; geometry is the pre-drag state.
    VertexDragStart { layer: LayerId, geometry: Geometry },
    /// A vertex drag ended; geometry is the post-drag state.
    VertexDragEnd { layer: LayerId, geometry: Geometry },
    /// The user clicked a live layer while removal may be active.
    RemoveClick { layer: LayerId },
    /// A live layer left the surface.
    Unmounted { layer: LayerId },
}
