//! Operating modes and the mode transition predicate.

use crate::options::DrawOptions;
use crate::shapes::DrawKind;
use serde::{Deserialize, Serialize};

/// The component's operating mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// No toolkit interaction.
    #[default]
    None,
    /// A draw session for the active draw kind is running.
    Draw,
    /// Whole-shape dragging is enabled on every live layer.
    Drag,
    /// Vertex editing is enabled on every live layer.
    Edit,
    /// Clicks on live layers are interpreted as removal requests.
    /// Not a toolkit-level mode; nothing is enabled or disabled.
    Remove,
}

/// Decide whether a disable-then-enable transition is required.
///
/// Required iff the mode changed, or the mode stayed `Draw` while the draw
/// kind or draw configuration changed. Setting the current mode again with
/// identical draw inputs is a no-op.
pub fn transition_required(
    prev_mode: Mode,
    prev_kind: DrawKind,
    prev_options: &DrawOptions,
    mode: Mode,
    kind: DrawKind,
    options: &DrawOptions,
) -> bool {
    mode != prev_mode || (mode == Mode::Draw && (kind != prev_kind || options != prev_options))
}
