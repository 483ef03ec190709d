//! Translation data forwarded to the gesture toolkit.
//!
//! The core never renders these strings itself; it only hands them to the
//! toolkit through [`crate::toolkit::GestureToolkit::set_language`].

use serde::{Deserialize, Serialize};

/// Supported toolkit languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    De,
    It,
    Ru,
    Ro,
    Es,
    Fr,
    Nl,
}

/// Tooltip strings shown while drawing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationTooltips {
    pub place_marker: Option<String>,
    pub first_vertex: Option<String>,
    pub continue_line: Option<String>,
    pub finish_line: Option<String>,
    pub finish_poly: Option<String>,
    pub finish_rect: Option<String>,
    pub start_circle: Option<String>,
    pub finish_circle: Option<String>,
}

/// Action labels shown in the draw session context menu.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationActions {
    pub finish: Option<String>,
    pub cancel: Option<String>,
    pub remove_last_vertex: Option<String>,
}

/// Toolbar button titles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationButtonTitles {
    pub draw_marker_button: Option<String>,
    pub draw_poly_button: Option<String>,
    pub draw_line_button: Option<String>,
    pub draw_circle_button: Option<String>,
    pub draw_rect_button: Option<String>,
    pub edit_button: Option<String>,
    pub drag_button: Option<String>,
    pub cut_button: Option<String>,
    pub delete_button: Option<String>,
}

/// Override strings for the toolkit's built-in translations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub tooltips: TranslationTooltips,
    pub actions: TranslationActions,
    pub button_titles: TranslationButtonTitles,
}
