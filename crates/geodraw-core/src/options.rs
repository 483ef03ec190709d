//! Draw and edit configuration, and the pure draw-option resolver.

use crate::shapes::DrawKind;
use crate::style::{Icon, MarkerStyle, PathStyle, Theme};
use serde::{Deserialize, Serialize};

/// Dash pattern applied to hint lines unless the host overrides it.
const HINTLINE_DASH: [f64; 2] = [5.0, 5.0];

/// Gesture that finishes an in-progress draw session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishOn {
    Click,
    DblClick,
    MouseDown,
    MouseOver,
    MouseOut,
    ContextMenu,
}

/// Host-supplied draw session configuration.
///
/// Everything is optional; unset fields fall back to toolkit defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    pub snappable: Option<bool>,
    pub snap_distance: Option<f64>,
    pub snap_middle: Option<bool>,
    pub tooltips: Option<bool>,
    pub allow_self_intersection: Option<bool>,
    pub templine_style: Option<PathStyle>,
    pub hintline_style: Option<PathStyle>,
    pub cursor_marker: Option<bool>,
    pub finish_on: Option<FinishOn>,
    pub marker_style: Option<MarkerStyle>,
    pub path_options: Option<PathStyle>,
}

/// Host-supplied edit interaction configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditOptions {
    pub draggable: Option<bool>,
    pub snappable: Option<bool>,
    pub snap_distance: Option<f64>,
    pub allow_self_intersection: Option<bool>,
    pub prevent_marker_removal: Option<bool>,
    pub hintline_style: Option<PathStyle>,
}

/// Draw options after theme and default resolution, as handed to the
/// toolkit when a draw session starts.
///
/// Structural equality on this type is the change-detection contract:
/// resolving the same inputs yields an equal value, and any structural
/// input difference shows up here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvedDrawOptions {
    pub snappable: Option<bool>,
    pub snap_distance: Option<f64>,
    pub snap_middle: Option<bool>,
    pub tooltips: Option<bool>,
    pub allow_self_intersection: Option<bool>,
    pub cursor_marker: Option<bool>,
    pub finish_on: Option<FinishOn>,
    /// Marker visual style; populated only for marker draws.
    pub marker_style: Option<MarkerStyle>,
    /// Style of the line segment following the cursor; non-marker draws.
    pub templine_style: Option<PathStyle>,
    /// Style of the closing hint line; non-marker draws.
    pub hintline_style: Option<PathStyle>,
    /// Style applied to the finished path; non-marker draws.
    pub path_options: Option<PathStyle>,
}

/// Resolve effective draw options for a shape kind.
///
/// Marker draws pass options through and default the icon. Every other
/// kind merges the ambient theme beneath each host style field; the hint
/// line additionally gets a default dash pattern beneath host overrides.
pub fn resolve_draw_options(
    kind: DrawKind,
    options: &DrawOptions,
    theme: &Theme,
) -> ResolvedDrawOptions {
    let mut resolved = ResolvedDrawOptions {
        snappable: options.snappable,
        snap_distance: options.snap_distance,
        snap_middle: options.snap_middle,
        tooltips: options.tooltips,
        allow_self_intersection: options.allow_self_intersection,
        cursor_marker: options.cursor_marker,
        finish_on: options.finish_on,
        ..ResolvedDrawOptions::default()
    };

    if kind == DrawKind::Marker {
        let mut marker_style = options.marker_style.clone().unwrap_or_default();
        marker_style.icon = Some(marker_style.icon.unwrap_or(Icon::Default));
        resolved.marker_style = Some(marker_style);
    } else {
        let theme_path = theme.path.clone().unwrap_or_default();
        let mut hint_base = theme_path.clone();
        hint_base.dash_array = Some(HINTLINE_DASH.to_vec());

        let templine = options.templine_style.clone().unwrap_or_default();
        let hintline = options.hintline_style.clone().unwrap_or_default();
        let path = options.path_options.clone().unwrap_or_default();

        resolved.templine_style = Some(templine.merged_over(&theme_path));
        resolved.hintline_style = Some(hintline.merged_over(&hint_base));
        resolved.path_options = Some(path.merged_over(&theme_path));
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn themed(color: Color) -> Theme {
        Theme {
            path: Some(PathStyle {
                color: Some(color),
                ..PathStyle::default()
            }),
        }
    }

    #[test]
    fn test_host_option_beats_theme() {
        let red = Color::new(255, 0, 0, 255);
        let blue = Color::new(0, 0, 255, 255);
        let options = DrawOptions {
            path_options: Some(PathStyle {
                color: Some(blue),
                ..PathStyle::default()
            }),
            ..DrawOptions::default()
        };
        let resolved = resolve_draw_options(DrawKind::Polygon, &options, &themed(red));
        assert_eq!(resolved.path_options.unwrap().color, Some(blue));
    }

    #[test]
    fn test_theme_applies_without_host_override() {
        let red = Color::new(255, 0, 0, 255);
        let resolved =
            resolve_draw_options(DrawKind::Circle, &DrawOptions::default(), &themed(red));
        assert_eq!(resolved.path_options.unwrap().color, Some(red));
        assert_eq!(resolved.templine_style.unwrap().color, Some(red));
    }

    #[test]
    fn test_hintline_dash_default() {
        let resolved = resolve_draw_options(
            DrawKind::Line,
            &DrawOptions::default(),
            &Theme::default(),
        );
        assert_eq!(
            resolved.hintline_style.unwrap().dash_array,
            Some(vec![5.0, 5.0])
        );
    }

    #[test]
    fn test_hintline_dash_host_override() {
        let options = DrawOptions {
            hintline_style: Some(PathStyle {
                dash_array: Some(vec![1.0, 9.0]),
                ..PathStyle::default()
            }),
            ..DrawOptions::default()
        };
        let resolved = resolve_draw_options(DrawKind::Rectangle, &options, &Theme::default());
        assert_eq!(
            resolved.hintline_style.unwrap().dash_array,
            Some(vec![1.0, 9.0])
        );
    }

    #[test]
    fn test_marker_icon_default_and_override() {
        let resolved = resolve_draw_options(
            DrawKind::Marker,
            &DrawOptions::default(),
            &Theme::default(),
        );
        assert_eq!(resolved.marker_style.unwrap().icon, Some(Icon::Default));
        assert!(resolved.path_options.is_none());

        let custom = Icon::Image {
            url: "pin.png".to_string(),
            size: None,
            anchor: None,
        };
        let options = DrawOptions {
            marker_style: Some(MarkerStyle {
                icon: Some(custom.clone()),
                ..MarkerStyle::default()
            }),
            ..DrawOptions::default()
        };
        let resolved = resolve_draw_options(DrawKind::Marker, &options, &Theme::default());
        assert_eq!(resolved.marker_style.unwrap().icon, Some(custom));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let options = DrawOptions {
            snappable: Some(true),
            ..DrawOptions::default()
        };
        let theme = themed(Color::black());
        let a = resolve_draw_options(DrawKind::Polygon, &options, &theme);
        let b = resolve_draw_options(DrawKind::Polygon, &options, &theme);
        assert_eq!(a, b);
    }
}
