//! Visual style values passed through to the drawing surface.
//!
//! Every field of [`PathStyle`] is optional so styles can be merged per
//! field: an ambient theme supplies the base, host options override it.

use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Stroke line cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Stroke line join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Stroke and fill options for vector shapes.
///
/// All fields are optional; unset fields fall back to whatever the merge
/// base (theme or surface default) provides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    pub stroke: Option<bool>,
    pub color: Option<Color>,
    pub weight: Option<f64>,
    pub opacity: Option<f64>,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
    pub dash_array: Option<Vec<f64>>,
    pub fill: Option<bool>,
    pub fill_color: Option<Color>,
    pub fill_opacity: Option<f64>,
}

impl PathStyle {
    /// Merge this style over a base style, field by field.
    ///
    /// Every `Some` field of `self` wins; `None` fields take the base value.
    pub fn merged_over(&self, base: &PathStyle) -> PathStyle {
        PathStyle {
            stroke: self.stroke.or(base.stroke),
            color: self.color.or(base.color),
            weight: self.weight.or(base.weight),
            opacity: self.opacity.or(base.opacity),
            line_cap: self.line_cap.or(base.line_cap),
            line_join: self.line_join.or(base.line_join),
            dash_array: self.dash_array.clone().or_else(|| base.dash_array.clone()),
            fill: self.fill.or(base.fill),
            fill_color: self.fill_color.or(base.fill_color),
            fill_opacity: self.fill_opacity.or(base.fill_opacity),
        }
    }
}

/// Visual icon for a marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Icon {
    /// The library's stock marker icon.
    #[default]
    Default,
    /// A host-supplied image icon.
    Image {
        url: String,
        size: Option<[f64; 2]>,
        anchor: Option<[f64; 2]>,
    },
}

/// Style options for marker shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub icon: Option<Icon>,
    pub draggable: Option<bool>,
    pub opacity: Option<f64>,
    pub title: Option<String>,
}

/// Ambient theme supplied by the embedding map context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Base path style applied beneath host-supplied styles.
    pub path: Option<PathStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_override_wins() {
        let base = PathStyle {
            color: Some(Color::new(255, 0, 0, 255)),
            weight: Some(3.0),
            ..PathStyle::default()
        };
        let over = PathStyle {
            color: Some(Color::new(0, 0, 255, 255)),
            ..PathStyle::default()
        };
        let merged = over.merged_over(&base);
        assert_eq!(merged.color, Some(Color::new(0, 0, 255, 255)));
        assert_eq!(merged.weight, Some(3.0));
    }

    #[test]
    fn test_merge_keeps_base_when_unset() {
        let base = PathStyle {
            dash_array: Some(vec![2.0, 4.0]),
            ..PathStyle::default()
        };
        let merged = PathStyle::default().merged_over(&base);
        assert_eq!(merged.dash_array, Some(vec![2.0, 4.0]));
    }

    #[test]
    fn test_default_icon() {
        assert_eq!(Icon::default(), Icon::Default);
    }
}
