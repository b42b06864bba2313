//! Drawable shape vocabulary
//!
//! [`Shape`] is the closed set of primitives a component's render hook may
//! emit. Renderers match on it exhaustively with no wildcard arm, so adding
//! a variant here fails to compile until every backend handles it.

use forma_theme::ColorValue;
use serde::Serialize;

/// A length that is either fixed in pixels or supplied by the layout host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Px(f32),
    Auto,
}

impl Serialize for Dimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Px(v) => serializer.serialize_f32(*v),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl Dimension {
    /// The fixed value, or `fallback` for `Auto`
    pub fn px_or(self, fallback: f32) -> f32 {
        match self {
            Dimension::Px(v) => v,
            Dimension::Auto => fallback,
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Px(value)
    }
}

/// Corner radius: uniform, per-corner (top-left first, clockwise), or a
/// radius token reference resolved at render time
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RadiusValue {
    Px(f32),
    Corners([f32; 4]),
    Token(String),
}

impl RadiusValue {
    /// Collapse to a single value the way raster backends that lack
    /// per-corner radii do: per-corner arrays take their first element
    pub fn uniform_px(&self) -> Option<f32> {
        match self {
            RadiusValue::Px(v) => Some(*v),
            RadiusValue::Corners(corners) => Some(corners[0]),
            RadiusValue::Token(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`
    pub offset: f32,
    pub color: ColorValue,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Rect {
        id: Option<String>,
        x: f32,
        y: f32,
        width: Dimension,
        height: Dimension,
        fill: ColorValue,
        alpha: f32,
    },
    RoundRect {
        id: Option<String>,
        x: f32,
        y: f32,
        width: Dimension,
        height: Dimension,
        radius: RadiusValue,
        fill: ColorValue,
        alpha: f32,
    },
    Circle {
        id: Option<String>,
        cx: f32,
        cy: f32,
        r: f32,
        fill: ColorValue,
        alpha: f32,
    },
    Text {
        id: Option<String>,
        content: String,
        x: f32,
        y: f32,
        font_size: f32,
        font_weight: u16,
        color: ColorValue,
        align: TextAlign,
        baseline: TextBaseline,
        padding_x: f32,
    },
    Line {
        id: Option<String>,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: ColorValue,
        alpha: f32,
    },
    /// Stroke decorator; attaches to `target`, or to the previous
    /// non-decorator sibling once normalized (see
    /// [`resolve_targets`](crate::resolve_targets)). With no target at all
    /// it renders as a standalone outline box from its own geometry.
    Border {
        id: Option<String>,
        target: Option<String>,
        x: f32,
        y: f32,
        width: Dimension,
        height: Dimension,
        border_width: f32,
        color: ColorValue,
        radius: RadiusValue,
        alpha: f32,
    },
    /// Shadow decorator; same targeting rules as `Border`. `shadow` holds
    /// a box-shadow shorthand or a `{shadow.*}` token reference
    Shadow {
        id: Option<String>,
        target: Option<String>,
        shadow: String,
    },
    Gradient {
        id: Option<String>,
        x: f32,
        y: f32,
        width: Dimension,
        height: Dimension,
        stops: Vec<GradientStop>,
        /// Degrees clockwise from pointing up, CSS-style
        angle: f32,
    },
    Image {
        id: Option<String>,
        src: String,
        x: f32,
        y: f32,
        width: Dimension,
        height: Dimension,
    },
    /// Grouping node; children position relative to the container origin
    Container {
        id: Option<String>,
        x: f32,
        y: f32,
        width: Dimension,
        height: Dimension,
        children: Vec<Shape>,
    },
}

impl Shape {
    pub fn id(&self) -> Option<&str> {
        match self {
            Shape::Rect { id, .. }
            | Shape::RoundRect { id, .. }
            | Shape::Circle { id, .. }
            | Shape::Text { id, .. }
            | Shape::Line { id, .. }
            | Shape::Border { id, .. }
            | Shape::Shadow { id, .. }
            | Shape::Gradient { id, .. }
            | Shape::Image { id, .. }
            | Shape::Container { id, .. } => id.as_deref(),
        }
    }

    pub fn set_id(&mut self, new_id: impl Into<String>) {
        match self {
            Shape::Rect { id, .. }
            | Shape::RoundRect { id, .. }
            | Shape::Circle { id, .. }
            | Shape::Text { id, .. }
            | Shape::Line { id, .. }
            | Shape::Border { id, .. }
            | Shape::Shadow { id, .. }
            | Shape::Gradient { id, .. }
            | Shape::Image { id, .. }
            | Shape::Container { id, .. } => *id = Some(new_id.into()),
        }
    }

    /// Decorators attach to another shape instead of occupying their own
    /// slot in the sibling order
    pub fn is_decorator(&self) -> bool {
        matches!(self, Shape::Border { .. } | Shape::Shadow { .. })
    }

    pub fn children(&self) -> Option<&[Shape]> {
        match self {
            Shape::Container { children, .. } => Some(children),
            _ => None,
        }
    }
}
