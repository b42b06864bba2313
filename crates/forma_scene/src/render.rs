//! Spec rendering onto a surface
//!
//! All token resolution happens here, against the context's theme mode:
//! the surface only ever sees concrete colors and pixel values. The shape
//! match is exhaustive on purpose; a new shape variant must be handled (or
//! explicitly ignored) in this file before the crate compiles again.

use crate::surface::Surface;
use forma_core::{Color, Diagnostics, Rect};
use forma_spec::{ComponentSpec, InteractionState, Props, RadiusValue, Shape};
use forma_theme::{
    hex_string_to_number, resolve_color, resolve_token, ColorValue, ThemeMode, TokenValue,
};
use rustc_hash::FxHashMap;

/// Where and how a spec is being rendered
#[derive(Clone, Copy, Debug)]
pub struct SceneContext {
    pub mode: ThemeMode,
    /// Fallback extent for `auto` dimensions at the top level
    pub width: f32,
    pub height: f32,
    pub state: InteractionState,
}

impl SceneContext {
    pub fn new(mode: ThemeMode, width: f32, height: f32) -> Self {
        SceneContext {
            mode,
            width,
            height,
            state: InteractionState::default(),
        }
    }

    pub fn with_state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }
}

/// Render one component instance. An unknown variant or size leaves the
/// surface untouched (no clear) and reports why.
pub fn render(
    spec: &ComponentSpec,
    props: &Props,
    ctx: &SceneContext,
    surface: &mut dyn Surface,
) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let Some(selection) = spec.select(props, &mut diags) else {
        return diags;
    };
    let shapes = spec.shapes_for(props, selection, ctx.state, &mut diags);

    surface.clear();
    let mut geometry: FxHashMap<String, Rect> = FxHashMap::default();
    paint_shapes(
        &shapes,
        (0.0, 0.0),
        (ctx.width, ctx.height),
        ctx.mode,
        surface,
        &mut geometry,
        &mut diags,
    );
    diags
}

fn paint_color(value: &ColorValue, mode: ThemeMode, diags: &mut Diagnostics) -> Color {
    match resolve_color(value, mode, diags) {
        ColorValue::Number(n) => Color::from_hex(n),
        ColorValue::Text(text) => Color::from_hex(hex_string_to_number(&text)),
    }
}

// Raster surfaces take one radius; per-corner arrays collapse to their
// first corner
fn radius_px(radius: &RadiusValue, mode: ThemeMode, diags: &mut Diagnostics) -> f32 {
    match radius {
        RadiusValue::Px(v) => *v,
        RadiusValue::Corners(corners) => corners[0],
        RadiusValue::Token(token) => match resolve_token(token, mode, diags) {
            Some(TokenValue::Number(px)) => px,
            _ => 0.0,
        },
    }
}

fn record(geometry: &mut FxHashMap<String, Rect>, id: &Option<String>, rect: Rect) {
    if let Some(id) = id {
        geometry.insert(id.clone(), rect);
    }
}

#[allow(clippy::too_many_lines)]
fn paint_shapes(
    shapes: &[Shape],
    origin: (f32, f32),
    bounds: (f32, f32),
    mode: ThemeMode,
    surface: &mut dyn Surface,
    geometry: &mut FxHashMap<String, Rect>,
    diags: &mut Diagnostics,
) {
    let (ox, oy) = origin;
    let (bw, bh) = bounds;

    for shape in shapes {
        match shape {
            Shape::Rect {
                id,
                x,
                y,
                width,
                height,
                fill,
                alpha,
            } => {
                let rect = Rect::new(ox + x, oy + y, width.px_or(bw), height.px_or(bh));
                record(geometry, id, rect);
                let color = paint_color(fill, mode, diags);
                if color.a * alpha > 0.0 {
                    surface.fill_rect(
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        color.with_alpha(color.a * alpha),
                    );
                }
            }
            Shape::RoundRect {
                id,
                x,
                y,
                width,
                height,
                radius,
                fill,
                alpha,
            } => {
                let rect = Rect::new(ox + x, oy + y, width.px_or(bw), height.px_or(bh));
                record(geometry, id, rect);
                let color = paint_color(fill, mode, diags);
                if color.a * alpha > 0.0 {
                    surface.fill_round_rect(
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        radius_px(radius, mode, diags),
                        color.with_alpha(color.a * alpha),
                    );
                }
            }
            Shape::Circle {
                id,
                cx,
                cy,
                r,
                fill,
                alpha,
            } => {
                // bounding box, for decorators that target the circle
                record(
                    geometry,
                    id,
                    Rect::new(ox + cx - r, oy + cy - r, 2.0 * r, 2.0 * r),
                );
                let color = paint_color(fill, mode, diags);
                if color.a * alpha > 0.0 {
                    surface.fill_circle(ox + cx, oy + cy, *r, color.with_alpha(color.a * alpha));
                }
            }
            Shape::Text { .. } => {
                // text composites in the host's text layer, not here
            }
            Shape::Line {
                id: _,
                x1,
                y1,
                x2,
                y2,
                width,
                color,
                alpha,
            } => {
                let color = paint_color(color, mode, diags);
                if color.a * alpha > 0.0 {
                    surface.stroke_line(
                        ox + x1,
                        oy + y1,
                        ox + x2,
                        oy + y2,
                        *width,
                        color.with_alpha(color.a * alpha),
                    );
                }
            }
            Shape::Border {
                id: _,
                target,
                x,
                y,
                width,
                height,
                border_width,
                color,
                radius,
                alpha,
            } => {
                // a targeted border strokes its target's painted geometry;
                // an untargeted one is a standalone outline box from its
                // own fields. A named target that was never painted falls
                // back to the standalone box too, with a warning.
                let rect = match target.as_deref() {
                    Some(t) => {
                        let found = geometry.get(t).copied();
                        if found.is_none() {
                            diags.warn(
                                "scene.missing-target",
                                format!("border targets '{t}' but no such shape was painted"),
                            );
                        }
                        found
                    }
                    None => None,
                };
                let rect = rect
                    .unwrap_or_else(|| Rect::new(ox + x, oy + y, width.px_or(bw), height.px_or(bh)));
                let color = paint_color(color, mode, diags);
                surface.stroke_round_rect(
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    radius_px(radius, mode, diags),
                    *border_width,
                    color.with_alpha(color.a * alpha),
                );
            }
            Shape::Shadow { .. } => {
                // no blur primitive on Surface; shadows are a stylesheet
                // concern
            }
            Shape::Gradient {
                id,
                x,
                y,
                width,
                height,
                stops,
                angle: _,
            } => {
                let rect = Rect::new(ox + x, oy + y, width.px_or(bw), height.px_or(bh));
                record(geometry, id, rect);
                // flat fill of the first stop; surfaces have no gradient
                // primitive
                if let Some(stop) = stops.first() {
                    let color = paint_color(&stop.color, mode, diags);
                    surface.fill_rect(rect.x, rect.y, rect.width, rect.height, color);
                }
            }
            Shape::Image {
                id,
                x,
                y,
                width,
                height,
                src: _,
            } => {
                // the host image cache owns decoding and drawing
                record(
                    geometry,
                    id,
                    Rect::new(ox + x, oy + y, width.px_or(bw), height.px_or(bh)),
                );
            }
            Shape::Container {
                id,
                x,
                y,
                width,
                height,
                children,
            } => {
                let rect = Rect::new(ox + x, oy + y, width.px_or(bw), height.px_or(bh));
                record(geometry, id, rect);
                paint_shapes(
                    children,
                    (rect.x, rect.y),
                    (rect.width, rect.height),
                    mode,
                    surface,
                    geometry,
                    diags,
                );
            }
        }
    }
}
