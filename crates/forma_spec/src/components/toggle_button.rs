//! ToggleButton: a pressable two-state control
//!
//! Resting variants all sit on container surfaces with an outline; the
//! selected state inverts into the role color mapped by
//! [`selected_colors`]. The DOM hook exposes the selection both as
//! `data-selected` (styling) and `aria-pressed` (assistive tech; dropped
//! by backends that only forward `data-*`).

use super::{background_for, border_for, font_size_px, standard_states, text_for, PRESSED_SHADOW};
use crate::component::{
    ComponentSpec, InteractionState, Props, RenderHooks, SizeSpec, VariantSpec,
};
use crate::shape::{Dimension, RadiusValue, Shape, TextAlign, TextBaseline};
use forma_theme::ColorValue;
use indexmap::IndexMap;

pub fn toggle_button_spec() -> ComponentSpec {
    let mut variants: IndexMap<&'static str, VariantSpec> = IndexMap::new();
    variants.insert(
        "default",
        VariantSpec::solid("{color.surface-container}", "{color.on-surface}")
            .hover("{color.surface-container-high}")
            .pressed("{color.surface-container-highest}")
            .bordered("{color.outline-variant}"),
    );
    variants.insert(
        "primary",
        VariantSpec::solid("{color.surface-container}", "{color.on-surface}")
            .hover("{color.surface-container-high}")
            .pressed("{color.surface-container-highest}")
            .bordered("{color.outline-variant}")
            .border_hover("{color.primary}"),
    );
    variants.insert(
        "secondary",
        VariantSpec::solid("{color.surface-container-high}", "{color.on-surface}")
            .hover("{color.surface-container-highest}")
            .pressed("{color.surface-container-highest}")
            .bordered("{color.outline-variant}"),
    );
    variants.insert(
        "surface",
        VariantSpec::solid("{color.surface}", "{color.on-surface}")
            .hover("{color.surface-container}")
            .pressed("{color.surface-container-high}")
            .bordered("{color.outline-variant}"),
    );

    let mut sizes: IndexMap<&'static str, SizeSpec> = IndexMap::new();
    sizes.insert("sm", size(32.0, 12.0, 4.0, "text-sm", "sm", 14.0, 6.0));
    sizes.insert("md", size(40.0, 20.0, 8.0, "text-md", "md", 16.0, 8.0));
    sizes.insert("lg", size(48.0, 28.0, 12.0, "text-lg", "lg", 20.0, 10.0));

    ComponentSpec {
        name: "ToggleButton",
        element: "button",
        variants,
        sizes,
        default_variant: "default",
        default_size: "md",
        states: standard_states(),
        render: RenderHooks {
            shapes: toggle_shapes,
            dom_attrs: Some(toggle_dom_attrs),
        },
    }
}

fn size(
    height: f32,
    padding_x: f32,
    padding_y: f32,
    font: &str,
    radius: &str,
    icon_size: f32,
    gap: f32,
) -> SizeSpec {
    SizeSpec {
        height,
        padding_x,
        padding_y,
        font_size: format!("{{typography.{font}}}"),
        radius: format!("{{radius.{radius}}}"),
        icon_size,
        gap,
    }
}

/// Selected-state role colors per variant: (background, text, border)
pub fn selected_colors(variant: &str) -> Option<(ColorValue, ColorValue, ColorValue)> {
    match variant {
        "default" | "secondary" => Some((
            ColorValue::text("{color.secondary}"),
            ColorValue::text("{color.on-secondary}"),
            ColorValue::text("{color.secondary}"),
        )),
        "primary" | "surface" => Some((
            ColorValue::text("{color.primary}"),
            ColorValue::text("{color.on-primary}"),
            ColorValue::text("{color.primary}"),
        )),
        _ => None,
    }
}

fn toggle_shapes(
    props: &Props,
    variant: &VariantSpec,
    size: &SizeSpec,
    state: InteractionState,
) -> Vec<Shape> {
    let selected = state.selected || props.selected;
    let inversion = if selected {
        props
            .variant
            .as_deref()
            .or(Some("default"))
            .and_then(selected_colors)
    } else {
        None
    };

    let width = props.style.width.map(Dimension::Px).unwrap_or(Dimension::Auto);
    let height = props.style.height.map(Dimension::Px).unwrap_or(Dimension::Auto);
    let radius = props
        .style
        .radius
        .clone()
        .unwrap_or_else(|| RadiusValue::Token(size.radius.clone()));

    let (fill, text_color, border_color) = match &inversion {
        Some((bg, text, border)) => (bg.clone(), text.clone(), Some(border.clone())),
        None => (
            background_for(variant, state),
            text_for(variant, state),
            border_for(variant, state),
        ),
    };

    let mut shapes = vec![Shape::RoundRect {
        id: Some("bg".to_string()),
        x: 0.0,
        y: 0.0,
        width,
        height,
        radius: radius.clone(),
        fill: props.style.background.clone().unwrap_or(fill),
        alpha: variant.background_alpha,
    }];

    if let Some(color) = props.style.border.clone().or(border_color) {
        shapes.push(Shape::Border {
            id: None,
            target: Some("bg".to_string()),
            x: 0.0,
            y: 0.0,
            width,
            height,
            border_width: 1.0,
            color,
            radius,
            alpha: 1.0,
        });
    }

    if state.pressed {
        shapes.push(Shape::Shadow {
            id: None,
            target: Some("bg".to_string()),
            shadow: PRESSED_SHADOW.to_string(),
        });
    }

    if !props.has_children {
        shapes.push(Shape::Text {
            id: Some("label".to_string()),
            content: props.label.clone(),
            x: 0.0,
            y: 0.0,
            font_size: font_size_px(&size.font_size),
            font_weight: 500,
            color: props.style.text.clone().unwrap_or(text_color),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            padding_x: size.padding_x,
        });
    }

    shapes
}

fn toggle_dom_attrs(props: &Props, state: InteractionState) -> Vec<(String, String)> {
    let selected = state.selected || props.selected;
    vec![
        ("data-selected".to_string(), selected.to_string()),
        ("aria-pressed".to_string(), selected.to_string()),
    ]
}
