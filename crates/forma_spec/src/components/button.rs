//! Button: the reference component
//!
//! Eight visual variants over five sizes. `outline` and `ghost` render a
//! fully transparent background (`background_alpha: 0`) so only the border
//! or text carries the variant's identity.

use super::{background_for, border_for, font_size_px, standard_states, text_for, PRESSED_SHADOW};
use crate::component::{
    ComponentSpec, InteractionState, Props, RenderHooks, SizeSpec, VariantSpec,
};
use crate::shape::{Dimension, RadiusValue, Shape, TextAlign, TextBaseline};
use indexmap::IndexMap;

pub fn button_spec() -> ComponentSpec {
    let mut variants: IndexMap<&'static str, VariantSpec> = IndexMap::new();
    variants.insert(
        "default",
        VariantSpec::solid("{color.surface-container-high}", "{color.on-surface}")
            .hover("{color.surface-container-highest}")
            .pressed("{color.surface-container}"),
    );
    variants.insert(
        "primary",
        VariantSpec::solid("{color.primary}", "{color.on-primary}")
            .hover("{color.primary-hover}")
            .pressed("{color.primary-pressed}"),
    );
    variants.insert(
        "secondary",
        VariantSpec::solid("{color.secondary}", "{color.on-secondary}")
            .hover("{color.secondary-hover}")
            .pressed("{color.secondary-pressed}"),
    );
    variants.insert(
        "tertiary",
        VariantSpec::solid("{color.tertiary}", "{color.on-tertiary}")
            .hover("{color.tertiary-hover}")
            .pressed("{color.tertiary-pressed}"),
    );
    variants.insert(
        "error",
        VariantSpec::solid("{color.error}", "{color.on-error}")
            .hover("{color.error-hover}")
            .pressed("{color.error-pressed}"),
    );
    variants.insert(
        "surface",
        VariantSpec::solid("{color.surface}", "{color.on-surface}")
            .hover("{color.surface-container}")
            .pressed("{color.surface-container-high}")
            .bordered("{color.outline-variant}"),
    );
    variants.insert(
        "outline",
        VariantSpec::solid("{color.surface}", "{color.primary}")
            .alpha(0.0)
            .hover("{color.surface-container}")
            .pressed("{color.surface-container-high}")
            .bordered("{color.outline}")
            .border_hover("{color.primary}"),
    );
    variants.insert(
        "ghost",
        VariantSpec::solid("{color.surface}", "{color.on-surface}")
            .alpha(0.0)
            .hover("{color.surface-container}")
            .pressed("{color.surface-container-high}"),
    );

    let mut sizes: IndexMap<&'static str, SizeSpec> = IndexMap::new();
    sizes.insert("xs", size(24.0, 8.0, 2.0, "text-xs", "sm", 12.0, 4.0));
    sizes.insert("sm", size(32.0, 12.0, 4.0, "text-sm", "sm", 14.0, 6.0));
    sizes.insert("md", size(40.0, 24.0, 8.0, "text-md", "md", 16.0, 8.0));
    sizes.insert("lg", size(48.0, 32.0, 12.0, "text-lg", "lg", 20.0, 10.0));
    sizes.insert("xl", size(56.0, 40.0, 16.0, "text-xl", "lg", 24.0, 12.0));

    ComponentSpec {
        name: "Button",
        element: "button",
        variants,
        sizes,
        default_variant: "default",
        default_size: "md",
        states: standard_states(),
        render: RenderHooks {
            shapes: button_shapes,
            dom_attrs: None,
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

fn button_shapes(
    props: &Props,
    variant: &VariantSpec,
    size: &SizeSpec,
    state: InteractionState,
) -> Vec<Shape> {
    let width = props.style.width.map(Dimension::Px).unwrap_or(Dimension::Auto);
    let height = props.style.height.map(Dimension::Px).unwrap_or(Dimension::Auto);
    let radius = props
        .style
        .radius
        .clone()
        .unwrap_or_else(|| RadiusValue::Token(size.radius.clone()));
    let fill = props
        .style
        .background
        .clone()
        .unwrap_or_else(|| background_for(variant, state));

    let mut shapes = vec![Shape::RoundRect {
        id: Some("bg".to_string()),
        x: 0.0,
        y: 0.0,
        width,
        height,
        radius: radius.clone(),
        fill,
        alpha: variant.background_alpha,
    }];

    if let Some(border_color) = props.style.border.clone().or_else(|| border_for(variant, state)) {
        shapes.push(Shape::Border {
            id: None,
            target: Some("bg".to_string()),
            x: 0.0,
            y: 0.0,
            width,
            height,
            border_width: 1.0,
            color: border_color,
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

    // Host-provided children take over the content slot
    if !props.has_children {
        shapes.push(Shape::Text {
            id: Some("label".to_string()),
            content: props.label.clone(),
            x: 0.0,
            y: 0.0,
            font_size: font_size_px(&size.font_size),
            font_weight: 500,
            color: props.style.text.clone().unwrap_or_else(|| text_for(variant, state)),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            padding_x: size.padding_x,
        });
    }

    shapes
}
