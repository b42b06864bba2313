//! Surface behavior for the less common shapes, driven through a minimal
//! hand-built spec.

use forma_core::Color;
use forma_scene::{render, DrawCommand, RecordingSurface, SceneContext};
use forma_spec::{
    ComponentSpec, Dimension, GradientStop, InteractionState, Props, RadiusValue, RenderHooks,
    Shape, SizeSpec, StateStyles, VariantSpec,
};
use forma_theme::{ColorValue, ThemeMode};
use indexmap::IndexMap;

fn minimal_spec(shapes: forma_spec::ShapeFn) -> ComponentSpec {
    let mut variants = IndexMap::new();
    variants.insert(
        "default",
        VariantSpec::solid("{color.surface}", "{color.on-surface}"),
    );
    let mut sizes = IndexMap::new();
    sizes.insert(
        "md",
        SizeSpec {
            height: 40.0,
            padding_x: 16.0,
            padding_y: 8.0,
            font_size: "{typography.text-md}".into(),
            radius: "{radius.md}".into(),
            icon_size: 16.0,
            gap: 8.0,
        },
    );
    ComponentSpec {
        name: "Swatch",
        element: "div",
        variants,
        sizes,
        default_variant: "default",
        default_size: "md",
        states: StateStyles::default(),
        render: RenderHooks {
            shapes,
            dom_attrs: None,
        },
    }
}

fn run(shapes: forma_spec::ShapeFn) -> (RecordingSurface, forma_core::Diagnostics) {
    let spec = minimal_spec(shapes);
    let mut surface = RecordingSurface::new();
    let diags = render(
        &spec,
        &Props::default(),
        &SceneContext::new(ThemeMode::Light, 200.0, 40.0),
        &mut surface,
    );
    (surface, diags)
}

#[test]
fn circle_and_line_pass_through() {
    let (surface, diags) = run(|_, _, _, _| {
        vec![
            Shape::Circle {
                id: Some("dot".into()),
                cx: 20.0,
                cy: 20.0,
                r: 8.0,
                fill: ColorValue::text("{color.primary}"),
                alpha: 1.0,
            },
            Shape::Line {
                id: None,
                x1: 0.0,
                y1: 39.0,
                x2: 200.0,
                y2: 39.0,
                width: 1.0,
                color: ColorValue::Number(0x79747e),
                alpha: 1.0,
            },
        ]
    });
    assert!(diags.is_empty(), "{:?}", diags.entries());
    assert_eq!(
        surface.commands()[1],
        DrawCommand::FillCircle {
            cx: 20.0,
            cy: 20.0,
            r: 8.0,
            color: Color::from_hex(0x6750a4),
        }
    );
    assert_eq!(
        surface.commands()[2],
        DrawCommand::StrokeLine {
            x1: 0.0,
            y1: 39.0,
            x2: 200.0,
            y2: 39.0,
            width: 1.0,
            color: Color::from_hex(0x79747e),
        }
    );
}

#[test]
fn border_can_target_a_circle_bounding_box() {
    let (surface, diags) = run(|_, _, _, _| {
        vec![
            Shape::Circle {
                id: Some("dot".into()),
                cx: 20.0,
                cy: 20.0,
                r: 8.0,
                fill: ColorValue::text("{color.primary}"),
                alpha: 1.0,
            },
            Shape::Border {
                id: None,
                target: Some("dot".into()),
                x: 0.0,
                y: 0.0,
                width: Dimension::Auto,
                height: Dimension::Auto,
                border_width: 2.0,
                color: ColorValue::text("{color.outline}"),
                radius: RadiusValue::Px(8.0),
                alpha: 1.0,
            },
        ]
    });
    assert!(diags.is_empty());
    let DrawCommand::StrokeRoundRect {
        x, y, width, height, ..
    } = surface.commands()[2]
    else {
        panic!("expected stroke, got {:?}", surface.commands()[2]);
    };
    assert_eq!((x, y, width, height), (12.0, 12.0, 16.0, 16.0));
}

#[test]
fn container_children_offset_and_inherit_bounds() {
    let (surface, _) = run(|_, _, _, _| {
        vec![Shape::Container {
            id: Some("group".into()),
            x: 10.0,
            y: 5.0,
            width: Dimension::Px(100.0),
            height: Dimension::Auto,
            children: vec![Shape::Rect {
                id: None,
                x: 2.0,
                y: 0.0,
                width: Dimension::Auto,
                height: Dimension::Auto,
                fill: ColorValue::Number(0xff0000),
                alpha: 1.0,
            }],
        }]
    });
    assert_eq!(
        surface.commands()[1],
        DrawCommand::FillRect {
            x: 12.0,
            y: 5.0,
            width: 100.0,
            height: 40.0,
            color: Color::from_hex(0xff0000),
        }
    );
}

#[test]
fn gradient_flattens_to_its_first_stop() {
    let (surface, _) = run(|_, _, _, _| {
        vec![Shape::Gradient {
            id: None,
            x: 0.0,
            y: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: ColorValue::text("{color.primary}"),
                },
                GradientStop {
                    offset: 1.0,
                    color: ColorValue::text("{color.tertiary}"),
                },
            ],
            angle: 90.0,
        }]
    });
    assert_eq!(
        surface.commands()[1],
        DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 40.0,
            color: Color::from_hex(0x6750a4),
        }
    );
}

#[test]
fn missing_border_target_warns_and_falls_back_to_own_geometry() {
    let (surface, diags) = run(|_, _, _, _| {
        vec![Shape::Border {
            id: None,
            target: Some("ghost".into()),
            x: 0.0,
            y: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            border_width: 1.0,
            color: ColorValue::text("{color.outline}"),
            radius: RadiusValue::Px(0.0),
            alpha: 1.0,
        }]
    });
    assert_eq!(diags.entries()[0].code, "scene.missing-target");
    let DrawCommand::StrokeRoundRect {
        x, y, width, height, stroke_width, ..
    } = surface.commands()[1]
    else {
        panic!("expected stroke, got {:?}", surface.commands()[1]);
    };
    assert_eq!((x, y, width, height, stroke_width), (0.0, 0.0, 200.0, 40.0, 1.0));
}

#[test]
fn untargeted_border_strokes_a_standalone_box() {
    let (surface, diags) = run(|_, _, _, _| {
        vec![Shape::Border {
            id: None,
            target: None,
            x: 4.0,
            y: 4.0,
            width: Dimension::Px(100.0),
            height: Dimension::Auto,
            border_width: 2.0,
            color: ColorValue::text("{color.outline}"),
            radius: RadiusValue::Px(4.0),
            alpha: 1.0,
        }]
    });
    assert!(diags.is_empty(), "{:?}", diags.entries());
    let DrawCommand::StrokeRoundRect {
        x, y, width, height, radius, stroke_width, ..
    } = surface.commands()[1]
    else {
        panic!("expected stroke, got {:?}", surface.commands()[1]);
    };
    assert_eq!((x, y, width, height), (4.0, 4.0, 100.0, 40.0));
    assert_eq!((radius, stroke_width), (4.0, 2.0));
}

#[test]
fn shadow_image_and_text_emit_no_draw_calls() {
    let (surface, diags) = run(|props, _, _, _| {
        vec![
            Shape::Image {
                id: Some("icon".into()),
                src: "icon.png".into(),
                x: 0.0,
                y: 0.0,
                width: Dimension::Px(16.0),
                height: Dimension::Px(16.0),
            },
            Shape::Text {
                id: None,
                content: props.label.clone(),
                x: 0.0,
                y: 0.0,
                font_size: 16.0,
                font_weight: 500,
                color: ColorValue::text("{color.on-surface}"),
                align: forma_spec::TextAlign::Center,
                baseline: forma_spec::TextBaseline::Middle,
                padding_x: 16.0,
            },
            Shape::Shadow {
                id: None,
                target: Some("icon".into()),
                shadow: "{shadow.sm}".into(),
            },
        ]
    });
    assert!(diags.is_empty());
    assert_eq!(surface.commands(), &[DrawCommand::Clear]);
}

#[test]
fn interaction_state_reaches_the_shape_hook() {
    static SHAPES: forma_spec::ShapeFn = |_, _, _, state: InteractionState| {
        let alpha = if state.pressed { 0.5 } else { 1.0 };
        vec![Shape::Rect {
            id: None,
            x: 0.0,
            y: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            fill: ColorValue::Number(0x000000),
            alpha,
        }]
    };
    let spec = minimal_spec(SHAPES);
    let mut surface = RecordingSurface::new();
    render(
        &spec,
        &Props::default(),
        &SceneContext::new(ThemeMode::Light, 200.0, 40.0).with_state(InteractionState {
            pressed: true,
            ..InteractionState::default()
        }),
        &mut surface,
    );
    let DrawCommand::FillRect { color, .. } = surface.commands()[1] else {
        panic!("expected fill");
    };
    assert_eq!(color.a, 0.5);
}
