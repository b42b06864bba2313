//! Decorator target normalization
//!
//! Render hooks may emit `Border`/`Shadow` decorators without an explicit
//! `target`, meaning "the previous non-decorator sibling". Renderers only
//! see explicit targets: [`resolve_targets`] rewrites the implicit form
//! before a shape list leaves this crate, synthesizing an id for the
//! anchor shape when its author gave it none.

use crate::shape::Shape;
use forma_core::Diagnostics;

/// Rewrite implicit decorator targets into explicit shape ids, recursing
/// into containers. A `Border` with no preceding non-decorator sibling
/// keeps `target: None` and renders as a standalone outline box; a
/// `Shadow` in that position has nothing to attach to and warns.
pub fn resolve_targets(shapes: &mut [Shape], diags: &mut Diagnostics) {
    resolve_level(shapes, diags);
}

fn resolve_level(shapes: &mut [Shape], diags: &mut Diagnostics) {
    // Pass 1: find, per decorator, the index of its anchor sibling
    let mut anchors: Vec<Option<usize>> = Vec::with_capacity(shapes.len());
    let mut last_drawable: Option<usize> = None;
    for (i, shape) in shapes.iter().enumerate() {
        if shape.is_decorator() {
            anchors.push(last_drawable);
        } else {
            anchors.push(None);
            last_drawable = Some(i);
        }
    }

    // Pass 2: materialize ids and rewrite targets
    for i in 0..shapes.len() {
        let needs_target = match &shapes[i] {
            Shape::Border { target, .. } | Shape::Shadow { target, .. } => target.is_none(),
            _ => false,
        };
        if !needs_target {
            continue;
        }
        let Some(anchor) = anchors[i] else {
            if matches!(&shapes[i], Shape::Shadow { .. }) {
                diags.warn(
                    "shape.dangling-decorator",
                    format!("shadow at index {i} has no preceding shape to attach to"),
                );
            }
            // an untargeted border is a standalone outline box
            continue;
        };
        if shapes[anchor].id().is_none() {
            shapes[anchor].set_id(format!("shape-{anchor}"));
        }
        let anchor_id = shapes[anchor].id().map(str::to_string);
        match &mut shapes[i] {
            Shape::Border { target, .. } | Shape::Shadow { target, .. } => *target = anchor_id,
            _ => unreachable!(),
        }
    }

    for shape in shapes.iter_mut() {
        if let Shape::Container { children, .. } = shape {
            resolve_level(children, diags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Dimension, RadiusValue};
    use forma_theme::ColorValue;

    fn rect(id: Option<&str>) -> Shape {
        Shape::Rect {
            id: id.map(str::to_string),
            x: 0.0,
            y: 0.0,
            width: Dimension::Px(100.0),
            height: Dimension::Px(40.0),
            fill: ColorValue::text("{color.surface}"),
            alpha: 1.0,
        }
    }

    fn border(target: Option<&str>) -> Shape {
        Shape::Border {
            id: None,
            target: target.map(str::to_string),
            x: 0.0,
            y: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            border_width: 1.0,
            color: ColorValue::text("{color.outline}"),
            radius: RadiusValue::Px(4.0),
            alpha: 1.0,
        }
    }

    fn target_of(shape: &Shape) -> Option<&str> {
        match shape {
            Shape::Border { target, .. } | Shape::Shadow { target, .. } => target.as_deref(),
            _ => None,
        }
    }

    #[test]
    fn implicit_target_binds_to_previous_drawable() {
        let mut shapes = vec![rect(Some("bg")), border(None)];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        assert_eq!(target_of(&shapes[1]), Some("bg"));
        assert!(diags.is_empty());
    }

    #[test]
    fn anchor_without_id_gets_synthesized_one() {
        let mut shapes = vec![rect(None), border(None)];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        assert_eq!(shapes[0].id(), Some("shape-0"));
        assert_eq!(target_of(&shapes[1]), Some("shape-0"));
    }

    #[test]
    fn explicit_target_is_untouched() {
        let mut shapes = vec![rect(Some("bg")), rect(Some("fg")), border(Some("bg"))];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        assert_eq!(target_of(&shapes[2]), Some("bg"));
    }

    #[test]
    fn decorator_skips_over_decorator_siblings() {
        let mut shapes = vec![
            rect(Some("bg")),
            Shape::Shadow {
                id: None,
                target: None,
                shadow: "{shadow.sm}".into(),
            },
            border(None),
        ];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        assert_eq!(target_of(&shapes[1]), Some("bg"));
        assert_eq!(target_of(&shapes[2]), Some("bg"));
    }

    #[test]
    fn leading_border_stays_untargeted_as_a_standalone_box() {
        let mut shapes = vec![border(None), rect(Some("bg"))];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        assert_eq!(target_of(&shapes[0]), None);
        assert!(diags.is_empty());
    }

    #[test]
    fn leading_shadow_warns_and_stays_untargeted() {
        let mut shapes = vec![
            Shape::Shadow {
                id: None,
                target: None,
                shadow: "{shadow.sm}".into(),
            },
            rect(Some("bg")),
        ];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        assert_eq!(target_of(&shapes[0]), None);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].code, "shape.dangling-decorator");
    }

    #[test]
    fn containers_normalize_recursively() {
        let mut shapes = vec![Shape::Container {
            id: Some("root".into()),
            x: 0.0,
            y: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            children: vec![rect(None), border(None)],
        }];
        let mut diags = Diagnostics::new();
        resolve_targets(&mut shapes, &mut diags);
        let Shape::Container { children, .. } = &shapes[0] else {
            unreachable!()
        };
        assert_eq!(target_of(&children[1]), Some("shape-0"));
    }
}
