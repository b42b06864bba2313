//! The component specification model
//!
//! A [`ComponentSpec`] is a pure data description of one component: its
//! visual variants, size scale, interaction-state styling, and a render
//! hook that turns resolved styling into [`Shape`]s. Every backend
//! (stylesheet, scene graph, DOM attributes) consumes the same spec, which
//! is what keeps the backends visually consistent.

use crate::normalize::resolve_targets;
use crate::shape::{RadiusValue, Shape};
use forma_core::Diagnostics;
use forma_theme::ColorValue;
use indexmap::IndexMap;

/// Styling for one visual variant. Color fields hold token references
/// (or literals); resolution happens in the renderers. The resting,
/// hover and pressed backgrounds are all required: every variant must
/// answer every interaction state.
#[derive(Clone, Debug)]
pub struct VariantSpec {
    pub background: ColorValue,
    pub background_hover: ColorValue,
    pub background_pressed: ColorValue,
    /// Multiplied into the background; `0.0` renders transparent
    pub background_alpha: f32,
    pub text: ColorValue,
    pub text_hover: Option<ColorValue>,
    pub border: Option<ColorValue>,
    pub border_hover: Option<ColorValue>,
}

impl VariantSpec {
    /// A variant whose hover/pressed backgrounds start out equal to the
    /// resting background; override with [`hover`](Self::hover) and
    /// [`pressed`](Self::pressed)
    pub fn solid(background: &str, text: &str) -> Self {
        VariantSpec {
            background: ColorValue::text(background),
            background_hover: ColorValue::text(background),
            background_pressed: ColorValue::text(background),
            background_alpha: 1.0,
            text: ColorValue::text(text),
            text_hover: None,
            border: None,
            border_hover: None,
        }
    }

    pub fn hover(mut self, value: &str) -> Self {
        self.background_hover = ColorValue::text(value);
        self
    }

    pub fn text_hover(mut self, value: &str) -> Self {
        self.text_hover = Some(ColorValue::text(value));
        self
    }

    pub fn pressed(mut self, value: &str) -> Self {
        self.background_pressed = ColorValue::text(value);
        self
    }

    pub fn bordered(mut self, value: &str) -> Self {
        self.border = Some(ColorValue::text(value));
        self
    }

    pub fn border_hover(mut self, value: &str) -> Self {
        self.border_hover = Some(ColorValue::text(value));
        self
    }

    pub fn alpha(mut self, value: f32) -> Self {
        self.background_alpha = value;
        self
    }
}

/// One step of a component's size scale. `font_size` and `radius` hold
/// token references.
#[derive(Clone, Debug)]
pub struct SizeSpec {
    pub height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: String,
    pub radius: String,
    pub icon_size: f32,
    pub gap: f32,
}

/// Non-color effects overlaid while an interaction state is active.
/// State-driven color changes live on [`VariantSpec`]; an effect never
/// carries a color.
#[derive(Clone, Debug, Default)]
pub struct StateEffect {
    pub shadow: Option<String>,
    pub transform: Option<String>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    pub cursor: Option<String>,
    pub pointer_events: Option<String>,
    pub outline: Option<String>,
    pub outline_offset: Option<f32>,
}

/// Per-state effect overlays
#[derive(Clone, Debug, Default)]
pub struct StateStyles {
    pub hover: Option<StateEffect>,
    pub focused: Option<StateEffect>,
    pub pressed: Option<StateEffect>,
    pub disabled: Option<StateEffect>,
    pub focus_visible: Option<StateEffect>,
}

/// Live interaction flags at render time. `focused` is any focus;
/// `focus_visible` is keyboard focus only and drives the focus ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub focus_visible: bool,
    pub disabled: bool,
    pub selected: bool,
}

/// Caller-supplied per-instance overrides, taking precedence over the
/// variant and size styling
#[derive(Clone, Debug, Default)]
pub struct StyleOverrides {
    pub background: Option<ColorValue>,
    pub text: Option<ColorValue>,
    pub border: Option<ColorValue>,
    pub radius: Option<RadiusValue>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Per-instance rendering inputs
#[derive(Clone, Debug, Default)]
pub struct Props {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
    /// The host supplies children in a shell slot; the spec then skips
    /// its own label text
    pub has_children: bool,
    pub style: StyleOverrides,
}

pub type ShapeFn = fn(&Props, &VariantSpec, &SizeSpec, InteractionState) -> Vec<Shape>;
pub type DomAttrFn = fn(&Props, InteractionState) -> Vec<(String, String)>;

/// Backend entry points a spec provides
#[derive(Clone)]
pub struct RenderHooks {
    pub shapes: ShapeFn,
    /// Extra host attributes beyond the standard set; the DOM renderer
    /// keeps only `data-*` keys
    pub dom_attrs: Option<DomAttrFn>,
}

pub struct ComponentSpec {
    pub name: &'static str,
    /// Host element tag for the DOM backend
    pub element: &'static str,
    pub variants: IndexMap<&'static str, VariantSpec>,
    pub sizes: IndexMap<&'static str, SizeSpec>,
    pub default_variant: &'static str,
    pub default_size: &'static str,
    pub states: StateStyles,
    pub render: RenderHooks,
}

/// A resolved (variant, size) pair borrowed from a spec
#[derive(Clone, Copy)]
pub struct Selection<'a> {
    pub variant_name: &'a str,
    pub variant: &'a VariantSpec,
    pub size_name: &'a str,
    pub size: &'a SizeSpec,
}

impl ComponentSpec {
    /// Resolve the variant/size named by `props`, or `None` with a warning
    /// when either name is unknown
    pub fn select(&self, props: &Props, diags: &mut Diagnostics) -> Option<Selection<'_>> {
        let variant_name = props.variant.as_deref().unwrap_or(self.default_variant);
        let size_name = props.size.as_deref().unwrap_or(self.default_size);

        let Some((variant_name, variant)) = self.variants.get_key_value(variant_name) else {
            diags.warn(
                "spec.unknown-variant",
                format!("{} has no variant '{variant_name}'", self.name),
            );
            return None;
        };
        let Some((size_name, size)) = self.sizes.get_key_value(size_name) else {
            diags.warn(
                "spec.unknown-size",
                format!("{} has no size '{size_name}'", self.name),
            );
            return None;
        };
        Some(Selection {
            variant_name: *variant_name,
            variant,
            size_name: *size_name,
            size,
        })
    }

    /// Like [`select`](Self::select), but unknown names fall back to the
    /// defaults after warning. The DOM backend uses this so a typo still
    /// yields a usable element. Returns `None` only when the spec's own
    /// defaults name absent entries; specs stay constructible with broken
    /// defaults, so the failure surfaces here, at render time.
    pub fn select_or_default(
        &self,
        props: &Props,
        diags: &mut Diagnostics,
    ) -> Option<Selection<'_>> {
        if let Some(selection) = self.select(props, diags) {
            return Some(selection);
        }
        let (Some(variant), Some(size)) = (
            self.variants.get(self.default_variant),
            self.sizes.get(self.default_size),
        ) else {
            diags.warn(
                "spec.invalid-defaults",
                format!("invalid default variant/size in spec: {}", self.name),
            );
            return None;
        };
        Some(Selection {
            variant_name: self.default_variant,
            variant,
            size_name: self.default_size,
            size,
        })
    }

    /// Run the shape hook and normalize decorator targets. This is the
    /// only path shapes take out of a spec, so renderers never see an
    /// implicit target.
    pub fn shapes_for(
        &self,
        props: &Props,
        selection: Selection<'_>,
        state: InteractionState,
        diags: &mut Diagnostics,
    ) -> Vec<Shape> {
        let mut shapes = (self.render.shapes)(props, selection.variant, selection.size, state);
        resolve_targets(&mut shapes, diags);
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::button_spec;

    #[test]
    fn defaults_apply_when_props_are_empty() {
        let spec = button_spec();
        let props = Props::default();
        let mut diags = Diagnostics::new();
        let selection = spec.select(&props, &mut diags).unwrap();
        assert_eq!(selection.variant_name, spec.default_variant);
        assert_eq!(selection.size_name, spec.default_size);
        assert!(diags.is_empty());
    }

    #[test]
    fn unknown_variant_warns_once() {
        let spec = button_spec();
        let props = Props {
            variant: Some("nonexistent".into()),
            ..Props::default()
        };
        let mut diags = Diagnostics::new();
        assert!(spec.select(&props, &mut diags).is_none());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].code, "spec.unknown-variant");
    }

    #[test]
    fn fallback_selection_still_warns() {
        let spec = button_spec();
        let props = Props {
            size: Some("xxl".into()),
            ..Props::default()
        };
        let mut diags = Diagnostics::new();
        let selection = spec.select_or_default(&props, &mut diags).unwrap();
        assert_eq!(selection.size_name, spec.default_size);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].code, "spec.unknown-size");
    }

    #[test]
    fn broken_defaults_degrade_instead_of_panicking() {
        let mut spec = button_spec();
        spec.default_variant = "missing";
        let mut diags = Diagnostics::new();
        assert!(spec.select_or_default(&Props::default(), &mut diags).is_none());
        assert!(diags
            .iter()
            .any(|d| d.code == "spec.invalid-defaults"));
    }

    #[test]
    fn shapes_leave_with_explicit_targets() {
        let spec = button_spec();
        let props = Props {
            variant: Some("outline".into()),
            ..Props::default()
        };
        let mut diags = Diagnostics::new();
        let selection = spec.select(&props, &mut diags).unwrap();
        let shapes = spec.shapes_for(&props, selection, InteractionState::default(), &mut diags);
        let has_untargeted_decorator = shapes.iter().any(|s| match s {
            Shape::Border { target, .. } | Shape::Shadow { target, .. } => target.is_none(),
            _ => false,
        });
        assert!(!has_untargeted_decorator);
    }
}
