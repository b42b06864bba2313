//! DOM attribute backend
//!
//! Computes everything a DOM host needs to mount a component instance: the
//! element tag, the stylesheet class, `data-*` attributes the generated CSS
//! selects on, and inline style entries for per-instance overrides.
//!
//! The stylesheet carries all variant/size/state styling, so this backend
//! emits selectors, not styles. Spec-provided attribute hooks are filtered
//! to `data-*` keys; anything else (including `aria-*`) is the host's
//! responsibility, where the accessibility framework owns those attributes.

use forma_core::Diagnostics;
use forma_spec::{ComponentSpec, InteractionState, Props, RadiusValue};
use forma_theme::{token_to_css_var, ColorValue};
use indexmap::IndexMap;

/// Attributes for one host element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostAttributes {
    pub element: String,
    pub class_name: String,
    /// `data-*` attributes, in emission order
    pub data: IndexMap<String, String>,
    /// Inline style entries for per-instance overrides, in emission order
    pub style: Vec<(String, String)>,
}

/// The computed attributes plus anything worth telling the caller about.
/// `attributes` is `None` only when the spec's own defaults are broken and
/// no selection exists at all.
#[derive(Debug)]
pub struct DomRender {
    pub attributes: Option<HostAttributes>,
    pub diagnostics: Diagnostics,
}

fn css_color(value: &ColorValue) -> String {
    match value {
        ColorValue::Number(n) => format!("#{n:06x}"),
        ColorValue::Text(text) => token_to_css_var(text),
    }
}

/// Compute host attributes for one instance. Unknown variant or size names
/// fall back to the spec defaults so the element still mounts styled.
pub fn render_attributes(
    spec: &ComponentSpec,
    props: &Props,
    state: InteractionState,
) -> DomRender {
    let mut diags = Diagnostics::new();
    let Some(selection) = spec.select_or_default(props, &mut diags) else {
        return DomRender {
            attributes: None,
            diagnostics: diags,
        };
    };

    let mut data: IndexMap<String, String> = IndexMap::new();
    data.insert("data-variant".to_string(), selection.variant_name.to_string());
    data.insert("data-size".to_string(), selection.size_name.to_string());

    // Boolean states are presence-valued: absent entirely when inactive
    if state.hovered {
        data.insert("data-hovered".to_string(), "true".to_string());
    }
    if state.pressed {
        data.insert("data-pressed".to_string(), "true".to_string());
    }
    if state.focused {
        data.insert("data-focused".to_string(), "true".to_string());
    }
    // keyboard focus only; pointer focus never shows the ring
    if state.focus_visible {
        data.insert("data-focus-visible".to_string(), "true".to_string());
    }
    if state.disabled || props.disabled {
        data.insert("data-disabled".to_string(), "true".to_string());
    }

    if let Some(hook) = spec.render.dom_attrs {
        for (key, value) in hook(props, state) {
            if key.starts_with("data-") {
                data.insert(key, value);
            }
        }
    }

    let mut style: Vec<(String, String)> = Vec::new();
    let overrides = &props.style;
    if let Some(background) = &overrides.background {
        style.push(("background".to_string(), css_color(background)));
    }
    if let Some(text) = &overrides.text {
        style.push(("color".to_string(), css_color(text)));
    }
    if let Some(border) = &overrides.border {
        style.push(("border-color".to_string(), css_color(border)));
    }
    if let Some(radius) = &overrides.radius {
        style.push(("border-radius".to_string(), css_radius(radius)));
    }
    if let Some(width) = overrides.width {
        style.push(("width".to_string(), format!("{width}px")));
    }
    if let Some(height) = overrides.height {
        style.push(("height".to_string(), format!("{height}px")));
    }

    DomRender {
        attributes: Some(HostAttributes {
            element: spec.element.to_string(),
            class_name: format!("forma-{}", spec.name),
            data,
            style,
        }),
        diagnostics: diags,
    }
}

fn css_radius(radius: &RadiusValue) -> String {
    match radius {
        RadiusValue::Px(v) => format!("{v}px"),
        RadiusValue::Corners([a, b, c, d]) => format!("{a}px {b}px {c}px {d}px"),
        RadiusValue::Token(token) => token_to_css_var(token),
    }
}
