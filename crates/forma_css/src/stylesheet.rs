//! Per-component stylesheet generation
//!
//! One spec produces one `@layer components` stylesheet. Every color,
//! font-size, radius and shadow is written as a `var(--*)` reference, never
//! a literal, so one stylesheet serves both theme modes; the variable sheet
//! (see [`theme_css`](crate::theme_css)) carries the mode-specific values.

use forma_core::Diagnostics;
use forma_spec::{ComponentSpec, SizeSpec, StateEffect, VariantSpec};
use forma_theme::{token_to_css_var, ColorValue};

/// A generated stylesheet plus everything worth telling the caller about
#[derive(Debug)]
pub struct GeneratedCss {
    pub text: String,
    pub diagnostics: Diagnostics,
}

/// The CSS class carrying a component's styles
pub fn component_class(spec: &ComponentSpec) -> String {
    format!("forma-{}", spec.name)
}

fn css_var(value: &ColorValue) -> String {
    match value {
        ColorValue::Number(n) => format!("#{n:06x}"),
        ColorValue::Text(text) => token_to_css_var(text),
    }
}

/// Generate the stylesheet for one spec
pub fn generate_css(spec: &ComponentSpec) -> GeneratedCss {
    let mut diags = Diagnostics::new();
    let class = component_class(spec);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("/* Generated from the {} spec */", spec.name));
    lines.push("/* DO NOT EDIT MANUALLY */".to_string());
    lines.push(String::new());
    lines.push("@layer components {".to_string());

    lines.push(format!("  .{class} {{"));
    lines.extend(base_styles(spec, &mut diags));
    lines.push("  }".to_string());
    lines.push(String::new());

    for (variant_name, variant) in &spec.variants {
        lines.push(format!("  .{class}[data-variant=\"{variant_name}\"] {{"));
        lines.extend(variant_styles(variant));

        lines.push(String::new());
        lines.push("    &[data-hovered] {".to_string());
        lines.extend(hover_styles(variant));
        lines.push("    }".to_string());

        lines.push(String::new());
        lines.push("    &[data-pressed] {".to_string());
        lines.extend(pressed_styles(variant));
        lines.push("    }".to_string());

        lines.push("  }".to_string());
        lines.push(String::new());
    }

    for (size_name, size) in &spec.sizes {
        lines.push(format!("  .{class}[data-size=\"{size_name}\"] {{"));
        lines.extend(size_styles(size));
        lines.push("  }".to_string());
        lines.push(String::new());
    }

    lines.extend(state_styles(spec, &class));

    lines.push("}".to_string());

    GeneratedCss {
        text: lines.join("\n"),
        diagnostics: diags,
    }
}

fn base_styles(spec: &ComponentSpec, diags: &mut Diagnostics) -> Vec<String> {
    let (Some(variant), Some(size)) = (
        spec.variants.get(spec.default_variant),
        spec.sizes.get(spec.default_size),
    ) else {
        diags.warn(
            "css.invalid-defaults",
            format!("invalid default variant/size in spec: {}", spec.name),
        );
        return Vec::new();
    };

    let mut lines = vec![
        "    /* Base styles */".to_string(),
        "    display: inline-flex;".to_string(),
        "    align-items: center;".to_string(),
        "    justify-content: center;".to_string(),
        "    box-sizing: border-box;".to_string(),
        "    cursor: pointer;".to_string(),
        "    user-select: none;".to_string(),
        "    transition: background 0.15s ease, border-color 0.15s ease;".to_string(),
        "    font-family: var(--font-sans);".to_string(),
        String::new(),
        "    /* Default variant */".to_string(),
        format!("    background: {};", css_var(&variant.background)),
        format!("    color: {};", css_var(&variant.text)),
    ];
    match &variant.border {
        Some(border) => lines.push(format!("    border: 1px solid {};", css_var(border))),
        None => lines.push("    border: none;".to_string()),
    }
    lines.push(String::new());
    lines.push("    /* Default size */".to_string());
    lines.extend(size_styles(size));
    lines
}

fn variant_styles(variant: &VariantSpec) -> Vec<String> {
    let mut lines = vec![
        format!("    background: {};", css_var(&variant.background)),
        format!("    color: {};", css_var(&variant.text)),
    ];
    if let Some(border) = &variant.border {
        lines.push(format!("    border-color: {};", css_var(border)));
    }
    if variant.background_alpha < 1.0 {
        lines.push("    background: transparent;".to_string());
    }
    lines
}

fn hover_styles(variant: &VariantSpec) -> Vec<String> {
    let mut lines = vec![format!(
        "      background: {};",
        css_var(&variant.background_hover)
    )];
    if let Some(text_hover) = &variant.text_hover {
        lines.push(format!("      color: {};", css_var(text_hover)));
    }
    // With a border but no dedicated hover border color, the border tracks
    // the hover background
    if let Some(border_hover) = &variant.border_hover {
        lines.push(format!("      border-color: {};", css_var(border_hover)));
    } else if variant.border.is_some() {
        lines.push(format!(
            "      border-color: {};",
            css_var(&variant.background_hover)
        ));
    }
    lines
}

fn pressed_styles(variant: &VariantSpec) -> Vec<String> {
    let mut lines = vec![format!(
        "      background: {};",
        css_var(&variant.background_pressed)
    )];
    if variant.border.is_some() {
        lines.push(format!(
            "      border-color: {};",
            css_var(&variant.background_pressed)
        ));
    }
    lines
}

fn size_styles(size: &SizeSpec) -> Vec<String> {
    let mut lines = Vec::new();
    // height 0 means "auto": the host layout decides
    if size.height > 0.0 {
        lines.push(format!("    height: {}px;", size.height));
    }
    lines.extend([
        format!("    padding: {}px {}px;", size.padding_y, size.padding_x),
        format!("    font-size: {};", token_to_css_var(&size.font_size)),
        format!("    border-radius: {};", token_to_css_var(&size.radius)),
    ]);
    if size.gap > 0.0 {
        lines.push(format!("    gap: {}px;", size.gap));
    }
    lines
}

fn shadow_value(value: &str) -> String {
    // Shadow token references become variables; literal shorthand passes
    token_to_css_var(value)
}

// transform/scale/shadow/opacity overlay for one state, without the
// always-on defaults some states carry
fn effect_lines(effect: &StateEffect) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(shadow) = &effect.shadow {
        lines.push(format!("    box-shadow: {};", shadow_value(shadow)));
    }
    if let Some(transform) = &effect.transform {
        lines.push(format!("    transform: {transform};"));
    }
    if let Some(scale) = effect.scale {
        lines.push(format!("    transform: scale({scale});"));
    }
    if let Some(opacity) = effect.opacity {
        lines.push(format!("    opacity: {opacity};"));
    }
    lines
}

fn state_styles(spec: &ComponentSpec, class: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let states = &spec.states;

    // hover and focused carry effects only; their colors live on the
    // variant blocks
    if let Some(hover) = &states.hover {
        lines.push(format!("  .{class}[data-hovered] {{"));
        lines.extend(effect_lines(hover));
        lines.push("  }".to_string());
        lines.push(String::new());
    }

    if let Some(focused) = &states.focused {
        lines.push(format!("  .{class}[data-focused] {{"));
        if let Some(outline) = &focused.outline {
            lines.push(format!("    outline: {outline};"));
        }
        if let Some(offset) = focused.outline_offset {
            lines.push(format!("    outline-offset: {offset}px;"));
        }
        lines.extend(effect_lines(focused));
        lines.push("  }".to_string());
        lines.push(String::new());
    }

    // Keyboard focus always gets a ring, defaulted when the spec is silent
    lines.push(format!("  .{class}[data-focus-visible] {{"));
    let focus = states.focus_visible.clone().unwrap_or_default();
    lines.push(format!(
        "    outline: {};",
        focus.outline.as_deref().unwrap_or("2px solid var(--primary)")
    ));
    lines.push(format!(
        "    outline-offset: {}px;",
        focus.outline_offset.unwrap_or(2.0)
    ));
    if let Some(shadow) = &focus.shadow {
        lines.push(format!("    box-shadow: {};", shadow_value(shadow)));
    }
    lines.push("  }".to_string());
    lines.push(String::new());

    if let Some(pressed) = &states.pressed {
        let effects = effect_lines(pressed);
        if !effects.is_empty() {
            lines.push(format!("  .{class}[data-pressed] {{"));
            lines.extend(effects);
            lines.push("  }".to_string());
            lines.push(String::new());
        }
    }

    // Disabled always renders inert, defaulted when the spec is silent
    lines.push(format!("  .{class}[data-disabled] {{"));
    let disabled = states.disabled.clone().unwrap_or_default();
    lines.push(format!("    opacity: {};", disabled.opacity.unwrap_or(0.38)));
    lines.push(format!(
        "    cursor: {};",
        disabled.cursor.as_deref().unwrap_or("not-allowed")
    ));
    lines.push(format!(
        "    pointer-events: {};",
        disabled.pointer_events.as_deref().unwrap_or("none")
    ));
    lines.push("  }".to_string());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_spec::{button_spec, toggle_button_spec, RenderHooks};
    use indexmap::IndexMap;

    #[test]
    fn header_and_layer_wrap_the_sheet() {
        let css = generate_css(&button_spec());
        assert!(css.diagnostics.is_empty());
        assert!(css.text.starts_with("/* Generated from the Button spec */"));
        assert!(css.text.contains("@layer components {"));
        assert!(css.text.ends_with('}'));
    }

    #[test]
    fn base_styles_use_variables_not_literals() {
        let css = generate_css(&button_spec()).text;
        assert!(css.contains(".forma-Button {"));
        assert!(css.contains("background: var(--surface-container-high);"));
        assert!(css.contains("font-family: var(--font-sans);"));
        assert!(!css.contains("#6750a4"));
        assert!(!css.contains("#d0bcff"));
    }

    #[test]
    fn every_variant_and_size_gets_a_block() {
        let spec = button_spec();
        let css = generate_css(&spec).text;
        for variant in spec.variants.keys() {
            assert!(css.contains(&format!(".forma-Button[data-variant=\"{variant}\"] {{")));
        }
        for size in spec.sizes.keys() {
            assert!(css.contains(&format!(".forma-Button[data-size=\"{size}\"] {{")));
        }
    }

    #[test]
    fn bordered_hover_falls_back_to_hover_background() {
        // surface: border + background_hover but no border_hover
        let css = generate_css(&button_spec()).text;
        let surface_block = css
            .split(".forma-Button[data-variant=\"surface\"]")
            .nth(1)
            .unwrap();
        let hover_block = surface_block.split("&[data-hovered]").nth(1).unwrap();
        let hover_block = hover_block.split('}').next().unwrap();
        assert!(hover_block.contains("background: var(--surface-container);"));
        assert!(hover_block.contains("border-color: var(--surface-container);"));
    }

    #[test]
    fn dedicated_border_hover_wins() {
        let css = generate_css(&button_spec()).text;
        let outline_block = css
            .split(".forma-Button[data-variant=\"outline\"]")
            .nth(1)
            .unwrap();
        let hover_block = outline_block.split("&[data-hovered]").nth(1).unwrap();
        let hover_block = hover_block.split('}').next().unwrap();
        assert!(hover_block.contains("border-color: var(--primary);"));
    }

    #[test]
    fn sub_unit_alpha_renders_transparent() {
        let css = generate_css(&button_spec()).text;
        let ghost_block = css
            .split(".forma-Button[data-variant=\"ghost\"]")
            .nth(1)
            .unwrap();
        let ghost_block = ghost_block.split("&[data-").next().unwrap();
        assert!(ghost_block.contains("background: transparent;"));
    }

    #[test]
    fn state_blocks_carry_defaults() {
        let css = generate_css(&toggle_button_spec()).text;
        assert!(css.contains(".forma-ToggleButton[data-focus-visible] {"));
        assert!(css.contains("outline: 2px solid var(--primary);"));
        assert!(css.contains("outline-offset: 2px;"));
        assert!(css.contains(".forma-ToggleButton[data-disabled] {"));
        assert!(css.contains("opacity: 0.38;"));
        assert!(css.contains("cursor: not-allowed;"));
        assert!(css.contains("pointer-events: none;"));
        assert!(css.contains(".forma-ToggleButton[data-pressed] {"));
        assert!(css.contains("box-shadow: inset 0 1px 2px rgba(0,0,0,0.1);"));
    }

    #[test]
    fn invalid_defaults_warn_exactly_once_and_skip_base_styles() {
        let mut spec = button_spec();
        spec.variants = IndexMap::new();
        spec.render = RenderHooks {
            shapes: |_, _, _, _| Vec::new(),
            dom_attrs: None,
        };
        let css = generate_css(&spec);
        assert_eq!(css.diagnostics.len(), 1);
        assert_eq!(css.diagnostics.entries()[0].code, "css.invalid-defaults");
        assert!(!css.text.contains("/* Base styles */"));
        // the sheet itself still comes out
        assert!(css.text.contains("@layer components {"));
    }

    #[test]
    fn every_variant_emits_hover_and_pressed_blocks() {
        let spec = button_spec();
        let css = generate_css(&spec).text;
        for variant in spec.variants.keys() {
            let block = css
                .split(&format!(".forma-Button[data-variant=\"{variant}\"]"))
                .nth(1)
                .unwrap()
                .split(".forma-Button[data-variant=")
                .next()
                .unwrap();
            assert!(block.contains("&[data-hovered]"), "{variant}");
            assert!(block.contains("&[data-pressed]"), "{variant}");
        }
    }
}
