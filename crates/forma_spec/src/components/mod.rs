//! Built-in component specifications

mod button;
mod toggle_button;

pub use button::button_spec;
pub use toggle_button::toggle_button_spec;

use crate::component::{ComponentSpec, InteractionState, StateEffect, StateStyles, VariantSpec};
use forma_core::Diagnostics;
use forma_theme::{resolve_token, ColorValue, ThemeMode, TokenValue};

/// Font stack shared by every backend
pub const FONT_SANS: &str = "Inter, system-ui, sans-serif";

pub(crate) const PRESSED_SHADOW: &str = "inset 0 1px 2px rgba(0,0,0,0.1)";

/// All built-in specs, in registration order
pub fn registry() -> Vec<ComponentSpec> {
    vec![button_spec(), toggle_button_spec()]
}

/// Shared interaction states: pressed inset shadow, disabled dimming,
/// focus-visible ring
pub(crate) fn standard_states() -> StateStyles {
    StateStyles {
        pressed: Some(StateEffect {
            shadow: Some(PRESSED_SHADOW.to_string()),
            ..StateEffect::default()
        }),
        disabled: Some(StateEffect {
            opacity: Some(0.38),
            cursor: Some("not-allowed".to_string()),
            pointer_events: Some("none".to_string()),
            ..StateEffect::default()
        }),
        focus_visible: Some(StateEffect {
            outline: Some("2px solid var(--primary)".to_string()),
            outline_offset: Some(2.0),
            ..StateEffect::default()
        }),
        ..StateStyles::default()
    }
}

/// The state-appropriate text color
pub(crate) fn text_for(variant: &VariantSpec, state: InteractionState) -> ColorValue {
    if state.hovered {
        if let Some(hover) = &variant.text_hover {
            return hover.clone();
        }
    }
    variant.text.clone()
}

/// Resolve a typography token to pixels. Typography is mode-invariant, so
/// any mode works; unresolvable tokens fall back to 16px.
pub(crate) fn font_size_px(token: &str) -> f32 {
    let mut diags = Diagnostics::new();
    match resolve_token(token, ThemeMode::Light, &mut diags) {
        Some(TokenValue::Number(px)) => px,
        _ => 16.0,
    }
}

/// The state-appropriate background: pressed wins over hovered
pub(crate) fn background_for(variant: &VariantSpec, state: InteractionState) -> ColorValue {
    if state.pressed {
        return variant.background_pressed.clone();
    }
    if state.hovered {
        return variant.background_hover.clone();
    }
    variant.background.clone()
}

/// The state-appropriate border color, `None` for borderless variants
pub(crate) fn border_for(variant: &VariantSpec, state: InteractionState) -> Option<ColorValue> {
    if state.hovered {
        if let Some(hover) = &variant.border_hover {
            return Some(hover.clone());
        }
    }
    variant.border.clone()
}
