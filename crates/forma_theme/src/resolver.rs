//! Token resolution against the primitive tables
//!
//! All resolution is non-fatal. The failure taxonomy:
//!
//! 1. malformed reference — fails the grammar; warn, caller keeps the
//!    original string;
//! 2. unknown category — structurally a reference but the category is not
//!    one of the five; warn, caller keeps the original string;
//! 3. unresolved name — valid category, name absent from the table; warn
//!    and yield `None` (callers treat `None` as "unresolved").

use crate::mode::ThemeMode;
use crate::reference::{looks_like_reference, TokenRef};
use crate::tables::{TokenTables, TokenValue};
use forma_core::Diagnostics;
use serde::{Deserialize, Serialize};

/// A color-bearing value: either an already-resolved packed 0xRRGGBB
/// number or text (a token reference or a literal like `#ff0000`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Number(u32),
    Text(String),
}

impl ColorValue {
    /// Shorthand for a token-reference or literal color string
    pub fn text(value: impl Into<String>) -> Self {
        ColorValue::Text(value.into())
    }
}

impl From<u32> for ColorValue {
    fn from(value: u32) -> Self {
        ColorValue::Number(value)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Text(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::Text(value)
    }
}

/// Resolve a token reference against the built-in tables.
///
/// Returns `None` both for inputs that are not resolvable references
/// (malformed / unknown category, where the caller should keep the original
/// string) and for names absent from the table; each case records its own
/// diagnostic.
pub fn resolve_token(reference: &str, mode: ThemeMode, diags: &mut Diagnostics) -> Option<TokenValue> {
    resolve_token_in(TokenTables::builtin(), reference, mode, diags)
}

/// Resolve against a specific table set (used with [`TokenOverrides`](crate::TokenOverrides))
pub fn resolve_token_in(
    tables: &TokenTables,
    reference: &str,
    mode: ThemeMode,
    diags: &mut Diagnostics,
) -> Option<TokenValue> {
    let Some(token) = TokenRef::parse(reference) else {
        diags.warn(
            "token.malformed-ref",
            format!("not a token reference: {reference}"),
        );
        return None;
    };

    let Some(category) = token.category else {
        diags.warn(
            "token.unknown-category",
            format!("unknown token category '{}' in {reference}", token.category_raw),
        );
        return None;
    };

    let value = tables.lookup(category, token.name, mode);
    if value.is_none() {
        diags.warn(
            "token.unresolved-name",
            format!("no {category} token named '{}'", token.name),
        );
    }
    value
}

/// Resolve a color value for the given mode.
///
/// Short-circuits: numbers and non-reference strings pass through
/// untouched; only text beginning with `{` is treated as a reference. An
/// unresolvable reference also passes through unchanged (a diagnostic has
/// already been recorded).
pub fn resolve_color(value: &ColorValue, mode: ThemeMode, diags: &mut Diagnostics) -> ColorValue {
    match value {
        ColorValue::Number(n) => ColorValue::Number(*n),
        ColorValue::Text(text) => {
            if !looks_like_reference(text) {
                return ColorValue::Text(text.clone());
            }
            match resolve_token(text, mode, diags) {
                Some(TokenValue::Text(hex)) => ColorValue::Text(hex),
                Some(TokenValue::Number(n)) => ColorValue::Number(n as u32),
                None => ColorValue::Text(text.clone()),
            }
        }
    }
}

/// Resolve a box-shadow value.
///
/// A shadow token reference (`{shadow.` prefix) is resolved through the
/// table; any other string is treated as a literal shadow shorthand and
/// passes through verbatim, so component authors can mix token-backed and
/// ad-hoc shadows.
pub fn resolve_box_shadow(value: &str, mode: ThemeMode, diags: &mut Diagnostics) -> String {
    if !value.starts_with("{shadow.") {
        return value.to_string();
    }
    match resolve_token(value, mode, diags) {
        Some(TokenValue::Text(shadow)) => shadow,
        _ => value.to_string(),
    }
}

/// Parse `#rrggbb` or `0xrrggbb` into a packed integer.
///
/// Any other format (including `rgb()` functional strings) is not
/// supported and falls back to `0x000000` — a known precision loss.
pub fn hex_string_to_number(hex: &str) -> u32 {
    let digits = if let Some(rest) = hex.strip_prefix('#') {
        rest
    } else if let Some(rest) = hex.strip_prefix("0x") {
        rest
    } else {
        return 0x000000;
    };
    u32::from_str_radix(digits, 16).unwrap_or(0x000000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_color_per_mode() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_token("{color.primary}", ThemeMode::Light, &mut diags),
            Some(TokenValue::Text("#6750a4".to_string()))
        );
        assert_eq!(
            resolve_token("{color.primary}", ThemeMode::Dark, &mut diags),
            Some(TokenValue::Text("#d0bcff".to_string()))
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn malformed_ref_warns_and_yields_none() {
        let mut diags = Diagnostics::new();
        assert_eq!(resolve_token("primary", ThemeMode::Light, &mut diags), None);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].code, "token.malformed-ref");
    }

    #[test]
    fn unknown_category_warns() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_token("{paint.primary}", ThemeMode::Light, &mut diags),
            None
        );
        assert_eq!(diags.entries()[0].code, "token.unknown-category");
    }

    #[test]
    fn absent_name_warns_and_yields_none() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_token("{color.nonexistent}", ThemeMode::Light, &mut diags),
            None
        );
        assert_eq!(diags.entries()[0].code, "token.unresolved-name");
    }

    #[test]
    fn resolve_color_short_circuits_literals() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_color(&ColorValue::Number(0xFF0000), ThemeMode::Light, &mut diags),
            ColorValue::Number(0xFF0000)
        );
        assert_eq!(
            resolve_color(&ColorValue::text("#123456"), ThemeMode::Light, &mut diags),
            ColorValue::text("#123456")
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn resolve_color_resolves_references() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_color(
                &ColorValue::text("{color.primary}"),
                ThemeMode::Light,
                &mut diags
            ),
            ColorValue::text("#6750a4")
        );
    }

    #[test]
    fn resolve_color_keeps_unresolved_reference() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_color(
                &ColorValue::text("{color.nonexistent}"),
                ThemeMode::Light,
                &mut diags
            ),
            ColorValue::text("{color.nonexistent}")
        );
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn box_shadow_token_resolves_literal_passes() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_box_shadow("{shadow.sm}", ThemeMode::Light, &mut diags),
            "0 1px 2px rgba(0,0,0,0.05)"
        );
        assert_eq!(
            resolve_box_shadow("inset 0 1px 2px rgba(0,0,0,0.1)", ThemeMode::Light, &mut diags),
            "inset 0 1px 2px rgba(0,0,0,0.1)"
        );
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_string_to_number("#6750a4"), 0x6750A4);
        assert_eq!(hex_string_to_number("0xff0000"), 0xFF0000);
        assert_eq!(hex_string_to_number("rgb(1,2,3)"), 0x000000);
        assert_eq!(hex_string_to_number("#zzz"), 0x000000);
        assert_eq!(hex_string_to_number(""), 0x000000);
    }
}
