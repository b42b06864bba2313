//! Theme variable sheet
//!
//! Component stylesheets only ever reference `var(--*)`; this sheet gives
//! those variables their values. Light values live on `:root`, dark values
//! on `[data-theme="dark"]`, so switching modes is one attribute flip with
//! no stylesheet regeneration. Variable names mirror
//! [`token_to_css_var`](forma_theme::token_to_css_var).

use forma_spec::FONT_SANS;
use forma_theme::{ThemeMode, TokenCategory, TokenTables};

/// Generate the full variable sheet for a table set
pub fn generate_theme_css(tables: &TokenTables) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("/* Generated theme variables */".to_string());
    lines.push("/* DO NOT EDIT MANUALLY */".to_string());
    lines.push(String::new());

    lines.push(":root {".to_string());
    lines.push(format!("  --font-sans: {FONT_SANS};"));
    lines.push(String::new());
    lines.push("  /* Colors (light) */".to_string());
    for (name, hex) in tables.color_entries(ThemeMode::Light) {
        lines.push(format!("  --{name}: {hex};"));
    }
    lines.push(String::new());
    lines.push("  /* Spacing */".to_string());
    for (name, value) in tables.numeric_entries(TokenCategory::Spacing) {
        lines.push(format!("  --spacing-{name}: {value}px;"));
    }
    lines.push(String::new());
    lines.push("  /* Typography */".to_string());
    for (name, value) in tables.numeric_entries(TokenCategory::Typography) {
        lines.push(format!("  --{name}: {value}px;"));
    }
    lines.push(String::new());
    lines.push("  /* Radius */".to_string());
    for (name, value) in tables.numeric_entries(TokenCategory::Radius) {
        lines.push(format!("  --radius-{name}: {value}px;"));
    }
    lines.push(String::new());
    lines.push("  /* Shadows */".to_string());
    for (name, value) in tables.shadow_entries() {
        lines.push(format!("  --shadow-{name}: {value};"));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("[data-theme=\"dark\"] {".to_string());
    for (name, hex) in tables.color_entries(ThemeMode::Dark) {
        lines.push(format!("  --{name}: {hex};"));
    }
    lines.push("}".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_mode_blocks_are_present() {
        let css = generate_theme_css(TokenTables::builtin());
        assert!(css.contains(":root {"));
        assert!(css.contains("[data-theme=\"dark\"] {"));
        assert!(css.contains("--primary: #6750a4;"));
        assert!(css.contains("--primary: #d0bcff;"));
    }

    #[test]
    fn variable_names_match_the_stylesheet_projection() {
        let css = generate_theme_css(TokenTables::builtin());
        assert!(css.contains("--text-md: 16px;"));
        assert!(css.contains("--radius-md: 6px;"));
        assert!(css.contains("--spacing-4: 16px;"));
        assert!(css.contains("--shadow-sm: 0 1px 2px rgba(0,0,0,0.05);"));
        assert!(css.contains("--font-sans: Inter, system-ui, sans-serif;"));
    }

    #[test]
    fn dark_block_only_carries_colors() {
        let css = generate_theme_css(TokenTables::builtin());
        let dark = css.split("[data-theme=\"dark\"]").nth(1).unwrap();
        assert!(dark.contains("--on-surface:"));
        assert!(!dark.contains("--spacing-"));
        assert!(!dark.contains("--shadow-"));
    }
}
