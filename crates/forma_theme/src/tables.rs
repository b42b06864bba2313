//! Token primitive tables
//!
//! Five independent mappings with stable string keys. Colors are 6-digit hex
//! strings and exist once per [`ThemeMode`]; spacing, typography and radius
//! are raw numbers; shadows are composite CSS shorthand strings with the
//! sentinel value `"none"`.
//!
//! The built-in tables carry the Material-3-flavoured palette the component
//! library was designed against. They are constructed once in a `OnceLock`
//! and never mutated; [`TokenOverrides`](crate::TokenOverrides) produces a
//! new owned table instead.

use crate::mode::ThemeMode;
use crate::reference::TokenCategory;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// A resolved token value
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Number(f32),
    Text(String),
}

impl TokenValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            TokenValue::Number(n) => Some(*n),
            TokenValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Number(_) => None,
            TokenValue::Text(s) => Some(s),
        }
    }
}

/// The five primitive tables
#[derive(Clone, Debug, Default)]
pub struct TokenTables {
    pub(crate) colors_light: FxHashMap<String, String>,
    pub(crate) colors_dark: FxHashMap<String, String>,
    pub(crate) spacing: FxHashMap<String, f32>,
    pub(crate) typography: FxHashMap<String, f32>,
    pub(crate) radius: FxHashMap<String, f32>,
    pub(crate) shadow: FxHashMap<String, String>,
}

impl TokenTables {
    /// The built-in tables, constructed once
    pub fn builtin() -> &'static TokenTables {
        static TABLES: OnceLock<TokenTables> = OnceLock::new();
        TABLES.get_or_init(build_builtin)
    }

    /// Look up a color hex string for the given mode
    pub fn color(&self, name: &str, mode: ThemeMode) -> Option<&str> {
        let table = match mode {
            ThemeMode::Light => &self.colors_light,
            ThemeMode::Dark => &self.colors_dark,
        };
        table.get(name).map(String::as_str)
    }

    /// Look up any category. Returns `None` when the name is absent.
    pub fn lookup(&self, category: TokenCategory, name: &str, mode: ThemeMode) -> Option<TokenValue> {
        match category {
            TokenCategory::Color => self.color(name, mode).map(|s| TokenValue::Text(s.to_string())),
            TokenCategory::Spacing => self.spacing.get(name).map(|n| TokenValue::Number(*n)),
            TokenCategory::Typography => self.typography.get(name).map(|n| TokenValue::Number(*n)),
            TokenCategory::Radius => self.radius.get(name).map(|n| TokenValue::Number(*n)),
            TokenCategory::Shadow => self.shadow.get(name).map(|s| TokenValue::Text(s.clone())),
        }
    }

    /// Color entries for one mode, sorted by name for deterministic output
    pub fn color_entries(&self, mode: ThemeMode) -> Vec<(&str, &str)> {
        let table = match mode {
            ThemeMode::Light => &self.colors_light,
            ThemeMode::Dark => &self.colors_dark,
        };
        let mut entries: Vec<(&str, &str)> =
            table.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Numeric entries for spacing/typography/radius, sorted by name
    pub fn numeric_entries(&self, category: TokenCategory) -> Vec<(&str, f32)> {
        let table = match category {
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Typography => &self.typography,
            TokenCategory::Radius => &self.radius,
            _ => return Vec::new(),
        };
        let mut entries: Vec<(&str, f32)> =
            table.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Shadow entries, sorted by name
    pub fn shadow_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .shadow
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Names present in one category (test support)
    pub fn names(&self, category: TokenCategory, mode: ThemeMode) -> Vec<&str> {
        match category {
            TokenCategory::Color => self.color_entries(mode).into_iter().map(|(k, _)| k).collect(),
            TokenCategory::Shadow => self.shadow_entries().into_iter().map(|(k, _)| k).collect(),
            _ => self
                .numeric_entries(category)
                .into_iter()
                .map(|(k, _)| k)
                .collect(),
        }
    }
}

fn color_map(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn number_map(entries: &[(&str, f32)]) -> FxHashMap<String, f32> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn build_builtin() -> TokenTables {
    let colors_light = color_map(&[
        ("primary", "#6750a4"),
        ("primary-hover", "#7965af"),
        ("primary-pressed", "#563e92"),
        ("on-primary", "#ffffff"),
        ("secondary", "#625b71"),
        ("secondary-hover", "#736c82"),
        ("secondary-pressed", "#564f65"),
        ("on-secondary", "#ffffff"),
        ("tertiary", "#7d5260"),
        ("tertiary-hover", "#8e6370"),
        ("tertiary-pressed", "#6f4550"),
        ("on-tertiary", "#ffffff"),
        ("error", "#b3261e"),
        ("error-hover", "#c43e37"),
        ("error-pressed", "#9c1f18"),
        ("on-error", "#ffffff"),
        ("surface", "#fef7ff"),
        ("surface-container", "#f3edf7"),
        ("surface-container-high", "#ece6f0"),
        ("surface-container-highest", "#e6e0e9"),
        ("on-surface", "#1d1b20"),
        ("on-surface-variant", "#49454f"),
        ("outline", "#79747e"),
        ("outline-variant", "#cac4d0"),
    ]);

    let colors_dark = color_map(&[
        ("primary", "#d0bcff"),
        ("primary-hover", "#e3d7ff"),
        ("primary-pressed", "#b69df8"),
        ("on-primary", "#381e72"),
        ("secondary", "#ccc2dc"),
        ("secondary-hover", "#d9cfe9"),
        ("secondary-pressed", "#bfb5cf"),
        ("on-secondary", "#332d41"),
        ("tertiary", "#efb8c8"),
        ("tertiary-hover", "#fcc4d4"),
        ("tertiary-pressed", "#e2abbb"),
        ("on-tertiary", "#492532"),
        ("error", "#f2b8b5"),
        ("error-hover", "#ffc4c1"),
        ("error-pressed", "#e5aba8"),
        ("on-error", "#601410"),
        ("surface", "#141218"),
        ("surface-container", "#211f26"),
        ("surface-container-high", "#2b2930"),
        ("surface-container-highest", "#36343b"),
        ("on-surface", "#e6e0e9"),
        ("on-surface-variant", "#cac4d0"),
        ("outline", "#938f99"),
        ("outline-variant", "#49454f"),
    ]);

    // 4px-based spacing scale
    let spacing = number_map(&[
        ("0", 0.0),
        ("1", 4.0),
        ("2", 8.0),
        ("3", 12.0),
        ("4", 16.0),
        ("5", 20.0),
        ("6", 24.0),
        ("8", 32.0),
        ("10", 40.0),
        ("12", 48.0),
    ]);

    let typography = number_map(&[
        ("text-xs", 12.0),
        ("text-sm", 14.0),
        ("text-md", 16.0),
        ("text-lg", 18.0),
        ("text-xl", 20.0),
    ]);

    let radius = number_map(&[
        ("none", 0.0),
        ("sm", 4.0),
        ("md", 6.0),
        ("lg", 8.0),
        ("xl", 12.0),
        ("full", 9999.0),
    ]);

    let shadow = color_map(&[
        ("none", "none"),
        ("sm", "0 1px 2px rgba(0,0,0,0.05)"),
        ("md", "0 4px 6px rgba(0,0,0,0.1)"),
        ("lg", "0 10px 15px rgba(0,0,0,0.1)"),
        ("focus-ring", "0 0 0 3px rgba(103,80,164,0.35)"),
    ]);

    TokenTables {
        colors_light,
        colors_dark,
        spacing,
        typography,
        radius,
        shadow,
    }
}
