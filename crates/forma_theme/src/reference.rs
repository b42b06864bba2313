//! Token reference grammar
//!
//! The wire grammar is bit-exact:
//! `^\{(color|spacing|typography|radius|shadow)\.[a-zA-Z0-9-]+\}$`.
//!
//! Grammar validity does not imply the referenced name exists in the
//! primitive tables; existence is a second, separate check performed at
//! resolution time.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn grammar() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\{(color|spacing|typography|radius|shadow)\.[a-zA-Z0-9-]+\}$")
            .expect("token grammar regex")
    })
}

// Looser structural shape used to classify failures: a brace-wrapped
// `word.word` that may still carry an unrecognized category.
fn structure() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\{([a-zA-Z0-9-]+)\.([a-zA-Z0-9-]+)\}$").expect("token structure regex")
    })
}

/// True when `input` matches the token reference grammar exactly
pub fn is_valid_token_ref(input: &str) -> bool {
    grammar().is_match(input)
}

/// The five token categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Radius,
    Shadow,
}

impl TokenCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "color" => Some(Self::Color),
            "spacing" => Some(Self::Spacing),
            "typography" => Some(Self::Typography),
            "radius" => Some(Self::Radius),
            "shadow" => Some(Self::Shadow),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structurally parsed token reference
///
/// `category` is `None` when the reference is brace-wrapped `word.word`
/// but the category is not one of the five known ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenRef<'a> {
    pub category: Option<TokenCategory>,
    pub category_raw: &'a str,
    pub name: &'a str,
}

impl<'a> TokenRef<'a> {
    /// Parse the structural shape `{word.word}`. Returns `None` for input
    /// that is not even structurally a reference.
    pub fn parse(input: &'a str) -> Option<TokenRef<'a>> {
        let caps = structure().captures(input)?;
        let category_raw = caps.get(1)?.as_str();
        let name = caps.get(2)?.as_str();
        Some(TokenRef {
            category: TokenCategory::from_str(category_raw),
            category_raw,
            name,
        })
    }
}

/// Whether a string is shaped like a token reference (cheap prefix check,
/// used by resolvers to short-circuit literal values)
pub fn looks_like_reference(value: &str) -> bool {
    value.starts_with('{')
}

/// Project a token reference into a stylesheet variable name.
///
/// Pure and theme-independent: the cascade resolves the variable per active
/// theme at paint time. `color` and `typography` references become
/// `var(--name)`; `spacing`, `radius` and `shadow` become
/// `var(--category-name)`. An unrecognized category falls back to
/// `var(--name)` so stylesheet generation stays total. Non-reference input
/// passes through unchanged.
pub fn token_to_css_var(value: &str) -> String {
    match TokenRef::parse(value) {
        Some(token) => match token.category {
            Some(TokenCategory::Color) | Some(TokenCategory::Typography) | None => {
                format!("var(--{})", token.name)
            }
            Some(TokenCategory::Spacing) | Some(TokenCategory::Radius)
            | Some(TokenCategory::Shadow) => {
                format!("var(--{}-{})", token.category_raw, token.name)
            }
        },
        None => value.to_string(),
    }
}
