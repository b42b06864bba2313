//! Composite box-shadow shorthand parsing
//!
//! Shadow tokens store CSS shorthand like
//! `0 1px 2px rgba(0,0,0,0.05), 0 4px 6px rgba(0,0,0,0.1)`. The list is
//! split on top-level commas only — commas inside `rgba(...)` must not
//! split the list, so the scanner tracks parenthesis depth (the `regex`
//! crate has no lookahead).

use regex::Regex;
use std::sync::OnceLock;

fn color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"rgba?\([^)]*\)|#[0-9a-fA-F]{3,8}").expect("shadow color regex")
    })
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d*\.?\d+").expect("shadow number regex"))
}

/// One parsed shadow layer
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub inset: bool,
    /// The color occurrence as written (`rgba(...)` or hex), empty when absent
    pub color: String,
    /// Alpha derived from the color's trailing numeric component; 1.0 for
    /// non-alpha colors
    pub alpha: f32,
}

/// Parse a composite shadow shorthand string into its layers.
///
/// The literal string `"none"` parses to an empty list. Missing trailing
/// numeric values default to 0.
pub fn parse_shadow(shadow: &str) -> Vec<ParsedShadow> {
    let trimmed = shadow.trim();
    if trimmed.is_empty() || trimmed == "none" {
        return Vec::new();
    }

    split_top_level(trimmed)
        .into_iter()
        .filter_map(parse_segment)
        .collect()
}

// Split on commas at parenthesis depth zero
fn split_top_level(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&input[start..]);
    segments
}

fn parse_segment(segment: &str) -> Option<ParsedShadow> {
    let mut rest = segment.trim();
    if rest.is_empty() {
        return None;
    }

    let inset = rest.starts_with("inset");
    if inset {
        rest = rest["inset".len()..].trim_start();
    }

    // Extract the first color occurrence before scanning numerics so the
    // color's own components are not mistaken for offsets
    let mut color = String::new();
    let mut alpha = 1.0f32;
    let mut remainder = rest.to_string();
    if let Some(m) = color_re().find(rest) {
        color = m.as_str().to_string();
        remainder.replace_range(m.range(), "");
        alpha = color_alpha(&color);
    }

    let mut numbers = number_re()
        .find_iter(&remainder)
        .map(|m| m.as_str().parse::<f32>().unwrap_or(0.0));

    Some(ParsedShadow {
        offset_x: numbers.next().unwrap_or(0.0),
        offset_y: numbers.next().unwrap_or(0.0),
        blur: numbers.next().unwrap_or(0.0),
        spread: numbers.next().unwrap_or(0.0),
        inset,
        color,
        alpha,
    })
}

// rgba(r,g,b,a) carries its alpha as the trailing component
fn color_alpha(color: &str) -> f32 {
    if !color.starts_with("rgba(") {
        return 1.0;
    }
    let inner = color
        .trim_start_matches("rgba(")
        .trim_end_matches(')');
    inner
        .rsplit(',')
        .next()
        .and_then(|a| a.trim().parse::<f32>().ok())
        .unwrap_or(1.0)
}
