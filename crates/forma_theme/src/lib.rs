//! Forma Theme System
//!
//! Design-token tables and the token resolver that every Forma renderer
//! shares.
//!
//! # Overview
//!
//! A token reference is an indirection string of the exact shape
//! `{category.name}`, where `category` is one of `color`, `spacing`,
//! `typography`, `radius`, `shadow`. Component specs carry references, not
//! values; each renderer resolves them at its own time:
//!
//! - the stylesheet renderer projects references into CSS variables
//!   ([`token_to_css_var`]) and never embeds resolved literals, so the
//!   in-browser cascade can swap themes at paint time;
//! - the scene-graph renderer resolves references to canvas-native values
//!   ([`resolve_token`], [`resolve_color`]) for the requested [`ThemeMode`].
//!
//! Only the color category is theme-keyed; spacing, typography, radius and
//! shadow tables are mode-invariant.
//!
//! # Error handling
//!
//! Resolution never panics and never returns `Err`: malformed references,
//! unknown categories and absent names all record a warning in the caller's
//! [`Diagnostics`](forma_core::Diagnostics) sink and degrade (the original
//! string passes through, or the lookup yields `None`).

pub mod mode;
pub mod overrides;
pub mod reference;
pub mod resolver;
pub mod shadow;
pub mod tables;

pub use mode::ThemeMode;
pub use overrides::TokenOverrides;
pub use reference::{is_valid_token_ref, token_to_css_var, TokenCategory, TokenRef};
pub use resolver::{
    hex_string_to_number, resolve_box_shadow, resolve_color, resolve_token, resolve_token_in,
    ColorValue,
};
pub use shadow::{parse_shadow, ParsedShadow};
pub use tables::{TokenTables, TokenValue};
