//! Stylesheet backend
//!
//! Turns [`ComponentSpec`](forma_spec::ComponentSpec)s into `@layer
//! components` stylesheets and the theme variable sheet they resolve
//! against. Generated CSS never contains literal colors; theming stays a
//! cascade concern.

pub mod emit;
pub mod stylesheet;
pub mod theme_css;

pub use emit::{generate_all_css, CssEmitError, EmittedFile};
pub use stylesheet::{component_class, generate_css, GeneratedCss};
pub use theme_css::generate_theme_css;
