//! Forma Core
//!
//! Foundational primitives shared by every Forma crate:
//!
//! - [`Color`]: RGBA color with f32 components and hex conversions
//! - [`Rect`]: axis-aligned rectangle used by the scene-graph renderer
//! - [`Diagnostics`]: the structured warning/error channel all renderers
//!   report through instead of ad hoc console logging
//!
//! Nothing here is fatal by design: render paths collect [`Diagnostic`]
//! entries and degrade instead of returning errors, so a malformed component
//! spec leaves the surrounding editor responsive.

pub mod color;
pub mod diagnostics;
pub mod geometry;

pub use color::Color;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use geometry::Rect;
