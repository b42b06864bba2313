//! Scene-graph backend
//!
//! Renders a [`ComponentSpec`](forma_spec::ComponentSpec) instance as draw
//! calls on a caller-provided [`Surface`]. Unlike the stylesheet backend,
//! tokens resolve eagerly here against the active theme mode.

pub mod render;
pub mod surface;

pub use render::{render, SceneContext};
pub use surface::{DrawCommand, RecordingSurface, Surface};
