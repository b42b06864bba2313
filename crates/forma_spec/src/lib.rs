//! Component specifications: pure data descriptions of UI components
//!
//! A spec names its variants and sizes, carries per-state styling, and
//! provides a render hook emitting [`Shape`]s. Backends (`forma_css`,
//! `forma_scene`, `forma_dom`) consume the same spec, so a component looks
//! the same however it is rendered.
//!
//! Color and size fields hold token references like `{color.primary}`;
//! specs never embed resolved values. Resolution happens in the backends,
//! where the theme mode is known.

pub mod component;
pub mod components;
pub mod normalize;
pub mod shape;

pub use component::{
    ComponentSpec, DomAttrFn, InteractionState, Props, RenderHooks, Selection, ShapeFn, SizeSpec,
    StateEffect, StateStyles, StyleOverrides, VariantSpec,
};
pub use components::{button_spec, registry, toggle_button_spec, FONT_SANS};
pub use normalize::resolve_targets;
pub use shape::{Dimension, GradientStop, RadiusValue, Shape, TextAlign, TextBaseline};
