//! Computed-style model and the typed style accessor used by interaction code.
//!
//! `style_types` holds the keyword-level view of an element's computed style,
//! including the properties that decide whether an element establishes a
//! containing block. `accessor` layers unit-aware getters/setters over a
//! host's untyped inline-style API.

pub mod accessor;
pub mod style_types;

pub use accessor::{
    KeywordProperty, NumericProperty, PaddingBox, PixelProperty, SizeProperty, StyleAccess,
    format_px,
};
pub use style_types::{BoxSizing, ComputedStyle, Edges, Position};
