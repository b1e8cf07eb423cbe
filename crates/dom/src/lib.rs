//! Host-agnostic DOM primitives shared by the style, positioning and drag crates.
//!
//! This crate centralizes the small set of types every subsystem agrees on:
//! stable element keys, page/viewport geometry, the input event model and the
//! two host traits (`DomTree`, `EventHost`) that a document implementation
//! provides to the interaction layer.

pub mod events;
pub mod geometry;
pub mod host;

pub use events::{EventKind, EventTarget, InputEvent, ListenerToken, TouchPoint, TouchPoints};
pub use geometry::{Point, Rect};
pub use host::{DomTree, EventHost};

// ============================
// Stable Node keys (shared across subsystems)
// ============================

/// A 64-bit stable key for DOM elements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// The document element key (always present).
    pub const ROOT: Self = Self(0);
}

impl core::fmt::Display for NodeKey {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}
