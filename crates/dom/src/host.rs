//! Capabilities a document implementation exposes to the interaction layer.

use crate::events::{EventKind, EventTarget, InputEvent, ListenerToken};
use crate::geometry::{Point, Rect};
use crate::NodeKey;
use anyhow::Result;

/// Tree structure, geometry and class-list access for a document.
pub trait DomTree {
    /// Parent element of `node`, or `None` for the document element and detached nodes.
    fn parent_element(&self, node: NodeKey) -> Option<NodeKey>;

    /// Border box of `node` relative to the viewport (page box minus scroll offset).
    ///
    /// # Errors
    /// Returns an error when `node` is unknown to the document.
    fn bounding_client_rect(&self, node: NodeKey) -> Result<Rect>;

    /// Current page scroll offset (`pageXOffset`, `pageYOffset`).
    fn scroll_offset(&self) -> Point;

    /// Add a class token to `node`.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown to the document.
    fn add_class(&mut self, node: NodeKey, class: &str) -> Result<()>;

    /// Remove a class token from `node`; removing an absent class is not an error.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown to the document.
    fn remove_class(&mut self, node: NodeKey, class: &str) -> Result<()>;

    /// Whether `node` currently carries `class`.
    fn has_class(&self, node: NodeKey, class: &str) -> bool;

    /// Ancestors of `node` from its parent up to the document element.
    fn ancestors(&self, node: NodeKey) -> Vec<NodeKey> {
        let mut out = Vec::new();
        let mut cursor = self.parent_element(node);
        while let Some(ancestor) = cursor {
            out.push(ancestor);
            cursor = self.parent_element(ancestor);
        }
        out
    }
}

/// Listener registration and event routing.
///
/// Registration follows DOM `addEventListener` semantics: adding the same
/// `(target, kind, token)` twice keeps a single registration, and removing an
/// unregistered listener does nothing.
pub trait EventHost {
    fn add_listener(&mut self, target: EventTarget, kind: EventKind, token: ListenerToken);

    fn remove_listener(&mut self, target: EventTarget, kind: EventKind, token: ListenerToken);

    /// Listeners that receive `event`, in dispatch order: the target first,
    /// then each ancestor, then the document.
    fn listeners_for(&self, event: &InputEvent) -> Vec<ListenerToken>;
}
