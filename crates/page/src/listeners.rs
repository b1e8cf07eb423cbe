//! Event listener registration and dispatch order.

use crate::Page;
use dom::{DomTree, EventHost, EventKind, EventTarget, InputEvent, ListenerToken};
use log::trace;

/// Registered `(target, kind, token)` triples in registration order.
#[derive(Clone, Debug, Default)]
pub struct ListenerTable {
    entries: Vec<(EventTarget, EventKind, ListenerToken)>,
}

impl ListenerTable {
    /// Register a listener; an identical registration is kept once.
    pub fn add(&mut self, target: EventTarget, kind: EventKind, token: ListenerToken) {
        let entry = (target, kind, token);
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Remove a listener; absent listeners are ignored.
    pub fn remove(&mut self, target: EventTarget, kind: EventKind, token: ListenerToken) {
        self.entries.retain(|entry| *entry != (target, kind, token));
    }

    /// Whether the exact registration exists.
    #[must_use]
    pub fn contains(&self, target: EventTarget, kind: EventKind, token: ListenerToken) -> bool {
        self.entries.contains(&(target, kind, token))
    }

    /// Listeners on `target` for `kind`, in registration order.
    pub fn on(&self, target: EventTarget, kind: EventKind) -> impl Iterator<Item = ListenerToken> + '_ {
        self.entries
            .iter()
            .filter(move |(entry_target, entry_kind, _)| *entry_target == target && *entry_kind == kind)
            .map(|(_, _, token)| *token)
    }

    /// Number of registrations held by `token`.
    #[must_use]
    pub fn count_for(&self, token: ListenerToken) -> usize {
        self.entries
            .iter()
            .filter(|(_, _, entry_token)| *entry_token == token)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventHost for Page {
    fn add_listener(&mut self, target: EventTarget, kind: EventKind, token: ListenerToken) {
        trace!("add {} listener {token:?} on {target:?}", kind.as_str());
        self.listeners.add(target, kind, token);
    }

    fn remove_listener(&mut self, target: EventTarget, kind: EventKind, token: ListenerToken) {
        trace!("remove {} listener {token:?} on {target:?}", kind.as_str());
        self.listeners.remove(target, kind, token);
    }

    fn listeners_for(&self, event: &InputEvent) -> Vec<ListenerToken> {
        let mut path = Vec::new();
        if let EventTarget::Element(node) = event.target {
            if self.contains(node) {
                path.push(EventTarget::Element(node));
                path.extend(self.ancestors(node).into_iter().map(EventTarget::Element));
            }
        }
        path.push(EventTarget::Document);
        path.into_iter()
            .flat_map(|target| self.listeners.on(target, event.kind))
            .collect()
    }
}
