//! Input event model delivered by the host.
//!
//! Mouse and touch events keep the shape the host raises them in: mouse events
//! carry a single client position, touch events a list of changed touch points.
//! Reducing both to one pointer sample is the consumer's job.

use crate::NodeKey;
use smallvec::SmallVec;

/// Event types the interaction layer listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    Scroll,
}

impl EventKind {
    /// Whether the event comes from the touch event family.
    #[inline]
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(
            self,
            Self::TouchStart | Self::TouchMove | Self::TouchEnd | Self::TouchCancel
        )
    }

    /// Whether the event comes from the mouse event family.
    #[inline]
    #[must_use]
    pub const fn is_mouse(self) -> bool {
        matches!(self, Self::MouseDown | Self::MouseMove | Self::MouseUp)
    }

    /// DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
            Self::Scroll => "scroll",
        }
    }
}

/// Where a listener is attached or an event is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Document,
    Element(NodeKey),
}

/// One touch point in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub identifier: i64,
    pub client_x: f64,
    pub client_y: f64,
}

pub type TouchPoints = SmallVec<TouchPoint, 2>;

/// Opaque identity of a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerToken(pub u64);

/// A host input event.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    pub kind: EventKind,
    pub target: EventTarget,
    /// Client X for mouse events; unused for touch and scroll.
    pub client_x: f64,
    /// Client Y for mouse events; unused for touch and scroll.
    pub client_y: f64,
    pub button: u16,
    /// Touch points whose state changed with this event.
    pub changed_touches: TouchPoints,
    pub timestamp_ms: f64,
    pub default_prevented: bool,
}

impl InputEvent {
    /// Build a mouse event aimed at `target`.
    #[must_use]
    pub fn mouse(kind: EventKind, target: EventTarget, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            target,
            client_x,
            client_y,
            button: 0,
            changed_touches: SmallVec::new(),
            timestamp_ms: 0.0,
            default_prevented: false,
        }
    }

    /// Build a touch event aimed at `target` with the given changed touches.
    #[must_use]
    pub fn touch<I>(kind: EventKind, target: EventTarget, touches: I) -> Self
    where
        I: IntoIterator<Item = TouchPoint>,
    {
        Self {
            kind,
            target,
            client_x: 0.0,
            client_y: 0.0,
            button: 0,
            changed_touches: touches.into_iter().collect(),
            timestamp_ms: 0.0,
            default_prevented: false,
        }
    }

    /// Build a document scroll event.
    #[must_use]
    pub fn scroll() -> Self {
        Self {
            kind: EventKind::Scroll,
            target: EventTarget::Document,
            client_x: 0.0,
            client_y: 0.0,
            button: 0,
            changed_touches: SmallVec::new(),
            timestamp_ms: 0.0,
            default_prevented: false,
        }
    }

    /// Set the event timestamp.
    #[must_use]
    pub fn at(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Set the mouse button.
    #[must_use]
    pub fn with_button(mut self, button: u16) -> Self {
        self.button = button;
        self
    }

    /// Suppress the host's default action (e.g. synthesized mouse events after a touch).
    #[inline]
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
