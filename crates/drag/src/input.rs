//! Reduce mouse and touch events to one pointer sample.

use dom::{EventKind, InputEvent, Point};

/// Input family a drag session is driven by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Pointer position in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub page: Point,
    pub timestamp_ms: f64,
}

/// Map a mouse event, or the first changed touch of a touch event, to a page
/// position by adding the current scroll offset to its client position.
///
/// `touchstart` and `touchmove` have their default action suppressed when
/// `prevent_touch_default` is set, even if they carry no changed touch.
/// Returns `None` for scroll events and for touch events without changed
/// touches.
pub fn normalize(
    event: &mut InputEvent,
    scroll: Point,
    prevent_touch_default: bool,
) -> Option<PointerSample> {
    let (kind, client) = if event.kind.is_touch() {
        if prevent_touch_default && matches!(event.kind, EventKind::TouchStart | EventKind::TouchMove) {
            event.prevent_default();
        }
        let touch = event.changed_touches.first()?;
        (PointerKind::Touch, Point::new(touch.client_x, touch.client_y))
    } else if event.kind.is_mouse() {
        (PointerKind::Mouse, Point::new(event.client_x, event.client_y))
    } else {
        return None;
    };
    Some(PointerSample {
        kind,
        page: client + scroll,
        timestamp_ms: event.timestamp_ms,
    })
}
