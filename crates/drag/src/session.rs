//! State of one drag, from pointer-down to release.

use crate::input::PointerKind;
use dom::{NodeKey, Point};

/// Live state of a drag, handed to every callback.
///
/// Callbacks may change any field; the controller reads the session again
/// after each callback returns.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Element that moves.
    pub element: NodeKey,
    /// Element that received the pointer-down.
    pub handle: NodeKey,
    pub pointer_kind: PointerKind,
    /// Last known pointer position in page coordinates.
    pub page_x: f64,
    pub page_y: f64,
    /// Pointer offset from the element's top-left border corner at grab time.
    pub item_x: f64,
    pub item_y: f64,
    /// Page scroll offset as of the last processed event.
    pub scroll_x: f64,
    pub scroll_y: f64,
    /// Ancestor establishing the containing block; `None` is the page origin.
    pub container: Option<NodeKey>,
    pub started_at_ms: f64,
}

impl DragSession {
    #[inline]
    #[must_use]
    pub const fn pointer(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }

    /// Top-left border corner of the element in page coordinates.
    #[inline]
    #[must_use]
    pub fn element_origin(&self) -> Point {
        Point::new(self.page_x - self.item_x, self.page_y - self.item_y)
    }

    /// `left`/`top` that keep the grip point under the pointer, given the
    /// containing block origin.
    #[inline]
    #[must_use]
    pub fn rendered_position(&self, origin: Point) -> Point {
        self.element_origin() - origin
    }

    /// Record the pointer from a new sample. The sample already includes `scroll`.
    pub fn move_to(&mut self, page: Point, scroll: Point) {
        self.page_x = page.x;
        self.page_y = page.y;
        self.scroll_x = scroll.x;
        self.scroll_y = scroll.y;
    }

    /// Shift the pointer by the scroll delta since the last event, as a
    /// stationary pointer moves across the page while it scrolls.
    ///
    /// Returns the delta.
    pub fn scroll_to(&mut self, scroll: Point) -> Point {
        let delta = scroll - Point::new(self.scroll_x, self.scroll_y);
        self.page_x += delta.x;
        self.page_y += delta.y;
        self.scroll_x = scroll.x;
        self.scroll_y = scroll.y;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DragSession {
        DragSession {
            element: NodeKey(1),
            handle: NodeKey(1),
            pointer_kind: PointerKind::Mouse,
            page_x: 100.0,
            page_y: 100.0,
            item_x: 20.0,
            item_y: 10.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            container: None,
            started_at_ms: 0.0,
        }
    }

    #[test]
    fn rendered_position_subtracts_grip_and_origin() {
        let session = session();
        assert_eq!(session.rendered_position(Point::ZERO), Point::new(80.0, 90.0));
        assert_eq!(
            session.rendered_position(Point::new(30.0, 40.0)),
            Point::new(50.0, 50.0)
        );
    }

    #[test]
    fn scrolling_carries_the_pointer() {
        let mut session = session();
        let delta = session.scroll_to(Point::new(0.0, 50.0));
        assert_eq!(delta, Point::new(0.0, 50.0));
        assert_eq!(session.pointer(), Point::new(100.0, 150.0));
        assert_eq!(session.scroll_to(Point::new(0.0, 20.0)), Point::new(0.0, -30.0));
        assert_eq!(session.pointer(), Point::new(100.0, 120.0));
    }
}
