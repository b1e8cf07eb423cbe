//! Drag state machine for one draggable element.
//!
//! A pointer-down on the handle captures a [`DragSession`], switches the
//! element to `position: absolute` and keeps its `left`/`top` equal to
//! `pointer - grip offset - containing block origin` on every move and
//! scroll until the pointer is released.

use crate::DragHost;
use crate::callbacks::DragCallbacks;
use crate::config::DragConfig;
use crate::element::{BoxSize, DraggableElement};
use crate::input::{PointerKind, normalize};
use crate::session::DragSession;
use anyhow::{Context as _, Result};
use css::{KeywordProperty, PixelProperty, SizeProperty};
use css_position::{container_origin, resolve_container};
use dom::{EventKind, EventTarget, InputEvent, ListenerToken, NodeKey};
use log::{debug, trace, warn};

/// Where a controller is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Waiting for a pointer-down on the handle.
    Idle,
    /// A session is active.
    Dragging,
}

/// Listeners held while dragging, per input family.
///
/// Mouse listeners sit on the document so fast motion that leaves the element
/// keeps dragging. Touch listeners sit on the handle so a second finger lifted
/// elsewhere does not reach them.
fn session_listeners(kind: PointerKind, handle: NodeKey) -> Vec<(EventTarget, EventKind)> {
    let mut listeners = match kind {
        PointerKind::Mouse => vec![
            (EventTarget::Document, EventKind::MouseMove),
            (EventTarget::Document, EventKind::MouseUp),
        ],
        PointerKind::Touch => vec![
            (EventTarget::Element(handle), EventKind::TouchMove),
            (EventTarget::Element(handle), EventKind::TouchEnd),
            (EventTarget::Element(handle), EventKind::TouchCancel),
        ],
    };
    listeners.push((EventTarget::Document, EventKind::Scroll));
    listeners
}

/// Controller for one draggable element.
#[derive(Debug)]
pub struct DragController {
    token: ListenerToken,
    draggable: DraggableElement,
    callbacks: DragCallbacks,
    phase: DragPhase,
    session: Option<DragSession>,
    /// Session listeners registered at the last pointer-down.
    listening: Vec<(EventTarget, EventKind)>,
}

impl DragController {
    #[must_use]
    pub fn new(token: ListenerToken, draggable: DraggableElement, callbacks: DragCallbacks) -> Self {
        Self {
            token,
            draggable,
            callbacks,
            phase: DragPhase::Idle,
            session: None,
            listening: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn token(&self) -> ListenerToken {
        self.token
    }

    #[inline]
    #[must_use]
    pub const fn element(&self) -> NodeKey {
        self.draggable.element
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn draggable(&self) -> &DraggableElement {
        &self.draggable
    }

    /// The active session, if dragging.
    #[inline]
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Listen for pointer-downs on the handle.
    pub fn enable<H>(&self, host: &mut H)
    where
        H: DragHost + ?Sized,
    {
        let handle = EventTarget::Element(self.draggable.handle);
        host.add_listener(handle, EventKind::MouseDown, self.token);
        host.add_listener(handle, EventKind::TouchStart, self.token);
        debug!("drag enabled on {} (handle {})", self.draggable.element, self.draggable.handle);
    }

    /// Stop listening. An active session is ended first, running `on_end`.
    ///
    /// # Errors
    /// Propagates host failures while ending the active session.
    pub fn disable<H>(&mut self, host: &mut H, config: &DragConfig) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let ended = if self.phase == DragPhase::Dragging {
            self.end(host, config)
        } else {
            Ok(())
        };
        let handle = EventTarget::Element(self.draggable.handle);
        host.remove_listener(handle, EventKind::MouseDown, self.token);
        host.remove_listener(handle, EventKind::TouchStart, self.token);
        debug!("drag disabled on {}", self.draggable.element);
        ended
    }

    /// React to an event delivered to one of this controller's listeners.
    ///
    /// # Errors
    /// Propagates host failures while reading or writing the element's style.
    pub fn handle_event<H>(&mut self, host: &mut H, event: &mut InputEvent, config: &DragConfig) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        match (self.phase, event.kind) {
            (DragPhase::Idle, EventKind::MouseDown | EventKind::TouchStart) => {
                self.start(host, event, config)
            }
            (DragPhase::Dragging, EventKind::MouseMove | EventKind::TouchMove) => {
                self.drag(host, event, config)
            }
            (DragPhase::Dragging, EventKind::Scroll) => self.scroll(host),
            (
                DragPhase::Dragging,
                EventKind::MouseUp | EventKind::TouchEnd | EventKind::TouchCancel,
            ) => self.end(host, config),
            (phase, kind) => {
                trace!("{} ignored by {:?} controller", kind.as_str(), phase);
                Ok(())
            }
        }
    }

    fn start<H>(&mut self, host: &mut H, event: &mut InputEvent, config: &DragConfig) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let scroll = host.scroll_offset();
        let Some(sample) = normalize(event, scroll, config.prevent_touch_default) else {
            return Ok(());
        };
        let element = self.draggable.element;
        let rect = host
            .bounding_client_rect(element)
            .with_context(|| format!("reading the box of dragged element {element}"))?;
        let size = self.draggable.capture(&*host)?;

        let mut session = DragSession {
            element,
            handle: self.draggable.handle,
            pointer_kind: sample.kind,
            page_x: sample.page.x,
            page_y: sample.page.y,
            item_x: sample.page.x - scroll.x - rect.left(),
            item_y: sample.page.y - scroll.y - rect.top(),
            scroll_x: scroll.x,
            scroll_y: scroll.y,
            container: resolve_container(&*host, element),
            started_at_ms: sample.timestamp_ms,
        };
        self.callbacks.setup(&mut session);

        if let Err(err) = self.lift(host, &session, size, config) {
            // Undo the partial styling.
            if let Err(cleanup) = self.draggable.clear(host) {
                warn!("could not clear partial drag styles on {element}: {cleanup:#}");
            }
            if let Err(cleanup) = host.remove_class(element, &config.dragging_class) {
                warn!("could not unmark {element}: {cleanup:#}");
            }
            return Err(err.context(format!("starting drag on {element}")));
        }
        debug!(
            "drag started on {element} by {:?} at ({}, {}), grip ({}, {}), container {:?}",
            session.pointer_kind, session.page_x, session.page_y, session.item_x, session.item_y, session.container
        );
        self.callbacks.started(&mut session);

        self.listening = session_listeners(session.pointer_kind, session.handle);
        for &(target, kind) in &self.listening {
            host.add_listener(target, kind, self.token);
        }
        self.session = Some(session);
        self.phase = DragPhase::Dragging;
        Ok(())
    }

    /// Pin the size, switch to absolute positioning and place the element.
    fn lift<H>(&mut self, host: &mut H, session: &DragSession, size: BoxSize, config: &DragConfig) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let element = session.element;
        host.set_size(element, SizeProperty::Width, Some(size.width))?;
        host.set_size(element, SizeProperty::Height, Some(size.height))?;
        host.set_keyword(element, KeywordProperty::Position, Some("absolute"))?;
        self.place(host, session)?;
        host.add_class(element, &config.dragging_class)
    }

    fn drag<H>(&mut self, host: &mut H, event: &mut InputEvent, config: &DragConfig) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let scroll = host.scroll_offset();
        let Some(sample) = normalize(event, scroll, config.prevent_touch_default) else {
            return Ok(());
        };
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };
        session.move_to(sample.page, scroll);
        let placed = self.place(host, &session);
        self.callbacks.moved(&mut session);
        self.session = Some(session);
        placed
    }

    fn scroll<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };
        let delta = session.scroll_to(host.scroll_offset());
        trace!("scroll by ({}, {}) while dragging {}", delta.x, delta.y, session.element);
        let placed = self.place(host, &session);
        self.callbacks.moved(&mut session);
        self.session = Some(session);
        placed
    }

    fn end<H>(&mut self, host: &mut H, config: &DragConfig) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        self.phase = DragPhase::Idle;
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };
        let mut stale = core::mem::take(&mut self.listening);
        for kind in [PointerKind::Mouse, PointerKind::Touch] {
            stale.extend(session_listeners(kind, self.draggable.handle));
        }
        for (target, kind) in stale {
            host.remove_listener(target, kind, self.token);
        }

        let cleared = self.draggable.clear(host);
        let unmarked = host.remove_class(self.draggable.element, &config.dragging_class);
        debug!("drag ended on {}", session.element);
        self.callbacks.ended(&mut session);
        cleared.and(unmarked)
    }

    /// Apply `left`/`top` for the session's pointer.
    fn place<H>(&mut self, host: &mut H, session: &DragSession) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let origin = container_origin(&*host, session.container)?;
        let position = session.rendered_position(origin);
        host.set_pixel(session.element, PixelProperty::Left, Some(position.x))?;
        host.set_pixel(session.element, PixelProperty::Top, Some(position.y))?;
        self.draggable.container = session.container;
        self.draggable.position = session.element_origin();
        trace!("{} placed at ({}, {})", session.element, position.x, position.y);
        Ok(())
    }
}
