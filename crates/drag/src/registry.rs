//! Controllers of a document, looked up by handle or element.

use crate::DragHost;
use crate::callbacks::DragOptions;
use crate::config::DragConfig;
use crate::controller::{DragController, DragPhase};
use crate::element::DraggableElement;
use crate::session::DragSession;
use anyhow::{Context as _, Result};
use dom::{InputEvent, ListenerToken, NodeKey};
use log::debug;
use tracing::info_span;

/// Identity of a controller returned by `enable_drag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DragHandle(pub u64);

impl DragHandle {
    #[inline]
    #[must_use]
    pub const fn token(self) -> ListenerToken {
        ListenerToken(self.0)
    }
}

/// Owns every controller of one document and routes host events to them.
///
/// Controllers are kept in registration order. Several controllers may manage
/// the same element; each runs its own session.
#[derive(Debug)]
pub struct DragRegistry {
    config: DragConfig,
    controllers: Vec<DragController>,
    next_handle: u64,
}

impl Default for DragRegistry {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl DragRegistry {
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            controllers: Vec::new(),
            next_handle: 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Make `element` draggable and start listening on its handle.
    pub fn enable_drag<H>(&mut self, host: &mut H, element: NodeKey, options: DragOptions) -> DragHandle
    where
        H: DragHost + ?Sized,
    {
        let handle = DragHandle(self.next_handle);
        self.next_handle += 1;
        let draggable = DraggableElement::new(element, options.handle);
        let controller = DragController::new(handle.token(), draggable, options.callbacks);
        controller.enable(host);
        self.controllers.push(controller);
        debug!("registered drag controller {handle:?} for {element}");
        handle
    }

    /// Disable and discard the first controller registered for `element`.
    ///
    /// Does nothing when `element` has no controller. A controller in the
    /// middle of a drag ends its session first.
    ///
    /// # Errors
    /// Propagates host failures while ending an active session; the
    /// controller is discarded regardless.
    pub fn disable_drag<H>(&mut self, host: &mut H, element: NodeKey) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let Some(index) = self
            .controllers
            .iter()
            .position(|controller| controller.element() == element)
        else {
            debug!("disable_drag: no controller for {element}");
            return Ok(());
        };
        let mut controller = self.controllers.remove(index);
        controller
            .disable(host, &self.config)
            .with_context(|| format!("ending the drag of {element}"))
    }

    /// Deliver `event` to the controllers listening along its dispatch path.
    ///
    /// Listeners are collected before any handler runs, so listeners added
    /// by a handler only see later events.
    ///
    /// # Errors
    /// Stops at the first controller that fails to update its element.
    pub fn dispatch<H>(&mut self, host: &mut H, event: &mut InputEvent) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let _span = info_span!("drag.dispatch", kind = event.kind.as_str()).entered();
        let tokens = host.listeners_for(event);
        for token in tokens {
            let Some(controller) = self
                .controllers
                .iter_mut()
                .find(|controller| controller.token() == token)
            else {
                continue;
            };
            controller
                .handle_event(host, event, &self.config)
                .with_context(|| format!("{} handler for {}", event.kind.as_str(), controller.element()))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn controller(&self, handle: DragHandle) -> Option<&DragController> {
        self.controllers
            .iter()
            .find(|controller| controller.token() == handle.token())
    }

    /// Active session of the controller behind `handle`.
    #[must_use]
    pub fn session(&self, handle: DragHandle) -> Option<&DragSession> {
        self.controller(handle).and_then(DragController::session)
    }

    /// Sessions currently in progress.
    ///
    /// A session whose release event never arrives stays here, and keeps its
    /// listeners, until its element is disabled.
    pub fn active_sessions(&self) -> impl Iterator<Item = &DragSession> {
        self.controllers
            .iter()
            .filter(|controller| controller.phase() == DragPhase::Dragging)
            .filter_map(DragController::session)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
