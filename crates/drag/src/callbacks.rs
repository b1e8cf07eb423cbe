//! Options accepted by `enable_drag`.

use crate::session::DragSession;
use core::fmt;
use dom::NodeKey;

/// Hook invoked synchronously with the live session.
pub type DragCallback = Box<dyn FnMut(&mut DragSession)>;

/// Optional hooks run at fixed points of a drag.
#[derive(Default)]
pub struct DragCallbacks {
    /// After the session is captured, before the element is positioned.
    pub on_setup: Option<DragCallback>,
    /// After the element is first positioned and marked.
    pub on_started: Option<DragCallback>,
    /// After each pointer move or scroll has been applied.
    pub on_move: Option<DragCallback>,
    /// After the dragged inline styles are cleared and the element unmarked.
    pub on_end: Option<DragCallback>,
}

fn run(callback: &mut Option<DragCallback>, session: &mut DragSession) {
    if let Some(callback) = callback.as_mut() {
        callback(session);
    }
}

impl DragCallbacks {
    pub(crate) fn setup(&mut self, session: &mut DragSession) {
        run(&mut self.on_setup, session);
    }

    pub(crate) fn started(&mut self, session: &mut DragSession) {
        run(&mut self.on_started, session);
    }

    pub(crate) fn moved(&mut self, session: &mut DragSession) {
        run(&mut self.on_move, session);
    }

    pub(crate) fn ended(&mut self, session: &mut DragSession) {
        run(&mut self.on_end, session);
    }
}

impl fmt::Debug for DragCallbacks {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DragCallbacks")
            .field("on_setup", &self.on_setup.is_some())
            .field("on_started", &self.on_started.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// Builder for the options of `enable_drag`.
#[derive(Debug, Default)]
pub struct DragOptions {
    pub handle: Option<NodeKey>,
    pub callbacks: DragCallbacks,
}

impl DragOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start drags from `handle` instead of the dragged element.
    #[must_use]
    pub fn handle(mut self, handle: NodeKey) -> Self {
        self.handle = Some(handle);
        self
    }

    #[must_use]
    pub fn on_setup(mut self, callback: impl FnMut(&mut DragSession) + 'static) -> Self {
        self.callbacks.on_setup = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_started(mut self, callback: impl FnMut(&mut DragSession) + 'static) -> Self {
        self.callbacks.on_started = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_move(mut self, callback: impl FnMut(&mut DragSession) + 'static) -> Self {
        self.callbacks.on_move = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_end(mut self, callback: impl FnMut(&mut DragSession) + 'static) -> Self {
        self.callbacks.on_end = Some(Box::new(callback));
        self
    }
}
