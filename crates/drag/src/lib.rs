//! Pointer dragging for mouse and touch input.
//!
//! [`DragRegistry::enable_drag`] attaches a [`DragController`] to an element.
//! From then on the host forwards input events through
//! [`DragRegistry::dispatch`]; a pointer-down on the handle starts a
//! [`DragSession`] that keeps the element under the pointer, relative to its
//! containing block, through pointer moves and page scrolls until release.

pub mod callbacks;
pub mod config;
pub mod controller;
pub mod element;
pub mod input;
pub mod registry;
pub mod session;

pub use callbacks::{DragCallback, DragCallbacks, DragOptions};
pub use config::DragConfig;
pub use controller::{DragController, DragPhase};
pub use element::{BoxSize, DraggableElement, InlineSnapshot};
pub use input::{PointerKind, PointerSample, normalize};
pub use registry::{DragHandle, DragRegistry};
pub use session::DragSession;

use css::StyleAccess;
use dom::EventHost;

/// Everything a document must provide to host drag controllers.
pub trait DragHost: StyleAccess + EventHost {}

impl<T> DragHost for T where T: StyleAccess + EventHost + ?Sized {}
