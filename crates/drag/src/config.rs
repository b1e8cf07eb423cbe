//! Drag controller settings.
//!
//! Settings can be loaded from environment variables or constructed
//! programmatically.

use std::env;

/// Class added to an element for the duration of a drag.
pub const DEFAULT_DRAGGING_CLASS: &str = "being-dragged";

/// Runtime configuration shared by every controller of a registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragConfig {
    /// Class marking the element that is being dragged
    pub dragging_class: String,
    /// Whether `touchstart`/`touchmove` have their default action suppressed,
    /// which stops the synthesized mouse events and page panning
    pub prevent_touch_default: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DRAGGING_CLASS, true)
    }
}

impl DragConfig {
    /// Construct a new `DragConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `dragging_class` - Class added while dragging; blank falls back to `being-dragged`
    /// * `prevent_touch_default` - Whether touch events have their default action suppressed
    #[inline]
    #[must_use]
    pub fn new(dragging_class: &str, prevent_touch_default: bool) -> Self {
        let class = dragging_class.trim();
        let dragging_class = if class.is_empty() {
            DEFAULT_DRAGGING_CLASS
        } else {
            class
        };
        Self {
            dragging_class: dragging_class.to_owned(),
            prevent_touch_default,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `DRAG_DRAGGING_CLASS`: Class added while dragging (default: `being-dragged`)
    /// - `DRAG_PREVENT_TOUCH_DEFAULT`: Set to "0" to keep default touch actions (default: suppressed)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let dragging_class = env::var("DRAG_DRAGGING_CLASS").unwrap_or_default();
        let prevent_touch_default =
            env::var("DRAG_PREVENT_TOUCH_DEFAULT").ok().as_deref() != Some("0");
        Self::new(&dragging_class, prevent_touch_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_class_falls_back_to_default() {
        assert_eq!(DragConfig::new("  ", true), DragConfig::default());
        assert_eq!(DragConfig::new(" lifted ", false).dragging_class, "lifted");
    }
}
