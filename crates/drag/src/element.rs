//! The element a controller moves and the inline style it clears.

use crate::DragHost;
use anyhow::{Context as _, Result};
use css::SizeProperty;
use dom::{NodeKey, Point};

/// Inline properties the controller writes while dragging.
pub const DRAGGED_PROPERTIES: [&str; 5] = ["position", "top", "left", "width", "height"];

/// Rendered content size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

/// Inline values of [`DRAGGED_PROPERTIES`] as they were before a drag.
///
/// Informational only; release clears the properties rather than writing
/// these back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineSnapshot {
    values: Vec<(&'static str, Option<String>)>,
}

impl InlineSnapshot {
    /// Captured value of `property`; `None` when it was unset or not captured.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == property)
            .and_then(|(_, value)| value.as_deref())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|(_, value)| value.is_none())
    }
}

/// An element that can be dragged, kept across sessions.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableElement {
    pub element: NodeKey,
    /// Element receiving the pointer-down; the element itself unless configured.
    pub handle: NodeKey,
    /// Top-left border corner in page coordinates, as of the last placement.
    pub position: Point,
    pub original_size: Option<BoxSize>,
    pub original_inline: InlineSnapshot,
    /// Containing block resolved for the latest session.
    pub container: Option<NodeKey>,
}

impl DraggableElement {
    #[must_use]
    pub fn new(element: NodeKey, handle: Option<NodeKey>) -> Self {
        Self {
            element,
            handle: handle.unwrap_or(element),
            position: Point::ZERO,
            original_size: None,
            original_inline: InlineSnapshot::default(),
            container: None,
        }
    }

    /// Record the inline style and rendered size before the drag rewrites them.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    pub fn capture<H>(&mut self, host: &H) -> Result<BoxSize>
    where
        H: DragHost + ?Sized,
    {
        let element = self.element;
        let mut values = Vec::with_capacity(DRAGGED_PROPERTIES.len());
        for property in DRAGGED_PROPERTIES {
            let value = host
                .inline_value(element, property)
                .with_context(|| format!("capturing {property} of {element}"))?;
            values.push((property, value));
        }
        self.original_inline = InlineSnapshot { values };
        let size = BoxSize {
            width: host.size(element, SizeProperty::Width)?,
            height: host.size(element, SizeProperty::Height)?,
        };
        self.original_size = Some(size);
        Ok(size)
    }

    /// Clear every property in [`DRAGGED_PROPERTIES`] from the inline style.
    ///
    /// All properties are attempted; the first failure is returned.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    pub fn clear<H>(&self, host: &mut H) -> Result<()>
    where
        H: DragHost + ?Sized,
    {
        let mut outcome = Ok(());
        for property in DRAGGED_PROPERTIES {
            let cleared = host
                .set_inline_value(self.element, property, None)
                .with_context(|| format!("clearing {property} of {}", self.element));
            outcome = outcome.and(cleared);
        }
        outcome
    }
}
