//! CSS Positioned Layout Module Level 3: containing block of absolutely positioned boxes.
//! Spec: <https://www.w3.org/TR/css-position-3/#def-cb>
//!
//! An element with `position: absolute` resolves its offsets against the
//! padding box of the nearest ancestor that establishes a containing block,
//! or against the page origin when no ancestor does.

#![forbid(unsafe_code)]

use anyhow::Result;
use css::{ComputedStyle, Position, StyleAccess};
use dom::{NodeKey, Point};
use log::{debug, warn};

/// Why an ancestor establishes a containing block for absolute descendants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainingBlockReason {
    /// `position` is anything but `static`.
    Positioned(Position),
    /// Spec: <https://www.w3.org/TR/filter-effects-1/#FilterProperty>
    Filter,
    /// Spec: <https://www.w3.org/TR/css-transforms-2/#perspective-property>
    Perspective,
    /// Spec: <https://www.w3.org/TR/css-transforms-1/#transform-rendering>
    Transform,
    /// Spec: <https://www.w3.org/TR/css-contain-2/#containment-paint>
    ContainPaint,
    /// `will-change` names `perspective` or `transform`.
    WillChange,
}

/// A keyword-valued property counts as set when the host supports it and the
/// computed value is not `none`.
fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.eq_ignore_ascii_case("none"))
}

/// Decide whether an element with `style` establishes a containing block.
///
/// Rules are checked in order: positioning first, then the properties that
/// create a containing block for all descendants.
#[must_use]
pub fn containing_block_reason(style: &ComputedStyle) -> Option<ContainingBlockReason> {
    if style.position.is_positioned() {
        return Some(ContainingBlockReason::Positioned(style.position));
    }
    if is_set(style.filter.as_deref()) {
        return Some(ContainingBlockReason::Filter);
    }
    if is_set(style.perspective.as_deref()) {
        return Some(ContainingBlockReason::Perspective);
    }
    if is_set(style.transform.as_deref()) {
        return Some(ContainingBlockReason::Transform);
    }
    if style
        .contain
        .as_deref()
        .is_some_and(|text| text.eq_ignore_ascii_case("paint"))
    {
        return Some(ContainingBlockReason::ContainPaint);
    }
    if style
        .will_change_idents()
        .iter()
        .any(|ident| ident == "perspective" || ident == "transform")
    {
        return Some(ContainingBlockReason::WillChange);
    }
    None
}

/// Find the ancestor that establishes the containing block of `element`.
///
/// Walks from the parent up to the document element. A computed style that
/// cannot be read is treated as `static` with no containing-block features,
/// and the walk continues. `None` means the page origin.
pub fn resolve_container<T>(tree: &T, element: NodeKey) -> Option<NodeKey>
where
    T: StyleAccess + ?Sized,
{
    let mut cursor = tree.parent_element(element);
    while let Some(ancestor) = cursor {
        match tree.computed_style(ancestor) {
            Ok(style) => {
                if let Some(reason) = containing_block_reason(&style) {
                    debug!("containing block of {element} is {ancestor} ({reason:?})");
                    return Some(ancestor);
                }
            }
            Err(err) => {
                warn!("computed style of {ancestor} unavailable, treating as static: {err:#}");
            }
        }
        cursor = tree.parent_element(ancestor);
    }
    debug!("containing block of {element} is the initial containing block");
    None
}

/// Page-absolute origin that `left`/`top` of an absolute box resolve against.
///
/// # Errors
/// Propagates host lookup failures for the container's padding box.
pub fn container_origin<T>(tree: &T, container: Option<NodeKey>) -> Result<Point>
where
    T: StyleAccess + ?Sized,
{
    container.map_or(Ok(Point::ZERO), |node| {
        Ok(tree.padding_box(node)?.origin())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_with(property: &str, value: &str) -> ComputedStyle {
        let mut style = ComputedStyle::default();
        assert!(style.apply_declaration(property, value));
        style
    }

    #[test]
    fn static_element_without_features_does_not_contain() {
        assert_eq!(containing_block_reason(&ComputedStyle::default()), None);
    }

    #[test]
    fn positioned_ancestors_contain() {
        for keyword in ["relative", "absolute", "fixed", "sticky"] {
            let style = style_with("position", keyword);
            assert!(matches!(
                containing_block_reason(&style),
                Some(ContainingBlockReason::Positioned(_))
            ));
        }
    }

    #[test]
    fn containing_block_features() {
        assert_eq!(
            containing_block_reason(&style_with("transform", "translate(0, 0)")),
            Some(ContainingBlockReason::Transform)
        );
        assert_eq!(
            containing_block_reason(&style_with("filter", "blur(2px)")),
            Some(ContainingBlockReason::Filter)
        );
        assert_eq!(
            containing_block_reason(&style_with("perspective", "100px")),
            Some(ContainingBlockReason::Perspective)
        );
        assert_eq!(
            containing_block_reason(&style_with("contain", "paint")),
            Some(ContainingBlockReason::ContainPaint)
        );
        assert_eq!(
            containing_block_reason(&style_with("will-change", "opacity, transform")),
            Some(ContainingBlockReason::WillChange)
        );
        assert_eq!(
            containing_block_reason(&style_with("will-change", "perspective")),
            Some(ContainingBlockReason::WillChange)
        );
    }

    #[test]
    fn inert_values_do_not_contain() {
        assert_eq!(containing_block_reason(&style_with("transform", "none")), None);
        assert_eq!(containing_block_reason(&style_with("contain", "layout")), None);
        assert_eq!(containing_block_reason(&style_with("will-change", "opacity")), None);
    }

    #[test]
    fn unsupported_properties_count_as_none() {
        let style = ComputedStyle {
            filter: None,
            perspective: None,
            transform: None,
            contain: None,
            will_change: None,
            ..ComputedStyle::default()
        };
        assert_eq!(containing_block_reason(&style), None);
    }
}
