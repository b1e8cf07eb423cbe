//! Box placement for `getBoundingClientRect`.
//!
//! Normal-flow boxes come from the caller (`set_flow_box`); this module only
//! applies what positioning changes on top of them:
//! - `relative` shifts the flow box by `left`/`top`;
//! - `absolute` puts the margin edge at the containing block's padding box
//!   plus `left`/`top`, keeping the static position for `auto` offsets;
//! - `fixed` does the same against the viewport.

use crate::Page;
use anyhow::Result;
use css::{BoxSizing, ComputedStyle, Position, StyleAccess};
use css_position::{container_origin, resolve_container};
use dom::{DomTree, NodeKey, Point, Rect};

/// Border-box length for a computed `width`/`height`.
fn border_box_length(specified: Option<f64>, flow: f64, borders: f64, sizing: BoxSizing) -> f64 {
    match (specified, sizing) {
        (Some(length), BoxSizing::ContentBox) => length + borders,
        (Some(length), BoxSizing::BorderBox) => length,
        (None, _) => flow,
    }
}

/// Offset the margin edge from `origin` when an inset is given, else keep the static position.
fn inset(origin: f64, offset: Option<f64>, margin: f64, static_position: f64) -> f64 {
    offset.map_or(static_position, |value| origin + value + margin)
}

fn place_against(style: &ComputedStyle, flow: Rect, origin: Point) -> Point {
    Point::new(
        inset(origin.x, style.left, style.margin.left, flow.x),
        inset(origin.y, style.top, style.margin.top, flow.y),
    )
}

impl Page {
    /// Border box of `node` in page coordinates.
    pub(crate) fn page_border_box(&self, node: NodeKey) -> Result<Rect> {
        let style = self.computed_style(node)?;
        let flow = self.data(node)?.flow_box;
        let width = border_box_length(
            style.width,
            flow.width,
            style.border_width.horizontal(),
            style.box_sizing,
        );
        let height = border_box_length(
            style.height,
            flow.height,
            style.border_width.vertical(),
            style.box_sizing,
        );
        let origin = match style.position {
            Position::Static | Position::Sticky => flow.origin(),
            Position::Relative => Point::new(
                flow.x + style.left.unwrap_or(0.0),
                flow.y + style.top.unwrap_or(0.0),
            ),
            Position::Absolute => {
                let container = resolve_container(self, node);
                place_against(&style, flow, container_origin(self, container)?)
            }
            Position::Fixed => place_against(&style, flow, self.scroll_offset()),
        };
        Ok(Rect::new(origin.x, origin.y, width, height))
    }
}
