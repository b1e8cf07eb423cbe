//! Headless in-memory document.
//!
//! `Page` is a small stand-in for a browser document: an element tree with
//! class lists, a per-element stylesheet style overlaid by inline
//! declarations, static-flow boxes supplied by the caller, page scroll and an
//! event listener table. It implements the `dom` and `css` host traits so the
//! interaction layer can run without a real browser.

mod layout;
mod listeners;
mod style;

pub use listeners::ListenerTable;

use anyhow::{Result, anyhow};
use css::ComputedStyle;
use css_style_attr::{InlineStyle, parse_style_attribute};
use dom::{DomTree, NodeKey, Point, Rect};
use indextree::{Arena, NodeId};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Per-element state.
#[derive(Debug, Clone)]
struct ElementData {
    key: NodeKey,
    tag: String,
    classes: Vec<String>,
    /// Style coming from stylesheets, before inline declarations.
    sheet: ComputedStyle,
    inline: InlineStyle,
    /// Border box in page coordinates as laid out in normal flow.
    flow_box: Rect,
}

impl ElementData {
    fn new(key: NodeKey, tag: &str) -> Self {
        Self {
            key,
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            sheet: ComputedStyle::default(),
            inline: InlineStyle::default(),
            flow_box: Rect::default(),
        }
    }
}

/// Containing-block related properties a host may lack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostFeature {
    Filter,
    Perspective,
    Transform,
    Contain,
    WillChange,
}

/// An in-memory document.
#[derive(Debug)]
pub struct Page {
    arena: Arena<ElementData>,
    ids: HashMap<NodeKey, NodeId>,
    next_key: u64,
    scroll: Point,
    listeners: ListenerTable,
    unsupported: HashSet<HostFeature>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Create a page holding only the document element (`html`, `NodeKey::ROOT`).
    #[must_use]
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(ElementData::new(NodeKey::ROOT, "html"));
        let mut ids = HashMap::new();
        ids.insert(NodeKey::ROOT, root);
        Self {
            arena,
            ids,
            next_key: 1,
            scroll: Point::ZERO,
            listeners: ListenerTable::default(),
            unsupported: HashSet::new(),
        }
    }

    fn node_id(&self, node: NodeKey) -> Result<NodeId> {
        self.ids
            .get(&node)
            .copied()
            .ok_or_else(|| anyhow!("unknown element {node}"))
    }

    fn data(&self, node: NodeKey) -> Result<&ElementData> {
        let id = self.node_id(node)?;
        self.arena
            .get(id)
            .map(indextree::Node::get)
            .ok_or_else(|| anyhow!("element {node} was removed"))
    }

    fn data_mut(&mut self, node: NodeKey) -> Result<&mut ElementData> {
        let id = self.node_id(node)?;
        self.arena
            .get_mut(id)
            .map(indextree::Node::get_mut)
            .ok_or_else(|| anyhow!("element {node} was removed"))
    }

    /// Append a new element under `parent`.
    ///
    /// # Errors
    /// Returns an error when `parent` is unknown.
    pub fn create_element(&mut self, parent: NodeKey, tag: &str) -> Result<NodeKey> {
        let parent_id = self.node_id(parent)?;
        let key = NodeKey(self.next_key);
        self.next_key += 1;
        let id = self.arena.new_node(ElementData::new(key, tag));
        parent_id
            .checked_append(id, &mut self.arena)
            .map_err(|err| anyhow!("cannot append {key} to {parent}: {err:?}"))?;
        self.ids.insert(key, id);
        debug!("created <{tag}> {key} under {parent}");
        Ok(key)
    }

    /// Remove `node` and its subtree. The document element cannot be removed.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown or is the document element.
    pub fn remove_element(&mut self, node: NodeKey) -> Result<()> {
        if node == NodeKey::ROOT {
            return Err(anyhow!("the document element cannot be removed"));
        }
        let id = self.node_id(node)?;
        let removed: Vec<NodeKey> = id
            .descendants(&self.arena)
            .filter_map(|descendant| self.arena.get(descendant).map(|entry| entry.get().key))
            .collect();
        id.remove_subtree(&mut self.arena);
        for key in &removed {
            self.ids.remove(key);
        }
        debug!("removed {node} ({} elements)", removed.len());
        Ok(())
    }

    /// Whether `node` is part of the document.
    #[must_use]
    pub fn contains(&self, node: NodeKey) -> bool {
        self.ids.contains_key(&node)
    }

    /// Tag name of `node`, lowercased.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn tag_name(&self, node: NodeKey) -> Result<&str> {
        Ok(self.data(node)?.tag.as_str())
    }

    /// Child elements of `node` in document order.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn children(&self, node: NodeKey) -> Result<Vec<NodeKey>> {
        let id = self.node_id(node)?;
        Ok(id
            .children(&self.arena)
            .filter_map(|child| self.arena.get(child).map(|entry| entry.get().key))
            .collect())
    }

    /// Replace the stylesheet style of `node`.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn set_sheet_style(&mut self, node: NodeKey, style: ComputedStyle) -> Result<()> {
        self.data_mut(node)?.sheet = style;
        Ok(())
    }

    /// Mutable stylesheet style of `node`.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn sheet_style_mut(&mut self, node: NodeKey) -> Result<&mut ComputedStyle> {
        Ok(&mut self.data_mut(node)?.sheet)
    }

    /// Apply `property: value; ...` declarations to the stylesheet style of `node`.
    ///
    /// Returns how many declarations were understood.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn apply_sheet_declarations(&mut self, node: NodeKey, declarations: &str) -> Result<usize> {
        let sheet = &mut self.data_mut(node)?.sheet;
        let applied = parse_style_attribute(declarations)
            .iter()
            .filter(|decl| sheet.apply_declaration(&decl.property, &decl.value))
            .count();
        Ok(applied)
    }

    /// Set the normal-flow border box of `node` in page coordinates.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn set_flow_box(&mut self, node: NodeKey, rect: Rect) -> Result<()> {
        self.data_mut(node)?.flow_box = rect;
        Ok(())
    }

    /// Replace the `style` attribute of `node`.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn set_style_attribute(&mut self, node: NodeKey, text: &str) -> Result<()> {
        self.data_mut(node)?.inline = InlineStyle::parse(text);
        Ok(())
    }

    /// Serialized `style` attribute of `node`.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn style_attribute(&self, node: NodeKey) -> Result<String> {
        Ok(self.data(node)?.inline.to_css_text())
    }

    /// Class tokens of `node` in insertion order.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown.
    pub fn class_list(&self, node: NodeKey) -> Result<&[String]> {
        Ok(&self.data(node)?.classes)
    }

    /// Scroll the page to an absolute offset. Does not raise a scroll event.
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll = Point::new(x, y);
        trace!("scrolled to ({x}, {y})");
    }

    /// Scroll the page by a delta. Does not raise a scroll event.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll_to(self.scroll.x + dx, self.scroll.y + dy);
    }

    /// Simulate a host that does not implement `feature`.
    pub fn set_unsupported(&mut self, feature: HostFeature) {
        self.unsupported.insert(feature);
    }

    /// Registered listeners.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }
}

impl DomTree for Page {
    fn parent_element(&self, node: NodeKey) -> Option<NodeKey> {
        let id = self.ids.get(&node)?;
        let parent = self.arena.get(*id)?.parent()?;
        self.arena.get(parent).map(|entry| entry.get().key)
    }

    fn bounding_client_rect(&self, node: NodeKey) -> Result<Rect> {
        let page_box = self.page_border_box(node)?;
        Ok(page_box.translate(Point::new(-self.scroll.x, -self.scroll.y)))
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn add_class(&mut self, node: NodeKey, class: &str) -> Result<()> {
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(anyhow!("invalid class token {class:?}"));
        }
        let classes = &mut self.data_mut(node)?.classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeKey, class: &str) -> Result<()> {
        self.data_mut(node)?
            .classes
            .retain(|existing| existing != class);
        Ok(())
    }

    fn has_class(&self, node: NodeKey, class: &str) -> bool {
        self.data(node)
            .is_ok_and(|data| data.classes.iter().any(|existing| existing == class))
    }
}
