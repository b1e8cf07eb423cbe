use anyhow::{Result, anyhow};
use css::{ComputedStyle, Position, StyleAccess};
use css_position::resolve_container;
use dom::{DomTree, NodeKey, Point, Rect};
use std::collections::HashMap;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parent links plus computed styles; nodes without a style fail to read.
#[derive(Default)]
struct Ancestry {
    parents: HashMap<NodeKey, NodeKey>,
    styles: HashMap<NodeKey, ComputedStyle>,
}

impl Ancestry {
    /// root > 1 > 2 > 3 > 4, every node static.
    fn chain() -> Self {
        let mut tree = Self::default();
        let mut parent = NodeKey::ROOT;
        tree.styles.insert(parent, ComputedStyle::default());
        for id in 1..=4 {
            let node = NodeKey(id);
            tree.parents.insert(node, parent);
            tree.styles.insert(node, ComputedStyle::default());
            parent = node;
        }
        tree
    }

    fn style_mut(&mut self, node: NodeKey) -> &mut ComputedStyle {
        self.styles.entry(node).or_default()
    }
}

impl DomTree for Ancestry {
    fn parent_element(&self, node: NodeKey) -> Option<NodeKey> {
        self.parents.get(&node).copied()
    }

    fn bounding_client_rect(&self, node: NodeKey) -> Result<Rect> {
        Err(anyhow!("no layout for {node}"))
    }

    fn scroll_offset(&self) -> Point {
        Point::ZERO
    }

    fn add_class(&mut self, _node: NodeKey, _class: &str) -> Result<()> {
        Ok(())
    }

    fn remove_class(&mut self, _node: NodeKey, _class: &str) -> Result<()> {
        Ok(())
    }

    fn has_class(&self, _node: NodeKey, _class: &str) -> bool {
        false
    }
}

impl StyleAccess for Ancestry {
    fn computed_style(&self, node: NodeKey) -> Result<ComputedStyle> {
        self.styles
            .get(&node)
            .cloned()
            .ok_or_else(|| anyhow!("style of {node} detached"))
    }

    fn inline_value(&self, _node: NodeKey, _property: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_inline_value(&mut self, _node: NodeKey, _property: &str, _value: Option<&str>) -> Result<()> {
        Ok(())
    }
}

#[test]
fn static_parent_defers_to_grandparent() {
    init_logger();
    let mut tree = Ancestry::chain();
    tree.style_mut(NodeKey(2)).position = Position::Relative;
    assert_eq!(resolve_container(&tree, NodeKey(4)), Some(NodeKey(2)));
}

#[test]
fn nearest_match_wins() {
    init_logger();
    let mut tree = Ancestry::chain();
    tree.style_mut(NodeKey(1)).position = Position::Relative;
    tree.style_mut(NodeKey(2)).transform = Some("scale(2)".to_owned());
    assert_eq!(resolve_container(&tree, NodeKey(4)), Some(NodeKey(2)));

    tree.style_mut(NodeKey(3)).position = Position::Absolute;
    assert_eq!(resolve_container(&tree, NodeKey(4)), Some(NodeKey(3)));
}

#[test]
fn element_own_style_is_not_considered() {
    init_logger();
    let mut tree = Ancestry::chain();
    tree.style_mut(NodeKey(4)).position = Position::Relative;
    assert_eq!(resolve_container(&tree, NodeKey(4)), None);
}

#[test]
fn unreadable_ancestor_counts_as_static() {
    init_logger();
    let mut tree = Ancestry::chain();
    tree.style_mut(NodeKey(1)).filter = Some("blur(1px)".to_owned());
    tree.styles.remove(&NodeKey(3));
    assert_eq!(resolve_container(&tree, NodeKey(4)), Some(NodeKey(1)));

    tree.styles.remove(&NodeKey(1));
    assert_eq!(resolve_container(&tree, NodeKey(4)), None);
}
