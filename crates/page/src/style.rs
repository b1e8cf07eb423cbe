//! Computed style and inline style access.

use crate::{HostFeature, Page};
use anyhow::Result;
use css::{ComputedStyle, StyleAccess};
use dom::NodeKey;
use log::trace;

impl Page {
    /// Stylesheet style overlaid with inline declarations, with unsupported
    /// host features blanked out.
    fn cascade(&self, node: NodeKey) -> Result<ComputedStyle> {
        let data = self.data(node)?;
        let mut style = data.sheet.clone();
        for decl in data.inline.iter() {
            style.apply_declaration(&decl.property, &decl.value);
        }
        for feature in &self.unsupported {
            match feature {
                HostFeature::Filter => style.filter = None,
                HostFeature::Perspective => style.perspective = None,
                HostFeature::Transform => style.transform = None,
                HostFeature::Contain => style.contain = None,
                HostFeature::WillChange => style.will_change = None,
            }
        }
        Ok(style)
    }
}

impl StyleAccess for Page {
    fn computed_style(&self, node: NodeKey) -> Result<ComputedStyle> {
        self.cascade(node)
    }

    fn inline_value(&self, node: NodeKey, property: &str) -> Result<Option<String>> {
        Ok(self.data(node)?.inline.get(property).map(str::to_owned))
    }

    fn set_inline_value(
        &mut self,
        node: NodeKey,
        property: &str,
        value: Option<&str>,
    ) -> Result<()> {
        trace!("{node}.style.{property} = {value:?}");
        self.data_mut(node)?.inline.set(property, value);
        Ok(())
    }
}
