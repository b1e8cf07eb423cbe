//! Unit-aware style accessor over a host's inline-style API.
//!
//! Properties are grouped by how their values are read and written:
//! - pixel properties read the computed value and write `<n>px` inline;
//! - size properties read the rendered box (minus borders for `content-box`);
//! - keyword properties read/write identifiers;
//! - numeric properties read/write the inline value as an integer.

use crate::style_types::{BoxSizing, ComputedStyle, Position};
use anyhow::Result;
use dom::{DomTree, NodeKey, Point};

/// Properties whose values are lengths in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelProperty {
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    Top,
    Left,
}

impl PixelProperty {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::BorderTopWidth => "border-top-width",
            Self::BorderRightWidth => "border-right-width",
            Self::BorderBottomWidth => "border-bottom-width",
            Self::BorderLeftWidth => "border-left-width",
            Self::Top => "top",
            Self::Left => "left",
        }
    }

    /// Read this property from a computed style. `None` means `auto`.
    #[must_use]
    pub const fn read(self, style: &ComputedStyle) -> Option<f64> {
        match self {
            Self::MarginTop => Some(style.margin.top),
            Self::MarginRight => Some(style.margin.right),
            Self::MarginBottom => Some(style.margin.bottom),
            Self::MarginLeft => Some(style.margin.left),
            Self::BorderTopWidth => Some(style.border_width.top),
            Self::BorderRightWidth => Some(style.border_width.right),
            Self::BorderBottomWidth => Some(style.border_width.bottom),
            Self::BorderLeftWidth => Some(style.border_width.left),
            Self::Top => style.top,
            Self::Left => style.left,
        }
    }
}

/// Box dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeProperty {
    Width,
    Height,
}

impl SizeProperty {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Properties specified by keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordProperty {
    Position,
}

impl KeywordProperty {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Position => "position",
        }
    }
}

/// Properties specified by plain numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericProperty {
    ZIndex,
}

impl NumericProperty {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::ZIndex => "z-index",
        }
    }
}

/// The rectangle bounded by the padding edge, in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PaddingBox {
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Serialize a pixel value for an inline declaration.
///
/// Non-finite values yield `None`, which clears the declaration.
#[must_use]
pub fn format_px(value: f64) -> Option<String> {
    value.is_finite().then(|| format!("{value}px"))
}

/// Typed access to an element's style.
///
/// Implementors provide the untyped primitives (computed style, inline
/// get/set); the typed getters and setters are derived from them.
pub trait StyleAccess: DomTree {
    /// Computed style of `node`, inline declarations included.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown to the host.
    fn computed_style(&self, node: NodeKey) -> Result<ComputedStyle>;

    /// Inline (`style` attribute) value of `property`.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown to the host.
    fn inline_value(&self, node: NodeKey, property: &str) -> Result<Option<String>>;

    /// Set (`Some`) or remove (`None`) an inline declaration.
    ///
    /// # Errors
    /// Returns an error when `node` is unknown to the host.
    fn set_inline_value(&mut self, node: NodeKey, property: &str, value: Option<&str>)
    -> Result<()>;

    /// Computed pixel value; `None` when the computed value is `auto`.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn pixel(&self, node: NodeKey, property: PixelProperty) -> Result<Option<f64>> {
        Ok(property.read(&self.computed_style(node)?))
    }

    /// Write `<value>px` inline, or clear the declaration for `None`.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn set_pixel(&mut self, node: NodeKey, property: PixelProperty, value: Option<f64>) -> Result<()> {
        let text = value.and_then(format_px);
        self.set_inline_value(node, property.css_name(), text.as_deref())
    }

    /// Rendered size, excluding border widths when `box-sizing` is `content-box`.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn size(&self, node: NodeKey, property: SizeProperty) -> Result<f64> {
        let rect = self.bounding_client_rect(node)?;
        let style = self.computed_style(node)?;
        let (value, borders) = match property {
            SizeProperty::Width => (rect.width, style.border_width.horizontal()),
            SizeProperty::Height => (rect.height, style.border_width.vertical()),
        };
        Ok(match style.box_sizing {
            BoxSizing::ContentBox => value - borders,
            BoxSizing::BorderBox => value,
        })
    }

    /// Write `<value>px` inline for a size property, or clear it.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn set_size(&mut self, node: NodeKey, property: SizeProperty, value: Option<f64>) -> Result<()> {
        let text = value.and_then(format_px);
        self.set_inline_value(node, property.css_name(), text.as_deref())
    }

    /// Computed keyword value.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn keyword(&self, node: NodeKey, property: KeywordProperty) -> Result<String> {
        let style = self.computed_style(node)?;
        Ok(match property {
            KeywordProperty::Position => style.position.as_css_str().to_owned(),
        })
    }

    /// Write a keyword inline, or clear it.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn set_keyword(&mut self, node: NodeKey, property: KeywordProperty, value: Option<&str>) -> Result<()> {
        self.set_inline_value(node, property.css_name(), value)
    }

    /// Computed `position`.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn position(&self, node: NodeKey) -> Result<Position> {
        Ok(self.computed_style(node)?.position)
    }

    /// Inline numeric value; `None` when unset or not an integer.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn numeric(&self, node: NodeKey, property: NumericProperty) -> Result<Option<i32>> {
        let raw = self.inline_value(node, property.css_name())?;
        Ok(raw.and_then(|text| text.trim().parse::<i32>().ok()))
    }

    /// Write a numeric value inline, or clear it.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn set_numeric(&mut self, node: NodeKey, property: NumericProperty, value: Option<i32>) -> Result<()> {
        let text = value.map(|number| number.to_string());
        self.set_inline_value(node, property.css_name(), text.as_deref())
    }

    /// Padding box of `node` in page coordinates.
    ///
    /// The bounding rect is viewport-relative, so the scroll offset is added
    /// back; the result does not change when the page scrolls.
    ///
    /// # Errors
    /// Propagates host lookup failures.
    fn padding_box(&self, node: NodeKey) -> Result<PaddingBox> {
        let rect = self.bounding_client_rect(node)?;
        let borders = self.computed_style(node)?.border_width;
        let scroll = self.scroll_offset();
        Ok(PaddingBox {
            left: rect.left() + borders.left + scroll.x,
            top: rect.top() + borders.top + scroll.y,
            right: rect.right() - borders.right + scroll.x,
            bottom: rect.bottom() - borders.bottom + scroll.y,
        })
    }
}
