//! Keyword-level computed style.

use css_values_units::{Length, parse_entire, parse_ident, parse_ident_list, parse_integer, parse_length};
use log::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Parse a `position` keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            "fixed" => Some(Self::Fixed),
            "sticky" => Some(Self::Sticky),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }

    /// Anything but `static`.
    #[inline]
    #[must_use]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

impl BoxSizing {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "content-box" => Some(Self::ContentBox),
            "border-box" => Some(Self::BorderBox),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[inline]
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Computed values for the properties the positioning and drag code reads.
///
/// The containing-block keywords (`filter`, `perspective`, `transform`,
/// `contain`, `will_change`) keep their serialized computed value. `None`
/// means the host does not support the property at all, which callers treat
/// the same as `none`.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub position: Position,
    pub box_sizing: BoxSizing,
    pub border_width: Edges,
    pub margin: Edges,
    // Positional offsets (px; None means auto)
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    // Dimensions (px; None means auto)
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// None represents `auto`.
    pub z_index: Option<i32>,
    pub filter: Option<String>,
    pub perspective: Option<String>,
    pub transform: Option<String>,
    pub contain: Option<String>,
    pub will_change: Option<String>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            position: Position::Static,
            box_sizing: BoxSizing::ContentBox,
            border_width: Edges::default(),
            margin: Edges::default(),
            top: None,
            left: None,
            right: None,
            bottom: None,
            width: None,
            height: None,
            z_index: None,
            filter: Some("none".to_owned()),
            perspective: Some("none".to_owned()),
            transform: Some("none".to_owned()),
            contain: Some("none".to_owned()),
            will_change: Some("auto".to_owned()),
        }
    }
}

impl ComputedStyle {
    /// Overlay a single declaration onto this style.
    ///
    /// Returns `false` when the property is not modeled or the value does not
    /// parse; the style is left untouched in that case.
    pub fn apply_declaration(&mut self, property: &str, value: &str) -> bool {
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        let applied = match property.as_str() {
            "position" => assign(
                &mut self.position,
                keyword(value).as_deref().and_then(Position::from_keyword),
            ),
            "box-sizing" => assign(
                &mut self.box_sizing,
                keyword(value).as_deref().and_then(BoxSizing::from_keyword),
            ),
            "top" => set_auto_px(&mut self.top, value),
            "left" => set_auto_px(&mut self.left, value),
            "right" => set_auto_px(&mut self.right, value),
            "bottom" => set_auto_px(&mut self.bottom, value),
            "width" => set_auto_px(&mut self.width, value),
            "height" => set_auto_px(&mut self.height, value),
            "margin-top" => set_px(&mut self.margin.top, value),
            "margin-right" => set_px(&mut self.margin.right, value),
            "margin-bottom" => set_px(&mut self.margin.bottom, value),
            "margin-left" => set_px(&mut self.margin.left, value),
            "border-top-width" => set_px(&mut self.border_width.top, value),
            "border-right-width" => set_px(&mut self.border_width.right, value),
            "border-bottom-width" => set_px(&mut self.border_width.bottom, value),
            "border-left-width" => set_px(&mut self.border_width.left, value),
            "z-index" => {
                if value.eq_ignore_ascii_case("auto") {
                    self.z_index = None;
                    true
                } else {
                    let parsed = parse_entire(value, parse_integer).ok();
                    assign(&mut self.z_index, parsed.map(|integer| Some(integer.0)))
                }
            }
            "filter" => set_raw(&mut self.filter, value),
            "perspective" => set_raw(&mut self.perspective, value),
            "transform" => set_raw(&mut self.transform, value),
            "contain" => set_raw(&mut self.contain, value),
            "will-change" => {
                if parse_entire(value, parse_ident_list).is_ok() {
                    self.will_change = Some(value.to_ascii_lowercase());
                    true
                } else {
                    false
                }
            }
            _ => false,
        };
        if !applied {
            debug!("ignored declaration {property}: {value}");
        }
        applied
    }

    /// Identifiers listed by `will-change` as written (`auto` included);
    /// empty when the host does not support the property.
    #[must_use]
    pub fn will_change_idents(&self) -> Vec<String> {
        self.will_change
            .as_deref()
            .and_then(|text| parse_entire(text, parse_ident_list).ok())
            .map(|idents| idents.into_iter().map(|ident| ident.0).collect())
            .unwrap_or_default()
    }
}

fn keyword(value: &str) -> Option<String> {
    parse_entire(value, parse_ident).ok().map(|ident| ident.0)
}

fn assign<T>(slot: &mut T, parsed: Option<T>) -> bool {
    match parsed {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn set_px(slot: &mut f64, value: &str) -> bool {
    let parsed = parse_entire(value, parse_length).ok();
    assign(slot, parsed.map(Length::to_px))
}

fn set_auto_px(slot: &mut Option<f64>, value: &str) -> bool {
    if value.eq_ignore_ascii_case("auto") {
        *slot = None;
        return true;
    }
    let parsed = parse_entire(value, parse_length).ok();
    assign(slot, parsed.map(|length| Some(length.to_px())))
}

fn set_raw(slot: &mut Option<String>, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    *slot = Some(value.to_ascii_lowercase());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_overlay_typed_fields() {
        let mut style = ComputedStyle::default();
        assert!(style.apply_declaration("Position", "ABSOLUTE"));
        assert!(style.apply_declaration("left", "130px"));
        assert!(style.apply_declaration("top", "auto"));
        assert!(style.apply_declaration("border-left-width", "3px"));
        assert!(style.apply_declaration("z-index", "-2"));
        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.left, Some(130.0));
        assert_eq!(style.top, None);
        assert_eq!(style.border_width.left, 3.0);
        assert_eq!(style.z_index, Some(-2));
    }

    #[test]
    fn invalid_values_leave_style_untouched() {
        let mut style = ComputedStyle::default();
        assert!(!style.apply_declaration("position", "floating"));
        assert!(!style.apply_declaration("left", "12em"));
        assert!(!style.apply_declaration("will-change", "transform,"));
        assert!(!style.apply_declaration("color", "red"));
        assert_eq!(style, ComputedStyle::default());
    }

    #[test]
    fn will_change_lists_identifiers() {
        let mut style = ComputedStyle::default();
        assert!(style.will_change_idents().contains(&"auto".to_owned()));
        assert!(style.apply_declaration("will-change", "opacity, Transform"));
        assert_eq!(style.will_change_idents(), ["opacity", "transform"]);
        style.will_change = None;
        assert!(style.will_change_idents().is_empty());
    }
}
