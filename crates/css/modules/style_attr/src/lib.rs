//! CSS Style Attributes: style="..." attribute processing.
//! Spec: <https://www.w3.org/TR/css-style-attr/>
//!
//! Besides parsing, this crate owns `InlineStyle`, the ordered declaration
//! block behind an element's `style` attribute. Writers set or clear single
//! properties (the `element.style.left = "..."` path) and read the block back
//! as attribute text.

#![forbid(unsafe_code)]

/// A single CSS declaration parsed from a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value slice trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// - Splits on semicolons (`;`) into declaration items.
/// - For each item, splits on the first colon (`:`) into property and value.
/// - Trims ASCII whitespace and lowercases the property name.
/// - Skips empty or invalid items (no colon, empty property, or empty value after trimming).
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = raw_value.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: property_text.to_ascii_lowercase(),
            value: value_text.to_owned(),
        });
    }
    out
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// An element's inline declaration block.
///
/// Each property appears at most once; setting an existing property replaces
/// its value in place so serialization order stays stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    /// Build a block from attribute text. Later duplicates win, matching
    /// source-order behavior for repeated declarations.
    #[must_use]
    pub fn parse(attribute: &str) -> Self {
        let mut style = Self::default();
        for decl in parse_style_attribute(attribute) {
            style.set(&decl.property, Some(&decl.value));
        }
        style
    }

    /// Current inline value of `property`, if declared.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// Set or clear `property`. `None` or a blank value removes the declaration.
    pub fn set(&mut self, property: &str, value: Option<&str>) {
        let property = property.trim_matches(is_ascii_whitespace).to_ascii_lowercase();
        let value = value
            .map(|text| text.trim_matches(is_ascii_whitespace))
            .filter(|text| !text.is_empty());
        let existing = self
            .declarations
            .iter()
            .position(|decl| decl.property == property);
        match (existing, value) {
            (Some(index), Some(text)) => {
                if let Some(decl) = self.declarations.get_mut(index) {
                    text.clone_into(&mut decl.value);
                }
            }
            (Some(index), None) => {
                self.declarations.remove(index);
            }
            (None, Some(text)) => self.declarations.push(Declaration {
                property,
                value: text.to_owned(),
            }),
            (None, None) => {}
        }
    }

    /// Declarations in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Serialize back to attribute text (`cssText`).
    #[must_use]
    pub fn to_css_text(&self) -> String {
        let mut out = String::new();
        for decl in &self.declarations {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&decl.property);
            out.push_str(": ");
            out.push_str(&decl.value);
            out.push(';');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_invalid_items() {
        let decls = parse_style_attribute(" LEFT: 10px ; junk ; :x; top:; width : 5px");
        let props: Vec<&str> = decls.iter().map(|decl| decl.property.as_str()).collect();
        assert_eq!(props, ["left", "width"]);
        assert_eq!(decls[1].value, "5px");
    }

    #[test]
    fn later_duplicates_win_in_place() {
        let style = InlineStyle::parse("left: 1px; top: 2px; left: 3px");
        assert_eq!(style.get("left"), Some("3px"));
        assert_eq!(style.to_css_text(), "left: 3px; top: 2px;");
    }

    #[test]
    fn set_and_clear_round_trip() {
        let mut style = InlineStyle::default();
        style.set("position", Some("absolute"));
        style.set("Left", Some("130px"));
        assert_eq!(style.get("left"), Some("130px"));
        style.set("left", Some("  "));
        style.set("position", None);
        assert!(style.is_empty());
        assert_eq!(style.to_css_text(), "");
    }
}
