//! CSS Identifiers (used widely across CSS values)
//! Spec: <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS identifier value, lowercased for canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    input.next().map_or(Err(ParseError::UnexpectedToken), |token| {
        if let Token::Ident(text) = token {
            Ok(Ident(text.as_ref().to_ascii_lowercase()))
        } else {
            Err(ParseError::UnexpectedToken)
        }
    })
}

/// Parse a comma-separated list of identifiers, as used by `will-change`.
///
/// Spec: <https://www.w3.org/TR/css-will-change-1/#will-change>
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when any list item is not an identifier.
pub fn parse_ident_list(input: &mut Parser) -> Result<Vec<Ident>, ParseError> {
    input
        .parse_comma_separated(|item| {
            parse_ident(item).map_err(|_err| item.new_custom_error::<(), ()>(()))
        })
        .map_err(|_err| ParseError::UnexpectedToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_entire;

    #[test]
    fn identifiers_are_lowercased() {
        assert_eq!(
            parse_entire("Transform", parse_ident),
            Ok(Ident("transform".to_owned()))
        );
        assert_eq!(
            parse_entire("10px", parse_ident),
            Err(ParseError::UnexpectedToken)
        );
    }

    #[test]
    fn will_change_lists() {
        let list = parse_entire("scroll-position, TRANSFORM ,opacity", parse_ident_list)
            .unwrap_or_default();
        let names: Vec<&str> = list.iter().map(Ident::as_str).collect();
        assert_eq!(names, ["scroll-position", "transform", "opacity"]);
        assert_eq!(
            parse_entire("transform,", parse_ident_list),
            Err(ParseError::UnexpectedToken)
        );
    }
}
