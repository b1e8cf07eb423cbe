//! CSS Values and Units Module Level 3: the value grammar subset used by inline styles.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

use cssparser::{Parser, ParserInput};

// Per-chapter modules mirroring the chapters of the CSS module.
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_6_dimensions;

pub use chapter_3_identifiers::{Ident, parse_ident, parse_ident_list};
pub use chapter_4_numbers::{Integer, Number, parse_integer, parse_number};
pub use chapter_6_dimensions::{Length, LengthUnit, parse_length};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// The grammar matched but input remained afterwards.
    TrailingInput,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::TrailingInput => formatter.write_str("unexpected trailing input"),
        }
    }
}

impl core::error::Error for ParseError {}

/// Run `parse` over the whole of `text`, rejecting leftover tokens.
///
/// # Errors
/// Propagates the grammar error from `parse`, or `ParseError::TrailingInput`
/// when `parse` succeeds without consuming the entire value.
pub fn parse_entire<T, F>(text: &str, parse: F) -> Result<T, ParseError>
where
    F: for<'i, 't> FnOnce(&mut Parser<'i, 't>) -> Result<T, ParseError>,
{
    let mut input = ParserInput::new(text.trim());
    let mut parser = Parser::new(&mut input);
    let value = parse(&mut parser)?;
    if parser.is_exhausted() {
        Ok(value)
    } else {
        Err(ParseError::TrailingInput)
    }
}
