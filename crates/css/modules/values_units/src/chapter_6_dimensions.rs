//! CSS Values & Units Level 3: §6 Dimensions (Lengths subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//!
//! Inline offsets and sizes are always written back in pixels, so only
//! absolute `px` lengths and unitless zero are accepted.

use crate::ParseError;
use cssparser::{Parser, Token};

/// Supported subset of CSS <length> units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
}

/// A CSS <length> value with unit.
///
/// The value keeps double precision so page coordinates written inline read
/// back unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    /// Pixel value of this length.
    #[inline]
    #[must_use]
    pub fn to_px(self) -> f64 {
        match self.unit {
            LengthUnit::Pixels => self.value,
        }
    }
}

/// Parse a CSS <length> (§6.2). Supports px and unitless zero.
///
/// The tokenizer rounds numbers to `f32`, so the value is re-read from the
/// source slice; the token's value is the fallback when the slice is not
/// plain `<number>px` (escapes, comments).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    let start = input.position();
    let token = input.next().map_err(|_err| ParseError::UnexpectedToken)?;
    let rounded = match *token {
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => f64::from(value),
        Token::Number { value, .. } if value == 0.0 => {
            return Ok(Length {
                value: 0.0,
                unit: LengthUnit::Pixels,
            });
        }
        _ => return Err(ParseError::UnexpectedToken),
    };
    let source = input.slice_from(start).trim_start();
    let value = source
        .get(..source.len().saturating_sub(2))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(rounded);
    Ok(Length {
        value,
        unit: LengthUnit::Pixels,
    })
}
