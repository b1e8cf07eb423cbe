//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::Parser;
use cssparser::Token;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

/// A CSS <integer>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integer(pub i32);

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.next().map_or(Err(ParseError::UnexpectedToken), |token| {
        if let Token::Number { value, .. } = *token {
            Ok(Number(value))
        } else {
            Err(ParseError::UnexpectedToken)
        }
    })
}

/// Parse a CSS <integer> (§4.1), as used by `z-index`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an integer-valued `<number>`.
pub fn parse_integer(input: &mut Parser) -> Result<Integer, ParseError> {
    input.next().map_or(Err(ParseError::UnexpectedToken), |token| {
        if let Token::Number {
            int_value: Some(value),
            ..
        } = *token
        {
            Ok(Integer(value))
        } else {
            Err(ParseError::UnexpectedToken)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_entire;

    #[test]
    fn integers_reject_fractions() {
        assert_eq!(parse_entire("-3", parse_integer), Ok(Integer(-3)));
        assert_eq!(
            parse_entire("2.5", parse_integer),
            Err(ParseError::UnexpectedToken)
        );
        assert_eq!(parse_entire("2.5", parse_number), Ok(Number(2.5)));
    }
}
