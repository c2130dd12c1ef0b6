use std::num::ParseIntError;
use thiserror::Error;

use super::FieldRange;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ParseRangeError {
    #[error("Field range must not be empty.")]
    Empty,
    #[error("Indecipherable range: \"{0}\"")]
    Indecipherable(String),
    #[error("Invalid field number \"{number}\" in range \"{token}\": {source}")]
    InvalidNumber {
        token: String,
        number: String,
        source: ParseIntError,
    },
    #[error("Field number too large: \"{0}\"")]
    TooLarge(String),
}

/// Parses a single range token, either `"n"` or `"n-m"`, into a `FieldRange`.
///
/// Bounds are not checked against each other, so `"5-2"` parses into a range with no elements.
pub(crate) fn parse(token: &str) -> Result<FieldRange, ParseRangeError> {
    if token.is_empty() {
        return Result::Err(ParseRangeError::Empty);
    }

    let mut parts = token.split('-');
    let bottom = parts.next().unwrap_or_default();
    let range = match (parts.next(), parts.next()) {
        (Option::None, _) => FieldRange::unit(parse_number(token, bottom)?),
        (Option::Some(top), Option::None) => {
            FieldRange::closed(parse_number(token, bottom)?, parse_number(token, top)?)
        }
        (Option::Some(_), Option::Some(_)) => {
            return Result::Err(ParseRangeError::Indecipherable(token.to_string()))
        }
    };

    range.ok_or_else(|| ParseRangeError::TooLarge(token.to_string()))
}

fn parse_number(token: &str, number: &str) -> Result<usize, ParseRangeError> {
    number
        .parse::<usize>()
        .map_err(|source| ParseRangeError::InvalidNumber {
            token: token.to_string(),
            number: number.to_string(),
            source,
        })
}
