//! Numeric normalization for OCR-read point fields.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::{COORDINATE, DIGIT};
use crate::error::ExtractionError;

/// Parse a coordinate printed with either `.` or `,` as decimal separator.
///
/// A comma is always a decimal point here, never a thousands separator:
/// `"300000,25"` is `300000.25`. Digits of any script are accepted.
pub fn parse_coordinate(s: &str) -> Result<Decimal, ExtractionError> {
    let malformed = || ExtractionError::MalformedNumber {
        field: "coordinate",
        value: s.to_string(),
    };

    let ascii = ascii_digits(s);
    if !COORDINATE.is_match(&ascii) {
        return Err(malformed());
    }

    Decimal::from_str(&ascii.replace(',', ".")).map_err(|_| malformed())
}

/// Parse a point number. Digits of any script are accepted.
pub fn parse_identifier(s: &str) -> Result<u32, ExtractionError> {
    ascii_digits(s)
        .parse::<u32>()
        .map_err(|_| ExtractionError::MalformedNumber {
            field: "nr",
            value: s.to_string(),
        })
}

/// Replace every Unicode decimal digit (`\d`) with its ASCII counterpart.
pub fn ascii_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.chars()
            .map(|c| {
                digit_value(c)
                    .and_then(|d| char::from_digit(d, 10))
                    .unwrap_or(c)
            })
            .collect(),
    )
}

/// Numeric value of a decimal digit of any script.
///
/// Unicode encodes every decimal digit set as ten consecutive code points
/// from zero to nine, so the value is the distance from the start of the
/// contiguous digit run, modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let cp = c as u32;
    let run = (1..=cp)
        .take_while(|&k| char::from_u32(cp - k).is_some_and(is_decimal_digit))
        .count() as u32;
    Some(run % 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(c.encode_utf8(&mut buf))
}
