//! Regex patterns for point rows in OCR text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Point row: Nr, optional marker noise, X, Y.
    //
    // Nr must not continue a longer number, so it is preceded by a line start
    // or a non-digit. OCR turns point markers into `*`, `**`, `***` or `»`
    // between Nr and X; only those tokens are skipped. The regex crate has no
    // lookahead, so "Y is not followed by a digit" is checked by the scanner.
    pub static ref POINT_ROW: Regex = Regex::new(
        r"(?m)(?:^|\D)(\d{1,7})\s*(?:\*{1,3}|»)?\s+(\d{5,7}[.,]\d{1,3})\s+(\d{5,7}[.,]\d{1,3})"
    ).unwrap();

    pub static ref LEADING_DIGIT: Regex = Regex::new(r"^\d").unwrap();

    // A single Unicode decimal digit (general category Nd).
    pub static ref DIGIT: Regex = Regex::new(r"^\d$").unwrap();

    // Decimal as printed by the scanned documents, either separator.
    pub static ref COORDINATE: Regex = Regex::new(
        r"^\d{5,7}[.,]\d{1,3}$"
    ).unwrap();
}
