//! Point row scanning.

use regex::Captures;
use rust_decimal::Decimal;
use tracing::trace;

use super::numbers::{parse_coordinate, parse_identifier};
use super::patterns::{LEADING_DIGIT, POINT_ROW};
use super::ExtractionMatch;
use crate::error::ExtractionError;

/// A structurally valid point row, before range filtering and deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identifier: u32,
    pub x: Decimal,
    pub y: Decimal,
}

/// Scanner producing point row candidates from raw OCR text.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScanner;

impl CandidateScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan `text` left to right.
    ///
    /// Every structural match is yielded. Its numbers only fail to parse
    /// when they are not decimal digits of any script.
    pub fn scan<'t>(&self, text: &'t str) -> Candidates<'t> {
        Candidates { text, pos: 0 }
    }
}

impl Default for CandidateScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over point row candidates, see [`CandidateScanner::scan`].
pub struct Candidates<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Candidates<'t> {
    type Item = Result<ExtractionMatch<Candidate>, ExtractionError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let caps = POINT_ROW.captures_at(self.text, self.pos)?;
            let row = caps.get(0)?;

            if LEADING_DIGIT.is_match(&self.text[row.end()..]) {
                // Y runs into a longer number: no row starts here.
                trace!("Rejected row at {}: Y continues with a digit", row.start());
                self.pos = next_char_boundary(self.text, row.start());
                continue;
            }

            self.pos = row.end();
            return Some(parse_row(self.text, &caps));
        }

        None
    }
}

fn parse_row(text: &str, caps: &Captures<'_>) -> Result<ExtractionMatch<Candidate>, ExtractionError> {
    let nr = caps.get(1).map_or(0, |m| m.start());
    let end = caps.get(0).map_or(nr, |m| m.end());

    let candidate = Candidate {
        identifier: parse_identifier(&caps[1])?,
        x: parse_coordinate(&caps[2])?,
        y: parse_coordinate(&caps[3])?,
    };

    Ok(ExtractionMatch::new(candidate, nr, end, &text[nr..end]))
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    pos + text[pos..].chars().next().map_or(1, char::len_utf8)
}
