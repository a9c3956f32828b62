//! Rule-based scanners for point rows in OCR text.

pub mod numbers;
pub mod patterns;
pub mod points;

pub use numbers::{ascii_digits, parse_coordinate, parse_identifier};
pub use points::{Candidate, CandidateScanner, Candidates};

/// A value found in source text, with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            position: (start, end),
            source: source.into(),
        }
    }
}
