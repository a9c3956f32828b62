//! Error types for the pointnr-core library.

use thiserror::Error;

/// Main error type for the pointnr library.
#[derive(Error, Debug)]
pub enum PointnrError {
    /// Point extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to point record extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A matched numeric field could not be parsed after separator normalization.
    ///
    /// Only ever affects the single candidate it was raised for.
    #[error("malformed number in {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    /// The caller supplied bounds that can never accept a record.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for the pointnr library.
pub type Result<T> = std::result::Result<T, PointnrError>;
