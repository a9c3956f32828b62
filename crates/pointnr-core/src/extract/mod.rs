//! Point record extraction from OCR text.

mod extractor;
pub mod rules;

pub use extractor::{extract_points, ExtractionResult, ExtractionStats, PointExtractor};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
