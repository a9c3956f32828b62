//! Core library for survey point number extraction.
//!
//! This crate provides:
//! - Point row extraction from noisy OCR text (Nr, X, Y), with range filtering
//!   and first-wins deduplication
//! - Free point number enumeration for a set of used numbers
//!
//! Everything here is a pure function of its arguments. Rasterizing PDFs and
//! running OCR happen before text reaches this crate.

pub mod error;
pub mod extract;
pub mod gaps;
pub mod models;

pub use error::{ExtractionError, PointnrError, Result};
pub use extract::{extract_points, ExtractionResult, ExtractionStats, PointExtractor};
pub use gaps::{find_free, free_numbers, smallest_free, FreeNumbers};
pub use models::{Bounds, PointRecord};
