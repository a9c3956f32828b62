//! Point record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numbered survey point read from document text.
///
/// Records returned by the extractor are unique by `identifier` and have both
/// coordinates inside the bounds they were extracted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Point number ("Nr").
    #[serde(rename = "nr")]
    pub identifier: u32,

    /// First coordinate as printed in the document.
    pub x: Decimal,

    /// Second coordinate as printed in the document.
    pub y: Decimal,
}

impl PointRecord {
    pub fn new(identifier: u32, x: Decimal, y: Decimal) -> Self {
        Self { identifier, x, y }
    }
}
