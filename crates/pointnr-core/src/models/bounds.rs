//! Acceptance ranges for extracted points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Inclusive acceptance ranges for coordinates and point numbers.
///
/// OCR output of survey documents is full of numbers that look like point
/// rows (dates, areas, map scales); the ranges are what separates them from
/// real coordinates. The lower bound for point numbers is always 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: Decimal,
    pub x_max: Decimal,
    pub y_min: Decimal,
    pub y_max: Decimal,
    /// Largest accepted point number.
    pub nr_max: u32,
}

impl Bounds {
    /// Create validated bounds.
    pub fn new(
        x_min: Decimal,
        x_max: Decimal,
        y_min: Decimal,
        y_max: Decimal,
        nr_max: u32,
    ) -> Result<Self, ExtractionError> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
            nr_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that every range is non-empty.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.x_min > self.x_max {
            return Err(ExtractionError::InvalidConfiguration(format!(
                "x_min ({}) is greater than x_max ({})",
                self.x_min, self.x_max
            )));
        }
        if self.y_min > self.y_max {
            return Err(ExtractionError::InvalidConfiguration(format!(
                "y_min ({}) is greater than y_max ({})",
                self.y_min, self.y_max
            )));
        }
        if self.nr_max < 1 {
            return Err(ExtractionError::InvalidConfiguration(
                "nr_max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn contains_x(&self, x: Decimal) -> bool {
        self.x_min <= x && x <= self.x_max
    }

    pub fn contains_y(&self, y: Decimal) -> bool {
        self.y_min <= y && y <= self.y_max
    }

    pub fn contains_nr(&self, nr: u32) -> bool {
        (1..=self.nr_max).contains(&nr)
    }
}
