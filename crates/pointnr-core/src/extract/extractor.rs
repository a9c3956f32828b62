//! Range filtering and first-wins deduplication of scanned point rows.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Bounds, PointRecord};

use super::rules::{Candidate, CandidateScanner};
use super::Result;

/// Counters describing what happened to the candidates of one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Structural row matches found in the text.
    pub candidates: usize,
    /// Matches whose numbers could not be parsed.
    pub malformed: usize,
    /// Parsed candidates outside the bounds.
    pub out_of_range: usize,
    /// In-range candidates dropped because their number was already taken.
    pub duplicates: usize,
}

/// Result of point extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Accepted points, sorted by number, numbers unique.
    pub points: Vec<PointRecord>,
    pub stats: ExtractionStats,
}

impl ExtractionResult {
    /// Point numbers in use, ascending.
    pub fn identifiers(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().map(|p| p.identifier)
    }
}

/// Extracts point records from OCR text using fixed bounds.
#[derive(Debug, Clone)]
pub struct PointExtractor {
    bounds: Bounds,
    scanner: CandidateScanner,
}

impl PointExtractor {
    /// Create an extractor, rejecting bounds that can never accept a point.
    pub fn new(bounds: Bounds) -> Result<Self> {
        bounds.validate()?;
        Ok(Self {
            bounds,
            scanner: CandidateScanner::new(),
        })
    }

    /// Extract points from `text`.
    ///
    /// For every number only the first in-range row in text order is kept.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut stats = ExtractionStats::default();
        let mut accepted: BTreeMap<u32, (Decimal, Decimal)> = BTreeMap::new();

        for result in self.scanner.scan(text) {
            stats.candidates += 1;

            let found = match result {
                Ok(found) => found,
                Err(e) => {
                    debug!("Rejected candidate: {}", e);
                    stats.malformed += 1;
                    continue;
                }
            };

            let Candidate { identifier, x, y } = found.value;
            if !self.in_bounds(identifier, x, y) {
                debug!("Out of range: {:?}", found.source);
                stats.out_of_range += 1;
                continue;
            }

            match accepted.entry(identifier) {
                Entry::Vacant(slot) => {
                    slot.insert((x, y));
                }
                Entry::Occupied(_) => {
                    debug!("Duplicate point {} at byte {}", identifier, found.position.0);
                    stats.duplicates += 1;
                }
            }
        }

        let points: Vec<PointRecord> = accepted
            .into_iter()
            .map(|(identifier, (x, y))| PointRecord::new(identifier, x, y))
            .collect();

        info!(
            "Extracted {} points from {} candidates ({} malformed, {} out of range, {} duplicates)",
            points.len(),
            stats.candidates,
            stats.malformed,
            stats.out_of_range,
            stats.duplicates
        );

        ExtractionResult { points, stats }
    }

    fn in_bounds(&self, identifier: u32, x: Decimal, y: Decimal) -> bool {
        self.bounds.contains_x(x) && self.bounds.contains_y(y) && self.bounds.contains_nr(identifier)
    }
}

/// Extract point records from `text`, sorted by number.
pub fn extract_points(text: &str, bounds: &Bounds) -> Result<Vec<PointRecord>> {
    Ok(PointExtractor::new(bounds.clone())?.extract(text).points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn survey_bounds(nr_max: u32) -> Bounds {
        Bounds::new(
            dec("200000"),
            dec("800000"),
            dec("200000"),
            dec("800000"),
            nr_max,
        )
        .unwrap()
    }

    fn point(identifier: u32, x: &str, y: &str) -> PointRecord {
        PointRecord::new(identifier, dec(x), dec(y))
    }

    #[test]
    fn test_single_row() {
        let points = extract_points("17 250000.5 300000.25", &survey_bounds(1000)).unwrap();
        assert_eq!(points, vec![point(17, "250000.5", "300000.25")]);
    }

    #[test]
    fn test_comma_separator() {
        let points = extract_points("17 250000,5 300000,25", &survey_bounds(1000)).unwrap();
        assert_eq!(points, vec![point(17, "250000.5", "300000.25")]);
    }

    #[test]
    fn test_marker_noise_ignored() {
        for text in ["17*** 250000.5 300000.25", "17 » 250000.5 300000.25"] {
            let points = extract_points(text, &survey_bounds(1000)).unwrap();
            assert_eq!(points, vec![point(17, "250000.5", "300000.25")]);
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "17 250000.5 300000.25\n17 999999.9 999999.9";
        let points = extract_points(text, &survey_bounds(1000)).unwrap();
        assert_eq!(points, vec![point(17, "250000.5", "300000.25")]);

        let text = "42 250000.5 300000.25\n42 260000.5 310000.25";
        let result = PointExtractor::new(survey_bounds(1000)).unwrap().extract(text);
        assert_eq!(result.points, vec![point(42, "250000.5", "300000.25")]);
        assert_eq!(result.stats.duplicates, 1);
    }

    #[test]
    fn test_out_of_range_does_not_take_the_slot() {
        let text = "17 999999.9 999999.9\n17 250000.5 300000.25";
        let result = PointExtractor::new(survey_bounds(1000)).unwrap().extract(text);

        assert_eq!(result.points, vec![point(17, "250000.5", "300000.25")]);
        assert_eq!(
            result.stats,
            ExtractionStats {
                candidates: 2,
                malformed: 0,
                out_of_range: 1,
                duplicates: 0,
            }
        );
    }

    #[test]
    fn test_non_ascii_digits_extracted() {
        let result = PointExtractor::new(survey_bounds(1000))
            .unwrap()
            .extract("١٧ 250000.5 300000.25");

        assert_eq!(result.points, vec![point(17, "250000.5", "300000.25")]);
        assert_eq!(result.stats.malformed, 0);
    }

    #[test]
    fn test_eight_digit_identifier() {
        let points = extract_points("99999999 250000.5 300000.25", &survey_bounds(1000)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_each_bound_checked() {
        let bounds = survey_bounds(100);
        let text = "\
            1 199999.9 300000.0\n\
            2 250000.0 800000.1\n\
            101 250000.0 300000.0\n\
            0 250000.0 300000.0\n\
            3 200000.0 800000.0\n";
        let result = PointExtractor::new(bounds).unwrap().extract(text);

        assert_eq!(result.points, vec![point(3, "200000.0", "800000.0")]);
        assert_eq!(result.stats.out_of_range, 4);
    }

    #[test]
    fn test_sorted_by_identifier() {
        let text = "30 250000.5 300000.25\n4 250000.5 300000.25\n17 250000.5 300000.25";
        let ids: Vec<u32> = PointExtractor::new(survey_bounds(1000))
            .unwrap()
            .extract(text)
            .identifiers()
            .collect();
        assert_eq!(ids, vec![4, 17, 30]);
    }

    #[test]
    fn test_noisy_page() {
        let text = r#"
            KOORDINĀTU KATALOGS      M 1:2000
            Datums: 12.03.2021   Platība 1,2345 ha
            Nr     X            Y
            101*   312456.12    512345.67
            102    312460,05    512350,11
            103 »  312470.40    512360.9
            1O4    312480.00    512370.00
            Lapa 1 no 2
        "#;
        let points = extract_points(text, &survey_bounds(20_000_000)).unwrap();

        // "1O4" is read as point 4; OCR errors are not corrected.
        assert_eq!(
            points,
            vec![
                point(4, "312480.00", "512370.00"),
                point(101, "312456.12", "512345.67"),
                point(102, "312460.05", "512350.11"),
                point(103, "312470.40", "512360.9"),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        let result = PointExtractor::new(survey_bounds(1000)).unwrap().extract("");
        assert!(result.points.is_empty());
        assert_eq!(result.stats, ExtractionStats::default());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let bounds = Bounds {
            x_min: dec("800000"),
            x_max: dec("200000"),
            y_min: dec("200000"),
            y_max: dec("800000"),
            nr_max: 1000,
        };
        assert!(matches!(
            extract_points("17 250000.5 300000.25", &bounds),
            Err(ExtractionError::InvalidConfiguration(_))
        ));
    }

    fn row() -> impl Strategy<Value = String> {
        (
            1u32..200,
            prop_oneof![Just(""), Just("*"), Just("***"), Just(" »")],
            100_000u32..900_000,
            0u32..100,
            100_000u32..900_000,
            0u32..100,
            prop_oneof![Just('.'), Just(',')],
        )
            .prop_map(|(nr, noise, x, xf, y, yf, sep)| {
                format!("{nr}{noise} {x}{sep}{xf} {y}{sep}{yf}")
            })
    }

    proptest! {
        #[test]
        fn prop_output_unique_sorted_and_in_range(
            rows in proptest::collection::vec(row(), 0..40),
            junk in "[a-z0-9 .,:]{0,20}",
        ) {
            let text = rows.join(format!("\n{junk}\n").as_str());
            let bounds = survey_bounds(150);
            let extractor = PointExtractor::new(bounds.clone()).unwrap();
            let result = extractor.extract(&text);

            for pair in result.points.windows(2) {
                prop_assert!(pair[0].identifier < pair[1].identifier);
            }
            for p in &result.points {
                prop_assert!(bounds.contains_nr(p.identifier));
                prop_assert!(bounds.contains_x(p.x));
                prop_assert!(bounds.contains_y(p.y));
            }
            prop_assert_eq!(&result, &extractor.extract(&text));
        }
    }
}
