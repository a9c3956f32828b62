//! CSV tables for points and free numbers.

use std::path::Path;

use anyhow::Context;
use tracing::warn;

use pointnr_core::PointRecord;

pub const POINTS_HEADER: [&str; 3] = ["Nr", "X", "Y"];
pub const FREE_HEADER: &str = "FreeNr";

/// Points as CSV with an `Nr,X,Y` header.
pub fn points_csv(points: &[PointRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(POINTS_HEADER)?;

    for point in points {
        wtr.write_record([
            point.identifier.to_string(),
            point.x.to_string(),
            point.y.to_string(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Free numbers as a single `FreeNr` column.
pub fn free_csv(free: &[u32]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([FREE_HEADER])?;

    for n in free {
        wtr.write_record([n.to_string()])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Read used point numbers from the `Nr` column of a points CSV.
///
/// Values that are not positive integers are skipped.
pub fn read_used_numbers(path: &Path) -> anyhow::Result<Vec<u32>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(POINTS_HEADER[0]))
        .ok_or_else(|| anyhow::anyhow!("No Nr column in {}", path.display()))?;

    let mut used = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let value = record.get(column).unwrap_or("").trim();
        match value.parse::<u32>() {
            Ok(n) if n > 0 => used.push(n),
            _ => warn!("Ignoring Nr {:?} on row {}", value, i + 1),
        }
    }

    Ok(used)
}
