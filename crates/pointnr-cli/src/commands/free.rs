//! Free command - list unused point numbers.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use pointnr_core::{find_free, smallest_free};

use super::export::{free_csv, read_used_numbers};
use super::{emit, OutputFormat};
use crate::settings::PointnrConfig;

/// Arguments for the free command.
#[derive(Args)]
pub struct FreeArgs {
    /// Point numbers already in use
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Read used numbers from the Nr column of a points CSV
    #[arg(long)]
    from: Option<PathBuf>,

    /// How many free numbers to list
    #[arg(long)]
    how_many: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct FreeReport {
    free: Vec<u32>,
    smallest_free: Option<u32>,
}

pub fn run(args: FreeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = PointnrConfig::load(config_path.map(Path::new))?;
    let how_many = args.how_many.unwrap_or(config.free.how_many);

    let mut used = positive_numbers(&args.numbers);
    if let Some(path) = &args.from {
        let from_file = read_used_numbers(path)?;
        info!("Read {} used numbers from {}", from_file.len(), path.display());
        used.extend(from_file);
    }

    let report = FreeReport {
        free: find_free(used.iter().copied(), how_many),
        smallest_free: smallest_free(used.iter().copied()),
    };

    let output = match args.format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => free_csv(&report.free)?,
        OutputFormat::Text => format_text(&report),
    };
    emit(&output, args.output.as_deref())
}

/// Keep only values that can be point numbers.
fn positive_numbers(values: &[i64]) -> Vec<u32> {
    values
        .iter()
        .filter_map(|&v| match u32::try_from(v) {
            Ok(n) if n > 0 => Some(n),
            _ => {
                debug!("Ignoring used number {}", v);
                None
            }
        })
        .collect()
}

fn format_text(report: &FreeReport) -> String {
    let smallest = report
        .smallest_free
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let free: Vec<String> = report.free.iter().map(u32::to_string).collect();

    format!("Smallest free: {}\nFree numbers ({}):\n{}\n", smallest, free.len(), free.join(", "))
}
