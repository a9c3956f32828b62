//! Scan command - extract points from OCR text pages and list free numbers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use pointnr_core::{find_free, smallest_free, ExtractionStats, PointExtractor, PointRecord};

use super::export::{free_csv, points_csv};
use super::{emit, OutputFormat};
use crate::settings::PointnrConfig;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// OCR text pages: files, glob patterns, or `-` for stdin
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write points.csv and free.csv into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,

    /// How many free numbers to list
    #[arg(long)]
    how_many: Option<usize>,

    /// Print the beginning of the combined OCR text to stderr
    #[arg(long)]
    show_text: bool,
}

/// Overrides for the configured filter ranges.
#[derive(Args)]
pub struct FilterArgs {
    /// Smallest accepted X
    #[arg(long, allow_negative_numbers = true)]
    x_min: Option<Decimal>,

    /// Largest accepted X
    #[arg(long, allow_negative_numbers = true)]
    x_max: Option<Decimal>,

    /// Smallest accepted Y
    #[arg(long, allow_negative_numbers = true)]
    y_min: Option<Decimal>,

    /// Largest accepted Y
    #[arg(long, allow_negative_numbers = true)]
    y_max: Option<Decimal>,

    /// Largest accepted point number
    #[arg(long)]
    nr_max: Option<u32>,
}

impl FilterArgs {
    fn apply(&self, config: &mut PointnrConfig) {
        let filter = &mut config.filter;
        if let Some(v) = self.x_min {
            filter.x_min = v;
        }
        if let Some(v) = self.x_max {
            filter.x_max = v;
        }
        if let Some(v) = self.y_min {
            filter.y_min = v;
        }
        if let Some(v) = self.y_max {
            filter.y_max = v;
        }
        if let Some(v) = self.nr_max {
            filter.nr_max = v;
        }
    }
}

/// Where a page of OCR text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageSource {
    Stdin,
    File(PathBuf),
}

/// Everything a scan produces, as serialized for `--format json`.
#[derive(Debug, Serialize)]
struct ScanReport {
    points: Vec<PointRecord>,
    free: Vec<u32>,
    smallest_free: Option<u32>,
    stats: ExtractionStats,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = PointnrConfig::load(config_path.map(Path::new))?;
    args.filter.apply(&mut config);
    let how_many = args.how_many.unwrap_or(config.free.how_many);

    let extractor = PointExtractor::new(config.bounds()?)?;

    let pages = resolve_pages(&args.inputs, config.input.max_pages)?;
    let text = read_pages(&pages)?;

    if text.trim().is_empty() {
        warn!("No text found in the input pages");
    }

    if args.show_text {
        let preview: String = text.chars().take(config.input.preview_chars).collect();
        eprintln!("{}", style("OCR text (beginning):").blue());
        eprintln!("{}", preview);
    }

    let result = extractor.extract(&text);
    let free = find_free(result.identifiers(), how_many);

    let report = ScanReport {
        smallest_free: smallest_free(result.identifiers()),
        points: result.points,
        free,
        stats: result.stats,
    };

    if let Some(dir) = &args.export_dir {
        export(&report, dir)?;
    }

    let output = format_report(&report, args.format)?;
    emit(&output, args.output.as_deref())?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Expand inputs into an ordered page list, capped at `max_pages` (0 = no cap).
fn resolve_pages(inputs: &[String], max_pages: usize) -> anyhow::Result<Vec<PageSource>> {
    let mut pages = Vec::new();

    for input in inputs {
        if input == "-" {
            pages.push(PageSource::Stdin);
            continue;
        }

        let path = PathBuf::from(input);
        if path.exists() {
            pages.push(PageSource::File(path));
            continue;
        }

        let mut matches: Vec<PathBuf> = glob(input)?.filter_map(|r| r.ok()).collect();
        if matches.is_empty() {
            anyhow::bail!("No files found for input: {}", input);
        }
        matches.sort();
        pages.extend(matches.into_iter().map(PageSource::File));
    }

    if max_pages > 0 && pages.len() > max_pages {
        warn!("Reading only the first {} of {} pages", max_pages, pages.len());
        pages.truncate(max_pages);
    }

    Ok(pages)
}

/// Read all pages and join them into one text, one newline between pages.
fn read_pages(pages: &[PageSource]) -> anyhow::Result<String> {
    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages")?
            .progress_chars("##-"),
    );

    let mut texts = Vec::with_capacity(pages.len());
    for page in pages {
        let text = match page {
            PageSource::Stdin => io::read_to_string(io::stdin())?,
            PageSource::File(path) => fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Failed to read {}: {}", path.display(), e)
            })?,
        };
        debug!("Read page {:?} ({} bytes)", page, text.len());
        texts.push(text);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("Read {} pages", texts.len());
    Ok(texts.join("\n"))
}

fn export(report: &ScanReport, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let points_path = dir.join("points.csv");
    fs::write(&points_path, points_csv(&report.points)?)?;

    let free_path = dir.join("free.csv");
    fs::write(&free_path, free_csv(&report.free)?)?;

    eprintln!(
        "{} Exported {} and {}",
        style("✓").green(),
        points_path.display(),
        free_path.display()
    );
    Ok(())
}

fn format_report(report: &ScanReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Csv => points_csv(&report.points),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_text(report: &ScanReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Points found: {}\n", report.points.len()));
    output.push_str(&format!(
        "Smallest free: {}\n",
        report
            .smallest_free
            .map_or_else(|| "-".to_string(), |n| n.to_string())
    ));

    if !report.points.is_empty() {
        output.push('\n');
        output.push_str(&format!("{:>8}  {:>12}  {:>12}\n", "Nr", "X", "Y"));
        for p in &report.points {
            output.push_str(&format!("{:>8}  {:>12}  {:>12}\n", p.identifier, p.x, p.y));
        }
    }

    if !report.free.is_empty() {
        let free: Vec<String> = report.free.iter().map(u32::to_string).collect();
        output.push('\n');
        output.push_str(&format!("Free numbers ({}):\n", free.len()));
        output.push_str(&free.join(", "));
        output.push('\n');
    }

    output
}
