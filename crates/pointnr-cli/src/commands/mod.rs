//! CLI subcommands.

pub mod config;
pub mod export;
pub mod free;
pub mod scan;

use std::fs;
use std::path::Path;

use console::style;

/// Output format shared by `scan` and `free`.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Write `content` to `output`, or to stdout when no path is given.
fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => print!("{}", content),
    }
    Ok(())
}
