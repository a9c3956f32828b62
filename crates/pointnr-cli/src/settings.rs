//! Configuration file for the pointnr CLI.
//!
//! The core library takes every bound as an argument; the reference defaults
//! used for Latvian survey documents live here.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pointnr_core::{Bounds, PointnrError, Result};

/// Main configuration for the pointnr CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointnrConfig {
    /// Acceptance ranges for extracted points.
    pub filter: FilterConfig,

    /// Free number listing.
    pub free: FreeConfig,

    /// Input page handling.
    pub input: InputConfig,
}

/// Coordinate and point number ranges.
///
/// Tight ranges are what keeps dates, areas and map scales out of the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub x_min: Decimal,
    pub x_max: Decimal,
    pub y_min: Decimal,
    pub y_max: Decimal,

    /// Largest accepted point number.
    pub nr_max: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            x_min: Decimal::from(200_000),
            x_max: Decimal::from(800_000),
            y_min: Decimal::from(200_000),
            y_max: Decimal::from(800_000),
            nr_max: 20_000_000,
        }
    }
}

/// Free number listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeConfig {
    /// How many free numbers to list.
    pub how_many: usize,
}

impl Default for FreeConfig {
    fn default() -> Self {
        Self { how_many: 50 }
    }
}

/// Input page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,

    /// Characters of combined text shown by `--show-text`.
    pub preview_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            preview_chars: 4000,
        }
    }
}

impl PointnrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PointnrError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = default_config_path();
        if default_path.exists() {
            debug!("Using config file {}", default_path.display());
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PointnrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Filter ranges as validated extraction bounds.
    pub fn bounds(&self) -> Result<Bounds> {
        let f = &self.filter;
        Ok(Bounds::new(f.x_min, f.x_max, f.y_min, f.y_max, f.nr_max)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds().map(|_| ())
    }
}

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pointnr")
        .join("config.json")
}
