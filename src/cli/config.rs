//! TOML configuration file support.
//!
//! Settings that rarely change between runs can live in a config file:
//!
//! ```toml
//! # xlconvert.toml
//! [conversion]
//! format = "xlinkanalyzer"
//! database = "proteins.fasta"
//! modification = "C"
//! max_fdr = 0.05
//! require_validation = true
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xlconvert::emit::OutputFormat;

/// Root configuration structure for xlconvert.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Configuration for the convert command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig {
    /// Output table format.
    pub format: Option<OutputFormat>,

    /// FASTA sequence database.
    pub database: Option<PathBuf>,

    /// Residue standing in for the modification marker.
    pub modification: Option<String>,

    /// Maximum FDR of exported hits.
    pub max_fdr: Option<f64>,

    /// Only export hits validated by xProphet.
    pub require_validation: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
