use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use xlconvert::xquest::detect_format;

/// Print the detected format of a cross-link result file
pub fn run(file: PathBuf) -> Result<()> {
    info!("Detecting format of {}", file.display());

    let reader = File::open(&file)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open {}", file.display()))?;

    match detect_format(reader).context("Failed to read input")? {
        Some(format) => {
            println!("{}", format);
            Ok(())
        }
        None => anyhow::bail!(
            "Input format of {} could not be determined",
            file.display()
        ),
    }
}
