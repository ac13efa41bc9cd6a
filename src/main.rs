//! # xlconvert
//!
//! A command-line tool for converting xQuest cross-link identifications into the
//! input tables of downstream tools.
//!
//! ## Output Formats
//!
//! - **xinet**: xiNET network viewer CSV
//! - **xlinkanalyzer**: XlinkAnalyzer structural-mapping CSV (absolute residue positions)
//!
//! ## Usage
//!
//! ```bash
//! # Structural-mapping table, modified cysteines marked as X in peptides
//! xlconvert convert results.xml -f xlinkanalyzer -d proteins.fasta -m C -o links.csv
//!
//! # xiNET table of validated hits below 5% FDR
//! xlconvert convert results.xml -f xinet -d proteins.fasta -m C --fdr 0.05 --xproph
//!
//! # Check whether a file is recognized
//! xlconvert detect results.xml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
