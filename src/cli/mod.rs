use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use xlconvert::emit::OutputFormat;

mod config;
mod convert;
mod detect;

/// xlconvert - Cross-Link Identification Converter
#[derive(Parser)]
#[command(name = "xlconvert")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output table format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// xiNET network viewer table
    Xinet,
    /// XlinkAnalyzer structural-mapping table
    Xlinkanalyzer,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xinet => OutputFormat::Xinet,
            FormatArg::Xlinkanalyzer => OutputFormat::XlinkAnalyzer,
        }
    }
}

/// Options of the convert command, merged with the TOML config before use.
#[derive(Debug)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub database: Option<PathBuf>,
    pub modification: Option<String>,
    pub max_fdr: Option<f64>,
    pub require_validation: bool,
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an xQuest result file to a downstream tool format
    Convert {
        /// Input xQuest result file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatArg>,

        /// Protein sequence database (FASTA)
        #[arg(short = 'd', long, value_name = "DB")]
        database: Option<PathBuf>,

        /// Residue replacing the modification marker X in peptides (e.g. C)
        #[arg(short = 'm', long, value_name = "MOD")]
        modification: Option<String>,

        /// Maximum FDR of exported hits (default: accept all)
        #[arg(long, value_name = "FDR")]
        fdr: Option<f64>,

        /// Only export hits validated by xProphet
        #[arg(long)]
        xproph: bool,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Report the detected format of a cross-link result file
    Detect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            format,
            database,
            modification,
            fdr,
            xproph,
            output,
            config,
        } => convert::run(ConvertArgs {
            input,
            output,
            format: format.map(OutputFormat::from),
            database,
            modification,
            max_fdr: fdr,
            require_validation: xproph,
            config,
        }),
        Commands::Detect { file } => detect::run(file),
    }
}
