use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

use xlconvert::converter::{parse_modification, ConversionConfig, ConversionReport, XlinkConverter};
use xlconvert::database::FastaDatabase;

use super::config::Config;
use super::ConvertArgs;

/// File endings accepted for the sequence database
const FASTA_EXTENSIONS: &[&str] = &["fasta", "fa", "fas"];

/// Convert an xQuest result file to the requested table format
pub fn run(args: ConvertArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .conversion;

    let format = args
        .format
        .or(file_config.format)
        .context("No output format given (use -f xinet or -f xlinkanalyzer)")?;
    let database_path = args
        .database
        .or(file_config.database)
        .context("No sequence database given (use -d <DB>)")?;
    let modification = args
        .modification
        .or(file_config.modification)
        .context("No modification residue given (use -m <MOD>)")?;
    let max_fdr = args.max_fdr.or(file_config.max_fdr);
    let require_validation =
        args.require_validation || file_config.require_validation.unwrap_or(false);

    // Validate inputs before touching any output
    check_file(&args.input, "Input file")?;
    check_file(&database_path, "Sequence database")?;
    check_fasta_extension(&database_path)?;
    let modification = parse_modification(&modification)?;

    info!("xlconvert - xQuest to {}", format);
    info!("==========================");
    info!("Input:    {}", args.input.display());
    info!("Database: {}", database_path.display());
    match &args.output {
        Some(output) => info!("Output:   {}", output.display()),
        None => info!("Output:   <stdout>"),
    }
    info!("Modification residue: {}", modification);
    match max_fdr {
        Some(fdr) => info!("Maximum FDR: {}", fdr),
        None => info!("Maximum FDR: none"),
    }
    if require_validation {
        info!("Only xProphet-validated hits");
    }

    let database = FastaDatabase::from_path(&database_path).with_context(|| {
        format!(
            "Failed to load sequence database: {}",
            database_path.display()
        )
    })?;
    info!("Loaded {} protein sequences", database.len());

    let config = ConversionConfig {
        output_format: format,
        max_fdr,
        require_validation,
        modification,
    };
    let mut converter = XlinkConverter::new(database, config)?;

    let report = match &args.output {
        Some(output) => convert_to_file(&mut converter, &args.input, output)?,
        None => {
            let stdout = io::stdout();
            converter
                .convert_file(&args.input, BufWriter::new(stdout.lock()))
                .context("Conversion failed")?
        }
    };

    // Summary on stderr, table on stdout
    #[cfg(feature = "colorized_output")]
    {
        eprint!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        eprint!("{}", report);
    }

    Ok(())
}

/// Write through a temp file in the destination directory, persisted only on success
fn convert_to_file(
    converter: &mut XlinkConverter<FastaDatabase>,
    input: &Path,
    output: &Path,
) -> Result<ConversionReport> {
    let directory = output
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(directory).with_context(|| {
        format!("Failed to create temporary file in {}", directory.display())
    })?;

    let report = converter
        .convert_file(input, BufWriter::new(temp.as_file_mut()))
        .context("Conversion failed")?;

    temp.persist(output)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    Ok(report)
}

fn check_file(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("{} does not exist: {}", what, path.display());
    }
    Ok(())
}

fn check_fasta_extension(path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    if !FASTA_EXTENSIONS.contains(&extension) {
        anyhow::bail!(
            "Unknown file ending of sequence database: {} (expected one of: {})",
            path.display(),
            FASTA_EXTENSIONS.join(", ")
        );
    }
    Ok(())
}
