/// Errors that abort a conversion
///
/// Per-hit problems are not reported here; they end up in the
/// [`ConversionReport`](super::ConversionReport).
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// No recognizable cross-link format marker in the input
    #[error("input format of cross-link file could not be determined")]
    FormatDetectionFailure,

    /// Modification placeholder is not a single residue letter
    #[error("invalid modification '{0}': expected exactly one amino acid letter")]
    InvalidModification(String),

    /// FDR threshold that no hit could be compared against
    #[error("invalid FDR threshold {0}: expected a finite number")]
    InvalidFdrThreshold(f64),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error writing CSV output
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
