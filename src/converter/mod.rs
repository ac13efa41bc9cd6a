//! xQuest to downstream-tool converter
//!
//! This module drives the whole pipeline for one input file: format detection, then per
//! hit line extraction, validation, filtering, sequence resolution, position mapping and
//! row emission.
//!
//! Detection runs as a separate pass before anything is written, so an unrecognized
//! input produces no output at all. Once conversion has started, a broken hit line only
//! drops that hit; it is logged and recorded in the [`ConversionReport`].

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::database::{SequenceDatabase, SequenceResolver};
use crate::emit::{OutputFormat, RowWriter};
use crate::filter::{HitFilter, RejectReason, Verdict};
use crate::hit::{CrossLinkHit, HitError, ResolvedHit};
use crate::mapping::map_positions;
use crate::xquest::{detect_format, is_hit_line, RawHit};

pub use error::ConversionError;
pub use report::{ConversionReport, ConversionStats, HitFailure};

mod error;
mod report;


/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Table to produce
    pub output_format: OutputFormat,
    /// Maximum accepted FDR; `None` accepts every hit
    pub max_fdr: Option<f64>,
    /// Only export hits validated by xProphet
    pub require_validation: bool,
    /// Residue that modification markers in peptides stand for
    pub modification: char,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            max_fdr: None,
            require_validation: false,
            // Carbamidomethylated cysteine
            modification: 'C',
        }
    }
}

/// Parse a modification placeholder given as text.
///
/// Exactly one ASCII letter is accepted; it is returned upper-cased.
pub fn parse_modification(value: &str) -> Result<char, ConversionError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => validate_modification(c),
        _ => Err(ConversionError::InvalidModification(value.to_string())),
    }
}

fn validate_modification(c: char) -> Result<char, ConversionError> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_uppercase())
    } else {
        Err(ConversionError::InvalidModification(c.to_string()))
    }
}

/// What happened to a single well-formed hit
#[derive(Debug, Clone, PartialEq)]
pub enum HitOutcome {
    /// Passed the filter and was placed on its proteins
    Accepted(ResolvedHit),
    /// Dropped by the filter
    Rejected(RejectReason),
}

/// Converts xQuest hit lines into rows of an [`OutputFormat`].
pub struct XlinkConverter<D> {
    config: ConversionConfig,
    filter: HitFilter,
    resolver: SequenceResolver<D>,
}

impl<D: SequenceDatabase> XlinkConverter<D> {
    /// Create a converter over a sequence database
    ///
    /// # Errors
    ///
    /// - [`ConversionError::InvalidModification`] if the placeholder is not a letter.
    /// - [`ConversionError::InvalidFdrThreshold`] if `max_fdr` is NaN or infinite.
    pub fn new(database: D, config: ConversionConfig) -> Result<Self, ConversionError> {
        if let Some(max_fdr) = config.max_fdr.filter(|fdr| !fdr.is_finite()) {
            return Err(ConversionError::InvalidFdrThreshold(max_fdr));
        }
        let config = ConversionConfig {
            modification: validate_modification(config.modification)?,
            ..config
        };
        Ok(Self {
            filter: HitFilter::new(config.max_fdr, config.require_validation),
            resolver: SequenceResolver::new(database),
            config,
        })
    }

    /// Get the converter configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert an input file, writing the table to `output`
    pub fn convert_file<P: AsRef<Path>, W: Write>(
        &mut self,
        input: P,
        output: W,
    ) -> Result<ConversionReport, ConversionError> {
        let file = File::open(input)?;
        self.convert(BufReader::new(file), output)
    }

    /// Convert xQuest results read from `input`.
    ///
    /// The input is scanned once for a format marker and then rewound; nothing is
    /// written to `output` unless detection succeeds.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::FormatDetectionFailure`] when no format marker is found.
    /// - I/O or CSV errors while reading or writing.
    pub fn convert<R: BufRead + Seek, W: Write>(
        &mut self,
        mut input: R,
        output: W,
    ) -> Result<ConversionReport, ConversionError> {
        let input_format =
            detect_format(&mut input)?.ok_or(ConversionError::FormatDetectionFailure)?;
        input.seek(SeekFrom::Start(0))?;
        info!("Detected input format: {}", input_format);

        self.resolver.clear_cache();
        let mut report = ConversionReport::new(input_format, self.config.output_format);
        let mut writer = RowWriter::new(output, self.config.output_format)?;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            report.stats.lines_read += 1;
            if !is_hit_line(&line) {
                continue;
            }
            report.stats.hits_seen += 1;

            let raw = RawHit::from_line(&line);
            match self.process_hit(&raw) {
                Ok(HitOutcome::Accepted(hit)) => {
                    writer.write_hit(&hit)?;
                    report.stats.hits_accepted += 1;
                }
                Ok(HitOutcome::Rejected(reason)) => {
                    debug!("Hit {} rejected: {}", hit_label(&raw), reason);
                    report.stats.record_rejection(&reason);
                }
                Err(error) => {
                    let failure = HitFailure {
                        line: index + 1,
                        hit_id: raw.get_non_empty("id").map(str::to_string),
                        error,
                    };
                    warn!("Skipping hit at {}", failure);
                    report.record_failure(failure);
                }
            }
        }
        writer.finish()?;

        report.stats.sequence_lookups = self.resolver.lookups();
        report.stats.cache_hits = self.resolver.cache_hits();
        info!(
            "Converted {} of {} hits ({} rejected, {} failed)",
            report.stats.hits_accepted,
            report.stats.hits_seen,
            report.stats.hits_rejected(),
            report.stats.hits_failed
        );
        Ok(report)
    }

    /// Validate, filter and resolve one hit.
    ///
    /// Filtering happens before sequence resolution, so rejected hits never reach the
    /// database.
    pub fn process_hit(&mut self, raw: &RawHit) -> Result<HitOutcome, HitError> {
        let hit = CrossLinkHit::from_raw(raw)?;
        if let Verdict::Reject(reason) = self.filter.verdict(&hit) {
            return Ok(HitOutcome::Rejected(reason));
        }
        self.resolve(hit).map(HitOutcome::Accepted)
    }

    /// Place both peptides of a hit on their full-length proteins.
    pub fn resolve(&mut self, hit: CrossLinkHit) -> Result<ResolvedHit, HitError> {
        let modification = self.config.modification;

        let sequence = self.resolver.resolve(&hit.protein1)?;
        let positions1 = map_positions(&hit.peptide1, modification, hit.link_site1, &sequence)?;
        if positions1.is_empty() {
            debug!("Peptide {} not found in {}", hit.peptide1, hit.protein1);
        }

        let positions2 = match (&hit.protein2, &hit.peptide2, hit.link_site2) {
            (Some(protein), Some(peptide), Some(site)) => {
                let sequence = self.resolver.resolve(protein)?;
                let positions = map_positions(peptide, modification, site, &sequence)?;
                if positions.is_empty() {
                    debug!("Peptide {} not found in {}", peptide, protein);
                }
                Some(positions)
            }
            _ => None,
        };

        Ok(ResolvedHit::new(hit, positions1, positions2))
    }
}

fn hit_label(raw: &RawHit) -> &str {
    raw.get_non_empty("id").unwrap_or("<no id>")
}
