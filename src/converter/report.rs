use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::emit::OutputFormat;
use crate::filter::RejectReason;
use crate::hit::HitError;
use crate::xquest::InputFormat;

/// Counters collected over one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Input lines read
    pub lines_read: usize,
    /// Hit lines encountered
    pub hits_seen: usize,
    /// Hits written to the output
    pub hits_accepted: usize,
    /// Hits dropped because a protein is a decoy
    pub rejected_decoy: usize,
    /// Hits dropped for exceeding the FDR threshold
    pub rejected_fdr: usize,
    /// Hits dropped for lacking xProphet validation
    pub rejected_unvalidated: usize,
    /// Hits dropped because of a per-hit error
    pub hits_failed: usize,
    /// Protein sequence requests
    pub sequence_lookups: usize,
    /// Requests answered from the per-run cache
    pub cache_hits: usize,
}

impl ConversionStats {
    /// Total hits dropped by the filter
    pub fn hits_rejected(&self) -> usize {
        self.rejected_decoy + self.rejected_fdr + self.rejected_unvalidated
    }

    pub(crate) fn record_rejection(&mut self, reason: &RejectReason) {
        match reason {
            RejectReason::Decoy => self.rejected_decoy += 1,
            RejectReason::FdrAboveThreshold { .. } => self.rejected_fdr += 1,
            RejectReason::NotValidated => self.rejected_unvalidated += 1,
        }
    }
}

/// A hit that could not be converted
#[derive(Debug, Clone, PartialEq)]
pub struct HitFailure {
    /// 1-based input line
    pub line: usize,
    /// Hit identifier, when the line carried one
    pub hit_id: Option<String>,
    /// What went wrong
    pub error: HitError,
}

impl fmt::Display for HitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hit_id {
            Some(id) => write!(f, "line {} (hit {}): {}", self.line, id, self.error),
            None => write!(f, "line {}: {}", self.line, self.error),
        }
    }
}

/// Outcome of a completed conversion run
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Detected input format
    pub input_format: InputFormat,
    /// Table that was written
    pub output_format: OutputFormat,
    /// Run counters
    pub stats: ConversionStats,
    /// Per-hit failures, in input order
    pub failures: Vec<HitFailure>,
}

impl ConversionReport {
    /// Create an empty report
    pub fn new(input_format: InputFormat, output_format: OutputFormat) -> Self {
        Self {
            input_format,
            output_format,
            stats: ConversionStats::default(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_failure(&mut self, failure: HitFailure) {
        self.stats.hits_failed += 1;
        self.failures.push(failure);
    }

    /// Check if any hit failed to convert
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Identifiers of the failed hits that carried one
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failures
            .iter()
            .filter_map(|failure| failure.hit_id.as_deref())
            .collect()
    }

    /// Failures caused by proteins missing from the database
    pub fn lookup_miss_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.error, HitError::SequenceLookupMiss(_)))
            .count()
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!(
                "{}\n",
                style(format!("{} to {} conversion", self.input_format, self.output_format))
                    .bold()
                    .cyan()
            ));
            output.push_str(&format!(
                "{}: {} seen, {} accepted, {} rejected, {} failed\n",
                style("Hits").bold(),
                self.stats.hits_seen,
                style(self.stats.hits_accepted).green(),
                style(self.stats.hits_rejected()).yellow(),
                style(self.stats.hits_failed).red()
            ));
            output.push_str(&format!(
                "{}: {} decoy, {} above FDR threshold, {} not validated\n",
                style("Rejected").bold(),
                self.stats.rejected_decoy,
                self.stats.rejected_fdr,
                self.stats.rejected_unvalidated
            ));
            output.push_str(&format!(
                "{}: {} ({} cached)\n",
                style("Sequence lookups").bold(),
                self.stats.sequence_lookups,
                self.stats.cache_hits
            ));

            if self.has_failures() {
                output.push_str(&format!("{}\n", style("Failures").red().bold()));
                for failure in &self.failures {
                    output.push_str(&format!("  {}\n", failure));
                }
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} to {} conversion", self.input_format, self.output_format)?;
        writeln!(
            f,
            "Hits: {} seen, {} accepted, {} rejected, {} failed",
            self.stats.hits_seen,
            self.stats.hits_accepted,
            self.stats.hits_rejected(),
            self.stats.hits_failed
        )?;
        writeln!(
            f,
            "Rejected: {} decoy, {} above FDR threshold, {} not validated",
            self.stats.rejected_decoy, self.stats.rejected_fdr, self.stats.rejected_unvalidated
        )?;
        writeln!(
            f,
            "Sequence lookups: {} ({} cached)",
            self.stats.sequence_lookups, self.stats.cache_hits
        )?;

        if self.has_failures() {
            writeln!(f, "Failures:")?;
            for failure in &self.failures {
                writeln!(f, "  {}", failure)?;
            }
        }

        Ok(())
    }
}
