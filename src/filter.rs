//! Hit acceptance rules
//!
//! Three independent predicates decide whether a hit is exported, evaluated in fixed
//! precedence: decoy exclusion, FDR threshold, then the xProphet validation flag. The
//! first failing rule determines the [`RejectReason`].

use std::fmt;

use crate::hit::CrossLinkHit;

/// Substrings marking decoy protein identifiers (matched case-sensitively).
///
/// xQuest prefixes decoys with `decoy`, other pipelines with `DECOY`.
pub const DECOY_MARKERS: &[&str] = &["decoy", "DECOY"];

/// Returns true if the identifier names a decoy protein
pub fn is_decoy_identifier(identifier: &str) -> bool {
    DECOY_MARKERS
        .iter()
        .any(|marker| identifier.contains(marker))
}

/// Why a hit was not exported
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    /// A protein identifier carries a decoy marker
    Decoy,
    /// FDR is above the configured maximum
    FdrAboveThreshold {
        /// FDR of the hit
        fdr: f64,
        /// Configured maximum
        max_fdr: f64,
    },
    /// Validation is required and xProphet did not flag the hit
    NotValidated,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Decoy => write!(f, "decoy protein"),
            RejectReason::FdrAboveThreshold { fdr, max_fdr } => {
                write!(f, "FDR {} above maximum {}", fdr, max_fdr)
            }
            RejectReason::NotValidated => write!(f, "not validated by xProphet"),
        }
    }
}

/// Outcome of [`HitFilter::verdict`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The hit is exported
    Accept,
    /// The hit is dropped
    Reject(RejectReason),
}

/// Filter settings for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitFilter {
    /// Maximum accepted FDR; `None` accepts every FDR
    pub max_fdr: Option<f64>,
    /// Only export hits flagged by xProphet
    pub require_validation: bool,
}

impl HitFilter {
    /// Create a filter
    pub fn new(max_fdr: Option<f64>, require_validation: bool) -> Self {
        Self {
            max_fdr,
            require_validation,
        }
    }

    /// Evaluate the rules in precedence order.
    pub fn verdict(&self, hit: &CrossLinkHit) -> Verdict {
        if hit.decoy {
            return Verdict::Reject(RejectReason::Decoy);
        }
        if let Some(max_fdr) = self.max_fdr {
            if hit.fdr > max_fdr {
                return Verdict::Reject(RejectReason::FdrAboveThreshold {
                    fdr: hit.fdr,
                    max_fdr,
                });
            }
        }
        if self.require_validation && !hit.validated {
            return Verdict::Reject(RejectReason::NotValidated);
        }
        Verdict::Accept
    }

    /// Returns true if the hit passes every rule
    pub fn accept(&self, hit: &CrossLinkHit) -> bool {
        self.verdict(hit) == Verdict::Accept
    }
}
