//! Cross-link hit records
//!
//! A [`CrossLinkHit`] is the validated, typed view of one xQuest `<search_hit>` line.
//! Once both peptides have been located in their proteins it becomes a
//! [`ResolvedHit`], which is what the output formats consume.

use std::fmt;

use crate::filter::is_decoy_identifier;
use crate::mapping::MappingError;
use crate::xquest::RawHit;

/// Per-hit errors. These drop the offending hit but never abort a conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HitError {
    /// A required attribute is missing or unparseable
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// The protein identifier is not present in the sequence database
    #[error("unresolvable protein identifier '{0}'")]
    SequenceLookupMiss(String),

    /// A link site lies outside its peptide
    #[error(transparent)]
    InvalidLinkSite(#[from] MappingError),
}

impl HitError {
    fn missing(attribute: &str) -> Self {
        Self::MalformedRecord(format!("missing required attribute '{}'", attribute))
    }

    fn invalid(attribute: &str, value: &str) -> Self {
        Self::MalformedRecord(format!("invalid value '{}' for '{}'", value, attribute))
    }
}

/// Typed attributes of a single cross-link identification.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossLinkHit {
    /// Hit identifier
    pub id: String,
    /// First protein identifier
    pub protein1: String,
    /// Second protein identifier, `None` for monolinks
    pub protein2: Option<String>,
    /// First peptide, modification markers intact
    pub peptide1: String,
    /// Second peptide, present whenever `protein2` is
    pub peptide2: Option<String>,
    /// Link site within the first peptide (1-based)
    pub link_site1: usize,
    /// Link site within the second peptide (1-based)
    pub link_site2: Option<usize>,
    /// Score exactly as written in the input
    pub score_text: String,
    /// Parsed score
    pub score: f64,
    /// False discovery rate, 0 when the input carries none
    pub fdr: f64,
    /// xProphet validation flag
    pub validated: bool,
    /// Either protein identifier names a decoy sequence
    pub decoy: bool,
}

impl CrossLinkHit {
    /// Validate the attributes of a raw hit line.
    ///
    /// # Errors
    ///
    /// [`HitError::MalformedRecord`] when `id`, `prot1`, `seq1`, `xlinkposition` or
    /// `score` is missing, a numeric attribute does not parse or is not finite, or a
    /// cross-linked hit lacks its second peptide or second link site.
    ///
    /// Link sites are only checked against their peptides once the hit is mapped, so a
    /// filtered hit is never reported for an out-of-range site.
    pub fn from_raw(raw: &RawHit) -> Result<Self, HitError> {
        let id = required(raw, "id")?.to_string();
        let protein1 = required(raw, "prot1")?.to_string();
        let peptide1 = required(raw, "seq1")?.to_string();
        let positions = required(raw, "xlinkposition")?;

        let mut sites = positions.split(',').map(str::trim);
        let link_site1 = sites
            .next()
            .map(|site| parse_site(site, positions))
            .transpose()?
            .ok_or_else(|| HitError::missing("xlinkposition"))?;
        let link_site2 = sites
            .next()
            .filter(|site| !site.is_empty())
            .map(|site| parse_site(site, positions))
            .transpose()?;

        let protein2 = raw.get_non_empty("prot2").map(str::to_string);
        let peptide2 = match protein2 {
            Some(_) => {
                let peptide2 = required(raw, "seq2")?.to_string();
                if link_site2.is_none() {
                    return Err(HitError::MalformedRecord(format!(
                        "cross-linked hit needs two link sites, got '{}'",
                        positions
                    )));
                }
                Some(peptide2)
            }
            None => None,
        };

        let score_text = required(raw, "score")?.to_string();
        let score = parse_finite("score", &score_text)?;

        let fdr = match raw.get_non_empty("fdr") {
            Some(value) => parse_finite("fdr", value)?,
            None => 0.0,
        };

        let validated = match raw.get_non_empty("xprophet_f") {
            Some(value) => {
                value
                    .parse::<i64>()
                    .map_err(|_| HitError::invalid("xprophet_f", value))?
                    != 0
            }
            None => false,
        };

        let decoy = is_decoy_identifier(&protein1)
            || protein2.as_deref().is_some_and(is_decoy_identifier);

        Ok(Self {
            id,
            protein1,
            protein2,
            peptide1,
            peptide2,
            link_site1,
            link_site2,
            score_text,
            score,
            fdr,
            validated,
            decoy,
        })
    }

    /// Returns true if only one peptide is linked
    pub fn is_monolink(&self) -> bool {
        self.protein2.is_none()
    }
}

fn required<'a>(raw: &'a RawHit, attribute: &str) -> Result<&'a str, HitError> {
    raw.get_non_empty(attribute)
        .ok_or_else(|| HitError::missing(attribute))
}

fn parse_finite(attribute: &str, value: &str) -> Result<f64, HitError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| HitError::invalid(attribute, value))
}

fn parse_site(site: &str, positions: &str) -> Result<usize, HitError> {
    site.parse()
        .map_err(|_| HitError::invalid("xlinkposition", positions))
}

/// Absolute cross-link positions of one peptide, in discovery order.
///
/// Displays as the positions joined with `+`, or `-` when the peptide was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPositions(Vec<usize>);

impl LinkPositions {
    /// Build from positions, dropping repeats but keeping first-seen order
    pub fn new(positions: Vec<usize>) -> Self {
        let mut unique = Vec::with_capacity(positions.len());
        for position in positions {
            if !unique.contains(&position) {
                unique.push(position);
            }
        }
        Self(unique)
    }

    /// Positions as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the peptide was not found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LinkPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{}", crate::emit::PLACEHOLDER);
        }
        for (i, position) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

/// A hit whose peptides have been placed on their proteins.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHit {
    hit: CrossLinkHit,
    positions1: LinkPositions,
    positions2: Option<LinkPositions>,
}

impl ResolvedHit {
    /// Combine a hit with its mapped positions.
    ///
    /// `positions2` is ignored for monolinks.
    pub fn new(
        hit: CrossLinkHit,
        positions1: LinkPositions,
        positions2: Option<LinkPositions>,
    ) -> Self {
        let positions2 = if hit.is_monolink() { None } else { positions2 };
        Self {
            hit,
            positions1,
            positions2,
        }
    }

    /// The underlying hit attributes
    pub fn hit(&self) -> &CrossLinkHit {
        &self.hit
    }

    /// Absolute positions in the first protein
    pub fn positions1(&self) -> &LinkPositions {
        &self.positions1
    }

    /// Absolute positions in the second protein, `None` for monolinks
    pub fn positions2(&self) -> Option<&LinkPositions> {
        self.positions2.as_ref()
    }
}
