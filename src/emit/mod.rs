//! Output tables for downstream cross-link tools
//!
//! Two CSV layouts are produced from the same [`ResolvedHit`]:
//!
//! | Format | Consumer | Columns |
//! |--------|----------|---------|
//! | [`OutputFormat::Xinet`] | xiNET network viewer | `Score,Protein1,LinkPos1,Protein2,LinkPos2` |
//! | [`OutputFormat::XlinkAnalyzer`] | XlinkAnalyzer structural mapping | `Id,Protein1,Protein2,AbsPos1,AbsPos2,score` |
//!
//! xiNET expects the link sites as reported within the peptides, XlinkAnalyzer the
//! absolute residue positions within the proteins.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::hit::ResolvedHit;

pub use writer::RowWriter;

pub mod xinet;
pub mod xlink_analyzer;
mod writer;

/// Cell text for an absent protein, link site or position
pub const PLACEHOLDER: &str = "-";

/// Supported output tables
///
/// Deserializes from the same names [`FromStr`] accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// xiNET network visualization table
    Xinet,
    /// XlinkAnalyzer structural-mapping table (default)
    #[default]
    XlinkAnalyzer,
}

/// An output format name that is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format '{0}'. Valid options: xinet, xlinkanalyzer")]
pub struct UnknownOutputFormat(pub String);

impl OutputFormat {
    /// Column header of the table
    pub fn header(self) -> &'static [&'static str] {
        match self {
            OutputFormat::Xinet => &xinet::HEADER,
            OutputFormat::XlinkAnalyzer => &xlink_analyzer::HEADER,
        }
    }

    /// Cells of the row describing `hit`
    pub fn row(self, hit: &ResolvedHit) -> Vec<String> {
        match self {
            OutputFormat::Xinet => xinet::row(hit).to_vec(),
            OutputFormat::XlinkAnalyzer => xlink_analyzer::row(hit).to_vec(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xinet => write!(f, "xinet"),
            OutputFormat::XlinkAnalyzer => write!(f, "xlinkanalyzer"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xinet" => Ok(OutputFormat::Xinet),
            "xlinkanalyzer" | "xlink-analyzer" => Ok(OutputFormat::XlinkAnalyzer),
            _ => Err(UnknownOutputFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = UnknownOutputFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
