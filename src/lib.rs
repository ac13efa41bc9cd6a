//! # xlconvert - Cross-Link Identification Converter
//!
//! `xlconvert` turns cross-link search results written by xQuest into the input tables of
//! downstream tools: the xiNET network viewer and the XlinkAnalyzer structural-mapping
//! plugin.
//!
//! ## Pipeline
//!
//! Each `<search_hit .../>` line of the input passes through the same stages:
//!
//! 1. [`xquest`]: the line is split into a flat attribute map ([`xquest::RawHit`]).
//! 2. [`hit`]: required attributes are validated into a [`hit::CrossLinkHit`].
//! 3. [`filter`]: decoy, FDR and validation-flag predicates decide whether the hit is kept.
//! 4. [`database`] and [`mapping`]: both peptides are located inside their full-length
//!    proteins, giving absolute 0-based cross-link positions ([`hit::ResolvedHit`]).
//! 5. [`emit`]: the hit becomes one CSV row of the selected [`emit::OutputFormat`].
//!
//! The [`converter`] module drives these stages and collects per-hit failures into a
//! [`converter::ConversionReport`] instead of aborting the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::io::Cursor;
//! use xlconvert::converter::{ConversionConfig, XlinkConverter};
//! use xlconvert::emit::OutputFormat;
//!
//! let mut database = HashMap::new();
//! database.insert("PROT1".to_string(), "ZZABCDEZZ".to_string());
//!
//! let config = ConversionConfig {
//!     output_format: OutputFormat::XlinkAnalyzer,
//!     modification: 'C',
//!     ..Default::default()
//! };
//! let mut converter = XlinkConverter::new(database, config)?;
//!
//! let input = r#"<search_hit id="1" prot1="PROT1" prot2="" seq1="ABXDE" xlinkposition="3" score="5.0" xprophet_f="1"/>"#;
//! let mut output = Vec::new();
//! let report = converter.convert(Cursor::new(input), &mut output)?;
//!
//! assert_eq!(report.stats.hits_accepted, 1);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Id,Protein1,Protein2,AbsPos1,AbsPos2,score\n1,PROT1,-,4,-,5.0\n"
//! );
//! # Ok::<(), xlconvert::converter::ConversionError>(())
//! ```
//!
//! ## Output Formats
//!
//! | Format | Header |
//! |--------|--------|
//! | `xinet` | `Score,Protein1,LinkPos1,Protein2,LinkPos2` |
//! | `xlinkanalyzer` | `Id,Protein1,Protein2,AbsPos1,AbsPos2,score` |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod converter;
pub mod database;
pub mod emit;
pub mod filter;
pub mod hit;
pub mod mapping;
pub mod xquest;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::converter::{
        ConversionConfig, ConversionError, ConversionReport, ConversionStats, HitFailure,
        XlinkConverter,
    };
    pub use crate::database::{
        DatabaseError, FastaDatabase, SequenceDatabase, SequenceResolver,
    };
    pub use crate::emit::{OutputFormat, RowWriter, PLACEHOLDER};
    pub use crate::filter::{HitFilter, RejectReason, Verdict, DECOY_MARKERS};
    pub use crate::hit::{CrossLinkHit, HitError, LinkPositions, ResolvedHit};
    pub use crate::mapping::{map_positions, MappingError};
    pub use crate::xquest::{detect_format, extract_attributes, InputFormat, RawHit};
}
