//! Peptide to protein position mapping
//!
//! xQuest reports cross-link sites relative to the peptide. Downstream structural tools
//! need the residue inside the full-length protein, so every occurrence of the peptide
//! in the protein sequence is located and the in-peptide site is shifted onto it.

use crate::hit::LinkPositions;

/// Characters xQuest uses to mark a variably modified residue in a peptide.
pub const MODIFICATION_MARKERS: [char; 2] = ['X', 'x'];

/// Errors raised by [`map_positions`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The 1-based link site lies outside the peptide
    #[error("invalid link-site index {site} for peptide of length {length}")]
    InvalidLinkSite {
        /// Link site as supplied (1-based)
        site: usize,
        /// Peptide length in residues
        length: usize,
    },
}

/// Replace modification markers with the residue they stand for.
pub fn substitute_modifications(peptide: &str, placeholder: char) -> String {
    peptide
        .chars()
        .map(|c| {
            if MODIFICATION_MARKERS.contains(&c) {
                placeholder
            } else {
                c
            }
        })
        .collect()
}

fn check_link_site(site: usize, length: usize) -> Result<(), MappingError> {
    if site == 0 || site > length {
        return Err(MappingError::InvalidLinkSite { site, length });
    }
    Ok(())
}

/// Absolute 0-based cross-link positions of `peptide` within `protein`.
///
/// Markers in the peptide are first replaced by `placeholder`, then every (possibly
/// overlapping) occurrence is located left to right and offset by `link_site - 1`.
/// A peptide that does not occur yields an empty set; that is not an error because
/// search databases and reference sequences regularly drift apart between versions.
///
/// # Errors
///
/// [`MappingError::InvalidLinkSite`] when `link_site` is 0 or past the end of the peptide.
pub fn map_positions(
    peptide: &str,
    placeholder: char,
    link_site: usize,
    protein: &str,
) -> Result<LinkPositions, MappingError> {
    let peptide = substitute_modifications(peptide, placeholder);
    check_link_site(link_site, peptide.chars().count())?;

    let offset = link_site - 1;
    let positions = protein
        .char_indices()
        .enumerate()
        .filter(|(_, (byte_start, _))| protein[*byte_start..].starts_with(peptide.as_str()))
        .map(|(residue_start, _)| residue_start + offset)
        .collect();

    Ok(LinkPositions::new(positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        let positions = map_positions("ABXDE", 'C', 3, "ZZABCDEZZ").unwrap();
        assert_eq!(positions.as_slice(), &[4]);
    }

    #[test]
    fn test_lowercase_marker_matches_uppercase() {
        let upper = map_positions("ABXDE", 'C', 1, "ZZABCDEZZ").unwrap();
        let lower = map_positions("ABxDE", 'C', 1, "ZZABCDEZZ").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_slice(), &[2]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let positions = map_positions("PEPTIDE", 'C', 2, "ZZABCDEZZ").unwrap();
        assert!(positions.is_empty());
        assert_eq!(positions.to_string(), "-");
    }

    #[test]
    fn test_overlapping_matches_in_scan_order() {
        let positions = map_positions("AA", 'C', 2, "AAAA").unwrap();
        assert_eq!(positions.as_slice(), &[1, 2, 3]);
        assert_eq!(positions.to_string(), "1+2+3");
    }

    #[test]
    fn test_repeated_peptide() {
        let positions = map_positions("KXR", 'C', 1, "KCRGGGKCRGG").unwrap();
        assert_eq!(positions.to_string(), "0+6");
    }

    #[test]
    fn test_invalid_link_sites() {
        assert_eq!(
            map_positions("ABC", 'C', 0, "ABC"),
            Err(MappingError::InvalidLinkSite { site: 0, length: 3 })
        );
        assert_eq!(
            map_positions("ABC", 'C', 4, "ABC"),
            Err(MappingError::InvalidLinkSite { site: 4, length: 3 })
        );
        assert!(map_positions("", 'C', 1, "ABC").is_err());
    }

    #[test]
    fn test_link_site_on_last_residue() {
        let positions = map_positions("ABC", 'C', 3, "ABC").unwrap();
        assert_eq!(positions.as_slice(), &[2]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn naive_starts(peptide: &str, protein: &str) -> Vec<usize> {
            let (peptide, protein) = (peptide.as_bytes(), protein.as_bytes());
            if peptide.len() > protein.len() {
                return Vec::new();
            }
            (0..=protein.len() - peptide.len())
                .filter(|&i| &protein[i..i + peptide.len()] == peptide)
                .collect()
        }

        proptest! {
            /// Positions equal every match start shifted by the link offset
            #[test]
            fn test_matches_naive_scan(
                peptide in "[ACDK]{1,4}",
                protein in "[ACDK]{0,40}",
                site_seed in 0usize..4,
            ) {
                let site = site_seed % peptide.len() + 1;
                let positions = map_positions(&peptide, 'C', site, &protein).unwrap();
                let expected: Vec<usize> = naive_starts(&peptide, &protein)
                    .into_iter()
                    .map(|start| start + site - 1)
                    .collect();
                prop_assert_eq!(positions.as_slice(), expected.as_slice());
            }

            /// Upper- and lower-case markers resolve identically
            #[test]
            fn test_marker_case_invariance(
                peptide in "[ADKXx]{1,5}",
                protein in "[ACDK]{0,40}",
            ) {
                let upper = map_positions(&peptide.to_uppercase(), 'C', 1, &protein).unwrap();
                let lower = map_positions(&peptide.replace('X', "x"), 'C', 1, &protein).unwrap();
                prop_assert_eq!(upper, lower);
            }
        }
    }
}
