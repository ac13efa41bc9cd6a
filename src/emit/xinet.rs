//! xiNET network table

use super::PLACEHOLDER;
use crate::hit::ResolvedHit;

/// Column names
pub const HEADER: [&str; 5] = ["Score", "Protein1", "LinkPos1", "Protein2", "LinkPos2"];

/// One row: score, both proteins and the in-peptide link sites as supplied.
pub fn row(resolved: &ResolvedHit) -> [String; 5] {
    let hit = resolved.hit();
    [
        format_score(hit.score),
        hit.protein1.clone(),
        hit.link_site1.to_string(),
        hit.protein2
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        hit.link_site2
            .map_or_else(|| PLACEHOLDER.to_string(), |site| site.to_string()),
    ]
}

/// Score text with shortest round-trip digits and a fractional part.
///
/// Magnitudes outside `[1e-4, 1e16)` switch to exponent notation with a signed,
/// two-digit minimum exponent (`1e-05`, `2.5e+120`).
pub fn format_score(score: f64) -> String {
    let magnitude = score.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{:e}", score);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => scientific,
        };
    }

    let fixed = score.to_string();
    if fixed.contains('.') {
        fixed
    } else {
        fixed + ".0"
    }
}
