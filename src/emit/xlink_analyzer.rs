//! XlinkAnalyzer structural-mapping table

use super::PLACEHOLDER;
use crate::hit::ResolvedHit;

/// Column names
pub const HEADER: [&str; 6] = ["Id", "Protein1", "Protein2", "AbsPos1", "AbsPos2", "score"];

/// One row: identifier, proteins, absolute positions joined with `+`, and score.
pub fn row(resolved: &ResolvedHit) -> [String; 6] {
    let hit = resolved.hit();
    [
        hit.id.clone(),
        hit.protein1.clone(),
        hit.protein2
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        resolved.positions1().to_string(),
        resolved
            .positions2()
            .map_or_else(|| PLACEHOLDER.to_string(), ToString::to_string),
        hit.score_text.clone(),
    ]
}
