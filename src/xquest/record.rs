use std::collections::HashMap;

/// Opening token of a hit record line.
pub const HIT_MARKER: &str = "<search_hit";

/// Returns true when the line holds a hit record (leading whitespace ignored).
pub fn is_hit_line(line: &str) -> bool {
    line.trim_start().starts_with(HIT_MARKER)
}

/// Split one hit line into its attribute map.
///
/// The leading marker token is discarded and every remaining whitespace-separated token
/// of the form `key="value"` becomes one entry. Tokens without `=` (such as a detached
/// `/>`) are skipped, and when a key repeats the last occurrence wins.
///
/// Values lose one leading quote and every trailing quote, so the unbalanced
/// `xlinkposition="3,7""` artifact yields `3,7`.
pub fn extract_attributes(line: &str) -> HashMap<String, String> {
    line.split_whitespace()
        .skip(1)
        .filter_map(|token| {
            let (key, value) = token.split_once('=')?;
            Some((key.to_string(), clean_value(value).to_string()))
        })
        .collect()
}

fn clean_value(value: &str) -> &str {
    let value = value
        .strip_suffix("/>")
        .or_else(|| value.strip_suffix('>'))
        .unwrap_or(value);
    let value = value.strip_prefix('"').unwrap_or(value);
    value.trim_end_matches('"').trim()
}

/// Attributes of a single `<search_hit>` line, untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHit {
    attributes: HashMap<String, String>,
}

impl RawHit {
    /// Extract the attributes of a hit line
    pub fn from_line(line: &str) -> Self {
        Self {
            attributes: extract_attributes(line),
        }
    }

    /// Get a raw attribute value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Get an attribute, treating an empty value as absent
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Number of attributes on the line
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the line carried no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<HashMap<String, String>> for RawHit {
    fn from(attributes: HashMap<String, String>) -> Self {
        Self { attributes }
    }
}
