use std::fmt;
use std::io::{self, BufRead};

use super::record::HIT_MARKER;

/// Root element written at the top of xQuest result files.
const XQUEST_HEADER_MARKER: &str = "<xquest";

/// Cross-link result formats that can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// xQuest / xProphet XML-per-line results
    XQuest,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::XQuest => write!(f, "xquest"),
        }
    }
}

/// Scan the input for a recognizable format marker.
///
/// Returns `Ok(None)` when the whole input was read without finding one.
pub fn detect_format<R: BufRead>(reader: R) -> io::Result<Option<InputFormat>> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_start();
        if line.starts_with(XQUEST_HEADER_MARKER) || line.starts_with(HIT_MARKER) {
            return Ok(Some(InputFormat::XQuest));
        }
    }
    Ok(None)
}
