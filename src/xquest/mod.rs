//! Line-oriented reader for xQuest result files
//!
//! xQuest writes one `<search_hit .../>` element per line. Rather than parsing the
//! document as XML, each hit line is split into whitespace-separated `key="value"`
//! tokens, which tolerates the quoting artifacts some xQuest versions leave behind.

pub use detect::{detect_format, InputFormat};
pub use record::{extract_attributes, is_hit_line, RawHit, HIT_MARKER};

mod detect;
mod record;

#[cfg(test)]
mod tests;
