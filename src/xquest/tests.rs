use super::*;
use std::io::Cursor;

const HIT_LINE: &str = r#"<search_hit id="1" prot1="PROT1" prot2="" seq1="ABXDE" xlinkposition="3" score="5.0" xprophet_f="1"/>"#;

#[test]
fn test_extract_basic_line() {
    let attributes = extract_attributes(HIT_LINE);
    assert_eq!(attributes.len(), 7);
    assert_eq!(attributes["id"], "1");
    assert_eq!(attributes["prot1"], "PROT1");
    assert_eq!(attributes["prot2"], "");
    assert_eq!(attributes["seq1"], "ABXDE");
    assert_eq!(attributes["xlinkposition"], "3");
    assert_eq!(attributes["score"], "5.0");
    assert_eq!(attributes["xprophet_f"], "1");
}

#[test]
fn test_extract_strips_trailing_quote_artifacts() {
    let line = r#"<search_hit xlinkposition="3,7"" xprophet_f="0"" id="x">"#;
    let attributes = extract_attributes(line);
    assert_eq!(attributes["xlinkposition"], "3,7");
    assert_eq!(attributes["xprophet_f"], "0");
    assert_eq!(attributes["id"], "x");
}

#[test]
fn test_extract_skips_tokens_without_equals() {
    let line = r#"<search_hit id="7" stray score="2.5" />"#;
    let attributes = extract_attributes(line);
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes["score"], "2.5");
}

#[test]
fn test_extract_last_duplicate_wins() {
    let attributes = extract_attributes(r#"<search_hit id="1" id="2"/>"#);
    assert_eq!(attributes["id"], "2");
}

#[test]
fn test_extract_ignores_leading_indentation() {
    let attributes = extract_attributes(r#"    <search_hit   id="9"   seq1="PEPTIDE"/>"#);
    assert_eq!(attributes["id"], "9");
    assert_eq!(attributes["seq1"], "PEPTIDE");
}

#[test]
fn test_raw_hit_accessors() {
    let raw = RawHit::from_line(HIT_LINE);
    assert_eq!(raw.get("prot1"), Some("PROT1"));
    assert_eq!(raw.get("prot2"), Some(""));
    assert_eq!(raw.get_non_empty("prot2"), None);
    assert_eq!(raw.get("fdr"), None);
    assert!(!raw.is_empty());
}

#[test]
fn test_is_hit_line() {
    assert!(is_hit_line(HIT_LINE));
    assert!(is_hit_line("   <search_hit id=\"1\"/>"));
    assert!(!is_hit_line("<spectrum_search spectrum=\"a\">"));
    assert!(!is_hit_line(""));
}

#[test]
fn test_detect_xquest_header() {
    let input = "<?xml version=\"1.0\"?>\n<xquest_results xquest_version=\"2.1\">\n</xquest_results>\n";
    let format = detect_format(Cursor::new(input)).unwrap();
    assert_eq!(format, Some(InputFormat::XQuest));
}

#[test]
fn test_detect_bare_hit_lines() {
    let format = detect_format(Cursor::new(HIT_LINE)).unwrap();
    assert_eq!(format, Some(InputFormat::XQuest));
}

#[test]
fn test_detect_unrecognized_input() {
    let input = "Score,Protein1,LinkPos1\n1.0,A,3\n";
    assert_eq!(detect_format(Cursor::new(input)).unwrap(), None);
    assert_eq!(detect_format(Cursor::new("")).unwrap(), None);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Well-formed key="value" pairs are always recovered verbatim
        #[test]
        fn test_extract_recovers_pairs(
            pairs in prop::collection::hash_map("[a-z_][a-z0-9_]{0,8}", "[A-Za-z0-9_.,+-]{0,12}", 0..8)
        ) {
            let line = pairs
                .iter()
                .fold(String::from("<search_hit"), |mut line, (key, value)| {
                    line.push_str(&format!(" {}=\"{}\"", key, value));
                    line
                });
            let extracted = extract_attributes(&format!("{}/>", line));
            prop_assert_eq!(extracted, pairs);
        }

        /// Arbitrary text never panics the extractor
        #[test]
        fn test_extract_never_panics(line in ".*") {
            let _ = extract_attributes(&line);
        }
    }
}
