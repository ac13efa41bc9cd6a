#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use std::io::{sink, Cursor};
use xlconvert::converter::{ConversionConfig, XlinkConverter};
use xlconvert::database::FastaDatabase;
use xlconvert::emit::OutputFormat;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a FASTA database: may fail, must not panic
    let _ = FastaDatabase::from_reader(Cursor::new(data));

    let mut database = HashMap::new();
    database.insert("PROT1".to_string(), "ZZABCDEZZKPEPKR".to_string());
    database.insert("PROT2".to_string(), "MKAAAAKPEPK".to_string());

    // Arbitrary bytes as an xQuest file, converted to both tables. Per-hit problems
    // are reported, fatal ones returned; neither may panic.
    for output_format in [OutputFormat::Xinet, OutputFormat::XlinkAnalyzer] {
        let config = ConversionConfig {
            output_format,
            max_fdr: Some(0.05),
            ..Default::default()
        };
        if let Ok(mut converter) = XlinkConverter::new(&database, config) {
            let _ = converter.convert(Cursor::new(data), sink());
        }
    }
});
