use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;
use std::io::{sink, Cursor};
use xlconvert::converter::{ConversionConfig, XlinkConverter};
use xlconvert::emit::OutputFormat;
use xlconvert::mapping::map_positions;

const RESIDUES: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Deterministic pseudo-random protein sequence
fn protein(seed: usize, length: usize) -> String {
    (0..length)
        .map(|i| RESIDUES[(i * 7 + seed * 13 + i / 3) % RESIDUES.len()] as char)
        .collect()
}

/// Generate a synthetic database and matching xQuest result file
fn generate_input(num_proteins: usize, num_hits: usize) -> (HashMap<String, String>, String) {
    let database: HashMap<String, String> = (0..num_proteins)
        .map(|i| (format!("P{:05}", i), protein(i, 600)))
        .collect();

    let mut content = String::from("<?xml version=\"1.0\"?>\n<xquest_results>\n");
    for i in 0..num_hits {
        let (a, b) = (i % num_proteins, (i * 31 + 5) % num_proteins);
        let seq1 = &database[&format!("P{:05}", a)][100..112];
        let seq2 = &database[&format!("P{:05}", b)][300..309];
        content.push_str(&format!(
            "<search_hit id=\"{}\" prot1=\"P{:05}\" prot2=\"P{:05}\" seq1=\"{}\" seq2=\"{}\" xlinkposition=\"4,2\" score=\"{}.5\" fdr=\"0.0{}\" xprophet_f=\"{}\"/>\n",
            i,
            a,
            b,
            seq1,
            seq2,
            i % 40,
            i % 10,
            i % 2
        ));
    }
    content.push_str("</xquest_results>\n");
    (database, content)
}

/// Benchmark whole-file conversion for both output formats
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for num_hits in [1_000, 10_000] {
        let (database, content) = generate_input(200, num_hits);
        group.throughput(Throughput::Elements(num_hits as u64));

        for format in [OutputFormat::Xinet, OutputFormat::XlinkAnalyzer] {
            group.bench_with_input(
                BenchmarkId::new(format.to_string(), num_hits),
                &content,
                |b, content| {
                    b.iter(|| {
                        let config = ConversionConfig {
                            output_format: format,
                            max_fdr: Some(0.05),
                            ..Default::default()
                        };
                        let mut converter = XlinkConverter::new(&database, config).unwrap();
                        converter.convert(Cursor::new(content.as_str()), sink()).unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark peptide placement on proteins of increasing length
fn bench_position_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_mapping");

    for length in [500, 5_000, 50_000] {
        let sequence = protein(3, length);
        let peptide = sequence[length / 2..length / 2 + 10].to_string();
        group.throughput(Throughput::Bytes(length as u64));

        group.bench_with_input(BenchmarkId::from_parameter(length), &sequence, |b, sequence| {
            b.iter(|| map_positions(&peptide, 'C', 5, sequence).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_position_mapping);
criterion_main!(benches);
