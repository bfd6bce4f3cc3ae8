//! Benchmark for parsing `.env` text and rendering XML
//!
//! Run with: cargo bench --bench convert_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use envxml::pipeline::{parse_str, to_xml_string};

/// Generate `.env` text with a mix of pairs, comments, blanks and bad lines
fn generate_env(n_lines: usize) -> String {
    let mut out = String::with_capacity(n_lines * 32);
    for i in 0..n_lines {
        match i % 10 {
            0 => out.push_str(&format!("# section {}\n", i)),
            1 => out.push('\n'),
            2 => out.push_str(&format!("  SPACED_{} =  padded value {}  \n", i, i)),
            3 => out.push_str(&format!("URL_{}=http://host/?a={}&b=<{}>\n", i, i, i)),
            9 if i % 100 == 99 => out.push_str("not a pair\n"),
            _ => out.push_str(&format!("KEY_{}=value_{}\n", i, i)),
        }
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");
    for n_lines in [100, 10_000] {
        let input = generate_env(n_lines);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_lines), &input, |b, input| {
            b.iter(|| parse_str(black_box(input)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_xml_string");
    for n_lines in [100, 10_000] {
        let doc = parse_str(&generate_env(n_lines));
        group.throughput(Throughput::Elements(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_lines), &doc, |b, doc| {
            b.iter(|| to_xml_string(black_box(doc)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
