//! Benchmarks for doc-block parsing.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use doctag::parser::{description, extract_doc_blocks, first_line, parse_tags, ParseOptions};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A doc block with `count` tag lines.
fn generated_comment(count: usize) -> String {
    let mut comment = String::from("/**\n * Generated summary.\n *\n * Longer description text.\n");
    for i in 0..count {
        comment.push_str(&format!(" * @tag{} value number {}\n", i % 8, i));
    }
    comment.push_str(" */");
    comment
}

// -- Tag parsing benchmarks --

fn bench_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("tags");

    let widget = load_fixture("widget.txt");
    let large = generated_comment(200);
    let neutral = ParseOptions::default();
    let filtered = ParseOptions::new().allow(["tag1", "tag2"]).ignore(["tag2"]);

    group.bench_function("parse_widget", |b| {
        b.iter(|| parse_tags(black_box(&widget), &neutral))
    });

    group.bench_function("parse_large", |b| {
        b.iter(|| parse_tags(black_box(&large), &neutral))
    });

    group.bench_function("parse_large_filtered", |b| {
        b.iter(|| parse_tags(black_box(&large), &filtered))
    });

    group.finish();
}

// -- Summary benchmarks --

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");

    let large = generated_comment(200);

    group.bench_function("first_line", |b| b.iter(|| first_line(black_box(&large))));
    group.bench_function("description", |b| b.iter(|| description(black_box(&large))));

    group.finish();
}

// -- Extraction benchmarks --

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let source = load_fixture("Widget.php");
    let repeated = source.repeat(50);

    group.bench_function("extract_widget_source", |b| {
        b.iter(|| extract_doc_blocks(black_box(&source)))
    });

    group.bench_function("extract_large_source", |b| {
        b.iter(|| extract_doc_blocks(black_box(&repeated)))
    });

    group.finish();
}

criterion_group!(benches, bench_tags, bench_summaries, bench_extract);
criterion_main!(benches);
