//! Criterion benchmarks for the anglicise conversion pipeline.
//!
//! Covers the major stages independently and end to end:
//! - Dictionary lookup
//! - Unit and contextual-word detection
//! - Full conversion with segmentation
//! - Converter construction (rule compilation)

use anglicise::Converter;
use anglicise::config::{UnitConfig, WordConfig};
use anglicise::detect::unit::UnitDetector;
use anglicise::detect::word::WordDisambiguator;
use anglicise::dictionary::Dictionary;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a prose document with a realistic mix of convertible spans.
fn generate_document(sentences: usize) -> String {
    let templates = [
        "My favorite color for the fence is gray.",
        "The room is 12 feet wide and 8 feet deep.",
        "You need a license to operate this analyzer.",
        "She practiced organizing her catalog by color.",
        "It was 72 degrees Fahrenheit near the harbor.",
        "We walked six miles to the theater in the neighborhood.",
        "Add 2 gallons of water and 5 ounces of flavoring.",
        "The 6-foot board weighed about 20 pounds.",
        "In practice, the center of the dialog is customizable.",
        "They will license the program under a new agreement.",
    ];

    let mut document = String::new();
    for i in 0..sentences {
        document.push_str(templates[i % templates.len()]);
        document.push(' ');
        if i % 7 == 6 {
            document.push('\n');
        }
    }
    document
}

/// Generate a markdown document mixing prose, fences, and inline code.
fn generate_markdown(sections: usize) -> String {
    let mut document = String::new();
    for i in 0..sections {
        document.push_str("## Section heading\n\n");
        document.push_str("The favorite color here is gray, about 12 feet away.\n\n");
        document.push_str("```rust\nlet color = normalize(); // favorite color\n```\n\n");
        document.push_str("Use `color` from [the guide](https://example.com/color).\n\n");
        if i % 5 == 4 {
            document.push_str("<!-- m2e-ignore -->\nThis color line stays American.\n\n");
        }
    }
    document
}

/// Benchmark plain dictionary lookup and scanning.
fn bench_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");

    let dictionary = Dictionary::from_config(&WordConfig::default());
    let document = generate_document(100);

    group.bench_function("lookup_single_word", |b| {
        b.iter(|| {
            let result = dictionary.lookup(black_box("Color"));
            black_box(result)
        })
    });

    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("scan_document", |b| {
        b.iter(|| {
            let replacements = dictionary.detect(black_box(&document));
            black_box(replacements)
        })
    });

    group.finish();
}

/// Benchmark the two detectors in isolation.
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    let units = UnitDetector::new(&UnitConfig::default()).unwrap();
    let words = WordDisambiguator::new(&WordConfig::default()).unwrap();
    let document = generate_document(100);

    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("unit_spans", |b| {
        b.iter(|| {
            let matches = units.detect(black_box(&document));
            black_box(matches)
        })
    });

    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("word_spans", |b| {
        b.iter(|| {
            let matches = words.detect(black_box(&document));
            black_box(matches)
        })
    });

    group.finish();
}

/// Benchmark end-to-end conversion.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(30);

    let converter = Converter::new(UnitConfig::default(), WordConfig::default()).unwrap();
    let prose = generate_document(100);
    let markdown = generate_markdown(20);

    group.throughput(Throughput::Bytes(prose.len() as u64));
    group.bench_function("plain_prose", |b| {
        b.iter(|| {
            let output = converter.convert_plain(black_box(&prose), false);
            black_box(output)
        })
    });

    group.throughput(Throughput::Bytes(markdown.len() as u64));
    group.bench_function("markdown_with_segmentation", |b| {
        b.iter(|| {
            let output = converter.convert_to_regional(black_box(&markdown), false);
            black_box(output)
        })
    });

    group.finish();
}

/// Benchmark rule compilation at construction time.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(20);

    group.bench_function("converter_new", |b| {
        b.iter(|| {
            let converter = Converter::new(UnitConfig::default(), WordConfig::default());
            black_box(converter)
        })
    });

    group.finish();
}

/// Conversion throughput across document sizes.
fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(10);

    let converter = Converter::new(UnitConfig::default(), WordConfig::default()).unwrap();

    for sentences in [100, 1000].iter() {
        let document = generate_document(*sentences);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(
            format!("convert_{sentences}_sentences"),
            &document,
            |b, document| {
                b.iter(|| {
                    let output = converter.convert_to_regional(black_box(document), false);
                    black_box(output)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dictionary,
    bench_detection,
    bench_conversion,
    bench_construction,
    bench_scalability
);

criterion_main!(benches);
