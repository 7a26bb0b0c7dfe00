//! Criterion benchmarks for the lexis compiler.
//!
//! Covers the hot paths of a compile:
//! - Donor pipeline derivation
//! - Boundary joining
//! - Full compilation of a generated lexicon
//! - Translation

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexis::etymology::{derive, donor};
use lexis::lexicon::{CompiledLexicon, LexiconConfig, LexiconEntry};
use lexis::phonology::BoundaryJoiner;

const LATIN: [&str; 8] = [
    "dominus", "aquila", "caput", "mittere", "caelum", "civis", "terra", "porta",
];

/// Generate a lexicon of `count` roots plus as many two-part compounds.
fn generate_lexicon(count: usize) -> LexiconConfig {
    let mut config = LexiconConfig::new();
    for i in 0..count {
        let source = LATIN[i % LATIN.len()];
        config
            .insert(format!("root{i}"), LexiconEntry::root(source, "latin"))
            .unwrap();
    }
    // compounds refer to later keys so resolution needs several passes
    for i in 0..count {
        let left = format!("root{}", (i * 7) % count);
        let right = format!("compound{}", i + 1);
        let entry = if i + 1 < count {
            LexiconEntry::complex([left.as_str(), right.as_str()])
        } else {
            LexiconEntry::complex([left.as_str(), "root0"])
        };
        config.insert(format!("compound{i}"), entry).unwrap();
    }
    config
}

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    let latin = donor::latin().unwrap();

    group.throughput(Throughput::Elements(LATIN.len() as u64));
    group.bench_function("latin_pipeline", |b| {
        b.iter(|| {
            for source in LATIN {
                black_box(derive(black_box(source), &latin));
            }
        })
    });

    group.finish();
}

fn bench_joining(c: &mut Criterion) {
    let mut group = c.benchmark_group("sandhi");
    let joiner = BoundaryJoiner::default();
    let parts = ["dis", "ceba", "a", "lan", "po", "kat", "bo"];

    group.bench_function("join_all", |b| {
        b.iter(|| black_box(joiner.join_all(black_box(&parts))))
    });

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    group.sample_size(20);

    for size in [100, 500] {
        let config = generate_lexicon(size);
        group.throughput(Throughput::Elements(config.len() as u64));
        group.bench_function(format!("compile_{size}"), |b| {
            b.iter(|| black_box(CompiledLexicon::compile_default(black_box(&config)).unwrap()))
        });
    }

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let lexicon = CompiledLexicon::compile_default(&generate_lexicon(200)).unwrap();
    let translator = lexicon.translator().unwrap();
    let text = (0..200)
        .map(|i| format!("root{i} and compound{i}"))
        .collect::<Vec<_>>()
        .join(" ");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("translate_text", |b| {
        b.iter(|| black_box(translator.translate(black_box(&text))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_derivation,
    bench_joining,
    bench_compile,
    bench_translate
);
criterion_main!(benches);
