use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plagiarism_detector::{
    canonicalize, compare_texts, compare_with_config, CanonicalizeConfig, CompareConfig,
};

const VOCAB: &[&str] = &[
    "the", "filter", "counts", "every", "window", "of", "text", "and", "reports", "matches",
    "between", "two", "documents", "quickly", "while", "memory", "stays", "small", "enough",
    "for", "large", "corpora",
];

/// Deterministic pseudo-random prose.
fn synthetic_text(words: usize, seed: u64) -> String {
    let mut state = seed;
    let mut out = Vec::with_capacity(words);
    for _ in 0..words {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        out.push(VOCAB[(state >> 33) as usize % VOCAB.len()]);
    }
    out.join(" ")
}

fn canonical_bench(c: &mut Criterion) {
    let text = synthetic_text(20_000, 7);
    let cfg = CanonicalizeConfig::default();
    c.bench_function("canonicalize_20k_words", |b| {
        b.iter(|| black_box(canonicalize(black_box(&text), &cfg)));
    });
}

fn compare_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for &words in &[1_000usize, 10_000, 50_000] {
        let reference = synthetic_text(words, 1);
        let candidate = synthetic_text(words / 2, 2);
        let reference: Vec<&str> = reference.split(' ').collect();
        let candidate: Vec<&str> = candidate.split(' ').collect();

        for parallel in [false, true] {
            let cfg = CompareConfig::new()
                .with_num_items(words)
                .with_window_size(3)
                .with_parallel(parallel)
                .with_record_matches(false);
            let label = if parallel { "par" } else { "seq" };
            group.bench_with_input(BenchmarkId::new(label, words), &cfg, |b, cfg| {
                b.iter(|| black_box(compare_with_config(&reference, &candidate, cfg)));
            });
        }
    }
    group.finish();
}

fn end_to_end_bench(c: &mut Criterion) {
    let reference = synthetic_text(10_000, 3);
    let candidate = synthetic_text(5_000, 4);
    let canonical_cfg = CanonicalizeConfig::default();
    let compare_cfg = CompareConfig::new().with_window_size(3);
    c.bench_function("compare_texts_10k_words", |b| {
        b.iter(|| {
            black_box(compare_texts(
                black_box(&reference),
                black_box(&candidate),
                &canonical_cfg,
                &compare_cfg,
            ))
        });
    });
}

criterion_group!(benches, canonical_bench, compare_bench, end_to_end_bench);
criterion_main!(benches);
