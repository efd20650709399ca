use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use perceptual::{fingerprint_tokens, PerceptualConfig};

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    for size in [100, 1_000, 10_000].iter() {
        let tokens: Vec<String> = (0..*size).map(|i| format!("word{}", i % 997)).collect();
        group.throughput(Throughput::Elements(*size as u64));

        for parallel in [false, true] {
            let cfg = PerceptualConfig::new()
                .with_window_size(3)
                .with_parallel(parallel);
            let label = if parallel { "par" } else { "seq" };
            group.bench_function(format!("tokens_{size}_{label}"), |b| {
                b.iter(|| {
                    fingerprint_tokens(black_box(&tokens), black_box(&cfg)).expect("fingerprint")
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fingerprint);
criterion_main!(benches);
