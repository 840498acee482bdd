//! Matcher micro-benchmarks.
//!
//! Run with: cargo bench --bench matchers

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use seekbench::types::Algorithm;

fn make_hay(repeats: usize) -> String {
    let chunk = "Алгоритм пошуку порівнює шаблон з текстом. The quick brown fox jumps. ";
    chunk.repeat(repeats)
}

fn bench_pattern_classes(c: &mut Criterion) {
    let mut hay = make_hay(2_000);
    hay.push_str("результат дослідження підтверджено");
    let text: Vec<char> = hay.chars().collect();

    let cases = [
        ("short", "результат"),
        ("long", "результат дослідження підтверджено"),
        ("absent", "Теорема Піфагора встановлює співвідношення"),
    ];

    for (name, pattern) in cases {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut group = c.benchmark_group(format!("chars/{name}"));
        group.throughput(Throughput::Elements(text.len() as u64));

        for alg in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::from_parameter(alg), &pattern, |b, p| {
                b.iter(|| alg.find(black_box(text.as_slice()), black_box(p.as_slice())));
            });
        }
        group.finish();
    }
}

fn bench_bytes_by_size(c: &mut Criterion) {
    let sizes: &[usize] = &[10, 100, 1_000];
    let needle = b"jumps over";
    let mut group = c.benchmark_group("bytes/absent");

    for &size in sizes {
        let hay = make_hay(size);
        group.throughput(Throughput::Bytes(hay.len() as u64));

        for alg in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.name(), size), &hay, |b, hay| {
                b.iter(|| alg.find(black_box(hay.as_bytes()), black_box(needle.as_slice())));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pattern_classes, bench_bytes_by_size);
criterion_main!(benches);
