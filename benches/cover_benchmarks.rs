//! Benchmarks for minimal cover computation
//!
//! Inputs are generated so that their size can be scaled: transitive chains
//! (many redundant dependencies) and composite keys (many reducible left-hand
//! sides).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fd_cover::{
    closure, find_all_minimal_covers, find_one_minimal_cover, AttributeSet, DependencySet,
    FdReader, FunctionalDependency,
};

/// `A0 -> A1 -> ... -> An` plus every shortcut `Ai -> Aj`
fn transitive_chain(n: usize) -> DependencySet {
    let mut deps = DependencySet::new();
    for i in 0..n {
        for j in (i + 1)..=n {
            deps.push(FunctionalDependency::new(
                [format!("A{}", i)],
                [format!("A{}", j)],
            ));
        }
    }
    deps
}

/// `K0 .. Kn -> V` where `K0` alone already determines `V` through a helper
fn composite_key(n: usize) -> DependencySet {
    let key: Vec<String> = (0..n).map(|i| format!("K{}", i)).collect();
    let mut deps = DependencySet::new();
    deps.push(FunctionalDependency::new(&key, ["V", "W"]));
    deps.push(FunctionalDependency::new(["K0"], ["H"]));
    deps.push(FunctionalDependency::new(["H"], ["V"]));
    deps
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_fd");
    for n in [8, 16, 32] {
        let text = transitive_chain(n).to_string().replace("; ", "\n");
        group.throughput(Throughput::Elements((n * (n + 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("chain", n), &text, |b, data| {
            b.iter(|| DependencySet::from_fd_string(black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure");
    for n in [8, 16, 32] {
        let deps = transitive_chain(n);
        let start: AttributeSet = ["A0"].into_iter().collect();
        group.bench_with_input(BenchmarkId::new("chain", n), &deps, |b, deps| {
            b.iter(|| closure(black_box(&start), deps));
        });
    }
    group.finish();
}

fn bench_one_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_cover");
    for n in [8, 16, 32] {
        let deps = transitive_chain(n);
        group.throughput(Throughput::Elements(deps.len() as u64));
        group.bench_with_input(BenchmarkId::new("chain", n), &deps, |b, deps| {
            b.iter(|| find_one_minimal_cover(black_box(deps.as_slice())));
        });
    }
    for n in [4, 8, 12] {
        let deps = composite_key(n);
        group.bench_with_input(BenchmarkId::new("composite_key", n), &deps, |b, deps| {
            b.iter(|| find_one_minimal_cover(black_box(deps.as_slice())));
        });
    }
    group.finish();
}

fn bench_all_covers(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_covers");
    group.sample_size(10);
    for n in [3, 4, 5] {
        let deps = transitive_chain(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &deps, |b, deps| {
            b.iter(|| find_all_minimal_covers(black_box(deps.as_slice())));
        });
    }
    for n in [4, 6, 8] {
        let deps = composite_key(n);
        group.bench_with_input(BenchmarkId::new("composite_key", n), &deps, |b, deps| {
            b.iter(|| find_all_minimal_covers(black_box(deps.as_slice())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_closure,
    bench_one_cover,
    bench_all_covers
);
criterion_main!(benches);
