//! Ala Router Benchmarks
//!
//! Criterion benchmarks for route insertion and matching.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use ala_router_lib::data_structures::route_trie::RouteTrie;

/// Builds a trie with `size` resources, each with literal, parameter and wildcard routes.
fn build_trie(size: usize) -> RouteTrie<usize> {
    let mut trie = RouteTrie::new();
    for i in 0..size {
        trie.insert_route(&format!("/api/v1/resource{i}/list"), i).unwrap();
        trie.insert_route(&format!("/api/v1/resource{i}/:id:[0-9]+"), i).unwrap();
        trie.insert_route(&format!("/api/v1/resource{i}/:id:[0-9]+/*"), i).unwrap();
    }
    trie
}

/// Benchmark the route trie
fn bench_route_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64 * 3));
        group.bench_with_input(BenchmarkId::new("insert", size), size, |b, &size| {
            b.iter(|| black_box(build_trie(size)));
        });
    }

    for size in [10, 100, 1000].iter() {
        let mut trie = build_trie(*size);
        let last = size - 1;
        let literal = format!("/api/v1/resource{last}/list");
        let parameter = format!("/api/v1/resource{last}/12345");
        let wildcard = format!("/api/v1/resource{last}/12345/a/b/c");
        let miss = format!("/api/v1/resource{last}/abc");

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("match_literal", size), &literal, |b, path| {
            b.iter(|| trie.matches(black_box(path)));
        });
        group.bench_with_input(BenchmarkId::new("match_parameter", size), &parameter, |b, path| {
            b.iter(|| trie.matches(black_box(path)));
        });
        group.bench_with_input(BenchmarkId::new("match_wildcard", size), &wildcard, |b, path| {
            b.iter(|| trie.matches(black_box(path)));
        });
        group.bench_with_input(BenchmarkId::new("lookup_miss", size), &miss, |b, path| {
            b.iter(|| trie.lookup(black_box(path)).is_some());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_route_trie);
criterion_main!(benches);
