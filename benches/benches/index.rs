// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use atlas_index::{Entity, GridIndex};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    /// Uniform in `[-1, 1)`.
    fn next_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

fn gen_uniform(n: usize, seed: u64) -> Vec<Entity<usize>> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|i| Entity::at(i, (rng.next_signed(), rng.next_signed())))
        .collect()
}

/// Entities packed into a few tight clusters, the shape embeddings usually
/// take.
fn gen_clustered(n: usize, clusters: usize, seed: u64) -> Vec<Entity<usize>> {
    let mut rng = Rng::new(seed);
    let centers: Vec<Point> = (0..clusters)
        .map(|_| Point::new(rng.next_signed() * 0.8, rng.next_signed() * 0.8))
        .collect();
    (0..n)
        .map(|i| {
            let c = centers[i % clusters];
            Entity::at(
                i,
                (c.x + rng.next_signed() * 0.05, c.y + rng.next_signed() * 0.05),
            )
        })
        .collect()
}

fn gen_queries(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| Point::new(rng.next_signed() * 1.1, rng.next_signed() * 1.1))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let uniform = gen_uniform(n, 0x5eed);
        let clustered = gen_clustered(n, 16, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("uniform", n), |b| {
            b.iter(|| black_box(GridIndex::build(black_box(&uniform))));
        });
        group.bench_function(BenchmarkId::new("clustered", n), |b| {
            b.iter(|| black_box(GridIndex::build(black_box(&clustered))));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let queries = gen_queries(1_024, 0xface);
    let mut group = c.benchmark_group("grid_query");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let entities = gen_uniform(n, 0x5eed);
        let index = GridIndex::build(&entities);
        let hit_radius = index.cell_size();
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(BenchmarkId::new("neighborhood", n), |b| {
            b.iter(|| {
                let mut found = 0_usize;
                for &q in &queries {
                    found += index.query(black_box(q)).len();
                }
                black_box(found)
            });
        });
        group.bench_function(BenchmarkId::new("visit_within", n), |b| {
            b.iter(|| {
                let mut found = 0_usize;
                for &q in &queries {
                    index.visit_within(black_box(q), hit_radius, |_| found += 1);
                }
                black_box(found)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
