// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use atlas_hover::{Atlas, AtlasConfig, HoverResolver};
use atlas_index::{Entity, GridIndex};
use atlas_view2d::{Centering, Placement};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

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
    fn next_signed(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64) * 2.0 - 1.0
    }
}

fn gen_entities(n: usize, seed: u64) -> Vec<Entity<usize>> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|i| Entity::at(i, (rng.next_signed(), rng.next_signed())))
        .collect()
}

/// A pointer path sweeping across the data extent, one sample per frame.
fn pointer_path(frames: usize) -> Vec<Point> {
    (0..frames)
        .map(|i| {
            let t = i as f64 / frames as f64;
            Point::new(t * 2.0 - 1.0, (t * 12.0).sin() * 0.8)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let path = pointer_path(256);
    let placement = Placement::new(AtlasConfig::DEFAULT_ATLAS_SCALE, Centering::None);
    let mut group = c.benchmark_group("hover_resolve");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let entities = gen_entities(n, 0x5eed);
        let index = GridIndex::build(&entities);
        // Scale the hit radius with density, like a renderer shrinking nodes.
        let node_scale = 1.0 / (n as f64).sqrt();
        let hit_radius = AtlasConfig::default().with_node_scale(node_scale).hit_radius();
        group.throughput(Throughput::Elements(path.len() as u64));
        group.bench_function(BenchmarkId::new("sweep", n), |b| {
            let mut resolver = HoverResolver::new();
            b.iter(|| {
                let mut changes = 0_usize;
                for &p in &path {
                    resolver.resolve(
                        &entities,
                        &index,
                        &placement,
                        Some(black_box(p)),
                        hit_radius,
                        |_, _| changes += 1,
                    );
                }
                black_box(changes)
            });
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("atlas_tick");
    for &n in &[1_000_usize, 10_000] {
        let entities: Arc<[Entity<usize>]> = Arc::from(gen_entities(n, 0x5eed));
        group.bench_function(BenchmarkId::new("steady", n), |b| {
            let config = AtlasConfig::default().with_initial_zoom(0.8);
            let mut atlas = Atlas::new(config, Size::new(800.0, 600.0)).unwrap();
            atlas.pointer_moved(Point::new(400.0, 300.0));
            b.iter(|| black_box(atlas.tick(&entities, |_, _| {})));
        });
        group.bench_function(BenchmarkId::new("rebuild", n), |b| {
            let config = AtlasConfig::default().with_initial_zoom(0.8);
            let mut atlas = Atlas::new(config, Size::new(800.0, 600.0)).unwrap();
            atlas.pointer_moved(Point::new(400.0, 300.0));
            b.iter(|| {
                let fresh: Arc<[Entity<usize>]> = Arc::from(&entities[..]);
                black_box(atlas.tick(&fresh, |_, _| {}))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_tick);
criterion_main!(benches);
