// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: ray/box slab test and box merge
//!
//! Builds a square grid of unit boxes in the z = 0 plane and fires one ray
//! per box down the z axis, plus a batch of rays that miss. Grid sides
//! (8, 32, 128) give an order-of-magnitude progression in box count.
//!
//! Throughput "elements" are boxes tested (or merged).
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;

use lumen_geom::{Bounds3, Bounds3f};
use lumen_math::{Point3, Vec3};

fn build_grid(side: u16) -> Vec<Bounds3f> {
    let mut boxes = Vec::with_capacity(usize::from(side) * usize::from(side));
    for i in 0..side {
        for j in 0..side {
            let (x, y) = (f32::from(i), f32::from(j));
            boxes.push(Bounds3::new(Point3::new(x, y, 0.0), Point3::new(x + 1.0, y + 1.0, 1.0)));
        }
    }
    boxes
}

fn bench_slab(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds_slab");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5));
    let down = Vec3::new(0.0_f32, 0.0, -1.0);
    for &side in &[8_u16, 32, 128] {
        let boxes = build_grid(side);
        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));
        group.bench_with_input(BenchmarkId::new("hit", side), &boxes, |b, boxes| {
            b.iter(|| {
                let mut hits = 0_u32;
                for bx in boxes {
                    let mid = bx.lerp(&Point3::new(0.5, 0.5, 0.0));
                    let origin = Point3::new(mid.x(), mid.y(), 5.0);
                    if bx.intersect_ray(black_box(&origin), &down, 10.0).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", side), &boxes, |b, boxes| {
            let origin = Point3::new(-1.0_f32, -1.0, 5.0);
            b.iter(|| {
                let misses = boxes
                    .iter()
                    .filter(|bx| bx.intersect_ray(black_box(&origin), &down, 10.0).is_none())
                    .count();
                black_box(misses)
            });
        });
        group.bench_with_input(BenchmarkId::new("merge", side), &boxes, |b, boxes| {
            b.iter(|| {
                let all = boxes.iter().fold(Bounds3f::empty(), |acc, bx| acc.merge(black_box(bx)));
                black_box(all)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_slab);
criterion_main!(benches);
