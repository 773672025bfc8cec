// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use tether_placement::{OverlaySpec, Placement, place, place_with};

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
}

// Small triggers scattered over the container, like points on a chart.
fn gen_triggers(count: usize, container: Rect, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = container.x0 + rng.next_f64() * (container.width() - 8.0);
        let y = container.y0 + rng.next_f64() * (container.height() - 8.0);
        out.push(Rect::new(x, y, x + 8.0, y + 8.0));
    }
    out
}

fn bench_place(c: &mut Criterion) {
    let container = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let spec = OverlaySpec::new(230.0, 180.0)
        .with_offset(10.0)
        .with_padding(20.0);
    let triggers = gen_triggers(10_000, container, 0x5eed);

    let mut group = c.benchmark_group("placement");
    group.throughput(Throughput::Elements(triggers.len() as u64));
    group.bench_function("place_scatter_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for t in &triggers {
                acc += place(black_box(*t), container, &spec).x();
            }
            black_box(acc)
        });
    });
    group.bench_function("place_with_held_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for t in &triggers {
                acc += place_with(Placement::TOP_CENTER, black_box(*t), container, &spec).y();
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
