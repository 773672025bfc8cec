// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tether_control::{Control, ControlConfig, HoverIntent, Region};

// Pointer wiggling between trigger and overlay: every leave schedules, every enter cancels.
fn bench_hover_intent(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_intent");
    group.bench_function("enter_leave_1k", |b| {
        b.iter(|| {
            let mut h = HoverIntent::new();
            let mut now = 0_u64;
            for i in 0..1_000 {
                let region = if i % 2 == 0 {
                    Region::Trigger
                } else {
                    Region::Overlay
                };
                h.enter(region);
                now += 16;
                h.leave(region, now, 200);
                black_box(h.poll(now));
            }
            black_box(h.pending())
        });
    });
    group.bench_function("control_hover_open_close", |b| {
        b.iter_batched(
            || Control::<(), _>::headless(ControlConfig::hover(150)),
            |mut tip| {
                tip.pointer_enter(Region::Trigger);
                tip.pointer_leave(Region::Trigger, 0);
                black_box(tip.poll(150));
                tip
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_hover_intent);
criterion_main!(benches);
