// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use vernier_gesture::{GestureRecognizer, PointerId, PointerTracker};

fn bench_pinch_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pinch");

    // A full two finger pinch: press, 60 spreading frames, release.
    group.bench_function("sixty_frames", |b| {
        b.iter(|| {
            let mut tracker = PointerTracker::new();
            let mut recognizer = GestureRecognizer::default();
            let center = Point::new(400.0, 300.0);
            tracker.down(PointerId(1), center - Vec2::new(50.0, 20.0));
            tracker.down(PointerId(2), center + Vec2::new(50.0, 20.0));
            let mut events = 0;
            for frame_index in 0..=60_u32 {
                let spread = 1.0 + f64::from(frame_index) * 0.02;
                let offset = Vec2::new(50.0 * spread, 20.0 * spread);
                tracker.moved(PointerId(1), center - offset);
                tracker.moved(PointerId(2), center + offset);
                let time = Duration::from_millis(u64::from(frame_index) * 16);
                events += recognizer.handle_frame(&mut tracker.frame(time)).len();
            }
            tracker.up(PointerId(1), center);
            tracker.up(PointerId(2), center);
            events += recognizer
                .handle_frame(&mut tracker.frame(Duration::from_millis(1_000)))
                .len();
            black_box(events)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pinch_frames);
criterion_main!(benches);
