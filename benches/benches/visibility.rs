// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use vernier_items::{Anchor, Label, Line, Marker, PlotItems};
use vernier_transform::{ScreenRect, Transform};

/// `n` labeled markers along a diagonal over `0..n`, split into `groups` groups.
fn markers(n: u32, groups: u32) -> PlotItems {
    let mut items = PlotItems::new();
    let ids: Vec<_> = (0..groups).map(|_| items.add_group()).collect();
    let label = Label::new(Size::new(30.0, 12.0), Anchor::SouthWest);
    for i in 0..n {
        let p = Point::new(f64::from(i), f64::from(i) * 0.5);
        let marker = Marker::new(p, Size::new(6.0, 6.0)).with_label(label);
        items.push(ids[(i % groups) as usize], marker);
    }
    items
}

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/markers");
    let screen = ScreenRect::new(0, 0, 1920, 1080);

    // Culling is linear in the item count; the fraction on screen only
    // changes how many results are produced.
    for n in [1_000u32, 10_000, 100_000] {
        let items = markers(n, 8);
        group.throughput(Throughput::Elements(u64::from(n)));

        let narrow = Transform::new(screen, Rect::new(100.0, 80.0, 200.0, 30.0));
        group.bench_with_input(BenchmarkId::new("narrow_view", n), &items, |b, items| {
            b.iter(|| black_box(items.visible(&narrow).count()));
        });

        let wide = Transform::new(screen, Rect::new(0.0, f64::from(n), f64::from(n), 0.0));
        group.bench_with_input(BenchmarkId::new("everything_visible", n), &items, |b, items| {
            b.iter(|| black_box(items.visible(&wide).count()));
        });
    }

    group.finish();
}

fn bench_line_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/line_range");

    for n in [1_000u32, 100_000, 1_000_000] {
        let line = Line::new(
            (0..n)
                .map(|i| Point::new(f64::from(i) * 0.01, (f64::from(i) * 0.01).sin()))
                .collect(),
            1.5,
        );
        group.bench_with_input(BenchmarkId::new("visible_index_range", n), &line, |b, line| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 0.37) % 10.0;
                black_box(line.visible_index_range(Rect::new(x, 1.0, x + 2.0, -1.0)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cull, bench_line_range);
criterion_main!(benches);
