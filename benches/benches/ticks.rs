// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vernier_ticks::{DeltaTickLevels, ExplicitTickLevels, TickLevels, TickSelector};

/// `levels` levels of `base * 2^l` evenly spaced values over `0..1000`, coarse first.
fn explicit_levels(levels: u32, base: u32) -> ExplicitTickLevels {
    ExplicitTickLevels::new((0..levels).map(|l| {
        let n = base << l;
        (0..=n)
            .map(|i| 1000.0 * f64::from(i) / f64::from(n))
            .collect::<Vec<_>>()
    }))
}

fn bench_explicit_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks/explicit");

    // One selection costs a binary search per level plus two for the slice.
    for levels in [4u32, 8, 12] {
        let hierarchy = explicit_levels(levels, 10);
        let finest = hierarchy.level(hierarchy.level_count() - 1).map_or(0, <[f64]>::len);
        group.throughput(Throughput::Elements(finest as u64));

        group.bench_with_input(
            BenchmarkId::new("ticks_range", levels),
            &hierarchy,
            |b, hierarchy| {
                let mut start = 0.0;
                b.iter(|| {
                    // Pan a 37 unit window across the axis.
                    start = (start + 0.7) % 900.0;
                    black_box(hierarchy.ticks_range(start, start + 37.0, 12, 1.5))
                });
            },
        );
    }

    group.finish();
}

fn bench_delta_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks/delta");
    let deltas: Vec<f64> = (-6..=6)
        .flat_map(|e| [1.0, 2.0, 5.0].map(|m| m * 10f64.powi(e)))
        .collect();
    let hierarchy = DeltaTickLevels::new(deltas);

    for span in [0.01, 1.0, 1e4] {
        group.bench_with_input(BenchmarkId::new("ticks_range", span), &span, |b, &span| {
            b.iter(|| black_box(hierarchy.ticks_range(-span, span, 10, span * 0.05)));
        });
    }

    group.finish();
}

fn bench_memoized(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks/memoized");
    let hierarchy = explicit_levels(10, 10);

    // Redraws without viewport changes should be answered from the cache.
    group.bench_function("unchanged_viewport", |b| {
        let mut selector = TickSelector::new(&hierarchy);
        b.iter(|| black_box(selector.select(black_box(120.0), 180.0, 12, 1.5)));
    });

    group.bench_function("changing_viewport", |b| {
        let mut selector = TickSelector::new(&hierarchy);
        let mut start = 0.0;
        b.iter(|| {
            start = (start + 0.7) % 900.0;
            black_box(selector.select(start, start + 60.0, 12, 1.5))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_explicit_select, bench_delta_select, bench_memoized);
criterion_main!(benches);
