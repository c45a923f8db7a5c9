// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vernier_items` crate.
//!
//! Culling at the viewport boundary and global index bookkeeping across groups.

use kurbo::{Point, Rect, Size};
use vernier_items::{Anchor, Label, Line, MarkSet, Marker, PlotItem, PlotItems, TickSet};
use vernier_transform::{Axis, ScreenRect, Transform};

/// 200x100 pixels showing x in 0..20 and y in 0..10 (y up): 10 px per raw unit.
fn transform() -> Transform {
    Transform::new(
        ScreenRect::new(0, 0, 200, 100),
        Rect::new(0.0, 10.0, 20.0, 0.0),
    )
}

fn marker_at(x: f64, y: f64, px: f64) -> PlotItem {
    Marker::new(Point::new(x, y), Size::new(px, px)).into()
}

#[test]
fn touching_the_viewport_edge_counts_as_visible() {
    let t = transform();
    let mut items = PlotItems::new();
    let g = items.add_group();
    // Inflated boxes end exactly on the left, top, right, and bottom screen edges.
    items.push(g, marker_at(-0.5, 5.0, 10.0));
    items.push(g, marker_at(10.0, 10.5, 10.0));
    items.push(g, marker_at(20.5, 5.0, 10.0));
    items.push(g, marker_at(10.0, -0.5, 10.0));
    // A little further out on the left and right.
    items.push(g, marker_at(-0.625, 5.0, 10.0));
    items.push(g, marker_at(20.625, 5.0, 10.0));

    let visible: Vec<usize> = items.visible(&t).map(|v| v.global_index).collect();
    assert_eq!(visible, [0, 1, 2, 3]);
}

#[test]
fn labels_keep_offscreen_points_visible() {
    let t = transform();
    let mut items = PlotItems::new();
    let g = items.add_group();
    // 3 raw units (30 px) right of the screen, label reaching 40 px to the left.
    let label = Label::new(Size::new(40.0, 12.0), Anchor::East);
    items.push(g, Marker::new(Point::new(23.0, 5.0), Size::new(2.0, 2.0)).with_label(label));
    items.push(g, Marker::new(Point::new(23.0, 5.0), Size::new(2.0, 2.0)));
    let visible: Vec<usize> = items.visible(&t).map(|v| v.global_index).collect();
    assert_eq!(visible, [0]);
}

#[test]
fn global_indices_are_stable_across_culling() {
    let t = transform();
    let mut items = PlotItems::new();
    let lines = items.add_group();
    let points = items.add_group();
    let grid = items.add_group();

    items.push(lines, Line::new(vec![Point::new(-50.0, 0.0), Point::new(-40.0, 1.0)], 1.0));
    items.push(lines, Line::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)], 1.0));
    for x in [-10.0, 3.0, 30.0, 7.0] {
        items.push(points, marker_at(x, 2.0, 4.0));
    }
    items.push(grid, TickSet::new(Axis::X, 5, 1.0));
    items.push(grid, MarkSet::new(Axis::Y, [4.0, 40.0], 1.0));
    items.push(grid, MarkSet::new(Axis::Y, [40.0], 1.0));

    let visible: Vec<_> = items.visible(&t).collect();
    let globals: Vec<usize> = visible.iter().map(|v| v.global_index).collect();
    assert_eq!(globals, [1, 3, 5, 6, 7]);

    for v in &visible {
        let (group, local, item) = items.get(v.global_index).unwrap();
        assert_eq!((group, local), (v.group, v.local_index));
        assert_eq!(item, v.item);
    }
}

#[test]
fn line_slices_cover_the_window() {
    let t = transform();
    let samples: Vec<Point> = (0..=400)
        .map(|i| Point::new(f64::from(i) * 0.1 - 10.0, 5.0))
        .collect();
    let line = Line::new(samples, 1.0);
    let range = line.visible_index_range(t.viewport_raw());
    let drawn = &line.points()[range];
    assert!(drawn.first().unwrap().x < 0.0, "segment entering the window");
    assert!(drawn.last().unwrap().x > 20.0, "segment leaving the window");
    assert!(drawn.len() <= 203, "only the window plus one neighbor each side");
}
