// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot item geometry.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Insets, Point, Rect, Size};
use vernier_transform::Axis;

use crate::anchor::Anchor;

/// A text label attached to an item: its pixel size and how it is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    /// Measured label size in screen pixels.
    pub size: Size,
    /// Anchor of the label box on the item's reference point.
    pub anchor: Anchor,
}

impl Label {
    /// Creates a label description.
    #[must_use]
    pub fn new(size: Size, anchor: Anchor) -> Self {
        Self { size, anchor }
    }
}

/// A polyline in raw coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    points: Vec<Point>,
    width: f64,
    bounds: Option<Rect>,
    sorted_by_x: bool,
}

impl Line {
    /// Creates a line of stroke `width` screen pixels through `points`.
    #[must_use]
    pub fn new(points: Vec<Point>, width: f64) -> Self {
        let bounds = points
            .iter()
            .filter(|p| p.is_finite())
            .fold(None, |acc: Option<Rect>, p| {
                Some(acc.map_or_else(|| Rect::from_points(*p, *p), |r| r.union_pt(*p)))
            });
        let sorted_by_x = points.windows(2).all(|w| w[0].x <= w[1].x);
        Self {
            points,
            width,
            bounds,
            sorted_by_x,
        }
    }

    /// The points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Stroke width in screen pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Raw bounding box of the finite points; `None` if there are none.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Indices of the points needed to draw the line inside `viewport_raw`.
    ///
    /// For a line whose x coordinates are non‑decreasing, this is the points
    /// within the viewport's horizontal span plus one neighbor on each side,
    /// so the segments entering and leaving the window are drawn. Otherwise
    /// it is every point.
    #[must_use]
    pub fn visible_index_range(&self, viewport_raw: Rect) -> Range<usize> {
        let len = self.points.len();
        if !self.sorted_by_x {
            return 0..len;
        }
        let (lo, hi) = (viewport_raw.min_x(), viewport_raw.max_x());
        let first_inside = self.points.partition_point(|p| p.x < lo);
        let past_inside = self.points.partition_point(|p| p.x <= hi);
        let begin = first_inside.saturating_sub(1);
        let end = (past_inside + 1).min(len);
        if begin >= end { 0..0 } else { begin..end }
    }
}

/// A marker at one raw position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Raw position.
    pub position: Point,
    /// Marker size in screen pixels, centered on the position.
    pub size: Size,
    /// Optional label anchored at the position.
    pub label: Option<Label>,
}

impl Marker {
    /// Creates an unlabeled marker.
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            label: None,
        }
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }
}

/// Fixed full‑width or full‑height lines at raw values along one axis, such
/// as reference levels.
///
/// `axis` is the axis the values lie on: [`Axis::Y`] marks are horizontal lines.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkSet {
    axis: Axis,
    values: Vec<f64>,
    /// Stroke width in screen pixels.
    pub line_width: f64,
    /// Optional label anchored where each line crosses the plot edge.
    pub label: Option<Label>,
}

impl MarkSet {
    /// Creates unlabeled marks at `values`; non‑finite values are dropped.
    #[must_use]
    pub fn new(axis: Axis, values: impl IntoIterator<Item = f64>, line_width: f64) -> Self {
        let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        values.sort_by(f64::total_cmp);
        Self {
            axis,
            values,
            line_width,
            label: None,
        }
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Axis the values lie on.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The values, ascending.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Indices of the values inside the viewport span along the axis, widened
    /// by `label_buffer` raw units on both sides.
    #[must_use]
    pub fn visible_index_range(&self, viewport_raw: Rect, label_buffer: f64) -> Range<usize> {
        let (a, b) = self.axis.span(viewport_raw);
        let buffer = label_buffer.max(0.0);
        let (lo, hi) = (a.min(b) - buffer, a.max(b) + buffer);
        let begin = self.values.partition_point(|v| *v < lo);
        let end = self.values.partition_point(|v| *v <= hi);
        begin..end.max(begin)
    }
}

/// A grid of tick lines along one axis.
///
/// The positions are not stored: every redraw chooses them from a tick
/// hierarchy for the visible range, at most `max_ticks` of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSet {
    /// Axis the tick values lie on.
    pub axis: Axis,
    /// Label budget for the visible range.
    pub max_ticks: usize,
    /// Stroke width in screen pixels.
    pub line_width: f64,
    /// Optional label anchored on each line.
    pub label: Option<Label>,
}

impl TickSet {
    /// Creates an unlabeled tick grid.
    #[must_use]
    pub fn new(axis: Axis, max_ticks: usize, line_width: f64) -> Self {
        Self {
            axis,
            max_ticks,
            line_width,
            label: None,
        }
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Label length along the axis in screen pixels, used as the selection buffer.
    #[must_use]
    pub fn label_px(&self) -> f64 {
        self.label.map_or(0.0, |label| self.axis.of_size(label.size))
    }
}

/// Anything that can be drawn in a plot.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotItem {
    /// A polyline.
    Line(Line),
    /// A single marker.
    Point(Marker),
    /// Tick lines chosen per redraw.
    TickSet(TickSet),
    /// Lines at fixed values.
    MarkSet(MarkSet),
}

impl PlotItem {
    /// Raw bounding box; `None` if the item has no finite geometry.
    ///
    /// Mark and tick lines are unbounded along their line; tick sets are
    /// unbounded on both axes since they follow the viewport.
    #[must_use]
    pub fn raw_bounds(&self) -> Option<Rect> {
        match self {
            Self::Line(line) => line.bounds(),
            Self::Point(marker) => marker
                .position
                .is_finite()
                .then(|| Rect::from_points(marker.position, marker.position)),
            Self::TickSet(_) => Some(Rect::new(
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::INFINITY,
            )),
            Self::MarkSet(marks) => {
                let (first, last) = (marks.values.first()?, marks.values.last()?);
                let unbounded = Rect::new(
                    f64::NEG_INFINITY,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    f64::INFINITY,
                );
                Some(marks.axis.with_span(unbounded, *first, *last))
            }
        }
    }

    /// Screen pixels the item extends beyond its raw bounding box on each side.
    #[must_use]
    pub fn extra_extent(&self) -> Insets {
        match self {
            Self::Line(line) => Insets::uniform(0.5 * line.width),
            Self::Point(marker) => {
                let body = Insets::uniform_xy(0.5 * marker.size.width, 0.5 * marker.size.height);
                marker.label.map_or(body, |label| {
                    max_insets(body, label.anchor.extent(label.size, 0.0, 0.0))
                })
            }
            Self::TickSet(ticks) => line_extent(ticks.axis, ticks.line_width, ticks.label),
            Self::MarkSet(marks) => line_extent(marks.axis, marks.line_width, marks.label),
        }
    }
}

impl From<Line> for PlotItem {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Marker> for PlotItem {
    fn from(value: Marker) -> Self {
        Self::Point(value)
    }
}

impl From<TickSet> for PlotItem {
    fn from(value: TickSet) -> Self {
        Self::TickSet(value)
    }
}

impl From<MarkSet> for PlotItem {
    fn from(value: MarkSet) -> Self {
        Self::MarkSet(value)
    }
}

/// Extent of a line across the plot at a value on `axis`, with an optional label on it.
fn line_extent(axis: Axis, line_width: f64, label: Option<Label>) -> Insets {
    let stroke = Insets::uniform(0.5 * line_width);
    label.map_or(stroke, |label| {
        let (horizontal, vertical) = match axis {
            Axis::X => (0.0, line_width),
            Axis::Y => (line_width, 0.0),
        };
        max_insets(stroke, label.anchor.extent(label.size, horizontal, vertical))
    })
}

fn max_insets(a: Insets, b: Insets) -> Insets {
    Insets::new(a.x0.max(b.x0), a.y0.max(b.y0), a.x1.max(b.x1), a.y1.max(b.y1))
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Insets, Point, Rect, Size};
    use vernier_transform::Axis;

    use super::{Label, Line, MarkSet, Marker, PlotItem, TickSet};
    use crate::anchor::Anchor;

    fn ramp(n: u32) -> Line {
        Line::new(
            (0..n).map(|i| Point::new(f64::from(i), f64::from(i * i))).collect(),
            2.0,
        )
    }

    #[test]
    fn line_bounds_skip_non_finite_points() {
        let line = Line::new(
            vec![
                Point::new(1.0, 5.0),
                Point::new(f64::NAN, 0.0),
                Point::new(-2.0, 3.0),
            ],
            1.0,
        );
        assert_eq!(line.bounds(), Some(Rect::new(-2.0, 3.0, 1.0, 5.0)));
        assert_eq!(Line::new(Vec::new(), 1.0).bounds(), None);
    }

    #[test]
    fn visible_range_adds_one_neighbor_each_side() {
        let line = ramp(10);
        assert_eq!(line.visible_index_range(Rect::new(2.5, 100.0, 5.5, 0.0)), 2..7);
        assert_eq!(line.visible_index_range(Rect::new(3.0, 0.0, 5.0, 1.0)), 2..7);
        assert_eq!(line.visible_index_range(Rect::new(-5.0, 0.0, 0.5, 1.0)), 0..2);
        assert_eq!(line.visible_index_range(Rect::new(8.5, 0.0, 20.0, 1.0)), 8..10);
    }

    #[test]
    fn visible_range_outside_the_line() {
        let line = ramp(10);
        // Entirely to the right: only the last point is a neighbor.
        assert_eq!(line.visible_index_range(Rect::new(20.0, 0.0, 30.0, 1.0)), 9..10);
        // Between two samples: both are needed for the segment crossing the window.
        assert_eq!(line.visible_index_range(Rect::new(4.2, 0.0, 4.8, 1.0)), 4..6);
    }

    #[test]
    fn unsorted_lines_are_drawn_whole() {
        let line = Line::new(vec![Point::new(3.0, 0.0), Point::new(1.0, 0.0)], 1.0);
        assert_eq!(line.visible_index_range(Rect::new(0.0, 0.0, 0.5, 1.0)), 0..2);
    }

    #[test]
    fn marks_are_unbounded_along_their_line() {
        let h = PlotItem::from(MarkSet::new(Axis::Y, [3.0, -1.0, f64::NAN], 2.0));
        let b = h.raw_bounds().unwrap();
        assert_eq!((b.y0, b.y1), (-1.0, 3.0));
        assert!(b.x0.is_infinite() && b.x1.is_infinite(), "marks span the plot: {b:?}");
        assert_eq!(PlotItem::from(MarkSet::new(Axis::X, [f64::NAN], 1.0)).raw_bounds(), None);
        let ticks = PlotItem::from(TickSet::new(Axis::X, 5, 1.0)).raw_bounds().unwrap();
        assert!(ticks.width().is_infinite() && ticks.height().is_infinite(), "{ticks:?}");
    }

    #[test]
    fn mark_range_follows_the_axis_with_buffer() {
        let marks = MarkSet::new(Axis::Y, [0.0, 1.0, 2.0, 3.0, 4.0], 1.0);
        // y up viewport: the span is stored inverted.
        let vp = Rect::new(-5.0, 2.5, 5.0, 0.5);
        assert_eq!(marks.visible_index_range(vp, 0.0), 1..3);
        assert_eq!(marks.visible_index_range(vp, 0.5), 0..4);
        assert_eq!(marks.visible_index_range(Rect::new(0.0, 10.0, 1.0, 9.0), 0.0), 5..5);
    }

    #[test]
    fn extents_combine_body_and_label() {
        let marker = Marker::new(Point::ZERO, Size::new(6.0, 6.0))
            .with_label(Label::new(Size::new(20.0, 10.0), Anchor::SouthWest));
        assert_eq!(
            PlotItem::from(marker).extra_extent(),
            Insets::new(3.0, 10.0, 20.0, 3.0)
        );

        let marks = MarkSet::new(Axis::Y, [1.0], 2.0)
            .with_label(Label::new(Size::new(30.0, 8.0), Anchor::South));
        assert_eq!(
            PlotItem::from(marks).extra_extent(),
            Insets::new(15.0, 9.0, 15.0, 1.0)
        );
        assert_eq!(PlotItem::from(ramp(3)).extra_extent(), Insets::uniform(1.0));
    }

    #[test]
    fn tick_label_buffer_uses_the_axis_length() {
        let label = Label::new(Size::new(40.0, 12.0), Anchor::East);
        assert_eq!(TickSet::new(Axis::X, 5, 1.0).with_label(label).label_px(), 40.0);
        assert_eq!(TickSet::new(Axis::Y, 5, 1.0).with_label(label).label_px(), 12.0);
        assert_eq!(TickSet::new(Axis::Y, 5, 1.0).label_px(), 0.0);
    }
}
