// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per‑redraw culling of items against the screen viewport.

use kurbo::{Insets, Rect};
use vernier_transform::Transform;

use crate::{GroupId, PlotItem};

/// An item that survived culling for one redraw.
#[derive(Clone, Copy, Debug)]
pub struct VisibleItem<'a> {
    /// The item.
    pub item: &'a PlotItem,
    /// Inflated screen bounding box that overlapped the viewport.
    pub screen_bounds: Rect,
    /// Group the item belongs to.
    pub group: GroupId,
    /// Index within its group.
    pub local_index: usize,
    /// Index across all groups: the sizes of the preceding groups plus `local_index`.
    pub global_index: usize,
}

/// Maps `raw` to screen space and grows it by `extent` pixels per side.
#[must_use]
pub fn screen_bounds(transform: &Transform, raw: Rect, extent: Insets) -> Rect {
    transform.to_screen_rect(raw) + extent
}

/// Rectangle overlap that counts shared edges and corners.
///
/// Both rects must be normalized. Any NaN edge makes the test fail.
#[must_use]
pub fn overlaps_inclusive(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// The item's inflated screen bounds if they touch the transform's screen viewport.
#[must_use]
pub fn visible_bounds(item: &PlotItem, transform: &Transform) -> Option<Rect> {
    let bounds = screen_bounds(transform, item.raw_bounds()?, item.extra_extent());
    overlaps_inclusive(bounds, transform.viewport_screen().to_rect()).then_some(bounds)
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect, Size};
    use vernier_transform::{ScreenRect, Transform};

    use super::{overlaps_inclusive, screen_bounds, visible_bounds};
    use crate::{Marker, PlotItem};

    fn transform() -> Transform {
        // 1 px per raw unit, y up, raw origin at the screen's bottom left.
        Transform::new(
            ScreenRect::new(0, 0, 100, 100),
            Rect::new(0.0, 100.0, 100.0, 0.0),
        )
    }

    #[test]
    fn shared_edges_and_corners_overlap() {
        let view = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(overlaps_inclusive(Rect::new(100.0, 10.0, 120.0, 20.0), view), "right edge");
        assert!(overlaps_inclusive(Rect::new(-20.0, -20.0, 0.0, 0.0), view), "corner");
        assert!(!overlaps_inclusive(Rect::new(100.5, 10.0, 120.0, 20.0), view), "gap");
        assert!(!overlaps_inclusive(Rect::new(f64::NAN, 0.0, 1.0, 1.0), view), "NaN");
    }

    #[test]
    fn bounds_are_inflated_in_screen_space() {
        let b = screen_bounds(
            &transform(),
            Rect::new(10.0, 10.0, 20.0, 30.0),
            Insets::new(1.0, 2.0, 3.0, 4.0),
        );
        assert_eq!(b, Rect::new(9.0, 68.0, 23.0, 94.0));
    }

    #[test]
    fn extent_brings_an_offscreen_marker_into_view() {
        let t = transform();
        let small = PlotItem::from(Marker::new(Point::new(-4.0, 50.0), Size::new(4.0, 4.0)));
        let large = PlotItem::from(Marker::new(Point::new(-4.0, 50.0), Size::new(8.0, 8.0)));
        assert_eq!(visible_bounds(&small, &t), None);
        assert_eq!(visible_bounds(&large, &t), Some(Rect::new(-8.0, 46.0, 0.0, 54.0)));
    }
}
