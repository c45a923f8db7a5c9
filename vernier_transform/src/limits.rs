// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport limiting.
//!
//! Clamping a viewport edge by edge (`x0.clamp(min, max)`, ...) has an ugly
//! failure mode: when the user drags a viewport into a boundary, the leading
//! edge stops while the trailing edge keeps moving, so the window shrinks and
//! the drag turns into a zoom. The limiter here instead fixes the size first
//! and then translates the whole rect back inside the bounds.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Vec2};

/// Bounding rectangle for raw viewports.
///
/// The bounds are normalized on construction (`x0 <= x1`, `y0 <= y1`), so
/// limits can be written in the same y‑up orientation as the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportLimits {
    bounds: Rect,
}

impl ViewportLimits {
    /// Creates limits from a rect in either orientation.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: bounds.abs(),
        }
    }

    /// The normalized bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Clamps a proposed raw viewport into these limits.
    ///
    /// The steps are order sensitive:
    /// 1. If the viewport is wider (taller) than the limits, shrink it to the
    ///    limit width (height), keeping `x0` (`y0`) and the sign of the extent.
    /// 2. Translate so the minimum edge is not below the limits' minimum.
    /// 3. Translate so the maximum edge is not above the limits' maximum.
    ///
    /// Since the size already fits after step 1, at most one of steps 2 and 3
    /// moves the rect. Orientation is preserved: an inverted (y‑up) viewport
    /// stays inverted.
    ///
    /// The input is expected to be finite; non‑finite edges pass through.
    #[must_use]
    pub fn clamp(&self, viewport: Rect) -> Rect {
        let limit_w = self.bounds.width();
        let limit_h = self.bounds.height();

        let w = viewport.width();
        let h = viewport.height();
        let x1 = if w.abs() > limit_w {
            if w > 0.0 {
                viewport.x0 + limit_w
            } else {
                viewport.x0 - limit_w
            }
        } else {
            viewport.x1
        };
        let y1 = if h.abs() > limit_h {
            if h > 0.0 {
                viewport.y0 + limit_h
            } else {
                viewport.y0 - limit_h
            }
        } else {
            viewport.y1
        };
        let mut limited = Rect::new(viewport.x0, viewport.y0, x1, y1);

        let shift_min = Vec2::new(
            (self.bounds.x0 - limited.min_x()).max(0.0),
            (self.bounds.y0 - limited.min_y()).max(0.0),
        );
        limited = limited + shift_min;

        let shift_max = Vec2::new(
            (self.bounds.x1 - limited.max_x()).min(0.0),
            (self.bounds.y1 - limited.max_y()).min(0.0),
        );
        limited + shift_max
    }

    /// Returns `true` if `viewport` already lies within the limits.
    #[must_use]
    pub fn contains(&self, viewport: Rect) -> bool {
        viewport.min_x() >= self.bounds.x0
            && viewport.max_x() <= self.bounds.x1
            && viewport.min_y() >= self.bounds.y0
            && viewport.max_y() <= self.bounds.y1
    }
}

impl From<Rect> for ViewportLimits {
    fn from(value: Rect) -> Self {
        Self::new(value)
    }
}

/// Clamps `viewport` against optional limits; `None` leaves it unchanged.
#[must_use]
pub fn clamp_viewport(viewport: Rect, limits: Option<&ViewportLimits>) -> Rect {
    match limits {
        Some(limits) => limits.clamp(viewport),
        None => viewport,
    }
}
