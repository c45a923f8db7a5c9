// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Integer rectangle in device pixels.
///
/// Unlike raw rectangles, screen rectangles always use the y‑down convention:
/// `top <= bottom` for any non‑empty rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenRect {
    /// Left edge in pixels.
    pub left: i32,
    /// Top edge in pixels.
    pub top: i32,
    /// Right edge in pixels (exclusive).
    pub right: i32,
    /// Bottom edge in pixels (exclusive).
    pub bottom: i32,
}

impl ScreenRect {
    /// Creates a screen rect from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a screen rect of `width` x `height` pixels, shrunk by per-side padding.
    ///
    /// This is how a plot window is placed inside its layout box. The far
    /// edges saturate at the `i32` range.
    #[must_use]
    pub const fn padded(width: i32, height: i32, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, width.saturating_sub(right), height.saturating_sub(bottom))
    }

    /// Width in pixels; negative for malformed rects.
    ///
    /// Computed in `i64`, so any pair of `i32` edges has an exact width.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Height in pixels; negative for malformed rects.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Returns `true` if the rect covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Center point in floating‑point pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            0.5 * (f64::from(self.left) + f64::from(self.right)),
            0.5 * (f64::from(self.top) + f64::from(self.bottom)),
        )
    }

    /// Converts into a floating‑point [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

impl From<ScreenRect> for Rect {
    fn from(value: ScreenRect) -> Self {
        value.to_rect()
    }
}
