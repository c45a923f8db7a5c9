// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// One of the two plot axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The extent of `size` along this axis.
    #[must_use]
    pub fn of_size(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// The `(start, end)` edges of `rect` along this axis, in stored order.
    ///
    /// For an inverted raw viewport the start is greater than the end.
    #[must_use]
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::X => (rect.x0, rect.x1),
            Self::Y => (rect.y0, rect.y1),
        }
    }

    /// `rect` with its edges along this axis replaced.
    #[must_use]
    pub fn with_span(self, rect: Rect, start: f64, end: f64) -> Rect {
        match self {
            Self::X => Rect::new(start, rect.y0, end, rect.y1),
            Self::Y => Rect::new(rect.x0, start, rect.x1, end),
        }
    }
}
