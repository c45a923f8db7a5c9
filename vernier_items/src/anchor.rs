// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label placement relative to an anchor point.

use kurbo::{Insets, Point, Rect, Size};

/// Which point of a label box sits on the anchor point.
///
/// `NorthWest` puts the label's top left corner on the point, so the label
/// extends right and down; `Center` centers it on the point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Top left corner.
    NorthWest,
    /// Top edge center.
    North,
    /// Top right corner.
    NorthEast,
    /// Left edge center.
    West,
    /// Box center.
    #[default]
    Center,
    /// Right edge center.
    East,
    /// Bottom left corner.
    SouthWest,
    /// Bottom edge center.
    South,
    /// Bottom right corner.
    SouthEast,
}

impl Anchor {
    /// Horizontal and vertical position of the anchor within the box, each in `0..=1`.
    fn fractions(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (0.0, 0.0),
            Self::North => (0.5, 0.0),
            Self::NorthEast => (1.0, 0.0),
            Self::West => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::East => (1.0, 0.5),
            Self::SouthWest => (0.0, 1.0),
            Self::South => (0.5, 1.0),
            Self::SouthEast => (1.0, 1.0),
        }
    }

    /// Top left corner of a `size` box anchored at `at`.
    #[must_use]
    pub fn place(self, at: Point, size: Size) -> Point {
        let (fx, fy) = self.fractions();
        Point::new(at.x - fx * size.width, at.y - fy * size.height)
    }

    /// Like [`place`](Self::place), but keeps the box clear of lines through `at`.
    ///
    /// `horizontal_line_width` is the width of a horizontal line through the
    /// anchor, which pushes north and south anchored boxes off it;
    /// `vertical_line_width` does the same for east and west. Centered
    /// directions are not shifted.
    #[must_use]
    pub fn place_clear_of_lines(
        self,
        at: Point,
        size: Size,
        horizontal_line_width: f64,
        vertical_line_width: f64,
    ) -> Point {
        let (fx, fy) = self.fractions();
        let shift = |fraction: f64, half_width: f64| {
            if fraction == 0.0 {
                half_width
            } else if fraction == 1.0 {
                -half_width
            } else {
                0.0
            }
        };
        let corner = self.place(at, size);
        Point::new(
            corner.x + shift(fx, 0.5 * vertical_line_width),
            corner.y + shift(fy, 0.5 * horizontal_line_width),
        )
    }

    /// The label box, in the same space as `at`.
    #[must_use]
    pub fn label_rect(
        self,
        at: Point,
        size: Size,
        horizontal_line_width: f64,
        vertical_line_width: f64,
    ) -> Rect {
        Rect::from_origin_size(
            self.place_clear_of_lines(at, size, horizontal_line_width, vertical_line_width),
            size,
        )
    }

    /// How far a label anchored at a point reaches beyond that point on each side.
    ///
    /// Sides the label does not reach are zero.
    #[must_use]
    pub fn extent(
        self,
        size: Size,
        horizontal_line_width: f64,
        vertical_line_width: f64,
    ) -> Insets {
        let r = self.label_rect(Point::ZERO, size, horizontal_line_width, vertical_line_width);
        Insets::new(
            (-r.x0).max(0.0),
            (-r.y0).max(0.0),
            r.x1.max(0.0),
            r.y1.max(0.0),
        )
    }
}
