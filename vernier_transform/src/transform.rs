// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, RoundedRect, Size, Vec2};

use crate::ScreenRect;

/// Reasons a [`Transform`] cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformError {
    /// The raw viewport has a zero or non‑finite width or height.
    DegenerateRaw {
        /// The offending raw viewport.
        raw: Rect,
    },
    /// The screen viewport covers no pixels.
    EmptyScreen {
        /// The offending screen viewport.
        screen: ScreenRect,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRaw { raw } => write!(
                f,
                "raw viewport must have finite, non-zero width and height (got {}x{})",
                raw.width(),
                raw.height()
            ),
            Self::EmptyScreen { screen } => write!(
                f,
                "screen viewport must cover at least one pixel (got {}x{})",
                screen.width(),
                screen.height()
            ),
        }
    }
}

impl core::error::Error for TransformError {}

/// Immutable mapping between a raw viewport and a screen viewport.
///
/// The forward matrix is
///
/// ```text
/// translate(screen.left, screen.center_y)
///   · scale(screen.width / raw.width, screen.height / raw.height)
///   · translate(-raw.x0, -raw.center_y)
/// ```
///
/// Centering on the vertical midline means a raw viewport with `y0 > y1`
/// maps its `y0` edge to the screen top, i.e. data "y up" renders upward.
///
/// A `Transform` is never mutated; build a new one whenever the screen rect,
/// the raw viewport, or the corner radius changes. It is `Copy`, so multiple
/// plot layers can hold the same snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    screen: ScreenRect,
    raw: Rect,
    corner_radius: f64,
    raw_to_screen: Affine,
    screen_to_raw: Affine,
}

impl Transform {
    /// Builds the transform for `screen` showing `raw`.
    ///
    /// # Panics
    ///
    /// Panics if the raw viewport is degenerate or the screen rect is empty.
    /// A degenerate viewport is a caller bug; use [`Transform::try_new`] where
    /// the geometry comes from an untrusted source (e.g. layout before the
    /// first measure pass).
    #[must_use]
    pub fn new(screen: ScreenRect, raw: Rect) -> Self {
        match Self::try_new(screen, raw) {
            Ok(transform) => transform,
            Err(err) => panic!("invalid plot transform: {err}"),
        }
    }

    /// Builds the transform for `screen` showing `raw`, rejecting degenerate input.
    pub fn try_new(screen: ScreenRect, raw: Rect) -> Result<Self, TransformError> {
        let raw_w = raw.width();
        let raw_h = raw.height();
        if !crate::is_finite_rect(raw) || raw_w == 0.0 || raw_h == 0.0 {
            return Err(TransformError::DegenerateRaw { raw });
        }
        if screen.is_empty() {
            return Err(TransformError::EmptyScreen { screen });
        }

        let screen_size = screen.to_rect().size();
        let screen_center_y = screen.center().y;
        let raw_center_y = raw.center().y;
        let raw_to_screen = Affine::translate((f64::from(screen.left), screen_center_y))
            * Affine::scale_non_uniform(
                screen_size.width / raw_w,
                screen_size.height / raw_h,
            )
            * Affine::translate((-raw.x0, -raw_center_y));
        let screen_to_raw = raw_to_screen.inverse();

        Ok(Self {
            screen,
            raw,
            corner_radius: 0.0,
            raw_to_screen,
            screen_to_raw,
        })
    }

    /// Returns a copy of this transform with a clip corner radius in pixels.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// The screen viewport in pixels.
    #[must_use]
    pub fn viewport_screen(&self) -> ScreenRect {
        self.screen
    }

    /// The raw viewport (possibly with inverted `y`).
    #[must_use]
    pub fn viewport_raw(&self) -> Rect {
        self.raw
    }

    /// Corner radius used by [`Transform::clip_shape`].
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Forward matrix, raw → screen.
    #[must_use]
    pub fn raw_to_screen(&self) -> Affine {
        self.raw_to_screen
    }

    /// Inverse matrix, screen → raw.
    #[must_use]
    pub fn screen_to_raw(&self) -> Affine {
        self.screen_to_raw
    }

    /// Maps a raw point to screen space.
    #[must_use]
    pub fn to_screen_point(&self, pt: Point) -> Point {
        map_axis_aligned(self.raw_to_screen, pt)
    }

    /// Maps a screen point to raw space.
    #[must_use]
    pub fn to_raw_point(&self, pt: Point) -> Point {
        map_axis_aligned(self.screen_to_raw, pt)
    }

    /// Maps a raw rect to its screen bounding box.
    ///
    /// The result is normalized (`x0 <= x1`, `y0 <= y1`). Infinite edges are
    /// preserved, so a rect spanning an entire axis stays unbounded on screen.
    #[must_use]
    pub fn to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_screen_point(rect.origin()),
            self.to_screen_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a screen rect to its raw bounding box (normalized).
    #[must_use]
    pub fn to_raw_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_raw_point(rect.origin()),
            self.to_raw_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a screen‑space displacement (pan, velocity) to raw space, ignoring translation.
    #[must_use]
    pub fn to_raw_vector(&self, v: Vec2) -> Vec2 {
        let [a, _, _, d, _, _] = self.screen_to_raw.as_coeffs();
        Vec2::new(a * v.x, d * v.y)
    }

    /// Maps a raw displacement to screen space, ignoring translation.
    #[must_use]
    pub fn to_screen_vector(&self, v: Vec2) -> Vec2 {
        let [a, _, _, d, _, _] = self.raw_to_screen.as_coeffs();
        Vec2::new(a * v.x, d * v.y)
    }

    /// Absolute raw extent covered by a pixel size.
    ///
    /// Used to turn label sizes into raw‑space buffers.
    #[must_use]
    pub fn to_raw_size(&self, size: Size) -> Size {
        let v = self.to_raw_vector(Vec2::new(size.width, size.height));
        Size::new(v.x.abs(), v.y.abs())
    }

    /// Screen viewport as a rounded rect, for clipping plot content.
    #[must_use]
    pub fn clip_shape(&self) -> RoundedRect {
        self.screen.to_rect().to_rounded_rect(self.corner_radius)
    }
}

/// Applies an axis‑aligned affine map component‑wise.
///
/// Multiplying through the full matrix would compute `0 * ±inf` for the
/// off‑diagonal terms; mapping per axis keeps unbounded coordinates intact.
fn map_axis_aligned(affine: Affine, pt: Point) -> Point {
    let [a, _, _, d, e, f] = affine.as_coeffs();
    Point::new(a * pt.x + e, d * pt.y + f)
}
