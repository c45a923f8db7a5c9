// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vernier Transform: raw ↔ screen coordinate mapping for 2D plots.
//!
//! A plot lives in two coordinate systems:
//! - **Raw space**: the data domain. A raw [`Rect`](kurbo::Rect) may have its
//!   `y0`/`y1` inverted to express "y increases upward", so raw widths and
//!   heights are signed.
//! - **Screen space**: device pixels, described by an integer [`ScreenRect`].
//!
//! This crate provides:
//! - [`Transform`]: an immutable, axis‑aligned affine mapping between the raw
//!   viewport and the screen viewport, together with its inverse.
//! - [`ViewportLimits`] / [`clamp_viewport`]: clamping of a proposed raw
//!   viewport against an optional bounding rectangle without turning a drag
//!   at the boundary into an apparent zoom.
//!
//! It does not own any viewport state; see `vernier_viewport` for that.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vernier_transform::{ScreenRect, Transform};
//!
//! // 100x100 pixels showing x in -10..10 and y in -5..5 (y up).
//! let screen = ScreenRect::new(0, 0, 100, 100);
//! let raw = Rect::new(-10.0, 5.0, 10.0, -5.0);
//! let transform = Transform::try_new(screen, raw).unwrap();
//!
//! assert_eq!(transform.to_screen_point(Point::ZERO), Point::new(50.0, 50.0));
//! // Raw top edge maps to the screen top edge.
//! assert_eq!(transform.to_screen_point(Point::new(-10.0, 5.0)), Point::new(0.0, 0.0));
//! ```
//!
//! ## Limiting example
//!
//! ```rust
//! use kurbo::Rect;
//! use vernier_transform::ViewportLimits;
//!
//! let limits = ViewportLimits::new(Rect::new(0.0, 0.0, 100.0, 50.0));
//!
//! // Dragged past the right edge: translated back, size untouched.
//! let clamped = limits.clamp(Rect::new(90.0, 10.0, 110.0, 20.0));
//! assert_eq!(clamped, Rect::new(80.0, 10.0, 100.0, 20.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod limits;
mod screen_rect;
mod transform;

pub use axis::Axis;
pub use limits::{ViewportLimits, clamp_viewport};
pub use screen_rect::ScreenRect;
pub use transform::{Transform, TransformError};

/// Returns `true` if all edges of `rect` are finite.
#[must_use]
pub fn is_finite_rect(rect: kurbo::Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}
