// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vernier Viewport: single‑writer ownership of a plot's raw viewport.
//!
//! [`ViewportController`] owns the raw viewport a plot displays while the user
//! is interacting with it. There are exactly three ways to mutate it:
//!
//! - [`ViewportController::set_viewport`]: a discrete snap (one gesture step).
//! - [`ViewportController::fling_viewport`]: start a decaying fling, which is
//!   then driven once per redraw by [`ViewportController::advance`].
//! - [`ViewportController::finish`]: stop and hand control back to the
//!   externally supplied target viewport.
//!
//! Starting any operation cancels a running fling first. Each fling frame is
//! stamped with the generation it was started in; a frame whose generation is
//! no longer current is discarded instead of written, so a cancelled fling can
//! never land a stale viewport.
//!
//! All writes pass through [`vernier_transform::ViewportLimits`] and are
//! validated: a non‑finite or zero‑sized result is dropped and the last valid
//! viewport is kept.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Vec2};
//! use vernier_viewport::ViewportController;
//!
//! let mut controller = ViewportController::new(Rect::new(0.0, 10.0, 10.0, 0.0));
//! assert!(!controller.is_active());
//!
//! // Fling to the right at 20 raw units per second.
//! controller.fling_viewport(Vec2::new(20.0, 0.0), None);
//! let change = controller.advance(Duration::from_millis(16)).unwrap();
//! assert!(change.viewport.x0 > 0.0);
//!
//! // A discrete snap cancels the fling.
//! let target = Rect::new(-5.0, 5.0, 5.0, -5.0);
//! controller.set_viewport(target, None);
//! assert_eq!(controller.advance(Duration::from_millis(16)), None);
//! assert_eq!(controller.viewport(), target);
//!
//! // Hand control back to the host's target viewport.
//! controller.finish();
//! assert_eq!(controller.resolve(Rect::new(0.0, 1.0, 1.0, 0.0)), Rect::new(0.0, 1.0, 1.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod fling;

pub use controller::{ChangeCause, FlingFrame, ViewportChange, ViewportController};
pub use fling::{FlingConfig, FlingDecay};
