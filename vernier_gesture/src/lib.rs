// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vernier Gesture: multi‑touch navigation for plots.
//!
//! The pipeline has three stages:
//!
//! 1. [`PointerTracker`] collects platform down/move/up/cancel events into
//!    [`PointerFrame`]s. Each frame knows every pointer's current and
//!    previous state.
//! 2. [`GestureRecognizer`] turns frames into [`GestureEvent`]s: a centroid,
//!    a pan, and an independent zoom factor per axis for each step, plus one
//!    release velocity for a fling. Small motions are swallowed until they
//!    exceed the touch slop, so taps stay taps.
//! 3. [`apply_gesture`] maps events onto a
//!    [`ViewportController`](vernier_viewport::ViewportController), zooming
//!    about the centroid so the content under the fingers stays put.
//!
//! The zoom is measured per axis from the mean absolute distance of the
//! pointers to their centroid. Spreading two fingers horizontally therefore
//! zooms x only, and a pinch whose shape is strongly elongated in one
//! direction is locked to that direction (see
//! [`GestureConfig::single_direction_ratio`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use vernier_gesture::{AxisLock, GestureRecognizer, PointerId, PointerTracker, apply_gesture};
//! use vernier_transform::{ScreenRect, Transform};
//! use vernier_viewport::ViewportController;
//!
//! let mut transform = Transform::new(ScreenRect::new(0, 0, 100, 100), Rect::new(0.0, 10.0, 10.0, 0.0));
//! let mut controller = ViewportController::new(transform.viewport_raw());
//! let mut recognizer = GestureRecognizer::default();
//! let mut tracker = PointerTracker::new();
//!
//! tracker.down(PointerId(0), Point::new(50.0, 50.0));
//! for (i, x) in [50.0, 40.0, 30.0, 20.0].into_iter().enumerate() {
//!     tracker.moved(PointerId(0), Point::new(x, 50.0));
//!     let mut frame = tracker.frame(Duration::from_millis(10 * i as u64));
//!     for event in recognizer.handle_frame(&mut frame) {
//!         apply_gesture(&mut controller, &transform, &event, None, AxisLock::NONE);
//!     }
//!     transform = Transform::new(transform.viewport_screen(), controller.viewport());
//! }
//!
//! // Dragging left by 30 px moved the viewport right by 3 raw units.
//! assert!((controller.viewport().x0 - 3.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod navigate;
mod pointer;
mod recognizer;
mod velocity;

pub use config::GestureConfig;
pub use navigate::{AxisLock, apply_gesture, fling_velocity_to_raw, zoom_about_centroid};
pub use pointer::{PointerChange, PointerFrame, PointerId, PointerTracker};
pub use recognizer::{GestureEvent, GestureEvents, GestureRecognizer, GestureSession, GestureStep};
pub use velocity::VelocityTracker;
