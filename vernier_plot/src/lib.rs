// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vernier Plot: one interactive plot, assembled from the Vernier kernels.
//!
//! [`Plot`] owns everything that belongs to a single plot instance:
//!
//! - the host's target viewport and the gesture‑driven
//!   [`ViewportController`](vernier_viewport::ViewportController), resolving
//!   which of the two is displayed;
//! - a [`PointerTracker`](vernier_gesture::PointerTracker) and
//!   [`GestureRecognizer`](vernier_gesture::GestureRecognizer), with optional
//!   per‑axis locks and viewport limits;
//! - the [`PlotItems`](vernier_items::PlotItems) to draw and a memoizing tick
//!   selector per axis.
//!
//! Per redraw the host calls [`Plot::advance`] to run a fling and
//! [`Plot::frame`] to get the transform, the visible items, and the tick
//! values for each visible tick set. Every committed viewport change is
//! returned as a [`ViewportChange`](vernier_viewport::ViewportChange), which
//! a host can persist or feed into [`Plot::sync_target`] of a second plot.
//!
//! Plots share nothing, so any number can run side by side.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use vernier_items::{Marker, TickSet};
//! use vernier_plot::Plot;
//! use vernier_ticks::DeltaTickLevels;
//! use vernier_transform::{Axis, ScreenRect};
//!
//! // 200x100 pixels showing x in 0..20, y in 0..10 (y up).
//! let mut plot = Plot::new(ScreenRect::new(0, 0, 200, 100), Rect::new(0.0, 10.0, 20.0, 0.0));
//! plot.set_ticks(Axis::X, DeltaTickLevels::new([1.0, 5.0, 10.0]));
//!
//! let items = plot.items_mut();
//! let group = items.add_group();
//! items.push(group, TickSet::new(Axis::X, 5, 1.0));
//! items.push(group, Marker::new(Point::new(5.0, 5.0), Size::new(4.0, 4.0)));
//! items.push(group, Marker::new(Point::new(50.0, 5.0), Size::new(4.0, 4.0)));
//!
//! let frame = plot.frame().unwrap();
//! assert_eq!(frame.items.len(), 2);
//! let values: Vec<f64> = frame.ticks[0].values().collect();
//! assert_eq!(values, [0.0, 5.0, 10.0, 15.0, 20.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod plot;
mod ticks;

pub use config::PlotConfig;
pub use plot::{Plot, PlotFrame, ViewportChanges};
pub use ticks::{AxisTicks, TickLines};
