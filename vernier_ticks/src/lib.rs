// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vernier Ticks: choosing how many axis labels to draw.
//!
//! A tick hierarchy is a list of levels, each a set of raw positions that
//! gets denser from level to level (for example multiples of 100, 50, 10,
//! 5). For a visible raw range and a budget of at most `max_ticks` labels,
//! [`TickLevels::ticks_range`] picks the densest level that fits and returns
//! the index slice to draw. The slice covers the range widened by a label
//! buffer, so labels whose anchor sits just outside the window are still
//! drawn while they overlap it.
//!
//! Two hierarchies are provided:
//!
//! - [`ExplicitTickLevels`]: precomputed sorted arrays, ordered coarse first,
//!   for irregular positions such as musical notes or calendar dates.
//! - [`DeltaTickLevels`]: arithmetic sequences `i * delta` for a sorted list
//!   of deltas, without storing any positions.
//!
//! [`TickSelector`] memoizes the last selection, so calling it on every
//! redraw only does work when the viewport actually changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use vernier_ticks::{ExplicitTickLevels, TickSelector};
//!
//! // Coarse first: every 10, then every 5, then every 1.
//! let levels = ExplicitTickLevels::new([10, 5, 1].map(|step| {
//!     (0..=100).filter(|v| v % step == 0).map(f64::from).collect::<Vec<_>>()
//! }));
//! let mut selector = TickSelector::new(levels);
//!
//! // 20 units visible, at most 5 labels: every 5 fits ([20, 40) has 4).
//! let range = selector.select(20.0, 40.0, 5, 0.0);
//! let values: Vec<f64> = selector.values(range).map(|(_, v)| v).collect();
//! assert_eq!(values, [20.0, 25.0, 30.0, 35.0]);
//!
//! // Same query again: answered from the cache.
//! selector.select(20.0, 40.0, 5, 0.0);
//! assert_eq!(selector.recomputations(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod delta;
mod explicit;
mod levels;
mod selector;

pub use delta::DeltaTickLevels;
pub use explicit::ExplicitTickLevels;
pub use levels::{TickLevels, TicksRange};
pub use selector::{TickSelector, label_buffer_raw};
