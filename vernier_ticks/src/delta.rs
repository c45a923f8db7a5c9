// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use log::trace;

use crate::levels::{TickLevels, TicksRange, normalize};

/// Tick levels given as arithmetic sequences: level `l` holds every multiple of `deltas[l]`.
///
/// Deltas are kept sorted ascending, so level 0 is the finest. The selected
/// level is the one with the smallest delta not below `range / max_ticks`
/// (or the largest delta if none is that coarse).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeltaTickLevels {
    deltas: Vec<f64>,
}

impl DeltaTickLevels {
    /// Creates the hierarchy. Non‑finite and non‑positive deltas are dropped.
    #[must_use]
    pub fn new(deltas: impl IntoIterator<Item = f64>) -> Self {
        let mut deltas: Vec<f64> = deltas
            .into_iter()
            .filter(|d| d.is_finite() && *d > 0.0)
            .collect();
        deltas.sort_by(f64::total_cmp);
        deltas.dedup();
        Self { deltas }
    }

    /// Delta of `level`.
    #[must_use]
    pub fn delta(&self, level: usize) -> Option<f64> {
        self.deltas.get(level).copied()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "tick indices are bounded by the visible range over the delta; saturation is fine"
)]
fn to_signed(value: f64) -> isize {
    value as isize
}

impl TickLevels for DeltaTickLevels {
    fn level_count(&self) -> usize {
        self.deltas.len()
    }

    fn ticks_range(
        &self,
        start: f64,
        end: f64,
        max_ticks: usize,
        label_buffer: f64,
    ) -> TicksRange {
        if self.deltas.is_empty() {
            return TicksRange::EMPTY;
        }
        let (lo, hi, buffer) = normalize(start, end, label_buffer);
        let budget = max_ticks.max(1) as f64;
        let min_delta = (hi - lo) / budget;
        let level = self
            .deltas
            .partition_point(|d| *d < min_delta)
            .min(self.deltas.len() - 1);
        let delta = self.deltas[level];
        let range = TicksRange {
            level,
            begin: to_signed(((lo - buffer) / delta).floor()),
            end: to_signed(((hi + buffer) / delta).ceil()).saturating_add(1),
        };
        trace!("delta ticks for [{lo}, {hi}] within {max_ticks}: delta {delta}, {range:?}");
        range
    }

    fn tick_value(&self, level: usize, index: isize) -> Option<f64> {
        self.delta(level).map(|delta| index as f64 * delta)
    }
}
