// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use log::trace;
use smallvec::SmallVec;
use vernier_transform::{Axis, Transform};

use crate::levels::{TickLevels, TicksRange};

/// Raw‑space label buffer for labels `label_px` screen pixels long along `axis`.
#[must_use]
pub fn label_buffer_raw(transform: &Transform, axis: Axis, label_px: f64) -> f64 {
    axis.of_size(transform.to_raw_size(Size::new(label_px, label_px)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Key {
    start: u64,
    end: u64,
    buffer: u64,
    max_ticks: usize,
}

impl Key {
    fn new(start: f64, end: f64, max_ticks: usize, label_buffer: f64) -> Self {
        Self {
            start: start.to_bits(),
            end: end.to_bits(),
            buffer: label_buffer.to_bits(),
            max_ticks,
        }
    }
}

/// Number of distinct queries a [`TickSelector`] remembers.
const CACHE_SLOTS: usize = 4;

/// Memoizing front end for a [`TickLevels`] hierarchy.
///
/// Redraws that do not change the visible range, the budget, or the label
/// buffer reuse the previous result. The last few distinct queries are
/// remembered, so several tick sets sharing one hierarchy with different
/// budgets or label sizes do not evict each other. Replacing the hierarchy
/// through [`set_levels`](Self::set_levels) invalidates everything.
#[derive(Clone, Debug)]
pub struct TickSelector<L> {
    levels: L,
    cached: SmallVec<[(Key, TicksRange); CACHE_SLOTS]>,
    recomputations: u64,
}

impl<L: TickLevels> TickSelector<L> {
    /// Wraps `levels`.
    #[must_use]
    pub fn new(levels: L) -> Self {
        Self {
            levels,
            cached: SmallVec::new(),
            recomputations: 0,
        }
    }

    /// The wrapped hierarchy.
    #[must_use]
    pub fn levels(&self) -> &L {
        &self.levels
    }

    /// Replaces the hierarchy and drops the cached result.
    pub fn set_levels(&mut self, levels: L) {
        self.levels = levels;
        self.cached.clear();
    }

    /// How many selections actually ran (cache misses).
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// [`TickLevels::ticks_range`], memoized on its arguments.
    pub fn select(
        &mut self,
        start: f64,
        end: f64,
        max_ticks: usize,
        label_buffer: f64,
    ) -> TicksRange {
        let key = Key::new(start, end, max_ticks, label_buffer);
        if let Some((_, range)) = self.cached.iter().find(|(cached, _)| *cached == key) {
            return *range;
        }
        let range = self.levels.ticks_range(start, end, max_ticks, label_buffer);
        self.recomputations += 1;
        trace!("tick selection recomputed: {range:?}");
        if self.cached.len() == CACHE_SLOTS {
            self.cached.remove(0);
        }
        self.cached.push((key, range));
        range
    }

    /// Selects ticks along `axis` of the transform's raw viewport, with a
    /// buffer of `label_px` screen pixels on each side.
    pub fn select_for(
        &mut self,
        transform: &Transform,
        axis: Axis,
        max_ticks: usize,
        label_px: f64,
    ) -> TicksRange {
        let (start, end) = axis.span(transform.viewport_raw());
        let buffer = label_buffer_raw(transform, axis, label_px);
        self.select(start, end, max_ticks, buffer)
    }

    /// `(index, value)` pairs of `range`.
    pub fn values(&self, range: TicksRange) -> impl Iterator<Item = (isize, f64)> + '_ {
        range.values(&self.levels)
    }
}
