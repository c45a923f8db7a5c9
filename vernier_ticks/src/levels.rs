// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// The slice of one tick level to render.
///
/// `begin..end` indexes into the level chosen by
/// [`TickLevels::ticks_range`]. Indices are signed because arithmetic
/// hierarchies ([`DeltaTickLevels`](crate::DeltaTickLevels)) extend to
/// negative values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TicksRange {
    /// Selected level.
    pub level: usize,
    /// First index (inclusive).
    pub begin: isize,
    /// Last index (exclusive).
    pub end: isize,
}

impl TicksRange {
    /// An empty range at level 0.
    pub const EMPTY: Self = Self {
        level: 0,
        begin: 0,
        end: 0,
    };

    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.end.saturating_sub(self.begin)).unwrap_or(0)
    }

    /// `true` if the range holds no index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    /// The index range.
    #[must_use]
    pub fn indices(&self) -> Range<isize> {
        self.begin..self.end
    }

    /// `(index, value)` pairs of this range in `levels`.
    pub fn values<'a, L: TickLevels + ?Sized>(
        &self,
        levels: &'a L,
    ) -> impl Iterator<Item = (isize, f64)> + use<'a, L> {
        let level = self.level;
        self.indices()
            .filter_map(move |index| levels.tick_value(level, index).map(|v| (index, v)))
    }
}

/// A density‑ordered hierarchy of tick positions.
///
/// Implementations pick the level whose density fits a tick budget for a
/// visible range, and resolve indices of that level to raw values.
pub trait TickLevels {
    /// Number of levels.
    fn level_count(&self) -> usize;

    /// Chooses a level for the raw range between `start` and `end` (in either
    /// order) showing at most `max_ticks` ticks, and returns the index slice
    /// covering the range widened by `label_buffer` on both sides.
    fn ticks_range(&self, start: f64, end: f64, max_ticks: usize, label_buffer: f64)
    -> TicksRange;

    /// Raw value of tick `index` on `level`, if it exists.
    fn tick_value(&self, level: usize, index: isize) -> Option<f64>;
}

impl<L: TickLevels + ?Sized> TickLevels for &L {
    fn level_count(&self) -> usize {
        (**self).level_count()
    }

    fn ticks_range(
        &self,
        start: f64,
        end: f64,
        max_ticks: usize,
        label_buffer: f64,
    ) -> TicksRange {
        (**self).ticks_range(start, end, max_ticks, label_buffer)
    }

    fn tick_value(&self, level: usize, index: isize) -> Option<f64> {
        (**self).tick_value(level, index)
    }
}

/// Orders a range and sanitizes a buffer.
pub(crate) fn normalize(start: f64, end: f64, label_buffer: f64) -> (f64, f64, f64) {
    let (lo, hi) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    (lo, hi, label_buffer.max(0.0))
}

/// Converts a slice position to a signed index.
pub(crate) fn to_index(position: usize) -> isize {
    isize::try_from(position).unwrap_or(isize::MAX)
}
