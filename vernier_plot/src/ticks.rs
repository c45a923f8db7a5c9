// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vernier_ticks::{DeltaTickLevels, ExplicitTickLevels, TickLevels, TicksRange};
use vernier_transform::Axis;

/// The tick hierarchy of one plot axis.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisTicks {
    /// Precomputed positions, coarse level first.
    Explicit(ExplicitTickLevels),
    /// Multiples of a sorted list of deltas.
    Delta(DeltaTickLevels),
}

impl Default for AxisTicks {
    fn default() -> Self {
        Self::Delta(DeltaTickLevels::default())
    }
}

impl From<ExplicitTickLevels> for AxisTicks {
    fn from(value: ExplicitTickLevels) -> Self {
        Self::Explicit(value)
    }
}

impl From<DeltaTickLevels> for AxisTicks {
    fn from(value: DeltaTickLevels) -> Self {
        Self::Delta(value)
    }
}

impl TickLevels for AxisTicks {
    fn level_count(&self) -> usize {
        match self {
            Self::Explicit(levels) => levels.level_count(),
            Self::Delta(levels) => levels.level_count(),
        }
    }

    fn ticks_range(
        &self,
        start: f64,
        end: f64,
        max_ticks: usize,
        label_buffer: f64,
    ) -> TicksRange {
        match self {
            Self::Explicit(levels) => levels.ticks_range(start, end, max_ticks, label_buffer),
            Self::Delta(levels) => levels.ticks_range(start, end, max_ticks, label_buffer),
        }
    }

    fn tick_value(&self, level: usize, index: isize) -> Option<f64> {
        match self {
            Self::Explicit(levels) => levels.tick_value(level, index),
            Self::Delta(levels) => levels.tick_value(level, index),
        }
    }
}

/// Tick lines chosen for one visible [`TickSet`](vernier_items::TickSet) in a frame.
///
/// Values are resolved on demand. When the view is zoomed out past the
/// coarsest level the slice can be far larger than the tick budget, so a
/// renderer should stop once it runs out of room.
#[derive(Clone, Debug)]
pub struct TickLines<'a> {
    /// Global index of the tick set item.
    pub global_index: usize,
    /// Axis the values lie on.
    pub axis: Axis,
    /// Selected level and index slice, including the label buffer.
    pub range: TicksRange,
    levels: &'a AxisTicks,
}

impl<'a> TickLines<'a> {
    pub(crate) fn new(
        global_index: usize,
        axis: Axis,
        range: TicksRange,
        levels: &'a AxisTicks,
    ) -> Self {
        Self {
            global_index,
            axis,
            range,
            levels,
        }
    }

    /// Raw values of the slice, ascending.
    pub fn values(&self) -> impl Iterator<Item = f64> + 'a {
        self.range.values(self.levels).map(|(_, value)| value)
    }
}
