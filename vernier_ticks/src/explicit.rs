// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use log::trace;

use crate::levels::{TickLevels, TicksRange, normalize, to_index};

/// Tick levels given as explicit value arrays.
///
/// Levels are ordered coarse first: level 0 has the fewest ticks and the
/// last level the most. Each level's values are kept sorted ascending.
///
/// Level selection scans from the finest level towards the coarsest and
/// stops at the first whose count of values in `[lo, hi)` fits the budget.
/// If no level fits, the coarsest is used. Each count is a pair of binary
/// searches, so a selection costs `O(levels * log n)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplicitTickLevels {
    levels: Vec<Vec<f64>>,
}

impl ExplicitTickLevels {
    /// Creates the hierarchy, sorting each level.
    #[must_use]
    pub fn new(levels: impl IntoIterator<Item = Vec<f64>>) -> Self {
        let levels = levels
            .into_iter()
            .map(|mut values| {
                values.sort_by(f64::total_cmp);
                values
            })
            .collect();
        Self { levels }
    }

    /// The sorted values of `level`.
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&[f64]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// Number of values of `level` in `[lo, hi)`.
    #[must_use]
    pub fn count_in_range(&self, level: usize, lo: f64, hi: f64) -> usize {
        self.level(level).map_or(0, |values| {
            lower_bound(values, hi).saturating_sub(lower_bound(values, lo))
        })
    }
}

fn lower_bound(values: &[f64], x: f64) -> usize {
    values.partition_point(|v| *v < x)
}

impl TickLevels for ExplicitTickLevels {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn ticks_range(
        &self,
        start: f64,
        end: f64,
        max_ticks: usize,
        label_buffer: f64,
    ) -> TicksRange {
        if self.levels.is_empty() {
            return TicksRange::EMPTY;
        }
        let (lo, hi, buffer) = normalize(start, end, label_buffer);
        let level = (0..self.levels.len())
            .rev()
            .find(|&level| self.count_in_range(level, lo, hi) <= max_ticks)
            .unwrap_or(0);
        let values = &self.levels[level];
        let range = TicksRange {
            level,
            begin: to_index(lower_bound(values, lo - buffer)),
            end: to_index(lower_bound(values, hi + buffer)),
        };
        trace!("explicit ticks for [{lo}, {hi}) within {max_ticks}: {range:?}");
        range
    }

    fn tick_value(&self, level: usize, index: isize) -> Option<f64> {
        let index = usize::try_from(index).ok()?;
        self.levels.get(level)?.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::ExplicitTickLevels;
    use crate::levels::{TickLevels, TicksRange};

    /// Multiples of 100, 50, 10 and 5 in `[-500, 500]`, coarse first.
    fn decades() -> ExplicitTickLevels {
        ExplicitTickLevels::new([100, 50, 10, 5].map(|step| {
            (-500 / step..=500 / step)
                .map(|i| f64::from(i * step))
                .collect::<Vec<_>>()
        }))
    }

    #[test]
    fn picks_the_finest_level_within_budget() {
        let levels = decades();
        // [0, 100) holds 20, 10, 2 and 1 ticks from fine to coarse.
        assert_eq!(levels.ticks_range(0.0, 100.0, 20, 0.0).level, 3);
        assert_eq!(levels.ticks_range(0.0, 100.0, 19, 0.0).level, 2);
        assert_eq!(levels.ticks_range(0.0, 100.0, 10, 0.0).level, 2);
        assert_eq!(levels.ticks_range(0.0, 100.0, 9, 0.0).level, 1);
        assert_eq!(levels.ticks_range(0.0, 100.0, 1, 0.0).level, 0);
    }

    #[test]
    fn falls_back_to_the_coarsest_level() {
        let levels = decades();
        let range = levels.ticks_range(-500.0, 500.0, 3, 0.0);
        assert_eq!(range.level, 0);
        assert_eq!(range.len(), 10);
    }

    #[test]
    fn counts_do_not_grow_from_fine_to_coarse() {
        let levels = decades();
        for (lo, hi) in [(0.0, 100.0), (-37.5, 212.0), (-500.0, 500.0), (3.0, 4.0)] {
            let counts: Vec<usize> = (0..levels.level_count())
                .rev()
                .map(|level| levels.count_in_range(level, lo, hi))
                .collect();
            assert!(
                counts.windows(2).all(|w| w[0] >= w[1]),
                "counts {counts:?} for [{lo}, {hi})"
            );
            for budget in 0..40 {
                let r = levels.ticks_range(lo, hi, budget, 0.0);
                if counts.iter().any(|&c| c <= budget) {
                    assert!(levels.count_in_range(r.level, lo, hi) <= budget);
                } else {
                    assert_eq!(r.level, 0);
                }
            }
        }
    }

    #[test]
    fn buffer_widens_the_slice_but_not_the_level() {
        let levels = decades();
        let strict = levels.ticks_range(0.0, 100.0, 10, 0.0);
        let buffered = levels.ticks_range(0.0, 100.0, 10, 12.0);
        assert_eq!(strict.level, buffered.level);
        let strict_values: Vec<f64> = strict.values(&levels).map(|(_, v)| v).collect();
        let buffered_values: Vec<f64> = buffered.values(&levels).map(|(_, v)| v).collect();
        assert_eq!(strict_values, [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
        assert_eq!(buffered_values.first(), Some(&-10.0));
        assert_eq!(buffered_values.last(), Some(&110.0));
    }

    #[test]
    fn range_order_does_not_matter() {
        let levels = decades();
        assert_eq!(
            levels.ticks_range(100.0, 0.0, 10, 5.0),
            levels.ticks_range(0.0, 100.0, 10, 5.0)
        );
    }

    #[test]
    fn empty_hierarchies_yield_empty_ranges() {
        let none = ExplicitTickLevels::new(Vec::<Vec<f64>>::new());
        assert_eq!(none.ticks_range(0.0, 1.0, 5, 0.0), TicksRange::EMPTY);

        let hollow = ExplicitTickLevels::new([vec![], vec![]]);
        let r = hollow.ticks_range(0.0, 1.0, 5, 1.0);
        assert!(r.is_empty());
        assert_eq!(hollow.tick_value(r.level, 0), None);
    }

    #[test]
    fn levels_are_sorted_on_construction() {
        let levels = ExplicitTickLevels::new([vec![3.0, -1.0, 2.0]]);
        assert_eq!(levels.level(0), Some(&[-1.0, 2.0, 3.0][..]));
        assert_eq!(levels.tick_value(0, -1), None);
        assert_eq!(levels.tick_value(0, 2), Some(3.0));
    }
}
