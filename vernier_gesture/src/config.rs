// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used by [`GestureRecognizer`](crate::GestureRecognizer).
///
/// Distances are in screen pixels. The defaults are density‑independent
/// values for a 1x display; use [`scaled`](Self::scaled) to convert them for
/// the actual display density.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Accumulated pan or zoom motion needed before a touch sequence counts as a gesture.
    pub touch_slop: f64,
    /// Centroid size below which an axis reports no zoom.
    pub min_centroid_size: f64,
    /// Aspect ratio of the centroid above which only the dominant axis zooms.
    pub single_direction_ratio: f64,
    /// Release speed, in pixels per second, above which no fling is emitted.
    pub max_fling_velocity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_centroid_size: 5.0,
            single_direction_ratio: 3.0,
            max_fling_velocity: 4000.0,
        }
    }
}

impl GestureConfig {
    /// Scales all pixel quantities by `factor` (the display's pixels per logical pixel).
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            touch_slop: self.touch_slop * factor,
            min_centroid_size: self.min_centroid_size * factor,
            single_direction_ratio: self.single_direction_ratio,
            max_fling_velocity: self.max_fling_velocity * factor,
        }
    }

    /// Sets the touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets the minimum centroid size for zooming.
    #[must_use]
    pub fn with_min_centroid_size(mut self, min_centroid_size: f64) -> Self {
        self.min_centroid_size = min_centroid_size;
        self
    }

    /// Sets the single‑direction zoom ratio.
    #[must_use]
    pub fn with_single_direction_ratio(mut self, ratio: f64) -> Self {
        self.single_direction_ratio = ratio;
        self
    }

    /// Sets the fling speed ceiling.
    #[must_use]
    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f64) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::GestureConfig;

    #[test]
    fn scaling_leaves_the_ratio_alone() {
        let config = GestureConfig::default().scaled(2.5);
        assert_eq!(config.touch_slop, 20.0);
        assert_eq!(config.min_centroid_size, 12.5);
        assert_eq!(config.max_fling_velocity, 10_000.0);
        assert_eq!(config.single_direction_ratio, 3.0);
    }
}
