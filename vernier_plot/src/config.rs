// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vernier_gesture::{AxisLock, GestureConfig};
use vernier_viewport::FlingConfig;

/// Per‑plot settings.
///
/// All fields have sensible defaults; hosts typically start from
/// [`PlotConfig::default`] and adjust with the `with_*` setters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotConfig {
    /// Gesture thresholds, in screen pixels.
    pub gesture: GestureConfig,
    /// Fling decay.
    pub fling: FlingConfig,
    /// Axes gestures may not move.
    pub axis_lock: AxisLock,
    /// Corner radius of the clip shape, in screen pixels.
    pub corner_radius: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            fling: FlingConfig::default(),
            axis_lock: AxisLock::NONE,
            corner_radius: 0.0,
        }
    }
}

impl PlotConfig {
    /// Sets the gesture thresholds.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Sets the fling decay.
    #[must_use]
    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = fling;
        self
    }

    /// Sets the locked axes.
    #[must_use]
    pub fn with_axis_lock(mut self, axis_lock: AxisLock) -> Self {
        self.axis_lock = axis_lock;
        self
    }

    /// Sets the clip corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}
