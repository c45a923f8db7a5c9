// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponential‑decay fling model.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Vec2};

/// Tuning for the fling decay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingConfig {
    /// Decay rate `k` in 1/s; velocity follows `v(t) = v0 * exp(-k t)`.
    pub friction: f64,
    /// The fling comes to rest once the speed on an axis drops below this
    /// fraction of the viewport extent on that axis, per second.
    pub rest_fraction: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            friction: 4.2,
            rest_fraction: 0.01,
        }
    }
}

impl FlingConfig {
    /// Sets the decay rate.
    #[must_use]
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the rest threshold as a fraction of the viewport extent per second.
    #[must_use]
    pub fn with_rest_fraction(mut self, rest_fraction: f64) -> Self {
        self.rest_fraction = rest_fraction;
        self
    }
}

/// Closed‑form exponential decay of a 2D velocity.
///
/// The displacement after `t` seconds is `v0 / k * (1 - exp(-k t))`, so the
/// total travel is bounded by `v0 / k` no matter how long the fling runs.
/// Each axis decays independently and stops at its own rest time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingDecay {
    velocity: Vec2,
    friction: f64,
    rest: Vec2,
}

impl FlingDecay {
    /// Smallest decay rate used, in 1/s.
    pub const MIN_FRICTION: f64 = 1e-3;

    /// Creates a decay for `velocity` (raw units per second) over a viewport
    /// of the given extent.
    ///
    /// A friction that is not a positive finite number, or a rest fraction
    /// that is negative or not finite, is replaced by its default. Positive
    /// frictions are raised to at least [`MIN_FRICTION`](Self::MIN_FRICTION).
    #[must_use]
    pub fn new(velocity: Vec2, viewport: Rect, config: &FlingConfig) -> Self {
        let defaults = FlingConfig::default();
        let friction = if config.friction.is_finite() && config.friction > 0.0 {
            config.friction.max(Self::MIN_FRICTION)
        } else {
            defaults.friction
        };
        let rest_fraction = if config.rest_fraction.is_finite() && config.rest_fraction >= 0.0 {
            config.rest_fraction
        } else {
            defaults.rest_fraction
        };
        let threshold = Vec2::new(
            viewport.width().abs() * rest_fraction,
            viewport.height().abs() * rest_fraction,
        );
        Self {
            velocity,
            friction,
            rest: Vec2::new(
                rest_time(velocity.x, threshold.x, friction),
                rest_time(velocity.y, threshold.y, friction),
            ),
        }
    }

    /// Initial velocity.
    #[must_use]
    pub fn initial_velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Time until both axes are at rest, saturating at [`Duration::MAX`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.rest.x.max(self.rest.y)).unwrap_or(Duration::MAX)
    }

    /// Returns `true` if the fling would not move at all.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.rest.x <= 0.0 && self.rest.y <= 0.0
    }

    /// Displacement from the fling origin after `elapsed`.
    #[must_use]
    pub fn offset_at(&self, elapsed: Duration) -> Vec2 {
        let t = elapsed.as_secs_f64();
        Vec2::new(
            self.axis_offset(self.velocity.x, t.min(self.rest.x)),
            self.axis_offset(self.velocity.y, t.min(self.rest.y)),
        )
    }

    /// Velocity after `elapsed`; zero on an axis once it is at rest.
    #[must_use]
    pub fn velocity_at(&self, elapsed: Duration) -> Vec2 {
        let t = elapsed.as_secs_f64();
        let axis = |v: f64, rest: f64| {
            if t >= rest {
                0.0
            } else {
                v * (-self.friction * t).exp()
            }
        };
        Vec2::new(axis(self.velocity.x, self.rest.x), axis(self.velocity.y, self.rest.y))
    }

    fn axis_offset(&self, v: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        v / self.friction * (1.0 - (-self.friction * t).exp())
    }
}

fn rest_time(v: f64, threshold: f64, friction: f64) -> f64 {
    let speed = v.abs();
    if !speed.is_finite() || !threshold.is_finite() || speed <= threshold || speed == 0.0 {
        return 0.0;
    }
    if threshold <= 0.0 {
        // No meaningful threshold: stop when the remaining travel is negligible.
        return (speed / f64::EPSILON).ln() / friction;
    }
    (speed / threshold).ln() / friction
}
