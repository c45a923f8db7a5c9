// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity estimation.

use core::time::Duration;

use kurbo::{Point, Vec2};

const HISTORY: usize = 20;
const HORIZON: Duration = Duration::from_millis(100);
const MAX_GAP: Duration = Duration::from_millis(40);

/// Estimates pointer velocity from timestamped positions.
///
/// Keeps the last 20 samples and fits a straight line (least squares) per
/// axis through the ones from the final 100 ms of movement. A pause of more
/// than 40 ms between samples ends the window, so a finger that stops before
/// lifting yields little or no velocity.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: [Option<(Duration, Point)>; HISTORY],
    next: usize,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `position` at `time`.
    pub fn add_position(&mut self, time: Duration, position: Point) {
        self.samples[self.next] = Some((time, position));
        self.next = (self.next + 1) % HISTORY;
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Estimated velocity in position units per second; zero with fewer than two usable samples.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let mut t = [0.0; HISTORY];
        let mut x = [0.0; HISTORY];
        let mut y = [0.0; HISTORY];
        let mut n = 0;

        let mut newest_time = None;
        let mut previous_time: Option<Duration> = None;
        for age in 1..=HISTORY {
            let index = (self.next + HISTORY - age) % HISTORY;
            let Some((time, position)) = self.samples[index] else {
                break;
            };
            let newest = *newest_time.get_or_insert(time);
            let Some(since_newest) = newest.checked_sub(time) else {
                break;
            };
            if since_newest > HORIZON {
                break;
            }
            if let Some(previous) = previous_time {
                match previous.checked_sub(time) {
                    Some(gap) if gap <= MAX_GAP => {}
                    _ => break,
                }
            }
            previous_time = Some(time);
            t[n] = -since_newest.as_secs_f64();
            x[n] = position.x;
            y[n] = position.y;
            n += 1;
        }

        if n < 2 {
            return Vec2::ZERO;
        }
        Vec2::new(slope(&t[..n], &x[..n]), slope(&t[..n], &y[..n]))
    }
}

/// Least‑squares slope of `values` over `times`.
fn slope(times: &[f64], values: &[f64]) -> f64 {
    let n = times.len() as f64;
    let mean_t = times.iter().sum::<f64>() / n;
    let mean_v = values.iter().sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (t, v) in times.iter().zip(values) {
        covariance += (t - mean_t) * (v - mean_v);
        variance += (t - mean_t) * (t - mean_t);
    }
    if variance <= 0.0 {
        0.0
    } else {
        covariance / variance
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Vec2};

    use super::VelocityTracker;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).hypot() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn constant_motion_gives_its_speed() {
        let mut tracker = VelocityTracker::new();
        for i in 0..10_u32 {
            let t = f64::from(i) * 0.008;
            tracker.add_position(ms(u64::from(i) * 8), Point::new(300.0 * t, -120.0 * t));
        }
        assert_close(tracker.velocity(), Vec2::new(300.0, -120.0));
    }

    #[test]
    fn single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        tracker.add_position(ms(5), Point::new(10.0, 10.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn only_the_last_100_ms_count() {
        let mut tracker = VelocityTracker::new();
        // Fast early motion followed by slow recent motion.
        for i in 0..8_u64 {
            tracker.add_position(ms(i * 10), Point::new(i as f64 * 50.0, 0.0));
        }
        let base = 7.0 * 50.0;
        for i in 1..=12_u64 {
            tracker.add_position(ms(70 + i * 10), Point::new(base + i as f64, 0.0));
        }
        // The newest 11 samples span exactly 100 ms of 100 px/s motion.
        assert_close(tracker.velocity(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn a_pause_before_release_drops_old_motion() {
        let mut tracker = VelocityTracker::new();
        for i in 0..5_u64 {
            tracker.add_position(ms(i * 10), Point::new(i as f64 * 10.0, 0.0));
        }
        tracker.add_position(ms(90), Point::new(40.0, 0.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn reset_forgets_samples() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(ms(0), Point::ZERO);
        tracker.add_position(ms(10), Point::new(10.0, 0.0));
        tracker.reset();
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn history_wraps_around() {
        let mut tracker = VelocityTracker::new();
        for i in 0..45_u64 {
            tracker.add_position(ms(i * 4), Point::new(0.0, i as f64 * 2.0));
        }
        assert_close(tracker.velocity(), Vec2::new(0.0, 500.0));
    }
}
