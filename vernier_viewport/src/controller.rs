// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Rect, Vec2};
use log::{debug, trace};
use vernier_transform::{ViewportLimits, clamp_viewport, is_finite_rect};

use crate::fling::{FlingConfig, FlingDecay};

/// What caused a committed viewport change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    /// A discrete snap through [`ViewportController::set_viewport`].
    Set,
    /// A fling frame published by [`ViewportController::advance`].
    Fling,
    /// The host supplied a new target viewport while no gesture was active.
    Target,
}

/// Notification for a committed viewport change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChange {
    /// The viewport now displayed.
    pub viewport: Rect,
    /// Why it changed.
    pub cause: ChangeCause,
}

/// One computed fling frame, not yet written.
///
/// Obtained from [`ViewportController::next_fling_frame`] and written with
/// [`ViewportController::commit`]. The frame remembers the generation it was
/// computed in; committing it after any other operation has run is a no‑op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingFrame {
    generation: u64,
    viewport: Rect,
}

impl FlingFrame {
    /// The candidate viewport carried by this frame (already limited).
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }
}

#[derive(Clone, Copy, Debug)]
struct FlingTask {
    generation: u64,
    origin: Rect,
    decay: FlingDecay,
    limits: Option<ViewportLimits>,
    elapsed: Duration,
}

impl FlingTask {
    fn step(&mut self, dt: Duration) -> (FlingFrame, bool) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.decay.duration());
        let candidate = self.origin + self.decay.offset_at(self.elapsed);
        let frame = FlingFrame {
            generation: self.generation,
            viewport: clamp_viewport(candidate, self.limits.as_ref()),
        };
        (frame, self.elapsed >= self.decay.duration())
    }
}

/// Owns a plot's gesture‑driven raw viewport.
///
/// While [`is_active`](Self::is_active) is `true` the plot should display
/// [`viewport`](Self::viewport); otherwise it shows the host's target
/// viewport (see [`resolve`](Self::resolve)).
#[derive(Clone, Debug)]
pub struct ViewportController {
    viewport: Rect,
    active: bool,
    generation: u64,
    fling: Option<FlingTask>,
    config: FlingConfig,
}

impl ViewportController {
    /// Creates an inactive controller holding `initial`.
    #[must_use]
    pub fn new(initial: Rect) -> Self {
        Self::with_config(initial, FlingConfig::default())
    }

    /// Creates an inactive controller with custom fling tuning.
    #[must_use]
    pub fn with_config(initial: Rect, config: FlingConfig) -> Self {
        Self {
            viewport: initial,
            active: false,
            generation: 0,
            fling: None,
            config,
        }
    }

    /// Current viewport snapshot.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Returns `true` while a gesture (or its fling) owns the viewport.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` while a fling is running.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    /// Number of operations started so far; bumps on every set, fling, and finish.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fling tuning.
    #[must_use]
    pub fn config(&self) -> &FlingConfig {
        &self.config
    }

    /// Replaces the fling tuning; affects flings started afterwards.
    pub fn set_config(&mut self, config: FlingConfig) {
        self.config = config;
    }

    /// The viewport to display: ours while active, otherwise `target`.
    #[must_use]
    pub fn resolve(&self, target: Rect) -> Rect {
        if self.active { self.viewport } else { target }
    }

    /// Snaps to `value` (clamped into `limits`) and marks the controller active.
    ///
    /// Any running fling is cancelled before the write. Returns the change
    /// notification, or `None` if the viewport did not change or the clamped
    /// value was invalid (in which case the previous viewport is kept).
    pub fn set_viewport(
        &mut self,
        value: Rect,
        limits: Option<&ViewportLimits>,
    ) -> Option<ViewportChange> {
        self.begin_operation();
        self.active = true;
        let generation = self.generation;
        self.commit_with_cause(
            FlingFrame {
                generation,
                viewport: clamp_viewport(value, limits),
            },
            ChangeCause::Set,
        )
    }

    /// Starts a fling with `velocity` in raw units per second.
    ///
    /// The controller becomes active immediately; frames are produced by
    /// [`advance`](Self::advance). A fling that would not move (zero or
    /// non‑finite velocity) is not started.
    pub fn fling_viewport(&mut self, velocity: Vec2, limits: Option<ViewportLimits>) {
        self.begin_operation();
        self.active = true;
        if !velocity.is_finite() {
            debug!("ignoring fling with non-finite velocity {velocity:?}");
            return;
        }
        let decay = FlingDecay::new(velocity, self.viewport, &self.config);
        if decay.is_at_rest() {
            return;
        }
        debug!(
            "fling started: velocity {velocity:?}, duration {:?}, generation {}",
            decay.duration(),
            self.generation
        );
        self.fling = Some(FlingTask {
            generation: self.generation,
            origin: self.viewport,
            decay,
            limits,
            elapsed: Duration::ZERO,
        });
    }

    /// Stops any fling and hands control back to the target viewport.
    ///
    /// Calling this on an idle controller is a no‑op apart from clearing the
    /// active flag.
    pub fn finish(&mut self) {
        self.begin_operation();
        self.active = false;
    }

    /// Advances a running fling by one redraw tick and publishes the frame.
    pub fn advance(&mut self, dt: Duration) -> Option<ViewportChange> {
        let frame = self.next_fling_frame(dt)?;
        self.commit(frame)
    }

    /// Computes the next fling frame without writing it.
    ///
    /// Returns `None` when no fling is running. The fling is retired once its
    /// final frame has been computed.
    pub fn next_fling_frame(&mut self, dt: Duration) -> Option<FlingFrame> {
        let task = self.fling.as_mut()?;
        let (frame, done) = task.step(dt);
        if done {
            debug!("fling finished at {:?}", frame.viewport);
            self.fling = None;
        }
        Some(frame)
    }

    /// Writes a fling frame, unless it was computed before the latest operation.
    pub fn commit(&mut self, frame: FlingFrame) -> Option<ViewportChange> {
        self.commit_with_cause(frame, ChangeCause::Fling)
    }

    fn begin_operation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.fling.take().is_some() {
            debug!("fling cancelled (generation {})", self.generation);
        }
    }

    fn commit_with_cause(&mut self, frame: FlingFrame, cause: ChangeCause) -> Option<ViewportChange> {
        if frame.generation != self.generation {
            debug!(
                "discarding stale viewport write from generation {} (current {})",
                frame.generation, self.generation
            );
            return None;
        }
        let viewport = frame.viewport;
        if !is_valid_viewport(viewport) {
            debug!("rejecting invalid viewport {viewport:?}; keeping {:?}", self.viewport);
            return None;
        }
        if viewport == self.viewport {
            return None;
        }
        trace!("viewport {viewport:?} ({cause:?})");
        self.viewport = viewport;
        Some(ViewportChange { viewport, cause })
    }
}

fn is_valid_viewport(rect: Rect) -> bool {
    is_finite_rect(rect) && rect.width() != 0.0 && rect.height() != 0.0
}
