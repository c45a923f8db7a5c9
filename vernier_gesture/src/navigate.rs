// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying gesture events to a viewport controller.

use kurbo::{Point, Rect, Vec2};
use vernier_transform::{Transform, ViewportLimits};
use vernier_viewport::{ViewportChange, ViewportController};

use crate::recognizer::{GestureEvent, GestureStep};

/// Axes on which gestures have no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLock {
    /// No pan or zoom along x.
    pub x: bool,
    /// No pan or zoom along y.
    pub y: bool,
}

impl AxisLock {
    /// Both axes free.
    pub const NONE: Self = Self { x: false, y: false };
    /// Only y moves.
    pub const X: Self = Self { x: true, y: false };
    /// Only x moves.
    pub const Y: Self = Self { x: false, y: true };
    /// Gestures are ignored entirely.
    pub const BOTH: Self = Self { x: true, y: true };

    /// `true` if both axes are locked.
    #[must_use]
    pub fn is_all(self) -> bool {
        self.x && self.y
    }

    /// Removes pan and zoom on locked axes.
    #[must_use]
    pub fn apply(self, step: GestureStep) -> GestureStep {
        GestureStep {
            centroid: step.centroid,
            pan: self.mask(step.pan),
            zoom: Vec2::new(
                if self.x { 1.0 } else { step.zoom.x },
                if self.y { 1.0 } else { step.zoom.y },
            ),
        }
    }

    /// Zeroes the locked components of `v`.
    #[must_use]
    pub fn mask(self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.x { 0.0 } else { v.x },
            if self.y { 0.0 } else { v.y },
        )
    }
}

/// The raw viewport after zooming about the step's centroid and panning.
///
/// The screen‑space top left corner moves to
/// `(left - c) / zoom + c - pan` per axis, which keeps the raw point under
/// the centroid fixed on screen while the window scales; the raw extent is
/// divided by the zoom.
#[must_use]
pub fn zoom_about_centroid(transform: &Transform, step: &GestureStep) -> Rect {
    let screen = transform.viewport_screen();
    let c = step.centroid;
    let top_left = Point::new(
        (f64::from(screen.left) - c.x) / step.zoom.x + c.x - step.pan.x,
        (f64::from(screen.top) - c.y) / step.zoom.y + c.y - step.pan.y,
    );
    let origin = transform.to_raw_point(top_left);
    let raw = transform.viewport_raw();
    Rect::new(
        origin.x,
        origin.y,
        origin.x + raw.width() / step.zoom.x,
        origin.y + raw.height() / step.zoom.y,
    )
}

/// Converts a screen release velocity to a raw viewport velocity.
///
/// The viewport moves opposite to the fingers, so the content follows them.
#[must_use]
pub fn fling_velocity_to_raw(transform: &Transform, velocity: Vec2) -> Vec2 {
    -transform.to_raw_vector(velocity)
}

/// Feeds one gesture event into `controller`.
///
/// `transform` must describe the currently displayed viewport. On
/// [`GestureEvent::Start`] the displayed viewport is snapshotted into the
/// controller unclamped, so a gesture always starts from what the user sees.
/// Returns the committed change, if any; flings report theirs from
/// [`ViewportController::advance`].
pub fn apply_gesture(
    controller: &mut ViewportController,
    transform: &Transform,
    event: &GestureEvent,
    limits: Option<&ViewportLimits>,
    lock: AxisLock,
) -> Option<ViewportChange> {
    if lock.is_all() {
        return None;
    }
    match event {
        GestureEvent::Start => controller.set_viewport(transform.viewport_raw(), None),
        GestureEvent::Step(step) => {
            let step = lock.apply(*step);
            controller.set_viewport(zoom_about_centroid(transform, &step), limits)
        }
        GestureEvent::Fling(velocity) => {
            let velocity = lock.mask(fling_velocity_to_raw(transform, *velocity));
            controller.fling_viewport(velocity, limits.copied());
            None
        }
        GestureEvent::End => None,
    }
}
