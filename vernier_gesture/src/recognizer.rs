// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan, per‑axis zoom, and fling recognition.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::pointer::PointerFrame;
use crate::velocity::VelocityTracker;

/// One incremental gesture step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureStep {
    /// Current centroid of the held pointers, in screen pixels.
    pub centroid: Point,
    /// Centroid movement since the previous frame.
    pub pan: Vec2,
    /// Per‑axis zoom factor since the previous frame; 1 means no zoom.
    pub zoom: Vec2,
}

/// Output of [`GestureRecognizer::handle_frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The first pointer of a touch sequence went down.
    Start,
    /// The committed gesture moved.
    Step(GestureStep),
    /// The last pointer lifted with this velocity (screen pixels per second).
    Fling(Vec2),
    /// The touch sequence is over.
    End,
}

/// Events produced by one frame.
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

/// State of one touch sequence, from first down to last up.
#[derive(Clone, Debug)]
pub struct GestureSession {
    pan: Vec2,
    zoom: Vec2,
    past_touch_slop: bool,
    pointer_count: usize,
    velocity: VelocityTracker,
}

impl GestureSession {
    fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: Vec2::new(1.0, 1.0),
            past_touch_slop: false,
            pointer_count: 0,
            velocity: VelocityTracker::new(),
        }
    }

    /// Pan accumulated while the sequence was still below the touch slop.
    #[must_use]
    pub fn accumulated_pan(&self) -> Vec2 {
        self.pan
    }

    /// Zoom accumulated while the sequence was still below the touch slop.
    #[must_use]
    pub fn accumulated_zoom(&self) -> Vec2 {
        self.zoom
    }

    /// `true` once the motion exceeded the touch slop and the sequence is a gesture.
    #[must_use]
    pub fn is_past_touch_slop(&self) -> bool {
        self.past_touch_slop
    }

    /// Pointer count of the last frame fed to the velocity tracker.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointer_count
    }

    fn accumulate(&mut self, frame: &PointerFrame, pan: Vec2, zoom: Vec2, touch_slop: f64) {
        self.zoom = Vec2::new(self.zoom.x * zoom.x, self.zoom.y * zoom.y);
        self.pan += pan;
        let size = frame.previous_centroid_size();
        let zoom_motion = Vec2::new((1.0 - self.zoom.x) * size.x, (1.0 - self.zoom.y) * size.y);
        if zoom_motion.hypot() > touch_slop || self.pan.hypot() > touch_slop {
            debug!(
                "gesture committed: pan {:?}, zoom {:?}",
                self.pan, self.zoom
            );
            self.past_touch_slop = true;
        }
    }
}

/// Turns pointer frames into gesture events.
///
/// Feed every [`PointerFrame`] to [`handle_frame`](Self::handle_frame). A
/// touch sequence produces:
///
/// - [`GestureEvent::Start`] when its first pointer goes down.
/// - [`GestureEvent::Step`] on every frame with motion, once the motion since
///   the start exceeded the touch slop. The pointer changes of such frames
///   are consumed.
/// - At most one [`GestureEvent::Fling`] when the last pointer lifts, if the
///   sequence was a gesture and the release speed is below the ceiling.
/// - [`GestureEvent::End`].
///
/// A frame in which some change was already consumed by someone else ends
/// the sequence without a fling.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl GestureRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Current thresholds.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the thresholds; a running sequence picks them up on its next frame.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// The running touch sequence, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Drops the running sequence without emitting anything.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Processes one frame.
    pub fn handle_frame(&mut self, frame: &mut PointerFrame) -> GestureEvents {
        let mut events = GestureEvents::new();
        let Some(session) = self.session.as_mut() else {
            if frame.any_changed_to_down() {
                debug!("touch sequence started at {:?}", frame.time);
                self.session = Some(GestureSession::new());
                events.push(GestureEvent::Start);
            }
            return events;
        };

        let cancelled = frame.any_consumed();
        if !cancelled {
            let config = &self.config;
            let zoom = frame.zoom(config.min_centroid_size, config.single_direction_ratio);
            let pan = frame.pan();
            let centroid = frame.centroid();

            if let Some(centroid) = centroid {
                if session.pointer_count == frame.changes.len() {
                    session.velocity.add_position(frame.time, centroid);
                } else {
                    session.velocity.reset();
                    session.pointer_count = frame.changes.len();
                }
            }

            if !session.past_touch_slop {
                session.accumulate(frame, pan, zoom, config.touch_slop);
            }

            if session.past_touch_slop {
                if let Some(centroid) = centroid
                    && (zoom != Vec2::new(1.0, 1.0) || pan != Vec2::ZERO)
                {
                    trace!("gesture step: centroid {centroid:?}, pan {pan:?}, zoom {zoom:?}");
                    events.push(GestureEvent::Step(GestureStep { centroid, pan, zoom }));
                }
                for change in &mut frame.changes {
                    if change.position_changed() {
                        change.consume();
                    }
                }
            }
        }

        if cancelled || !frame.any_pressed() {
            if cancelled {
                debug!("touch sequence cancelled");
            } else if session.past_touch_slop {
                let velocity = session.velocity.velocity();
                let ceiling = self.config.max_fling_velocity;
                if velocity.hypot2() < ceiling * ceiling {
                    debug!("fling with velocity {velocity:?}");
                    events.push(GestureEvent::Fling(velocity));
                } else {
                    debug!("discarding implausible fling velocity {velocity:?}");
                }
            }
            events.push(GestureEvent::End);
            self.session = None;
        }
        events
    }
}
