// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End‑to‑end tests for `vernier_gesture`: pointer events in, viewport out.

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use vernier_gesture::{
    AxisLock, GestureEvent, GestureRecognizer, PointerId, PointerTracker, apply_gesture,
};
use vernier_transform::{ScreenRect, Transform, ViewportLimits};
use vernier_viewport::ViewportController;

struct Harness {
    transform: Transform,
    controller: ViewportController,
    recognizer: GestureRecognizer,
    tracker: PointerTracker,
    lock: AxisLock,
    limits: Option<ViewportLimits>,
    now: Duration,
}

impl Harness {
    fn new(raw: Rect) -> Self {
        let transform = Transform::new(ScreenRect::new(0, 0, 400, 300), raw);
        Self {
            controller: ViewportController::new(raw),
            transform,
            recognizer: GestureRecognizer::default(),
            tracker: PointerTracker::new(),
            lock: AxisLock::NONE,
            limits: None,
            now: Duration::ZERO,
        }
    }

    fn pump(&mut self) -> Vec<GestureEvent> {
        let mut frame = self.tracker.frame(self.now);
        self.now += Duration::from_millis(8);
        let events = self.recognizer.handle_frame(&mut frame);
        for event in &events {
            let _ = apply_gesture(
                &mut self.controller,
                &self.transform,
                event,
                self.limits.as_ref(),
                self.lock,
            );
            self.transform = Transform::new(self.transform.viewport_screen(), self.controller.viewport());
        }
        events.into_vec()
    }

    fn pinch(&mut self, center: Point, from: Vec2, to: Vec2) {
        self.tracker.down(PointerId(1), center - from);
        self.tracker.down(PointerId(2), center + from);
        let _ = self.pump();
        self.tracker.moved(PointerId(1), center - to);
        self.tracker.moved(PointerId(2), center + to);
        let _ = self.pump();
    }
}

fn assert_rect_close(a: Rect, b: Rect) {
    let d = [a.x0 - b.x0, a.y0 - b.y0, a.x1 - b.x1, a.y1 - b.y1];
    assert!(d.iter().all(|d| d.abs() < 1e-9), "{a:?} != {b:?}");
}

#[test]
fn symmetric_pinch_zooms_about_the_centroid() {
    let raw = Rect::new(-10.0, 7.5, 30.0, -22.5);
    for zoom in [0.5, 1.5, 2.0, 3.0] {
        let mut h = Harness::new(raw);
        let c = Point::new(120.0, 210.0);
        let under = h.transform.to_raw_point(c);

        h.pinch(c, Vec2::new(40.0, 30.0), Vec2::new(40.0 * zoom, 30.0 * zoom));

        let vp = h.controller.viewport();
        let after = h.transform.to_raw_point(c);
        assert!((after - under).hypot() < 1e-3, "zoom {zoom}: {after:?} != {under:?}");
        assert!((vp.width() - raw.width() / zoom).abs() < 1e-9, "zoom {zoom}: {vp:?}");
        assert!((vp.height() - raw.height() / zoom).abs() < 1e-9, "zoom {zoom}: {vp:?}");
    }
}

#[test]
fn horizontal_pinch_only_zooms_x() {
    let raw = Rect::new(0.0, 10.0, 40.0, 0.0);
    let mut h = Harness::new(raw);
    h.pinch(Point::new(200.0, 150.0), Vec2::new(60.0, 4.0), Vec2::new(120.0, 4.0));
    let vp = h.controller.viewport();
    assert!((vp.width() - 20.0).abs() < 1e-9);
    assert!((vp.height() + 10.0).abs() < 1e-9);
}

#[test]
fn locked_axis_stays_put_during_pinch_and_pan() {
    let raw = Rect::new(0.0, 10.0, 40.0, 0.0);
    let mut h = Harness::new(raw);
    h.lock = AxisLock::Y;
    h.pinch(Point::new(200.0, 150.0), Vec2::new(40.0, 40.0), Vec2::new(80.0, 80.0));
    let c = Point::new(200.0, 150.0);
    for offset in [10.0, 20.0, 30.0] {
        h.tracker.moved(PointerId(1), c - Vec2::new(80.0, 80.0) + Vec2::new(0.0, offset));
        h.tracker.moved(PointerId(2), c + Vec2::new(80.0, 80.0) + Vec2::new(0.0, offset));
        let _ = h.pump();
    }
    let vp = h.controller.viewport();
    assert!((vp.y0 - 10.0).abs() < 1e-9 && vp.y1.abs() < 1e-9, "y moved: {vp:?}");
    assert!((vp.width() - 20.0).abs() < 1e-9);
}

#[test]
fn drag_into_limits_translates_without_zooming() {
    let raw = Rect::new(0.0, 10.0, 40.0, 0.0);
    let mut h = Harness::new(raw);
    h.limits = Some(ViewportLimits::new(Rect::new(-5.0, 0.0, 45.0, 10.0)));
    h.tracker.down(PointerId(1), Point::new(100.0, 100.0));
    let _ = h.pump();
    // Drag right by 200 px = 20 raw units; only 5 are available.
    for step in 1..=10 {
        h.tracker.moved(PointerId(1), Point::new(100.0 + 20.0 * f64::from(step), 100.0));
        let _ = h.pump();
    }
    assert_rect_close(h.controller.viewport(), Rect::new(-5.0, 10.0, 35.0, 0.0));
}

#[test]
fn release_flings_and_the_fling_can_be_cancelled() {
    let raw = Rect::new(0.0, 10.0, 40.0, 0.0);
    let mut h = Harness::new(raw);
    h.tracker.down(PointerId(1), Point::new(100.0, 100.0));
    let _ = h.pump();
    for step in 1..=6 {
        h.tracker.moved(PointerId(1), Point::new(100.0 - 10.0 * f64::from(step), 100.0));
        let _ = h.pump();
    }
    h.tracker.up(PointerId(1), Point::new(40.0, 100.0));
    let events = h.pump();
    assert!(matches!(events.as_slice(), [GestureEvent::Fling(_), GestureEvent::End]));
    assert!(h.controller.is_flinging());

    let before = h.controller.viewport();
    let change = h.controller.advance(Duration::from_millis(16)).unwrap();
    assert!(change.viewport.x0 > before.x0, "finger moved left, viewport moves right");

    // A new touch cancels the running fling.
    h.tracker.down(PointerId(3), Point::new(10.0, 10.0));
    let _ = h.pump();
    assert!(!h.controller.is_flinging());
}
