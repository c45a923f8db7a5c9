// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer frames and the tracker that builds them.

use core::time::Duration;

use hashbrown::HashMap;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use log::trace;
use smallvec::SmallVec;

/// Identifies one pointer (a finger, a pen, a mouse) for the lifetime of its contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// State of one pointer in a frame, together with its state in the previous frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerChange {
    /// Pointer identity.
    pub id: PointerId,
    /// Position in screen pixels.
    pub position: Point,
    /// Position in the previous frame.
    pub previous_position: Point,
    /// Whether the pointer is down.
    pub pressed: bool,
    /// Whether the pointer was down in the previous frame.
    pub previous_pressed: bool,
    /// Set once some handler has claimed this change.
    pub consumed: bool,
}

impl PointerChange {
    /// `true` if the pointer went down in this frame.
    #[must_use]
    pub fn changed_to_down(&self) -> bool {
        self.pressed && !self.previous_pressed
    }

    /// `true` if the pointer moved since the previous frame.
    #[must_use]
    pub fn position_changed(&self) -> bool {
        self.position != self.previous_position
    }

    /// Marks the change as handled.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    /// `true` if the pointer was down in both this and the previous frame.
    fn is_held(&self) -> bool {
        self.pressed && self.previous_pressed
    }
}

/// All pointer changes observed at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerFrame {
    /// Timestamp of the frame, relative to any fixed epoch.
    pub time: Duration,
    /// One entry per tracked pointer.
    pub changes: SmallVec<[PointerChange; 4]>,
}

impl PointerFrame {
    /// Creates an empty frame at `time`.
    #[must_use]
    pub fn new(time: Duration) -> Self {
        Self {
            time,
            changes: SmallVec::new(),
        }
    }

    /// Adds a change, builder style.
    #[must_use]
    pub fn with_change(mut self, change: PointerChange) -> Self {
        self.changes.push(change);
        self
    }

    /// `true` if any pointer is down.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        self.changes.iter().any(|c| c.pressed)
    }

    /// `true` if any change has already been consumed.
    #[must_use]
    pub fn any_consumed(&self) -> bool {
        self.changes.iter().any(|c| c.consumed)
    }

    /// `true` if any pointer went down in this frame.
    #[must_use]
    pub fn any_changed_to_down(&self) -> bool {
        self.changes.iter().any(PointerChange::changed_to_down)
    }

    /// Centroid of the pointers held down across both frames, at their current positions.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        self.centroid_at(true)
    }

    /// Centroid of the same pointers at their previous positions.
    #[must_use]
    pub fn previous_centroid(&self) -> Option<Point> {
        self.centroid_at(false)
    }

    /// Mean absolute per‑axis distance of the held pointers from their centroid.
    ///
    /// This is a per‑axis measure rather than a Euclidean radius, which is
    /// what allows a horizontal pinch to zoom only horizontally.
    #[must_use]
    pub fn centroid_size(&self) -> Vec2 {
        self.centroid_size_at(true)
    }

    /// [`centroid_size`](Self::centroid_size) at the previous positions.
    #[must_use]
    pub fn previous_centroid_size(&self) -> Vec2 {
        self.centroid_size_at(false)
    }

    /// Movement of the centroid since the previous frame.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        match (self.centroid(), self.previous_centroid()) {
            (Some(current), Some(previous)) => current - previous,
            _ => Vec2::ZERO,
        }
    }

    /// Per‑axis zoom factor since the previous frame.
    ///
    /// An axis only reports a zoom when both its current and previous
    /// centroid size exceed `min_centroid_size`; otherwise its factor is 1.
    /// If one axis' centroid size exceeds the other's by more than
    /// `single_direction_ratio`, only that axis zooms.
    #[must_use]
    pub fn zoom(&self, min_centroid_size: f64, single_direction_ratio: f64) -> Vec2 {
        let current = self.centroid_size();
        let previous = self.previous_centroid_size();
        let axis = |now: f64, before: f64| {
            if now * before > 0.0 && now > min_centroid_size && before > min_centroid_size {
                now / before
            } else {
                1.0
            }
        };
        let zoom = Vec2::new(axis(current.x, previous.x), axis(current.y, previous.y));
        if current.x > single_direction_ratio * current.y {
            Vec2::new(zoom.x, 1.0)
        } else if current.y > single_direction_ratio * current.x {
            Vec2::new(1.0, zoom.y)
        } else {
            zoom
        }
    }

    fn held_positions(&self, current: bool) -> impl Iterator<Item = Point> + '_ {
        self.changes.iter().filter(|c| c.is_held()).map(move |c| {
            if current {
                c.position
            } else {
                c.previous_position
            }
        })
    }

    fn centroid_at(&self, current: bool) -> Option<Point> {
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for p in self.held_positions(current) {
            sum += p.to_vec2();
            count += 1;
        }
        (count > 0).then(|| (sum / f64::from(count)).to_point())
    }

    fn centroid_size_at(&self, current: bool) -> Vec2 {
        let Some(centroid) = self.centroid_at(current) else {
            return Vec2::ZERO;
        };
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for p in self.held_positions(current) {
            sum += Vec2::new((p.x - centroid.x).abs(), (p.y - centroid.y).abs());
            count += 1;
        }
        sum / f64::from(count)
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    order: u64,
    position: Point,
    previous_position: Point,
    pressed: bool,
    previous_pressed: bool,
    cancelled: bool,
}

/// Builds [`PointerFrame`]s from individual down/move/up/cancel events.
///
/// Feed the events of one input batch, then call [`frame`](Self::frame) to
/// obtain the frame for the recognizer. A pointer that was lifted or
/// cancelled appears in exactly one more frame (with `pressed == false`) and
/// is then forgotten. Cancelled pointers are reported as consumed.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    slots: HashMap<PointerId, Slot>,
    next_order: u64,
}

impl PointerTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pressed_count(&self) -> usize {
        self.slots.values().filter(|s| s.pressed).count()
    }

    /// `true` if no pointer is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// A pointer touched down at `position`.
    pub fn down(&mut self, id: PointerId, position: Point) {
        let order = self.next_order;
        let slot = self.slots.entry(id).or_insert_with(|| Slot {
            order,
            position,
            previous_position: position,
            pressed: false,
            previous_pressed: false,
            cancelled: false,
        });
        if slot.order == order {
            self.next_order += 1;
        }
        slot.position = position;
        slot.pressed = true;
        slot.cancelled = false;
    }

    /// A pointer moved. Returns `false` if the pointer is not down.
    pub fn moved(&mut self, id: PointerId, position: Point) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) if slot.pressed => {
                slot.position = position;
                true
            }
            _ => false,
        }
    }

    /// A pointer lifted at `position`. Returns `false` if the pointer is not down.
    pub fn up(&mut self, id: PointerId, position: Point) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) if slot.pressed => {
                slot.position = position;
                slot.pressed = false;
                true
            }
            _ => false,
        }
    }

    /// The platform cancelled a pointer (for example, a palm or a system gesture).
    pub fn cancel(&mut self, id: PointerId) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) => {
                slot.pressed = false;
                slot.cancelled = true;
                true
            }
            None => false,
        }
    }

    /// Cancels every tracked pointer.
    pub fn cancel_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.pressed = false;
            slot.cancelled = true;
        }
    }

    /// Emits the frame describing all changes since the previous frame.
    pub fn frame(&mut self, time: Duration) -> PointerFrame {
        let mut entries: SmallVec<[(u64, PointerChange); 4]> = self
            .slots
            .iter()
            .map(|(id, slot)| {
                (
                    slot.order,
                    PointerChange {
                        id: *id,
                        position: slot.position,
                        previous_position: slot.previous_position,
                        pressed: slot.pressed,
                        previous_pressed: slot.previous_pressed,
                        consumed: slot.cancelled,
                    },
                )
            })
            .collect();
        entries.sort_unstable_by_key(|(order, _)| *order);

        self.slots.retain(|_, slot| slot.pressed);
        for slot in self.slots.values_mut() {
            slot.previous_position = slot.position;
            slot.previous_pressed = slot.pressed;
        }

        let frame = PointerFrame {
            time,
            changes: entries.into_iter().map(|(_, change)| change).collect(),
        };
        trace!("pointer frame at {:?}: {} change(s)", time, frame.changes.len());
        frame
    }
}
