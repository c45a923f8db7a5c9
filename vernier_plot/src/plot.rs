// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Rect;
use log::{debug, warn};
use smallvec::SmallVec;
use vernier_gesture::{GestureRecognizer, PointerFrame, PointerTracker, apply_gesture};
use vernier_items::{PlotItem, PlotItems, VisibleItem};
use vernier_ticks::TickSelector;
use vernier_transform::{Axis, ScreenRect, Transform, TransformError, ViewportLimits};
use vernier_viewport::{ChangeCause, ViewportChange, ViewportController};

use crate::config::PlotConfig;
use crate::ticks::{AxisTicks, TickLines};

/// Viewport changes produced by one call.
pub type ViewportChanges = SmallVec<[ViewportChange; 4]>;

/// Everything a renderer needs for one redraw.
#[derive(Clone, Debug)]
pub struct PlotFrame<'a> {
    /// Mapping for this redraw.
    pub transform: Transform,
    /// Items touching the screen viewport, in global order.
    pub items: Vec<VisibleItem<'a>>,
    /// Tick lines for every visible tick set, in the same order.
    pub ticks: Vec<TickLines<'a>>,
}

/// One interactive plot: its items, its viewport, and the gestures driving it.
///
/// The host supplies a target viewport. Gestures take over the displayed
/// viewport through a [`ViewportController`] until [`finish`](Self::finish)
/// hands control back. Each redraw the host calls [`advance`](Self::advance)
/// to run flings and [`frame`](Self::frame) to get what to draw.
#[derive(Clone, Debug)]
pub struct Plot {
    config: PlotConfig,
    screen: ScreenRect,
    target: Rect,
    limits: Option<ViewportLimits>,
    controller: ViewportController,
    recognizer: GestureRecognizer,
    pointers: PointerTracker,
    items: PlotItems,
    x_ticks: TickSelector<AxisTicks>,
    y_ticks: TickSelector<AxisTicks>,
}

impl Plot {
    /// Creates a plot on `screen` showing `target`, with default settings.
    #[must_use]
    pub fn new(screen: ScreenRect, target: Rect) -> Self {
        Self::with_config(screen, target, PlotConfig::default())
    }

    /// Creates a plot with `config`.
    #[must_use]
    pub fn with_config(screen: ScreenRect, target: Rect, config: PlotConfig) -> Self {
        Self {
            config,
            screen,
            target,
            limits: None,
            controller: ViewportController::with_config(target, config.fling),
            recognizer: GestureRecognizer::new(config.gesture),
            pointers: PointerTracker::new(),
            items: PlotItems::new(),
            x_ticks: TickSelector::new(AxisTicks::default()),
            y_ticks: TickSelector::new(AxisTicks::default()),
        }
    }

    /// Current settings.
    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Replaces the settings. A gesture in progress is dropped if both axes become locked.
    pub fn set_config(&mut self, config: PlotConfig) {
        self.config = config;
        self.recognizer.set_config(config.gesture);
        self.controller.set_config(config.fling);
        if config.axis_lock.is_all() {
            self.recognizer.reset();
        }
    }

    /// Screen viewport in pixels.
    #[must_use]
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Moves or resizes the plot on screen.
    pub fn set_screen(&mut self, screen: ScreenRect) {
        self.screen = screen;
    }

    /// The host's target viewport.
    #[must_use]
    pub fn target_viewport(&self) -> Rect {
        self.target
    }

    /// Replaces the target viewport.
    ///
    /// The plot snaps to it unless a gesture owns the viewport, in which case
    /// it is shown after [`finish`](Self::finish). Returns a
    /// [`ChangeCause::Target`] change when the displayed viewport moved.
    pub fn set_target_viewport(&mut self, target: Rect) -> Option<ViewportChange> {
        let before = self.viewport();
        self.target = target;
        self.displayed_change(before)
    }

    /// Copies the `axes` edges of `source` into the target viewport.
    ///
    /// Feeding one plot's [`ViewportChange`]s through this keeps a second
    /// plot aligned with it along those axes.
    pub fn sync_target(
        &mut self,
        source: Rect,
        axes: impl IntoIterator<Item = Axis>,
    ) -> Option<ViewportChange> {
        let target = axes.into_iter().fold(self.target, |target, axis| {
            let (start, end) = axis.span(source);
            axis.with_span(target, start, end)
        });
        self.set_target_viewport(target)
    }

    /// Bounds gestures may not leave.
    #[must_use]
    pub fn limits(&self) -> Option<&ViewportLimits> {
        self.limits.as_ref()
    }

    /// Sets or clears the gesture bounds. Takes effect with the next gesture write.
    pub fn set_limits(&mut self, limits: Option<ViewportLimits>) {
        self.limits = limits;
    }

    /// The raw viewport being displayed.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.controller.resolve(self.target)
    }

    /// `true` while gestures own the displayed viewport.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.controller.is_active()
    }

    /// `true` while a fling is running.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.controller.is_flinging()
    }

    /// The viewport controller.
    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    /// Transform for the current screen and displayed viewport.
    pub fn transform(&self) -> Result<Transform, TransformError> {
        Transform::try_new(self.screen, self.viewport())
            .map(|t| t.with_corner_radius(self.config.corner_radius))
    }

    /// Stops gestures and flings and returns to the target viewport.
    pub fn finish(&mut self) -> Option<ViewportChange> {
        let before = self.viewport();
        self.recognizer.reset();
        self.controller.finish();
        self.displayed_change(before)
    }

    /// The pointer tracker that feeds [`process_pointers`](Self::process_pointers).
    pub fn pointers_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointers
    }

    /// Builds a frame from the pointer tracker and handles it.
    pub fn process_pointers(&mut self, time: Duration) -> ViewportChanges {
        let mut frame = self.pointers.frame(time);
        self.handle_pointer_frame(&mut frame)
    }

    /// Runs gesture recognition on `frame` and applies the result to the viewport.
    ///
    /// Changes consumed by a committed gesture are marked in `frame`. With
    /// both axes locked the frame is left untouched.
    pub fn handle_pointer_frame(&mut self, frame: &mut PointerFrame) -> ViewportChanges {
        let mut changes = ViewportChanges::new();
        let lock = self.config.axis_lock;
        if lock.is_all() {
            return changes;
        }
        for event in self.recognizer.handle_frame(frame) {
            let transform = match self.transform() {
                Ok(transform) => transform,
                Err(err) => {
                    warn!("dropping gesture, no transform for the current geometry: {err}");
                    self.recognizer.reset();
                    break;
                }
            };
            if let Some(change) = apply_gesture(
                &mut self.controller,
                &transform,
                &event,
                self.limits.as_ref(),
                lock,
            ) {
                changes.push(change);
            }
        }
        changes
    }

    /// Advances a running fling by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Option<ViewportChange> {
        self.controller.advance(dt)
    }

    /// The items.
    #[must_use]
    pub fn items(&self) -> &PlotItems {
        &self.items
    }

    /// The items, for editing.
    pub fn items_mut(&mut self) -> &mut PlotItems {
        &mut self.items
    }

    /// Sets the tick hierarchy used by tick sets on `axis`.
    pub fn set_ticks(&mut self, axis: Axis, levels: impl Into<AxisTicks>) {
        self.ticks_mut(axis).set_levels(levels.into());
    }

    /// The memoizing tick selector for `axis`.
    #[must_use]
    pub fn ticks(&self, axis: Axis) -> &TickSelector<AxisTicks> {
        match axis {
            Axis::X => &self.x_ticks,
            Axis::Y => &self.y_ticks,
        }
    }

    fn ticks_mut(&mut self, axis: Axis) -> &mut TickSelector<AxisTicks> {
        match axis {
            Axis::X => &mut self.x_ticks,
            Axis::Y => &mut self.y_ticks,
        }
    }

    /// Culls the items and selects ticks for one redraw.
    ///
    /// Returns `None`, with a warning, if the current geometry has no valid
    /// transform (for example before the first layout).
    pub fn frame(&mut self) -> Option<PlotFrame<'_>> {
        let transform = match self.transform() {
            Ok(transform) => transform,
            Err(err) => {
                warn!("skipping frame: {err}");
                return None;
            }
        };
        let items: Vec<VisibleItem<'_>> = self.items.visible(&transform).collect();
        let mut ranges = Vec::new();
        for visible in &items {
            let PlotItem::TickSet(set) = visible.item else {
                continue;
            };
            let selector = match set.axis {
                Axis::X => &mut self.x_ticks,
                Axis::Y => &mut self.y_ticks,
            };
            let range = selector.select_for(&transform, set.axis, set.max_ticks, set.label_px());
            ranges.push((visible.global_index, set.axis, range));
        }
        let (x_levels, y_levels) = (self.x_ticks.levels(), self.y_ticks.levels());
        let ticks = ranges
            .into_iter()
            .map(|(global_index, axis, range)| {
                let levels = match axis {
                    Axis::X => x_levels,
                    Axis::Y => y_levels,
                };
                TickLines::new(global_index, axis, range, levels)
            })
            .collect();
        Some(PlotFrame {
            transform,
            items,
            ticks,
        })
    }

    fn displayed_change(&self, before: Rect) -> Option<ViewportChange> {
        let viewport = self.viewport();
        if viewport == before {
            return None;
        }
        debug!("displaying target viewport {viewport:?}");
        Some(ViewportChange {
            viewport,
            cause: ChangeCause::Target,
        })
    }
}
