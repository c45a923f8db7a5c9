// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vernier Items: what a plot draws, and which of it is on screen.
//!
//! A [`PlotItem`] is one of a closed set of variants:
//!
//! - [`Line`]: a polyline of raw samples.
//! - [`Marker`] (`PlotItem::Point`): one raw position drawn with a fixed pixel size.
//! - [`TickSet`]: grid lines whose positions are chosen per redraw from a tick
//!   hierarchy (see `vernier_ticks`).
//! - [`MarkSet`]: lines at fixed raw values along one axis.
//!
//! Each item has a raw bounding box and a fixed per‑side pixel extent for
//! what overflows it (stroke width, marker size, labels placed with an
//! [`Anchor`]). Culling maps the raw box to screen space, grows it by the
//! extent, and keeps the item when the result touches the screen viewport,
//! shared edges included.
//!
//! Items live in the ordered groups of [`PlotItems`]; every item has a stable
//! global index (the sizes of the preceding groups plus its index in its own
//! group) that [`PlotItems::visible`] reports and [`PlotItems::get`] resolves.
//!
//! This crate does not render anything. Hosts take the visible items and the
//! current `Transform` and issue their own draw calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use vernier_items::{Line, Marker, PlotItems};
//! use vernier_transform::{ScreenRect, Transform};
//!
//! let mut items = PlotItems::new();
//! let series = items.add_group();
//! items.push(series, Line::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)], 2.0));
//! let labels = items.add_group();
//! items.push(labels, Marker::new(Point::new(50.0, 0.0), Size::new(4.0, 4.0)));
//! items.push(labels, Marker::new(Point::new(8.0, 8.0), Size::new(4.0, 4.0)));
//!
//! // 0..10 on both axes, y up.
//! let transform = Transform::new(
//!     ScreenRect::new(0, 0, 100, 100),
//!     Rect::new(0.0, 10.0, 10.0, 0.0),
//! );
//! let visible: Vec<usize> = items.visible(&transform).map(|v| v.global_index).collect();
//! assert_eq!(visible, [0, 2]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod group;
mod item;
mod visibility;

pub use anchor::Anchor;
pub use group::{GroupId, PlotItems};
pub use item::{Label, Line, MarkSet, Marker, PlotItem, TickSet};
pub use visibility::{VisibleItem, overlaps_inclusive, screen_bounds, visible_bounds};
