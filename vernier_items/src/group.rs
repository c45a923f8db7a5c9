// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use vernier_transform::Transform;

use crate::PlotItem;
use crate::visibility::{VisibleItem, visible_bounds};

/// Handle to a group inside [`PlotItems`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

/// Plot items organized in ordered groups.
///
/// Groups let a host replace one family of items (say, the samples of one
/// series) without touching the others. Every item also has a global index,
/// its position when all groups are concatenated in order; the group start
/// offsets are kept up to date on every mutation, so resolving either way is
/// cheap.
#[derive(Clone, Debug, Default)]
pub struct PlotItems {
    groups: Vec<Vec<PlotItem>>,
    /// `offsets[g]` is the global index of the first item of group `g`.
    offsets: Vec<usize>,
    len: usize,
}

impl PlotItems {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty group.
    pub fn add_group(&mut self) -> GroupId {
        self.groups.push(Vec::new());
        self.offsets.push(self.len);
        GroupId(self.groups.len() - 1)
    }

    /// Appends `item` to `group`, returning its global index, or `None` for an unknown group.
    ///
    /// Items in later groups shift up by one.
    pub fn push(&mut self, group: GroupId, item: impl Into<PlotItem>) -> Option<usize> {
        let items = self.groups.get_mut(group.0)?;
        items.push(item.into());
        let global = self.offsets[group.0] + items.len() - 1;
        self.recompute_offsets(group.0);
        Some(global)
    }

    /// Replaces the items of `group`. Returns `false` for an unknown group.
    pub fn set_group(&mut self, group: GroupId, items: Vec<PlotItem>) -> bool {
        let Some(slot) = self.groups.get_mut(group.0) else {
            return false;
        };
        *slot = items;
        self.recompute_offsets(group.0);
        true
    }

    /// Removes all items of `group`, keeping the group itself.
    pub fn clear_group(&mut self, group: GroupId) -> bool {
        self.set_group(group, Vec::new())
    }

    /// The items of `group`.
    #[must_use]
    pub fn group(&self, group: GroupId) -> Option<&[PlotItem]> {
        self.groups.get(group.0).map(Vec::as_slice)
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of items across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no group holds an item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Global index of item `local` in `group`.
    #[must_use]
    pub fn global_index(&self, group: GroupId, local: usize) -> Option<usize> {
        let items = self.groups.get(group.0)?;
        (local < items.len()).then(|| self.offsets[group.0] + local)
    }

    /// Resolves a global index to `(group, local index, item)`.
    #[must_use]
    pub fn get(&self, global: usize) -> Option<(GroupId, usize, &PlotItem)> {
        if global >= self.len {
            return None;
        }
        // Last group starting at or before `global`; empty groups share a
        // start with their successor, so this lands on the non‑empty one.
        let group = self.offsets.partition_point(|start| *start <= global) - 1;
        let local = global - self.offsets[group];
        Some((GroupId(group), local, &self.groups[group][local]))
    }

    /// All items in global order, with their group and local index.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, usize, &PlotItem)> + '_ {
        self.groups.iter().enumerate().flat_map(|(g, items)| {
            items
                .iter()
                .enumerate()
                .map(move |(local, item)| (GroupId(g), local, item))
        })
    }

    /// Items whose inflated screen bounds touch the screen viewport, in global order.
    ///
    /// Lazy and allocation free, so it can run on every redraw.
    pub fn visible<'a>(
        &'a self,
        transform: &Transform,
    ) -> impl Iterator<Item = VisibleItem<'a>> + 'a {
        let transform = *transform;
        self.groups
            .iter()
            .zip(&self.offsets)
            .enumerate()
            .flat_map(move |(g, (items, offset))| {
                items.iter().enumerate().filter_map(move |(local, item)| {
                    let screen_bounds = visible_bounds(item, &transform)?;
                    Some(VisibleItem {
                        item,
                        screen_bounds,
                        group: GroupId(g),
                        local_index: local,
                        global_index: offset + local,
                    })
                })
            })
    }

    fn recompute_offsets(&mut self, from: usize) {
        let mut start = self.offsets[from];
        for (offset, items) in self.offsets[from..].iter_mut().zip(&self.groups[from..]) {
            *offset = start;
            start += items.len();
        }
        self.len = start;
    }
}
