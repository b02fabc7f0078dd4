// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-by-side placement of bars plottables.

extern crate alloc;

use alloc::vec::Vec;

use plotkit_core::{Axis, AxisOrientation};
use smallvec::SmallVec;

use crate::plot::{BarsId, GroupId, LinkError, Plot};

/// How [`BarsGroup::spacing`] is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpacingType {
    /// Spacing is given in pixels.
    #[default]
    Absolute,
    /// Spacing is a fraction of the axis rect size in the key axis direction.
    AxisRectRatio,
    /// Spacing is given in key axis coordinates, so it scales with zoom (and varies with the key
    /// on logarithmic axes).
    PlotCoords,
}

/// A set of bars plottables drawn next to each other at the same keys.
///
/// Stacked bars count once per stack: only stack roots (bars with nothing below them) are laid
/// out, and the bars above a root follow its offset. Members are added and removed through
/// [`Plot::group_append`], [`Plot::group_insert`], [`Plot::group_remove`] and
/// [`Plot::set_bars_group`].
#[derive(Clone, Debug, PartialEq)]
pub struct BarsGroup {
    bars: Vec<BarsId>,
    spacing_type: SpacingType,
    spacing: f64,
}

impl Default for BarsGroup {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            spacing_type: SpacingType::Absolute,
            spacing: 4.0,
        }
    }
}

impl BarsGroup {
    /// Returns the members in layout order.
    pub fn bars(&self) -> &[BarsId] {
        &self.bars
    }

    /// Returns the member at `index`.
    pub fn bars_at(&self, index: usize) -> Option<BarsId> {
        let bars = self.bars.get(index).copied();
        if bars.is_none() {
            log::warn!("bars group index out of bounds: {index}");
        }
        bars
    }

    /// Returns the number of members.
    pub fn size(&self) -> usize {
        self.bars.len()
    }

    /// Returns `true` if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns `true` if `bars` is a member.
    pub fn contains(&self, bars: BarsId) -> bool {
        self.bars.contains(&bars)
    }

    /// Returns how [`Self::spacing`] is interpreted.
    pub fn spacing_type(&self) -> SpacingType {
        self.spacing_type
    }

    /// Sets how [`Self::spacing`] is interpreted.
    pub fn set_spacing_type(&mut self, spacing_type: SpacingType) {
        self.spacing_type = spacing_type;
    }

    /// Returns the gap between neighbouring bars.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Sets the gap between neighbouring bars, in units of [`Self::spacing_type`].
    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    /// Sets spacing type and spacing, returning `self`.
    pub fn with_spacing(mut self, spacing_type: SpacingType, spacing: f64) -> Self {
        self.spacing_type = spacing_type;
        self.spacing = spacing;
        self
    }

    fn register(&mut self, bars: BarsId) {
        if !self.bars.contains(&bars) {
            self.bars.push(bars);
        }
    }

    fn unregister(&mut self, bars: BarsId) {
        if let Some(index) = self.bars.iter().position(|b| *b == bars) {
            self.bars.remove(index);
        }
    }
}

impl<A: Axis> Plot<A> {
    /// Adds a group with the spacing settings of `group` and returns its id.
    ///
    /// The new group starts without members.
    pub fn add_group(&mut self, group: BarsGroup) -> GroupId {
        let id = GroupId(self.allocate_id());
        // Membership only ever comes from the bars side.
        let group = BarsGroup {
            bars: Vec::new(),
            ..group
        };
        self.groups.insert(id, group);
        id
    }

    /// Removes a group, detaching (not removing) its members.
    pub fn remove_group(&mut self, group: GroupId) -> Option<BarsGroup> {
        self.group_clear(group);
        self.groups.remove(&group)
    }

    /// Returns the group with the given id.
    pub fn group(&self, group: GroupId) -> Option<&BarsGroup> {
        self.groups.get(&group)
    }

    /// Returns the group with the given id, mutably (for spacing settings).
    pub fn group_mut(&mut self, group: GroupId) -> Option<&mut BarsGroup> {
        self.groups.get_mut(&group)
    }

    /// Returns the group `bars` belongs to.
    pub fn bars_group(&self, bars: BarsId) -> Option<GroupId> {
        self.bars.get(&bars).and_then(|b| b.group)
    }

    /// Moves `bars` into `group`, or out of any group with `None`.
    ///
    /// The bars leave their previous group first. Joining a group appends at the end.
    pub fn set_bars_group(
        &mut self,
        bars: BarsId,
        group: Option<GroupId>,
    ) -> Result<(), LinkError> {
        self.bars_or_warn(bars)?;
        if let Some(group) = group {
            self.group_or_warn(group)?;
        }
        self.relink_group(bars, group);
        Ok(())
    }

    /// Takes `bars` out of its group, if any.
    pub(crate) fn leave_group(&mut self, bars: BarsId) {
        self.relink_group(bars, None);
    }

    /// Updates both sides of the membership link. Unknown ids are skipped.
    fn relink_group(&mut self, bars: BarsId, group: Option<GroupId>) {
        let Some(b) = self.bars.get_mut(&bars) else {
            return;
        };
        let previous = core::mem::replace(&mut b.group, group);
        if let Some(previous) = previous
            && let Some(g) = self.groups.get_mut(&previous)
        {
            g.unregister(bars);
        }
        if let Some(group) = group
            && let Some(g) = self.groups.get_mut(&group)
        {
            g.register(bars);
        }
    }

    /// Appends `bars` to `group`.
    pub fn group_append(&mut self, group: GroupId, bars: BarsId) -> Result<(), LinkError> {
        if self.group_or_warn(group)?.contains(bars) {
            log::debug!("{bars:?} is already in bars group {group:?}");
            return Ok(());
        }
        self.set_bars_group(bars, Some(group))
    }

    /// Inserts `bars` into `group` at `index`, or moves it there if it already is a member.
    ///
    /// `index` is clamped to the valid member positions.
    pub fn group_insert(
        &mut self,
        group: GroupId,
        index: usize,
        bars: BarsId,
    ) -> Result<(), LinkError> {
        if !self.group_or_warn(group)?.contains(bars) {
            self.set_bars_group(bars, Some(group))?;
        }
        if let Some(g) = self.groups.get_mut(&group)
            && let Some(from) = g.bars.iter().position(|b| *b == bars)
        {
            let to = index.min(g.bars.len() - 1);
            let moved = g.bars.remove(from);
            g.bars.insert(to, moved);
        }
        Ok(())
    }

    /// Removes `bars` from `group`.
    pub fn group_remove(&mut self, group: GroupId, bars: BarsId) -> Result<(), LinkError> {
        if !self.group_or_warn(group)?.contains(bars) {
            log::debug!("{bars:?} is not in bars group {group:?}");
            return Ok(());
        }
        self.set_bars_group(bars, None)
    }

    /// Removes all members from `group`.
    pub fn group_clear(&mut self, group: GroupId) {
        let Ok(g) = self.group_or_warn(group) else {
            return;
        };
        let members = g.bars.clone();
        for bars in members {
            self.leave_group(bars);
        }
    }

    /// Returns the pixel offset along the key axis for `bars` in `group` at `key_coord`.
    ///
    /// The stack roots of all members are laid out side by side, centred on the key. The
    /// returned offset moves the centre of `bars`' stack root to its slot. Returns `0` for the
    /// middle root of an odd-sized layout and for bars whose root is not in the group.
    pub fn key_pixel_offset(&self, group: GroupId, bars: BarsId, key_coord: f64) -> f64 {
        let Some(g) = self.groups.get(&group) else {
            log::warn!("unknown bars group {group:?}");
            return 0.0;
        };
        let mut roots: SmallVec<[BarsId; 8]> = SmallVec::new();
        for member in &g.bars {
            let root = self.stack_root(*member);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        let this_root = self.stack_root(bars);
        let Some(index) = roots.iter().position(|r| *r == this_root) else {
            return 0.0;
        };

        let n = roots.len();
        let center = (n - 1) / 2;
        if n % 2 == 1 && index == center {
            return 0.0;
        }
        let width = |id: BarsId| {
            self.pixel_width(id, key_coord)
                .map_or(0.0, |(lower, upper)| (upper - lower).abs())
        };
        let spacing = |id: BarsId| self.group_pixel_spacing(g, id, key_coord);

        let mut result = 0.0;
        if (index as f64) < (n as f64 - 1.0) / 2.0 {
            let start = if n % 2 == 0 {
                let start = n / 2 - 1;
                result -= spacing(roots[start]) * 0.5;
                start
            } else {
                result -= width(roots[center]) * 0.5;
                result -= spacing(roots[center]);
                center - 1
            };
            for &root in roots[index + 1..=start].iter().rev() {
                result -= width(root);
                result -= spacing(root);
            }
            result -= width(roots[index]) * 0.5;
        } else {
            let start = if n % 2 == 0 {
                let start = n / 2;
                result += spacing(roots[start]) * 0.5;
                start
            } else {
                result += width(roots[center]) * 0.5;
                result += spacing(roots[center]);
                center + 1
            };
            for &root in &roots[start..index] {
                result += width(root);
                result += spacing(root);
            }
            result += width(roots[index]) * 0.5;
        }
        result
    }

    /// Returns the gap in pixels that `group` leaves after `bars` at `key_coord`.
    pub fn pixel_spacing(&self, group: GroupId, bars: BarsId, key_coord: f64) -> f64 {
        match self.groups.get(&group) {
            Some(g) => self.group_pixel_spacing(g, bars, key_coord),
            None => {
                log::warn!("unknown bars group {group:?}");
                0.0
            }
        }
    }

    fn group_pixel_spacing(&self, group: &BarsGroup, bars: BarsId, key_coord: f64) -> f64 {
        let key_axis = || self.bars_with_axes(bars).map(|(_, key_axis, _)| key_axis);
        match group.spacing_type {
            SpacingType::Absolute => group.spacing,
            SpacingType::AxisRectRatio => key_axis().map_or(0.0, |axis| {
                let rect = axis.axis_rect();
                match axis.orientation() {
                    AxisOrientation::Horizontal => rect.width() * group.spacing,
                    AxisOrientation::Vertical => rect.height() * group.spacing,
                }
            }),
            SpacingType::PlotCoords => key_axis().map_or(0.0, |axis| {
                axis.coord_to_pixel(key_coord + group.spacing) - axis.coord_to_pixel(key_coord)
            }),
        }
    }

    /// Returns the bottom-most bars of `bars`' stack.
    fn stack_root(&self, bars: BarsId) -> BarsId {
        let mut root = bars;
        while let Some(below) = self.bar_below(root) {
            root = below;
        }
        root
    }

    fn group_or_warn(&self, group: GroupId) -> Result<&BarsGroup, LinkError> {
        self.groups.get(&group).ok_or_else(|| {
            log::warn!("unknown bars group {group:?}");
            LinkError::UnknownGroup(group)
        })
    }
}
