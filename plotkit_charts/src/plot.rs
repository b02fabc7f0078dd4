// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plot arena owning axes, bars and bars groups.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use plotkit_core::{Axis, PlotAxis};

use crate::bars::Bars;
use crate::bars_group::BarsGroup;

/// Identifies an axis owned by a [`Plot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId(pub u64);

/// Identifies a [`Bars`] plottable owned by a [`Plot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BarsId(pub u64);

/// Identifies a [`BarsGroup`] owned by a [`Plot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

/// Reasons a stacking or grouping edit was rejected.
///
/// Rejected edits leave the plot unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// The bars id does not belong to this plot.
    UnknownBars(BarsId),
    /// The group id does not belong to this plot.
    UnknownGroup(GroupId),
    /// Stacked bars must share both their key and their value axis.
    AxisMismatch,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBars(id) => write!(f, "unknown bars {}", id.0),
            Self::UnknownGroup(id) => write!(f, "unknown bars group {}", id.0),
            Self::AxisMismatch => f.write_str("bars do not share the same key and value axis"),
        }
    }
}

impl core::error::Error for LinkError {}

/// Owns the axes, bars and bars groups of one plot.
///
/// Bars reference their axes, stack neighbours and group by id. Every edit of those links goes
/// through the plot, so both sides of a link are always updated together.
#[derive(Debug)]
pub struct Plot<A: Axis = PlotAxis> {
    pub(crate) axes: HashMap<AxisId, A>,
    pub(crate) bars: HashMap<BarsId, Bars>,
    pub(crate) groups: HashMap<GroupId, BarsGroup>,
    /// Insertion order; also the paint order of [`Plot::draw_all`].
    pub(crate) bars_order: Vec<BarsId>,
    next_id: u64,
    selection_tolerance: f64,
}

impl<A: Axis> Default for Plot<A> {
    fn default() -> Self {
        Self {
            axes: HashMap::new(),
            bars: HashMap::new(),
            groups: HashMap::new(),
            bars_order: Vec::new(),
            next_id: 0,
            selection_tolerance: Self::DEFAULT_SELECTION_TOLERANCE,
        }
    }
}

impl<A: Axis> Plot<A> {
    /// Default hit-test tolerance in pixels.
    pub const DEFAULT_SELECTION_TOLERANCE: f64 = 8.0;

    /// Creates an empty plot.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds an axis and returns its id.
    pub fn add_axis(&mut self, axis: A) -> AxisId {
        let id = AxisId(self.allocate_id());
        self.axes.insert(id, axis);
        id
    }

    /// Returns the axis with the given id.
    pub fn axis(&self, id: AxisId) -> Option<&A> {
        self.axes.get(&id)
    }

    /// Returns the axis with the given id, mutably.
    pub fn axis_mut(&mut self, id: AxisId) -> Option<&mut A> {
        self.axes.get_mut(&id)
    }

    /// Adds a bars plottable on the given key and value axes.
    ///
    /// Returns `None` if either axis is unknown or both axes have the same orientation.
    pub fn add_bars(&mut self, key_axis: AxisId, value_axis: AxisId) -> Option<BarsId> {
        let (Some(key), Some(value)) = (self.axes.get(&key_axis), self.axes.get(&value_axis))
        else {
            log::warn!("cannot add bars: unknown key axis {key_axis:?} or value axis {value_axis:?}");
            return None;
        };
        if key.orientation() == value.orientation() {
            log::warn!("cannot add bars: key and value axis must be orthogonal");
            return None;
        }
        let id = BarsId(self.allocate_id());
        self.bars.insert(id, Bars::new(key_axis, value_axis));
        self.bars_order.push(id);
        Some(id)
    }

    /// Removes a bars plottable and returns it.
    ///
    /// The bars leave their group, and their stack neighbours are connected to each other.
    pub fn remove_bars(&mut self, id: BarsId) -> Option<Bars> {
        let Some(bars) = self.bars.get(&id) else {
            log::warn!("cannot remove unknown bars {id:?}");
            return None;
        };
        let (below, above, group) = (bars.bar_below, bars.bar_above, bars.group);
        if group.is_some() {
            self.leave_group(id);
        }
        self.connect(below, above);
        self.bars_order.retain(|b| *b != id);
        self.bars.remove(&id)
    }

    /// Returns the bars with the given id.
    pub fn bars(&self, id: BarsId) -> Option<&Bars> {
        self.bars.get(&id)
    }

    /// Returns the bars with the given id, mutably.
    ///
    /// Stack and group links are not reachable through this reference; use the plot's link
    /// methods instead.
    pub fn bars_mut(&mut self, id: BarsId) -> Option<&mut Bars> {
        self.bars.get_mut(&id)
    }

    /// Returns all bars ids in insertion order.
    pub fn bars_ids(&self) -> &[BarsId] {
        &self.bars_order
    }

    /// Returns the hit-test tolerance in pixels.
    pub fn selection_tolerance(&self) -> f64 {
        self.selection_tolerance
    }

    /// Sets the hit-test tolerance in pixels.
    pub fn set_selection_tolerance(&mut self, tolerance: f64) {
        self.selection_tolerance = tolerance;
    }

    pub(crate) fn bars_or_warn(&self, id: BarsId) -> Result<&Bars, LinkError> {
        self.bars.get(&id).ok_or_else(|| {
            log::warn!("unknown bars {id:?}");
            LinkError::UnknownBars(id)
        })
    }

    /// Looks up a bars plottable together with its key and value axes.
    pub(crate) fn bars_with_axes(&self, id: BarsId) -> Option<(&Bars, &A, &A)> {
        let Some(bars) = self.bars.get(&id) else {
            log::warn!("unknown bars {id:?}");
            return None;
        };
        match (self.axes.get(&bars.key_axis()), self.axes.get(&bars.value_axis())) {
            (Some(key), Some(value)) => Some((bars, key, value)),
            _ => {
                log::warn!("invalid key or value axis for bars {id:?}");
                None
            }
        }
    }
}
