// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar stacking.
//!
//! Bars plottables on the same key and value axes can be stacked: each bars knows the bars
//! directly below and above it, forming a chain. A bar is drawn starting at the accumulated
//! value of the bars below it at the same key, so positive and negative values grow away from
//! the base value of the bottom-most bars independently.

use plotkit_core::Axis;

use crate::plot::{BarsId, LinkError, Plot};

impl<A: Axis> Plot<A> {
    /// Returns the bars directly below `bars` in its stack.
    pub fn bar_below(&self, bars: BarsId) -> Option<BarsId> {
        self.bars.get(&bars).and_then(|b| b.bar_below)
    }

    /// Returns the bars directly above `bars` in its stack.
    pub fn bar_above(&self, bars: BarsId) -> Option<BarsId> {
        self.bars.get(&bars).and_then(|b| b.bar_above)
    }

    /// Moves `bars` directly below `target` in `target`'s stack.
    ///
    /// If `target` already has bars below it, `bars` is inserted between the two. If `bars` sat
    /// between two other bars, those two are connected to each other first. With `target` set
    /// to `None`, `bars` is only removed from its stack.
    pub fn move_below(&mut self, bars: BarsId, target: Option<BarsId>) -> Result<(), LinkError> {
        if target == Some(bars) {
            return Ok(());
        }
        self.check_stackable(bars, target)?;
        self.unlink(bars);
        if let Some(target) = target {
            if let Some(below) = self.bar_below(target) {
                self.connect(Some(below), Some(bars));
            }
            self.connect(Some(bars), Some(target));
        }
        Ok(())
    }

    /// Moves `bars` directly above `target` in `target`'s stack.
    ///
    /// If `target` already has bars above it, `bars` is inserted between the two. If `bars` sat
    /// between two other bars, those two are connected to each other first. With `target` set
    /// to `None`, `bars` is only removed from its stack.
    pub fn move_above(&mut self, bars: BarsId, target: Option<BarsId>) -> Result<(), LinkError> {
        if target == Some(bars) {
            return Ok(());
        }
        self.check_stackable(bars, target)?;
        self.unlink(bars);
        if let Some(target) = target {
            if let Some(above) = self.bar_above(target) {
                self.connect(Some(bars), Some(above));
            }
            self.connect(Some(target), Some(bars));
        }
        Ok(())
    }

    /// Returns the value at which a bar of `bars` at `key` starts.
    ///
    /// Walks down the stack, adding for every bars below the largest (`positive`) or smallest
    /// (otherwise) value of its data points at `key`, and finally the bottom-most bars' base
    /// value. Only values pointing in the requested direction count, so positive and negative
    /// stacks do not interfere. Keys match within a relative tolerance of `1e-6`.
    pub fn stacked_base_value(&self, bars: BarsId, key: f64, positive: bool) -> f64 {
        let Some(mut current) = self.bars.get(&bars) else {
            log::warn!("unknown bars {bars:?}");
            return 0.0;
        };
        let epsilon = if key == 0.0 { 1e-6 } else { key.abs() * 1e-6 };
        let mut sum = 0.0;
        while let Some(below) = current.bar_below.and_then(|id| self.bars.get(&id)) {
            let data = below.data();
            let begin = data.find_begin(key - epsilon, true);
            let end = data.find_end(key + epsilon, true);
            let mut extreme = 0.0;
            for point in &data.as_slice()[begin..end] {
                let within = point.key > key - epsilon && point.key < key + epsilon;
                if within
                    && ((positive && point.value > extreme) || (!positive && point.value < extreme))
                {
                    extreme = point.value;
                }
            }
            sum += extreme;
            current = below;
        }
        sum + current.base_value()
    }

    fn check_stackable(&self, bars: BarsId, target: Option<BarsId>) -> Result<(), LinkError> {
        let this = self.bars_or_warn(bars)?;
        if let Some(target) = target {
            let other = self.bars_or_warn(target)?;
            if other.key_axis() != this.key_axis() || other.value_axis() != this.value_axis() {
                log::warn!("cannot stack {bars:?} on {target:?}: different key or value axis");
                return Err(LinkError::AxisMismatch);
            }
        }
        Ok(())
    }

    /// Takes `bars` out of its stack, connecting its neighbours to each other.
    pub(crate) fn unlink(&mut self, bars: BarsId) {
        if let Some(b) = self.bars.get(&bars) {
            let (below, above) = (b.bar_below, b.bar_above);
            self.connect(below, above);
        }
    }

    /// Connects `lower` and `upper` directly.
    ///
    /// Whatever was above `lower` and below `upper` is disconnected from them. With only one side
    /// given, that side is disconnected at its top (`lower`) or bottom (`upper`).
    pub(crate) fn connect(&mut self, lower: Option<BarsId>, upper: Option<BarsId>) {
        if let Some(lower) = lower {
            self.detach_above(lower);
        }
        if let Some(upper) = upper {
            self.detach_below(upper);
        }
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if let Some(l) = self.bars.get_mut(&lower) {
                l.bar_above = Some(upper);
            }
            if let Some(u) = self.bars.get_mut(&upper) {
                u.bar_below = Some(lower);
            }
        }
    }

    fn detach_above(&mut self, lower: BarsId) {
        let Some(above) = self.bars.get_mut(&lower).and_then(|l| l.bar_above.take()) else {
            return;
        };
        if let Some(a) = self.bars.get_mut(&above)
            && a.bar_below == Some(lower)
        {
            a.bar_below = None;
        }
    }

    fn detach_below(&mut self, upper: BarsId) {
        let Some(below) = self.bars.get_mut(&upper).and_then(|u| u.bar_below.take()) else {
            return;
        };
        if let Some(b) = self.bars.get_mut(&below)
            && b.bar_above == Some(upper)
        {
            b.bar_above = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use plotkit_core::{AxisType, PlotAxis};

    use super::*;

    fn plot_with(n: usize) -> (Plot, alloc::vec::Vec<BarsId>) {
        let mut plot = Plot::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let x = plot.add_axis(PlotAxis::new(AxisType::Bottom, rect));
        let y = plot.add_axis(PlotAxis::new(AxisType::Left, rect));
        let ids = (0..n).map(|_| plot.add_bars(x, y).unwrap()).collect();
        (plot, ids)
    }

    fn assert_linked(plot: &Plot, lower: BarsId, upper: BarsId) {
        assert_eq!(plot.bar_above(lower), Some(upper), "{lower:?} above");
        assert_eq!(plot.bar_below(upper), Some(lower), "{upper:?} below");
    }

    #[test]
    fn move_above_links_both_sides() {
        let (mut plot, ids) = plot_with(2);
        let (a, b) = (ids[0], ids[1]);
        plot.move_above(a, Some(b)).unwrap();
        assert_linked(&plot, b, a);
        assert_eq!(plot.bar_below(b), None);
        assert_eq!(plot.bar_above(a), None);
    }

    #[test]
    fn move_below_inserts_between_existing_neighbours() {
        let (mut plot, ids) = plot_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        plot.move_above(b, Some(a)).unwrap();
        // a < b; put c below b, i.e. between a and b.
        plot.move_below(c, Some(b)).unwrap();
        assert_linked(&plot, a, c);
        assert_linked(&plot, c, b);
    }

    #[test]
    fn unstacking_reconnects_neighbours() {
        let (mut plot, ids) = plot_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        plot.move_above(b, Some(a)).unwrap();
        plot.move_above(c, Some(b)).unwrap();
        plot.move_below(b, None).unwrap();
        assert_linked(&plot, a, c);
        assert_eq!(plot.bar_below(b), None);
        assert_eq!(plot.bar_above(b), None);
    }

    #[test]
    fn moving_within_a_stack_reorders_it() {
        let (mut plot, ids) = plot_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        plot.move_above(b, Some(a)).unwrap();
        plot.move_above(c, Some(b)).unwrap();
        // a < b < c  becomes  b < c < a
        plot.move_above(a, Some(c)).unwrap();
        assert_eq!(plot.bar_below(b), None);
        assert_linked(&plot, b, c);
        assert_linked(&plot, c, a);
        assert_eq!(plot.bar_above(a), None);
    }

    #[test]
    fn self_target_and_unknown_ids() {
        let (mut plot, ids) = plot_with(1);
        assert_eq!(plot.move_above(ids[0], Some(ids[0])), Ok(()));
        assert_eq!(plot.bar_below(ids[0]), None);
        assert_eq!(
            plot.move_below(ids[0], Some(BarsId(77))),
            Err(LinkError::UnknownBars(BarsId(77)))
        );
        assert_eq!(
            plot.move_below(BarsId(77), None),
            Err(LinkError::UnknownBars(BarsId(77)))
        );
    }

    #[test]
    fn base_value_ignores_opposite_signs_and_distant_keys() {
        let (mut plot, ids) = plot_with(2);
        let (bottom, top) = (ids[0], ids[1]);
        plot.bars_mut(bottom)
            .unwrap()
            .set_data(&[1.0, 1.0, 1.0 + 1e-3], &[2.0, -4.0, 10.0], true);
        plot.bars_mut(bottom).unwrap().set_base_value(0.5);
        plot.move_above(top, Some(bottom)).unwrap();

        assert_eq!(plot.stacked_base_value(top, 1.0, true), 2.5);
        assert_eq!(plot.stacked_base_value(top, 1.0, false), -3.5);
        assert_eq!(plot.stacked_base_value(top, 5.0, true), 0.5);
        assert_eq!(plot.stacked_base_value(bottom, 1.0, true), 0.5);
    }

    #[test]
    fn base_value_matches_keys_near_zero() {
        let (mut plot, ids) = plot_with(2);
        plot.bars_mut(ids[0])
            .unwrap()
            .set_data(&[-5e-7, 2e-6], &[3.0, 7.0], true);
        plot.move_above(ids[1], Some(ids[0])).unwrap();
        assert_eq!(plot.stacked_base_value(ids[1], 0.0, true), 3.0);
    }
}
