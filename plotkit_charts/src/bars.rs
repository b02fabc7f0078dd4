// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart plottables.
//!
//! A [`Bars`] holds one data series of `(key, value)` points and its styling. Layout happens on
//! the owning [`Plot`], which knows the axes, the stack (see [`Plot::move_above`]) and the group
//! (see [`Plot::group_append`]) of each bars: every data point becomes a [`BarPolygon`] in pixel
//! space.

extern crate alloc;

use alloc::string::String;
use core::ops::Range as IndexRange;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use plotkit_core::{
    Axis, AxisOrientation, DataContainer, Painter, Range, ScaleType, SignDomain, SortKey,
    StrokeStyle, brush_is_transparent,
};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::plot::{AxisId, BarsId, GroupId, Plot};

/// One bar: a key on the key axis and a height on the value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarsData {
    /// Position on the key axis.
    pub key: f64,
    /// Height of the bar, measured from its (stacked) base.
    pub value: f64,
}

impl BarsData {
    /// Creates a data point.
    pub fn new(key: f64, value: f64) -> Self {
        Self { key, value }
    }
}

impl SortKey for BarsData {
    fn sort_key(&self) -> f64 {
        self.key
    }

    fn main_value(&self) -> f64 {
        self.value
    }
}

/// How [`Bars::width`] is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarWidthType {
    /// Width in pixels.
    Absolute,
    /// Width as a fraction of the axis rect size in the key axis direction.
    AxisRectRatio,
    /// Width in key axis coordinates; bars scale with zoom and vary along logarithmic axes.
    #[default]
    PlotCoords,
}

/// The four corners of a bar in pixel space.
///
/// The order is base/lower key, value/lower key, value/upper key, base/upper key, so
/// `points[0]` and `points[3]` form the open base of the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarPolygon {
    /// Corner points.
    pub points: [Point; 4],
}

impl BarPolygon {
    /// Returns the smallest rectangle containing all corners.
    pub fn bounding_rect(&self) -> Rect {
        let [first, rest @ ..] = self.points;
        rest.iter()
            .fold(Rect::from_points(first, first), |r, p| r.union_pt(*p))
    }
}

/// A bar chart data series.
///
/// Created with [`Plot::add_bars`]. The key axis runs along the bars' base, the value axis along
/// their height; for horizontal bars, use a vertical key axis.
#[derive(Clone, Debug)]
pub struct Bars {
    name: String,
    data: DataContainer<BarsData>,
    width: f64,
    width_type: BarWidthType,
    base_value: f64,
    key_axis: AxisId,
    value_axis: AxisId,
    pen: StrokeStyle,
    brush: Brush,
    selected_pen: StrokeStyle,
    selected_brush: Brush,
    selectable: bool,
    selected: bool,
    pub(crate) bar_below: Option<BarsId>,
    pub(crate) bar_above: Option<BarsId>,
    pub(crate) group: Option<GroupId>,
}

impl Bars {
    pub(crate) fn new(key_axis: AxisId, value_axis: AxisId) -> Self {
        let brush = Brush::Solid(Color::from_rgba8(40, 50, 255, 30));
        Self {
            name: String::new(),
            data: DataContainer::new(),
            width: 0.75,
            width_type: BarWidthType::PlotCoords,
            base_value: 0.0,
            key_axis,
            value_axis,
            pen: StrokeStyle::solid(css::BLUE, 1.0),
            brush: brush.clone(),
            selected_pen: StrokeStyle::solid(Color::from_rgb8(80, 80, 255), 2.5),
            selected_brush: brush,
            selectable: true,
            selected: false,
            bar_below: None,
            bar_above: None,
            group: None,
        }
    }

    /// Returns the display name (e.g. for legends).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the key axis id.
    pub fn key_axis(&self) -> AxisId {
        self.key_axis
    }

    /// Returns the value axis id.
    pub fn value_axis(&self) -> AxisId {
        self.value_axis
    }

    /// Returns the bars directly below in the stack.
    pub fn bar_below(&self) -> Option<BarsId> {
        self.bar_below
    }

    /// Returns the bars directly above in the stack.
    pub fn bar_above(&self) -> Option<BarsId> {
        self.bar_above
    }

    /// Returns the group these bars belong to.
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Returns the bar width, in units of [`Self::width_type`].
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the bar width, in units of [`Self::width_type`].
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Returns how [`Self::width`] is interpreted.
    pub fn width_type(&self) -> BarWidthType {
        self.width_type
    }

    /// Sets how [`Self::width`] is interpreted.
    pub fn set_width_type(&mut self, width_type: BarWidthType) {
        self.width_type = width_type;
    }

    /// Returns the value at which bars start.
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Sets the value at which bars start.
    ///
    /// In a stack, only the base value of the bottom-most bars is used.
    pub fn set_base_value(&mut self, base_value: f64) {
        self.base_value = base_value;
    }

    /// Returns the data points, sorted by key.
    pub fn data(&self) -> &DataContainer<BarsData> {
        &self.data
    }

    /// Replaces the data with `keys[i], values[i]` pairs.
    ///
    /// Extra elements of the longer slice are ignored.
    pub fn set_data(&mut self, keys: &[f64], values: &[f64], already_sorted: bool) {
        self.data.clear();
        self.add_data(keys, values, already_sorted);
    }

    /// Adds `keys[i], values[i]` pairs to the data.
    ///
    /// Extra elements of the longer slice are ignored.
    pub fn add_data(&mut self, keys: &[f64], values: &[f64], already_sorted: bool) {
        if keys.len() != values.len() {
            log::warn!(
                "keys and values have different sizes: {} vs {}",
                keys.len(),
                values.len()
            );
        }
        let points = keys
            .iter()
            .zip(values)
            .map(|(&key, &value)| BarsData { key, value });
        self.data.add(points, already_sorted);
    }

    /// Adds a single data point.
    pub fn add_point(&mut self, key: f64, value: f64) {
        self.data.add_point(BarsData { key, value });
    }

    /// Removes all data points.
    pub fn clear_data(&mut self) {
        self.data.clear();
    }

    /// Returns the outline style.
    pub fn pen(&self) -> &StrokeStyle {
        &self.pen
    }

    /// Sets the outline style.
    pub fn set_pen(&mut self, pen: StrokeStyle) {
        self.pen = pen;
    }

    /// Returns the fill.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Sets the fill.
    pub fn set_brush(&mut self, brush: impl Into<Brush>) {
        self.brush = brush.into();
    }

    /// Sets the outline and fill used while selected.
    pub fn set_selected_style(&mut self, pen: StrokeStyle, brush: impl Into<Brush>) {
        self.selected_pen = pen;
        self.selected_brush = brush.into();
    }

    /// Returns whether hit tests may select these bars.
    pub fn selectable(&self) -> bool {
        self.selectable
    }

    /// Sets whether hit tests may select these bars.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Returns whether the bars are drawn with the selected style.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Sets whether the bars are drawn with the selected style.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn main_pen(&self) -> &StrokeStyle {
        if self.selected {
            &self.selected_pen
        } else {
            &self.pen
        }
    }

    fn main_brush(&self) -> &Brush {
        if self.selected {
            &self.selected_brush
        } else {
            &self.brush
        }
    }

    /// Pixel extents of a bar at `key` toward lower and higher keys, relative to the key pixel.
    fn pixel_width_on(&self, key_axis: &impl Axis, key: f64) -> (f64, f64) {
        let symmetric = |half: f64| {
            // "lower" means toward lower keys, which is the higher pixel on flipped axes.
            let flipped =
                key_axis.range_reversed() ^ (key_axis.orientation() == AxisOrientation::Vertical);
            if flipped { (half, -half) } else { (-half, half) }
        };
        match self.width_type {
            BarWidthType::Absolute => symmetric(self.width * 0.5),
            BarWidthType::AxisRectRatio => {
                let rect = key_axis.axis_rect();
                let size = match key_axis.orientation() {
                    AxisOrientation::Horizontal => rect.width(),
                    AxisOrientation::Vertical => rect.height(),
                };
                symmetric(size * self.width * 0.5)
            }
            BarWidthType::PlotCoords => {
                let key_pixel = key_axis.coord_to_pixel(key);
                (
                    key_axis.coord_to_pixel(key - self.width * 0.5) - key_pixel,
                    key_axis.coord_to_pixel(key + self.width * 0.5) - key_pixel,
                )
            }
        }
    }
}

impl<A: Axis> Plot<A> {
    /// Returns how far a bar of `bars` at `key` extends toward lower and higher keys, in pixels
    /// relative to the key's pixel.
    ///
    /// On a non-reversed horizontal key axis, the lower extent is negative and the upper one
    /// positive.
    pub fn pixel_width(&self, bars: BarsId, key: f64) -> Option<(f64, f64)> {
        let (b, key_axis, _) = self.bars_with_axes(bars)?;
        Some(b.pixel_width_on(key_axis, key))
    }

    /// Returns the pixel-space outline of the bar for the data point `(key, value)`.
    ///
    /// The bar starts at the stacked base value and is shifted by the group offset.
    pub fn bar_polygon(&self, bars: BarsId, key: f64, value: f64) -> Option<BarPolygon> {
        let (b, key_axis, value_axis) = self.bars_with_axes(bars)?;
        let (lower, upper) = b.pixel_width_on(key_axis, key);
        let base = self.stacked_base_value(bars, key, value >= 0.0);
        let base_pixel = value_axis.coord_to_pixel(base);
        let value_pixel = value_axis.coord_to_pixel(base + value);
        let mut key_pixel = key_axis.coord_to_pixel(key);
        if let Some(group) = b.group {
            key_pixel += self.key_pixel_offset(group, bars, key);
        }
        let points = match key_axis.orientation() {
            AxisOrientation::Horizontal => [
                Point::new(key_pixel + lower, base_pixel),
                Point::new(key_pixel + lower, value_pixel),
                Point::new(key_pixel + upper, value_pixel),
                Point::new(key_pixel + upper, base_pixel),
            ],
            AxisOrientation::Vertical => [
                Point::new(base_pixel, key_pixel + lower),
                Point::new(value_pixel, key_pixel + lower),
                Point::new(value_pixel, key_pixel + upper),
                Point::new(base_pixel, key_pixel + upper),
            ],
        };
        Some(BarPolygon { points })
    }

    /// Returns the index range of data points whose bars may be visible on the key axis.
    ///
    /// Starts from the points within the key axis range (plus one on each side) and extends
    /// outward while the neighbouring bars still reach into the axis range. Unknown bars yield an
    /// empty range.
    pub fn visible_data_bounds(&self, bars: BarsId) -> IndexRange<usize> {
        let Some((b, key_axis, _)) = self.bars_with_axes(bars) else {
            return 0..0;
        };
        let data = b.data.as_slice();
        if data.is_empty() {
            return 0..0;
        }
        let range = key_axis.range();
        let mut begin = b.data.find_begin(range.lower, true);
        let mut end = b.data.find_end(range.upper, true);
        let lower_bound = key_axis.coord_to_pixel(range.lower);
        let upper_bound = key_axis.coord_to_pixel(range.upper);
        let horizontal = key_axis.orientation() == AxisOrientation::Horizontal;
        let reversed = key_axis.range_reversed();
        let bounds = |p: &BarsData| {
            self.bar_polygon(bars, p.key, p.value)
                .map(|poly| poly.bounding_rect())
        };

        while begin > 0 {
            let Some(r) = bounds(&data[begin - 1]) else {
                break;
            };
            let visible = match (horizontal, reversed) {
                (true, false) => r.x1 >= lower_bound,
                (true, true) => r.x0 <= lower_bound,
                (false, false) => r.y0 <= lower_bound,
                (false, true) => r.y1 >= lower_bound,
            };
            if !visible {
                break;
            }
            begin -= 1;
        }
        while end < data.len() {
            let Some(r) = bounds(&data[end]) else {
                break;
            };
            let visible = match (horizontal, reversed) {
                (true, false) => r.x0 <= upper_bound,
                (true, true) => r.x1 >= upper_bound,
                (false, false) => r.y1 >= upper_bound,
                (false, true) => r.y0 <= upper_bound,
            };
            if !visible {
                break;
            }
            end += 1;
        }
        begin..end
    }

    /// Returns the key span covered by the bars, including their widths and group offsets.
    ///
    /// Only keys in `sign_domain` are considered. Returns `None` without data.
    pub fn key_range(&self, bars: BarsId, sign_domain: SignDomain) -> Option<Range> {
        let (b, key_axis, _) = self.bars_with_axes(bars)?;
        let range = b.data.key_range(sign_domain)?;
        let offset = |key: f64| {
            b.group
                .map_or(0.0, |group| self.key_pixel_offset(group, bars, key))
        };

        let (lower_width, _) = b.pixel_width_on(key_axis, range.lower);
        let pixel = key_axis.coord_to_pixel(range.lower) + lower_width + offset(range.lower);
        let lower = key_axis.pixel_to_coord(pixel);

        let (_, upper_width) = b.pixel_width_on(key_axis, range.upper);
        let pixel = key_axis.coord_to_pixel(range.upper) + upper_width + offset(range.upper);
        let upper = key_axis.pixel_to_coord(pixel);

        Some(Range::new(lower, upper))
    }

    /// Returns the value span covered by the stacked bars.
    ///
    /// The span always includes the base value. Bar tops outside `sign_domain` are ignored.
    pub fn value_range(&self, bars: BarsId, sign_domain: SignDomain) -> Option<Range> {
        let Some(b) = self.bars.get(&bars) else {
            log::warn!("unknown bars {bars:?}");
            return None;
        };
        let mut range = Range::new(b.base_value, b.base_value);
        for point in &b.data {
            let top = point.value + self.stacked_base_value(bars, point.key, point.value >= 0.0);
            if sign_domain.contains(top) {
                range.lower = range.lower.min(top);
                range.upper = range.upper.max(top);
            }
        }
        Some(range)
    }

    /// Hit-tests `pos` (in pixels) against the visible bars.
    ///
    /// Returns a distance-like score on a hit (slightly below the plot's selection tolerance),
    /// `None` on a miss or if `only_selectable` is set and the bars are not selectable.
    pub fn select_test(&self, bars: BarsId, pos: Point, only_selectable: bool) -> Option<f64> {
        let (b, key_axis, _) = self.bars_with_axes(bars)?;
        if only_selectable && !b.selectable {
            return None;
        }
        if !key_axis.axis_rect().contains(pos) {
            return None;
        }
        let data = b.data.as_slice();
        let hit = data[self.visible_data_bounds(bars)].iter().any(|p| {
            self.bar_polygon(bars, p.key, p.value)
                .is_some_and(|poly| poly.bounding_rect().contains(pos))
        });
        hit.then(|| self.selection_tolerance() * 0.99)
    }

    /// Paints the visible bars of `bars`.
    ///
    /// Each bar is filled without outline, then its outline is stroked as an open polyline
    /// (leaving the base edge out). Transparent fills and invisible outlines are skipped.
    pub fn draw<P: Painter + ?Sized>(&self, bars: BarsId, painter: &mut P) {
        let Some((b, _, _)) = self.bars_with_axes(bars) else {
            return;
        };
        if b.data.is_empty() {
            return;
        }
        let brush = b.main_brush();
        let pen = b.main_pen();
        let fill = !brush_is_transparent(brush);
        let stroke = !pen.is_invisible();
        let data = b.data.as_slice();
        for point in &data[self.visible_data_bounds(bars)] {
            if !(point.key.is_finite() && point.value.is_finite()) {
                log::debug!(
                    "invalid data point at key {} in bars {:?} ({})",
                    point.key,
                    bars,
                    b.name
                );
            }
            let Some(polygon) = self.bar_polygon(bars, point.key, point.value) else {
                continue;
            };
            if fill {
                painter.set_pen(None);
                painter.set_brush(Some(brush));
                painter.draw_polygon(&polygon.points);
            }
            if stroke {
                painter.set_pen(Some(pen));
                painter.set_brush(None);
                painter.draw_polyline(&polygon.points);
            }
        }
    }

    /// Paints all bars in insertion order.
    pub fn draw_all<P: Painter + ?Sized>(&self, painter: &mut P) {
        for id in &self.bars_order {
            self.draw(*id, painter);
        }
    }

    /// Paints a legend swatch for `bars` centred in `rect`.
    pub fn draw_legend_icon<P: Painter + ?Sized>(&self, bars: BarsId, painter: &mut P, rect: Rect) {
        let Some(b) = self.bars.get(&bars) else {
            log::warn!("unknown bars {bars:?}");
            return;
        };
        painter.set_brush(Some(&b.brush));
        painter.set_pen(Some(&b.pen));
        painter.draw_rect(Rect::from_center_size(rect.center(), rect.size() * 0.67));
    }

    /// Sets the key axis range so all bars are visible.
    ///
    /// With `only_enlarge`, the current range is only ever extended.
    pub fn rescale_key_axis(&mut self, bars: BarsId, only_enlarge: bool) {
        let Some((b, key_axis, _)) = self.bars_with_axes(bars) else {
            return;
        };
        let axis_id = b.key_axis;
        let current = key_axis.range();
        let scale_type = key_axis.scale_type();
        let found = self.key_range(bars, log_sign_domain(current, scale_type));
        if let Some(found) = found
            && let Some(axis) = self.axes.get_mut(&axis_id)
        {
            axis.set_range(rescaled(found, current, scale_type, only_enlarge));
        }
    }

    /// Sets the value axis range so all bars, including the base value, are visible.
    ///
    /// With `only_enlarge`, the current range is only ever extended.
    pub fn rescale_value_axis(&mut self, bars: BarsId, only_enlarge: bool) {
        let Some((b, _, value_axis)) = self.bars_with_axes(bars) else {
            return;
        };
        let axis_id = b.value_axis;
        let current = value_axis.range();
        let scale_type = value_axis.scale_type();
        let found = self.value_range(bars, log_sign_domain(current, scale_type));
        if let Some(found) = found
            && let Some(axis) = self.axes.get_mut(&axis_id)
        {
            axis.set_range(rescaled(found, current, scale_type, only_enlarge));
        }
    }

    /// Rescales both axes of `bars`; see [`Self::rescale_key_axis`].
    pub fn rescale_axes(&mut self, bars: BarsId, only_enlarge: bool) {
        self.rescale_key_axis(bars, only_enlarge);
        self.rescale_value_axis(bars, only_enlarge);
    }
}

/// Logarithmic axes only show one sign; pick the one the axis currently shows.
fn log_sign_domain(current: Range, scale_type: ScaleType) -> SignDomain {
    match scale_type {
        ScaleType::Linear => SignDomain::Both,
        ScaleType::Logarithmic if current.upper < 0.0 => SignDomain::Negative,
        ScaleType::Logarithmic => SignDomain::Positive,
    }
}

/// Turns a found data range into a new axis range.
///
/// A degenerate result (e.g. constant data) keeps the current axis size, centred on the data.
fn rescaled(found: Range, current: Range, scale_type: ScaleType, only_enlarge: bool) -> Range {
    let mut range = found;
    if only_enlarge {
        range.expand(current);
    }
    if range.is_valid() {
        return range;
    }
    let center = (range.lower + range.upper) * 0.5;
    match scale_type {
        ScaleType::Linear => {
            let half = current.size() / 2.0;
            Range::new(center - half, center + half)
        }
        ScaleType::Logarithmic => {
            let factor = (current.upper / current.lower).sqrt();
            Range::new(center / factor, center * factor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotkit_core::{AxisType, PlotAxis};

    fn assert_close(a: f64, b: f64) {
        assert_close_to(a, b, 1e-9);
    }

    fn assert_close_to(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "{a} != {b}");
    }

    #[test]
    fn defaults() {
        let b = Bars::new(AxisId(0), AxisId(1));
        assert_eq!(b.width(), 0.75);
        assert_eq!(b.width_type(), BarWidthType::PlotCoords);
        assert_eq!(b.base_value(), 0.0);
        assert_eq!(b.pen().stroke_width, 1.0);
        assert_eq!(
            b.brush(),
            &Brush::Solid(Color::from_rgba8(40, 50, 255, 30))
        );
        assert!(b.selectable());
        assert!(!b.selected());
    }

    #[test]
    fn mismatched_lengths_truncate() {
        let mut b = Bars::new(AxisId(0), AxisId(1));
        b.set_data(&[3.0, 1.0, 2.0], &[30.0, 10.0], false);
        let keys: alloc::vec::Vec<f64> = b.data().iter().map(|p| p.key).collect();
        assert_eq!(keys, [1.0, 3.0]);
        b.add_point(2.0, 20.0);
        assert_eq!(b.data().get(1), Some(&BarsData::new(2.0, 20.0)));
    }

    #[test]
    fn pixel_width_swaps_on_vertical_and_reversed_axes() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mut b = Bars::new(AxisId(0), AxisId(1));
        b.set_width_type(BarWidthType::Absolute);
        b.set_width(10.0);

        let x = PlotAxis::new(AxisType::Bottom, rect);
        assert_eq!(b.pixel_width_on(&x, 1.0), (-5.0, 5.0));
        let x_rev = x.with_reversed(true);
        assert_eq!(b.pixel_width_on(&x_rev, 1.0), (5.0, -5.0));
        let y = PlotAxis::new(AxisType::Left, rect);
        assert_eq!(b.pixel_width_on(&y, 1.0), (5.0, -5.0));
        let y_rev = y.with_reversed(true);
        assert_eq!(b.pixel_width_on(&y_rev, 1.0), (-5.0, 5.0));

        b.set_width_type(BarWidthType::AxisRectRatio);
        b.set_width(0.2);
        let (lower, upper) = b.pixel_width_on(&y, 1.0);
        assert_close(lower, 5.0);
        assert_close(upper, -5.0);

        b.set_width_type(BarWidthType::PlotCoords);
        b.set_width(1.0);
        // Range [0, 5] over 100 px.
        let (lower, upper) = b.pixel_width_on(&x, 2.0);
        assert_close(lower, -10.0);
        assert_close(upper, 10.0);
        // Vertical: y grows downward, so higher keys have smaller pixels.
        let (lower, upper) = b.pixel_width_on(&y, 2.0);
        assert_close(lower, 5.0);
        assert_close(upper, -5.0);
    }

    #[test]
    fn plot_coords_width_varies_along_log_key_axis() {
        let mut b = Bars::new(AxisId(0), AxisId(1));
        b.set_width(1.0);
        let x = PlotAxis::new(AxisType::Bottom, Rect::new(0.0, 0.0, 200.0, 100.0))
            .with_range(1.0, 100.0)
            .with_scale_type(ScaleType::Logarithmic);

        // 100 px per decade: extents are 100 * log10((key +- 0.5) / key).
        let (lower, upper) = b.pixel_width_on(&x, 2.0);
        assert_close_to(lower, -12.493_873_660_829_995, 1e-6);
        assert_close_to(upper, 9.691_001_300_805_642, 1e-6);
        let (lower, upper) = b.pixel_width_on(&x, 20.0);
        assert_close_to(lower, -1.099_538_430_146_319, 1e-6);
        assert_close_to(upper, 1.072_386_539_177_307, 1e-6);
    }

    #[test]
    fn bounding_rect_spans_all_corners() {
        let poly = BarPolygon {
            points: [
                Point::new(10.0, 90.0),
                Point::new(10.0, 40.0),
                Point::new(20.0, 40.0),
                Point::new(20.0, 90.0),
            ],
        };
        assert_eq!(poly.bounding_rect(), Rect::new(10.0, 40.0, 20.0, 90.0));
    }

    #[test]
    fn rescaled_centres_degenerate_ranges() {
        let current = Range::new(0.0, 10.0);
        let r = rescaled(Range::new(3.0, 3.0), current, ScaleType::Linear, false);
        assert_eq!(r, Range::new(-2.0, 8.0));

        let current = Range::new(1.0, 100.0);
        let r = rescaled(Range::new(5.0, 5.0), current, ScaleType::Logarithmic, false);
        assert_close(r.lower, 0.5);
        assert_close(r.upper, 50.0);

        let r = rescaled(Range::new(2.0, 4.0), Range::new(0.0, 3.0), ScaleType::Linear, true);
        assert_eq!(r, Range::new(0.0, 4.0));
    }

    #[test]
    fn log_axes_pick_their_visible_sign() {
        assert_eq!(
            log_sign_domain(Range::new(-100.0, -1.0), ScaleType::Logarithmic),
            SignDomain::Negative
        );
        assert_eq!(
            log_sign_domain(Range::new(1.0, 100.0), ScaleType::Logarithmic),
            SignDomain::Positive
        );
        assert_eq!(
            log_sign_domain(Range::new(-1.0, 1.0), ScaleType::Linear),
            SignDomain::Both
        );
    }
}
