// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use plotkit_core::{Axis, AxisType, Painter, PlotAxis, Range, SignDomain, StrokeStyle};

use crate::{AxisId, BarWidthType, BarsGroup, BarsId, LinkError, Plot, SpacingType};

/// 100x100 px plot, both axes spanning `[0, 10]` (10 px per unit).
struct Fixture {
    plot: Plot,
    x: AxisId,
    y: AxisId,
}

impl Fixture {
    fn new() -> Self {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut plot = Plot::new();
        let x = plot.add_axis(PlotAxis::new(AxisType::Bottom, rect).with_range(0.0, 10.0));
        let y = plot.add_axis(PlotAxis::new(AxisType::Left, rect).with_range(0.0, 10.0));
        Self { plot, x, y }
    }

    fn bars(&mut self, keys: &[f64], values: &[f64]) -> BarsId {
        let id = self.plot.add_bars(self.x, self.y).unwrap();
        self.plot
            .bars_mut(id)
            .unwrap()
            .set_data(keys, values, true);
        id
    }
}

fn assert_close(a: f64, b: f64) {
    let eps = 1e-9;
    assert!((a - b).abs() <= eps, "{a} != {b}");
}

fn assert_points_close(got: &[Point], want: &[Point]) {
    assert_eq!(got.len(), want.len(), "{got:?} != {want:?}");
    for (a, b) in got.iter().zip(want) {
        assert!(
            (a.x - b.x).abs() <= 1e-9 && (a.y - b.y).abs() <= 1e-9,
            "{got:?} != {want:?}"
        );
    }
}

#[derive(Debug, PartialEq)]
enum Op {
    Pen(Option<f64>),
    Brush(bool),
    Polygon(Vec<Point>),
    Polyline(Vec<Point>),
    Rect(Rect),
}

#[derive(Debug, Default)]
struct RecordingPainter {
    ops: Vec<Op>,
}

impl Painter for RecordingPainter {
    fn set_pen(&mut self, pen: Option<&StrokeStyle>) {
        self.ops.push(Op::Pen(pen.map(|p| p.stroke_width)));
    }

    fn set_brush(&mut self, brush: Option<&Brush>) {
        self.ops.push(Op::Brush(brush.is_some()));
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.ops.push(Op::Polygon(points.to_vec()));
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        self.ops.push(Op::Polyline(points.to_vec()));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.ops.push(Op::Rect(rect));
    }
}

#[test]
fn stacked_bar_starts_on_top_of_the_one_below() {
    let mut f = Fixture::new();
    let bottom = f.bars(&[1.0], &[3.0]);
    let top = f.bars(&[1.0], &[2.0]);
    f.plot.move_above(top, Some(bottom)).unwrap();

    assert_eq!(f.plot.stacked_base_value(top, 1.0, true), 3.0);

    // Spans values [3, 5]: y = 70 .. 50. Width 0.75 units around x = 10.
    let poly = f.plot.bar_polygon(top, 1.0, 2.0).unwrap();
    assert_points_close(
        &poly.points,
        &[
            Point::new(6.25, 70.0),
            Point::new(6.25, 50.0),
            Point::new(13.75, 50.0),
            Point::new(13.75, 70.0),
        ],
    );
    let range = f.plot.value_range(top, SignDomain::Both).unwrap();
    assert_eq!(range, Range::new(0.0, 5.0));
}

#[test]
fn negative_values_stack_downward_independently() {
    let mut f = Fixture::new();
    let bottom = f.bars(&[1.0, 1.0], &[-3.0, 4.0]);
    let top = f.bars(&[1.0], &[-2.0]);
    f.plot.bars_mut(bottom).unwrap().set_base_value(1.0);
    f.plot.move_above(top, Some(bottom)).unwrap();

    assert_eq!(f.plot.stacked_base_value(top, 1.0, false), -2.0);
    assert_eq!(f.plot.stacked_base_value(top, 1.0, true), 5.0);
    // The range starts at the top bars' own base value (0).
    let range = f.plot.value_range(top, SignDomain::Both).unwrap();
    assert_eq!(range, Range::new(-4.0, 0.0));
    let range = f.plot.value_range(top, SignDomain::Positive).unwrap();
    assert_eq!(range, Range::new(0.0, 0.0));
}

#[test]
fn value_range_includes_the_base_value() {
    let mut f = Fixture::new();
    let bars = f.bars(&[1.0], &[5.0]);
    let range = f.plot.value_range(bars, SignDomain::Both).unwrap();
    assert!(range.contains(0.0) && range.contains(5.0), "{range:?}");
}

#[test]
fn key_range_covers_bar_widths() {
    let mut f = Fixture::new();
    let bars = f.bars(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]);
    let range = f.plot.key_range(bars, SignDomain::Both).unwrap();
    assert_close(range.lower, 0.625);
    assert_close(range.upper, 3.375);

    let empty = f.bars(&[], &[]);
    assert_eq!(f.plot.key_range(empty, SignDomain::Both), None);
}

#[test]
fn three_member_group_is_symmetric() {
    let mut f = Fixture::new();
    let ids: Vec<BarsId> = (0..3).map(|_| f.bars(&[5.0], &[1.0])).collect();
    let g = f.plot.add_group(BarsGroup::default());
    for id in &ids {
        f.plot.group_append(g, *id).unwrap();
    }

    let left = f.plot.key_pixel_offset(g, ids[0], 5.0);
    let center = f.plot.key_pixel_offset(g, ids[1], 5.0);
    let right = f.plot.key_pixel_offset(g, ids[2], 5.0);
    assert_eq!(center, 0.0);
    assert_close(left, -right);
    // One bar width (7.5 px) plus the default 4 px spacing.
    assert_close(right, 11.5);

    let poly = f.plot.bar_polygon(ids[2], 5.0, 1.0).unwrap();
    assert_close(poly.points[0].x, 50.0 + 11.5 - 3.75);
}

#[test]
fn stacked_members_share_their_root_slot() {
    let mut f = Fixture::new();
    let a = f.bars(&[5.0], &[1.0]);
    let a_top = f.bars(&[5.0], &[1.0]);
    let b = f.bars(&[5.0], &[1.0]);
    f.plot.move_above(a_top, Some(a)).unwrap();
    let g = f.plot.add_group(BarsGroup::default().with_spacing(SpacingType::Absolute, 2.0));
    for id in [a, a_top, b] {
        f.plot.group_append(g, id).unwrap();
    }
    // Two roots: a and b, split around a 2 px gap.
    let offset_a = f.plot.key_pixel_offset(g, a, 5.0);
    assert_close(offset_a, -(1.0 + 3.75));
    assert_eq!(f.plot.key_pixel_offset(g, a_top, 5.0), offset_a);
    assert_close(f.plot.key_pixel_offset(g, b, 5.0), 1.0 + 3.75);
}

#[test]
fn removing_bars_reconnects_stack_and_leaves_group() {
    let mut f = Fixture::new();
    let a = f.bars(&[1.0], &[1.0]);
    let b = f.bars(&[1.0], &[1.0]);
    let c = f.bars(&[1.0], &[1.0]);
    f.plot.move_above(b, Some(a)).unwrap();
    f.plot.move_above(c, Some(b)).unwrap();
    let g = f.plot.add_group(BarsGroup::default());
    f.plot.group_append(g, b).unwrap();

    let removed = f.plot.remove_bars(b).unwrap();
    assert_eq!(removed.bar_below(), None);
    assert_eq!(removed.bar_above(), None);
    assert_eq!(removed.group(), None);
    assert_eq!(f.plot.bar_above(a), Some(c));
    assert_eq!(f.plot.bar_below(c), Some(a));
    assert!(f.plot.group(g).unwrap().is_empty());
    assert_eq!(f.plot.stacked_base_value(c, 1.0, true), 1.0);
}

#[test]
fn stacking_across_axes_is_rejected() {
    let mut f = Fixture::new();
    let y2 = f.plot.add_axis(PlotAxis::new(
        AxisType::Right,
        Rect::new(0.0, 0.0, 100.0, 100.0),
    ));
    let a = f.bars(&[1.0], &[1.0]);
    let other = f.plot.add_bars(f.x, y2).unwrap();

    assert_eq!(
        f.plot.move_above(a, Some(other)),
        Err(LinkError::AxisMismatch)
    );
    assert_eq!(f.plot.bar_below(a), None);
    assert_eq!(f.plot.bar_above(other), None);
}

#[test]
fn vertical_key_axis_lays_bars_out_horizontally() {
    let mut f = Fixture::new();
    let bars = f.plot.add_bars(f.y, f.x).unwrap();
    f.plot.bars_mut(bars).unwrap().add_point(2.0, 4.0);
    // Key 2 at y = 80; width 7.5 px, lower key toward higher y.
    let poly = f.plot.bar_polygon(bars, 2.0, 4.0).unwrap();
    assert_points_close(
        &poly.points,
        &[
            Point::new(0.0, 83.75),
            Point::new(40.0, 83.75),
            Point::new(40.0, 76.25),
            Point::new(0.0, 76.25),
        ],
    );
}

#[test]
fn visible_bounds_extend_to_bars_reaching_into_view() {
    let mut f = Fixture::new();
    let keys: Vec<f64> = (0..=20).map(f64::from).collect();
    let values = vec![1.0; keys.len()];
    let bars = f.bars(&keys, &values);
    assert_eq!(f.plot.visible_data_bounds(bars), 0..12);

    // 40 px per unit.
    f.plot.axis_mut(f.x).unwrap().set_range(Range::new(2.5, 5.0));
    assert_eq!(f.plot.visible_data_bounds(bars), 2..7);

    let b = f.plot.bars_mut(bars).unwrap();
    b.set_width_type(BarWidthType::Absolute);
    b.set_width(200.0);
    assert_eq!(f.plot.visible_data_bounds(bars), 0..8);

    let empty = f.bars(&[], &[]);
    assert_eq!(f.plot.visible_data_bounds(empty), 0..0);
}

#[test]
fn select_test_hits_bar_bodies() {
    let mut f = Fixture::new();
    let bars = f.bars(&[2.0], &[5.0]);
    // Bar spans x 16.25 .. 23.75, y 50 .. 100.
    assert_eq!(
        f.plot.select_test(bars, Point::new(20.0, 75.0), true),
        Some(8.0 * 0.99)
    );
    assert_eq!(f.plot.select_test(bars, Point::new(30.0, 75.0), true), None);
    assert_eq!(f.plot.select_test(bars, Point::new(20.0, 150.0), true), None);

    f.plot.bars_mut(bars).unwrap().set_selectable(false);
    assert_eq!(f.plot.select_test(bars, Point::new(20.0, 75.0), true), None);
    assert!(
        f.plot
            .select_test(bars, Point::new(20.0, 75.0), false)
            .is_some()
    );
}

#[test]
fn draw_fills_then_strokes_each_bar() {
    let mut f = Fixture::new();
    let bars = f.bars(&[2.0], &[5.0]);
    let points = f.plot.bar_polygon(bars, 2.0, 5.0).unwrap().points.to_vec();

    let mut painter = RecordingPainter::default();
    f.plot.draw(bars, &mut painter);
    assert_eq!(
        painter.ops,
        vec![
            Op::Pen(None),
            Op::Brush(true),
            Op::Polygon(points.clone()),
            Op::Pen(Some(1.0)),
            Op::Brush(false),
            Op::Polyline(points.clone()),
        ]
    );

    let b = f.plot.bars_mut(bars).unwrap();
    b.set_brush(css::TRANSPARENT);
    b.set_selected(true);
    let mut painter = RecordingPainter::default();
    f.plot.draw(bars, &mut painter);
    // The default selected brush is still the visible fill.
    assert_eq!(painter.ops.len(), 6);
    assert_eq!(painter.ops[3], Op::Pen(Some(2.5)));

    let b = f.plot.bars_mut(bars).unwrap();
    b.set_selected(false);
    b.set_pen(StrokeStyle::solid(css::BLACK, 0.0));
    let mut painter = RecordingPainter::default();
    f.plot.draw_all(&mut painter);
    assert!(painter.ops.is_empty(), "{:?}", painter.ops);
}

#[test]
fn legend_icon_is_a_centred_swatch() {
    let mut f = Fixture::new();
    let bars = f.bars(&[], &[]);
    let mut painter = RecordingPainter::default();
    f.plot
        .draw_legend_icon(bars, &mut painter, Rect::new(10.0, 10.0, 40.0, 20.0));
    let Some(Op::Rect(r)) = painter.ops.last() else {
        panic!("expected a rect, got {:?}", painter.ops);
    };
    assert_close(r.width(), 30.0 * 0.67);
    assert_close(r.height(), 10.0 * 0.67);
    assert_close(r.center().x, 25.0);
    assert_close(r.center().y, 15.0);
}

#[test]
fn rescale_axes_fits_bars_and_base_line() {
    let mut f = Fixture::new();
    let bars = f.bars(&[1.0, 3.0], &[5.0, 2.0]);
    f.plot.rescale_axes(bars, false);
    let x = f.plot.axis(f.x).unwrap().range();
    assert_close(x.lower, 0.625);
    assert_close(x.upper, 3.375);
    assert_eq!(f.plot.axis(f.y).unwrap().range(), Range::new(0.0, 5.0));
}

#[test]
fn rescaling_without_data_centres_the_base_line() {
    let mut f = Fixture::new();
    let bars = f.bars(&[], &[]);
    f.plot.rescale_axes(bars, false);
    // Key axis untouched, value axis keeps its size around the base value.
    assert_eq!(f.plot.axis(f.x).unwrap().range(), Range::new(0.0, 10.0));
    assert_eq!(f.plot.axis(f.y).unwrap().range(), Range::new(-5.0, 5.0));
}
