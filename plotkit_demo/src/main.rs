// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart and color gradient demos for Plotkit.
//!
//! Writes `plotkit_demo.svg` (or the path given as the first argument). Set `PLOTKIT_LOG` to
//! `debug` to see diagnostics from the library crates.

mod svg;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::Rgba8;
use peniko::color::palette::css;
use plotkit_charts::{
    BarWidthType, BarsGroup, BarsId, ColorGradient, GradientPreset, LinkError, Plot, SpacingType,
};
use plotkit_core::{AxisType, Painter, PlotAxis, Range, StrokeStyle};
use tracing_subscriber::EnvFilter;

use crate::svg::SvgPainter;

const WIDTH: f64 = 640.0;
const STRIP_HEIGHT: f64 = 14.0;
const STRIP_SAMPLES: usize = 256;

fn main() -> std::io::Result<()> {
    init_logging();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "plotkit_demo.svg".to_string());

    let mut painter = SvgPainter::default();
    let chart_bottom = bars_demo(&mut painter, Rect::new(60.0, 40.0, WIDTH - 120.0, 280.0));
    let strips_bottom = gradient_demo(&mut painter, chart_bottom + 40.0);

    let svg = painter.to_svg_string(Rect::new(0.0, 0.0, WIDTH, strips_bottom + 20.0));
    std::fs::write(&path, svg)?;
    println!("wrote {path}");
    Ok(())
}

/// Routes `log` records to stderr; `PLOTKIT_LOG` holds the filter (default `warn`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("PLOTKIT_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a filter directive, falling back to `warn` when it is missing or malformed.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Quarterly values of three products: two side by side, the third stacked on the second.
///
/// Returns the bottom edge of the chart including its legend.
fn bars_demo(painter: &mut SvgPainter, rect: Rect) -> f64 {
    let mut plot = Plot::new();
    let x = plot.add_axis(PlotAxis::new(AxisType::Bottom, rect).with_range(0.5, 4.5));
    let y = plot.add_axis(PlotAxis::new(AxisType::Left, rect));

    let quarters = [1.0, 2.0, 3.0, 4.0];
    let series = [
        ("Widgets", [4.0, 5.5, 6.0, 3.5], css::STEEL_BLUE),
        ("Gadgets", [2.5, 3.0, 4.5, 5.0], css::DARK_ORANGE),
        ("Gizmos", [1.0, 1.5, -0.5, 2.0], css::SEA_GREEN),
    ];
    let mut ids = Vec::new();
    for (name, values, color) in series {
        let Some(id) = plot.add_bars(x, y) else {
            continue;
        };
        if let Some(bars) = plot.bars_mut(id) {
            bars.set_name(name);
            bars.set_data(&quarters, &values, true);
            bars.set_width(0.3);
            bars.set_width_type(BarWidthType::PlotCoords);
            bars.set_pen(StrokeStyle::solid(color, 1.0));
            bars.set_brush(color.with_alpha(0.6));
        }
        ids.push(id);
    }
    let [widgets, gadgets, gizmos] = ids[..] else {
        return rect.y1;
    };

    if let Err(err) = link_bars(&mut plot, [widgets, gadgets, gizmos]) {
        log::error!("could not link demo bars: {err}");
    }

    for id in [widgets, gadgets, gizmos] {
        plot.rescale_value_axis(id, true);
    }

    painter.set_pen(Some(&StrokeStyle::solid(css::GRAY, 1.0)));
    painter.set_brush(None);
    painter.draw_rect(rect);
    plot.draw_all(painter);
    painter.label(Point::new(rect.x0, rect.y0 - 12.0), 14.0, "Grouped and stacked bars");

    let legend_y = rect.y1 + 12.0;
    for (i, id) in [widgets, gadgets, gizmos].into_iter().enumerate() {
        let x0 = rect.x0 + 110.0 * i as f64;
        plot.draw_legend_icon(id, painter, Rect::new(x0, legend_y, x0 + 18.0, legend_y + 18.0));
        if let Some(bars) = plot.bars(id) {
            painter.label(Point::new(x0 + 22.0, legend_y + 14.0), 12.0, bars.name());
        }
    }
    legend_y + 18.0
}

/// Puts the first two bars side by side and stacks the third on the second.
fn link_bars(plot: &mut Plot, [widgets, gadgets, gizmos]: [BarsId; 3]) -> Result<(), LinkError> {
    plot.move_above(gizmos, Some(gadgets))?;
    let group = plot.add_group(BarsGroup::default().with_spacing(SpacingType::Absolute, 6.0));
    for id in [widgets, gadgets, gizmos] {
        plot.group_append(group, id)?;
    }
    Ok(())
}

/// One strip per preset, each colorized from a ramp over `[0, 1]`.
///
/// Returns the bottom edge of the last strip.
fn gradient_demo(painter: &mut SvgPainter, top: f64) -> f64 {
    let ramp: Vec<f64> = (0..STRIP_SAMPLES)
        .map(|i| i as f64 / (STRIP_SAMPLES - 1) as f64)
        .collect();
    let mut colors = vec![Rgba8 { r: 0, g: 0, b: 0, a: 0 }; STRIP_SAMPLES];
    let (x0, x1) = (100.0, WIDTH - 40.0);
    let step = (x1 - x0) / STRIP_SAMPLES as f64;

    painter.set_pen(None);
    let mut y = top;
    for preset in GradientPreset::ALL {
        let gradient = ColorGradient::from_preset(preset);
        gradient.colorize(&ramp, Range::new(0.0, 1.0), &mut colors, 1, false);
        painter.label(Point::new(20.0, y + STRIP_HEIGHT - 3.0), 11.0, preset.name());
        for (i, c) in colors.iter().enumerate() {
            let color = Color::from_rgba8(c.r, c.g, c.b, c.a);
            painter.set_brush(Some(&color.into()));
            let sx = x0 + step * i as f64;
            // Overlap by a pixel fraction so no seams show between samples.
            painter.draw_rect(Rect::new(sx, y, sx + step + 0.5, y + STRIP_HEIGHT));
        }
        y += STRIP_HEIGHT + 4.0;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("plotkit=loud")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
