// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint surface plottables draw onto.

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }

    /// Returns whether stroking with this style would leave no visible trace.
    pub fn is_invisible(&self) -> bool {
        self.stroke_width <= 0.0 || brush_is_transparent(&self.brush)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Returns whether a solid brush is fully transparent.
///
/// Gradient and image brushes are never considered transparent.
pub fn brush_is_transparent(brush: &Brush) -> bool {
    match brush {
        Brush::Solid(color) => color.to_rgba8().a == 0,
        _ => false,
    }
}

/// A paint surface in pixel coordinates.
///
/// Pen and brush are state: they apply to every following draw call until changed. `None`
/// disables stroking or filling respectively.
pub trait Painter {
    /// Sets the outline style.
    fn set_pen(&mut self, pen: Option<&StrokeStyle>);

    /// Sets the fill paint.
    fn set_brush(&mut self, brush: Option<&Brush>);

    /// Draws a closed polygon (filled with the brush, outlined with the pen).
    fn draw_polygon(&mut self, points: &[Point]);

    /// Draws an open polyline with the pen.
    fn draw_polyline(&mut self, points: &[Point]);

    /// Draws an axis-aligned rectangle.
    fn draw_rect(&mut self, rect: Rect) {
        self.draw_polygon(&[
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ]);
    }
}
