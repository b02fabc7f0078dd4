// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis coordinate transforms.
//!
//! Plottables only see an axis through the [`Axis`] trait. [`PlotAxis`] is the stock
//! implementation: it maps a [`Range`] linearly or logarithmically onto one edge of an axis
//! rectangle, with optional reversal.

use kurbo::Rect;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::Range;

/// Direction in which an axis runs on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// Left to right (pixel x grows with the coordinate unless reversed).
    Horizontal,
    /// Bottom to top (pixel y shrinks as the coordinate grows unless reversed).
    Vertical,
}

/// Placement of an axis relative to its axis rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// Vertical axis along the left edge.
    Left,
    /// Vertical axis along the right edge.
    Right,
    /// Horizontal axis along the top edge.
    Top,
    /// Horizontal axis along the bottom edge.
    Bottom,
}

impl AxisType {
    /// Returns the on-screen orientation of an axis placed this way.
    pub fn orientation(self) -> AxisOrientation {
        match self {
            Self::Left | Self::Right => AxisOrientation::Vertical,
            Self::Top | Self::Bottom => AxisOrientation::Horizontal,
        }
    }
}

/// How coordinates are distributed along an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleType {
    /// Equal coordinate steps map to equal pixel steps.
    #[default]
    Linear,
    /// Equal coordinate ratios map to equal pixel steps.
    Logarithmic,
}

/// The coordinate transform a plottable draws against.
pub trait Axis: core::fmt::Debug {
    /// Maps a plot coordinate to a pixel position along the axis.
    fn coord_to_pixel(&self, value: f64) -> f64;

    /// Maps a pixel position along the axis back to a plot coordinate.
    fn pixel_to_coord(&self, pixel: f64) -> f64;

    /// Returns the currently displayed coordinate range.
    fn range(&self) -> Range;

    /// Replaces the displayed coordinate range.
    fn set_range(&mut self, range: Range);

    /// Returns the on-screen orientation.
    fn orientation(&self) -> AxisOrientation;

    /// Returns whether the range runs against the natural screen direction.
    fn range_reversed(&self) -> bool;

    /// Returns the rectangle (in pixels) the axis spans.
    fn axis_rect(&self) -> Rect;

    /// Returns the scale type.
    fn scale_type(&self) -> ScaleType {
        ScaleType::Linear
    }
}

/// A stock axis over a pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotAxis {
    axis_type: AxisType,
    rect: Rect,
    range: Range,
    reversed: bool,
    scale_type: ScaleType,
}

/// Pixel distance beyond the axis rect used for coordinates a log axis cannot show.
const LOG_OUT_OF_RANGE: f64 = 200.0;

impl PlotAxis {
    /// Creates a linear axis with range `[0, 5]` spanning `rect`.
    pub fn new(axis_type: AxisType, rect: Rect) -> Self {
        Self {
            axis_type,
            rect,
            range: Range::new(0.0, 5.0),
            reversed: false,
            scale_type: ScaleType::Linear,
        }
    }

    /// Sets the displayed range.
    pub fn with_range(mut self, lower: f64, upper: f64) -> Self {
        self.set_range(Range::new(lower, upper));
        self
    }

    /// Sets whether the range is reversed.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Sets the scale type.
    ///
    /// Switching to a logarithmic scale re-sanitizes the current range.
    pub fn with_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = scale_type;
        if scale_type == ScaleType::Logarithmic {
            self.range = self.range.sanitized_for_log_scale();
        }
        self
    }

    /// Returns how the axis is placed.
    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    /// Replaces the axis rectangle (e.g. after a widget resize).
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Sets whether the range is reversed.
    pub fn set_range_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    fn log_pixel(&self, value: f64, extent: f64) -> Option<f64> {
        let r = self.range;
        if (value >= 0.0 && r.upper < 0.0) || (value <= 0.0 && r.upper >= 0.0) {
            return None;
        }
        let full = (r.upper / r.lower).ln();
        Some(if self.reversed {
            (r.upper / value).ln() / full * extent
        } else {
            (value / r.lower).ln() / full * extent
        })
    }
}

impl Axis for PlotAxis {
    fn coord_to_pixel(&self, value: f64) -> f64 {
        let r = self.range;
        let rect = self.rect;
        match (self.orientation(), self.scale_type) {
            (AxisOrientation::Horizontal, ScaleType::Linear) => {
                let t = if self.reversed {
                    (r.upper - value) / r.size()
                } else {
                    (value - r.lower) / r.size()
                };
                t * rect.width() + rect.x0
            }
            (AxisOrientation::Vertical, ScaleType::Linear) => {
                let t = if self.reversed {
                    (r.upper - value) / r.size()
                } else {
                    (value - r.lower) / r.size()
                };
                rect.y1 - t * rect.height()
            }
            (AxisOrientation::Horizontal, ScaleType::Logarithmic) => {
                match self.log_pixel(value, rect.width()) {
                    Some(px) => px + rect.x0,
                    // The coordinate lies in the sign domain the axis does not show.
                    None => {
                        let below = value <= 0.0 && r.upper >= 0.0;
                        if below != self.reversed {
                            rect.x0 - LOG_OUT_OF_RANGE
                        } else {
                            rect.x1 + LOG_OUT_OF_RANGE
                        }
                    }
                }
            }
            (AxisOrientation::Vertical, ScaleType::Logarithmic) => {
                match self.log_pixel(value, rect.height()) {
                    Some(px) => rect.y1 - px,
                    None => {
                        let below = value <= 0.0 && r.upper >= 0.0;
                        if below != self.reversed {
                            rect.y1 + LOG_OUT_OF_RANGE
                        } else {
                            rect.y0 - LOG_OUT_OF_RANGE
                        }
                    }
                }
            }
        }
    }

    fn pixel_to_coord(&self, pixel: f64) -> f64 {
        let r = self.range;
        let rect = self.rect;
        let t = match self.orientation() {
            AxisOrientation::Horizontal => (pixel - rect.x0) / rect.width(),
            AxisOrientation::Vertical => (rect.y1 - pixel) / rect.height(),
        };
        match (self.scale_type, self.reversed) {
            (ScaleType::Linear, false) => t * r.size() + r.lower,
            (ScaleType::Linear, true) => -t * r.size() + r.upper,
            (ScaleType::Logarithmic, false) => (r.upper / r.lower).powf(t) * r.lower,
            (ScaleType::Logarithmic, true) => (r.upper / r.lower).powf(-t) * r.upper,
        }
    }

    fn range(&self) -> Range {
        self.range
    }

    fn set_range(&mut self, range: Range) {
        if range.lower.is_nan() || range.upper.is_nan() {
            log::warn!("ignoring NaN axis range {range:?}");
            return;
        }
        self.range = match self.scale_type {
            ScaleType::Linear => range.normalized(),
            ScaleType::Logarithmic => range.sanitized_for_log_scale(),
        };
    }

    fn orientation(&self) -> AxisOrientation {
        self.axis_type.orientation()
    }

    fn range_reversed(&self) -> bool {
        self.reversed
    }

    fn axis_rect(&self) -> Rect {
        self.rect
    }

    fn scale_type(&self) -> ScaleType {
        self.scale_type
    }
}
