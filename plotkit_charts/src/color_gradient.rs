// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color gradients for mapping scalar data to colors.
//!
//! A [`ColorGradient`] is defined by color stops at positions in `[0, 1]`. Colors between
//! stops are interpolated in RGB or HSV space. Lookups go through a discretized buffer of
//! [`ColorGradient::level_count`] colors which is rebuilt lazily after any change to the stops,
//! the interpolation mode or the level count.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::cell::OnceCell;

use peniko::color::Rgba8;
use plotkit_core::Range;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::hsv::{Hsv, channel};

/// Color space used to interpolate between color stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorInterpolation {
    /// Per-channel linear interpolation of red, green and blue.
    #[default]
    Rgb,
    /// Linear interpolation of saturation and value, and of hue along the shorter way around
    /// the hue circle.
    Hsv,
}

/// A color anchored at a gradient position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub position: f64,
    /// Color at `position`.
    pub color: Rgba8,
}

/// The built-in gradients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientPreset {
    /// Continuous lightness from black to white (suited for non-biased data).
    Grayscale,
    /// Continuous lightness from black over firey colors to white.
    Hot,
    /// Continuous lightness from black over icey colors to white.
    Cold,
    /// Continuous lightness from black over weak blueish colors to white.
    Night,
    /// Blue over pink to white.
    Candy,
    /// Colors suitable to represent different elevations on geographical maps.
    Geography,
    /// Half hue spectrum from black over purple to blue and finally green.
    Ion,
    /// Colors suitable for thermal imaging, ranging from dark blue over purple to orange,
    /// yellow and white.
    Thermal,
    /// Colors suitable to emphasize polarity around the center, with blue for negative, black
    /// in the middle and red for positive values.
    Polar,
    /// An approximation of the visible light spectrum.
    Spectrum,
    /// Hue variation similar to a spectrum, often used in numerical visualization.
    Jet,
    /// Full hue cycle, with the highest and lowest color red. Suitable for periodic data.
    Hues,
}

type StopTable = &'static [(f64, [u8; 3])];

impl GradientPreset {
    /// Every preset, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::Grayscale,
        Self::Hot,
        Self::Cold,
        Self::Night,
        Self::Candy,
        Self::Geography,
        Self::Ion,
        Self::Thermal,
        Self::Polar,
        Self::Spectrum,
        Self::Jet,
        Self::Hues,
    ];

    /// Returns the lowercase catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Night => "night",
            Self::Candy => "candy",
            Self::Geography => "geography",
            Self::Ion => "ion",
            Self::Thermal => "thermal",
            Self::Polar => "polar",
            Self::Spectrum => "spectrum",
            Self::Jet => "jet",
            Self::Hues => "hues",
        }
    }

    /// Looks a preset up by catalog name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    fn definition(self) -> (ColorInterpolation, StopTable) {
        use ColorInterpolation::{Hsv, Rgb};
        match self {
            Self::Grayscale => (Rgb, &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])]),
            Self::Hot => (
                Rgb,
                &[
                    (0.0, [50, 0, 0]),
                    (0.2, [180, 10, 0]),
                    (0.4, [245, 50, 0]),
                    (0.6, [255, 150, 10]),
                    (0.8, [255, 255, 50]),
                    (1.0, [255, 255, 255]),
                ],
            ),
            Self::Cold => (
                Rgb,
                &[
                    (0.0, [0, 0, 50]),
                    (0.2, [0, 10, 180]),
                    (0.4, [0, 50, 245]),
                    (0.6, [10, 150, 255]),
                    (0.8, [50, 255, 255]),
                    (1.0, [255, 255, 255]),
                ],
            ),
            Self::Night => (Hsv, &[(0.0, [10, 20, 30]), (1.0, [250, 255, 250])]),
            Self::Candy => (Hsv, &[(0.0, [0, 0, 255]), (1.0, [255, 250, 250])]),
            Self::Geography => (
                Rgb,
                &[
                    (0.0, [70, 170, 210]),
                    (0.20, [90, 160, 180]),
                    (0.25, [45, 130, 175]),
                    (0.30, [100, 140, 125]),
                    (0.5, [100, 140, 100]),
                    (0.6, [130, 145, 120]),
                    (0.7, [140, 130, 120]),
                    (0.9, [180, 190, 190]),
                    (1.0, [210, 210, 230]),
                ],
            ),
            Self::Ion => (
                Hsv,
                &[
                    (0.0, [50, 10, 10]),
                    (0.45, [0, 0, 255]),
                    (0.8, [0, 255, 255]),
                    (1.0, [0, 255, 0]),
                ],
            ),
            Self::Thermal => (
                Rgb,
                &[
                    (0.0, [0, 0, 50]),
                    (0.15, [20, 0, 120]),
                    (0.33, [200, 30, 140]),
                    (0.6, [255, 100, 0]),
                    (0.85, [255, 255, 40]),
                    (1.0, [255, 255, 255]),
                ],
            ),
            Self::Polar => (
                Rgb,
                &[
                    (0.0, [50, 255, 255]),
                    (0.18, [10, 70, 255]),
                    (0.28, [10, 10, 190]),
                    (0.5, [0, 0, 0]),
                    (0.72, [190, 10, 10]),
                    (0.82, [255, 70, 10]),
                    (1.0, [255, 255, 50]),
                ],
            ),
            Self::Spectrum => (
                Hsv,
                &[
                    (0.0, [50, 0, 50]),
                    (0.15, [0, 0, 255]),
                    (0.35, [0, 255, 255]),
                    (0.6, [255, 255, 0]),
                    (0.75, [255, 30, 0]),
                    (1.0, [50, 0, 0]),
                ],
            ),
            Self::Jet => (
                Rgb,
                &[
                    (0.0, [0, 0, 100]),
                    (0.15, [0, 50, 255]),
                    (0.35, [0, 255, 255]),
                    (0.65, [255, 255, 0]),
                    (0.85, [255, 30, 0]),
                    (1.0, [100, 0, 0]),
                ],
            ),
            Self::Hues => (
                Hsv,
                &[
                    (0.0, [255, 0, 0]),
                    (1.0 / 3.0, [0, 0, 255]),
                    (2.0 / 3.0, [0, 255, 0]),
                    (1.0, [255, 0, 0]),
                ],
            ),
        }
    }
}

/// Maps scalar values to colors through interpolated color stops.
///
/// Equality compares the level count, interpolation mode, periodicity and color stops; the
/// lookup buffer is derived state and does not take part.
#[derive(Clone, Debug)]
pub struct ColorGradient {
    stops: Vec<ColorStop>,
    interpolation: ColorInterpolation,
    level_count: usize,
    periodic: bool,
    /// Empty whenever the stops, interpolation or level count changed since the last lookup.
    buffer: OnceCell<Vec<Rgba8>>,
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self {
            stops: Vec::new(),
            interpolation: ColorInterpolation::Rgb,
            level_count: Self::DEFAULT_LEVEL_COUNT,
            periodic: false,
            buffer: OnceCell::new(),
        }
    }
}

impl PartialEq for ColorGradient {
    fn eq(&self, other: &Self) -> bool {
        self.level_count == other.level_count
            && self.interpolation == other.interpolation
            && self.periodic == other.periodic
            && self.stops == other.stops
    }
}

impl From<GradientPreset> for ColorGradient {
    fn from(preset: GradientPreset) -> Self {
        Self::from_preset(preset)
    }
}

impl ColorGradient {
    /// Level count of new gradients; enough for a visually smooth ramp.
    pub const DEFAULT_LEVEL_COUNT: usize = 350;

    /// Smallest accepted level count.
    pub const MIN_LEVEL_COUNT: usize = 2;

    /// Creates a gradient without color stops (every lookup yields black).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gradient initialized from a preset.
    pub fn from_preset(preset: GradientPreset) -> Self {
        let mut gradient = Self::default();
        gradient.load_preset(preset);
        gradient
    }

    /// Returns the number of discretization levels.
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Sets the number of discretization levels.
    ///
    /// Values below [`Self::MIN_LEVEL_COUNT`] are clamped.
    pub fn set_level_count(&mut self, n: usize) {
        let n = if n < Self::MIN_LEVEL_COUNT {
            log::debug!(
                "level count must be at least {} but was {n}",
                Self::MIN_LEVEL_COUNT
            );
            Self::MIN_LEVEL_COUNT
        } else {
            n
        };
        if n != self.level_count {
            self.level_count = n;
            self.invalidate();
        }
    }

    /// Sets the level count, returning `self`.
    pub fn with_level_count(mut self, n: usize) -> Self {
        self.set_level_count(n);
        self
    }

    /// Returns the color stops in ascending position order.
    pub fn color_stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Replaces all color stops.
    ///
    /// Stops with a non-finite position are dropped; later stops win over earlier ones at the
    /// same position.
    pub fn set_color_stops(&mut self, stops: impl IntoIterator<Item = ColorStop>) {
        self.stops.clear();
        for stop in stops {
            self.upsert(stop.position, stop.color);
        }
        self.invalidate();
    }

    /// Sets the color at `position` (typically in `[0, 1]`), replacing any stop already there.
    pub fn set_color_stop_at(&mut self, position: f64, color: Rgba8) {
        self.upsert(position, color);
        self.invalidate();
    }

    /// Removes all color stops.
    pub fn clear_color_stops(&mut self) {
        self.stops.clear();
        self.invalidate();
    }

    /// Returns the interpolation mode.
    pub fn color_interpolation(&self) -> ColorInterpolation {
        self.interpolation
    }

    /// Sets the interpolation mode.
    pub fn set_color_interpolation(&mut self, interpolation: ColorInterpolation) {
        if interpolation != self.interpolation {
            self.interpolation = interpolation;
            self.invalidate();
        }
    }

    /// Returns whether out-of-range values wrap around instead of clamping.
    pub fn periodic(&self) -> bool {
        self.periodic
    }

    /// Sets whether out-of-range values wrap around instead of clamping.
    ///
    /// Gradients whose first and last colors match (like [`GradientPreset::Hues`]) give smooth
    /// periodic maps.
    pub fn set_periodic(&mut self, periodic: bool) {
        self.periodic = periodic;
    }

    /// Sets periodicity, returning `self`.
    pub fn with_periodic(mut self, periodic: bool) -> Self {
        self.periodic = periodic;
        self
    }

    /// Clears the color stops and installs `preset`'s stops and interpolation mode.
    pub fn load_preset(&mut self, preset: GradientPreset) {
        self.clear_color_stops();
        let (interpolation, table) = preset.definition();
        self.set_color_interpolation(interpolation);
        for &(position, [r, g, b]) in table {
            self.upsert(position, Rgba8 { r, g, b, a: 255 });
        }
        self.invalidate();
    }

    /// Returns a copy with every stop position `p` moved to `1 - p`.
    pub fn inverted(&self) -> Self {
        let mut result = self.clone();
        result.set_color_stops(self.stops.iter().map(|s| ColorStop {
            position: 1.0 - s.position,
            color: s.color,
        }));
        result
    }

    /// Returns the lookup buffer, rebuilding it first if needed.
    pub fn level_colors(&self) -> &[Rgba8] {
        self.buffer.get_or_init(|| self.build_buffer())
    }

    /// Maps one data value to a color.
    ///
    /// `range` is the data range the gradient spans. With `logarithmic`, values are placed by
    /// their logarithmic position within `range` (both bounds must have the same sign).
    pub fn color(&self, position: f64, range: Range, logarithmic: bool) -> Rgba8 {
        let buffer = self.level_colors();
        buffer[self.level_index(position, range, logarithmic)]
    }

    /// Maps a batch of data values to colors.
    ///
    /// `out[i]` receives the color of `data[i * stride]`. A `stride` other than 1 selects a
    /// column of row-major 2D data without copying it. If `data` is too short for `out`, only
    /// the addressable prefix of `out` is written.
    pub fn colorize(
        &self,
        data: &[f64],
        range: Range,
        out: &mut [Rgba8],
        stride: usize,
        logarithmic: bool,
    ) {
        if data.is_empty() {
            if !out.is_empty() {
                log::warn!("no data given to colorize {} colors", out.len());
            }
            return;
        }
        let addressable = if stride == 0 {
            out.len()
        } else {
            (data.len() - 1) / stride + 1
        };
        let n = out.len().min(addressable);
        if n < out.len() {
            log::warn!(
                "data of length {} with stride {stride} covers only {n} of {} colors",
                data.len(),
                out.len()
            );
        }
        let buffer = self.level_colors();
        for (i, slot) in out[..n].iter_mut().enumerate() {
            *slot = buffer[self.level_index(data[i * stride], range, logarithmic)];
        }
    }

    /// Buffer index for a data value; shared by [`Self::color`] and [`Self::colorize`].
    fn level_index(&self, position: f64, range: Range, logarithmic: bool) -> usize {
        let top = (self.level_count - 1) as f64;
        let raw = if logarithmic {
            (position / range.lower).ln() / (range.upper / range.lower).ln() * top
        } else {
            (position - range.lower) * top / range.size()
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "truncation toward zero is the discretization; NaN maps to 0"
        )]
        let index = raw as i64;
        let levels = i64::try_from(self.level_count).unwrap_or(i64::MAX);
        let index = if self.periodic {
            index.rem_euclid(levels)
        } else {
            index.clamp(0, levels - 1)
        };
        usize::try_from(index).unwrap_or(0)
    }

    fn upsert(&mut self, position: f64, color: Rgba8) {
        if !position.is_finite() {
            log::warn!("ignoring color stop at non-finite position {position}");
            return;
        }
        match self
            .stops
            .binary_search_by(|s| s.position.total_cmp(&position))
        {
            Ok(i) => self.stops[i].color = color,
            Err(i) => self.stops.insert(i, ColorStop { position, color }),
        }
    }

    fn invalidate(&mut self) {
        self.buffer = OnceCell::new();
    }

    fn build_buffer(&self) -> Vec<Rgba8> {
        let n = self.level_count;
        match self.stops.as_slice() {
            [] => vec![BLACK; n],
            [only] => vec![opaque(only.color); n],
            stops => {
                let step = 1.0 / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let position = i as f64 * step;
                        let hi = stops.partition_point(|s| s.position < position);
                        match hi {
                            _ if hi == stops.len() => opaque(stops[hi - 1].color),
                            0 => opaque(stops[0].color),
                            _ => {
                                let low = stops[hi - 1];
                                let high = stops[hi];
                                let t = (position - low.position) / (high.position - low.position);
                                interpolate(low.color, high.color, t, self.interpolation)
                            }
                        }
                    })
                    .collect()
            }
        }
    }
}

const BLACK: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

fn opaque(c: Rgba8) -> Rgba8 {
    Rgba8 { a: 255, ..c }
}

/// Blends two stop colors; `t = 0` yields `low`, `t = 1` yields `high`.
fn interpolate(low: Rgba8, high: Rgba8, t: f64, mode: ColorInterpolation) -> Rgba8 {
    match mode {
        ColorInterpolation::Rgb => {
            let mix = |a: u8, b: u8| channel(((1.0 - t) * f64::from(a) + t * f64::from(b)) / 255.0);
            Rgba8 {
                r: mix(low.r, high.r),
                g: mix(low.g, high.g),
                b: mix(low.b, high.b),
                a: 255,
            }
        }
        ColorInterpolation::Hsv => {
            let lo = Hsv::from_rgba8(low);
            let hi = Hsv::from_rgba8(high);
            let diff = hi.h - lo.h;
            let mut h = if diff > 0.5 {
                lo.h - t * (1.0 - diff)
            } else if diff < -0.5 {
                lo.h + t * (1.0 + diff)
            } else {
                lo.h + t * diff
            };
            if h < 0.0 {
                h += 1.0;
            } else if h >= 1.0 {
                h -= 1.0;
            }
            Hsv {
                h,
                s: (1.0 - t) * lo.s + t * hi.s,
                v: (1.0 - t) * lo.v + t * hi.v,
            }
            .to_rgba8()
        }
    }
}
