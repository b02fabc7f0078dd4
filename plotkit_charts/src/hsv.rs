// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HSV conversions for gradient interpolation.

use peniko::color::Rgba8;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A color in hue/saturation/value space, all components in `[0, 1]`.
///
/// `h` lies in `[0, 1)`. Achromatic colors (grays) report a hue of `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Hsv {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) v: f64,
}

impl Hsv {
    pub(crate) fn from_rgba8(c: Rgba8) -> Self {
        let r = f64::from(c.r) / 255.0;
        let g = f64::from(c.g) / 255.0;
        let b = f64::from(c.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let sector_hue = if delta == 0.0 {
            0.0
        } else if max == r {
            let h = (g - b) / delta;
            if h < 0.0 { h + 6.0 } else { h }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = sector_hue / 6.0;
        Self {
            h: if h >= 1.0 { h - 1.0 } else { h },
            s,
            v: max,
        }
    }

    pub(crate) fn to_rgba8(self) -> Rgba8 {
        let Self { h, s, v } = self;
        let h6 = h * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        #[allow(clippy::cast_possible_truncation, reason = "floor of a value in [0, 6]")]
        let (r, g, b) = match sector as i32 {
            0 | 6 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgba8 {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: 255,
        }
    }
}

/// Converts a `[0, 1]` channel to `0..=255`, rounding to nearest.
#[allow(clippy::cast_possible_truncation, reason = "clamped to the u8 range")]
pub(crate) fn channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}
