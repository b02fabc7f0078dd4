// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color gradients and bar plottables for Plotkit.
//!
//! This crate sits on top of `plotkit_core`:
//! - [`ColorGradient`] maps scalar data to colors through interpolated color stops and a
//!   precomputed lookup buffer. Color maps and color scales consume it at render time.
//! - [`Plot`] owns axes, [`Bars`] plottables and [`BarsGroup`]s. Bars can be stacked on top of
//!   each other ([`Plot::move_above`]) and grouped side by side ([`Plot::group_append`]); the
//!   plot turns data points into pixel-space bar polygons that honour both.
//!
//! Painting goes through `plotkit_core::Painter`; rasterization is out of scope.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bars;
mod bars_group;
#[cfg(test)]
mod bars_tests;
mod color_gradient;
#[cfg(not(feature = "std"))]
mod float;
mod hsv;
mod plot;
mod stack;

pub use bars::{BarPolygon, BarWidthType, Bars, BarsData};
pub use bars_group::{BarsGroup, SpacingType};
pub use color_gradient::{ColorGradient, ColorInterpolation, ColorStop, GradientPreset};
pub use plot::{AxisId, BarsId, GroupId, LinkError, Plot};
