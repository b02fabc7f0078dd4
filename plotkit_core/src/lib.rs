// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces for Plotkit plottables.
//!
//! Plottables such as bars or color maps do not own their coordinate system or their paint
//! target. This crate provides the small set of types they are written against:
//! - **Ranges** ([`Range`], [`SignDomain`]) describe axis and data extents.
//! - **Axes** ([`Axis`], [`PlotAxis`]) map plot coordinates to pixels and back.
//! - **Data containers** ([`DataContainer`]) keep data points sorted by key.
//! - **Painters** ([`Painter`]) receive polygons and polylines in pixel space.
//!
//! Rasterization is out of scope; a painter is whatever the embedding toolkit provides.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod painter;
mod range;

pub use axis::{Axis, AxisOrientation, AxisType, PlotAxis, ScaleType};
pub use data::{DataContainer, SortKey};
pub use painter::{Painter, StrokeStyle, brush_is_transparent};
pub use range::{Range, SignDomain};
