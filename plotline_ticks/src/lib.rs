// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure axis math for `plotline`.
//!
//! This crate has no state and no locks; everything here may be called from any thread:
//! - **Tick generators** turn an axis interval and the available plot space into a "nice",
//!   labelled tick set: numeric (order of magnitude), temporal (calendar units) and
//!   categorical (one tick per band).
//! - **Projection** maps plot coordinates into a Cartesian or polar plane, and back.
//!
//! Chart state (axes, series, clipping) lives in `plotline_charts`.

#![no_std]

extern crate alloc;

mod category;
mod domain;
#[cfg(not(feature = "std"))]
mod float;
mod numeric;
mod projection;
mod scale;
mod time;

pub use category::{band_center, band_size, categorical_ticks};
pub use domain::{DomainKind, DomainValue, Tick};
pub use numeric::{
    DEFAULT_NUMERIC_LABEL_SPACE, NumericTickGenerator, NumericTicks, ROUNDING_SLACK,
    angular_ticks, format_number, label_precision, max_tick_count, numeric_ticks,
};
pub use projection::{CartesianPlane, Plane, PlaneKind, PolarDirection, PolarPlane};
pub use scale::LinearMap;
pub use time::{
    DEFAULT_TEMPORAL_LABEL_SPACE, TemporalTickGenerator, TemporalTicks, TimeUnit, format_instant,
    select_unit, span_seconds, temporal_ticks,
};
