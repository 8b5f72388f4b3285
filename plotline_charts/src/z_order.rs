// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for projected primitives.
//!
//! Every [`crate::Primitive`] carries a `z_index`. Within one index, primitives keep series
//! insertion order, so renderers should sort by `z_index` with a stable sort.

/// Filled shapes: bars, boxes, candle bodies, sectors, area fills.
pub const SERIES_FILL: i32 = 0;
/// Stroked shapes: line segments, stems, whiskers, wicks.
pub const SERIES_STROKE: i32 = 10;
/// Point markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;
