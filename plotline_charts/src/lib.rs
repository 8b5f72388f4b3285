// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Charts built from series of data, projected onto a Cartesian or polar plane.
//!
//! A [`Chart`] holds two axes and an ordered list of [`Series`]:
//! - **Axes** follow the data (or a pinned range), pick an origin and generate ticks with
//!   `plotline_ticks`.
//! - **Series** hold points, candles or boxes and derive their geometry (segments, markers,
//!   bars, fills, slices) clipped to the visible window.
//! - **Recompute** runs after every accepted mutation. It re-derives ranges, ticks, layouts
//!   and geometry from scratch, so the result never depends on mutation history.
//!
//! Series handles are `Send + Sync` and may be fed from several threads at once; each series
//! has its own lock, and a handle whose chart is gone reports [`ChartError::Detached`].
//!
//! ```
//! use plotline_charts::{AxisId, Chart, ChartSpec, IndependentKind, Point, SeriesSpec};
//!
//! let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Numeric));
//! let line = chart.add_series(SeriesSpec::line("temperature")).unwrap();
//! line.add_points(vec![Point::new(0.0, 12.0), Point::new(100.0, 18.0)]).unwrap();
//!
//! let labels: Vec<_> = chart.ticks(AxisId::Independent).into_iter().map(|t| t.label).collect();
//! assert_eq!(labels.first().map(String::as_str), Some("0"));
//! assert_eq!(chart.visible_geometry().segments().count(), 1);
//! ```
//!
//! Rendering, text layout and colour are left to the caller.

mod axis;
mod chart;
mod chart_spec;
mod clip;
mod data;
mod error;
mod extent;
mod geometry;
#[cfg(test)]
mod property_tests;
mod series;
mod sync;
pub mod z_order;

pub use axis::{Axis, AxisId, AxisRange, AxisRole, DEFAULT_PLOT_INTERVAL, ManualTick};
pub use chart::{Chart, TickMark};
pub use chart_spec::{ChartSpec, IndependentKind, PolarSpec, TickSpacing};
pub use data::{BoxPoint, CandleStick, DataPoint, Point, Trend};
pub use error::{ChartError, Result};
pub use geometry::{Primitive, RectShape, SeriesGeometry, Shape, VisibleGeometry};
pub use series::{Series, SeriesKind, SeriesSpec};

pub use kurbo::Size;
pub use plotline_ticks::{
    DomainKind, DomainValue, Plane, PlaneKind, PolarDirection, Tick, TimeUnit,
};
