// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart aggregator.
//!
//! A [`Chart`] owns two axes and an ordered list of series. Every mutation, whether through the
//! chart or through a [`Series`] handle, triggers a full recompute pass:
//! 1. dependent auto range from the union of visible series' values,
//! 2. independent auto range likewise,
//! 3. auto origins,
//! 4. ticks for both axes,
//! 5. per-series layout (bar slots, box width, proportional rows),
//! 6. geometry derivation for every series.
//!
//! Passes are serialised. Listeners registered with [`Chart::on_data_change`] run after each
//! pass, outside every lock.

use std::sync::{Arc, Mutex, RwLock};

use kurbo::{Point, Rect, Size};
use plotline_ticks::{CartesianPlane, DomainKind, DomainValue, Plane, PlaneKind, PolarPlane};
use tracing::debug;

use crate::axis::{Axis, AxisId, AxisRange, AxisRole, ManualTick};
use crate::chart_spec::{ChartSpec, IndependentKind};
use crate::error::{ChartError, Result};
use crate::extent::Extent;
use crate::geometry::VisibleGeometry;
use crate::series::{Frame, Layout, LayoutRequest, Series, SeriesSpec, box_width_divisor};
use crate::sync::{lock, read, write};

/// A tick in plot-plane units, ready for a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Label text.
    pub label: String,
    /// Where the label goes along the axis.
    ///
    /// Pixels along x or y on Cartesian charts, a plane angle (radians) on the angular axis and
    /// a plane radius on the radial axis.
    pub label_position: f64,
    /// Where the tick line goes, in the same units as `label_position`.
    pub line_position: f64,
    /// Whether to draw a support line across the plot.
    pub support_line: bool,
}

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Debug)]
struct AxesState {
    independent: Axis,
    dependent: Axis,
    size: Size,
}

impl AxesState {
    fn new(spec: &ChartSpec) -> Self {
        let (independent_role, dependent_role) = match spec.plane {
            PlaneKind::Cartesian => (AxisRole::Linear, AxisRole::Linear),
            PlaneKind::Polar => (AxisRole::Angular, AxisRole::Radial),
        };
        let independent_kind = match spec.independent {
            IndependentKind::Proportional => DomainKind::Numeric,
            kind => kind.domain_kind(),
        };
        Self {
            independent: Axis::new(independent_role, independent_kind, spec.fixed_independent()),
            dependent: Axis::new(dependent_role, DomainKind::Numeric, None),
            size: spec.size,
        }
    }

    fn axis(&self, id: AxisId) -> &Axis {
        match id {
            AxisId::Independent => &self.independent,
            AxisId::Dependent => &self.dependent,
        }
    }

    fn axis_mut(&mut self, id: AxisId) -> &mut Axis {
        match id {
            AxisId::Independent => &mut self.independent,
            AxisId::Dependent => &mut self.dependent,
        }
    }

    fn plane(&self, spec: &ChartSpec) -> Plane {
        let (x, y) = (self.independent.n_range(), self.dependent.n_range());
        match spec.plane {
            PlaneKind::Cartesian => Plane::Cartesian(CartesianPlane::new(x, y, self.size)),
            PlaneKind::Polar => Plane::Polar(PolarPlane::new(
                x,
                y,
                self.size,
                spec.polar.rotation,
                spec.polar.direction,
            )),
        }
    }

    /// Plot space available to tick labels along each axis.
    fn tick_space(&self, spec: &ChartSpec) -> (f64, f64) {
        match spec.plane {
            PlaneKind::Cartesian => (self.size.width, self.size.height),
            PlaneKind::Polar => {
                let radius = 0.5 * self.size.width.min(self.size.height);
                (core::f64::consts::TAU * radius, radius)
            }
        }
    }

    fn frame(&self, spec: &ChartSpec) -> Frame {
        let (x0, x1) = self.independent.n_range();
        let (y0, y1) = self.dependent.n_range();
        let base = match spec.plane {
            PlaneKind::Cartesian => self.dependent.origin(),
            PlaneKind::Polar => y0,
        };
        Frame {
            independent: self.independent.clone(),
            dependent: self.dependent.clone(),
            window: Rect::new(x0, y0, x1, y1),
            base,
        }
    }

    fn tick_marks(&self, id: AxisId, plane: &Plane) -> Vec<TickMark> {
        let axis = self.axis(id);
        let place = |v: &DomainValue| {
            let n = match v {
                DomainValue::Number(x) => *x,
                DomainValue::Instant(t) => axis.t_to_n(*t),
                DomainValue::Category(c) => axis.c_to_n(c),
            };
            match (plane, id) {
                (Plane::Cartesian(c), AxisId::Independent) => c.x_map().map(n),
                (Plane::Cartesian(c), AxisId::Dependent) => c.y_map().map(n),
                (Plane::Polar(p), AxisId::Independent) => p.plane_angle(n),
                (Plane::Polar(p), AxisId::Dependent) => p.plane_radius(n),
            }
        };
        axis.ticks()
            .into_iter()
            .map(|t| TickMark {
                label_position: place(&t.label_position),
                line_position: place(&t.line_position),
                support_line: t.support_line,
                label: t.label,
            })
            .collect()
    }
}

/// State shared between a [`Chart`] and the handles of its series.
pub(crate) struct ChartShared {
    spec: ChartSpec,
    axes: Mutex<AxesState>,
    series: RwLock<Vec<Series>>,
    pass: Mutex<()>,
    listeners: Mutex<Vec<Listener>>,
}

impl ChartShared {
    pub(crate) fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Runs one full recompute pass, then notifies listeners.
    pub(crate) fn recompute(&self) {
        {
            let _pass = lock(&self.pass);
            let series = read(&self.series).clone();
            let mut extent = Extent::default();
            for s in &series {
                extent.union(s.extent());
            }
            let requests: Vec<LayoutRequest> = series.iter().map(Series::layout_request).collect();

            let frame = {
                let mut axes = lock(&self.axes);
                self.apply_auto_ranges(&mut axes, &extent, &requests);
                axes.independent.apply_auto_origin();
                axes.dependent.apply_auto_origin();
                let (independent_space, dependent_space) = axes.tick_space(&self.spec);
                axes.independent
                    .regenerate_ticks(independent_space, &self.spec.spacing);
                axes.dependent
                    .regenerate_ticks(dependent_space, &self.spec.spacing);
                axes.frame(&self.spec)
            };

            let layouts = self.layouts(&frame, &requests);
            for (s, layout) in series.iter().zip(layouts) {
                s.derive(&frame, layout);
            }
            debug!(
                series = series.len(),
                independent_ticks = frame.independent.ticks().len(),
                dependent_ticks = frame.dependent.ticks().len(),
                "recomputed chart"
            );
        }
        let listeners = lock(&self.listeners).clone();
        for listener in listeners {
            listener();
        }
    }

    fn apply_auto_ranges(&self, axes: &mut AxesState, extent: &Extent, requests: &[LayoutRequest]) {
        if self.spec.independent == IndependentKind::Proportional {
            let rows = requests
                .iter()
                .filter(|r| matches!(r, LayoutRequest::Proportional))
                .count()
                .max(1);
            axes.dependent.apply_auto_range(AxisRange::Numeric {
                min: 0.0,
                max: rows as f64,
            });
        } else if let Some((lo, hi)) = extent.dependent {
            let lo = match self.spec.plane {
                PlaneKind::Polar => 0.0,
                PlaneKind::Cartesian => lo,
            };
            let hi = if hi <= lo { lo + 1.0 } else { hi };
            axes.dependent
                .apply_auto_range(AxisRange::Numeric { min: lo, max: hi });
        } else {
            axes.dependent
                .apply_auto_range(AxisRange::default_for(DomainKind::Numeric));
        }
        if self.spec.fixed_independent().is_none() {
            // Without visible data the axis falls back to its initial range.
            let range = extent
                .independent
                .to_range()
                .unwrap_or_else(|| AxisRange::default_for(axes.independent.kind()));
            axes.independent.apply_auto_range(range);
        }
    }

    fn layouts(&self, frame: &Frame, requests: &[LayoutRequest]) -> Vec<Layout> {
        let axis = &frame.independent;
        let categorical = axis.kind() == DomainKind::Categorical;
        let slots = if categorical {
            requests
                .iter()
                .filter(|r| matches!(r, LayoutRequest::Bar { .. } | LayoutRequest::Box { .. }))
                .count()
        } else {
            0
        };
        let slot_width = if slots == 0 {
            0.0
        } else {
            axis.band_size() * self.spec.bar_band_fill / slots as f64
        };
        let max_outliers = requests
            .iter()
            .filter_map(|r| match r {
                LayoutRequest::Box { max_outliers } => Some(*max_outliers),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        let (n0, n1) = axis.n_range();
        let box_width = (n1 - n0) / box_width_divisor(max_outliers) as f64;

        let mut slot = 0_usize;
        let mut row = 0_usize;
        requests
            .iter()
            .map(|request| match *request {
                LayoutRequest::None => Layout::default(),
                LayoutRequest::Bar { .. } | LayoutRequest::Box { .. } if categorical => {
                    let centred = slot_width * (slot as f64 - 0.5 * (slots as f64 - 1.0));
                    slot += 1;
                    match *request {
                        LayoutRequest::Bar { width, offset, .. } => Layout {
                            width: width.map_or(slot_width, |w| axis.extent_to_n(w)),
                            offset: offset.map_or(centred, |o| axis.extent_to_n(o)),
                        },
                        _ => Layout {
                            width: slot_width,
                            offset: centred,
                        },
                    }
                }
                LayoutRequest::Bar {
                    width,
                    offset,
                    default_width,
                } => Layout {
                    width: axis.extent_to_n(width.unwrap_or(default_width)),
                    offset: axis.extent_to_n(offset.unwrap_or(0.0)),
                },
                LayoutRequest::Box { .. } => Layout {
                    width: box_width,
                    offset: 0.0,
                },
                LayoutRequest::Proportional => {
                    row += 1;
                    Layout {
                        width: 1.0,
                        offset: (row - 1) as f64,
                    }
                }
            })
            .collect()
    }
}

/// A chart: two axes, a list of series and their derived geometry.
pub struct Chart {
    shared: Arc<ChartShared>,
}

impl core::fmt::Debug for Chart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chart")
            .field("spec", &self.shared.spec)
            .field("series", &*read(&self.shared.series))
            .finish_non_exhaustive()
    }
}

impl Drop for Chart {
    fn drop(&mut self) {
        for s in read(&self.shared.series).iter() {
            s.detach();
        }
    }
}

impl Chart {
    /// Creates an empty chart.
    pub fn new(spec: ChartSpec) -> Self {
        let chart = Self {
            shared: Arc::new(ChartShared {
                axes: Mutex::new(AxesState::new(&spec)),
                spec,
                series: RwLock::new(Vec::new()),
                pass: Mutex::new(()),
                listeners: Mutex::new(Vec::new()),
            }),
        };
        chart.shared.recompute();
        chart
    }

    /// The chart's configuration.
    pub fn spec(&self) -> &ChartSpec {
        &self.shared.spec
    }

    /// Adds an empty series at the end of the series list.
    pub fn add_series(&self, spec: SeriesSpec) -> Result<Series> {
        if !self.shared.spec.accepts(spec.kind) {
            return Err(ChartError::IncompatibleSeries {
                series: spec.kind,
                plane: self.shared.spec.plane_name(),
                chart: self.shared.spec.independent,
            });
        }
        let series = {
            let mut list = write(&self.shared.series);
            if list.iter().any(|s| s.name() == spec.name) {
                return Err(ChartError::DuplicateName(spec.name));
            }
            let series = Series::new(spec, Arc::downgrade(&self.shared));
            list.push(series.clone());
            series
        };
        debug!(series = series.name(), kind = ?series.kind(), "added series");
        self.shared.recompute();
        Ok(series)
    }

    /// Removes a series. The returned handle is detached.
    pub fn remove_series(&self, name: &str) -> Result<Series> {
        let removed = {
            let mut list = write(&self.shared.series);
            let index = list
                .iter()
                .position(|s| s.name() == name)
                .ok_or_else(|| ChartError::UnknownSeries(name.into()))?;
            list.remove(index)
        };
        removed.detach();
        debug!(series = name, "removed series");
        self.shared.recompute();
        Ok(removed)
    }

    /// Looks a series up by name.
    pub fn series(&self, name: &str) -> Option<Series> {
        read(&self.shared.series)
            .iter()
            .find(|s| s.name() == name)
            .cloned()
    }

    /// All series, in insertion (z and legend) order.
    pub fn series_list(&self) -> Vec<Series> {
        read(&self.shared.series).clone()
    }

    /// Current plot size.
    pub fn size(&self) -> Size {
        lock(&self.shared.axes).size
    }

    /// Changes the plot size. Tick density follows the available space.
    pub fn resize(&self, size: Size) {
        lock(&self.shared.axes).size = size;
        self.shared.recompute();
    }

    /// A snapshot of one axis.
    pub fn axis(&self, id: AxisId) -> Axis {
        lock(&self.shared.axes).axis(id).clone()
    }

    fn update_axis(&self, id: AxisId, op: impl FnOnce(&mut Axis) -> Result<()>) -> Result<()> {
        let out = op(lock(&self.shared.axes).axis_mut(id));
        match &out {
            Ok(()) => self.shared.recompute(),
            Err(err) => debug!(axis = ?id, %err, "rejected axis update"),
        }
        out
    }

    /// Pins an axis range.
    pub fn set_range(&self, id: AxisId, range: AxisRange) -> Result<()> {
        self.update_axis(id, |axis| axis.set_range(range))
    }

    /// Lets an axis range follow the data again.
    pub fn set_auto_range(&self, id: AxisId) {
        let _ = self.update_axis(id, |axis| {
            axis.set_auto_range();
            Ok(())
        });
    }

    /// Pins where the other axis crosses this one.
    pub fn set_origin(&self, id: AxisId, origin: impl Into<DomainValue>) -> Result<()> {
        let origin = origin.into();
        self.update_axis(id, |axis| axis.set_origin(origin))
    }

    /// Derives the origin from the range again.
    pub fn set_auto_origin(&self, id: AxisId) {
        let _ = self.update_axis(id, |axis| {
            axis.set_auto_origin();
            Ok(())
        });
    }

    /// Replaces generated ticks with the given ones.
    pub fn set_manual_ticks(&self, id: AxisId, ticks: Vec<ManualTick>) -> Result<()> {
        self.update_axis(id, |axis| axis.set_manual_ticks(ticks))
    }

    /// Generates ticks from the range again.
    pub fn set_auto_ticks(&self, id: AxisId, support_line: bool) {
        let _ = self.update_axis(id, |axis| {
            axis.set_auto_ticks(support_line);
            Ok(())
        });
    }

    /// Ticks of one axis in plot-plane units.
    pub fn ticks(&self, id: AxisId) -> Vec<TickMark> {
        let axes = lock(&self.shared.axes);
        let plane = axes.plane(&self.shared.spec);
        axes.tick_marks(id, &plane)
    }

    /// The current projection plane.
    pub fn plane(&self) -> Plane {
        lock(&self.shared.axes).plane(&self.shared.spec)
    }

    /// Everything currently visible, projected into the plot plane.
    pub fn visible_geometry(&self) -> VisibleGeometry {
        let plane = self.plane();
        let mut out = VisibleGeometry::default();
        for s in self.series_list() {
            out.push_series(s.name(), &s.geometry(), &plane);
        }
        out.finish()
    }

    /// Projects a plot coordinate pair into the plot plane.
    pub fn domain_to_plot(&self, x: f64, y: f64) -> Point {
        self.plane().forward(x, y)
    }

    /// Inverse of [`Chart::domain_to_plot`], for hit testing.
    pub fn plot_to_domain(&self, p: Point) -> (f64, f64) {
        self.plane().inverse(p)
    }

    /// Where the axis lines cross on a Cartesian chart.
    pub fn axis_crossing(&self) -> Option<Point> {
        let axes = lock(&self.shared.axes);
        match axes.plane(&self.shared.spec) {
            Plane::Cartesian(c) => Some(c.crossing(axes.independent.origin(), axes.dependent.origin())),
            Plane::Polar(_) => None,
        }
    }

    /// Registers a callback run at the end of every recompute pass.
    pub fn on_data_change(&self, listener: impl Fn() + Send + Sync + 'static) {
        lock(&self.shared.listeners).push(Arc::new(listener));
    }
}
