// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series: data, per-series locking and geometry derivation.
//!
//! A [`Series`] is a cheap handle. Its state lives behind its own lock; every mutation validates
//! the whole request first, applies it, releases the lock and then asks the owning chart to
//! recompute. A series removed from its chart (or whose chart was dropped) rejects every
//! mutation with [`ChartError::Detached`].

use std::sync::{Arc, Mutex, Weak};

use chrono::{DateTime, Utc};
use kurbo::{Point as PlotPoint, Rect};
use plotline_ticks::DomainValue;
use tracing::{debug, trace};

use crate::axis::Axis;
use crate::chart::ChartShared;
use crate::chart_spec::ChartSpec;
use crate::data::{BoxPoint, CandleStick, DataPoint, Point};
use crate::error::{ChartError, Result};
use crate::extent::Extent;
use crate::geometry::SeriesGeometry;
use crate::sync::lock;

mod bar;
mod box_plot;
mod candle;
mod line;
mod marker;
mod proportional;

use bar::{BarSeries, StackedBarSeries};
pub(crate) use box_plot::box_width_divisor;
use box_plot::BoxSeries;
use candle::CandleSeries;
use line::{AreaSeries, LineSeries};
use marker::{LollipopSeries, ScatterSeries};
use proportional::ProportionalSeries;

/// The kinds of series a chart can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Points joined by segments.
    Line,
    /// Unjoined points.
    Scatter,
    /// One bar per point, from the value base.
    Bar,
    /// Named children whose bars stack per independent value.
    StackedBar,
    /// A line with the region down to a base filled.
    Area,
    /// A point on a stem from the value base.
    Lollipop,
    /// Open/high/low/close intervals.
    CandleStick,
    /// Five-number summaries with outliers.
    Box,
    /// Shares of a whole, one ring or row per series.
    Proportional,
}

/// Name and kind of a new series.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeriesSpec {
    /// Unique (per chart) name.
    pub name: String,
    /// Series kind.
    pub kind: SeriesKind,
}

impl SeriesSpec {
    /// Creates a spec.
    pub fn new(name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A [`SeriesKind::Line`] series.
    pub fn line(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Line)
    }

    /// A [`SeriesKind::Scatter`] series.
    pub fn scatter(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Scatter)
    }

    /// A [`SeriesKind::Bar`] series.
    pub fn bar(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Bar)
    }

    /// A [`SeriesKind::StackedBar`] series.
    pub fn stacked_bar(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::StackedBar)
    }

    /// A [`SeriesKind::Area`] series.
    pub fn area(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Area)
    }

    /// A [`SeriesKind::Lollipop`] series.
    pub fn lollipop(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Lollipop)
    }

    /// A [`SeriesKind::CandleStick`] series.
    pub fn candle_stick(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::CandleStick)
    }

    /// A [`SeriesKind::Box`] series.
    pub fn box_plot(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Box)
    }

    /// A [`SeriesKind::Proportional`] series.
    pub fn proportional(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Proportional)
    }
}

/// Axis state shared by every series during one derivation pass.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    pub(crate) independent: Axis,
    pub(crate) dependent: Axis,
    /// Visible window in plot coordinates.
    pub(crate) window: Rect,
    /// Where bars and stems start: the dependent origin, or the radial start on polar charts.
    pub(crate) base: f64,
}

impl Frame {
    /// Plot positions of mappable points, sorted along the independent axis.
    pub(crate) fn positions(&self, points: &[Point]) -> Vec<PlotPoint> {
        let mut out: Vec<PlotPoint> = points
            .iter()
            .filter_map(|p| {
                self.independent
                    .to_n(&p.independent)
                    .map(|x| PlotPoint::new(x, p.value))
            })
            .collect();
        out.sort_by(|a, b| a.x.total_cmp(&b.x));
        out
    }
}

/// Width and offset assigned to one series for one pass, in independent plot units.
///
/// Proportional series read `offset` as their row start and `width` as its height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Layout {
    pub(crate) width: f64,
    pub(crate) offset: f64,
}

/// What a series needs from the per-pass layout step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LayoutRequest {
    None,
    /// Bars; explicit width and offset are in domain units (band fractions on categorical axes).
    Bar {
        width: Option<f64>,
        offset: Option<f64>,
        default_width: f64,
    },
    Box {
        max_outliers: usize,
    },
    Proportional,
}

/// Selects data for deletion.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Selection {
    Numeric(f64, f64),
    Temporal(DateTime<Utc>, DateTime<Utc>),
    Categories(Vec<String>),
}

impl Selection {
    pub(crate) fn matches(&self, v: &DomainValue) -> bool {
        self.overlaps(v, v)
    }

    /// Whether `[start, end]` touches the selection.
    pub(crate) fn overlaps(&self, start: &DomainValue, end: &DomainValue) -> bool {
        match (self, start, end) {
            (Self::Numeric(lo, hi), DomainValue::Number(a), DomainValue::Number(b)) => {
                a <= hi && b >= lo
            }
            (Self::Temporal(lo, hi), DomainValue::Instant(a), DomainValue::Instant(b)) => {
                a <= hi && b >= lo
            }
            (Self::Categories(list), DomainValue::Category(c), _) => list.contains(c),
            _ => false,
        }
    }
}

/// Per-kind series data.
#[derive(Clone, Debug)]
pub(crate) enum SeriesData {
    Line(LineSeries),
    Scatter(ScatterSeries),
    Bar(BarSeries),
    StackedBar(StackedBarSeries),
    Area(AreaSeries),
    Lollipop(LollipopSeries),
    CandleStick(CandleSeries),
    Box(BoxSeries),
    Proportional(ProportionalSeries),
}

impl SeriesData {
    fn new(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Line => Self::Line(LineSeries::default()),
            SeriesKind::Scatter => Self::Scatter(ScatterSeries::default()),
            SeriesKind::Bar => Self::Bar(BarSeries::default()),
            SeriesKind::StackedBar => Self::StackedBar(StackedBarSeries::default()),
            SeriesKind::Area => Self::Area(AreaSeries::default()),
            SeriesKind::Lollipop => Self::Lollipop(LollipopSeries::default()),
            SeriesKind::CandleStick => Self::CandleStick(CandleSeries::default()),
            SeriesKind::Box => Self::Box(BoxSeries::default()),
            SeriesKind::Proportional => Self::Proportional(ProportionalSeries::default()),
        }
    }

    /// The point list of series that hold plain points.
    fn points_mut(&mut self) -> Option<&mut Vec<Point>> {
        match self {
            Self::Line(s) => Some(&mut s.points),
            Self::Scatter(s) => Some(&mut s.points),
            Self::Bar(s) => Some(&mut s.points),
            Self::Area(s) => Some(&mut s.points),
            Self::Lollipop(s) => Some(&mut s.points),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Line(s) => s.points.len(),
            Self::Scatter(s) => s.points.len(),
            Self::Bar(s) => s.points.len(),
            Self::StackedBar(s) => s.len(),
            Self::Area(s) => s.points.len(),
            Self::Lollipop(s) => s.points.len(),
            Self::CandleStick(s) => s.candles.len(),
            Self::Box(s) => s.boxes.len(),
            Self::Proportional(s) => s.points.len(),
        }
    }

    fn extent(&self) -> Extent {
        match self {
            Self::Line(s) => s.extent(),
            Self::Scatter(s) => s.extent(),
            Self::Bar(s) => s.extent(),
            Self::StackedBar(s) => s.extent(),
            Self::Area(s) => s.extent(),
            Self::Lollipop(s) => s.extent(),
            Self::CandleStick(s) => s.extent(),
            Self::Box(s) => s.extent(),
            Self::Proportional(_) => Extent::default(),
        }
    }

    fn layout_request(&self) -> LayoutRequest {
        match self {
            Self::Bar(s) => s.layout_request(),
            Self::StackedBar(s) => s.layout_request(),
            Self::Box(s) => s.layout_request(),
            Self::Proportional(_) => LayoutRequest::Proportional,
            _ => LayoutRequest::None,
        }
    }

    fn derive(&mut self, frame: &Frame, layout: Layout) -> SeriesGeometry {
        match self {
            Self::Line(s) => s.derive(frame),
            Self::Scatter(s) => s.derive(frame),
            Self::Bar(s) => s.derive(frame, layout),
            Self::StackedBar(s) => s.derive(frame, layout),
            Self::Area(s) => s.derive(frame),
            Self::Lollipop(s) => s.derive(frame),
            Self::CandleStick(s) => s.derive(frame),
            Self::Box(s) => s.derive(frame, layout),
            Self::Proportional(s) => s.derive(frame, layout),
        }
    }

    fn delete(&mut self, selection: &Selection) -> usize {
        fn retain<T>(items: &mut Vec<T>, keep: impl FnMut(&T) -> bool) -> usize {
            let before = items.len();
            items.retain(keep);
            before - items.len()
        }
        match self {
            Self::StackedBar(s) => s.delete(selection),
            Self::CandleStick(s) => retain(&mut s.candles, |c| {
                !selection.overlaps(&c.interval_start, &c.interval_end)
            }),
            Self::Box(s) => retain(&mut s.boxes, |b| !selection.matches(&b.independent)),
            Self::Proportional(s) => s.delete(selection),
            other => other
                .points_mut()
                .map_or(0, |points| {
                    retain(points, |p| !selection.matches(&p.independent))
                }),
        }
    }
}

type PullFn = Arc<dyn Fn() -> Vec<DataPoint> + Send + Sync>;

struct SeriesState {
    data: SeriesData,
    visible: bool,
    chart: Option<Weak<ChartShared>>,
    geometry: SeriesGeometry,
    source: Option<PullFn>,
}

struct SeriesCell {
    name: String,
    kind: SeriesKind,
    state: Mutex<SeriesState>,
}

/// A handle to a series.
///
/// Handles are cheap to clone and may be used from any thread. Operations on one series are
/// serialised by its lock; different series can be fed concurrently.
#[derive(Clone)]
pub struct Series {
    cell: Arc<SeriesCell>,
}

impl core::fmt::Debug for Series {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Series")
            .field("name", &self.cell.name)
            .field("kind", &self.cell.kind)
            .finish_non_exhaustive()
    }
}

impl Series {
    pub(crate) fn new(spec: SeriesSpec, chart: Weak<ChartShared>) -> Self {
        Self {
            cell: Arc::new(SeriesCell {
                state: Mutex::new(SeriesState {
                    data: SeriesData::new(spec.kind),
                    visible: true,
                    chart: Some(chart),
                    geometry: SeriesGeometry::default(),
                    source: None,
                }),
                name: spec.name,
                kind: spec.kind,
            }),
        }
    }

    /// Series name.
    pub fn name(&self) -> &str {
        &self.cell.name
    }

    /// Series kind.
    pub fn kind(&self) -> SeriesKind {
        self.cell.kind
    }

    /// Whether the series still belongs to a live chart.
    pub fn is_attached(&self) -> bool {
        lock(&self.cell.state)
            .chart
            .as_ref()
            .is_some_and(|c| c.strong_count() > 0)
    }

    /// Number of data items (candles, boxes, points; stacked children's points summed).
    pub fn len(&self) -> usize {
        lock(&self.cell.state).data.len()
    }

    /// Whether the series holds no data.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the series is drawn.
    pub fn is_visible(&self) -> bool {
        lock(&self.cell.state).visible
    }

    /// The geometry derived by the last recompute, in plot coordinates.
    pub fn geometry(&self) -> SeriesGeometry {
        lock(&self.cell.state).geometry.clone()
    }

    pub(crate) fn detach(&self) {
        lock(&self.cell.state).chart = None;
    }

    pub(crate) fn extent(&self) -> Extent {
        let state = lock(&self.cell.state);
        if state.visible {
            state.data.extent()
        } else {
            Extent::default()
        }
    }

    pub(crate) fn layout_request(&self) -> LayoutRequest {
        let state = lock(&self.cell.state);
        if state.visible {
            state.data.layout_request()
        } else {
            LayoutRequest::None
        }
    }

    pub(crate) fn derive(&self, frame: &Frame, layout: Layout) {
        let mut state = lock(&self.cell.state);
        let geometry = if state.visible {
            state.data.derive(frame, layout)
        } else {
            SeriesGeometry::default()
        };
        trace!(
            series = %self.cell.name,
            points = geometry.points.len(),
            segments = geometry.segments.len(),
            rects = geometry.rects.len(),
            "derived geometry"
        );
        state.geometry = geometry;
    }

    fn unsupported(&self, operation: &'static str) -> ChartError {
        ChartError::UnsupportedOperation {
            series: self.cell.name.clone(),
            kind: self.cell.kind,
            operation,
        }
    }

    /// Runs `op` under the series lock, then recomputes the chart if it succeeded.
    fn mutate<R>(
        &self,
        op: impl FnOnce(&mut SeriesState, &ChartSpec) -> Result<R>,
    ) -> Result<R> {
        let (chart, out) = {
            let mut state = lock(&self.cell.state);
            let Some(chart) = state.chart.as_ref().and_then(Weak::upgrade) else {
                return Err(ChartError::Detached(self.cell.name.clone()));
            };
            let out = op(&mut state, chart.spec());
            (chart, out)
        };
        match &out {
            Ok(_) => chart.recompute(),
            Err(err) => debug!(series = %self.cell.name, %err, "rejected series update"),
        }
        out
    }

    /// Adds points. Returns how many were inserted; repeated categories are dropped.
    ///
    /// Not available on stacked, candle and box series.
    pub fn add_points(&self, points: Vec<Point>) -> Result<usize> {
        self.mutate(|state, spec| {
            let constraints = spec.constraints();
            let added = match &mut state.data {
                SeriesData::Proportional(s) => s.add(points, &constraints)?,
                data => {
                    let Some(list) = data.points_mut() else {
                        return Err(self.unsupported("add_points"));
                    };
                    crate::data::insert_batch(list, points, &constraints)?
                }
            };
            debug!(series = %self.cell.name, added, "added points");
            Ok(added)
        })
    }

    /// Appends an empty child to a stacked series. Children stack in the order they were added.
    pub fn add_stacked_child(&self, child: &str) -> Result<()> {
        self.mutate(|state, _| {
            let SeriesData::StackedBar(s) = &mut state.data else {
                return Err(self.unsupported("add_stacked_child"));
            };
            s.add_child(child)?;
            debug!(series = %self.cell.name, child, "added stacked child");
            Ok(())
        })
    }

    /// Adds points to a child of a stacked series.
    ///
    /// Fails with [`ChartError::UnknownSeries`] if there is no such child.
    pub fn add_stacked_points(&self, child: &str, points: Vec<Point>) -> Result<usize> {
        self.mutate(|state, spec| {
            let SeriesData::StackedBar(s) = &mut state.data else {
                return Err(self.unsupported("add_stacked_points"));
            };
            let added = s.add(child, points, &spec.constraints())?;
            debug!(series = %self.cell.name, child, added, "added stacked points");
            Ok(added)
        })
    }

    /// Adds candles to a candle-stick series.
    pub fn add_candles(&self, candles: Vec<CandleStick>) -> Result<usize> {
        self.mutate(|state, spec| {
            let SeriesData::CandleStick(s) = &mut state.data else {
                return Err(self.unsupported("add_candles"));
            };
            let added = crate::data::insert_batch(&mut s.candles, candles, &spec.constraints())?;
            debug!(series = %self.cell.name, added, "added candles");
            Ok(added)
        })
    }

    /// Adds boxes to a box series.
    pub fn add_boxes(&self, boxes: Vec<BoxPoint>) -> Result<usize> {
        self.mutate(|state, spec| {
            let SeriesData::Box(s) = &mut state.data else {
                return Err(self.unsupported("add_boxes"));
            };
            let added = crate::data::insert_batch(&mut s.boxes, boxes, &spec.constraints())?;
            debug!(series = %self.cell.name, added, "added boxes");
            Ok(added)
        })
    }

    /// Adds a batch of any data kind; every item must suit this series.
    pub fn add_data(&self, data: Vec<DataPoint>) -> Result<usize> {
        if data.is_empty() {
            return Err(ChartError::EmptyInput);
        }
        let mismatch = || {
            ChartError::constraint(format!(
                "{:?} series `{}` cannot hold this data",
                self.cell.kind, self.cell.name
            ))
        };
        match self.cell.kind {
            SeriesKind::CandleStick => {
                let candles = data
                    .into_iter()
                    .map(|d| match d {
                        DataPoint::CandleStick(c) => Ok(c),
                        _ => Err(mismatch()),
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.add_candles(candles)
            }
            SeriesKind::Box => {
                let boxes = data
                    .into_iter()
                    .map(|d| match d {
                        DataPoint::Box(b) => Ok(b),
                        _ => Err(mismatch()),
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.add_boxes(boxes)
            }
            _ => {
                let points = data
                    .into_iter()
                    .map(|d| match d {
                        DataPoint::Point(p) => Ok(p),
                        _ => Err(mismatch()),
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.add_points(points)
            }
        }
    }

    fn delete(&self, selection: Selection) -> Result<usize> {
        self.mutate(|state, _| {
            let removed = state.data.delete(&selection);
            debug!(series = %self.cell.name, removed, "deleted data");
            Ok(removed)
        })
    }

    /// Deletes data whose independent value lies in `[min, max]`.
    ///
    /// Candles are deleted when their interval overlaps the range.
    pub fn delete_numeric_range(&self, min: f64, max: f64) -> Result<usize> {
        if min > max {
            return Err(ChartError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        self.delete(Selection::Numeric(min, max))
    }

    /// Deletes data whose instant lies in `[min, max]`.
    pub fn delete_temporal_range(&self, min: DateTime<Utc>, max: DateTime<Utc>) -> Result<usize> {
        if min > max {
            return Err(ChartError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        self.delete(Selection::Temporal(min, max))
    }

    /// Deletes data in the given categories.
    pub fn delete_categories<S: AsRef<str>>(&self, categories: &[S]) -> Result<usize> {
        self.delete(Selection::Categories(
            categories.iter().map(|c| c.as_ref().to_owned()).collect(),
        ))
    }

    /// Shows or hides the whole series.
    pub fn set_visible(&self, visible: bool) -> Result<()> {
        self.mutate(|state, _| {
            state.visible = visible;
            Ok(())
        })
    }

    /// Shows or hides one slice of a proportional series.
    pub fn set_point_visible(&self, category: &str, visible: bool) -> Result<()> {
        self.mutate(|state, _| match &mut state.data {
            SeriesData::Proportional(s) => s.set_point_visible(category, visible),
            _ => Err(self.unsupported("set_point_visible")),
        })
    }

    /// Shows or hides one child of a stacked series.
    pub fn set_child_visible(&self, child: &str, visible: bool) -> Result<()> {
        self.mutate(|state, _| match &mut state.data {
            SeriesData::StackedBar(s) => s.set_child_visible(child, visible),
            _ => Err(self.unsupported("set_child_visible")),
        })
    }

    /// Shows or hides the outline of an area series or the stems of a lollipop series.
    pub fn set_line_visible(&self, visible: bool) -> Result<()> {
        self.mutate(|state, _| {
            match &mut state.data {
                SeriesData::Area(s) => s.line_visible = visible,
                SeriesData::Lollipop(s) => s.line_visible = visible,
                _ => return Err(self.unsupported("set_line_visible")),
            }
            Ok(())
        })
    }

    /// Sets the bar width of a bar or stacked series.
    ///
    /// In domain units (seconds on temporal charts), or as a fraction of a category band.
    pub fn set_bar_width(&self, width: f64) -> Result<()> {
        if !(width.is_finite() && width >= 0.0) {
            return Err(ChartError::constraint(format!(
                "bar width {width} must be finite and non-negative"
            )));
        }
        self.mutate(|state, _| {
            match &mut state.data {
                SeriesData::Bar(s) => s.width = Some(width),
                SeriesData::StackedBar(s) => s.width = Some(width),
                _ => return Err(self.unsupported("set_bar_width")),
            }
            Ok(())
        })
    }

    /// Sets the offset of bars from their independent position, in the units of
    /// [`Series::set_bar_width`].
    pub fn set_bar_offset(&self, offset: f64) -> Result<()> {
        if !offset.is_finite() {
            return Err(ChartError::constraint(format!(
                "bar offset {offset} is not finite"
            )));
        }
        self.mutate(|state, _| {
            match &mut state.data {
                SeriesData::Bar(s) => s.offset = Some(offset),
                SeriesData::StackedBar(s) => s.offset = Some(offset),
                _ => return Err(self.unsupported("set_bar_offset")),
            }
            Ok(())
        })
    }

    /// Sets the value an area series fills down to. By default it fills to the dependent origin.
    pub fn set_base(&self, base: Option<f64>) -> Result<()> {
        if base.is_some_and(|b| !b.is_finite()) {
            return Err(ChartError::constraint("area base is not finite"));
        }
        self.mutate(|state, _| match &mut state.data {
            SeriesData::Area(s) => {
                s.base = base;
                Ok(())
            }
            _ => Err(self.unsupported("set_base")),
        })
    }

    /// Registers the producer polled by [`Series::pull`], replacing any previous one.
    pub fn set_pull(&self, producer: impl Fn() -> Vec<DataPoint> + Send + Sync + 'static) {
        lock(&self.cell.state).source = Some(Arc::new(producer));
    }

    /// Adds whatever the registered producer yields.
    ///
    /// The producer runs without any lock held. An empty batch (or no producer) adds nothing
    /// and does not recompute.
    pub fn pull(&self) -> Result<usize> {
        let source = {
            let state = lock(&self.cell.state);
            if state.chart.as_ref().and_then(Weak::upgrade).is_none() {
                return Err(ChartError::Detached(self.cell.name.clone()));
            }
            state.source.clone()
        };
        let Some(source) = source else {
            return Ok(0);
        };
        let batch = source();
        if batch.is_empty() {
            return Ok(0);
        }
        self.add_data(batch)
    }

    /// Whether a plot coordinate lies in the filled region of an area series.
    ///
    /// Always `false` for other kinds and for hidden series.
    pub fn fill_contains(&self, x: f64, y: f64) -> bool {
        let state = lock(&self.cell.state);
        match &state.data {
            SeriesData::Area(s) if state.visible => s.fill_contains(x, y),
            _ => false,
        }
    }

    /// Sum of the visible values of a proportional series.
    pub fn total(&self) -> Option<f64> {
        match &lock(&self.cell.state).data {
            SeriesData::Proportional(s) => Some(s.total()),
            _ => None,
        }
    }

    /// Per-position stack heights of a stacked series, in first-seen order.
    pub fn stack_totals(&self) -> Vec<(DomainValue, f64)> {
        match &lock(&self.cell.state).data {
            SeriesData::StackedBar(s) => s.totals(),
            _ => Vec::new(),
        }
    }

    /// Child names of a stacked series, in stacking order.
    pub fn children(&self) -> Vec<String> {
        match &lock(&self.cell.state).data {
            SeriesData::StackedBar(s) => s.child_names(),
            _ => Vec::new(),
        }
    }
}
