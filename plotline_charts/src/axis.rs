// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis state: range, origin, ticks and the mapping from domain values to plot coordinates.
//!
//! Every axis maps its domain onto a numeric *plot coordinate* interval (`n_range`):
//! - numeric axes use their own range,
//! - temporal and categorical axes use a fixed `[0, 100]` (`[0, 2π]` when angular).
//!
//! Categories sit in equal bands across that interval.

use core::f64::consts::TAU;

use chrono::{DateTime, TimeDelta, Utc};
use plotline_ticks::{
    DomainKind, DomainValue, NumericTickGenerator, TemporalTickGenerator, Tick,
    TimeUnit, angular_ticks, band_center, band_size, categorical_ticks, format_instant,
    format_number, span_seconds,
};

use crate::chart_spec::TickSpacing;
use crate::error::{ChartError, Result};

/// Default numeric range, and the plot interval of temporal and categorical axes.
pub const DEFAULT_PLOT_INTERVAL: (f64, f64) = (0.0, 100.0);

/// Selects one of a chart's two axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    /// The axis of independent values (x, or the angle on polar charts).
    Independent,
    /// The axis of dependent values (y, or the radius on polar charts).
    Dependent,
}

/// Where an axis sits in its plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// A Cartesian axis.
    Linear,
    /// The angular axis of a polar plane.
    Angular,
    /// The radial axis of a polar plane.
    Radial,
}

/// The interval an axis covers, in domain units.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisRange {
    /// `[min, max]` of plain numbers.
    Numeric {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// `[min, max]` of instants.
    Temporal {
        /// Lower bound.
        min: DateTime<Utc>,
        /// Upper bound.
        max: DateTime<Utc>,
    },
    /// An ordered list of distinct categories.
    Categorical(Vec<String>),
}

impl AxisRange {
    /// A numeric range. Fails with [`ChartError::InvalidRange`] if `min > max`.
    pub fn numeric(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::constraint(format!(
                "range [{min}, {max}] is not finite"
            )));
        }
        if min > max {
            return Err(ChartError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(Self::Numeric { min, max })
    }

    /// A temporal range. Fails with [`ChartError::InvalidRange`] if `min > max`.
    pub fn temporal(min: DateTime<Utc>, max: DateTime<Utc>) -> Result<Self> {
        if min > max {
            return Err(ChartError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(Self::Temporal { min, max })
    }

    /// A categorical range. Repeated labels keep their first position.
    pub fn categorical<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = hashbrown::HashSet::new();
        let mut list = Vec::new();
        for c in categories {
            let c = c.into();
            if seen.insert(c.clone()) {
                list.push(c);
            }
        }
        Self::Categorical(list)
    }

    /// The kind of values this range covers.
    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Numeric { .. } => DomainKind::Numeric,
            Self::Temporal { .. } => DomainKind::Temporal,
            Self::Categorical(_) => DomainKind::Categorical,
        }
    }

    /// Whether `value` lies inside the range (bounds included).
    pub fn contains(&self, value: &DomainValue) -> bool {
        match (self, value) {
            (Self::Numeric { min, max }, DomainValue::Number(x)) => {
                let slack = (max - min).abs() * 1e-9;
                *x >= min - slack && *x <= max + slack
            }
            (Self::Temporal { min, max }, DomainValue::Instant(t)) => t >= min && t <= max,
            (Self::Categorical(list), DomainValue::Category(c)) => list.contains(c),
            _ => false,
        }
    }

    pub(crate) fn default_for(kind: DomainKind) -> Self {
        match kind {
            DomainKind::Numeric => Self::Numeric {
                min: DEFAULT_PLOT_INTERVAL.0,
                max: DEFAULT_PLOT_INTERVAL.1,
            },
            DomainKind::Temporal => {
                let min = DateTime::<Utc>::UNIX_EPOCH;
                Self::Temporal {
                    min,
                    max: widen_instant(min),
                }
            }
            DomainKind::Categorical => Self::Categorical(Vec::new()),
        }
    }
}

/// `t + 1s`, or `t` at the end of representable time.
pub(crate) fn widen_instant(t: DateTime<Utc>) -> DateTime<Utc> {
    TimeDelta::try_seconds(1)
        .and_then(|d| t.checked_add_signed(d))
        .unwrap_or(t)
}

/// A tick requested through [`crate::Chart::set_manual_ticks`].
#[derive(Clone, Debug, PartialEq)]
pub struct ManualTick {
    /// Tick position in domain units.
    pub value: DomainValue,
    /// Whether to draw a support line across the plot.
    pub support_line: bool,
}

impl ManualTick {
    /// A tick without a support line.
    pub fn new(value: impl Into<DomainValue>) -> Self {
        Self {
            value: value.into(),
            support_line: false,
        }
    }

    /// Sets whether the tick draws a support line.
    pub fn with_support_line(mut self, support_line: bool) -> Self {
        self.support_line = support_line;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum LabelFormat {
    Number(usize),
    Time(TimeUnit),
    Category,
}

/// One axis of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    role: AxisRole,
    range: AxisRange,
    n_range: (f64, f64),
    auto_range: bool,
    origin: f64,
    pinned_origin: Option<DomainValue>,
    auto_ticks: bool,
    support_lines: bool,
    manual: Vec<ManualTick>,
    ticks: Vec<Tick>,
    format: LabelFormat,
}

impl Axis {
    pub(crate) fn new(role: AxisRole, kind: DomainKind, fixed: Option<(f64, f64)>) -> Self {
        let (range, auto_range) = match fixed {
            Some((min, max)) => (AxisRange::Numeric { min, max }, false),
            None => (AxisRange::default_for(kind), true),
        };
        let mut axis = Self {
            role,
            range,
            n_range: DEFAULT_PLOT_INTERVAL,
            auto_range,
            origin: 0.0,
            pinned_origin: None,
            auto_ticks: true,
            support_lines: false,
            manual: Vec::new(),
            ticks: Vec::new(),
            format: LabelFormat::Category,
        };
        axis.update_n_range();
        axis.apply_auto_origin();
        axis
    }

    /// Role of this axis in its plane.
    pub fn role(&self) -> AxisRole {
        self.role
    }

    /// Kind of values on this axis.
    pub fn kind(&self) -> DomainKind {
        self.range.kind()
    }

    /// Current range, in domain units.
    pub fn range(&self) -> &AxisRange {
        &self.range
    }

    /// Current plot coordinate interval.
    pub fn n_range(&self) -> (f64, f64) {
        self.n_range
    }

    /// Whether the range follows the data.
    pub fn is_auto_range(&self) -> bool {
        self.auto_range
    }

    /// Where the other axis crosses this one, in plot coordinates.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Whether the origin is derived from the range.
    pub fn is_auto_origin(&self) -> bool {
        self.pinned_origin.is_none()
    }

    /// Whether ticks are generated from the range.
    pub fn is_auto_ticks(&self) -> bool {
        self.auto_ticks
    }

    /// Categories on a categorical axis, in order. Empty otherwise.
    pub fn categories(&self) -> &[String] {
        match &self.range {
            AxisRange::Categorical(list) => list,
            _ => &[],
        }
    }

    /// Width of one category band in plot coordinates, `0` for non-categorical axes.
    pub fn band_size(&self) -> f64 {
        let (n0, n1) = self.n_range;
        band_size(n0, n1, self.categories().len())
    }

    /// Current ticks that fall within the range.
    pub fn ticks(&self) -> Vec<Tick> {
        self.ticks
            .iter()
            .filter(|t| self.range.contains(&t.position))
            .cloned()
            .collect()
    }

    pub(crate) fn set_range(&mut self, range: AxisRange) -> Result<()> {
        if range.kind() != self.kind() {
            return Err(ChartError::constraint(format!(
                "cannot set a {:?} range on a {:?} axis",
                range.kind(),
                self.kind()
            )));
        }
        if let (AxisRole::Angular, AxisRange::Numeric { min, max }) = (self.role, &range) {
            // Angular data is confined to one turn, so the range is too.
            if *min < 0.0 || *max > TAU {
                return Err(ChartError::constraint(format!(
                    "angular range [{min}, {max}] leaves [0, 2π]"
                )));
            }
        }
        self.range = range;
        self.auto_range = false;
        self.update_n_range();
        Ok(())
    }

    pub(crate) fn set_auto_range(&mut self) {
        self.auto_range = true;
    }

    /// Replaces the range with one derived from data. Ignored while the range is pinned.
    pub(crate) fn apply_auto_range(&mut self, range: AxisRange) {
        if self.auto_range && range.kind() == self.kind() {
            self.range = range;
            self.update_n_range();
        }
    }

    fn update_n_range(&mut self) {
        self.n_range = match (&self.range, self.role) {
            (AxisRange::Numeric { min, max }, _) => (*min, *max),
            (_, AxisRole::Angular) => (0.0, TAU),
            _ => DEFAULT_PLOT_INTERVAL,
        };
    }

    pub(crate) fn set_origin(&mut self, value: DomainValue) -> Result<()> {
        if self.to_n(&value).is_none() {
            return Err(ChartError::constraint(format!(
                "origin {value} is not a {:?} value on this axis",
                self.kind()
            )));
        }
        self.pinned_origin = Some(value);
        self.apply_auto_origin();
        Ok(())
    }

    pub(crate) fn set_auto_origin(&mut self) {
        self.pinned_origin = None;
        self.apply_auto_origin();
    }

    /// Recomputes the origin from the range, or re-maps a pinned origin.
    pub(crate) fn apply_auto_origin(&mut self) {
        let (n0, n1) = self.n_range;
        if let Some(pinned) = &self.pinned_origin {
            self.origin = self.to_n(pinned).unwrap_or(n0);
            return;
        }
        self.origin = match self.role {
            AxisRole::Angular => n0,
            AxisRole::Radial => n1,
            AxisRole::Linear => match self.range {
                AxisRange::Numeric { min, max } if min <= 0.0 && max >= 0.0 => 0.0,
                _ => n0,
            },
        };
    }

    pub(crate) fn set_manual_ticks(&mut self, ticks: Vec<ManualTick>) -> Result<()> {
        if let Some(bad) = ticks.iter().find(|t| t.value.kind() != self.kind()) {
            return Err(ChartError::constraint(format!(
                "tick {} is not a {:?} value",
                bad.value,
                self.kind()
            )));
        }
        self.manual = ticks;
        self.auto_ticks = false;
        Ok(())
    }

    pub(crate) fn set_auto_ticks(&mut self, support_line: bool) {
        self.auto_ticks = true;
        self.support_lines = support_line;
        self.manual.clear();
    }

    /// Regenerates ticks for `space` plot units along the axis.
    pub(crate) fn regenerate_ticks(&mut self, space: f64, spacing: &TickSpacing) {
        let (n0, n1) = self.n_range;
        let support = self.support_lines;
        let generated = match &self.range {
            AxisRange::Numeric { min, max } => {
                let ticks = if self.role == AxisRole::Angular {
                    angular_ticks(support)
                } else {
                    NumericTickGenerator::new(spacing.numeric).generate(space, *min, *max, support)
                };
                self.format = LabelFormat::Number(ticks.precision());
                ticks.ticks
            }
            AxisRange::Temporal { min, max } => {
                let ticks =
                    TemporalTickGenerator::new(spacing.temporal).generate(space, *min, *max, support);
                self.format = LabelFormat::Time(ticks.unit);
                ticks.ticks
            }
            AxisRange::Categorical(list) => {
                self.format = LabelFormat::Category;
                categorical_ticks(list, n0, n1, support)
            }
        };
        self.ticks = if self.auto_ticks {
            generated
        } else {
            self.manual
                .iter()
                .map(|m| self.manual_tick(m))
                .collect()
        };
    }

    fn manual_tick(&self, m: &ManualTick) -> Tick {
        let tick = Tick::new(m.value.clone(), self.label(&m.value)).with_support_line(m.support_line);
        match (&m.value, &self.range) {
            (DomainValue::Category(c), AxisRange::Categorical(list)) => {
                let (n0, n1) = self.n_range;
                let band = self.band_size();
                let i = list.iter().position(|x| x == c).unwrap_or(0);
                tick.with_label_position(band_center(n0, n1, list.len(), i))
                    .with_line_position(n0 + band * i as f64)
            }
            _ => tick,
        }
    }

    /// Tick label text for `value` at the current tick precision or time unit.
    pub fn label(&self, value: &DomainValue) -> String {
        match (value, self.format) {
            (DomainValue::Number(x), LabelFormat::Number(p)) => format_number(*x, p),
            (DomainValue::Instant(t), LabelFormat::Time(unit)) => {
                format_instant(*t, unit.label_format())
            }
            _ => value.to_string(),
        }
    }

    /// Tooltip text for `value`: one step finer than the tick labels.
    pub fn tooltip(&self, value: &DomainValue) -> String {
        match (value, self.format) {
            (DomainValue::Number(x), LabelFormat::Number(p)) => format_number(*x, p + 1),
            (DomainValue::Instant(t), LabelFormat::Time(unit)) => {
                format_instant(*t, unit.tooltip_format())
            }
            _ => value.to_string(),
        }
    }

    /// Maps a domain value to a plot coordinate.
    ///
    /// Returns `None` for values of the wrong kind and for unknown categories.
    pub fn to_n(&self, value: &DomainValue) -> Option<f64> {
        match (value, &self.range) {
            (DomainValue::Number(x), AxisRange::Numeric { .. }) => Some(*x),
            (DomainValue::Instant(t), AxisRange::Temporal { .. }) => Some(self.t_to_n(*t)),
            (DomainValue::Category(c), AxisRange::Categorical(list)) => {
                let (n0, n1) = self.n_range;
                list.iter()
                    .position(|x| x == c)
                    .map(|i| band_center(n0, n1, list.len(), i))
            }
            _ => None,
        }
    }

    /// Plot coordinate of a category's band centre, or the interval start if it is unknown.
    pub fn c_to_n(&self, category: &str) -> f64 {
        let (n0, n1) = self.n_range;
        let list = self.categories();
        list.iter()
            .position(|x| x == category)
            .map_or(n0, |i| band_center(n0, n1, list.len(), i))
    }

    /// Plot coordinate of an instant, or the interval start for a degenerate range.
    pub fn t_to_n(&self, t: DateTime<Utc>) -> f64 {
        let (n0, n1) = self.n_range;
        match self.range {
            AxisRange::Temporal { min, max } => {
                let span = span_seconds(min, max);
                if span <= 0.0 {
                    n0
                } else {
                    n0 + (n1 - n0) * span_seconds(min, t) / span
                }
            }
            _ => n0,
        }
    }

    /// Converts a length in domain units (seconds for time) into plot units.
    ///
    /// On categorical axes, `extent` is a fraction of one band.
    pub(crate) fn extent_to_n(&self, extent: f64) -> f64 {
        let (n0, n1) = self.n_range;
        match self.range {
            AxisRange::Numeric { .. } => extent,
            AxisRange::Temporal { min, max } => {
                let span = span_seconds(min, max);
                if span <= 0.0 {
                    0.0
                } else {
                    extent * (n1 - n0) / span
                }
            }
            AxisRange::Categorical(_) => extent * self.band_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(min: f64, max: f64) -> Axis {
        let mut axis = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        axis.apply_auto_range(AxisRange::numeric(min, max).unwrap());
        axis.apply_auto_origin();
        axis
    }

    fn at(h: u32) -> DateTime<Utc> {
        DateTime::from_timestamp(i64::from(h) * 3600, 0).unwrap()
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(matches!(
            AxisRange::numeric(10.0, 0.0),
            Err(ChartError::InvalidRange { .. })
        ));
        assert!(AxisRange::temporal(at(5), at(1)).is_err());
        let mut axis = numeric(0.0, 1.0);
        assert!(axis.set_range(AxisRange::categorical(["a"])).is_err());
        assert!(axis.is_auto_range());
    }

    #[test]
    fn auto_origin_follows_zero() {
        assert_eq!(numeric(-10.0, 10.0).origin(), 0.0);
        assert_eq!(numeric(5.0, 10.0).origin(), 5.0);
        let mut radial = Axis::new(AxisRole::Radial, DomainKind::Numeric, None);
        radial.apply_auto_range(AxisRange::numeric(0.0, 8.0).unwrap());
        radial.apply_auto_origin();
        assert_eq!(radial.origin(), 8.0);
    }

    #[test]
    fn pinned_origin_survives_range_changes() {
        let mut axis = Axis::new(AxisRole::Linear, DomainKind::Temporal, None);
        axis.apply_auto_range(AxisRange::temporal(at(0), at(10)).unwrap());
        axis.set_origin(at(5).into()).unwrap();
        assert_eq!(axis.origin(), 50.0);
        axis.apply_auto_range(AxisRange::temporal(at(0), at(20)).unwrap());
        axis.apply_auto_origin();
        assert_eq!(axis.origin(), 25.0);
        assert!(axis.set_origin(DomainValue::Number(1.0)).is_err());
        axis.set_auto_origin();
        assert_eq!(axis.origin(), 0.0);
    }

    #[test]
    fn categories_map_to_band_centres() {
        let mut axis = Axis::new(AxisRole::Linear, DomainKind::Categorical, None);
        axis.apply_auto_range(AxisRange::categorical(["a", "b", "c", "d", "b"]));
        assert_eq!(axis.categories().len(), 4);
        assert_eq!(axis.c_to_n("b"), 37.5);
        assert_eq!(axis.c_to_n("zzz"), 0.0);
        assert_eq!(axis.to_n(&"zzz".into()), None);
        assert_eq!(axis.band_size(), 25.0);
        assert_eq!(axis.extent_to_n(0.5), 12.5);
    }

    #[test]
    fn degenerate_temporal_range_maps_to_start() {
        let mut axis = Axis::new(AxisRole::Linear, DomainKind::Temporal, None);
        axis.set_range(AxisRange::temporal(at(3), at(3)).unwrap())
            .unwrap();
        assert_eq!(axis.t_to_n(at(7)), 0.0);
        assert_eq!(axis.extent_to_n(3600.0), 0.0);
    }

    #[test]
    fn ticks_are_filtered_to_the_range() {
        let mut axis = numeric(0.0, 100.0);
        axis.set_manual_ticks(vec![
            ManualTick::new(10.0).with_support_line(true),
            ManualTick::new(250.0),
        ])
        .unwrap();
        axis.regenerate_ticks(300.0, &TickSpacing::default());
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].label, "10");
        assert!(ticks[0].support_line);

        axis.set_auto_ticks(true);
        axis.regenerate_ticks(300.0, &TickSpacing::default());
        let labels: Vec<_> = axis.ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["0", "20", "40", "60", "80", "100"]);
        assert_eq!(axis.tooltip(&DomainValue::Number(12.345)), "12.3");
    }

    #[test]
    fn manual_ticks_must_match_the_axis_kind() {
        let mut axis = numeric(0.0, 1.0);
        assert!(axis.set_manual_ticks(vec![ManualTick::new("a")]).is_err());
        assert!(axis.is_auto_ticks());
    }

    #[test]
    fn angular_axes_use_fixed_ticks() {
        let mut axis = Axis::new(AxisRole::Angular, DomainKind::Numeric, Some((0.0, TAU)));
        axis.regenerate_ticks(1000.0, &TickSpacing::default());
        assert_eq!(axis.ticks().len(), 8);
        assert_eq!(axis.origin(), 0.0);
        assert!(!axis.is_auto_range());
    }

    #[test]
    fn angular_ranges_must_fit_one_turn() {
        let mut axis = Axis::new(AxisRole::Angular, DomainKind::Numeric, Some((0.0, TAU)));
        assert!(axis.set_range(AxisRange::numeric(0.0, 10.0).unwrap()).is_err());
        assert_eq!(axis.range(), &AxisRange::Numeric { min: 0.0, max: TAU });

        axis.set_range(AxisRange::numeric(0.0, TAU / 2.0).unwrap()).unwrap();
        assert_eq!(axis.n_range(), (0.0, TAU / 2.0));

        let mut linear = numeric(0.0, 1.0);
        assert!(linear.set_range(AxisRange::numeric(0.0, 10.0).unwrap()).is_ok());
    }
}
