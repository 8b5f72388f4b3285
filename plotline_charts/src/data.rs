// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data points accepted by series.

use core::cmp::Ordering;
use core::f64::consts::TAU;

use plotline_ticks::{DomainKind, DomainValue};

use crate::error::{ChartError, Result};

/// A `(independent, value)` pair.
///
/// Used by line, scatter, bar, stacked bar, area, lollipop and proportional series.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// Position along the independent axis.
    pub independent: DomainValue,
    /// Dependent value.
    pub value: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(independent: impl Into<DomainValue>, value: f64) -> Self {
        Self {
            independent: independent.into(),
            value,
        }
    }
}

/// Direction of a candle: close relative to open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trend {
    /// `close > open`.
    Rising,
    /// `close < open`.
    Falling,
    /// `close == open`, and every non-candle shape.
    #[default]
    Flat,
}

/// One open/high/low/close interval.
#[derive(Clone, Debug, PartialEq)]
pub struct CandleStick {
    /// Start of the interval (numeric or temporal).
    pub interval_start: DomainValue,
    /// End of the interval, same kind as the start.
    pub interval_end: DomainValue,
    /// Opening value.
    pub open: f64,
    /// Closing value.
    pub close: f64,
    /// Lowest value.
    pub low: f64,
    /// Highest value.
    pub high: f64,
}

impl CandleStick {
    /// Creates a candle.
    pub fn new(
        interval_start: impl Into<DomainValue>,
        interval_end: impl Into<DomainValue>,
        open: f64,
        close: f64,
        low: f64,
        high: f64,
    ) -> Self {
        Self {
            interval_start: interval_start.into(),
            interval_end: interval_end.into(),
            open,
            close,
            low,
            high,
        }
    }

    /// Whether the candle closed above, below or at its open.
    pub fn trend(&self) -> Trend {
        match self.close.total_cmp(&self.open) {
            Ordering::Greater => Trend::Rising,
            Ordering::Less => Trend::Falling,
            Ordering::Equal => Trend::Flat,
        }
    }

    fn validate(&self, constraints: &Constraints) -> Result<()> {
        let kind = self.interval_start.kind();
        if kind == DomainKind::Categorical || kind != constraints.independent {
            return Err(ChartError::constraint(format!(
                "candle interval must be {:?}, got {kind:?}",
                constraints.independent
            )));
        }
        if self.interval_end.kind() != kind {
            return Err(ChartError::constraint(
                "candle interval start and end differ in kind",
            ));
        }
        if compare_independent(&self.interval_start, &self.interval_end) == Ordering::Greater {
            return Err(ChartError::constraint(format!(
                "candle interval ends ({}) before it starts ({})",
                self.interval_end, self.interval_start
            )));
        }
        if let Some(n) = self.interval_start.as_number() {
            finite(n, "candle interval start")?;
        }
        if let Some(n) = self.interval_end.as_number() {
            finite(n, "candle interval end")?;
        }
        for (v, what) in [
            (self.open, "open"),
            (self.close, "close"),
            (self.low, "low"),
            (self.high, "high"),
        ] {
            finite(v, what)?;
        }
        if self.low > self.high {
            return Err(ChartError::constraint(format!(
                "candle low {} is above high {}",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// A five-number summary plus outliers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPoint {
    /// Position along the independent axis.
    pub independent: DomainValue,
    /// Lower whisker.
    pub minimum: f64,
    /// First quartile.
    pub first_quartile: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub third_quartile: f64,
    /// Upper whisker.
    pub maximum: f64,
    /// Values drawn as individual points.
    pub outliers: Vec<f64>,
}

impl BoxPoint {
    /// Creates a box from `[minimum, q1, median, q3, maximum]`.
    pub fn new(independent: impl Into<DomainValue>, summary: [f64; 5]) -> Self {
        let [minimum, first_quartile, median, third_quartile, maximum] = summary;
        Self {
            independent: independent.into(),
            minimum,
            first_quartile,
            median,
            third_quartile,
            maximum,
            outliers: Vec::new(),
        }
    }

    /// Sets the outliers.
    pub fn with_outliers(mut self, outliers: impl Into<Vec<f64>>) -> Self {
        self.outliers = outliers.into();
        self
    }

    fn summary(&self) -> [f64; 5] {
        [
            self.minimum,
            self.first_quartile,
            self.median,
            self.third_quartile,
            self.maximum,
        ]
    }

    fn validate(&self, constraints: &Constraints) -> Result<()> {
        check_independent(&self.independent, constraints)?;
        let summary = self.summary();
        for v in summary.iter().chain(&self.outliers) {
            finite(*v, "box value")?;
        }
        if summary.windows(2).any(|w| w[0] > w[1]) {
            return Err(ChartError::constraint(format!(
                "box summary at {} is not ordered: {summary:?}",
                self.independent
            )));
        }
        Ok(())
    }
}

/// Any data point, for series fed by a pull callback.
#[derive(Clone, Debug, PartialEq)]
pub enum DataPoint {
    /// See [`Point`].
    Point(Point),
    /// See [`CandleStick`].
    CandleStick(CandleStick),
    /// See [`BoxPoint`].
    Box(BoxPoint),
}

impl From<Point> for DataPoint {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<CandleStick> for DataPoint {
    fn from(c: CandleStick) -> Self {
        Self::CandleStick(c)
    }
}

impl From<BoxPoint> for DataPoint {
    fn from(b: BoxPoint) -> Self {
        Self::Box(b)
    }
}

/// What a chart accepts from its series' data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Constraints {
    /// Required kind of every independent value.
    pub(crate) independent: DomainKind,
    /// Numeric independent values are angles in `[0, 2π]`.
    pub(crate) angular: bool,
    /// Dependent values must be `>= 0`.
    pub(crate) non_negative: bool,
}

fn finite(v: f64, what: &str) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ChartError::constraint(format!("{what} is not finite: {v}")))
    }
}

fn check_independent(v: &DomainValue, constraints: &Constraints) -> Result<()> {
    if v.kind() != constraints.independent {
        return Err(ChartError::constraint(format!(
            "expected a {:?} independent value, got {v}",
            constraints.independent
        )));
    }
    if let Some(n) = v.as_number() {
        finite(n, "independent value")?;
        if constraints.angular && !(0.0..=TAU).contains(&n) {
            return Err(ChartError::constraint(format!(
                "angle {n} is outside [0, 2π]"
            )));
        }
    }
    Ok(())
}

/// Data that sits at one place on the independent axis.
pub(crate) trait Datum: Clone {
    /// Sort/dedupe key.
    fn independent(&self) -> &DomainValue;
    /// Rejects the datum without side effects.
    fn validate(&self, constraints: &Constraints) -> Result<()>;
}

impl Datum for Point {
    fn independent(&self) -> &DomainValue {
        &self.independent
    }

    fn validate(&self, constraints: &Constraints) -> Result<()> {
        check_independent(&self.independent, constraints)?;
        finite(self.value, "value")?;
        if constraints.non_negative && self.value < 0.0 {
            return Err(ChartError::constraint(format!(
                "value {} at {} is negative",
                self.value, self.independent
            )));
        }
        Ok(())
    }
}

impl Datum for CandleStick {
    fn independent(&self) -> &DomainValue {
        &self.interval_start
    }

    fn validate(&self, constraints: &Constraints) -> Result<()> {
        Self::validate(self, constraints)
    }
}

impl Datum for BoxPoint {
    fn independent(&self) -> &DomainValue {
        &self.independent
    }

    fn validate(&self, constraints: &Constraints) -> Result<()> {
        Self::validate(self, constraints)
    }
}

/// Orders numeric and temporal values; categories compare equal so insertion order is kept.
pub(crate) fn compare_independent(a: &DomainValue, b: &DomainValue) -> Ordering {
    match (a, b) {
        (DomainValue::Number(a), DomainValue::Number(b)) => a.total_cmp(b),
        (DomainValue::Instant(a), DomainValue::Instant(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Validates the whole batch, then merges it into `data`.
///
/// Numeric and temporal data stays sorted by independent value. Categorical data keeps
/// insertion order and silently drops categories that are already present. Returns how many
/// items were inserted.
pub(crate) fn insert_batch<T: Datum>(
    data: &mut Vec<T>,
    batch: Vec<T>,
    constraints: &Constraints,
) -> Result<usize> {
    if batch.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    for item in &batch {
        item.validate(constraints)?;
    }
    if constraints.independent == DomainKind::Categorical {
        let mut seen: hashbrown::HashSet<String> = data
            .iter()
            .filter_map(|d| d.independent().as_category().map(String::from))
            .collect();
        let before = data.len();
        for item in batch {
            let fresh = item
                .independent()
                .as_category()
                .is_some_and(|c| seen.insert(String::from(c)));
            if fresh {
                data.push(item);
            }
        }
        return Ok(data.len() - before);
    }
    let added = batch.len();
    data.extend(batch);
    data.sort_by(|a, b| compare_independent(a.independent(), b.independent()));
    Ok(added)
}

/// Key used to accumulate values that share an independent position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum IndependentKey {
    Number(u64),
    Instant(i64, u32),
    Category(String),
}

impl From<&DomainValue> for IndependentKey {
    fn from(v: &DomainValue) -> Self {
        match v {
            // `-0.0` and `0.0` stack together.
            DomainValue::Number(n) => Self::Number((n + 0.0).to_bits()),
            DomainValue::Instant(t) => Self::Instant(t.timestamp(), t.timestamp_subsec_nanos()),
            DomainValue::Category(c) => Self::Category(c.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMERIC: Constraints = Constraints {
        independent: DomainKind::Numeric,
        angular: false,
        non_negative: false,
    };

    const CATEGORICAL: Constraints = Constraints {
        independent: DomainKind::Categorical,
        angular: false,
        non_negative: false,
    };

    #[test]
    fn numeric_batches_are_merged_in_order() {
        let mut data = vec![Point::new(1.0, 1.0), Point::new(5.0, 5.0)];
        let added = insert_batch(
            &mut data,
            vec![Point::new(3.0, 3.0), Point::new(0.0, 0.0)],
            &NUMERIC,
        )
        .unwrap();
        assert_eq!(added, 2);
        let xs: Vec<_> = data
            .iter()
            .map(|p| p.independent.as_number().unwrap())
            .collect();
        assert_eq!(xs, [0.0, 1.0, 3.0, 5.0]);
    }

    #[test]
    fn duplicate_categories_are_dropped() {
        let mut data = vec![Point::new("a", 1.0)];
        let added = insert_batch(
            &mut data,
            vec![
                Point::new("b", 2.0),
                Point::new("a", 9.0),
                Point::new("b", 3.0),
            ],
            &CATEGORICAL,
        )
        .unwrap();
        assert_eq!(added, 1);
        assert_eq!(data, [Point::new("a", 1.0), Point::new("b", 2.0)]);
    }

    #[test]
    fn a_bad_item_rejects_the_whole_batch() {
        let mut data = vec![Point::new(1.0, 1.0)];
        let err = insert_batch(
            &mut data,
            vec![Point::new(2.0, 2.0), Point::new("x", 3.0)],
            &NUMERIC,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::DomainConstraintViolation(_)));
        assert_eq!(data.len(), 1);
        assert_eq!(
            insert_batch::<Point>(&mut data, vec![], &NUMERIC),
            Err(ChartError::EmptyInput)
        );
    }

    #[test]
    fn polar_constraints() {
        let polar = Constraints {
            independent: DomainKind::Numeric,
            angular: true,
            non_negative: true,
        };
        assert!(Point::new(1.0, 2.0).validate(&polar).is_ok());
        assert!(Point::new(7.0, 2.0).validate(&polar).is_err());
        assert!(Point::new(1.0, -2.0).validate(&polar).is_err());
    }

    #[test]
    fn candle_validation_and_trend() {
        let c = CandleStick::new(0.0, 1.0, 2.0, 3.0, 1.0, 4.0);
        assert!(c.validate(&NUMERIC).is_ok());
        assert_eq!(c.trend(), Trend::Rising);
        assert_eq!(
            CandleStick::new(0.0, 1.0, 3.0, 2.0, 1.0, 4.0).trend(),
            Trend::Falling
        );
        assert!(CandleStick::new(0.0, 1.0, 2.0, 3.0, 5.0, 4.0)
            .validate(&NUMERIC)
            .is_err());
        assert!(CandleStick::new(2.0, 1.0, 2.0, 3.0, 1.0, 4.0)
            .validate(&NUMERIC)
            .is_err());
    }

    #[test]
    fn box_summary_must_be_ordered() {
        assert!(BoxPoint::new(1.0, [0.0, 1.0, 2.0, 3.0, 4.0])
            .validate(&NUMERIC)
            .is_ok());
        assert!(BoxPoint::new(1.0, [0.0, 2.0, 1.0, 3.0, 4.0])
            .validate(&NUMERIC)
            .is_err());
    }

    #[test]
    fn signed_zero_shares_a_stack_key() {
        assert_eq!(
            IndependentKey::from(&DomainValue::Number(-0.0)),
            IndependentKey::from(&DomainValue::Number(0.0))
        );
    }
}
