// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data extents used to derive automatic axis ranges.

use chrono::{DateTime, TimeDelta, Utc};
use plotline_ticks::DomainValue;

use crate::axis::{AxisRange, widen_instant};

/// Extent of data along the independent axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum IndependentExtent {
    #[default]
    Empty,
    Numeric(f64, f64),
    Temporal(DateTime<Utc>, DateTime<Utc>),
    /// Distinct categories in first-seen order.
    Categories(Vec<String>),
}

impl IndependentExtent {
    pub(crate) fn of<'a>(values: impl IntoIterator<Item = &'a DomainValue>) -> Self {
        let mut out = Self::Empty;
        for v in values {
            out.include(v);
        }
        out
    }

    pub(crate) fn include(&mut self, v: &DomainValue) {
        match (&mut *self, v) {
            (Self::Empty, DomainValue::Number(x)) => *self = Self::Numeric(*x, *x),
            (Self::Empty, DomainValue::Instant(t)) => *self = Self::Temporal(*t, *t),
            (Self::Empty, DomainValue::Category(c)) => *self = Self::Categories(vec![c.clone()]),
            (Self::Numeric(lo, hi), DomainValue::Number(x)) => {
                *lo = lo.min(*x);
                *hi = hi.max(*x);
            }
            (Self::Temporal(lo, hi), DomainValue::Instant(t)) => {
                *lo = (*lo).min(*t);
                *hi = (*hi).max(*t);
            }
            (Self::Categories(list), DomainValue::Category(c)) => {
                if !list.contains(c) {
                    list.push(c.clone());
                }
            }
            _ => {}
        }
    }

    pub(crate) fn union(&mut self, other: Self) {
        match other {
            Self::Empty => {}
            Self::Numeric(lo, hi) => {
                self.include(&DomainValue::Number(lo));
                self.include(&DomainValue::Number(hi));
            }
            Self::Temporal(lo, hi) => {
                self.include(&DomainValue::Instant(lo));
                self.include(&DomainValue::Instant(hi));
            }
            Self::Categories(list) => {
                for c in list {
                    self.include(&DomainValue::Category(c));
                }
            }
        }
    }

    /// Grows a continuous extent by `half` domain units (seconds for time) on each side.
    pub(crate) fn padded(self, half: f64) -> Self {
        match self {
            Self::Numeric(lo, hi) => Self::Numeric(lo - half, hi + half),
            Self::Temporal(lo, hi) => {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "half widths are far below i64::MAX milliseconds"
                )]
                let Some(d) = TimeDelta::try_milliseconds((half * 1e3) as i64) else {
                    return Self::Temporal(lo, hi);
                };
                Self::Temporal(
                    lo.checked_sub_signed(d).unwrap_or(lo),
                    hi.checked_add_signed(d).unwrap_or(hi),
                )
            }
            other => other,
        }
    }

    /// The automatic axis range for this extent. Degenerate extents are widened by one unit.
    pub(crate) fn to_range(&self) -> Option<AxisRange> {
        match self {
            Self::Empty => None,
            Self::Numeric(lo, hi) if lo == hi => Some(AxisRange::Numeric {
                min: *lo,
                max: hi + 1.0,
            }),
            Self::Numeric(lo, hi) => Some(AxisRange::Numeric { min: *lo, max: *hi }),
            Self::Temporal(lo, hi) if lo == hi => Some(AxisRange::Temporal {
                min: *lo,
                max: widen_instant(*hi),
            }),
            Self::Temporal(lo, hi) => Some(AxisRange::Temporal { min: *lo, max: *hi }),
            Self::Categories(list) => Some(AxisRange::Categorical(list.clone())),
        }
    }
}

/// `[min, max]` of some values, if any.
pub(crate) fn span_of(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| union_span(acc, Some((v, v))))
}

pub(crate) fn union_span(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((a0, a1)), Some((b0, b1))) => Some((a0.min(b0), a1.max(b1))),
        (a, None) => a,
        (None, b) => b,
    }
}

/// What one series contributes to the automatic ranges.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Extent {
    pub(crate) independent: IndependentExtent,
    pub(crate) dependent: Option<(f64, f64)>,
}

impl Extent {
    pub(crate) fn union(&mut self, other: Self) {
        self.independent.union(other.independent);
        self.dependent = union_span(self.dependent, other.dependent);
    }
}
