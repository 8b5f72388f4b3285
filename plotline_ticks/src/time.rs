// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar-aware tick generation for temporal axes.
//!
//! Ticks land on unit boundaries (start of a year, month, day, hour, ...). The unit is the
//! coarsest one that still yields more than half the label budget, and consecutive ticks are a
//! whole number of units apart.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Utc};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::domain::Tick;
use crate::numeric::max_tick_count;

/// Default minimum plot-space per temporal label.
pub const DEFAULT_TEMPORAL_LABEL_SPACE: f64 = 90.0;

/// Calendar and clock granularities, coarsest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    /// Calendar years.
    Year,
    /// Calendar months.
    Month,
    /// Days (UTC).
    Day,
    /// Hours.
    Hour,
    /// Minutes.
    Minute,
    /// Seconds.
    Second,
    /// Milliseconds.
    Millisecond,
}

impl TimeUnit {
    /// All units, coarsest first.
    pub const ALL: [Self; 7] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Nominal length in seconds, used to count units across a range.
    pub fn nominal_seconds(self) -> f64 {
        match self {
            Self::Year => 365.0 * 86_400.0,
            Self::Month => 30.0 * 86_400.0,
            Self::Day => 86_400.0,
            Self::Hour => 3_600.0,
            Self::Minute => 60.0,
            Self::Second => 1.0,
            Self::Millisecond => 0.001,
        }
    }

    /// `strftime` pattern for tick labels.
    pub fn label_format(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::Month => "%Y-%m",
            Self::Day => "%Y-%m-%d",
            Self::Hour => "%m-%d %H:%M",
            Self::Minute => "%H:%M",
            Self::Second => "%H:%M:%S",
            Self::Millisecond => "%S%.3f",
        }
    }

    /// `strftime` pattern for tooltips, one granularity finer than the label.
    pub fn tooltip_format(self) -> &'static str {
        match self {
            Self::Year => "%Y-%m",
            Self::Month => "%Y-%m-%d",
            Self::Day => "%Y-%m-%d %H:%M",
            Self::Hour | Self::Minute => "%H:%M:%S",
            Self::Second => "%H:%M:%S%.3f",
            Self::Millisecond => "%S%.6f",
        }
    }

    fn fixed_millis(self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Day => Some(86_400_000),
            Self::Hour => Some(3_600_000),
            Self::Minute => Some(60_000),
            Self::Second => Some(1_000),
            Self::Millisecond => Some(1),
        }
    }

    /// How far `min` may sit past the unit boundary and still be labelled explicitly.
    fn leading_tolerance(self) -> TimeDelta {
        match self {
            Self::Year => TimeDelta::days(7),
            Self::Month => TimeDelta::days(1),
            Self::Day => TimeDelta::hours(1),
            Self::Hour => TimeDelta::minutes(1),
            Self::Minute => TimeDelta::seconds(1),
            Self::Second => TimeDelta::milliseconds(1),
            Self::Millisecond => TimeDelta::zero(),
        }
    }

    /// Returns the start of the unit containing `t`.
    pub fn floor(self, t: DateTime<Utc>) -> DateTime<Utc> {
        let start_of = |year: i32, month: u32| {
            NaiveDate::from_ymd_opt(year, month, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d.and_utc())
        };
        let floored = match self.fixed_millis() {
            Some(unit) => {
                let ms = t.timestamp_millis();
                DateTime::from_timestamp_millis(ms.div_euclid(unit) * unit)
            }
            None if self == Self::Year => start_of(t.year(), 1),
            None => start_of(t.year(), t.month()),
        };
        floored.unwrap_or(t)
    }

    /// Moves `t` forward by `n` units. Returns `None` on overflow.
    pub fn advance(self, t: DateTime<Utc>, n: u32) -> Option<DateTime<Utc>> {
        match self.fixed_millis() {
            Some(unit) => t.checked_add_signed(TimeDelta::try_milliseconds(unit * i64::from(n))?),
            None if self == Self::Year => t.checked_add_months(Months::new(n.checked_mul(12)?)),
            None => t.checked_add_months(Months::new(n)),
        }
    }
}

/// Length of `[min, max]` in (fractional) seconds.
pub fn span_seconds(min: DateTime<Utc>, max: DateTime<Utc>) -> f64 {
    let delta = max - min;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

/// Picks the coarsest unit whose count over the span exceeds half the label budget.
pub fn select_unit(span_seconds: f64, max_count: usize) -> TimeUnit {
    let half = max_count.max(1) as f64 / 2.0;
    TimeUnit::ALL
        .into_iter()
        .find(|unit| span_seconds / unit.nominal_seconds() > half)
        .unwrap_or(TimeUnit::Millisecond)
}

/// Formats an instant with a `strftime` pattern.
pub fn format_instant(t: DateTime<Utc>, pattern: &str) -> String {
    t.format(pattern).to_string()
}

/// Ticks produced by [`temporal_ticks`].
#[derive(Clone, Debug, PartialEq)]
pub struct TemporalTicks {
    /// Ordered ticks within `[min, max]`.
    pub ticks: Vec<Tick>,
    /// Selected granularity.
    pub unit: TimeUnit,
    /// Number of units between consecutive boundary ticks.
    pub step: u32,
}

/// Temporal tick generator parameterised by label spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalTickGenerator {
    /// Minimum plot-space each label needs.
    pub min_space_per_label: f64,
}

impl Default for TemporalTickGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPORAL_LABEL_SPACE)
    }
}

impl TemporalTickGenerator {
    /// Creates a generator with the given label spacing.
    pub fn new(min_space_per_label: f64) -> Self {
        Self {
            min_space_per_label,
        }
    }

    /// Generates ticks for `[min, max]` given the plot-space available along the axis.
    pub fn generate(
        &self,
        available_space: f64,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
        support_line: bool,
    ) -> TemporalTicks {
        let count = max_tick_count(available_space, self.min_space_per_label);
        temporal_ticks(count, min, max, support_line)
    }
}

/// Generates boundary-aligned ticks for `[min, max]`.
///
/// The result always contains at least one tick.
pub fn temporal_ticks(
    max_count: usize,
    mut min: DateTime<Utc>,
    mut max: DateTime<Utc>,
    support_line: bool,
) -> TemporalTicks {
    let max_count = max_count.max(1);
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = span_seconds(min, max);
    let unit = select_unit(span, max_count);
    let format = unit.label_format();
    let tick = |t: DateTime<Utc>| {
        Tick::new(t, format_instant(t, format)).with_support_line(support_line)
    };

    if min == max {
        return TemporalTicks {
            ticks: alloc::vec![tick(min)],
            unit,
            step: 1,
        };
    }

    let count = span / unit.nominal_seconds();
    let step = {
        let whole = (count / max_count as f64)
            .floor()
            .clamp(0.0, f64::from(u32::MAX - 1));
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the u32 range")]
        {
            whole as u32 + 1
        }
    };

    let anchor = unit.floor(min);
    let mut ticks = Vec::new();
    if anchor < min && min - anchor <= unit.leading_tolerance() {
        ticks.push(tick(min));
    }

    let mut t = anchor;
    while t <= max && ticks.len() <= max_count.saturating_mul(4) {
        if t >= min {
            ticks.push(tick(t));
        }
        match unit.advance(t, step) {
            Some(next) if next > t => t = next,
            _ => break,
        }
    }
    if ticks.is_empty() {
        ticks.push(tick(min));
    }

    TemporalTicks { ticks, unit, step }
}
