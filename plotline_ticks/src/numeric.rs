// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order-of-magnitude tick generation for numeric axes.
//!
//! Steps are always `1`, `2` or `5` times a power of ten. The magnitude of the chosen step
//! also drives label precision, so `0.25` steps are printed with two decimals while
//! `20` steps are printed as integers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::domain::Tick;

/// Fraction of one magnitude unit tolerated past `max` before the last tick is dropped.
pub const ROUNDING_SLACK: f64 = 0.001;

/// Default minimum plot-space per numeric label.
pub const DEFAULT_NUMERIC_LABEL_SPACE: f64 = 50.0;

const MIN_MAGNITUDE: i32 = -12;
const MAX_MAGNITUDE: i32 = 308;

/// Number of labels that fit into `available_space`, never less than one.
pub fn max_tick_count(available_space: f64, min_space_per_label: f64) -> usize {
    if !available_space.is_finite() || !min_space_per_label.is_finite() {
        return 1;
    }
    if min_space_per_label <= 0.0 {
        return 1;
    }
    let n = (available_space / min_space_per_label).floor();
    if n < 1.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, reason = "capped at 10k before the cast")]
    {
        n.min(10_000.0) as usize
    }
}

/// Decimal places used for labels at a given order of magnitude.
pub fn label_precision(magnitude: i32) -> usize {
    usize::try_from(1 - magnitude).unwrap_or(0)
}

/// Formats a number with a fixed number of decimals, without printing `-0`.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut v = value;
    let half_unit = 0.5 / 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    if v.abs() < half_unit {
        v = 0.0;
    }
    alloc::format!("{v:.precision$}")
}

/// Ticks produced by [`numeric_ticks`].
#[derive(Clone, Debug, PartialEq)]
pub struct NumericTicks {
    /// Ordered ticks within `[min, max]`.
    pub ticks: Vec<Tick>,
    /// Order of magnitude of the step.
    pub magnitude: i32,
    /// Distance between consecutive ticks (`0` when only one tick was produced).
    pub step: f64,
}

impl NumericTicks {
    /// Decimal places used for labels.
    pub fn precision(&self) -> usize {
        label_precision(self.magnitude)
    }
}

/// Numeric tick generator parameterised by label spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericTickGenerator {
    /// Minimum plot-space each label needs.
    pub min_space_per_label: f64,
}

impl Default for NumericTickGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NUMERIC_LABEL_SPACE)
    }
}

impl NumericTickGenerator {
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
        min: f64,
        max: f64,
        support_line: bool,
    ) -> NumericTicks {
        let count = max_tick_count(available_space, self.min_space_per_label);
        numeric_ticks(count, min, max, support_line)
    }
}

/// Generates "nice" ticks for `[min, max]` with at most `max_count + 1` entries.
///
/// The result always contains at least one tick for a finite range.
pub fn numeric_ticks(max_count: usize, mut min: f64, mut max: f64, support_line: bool) -> NumericTicks {
    let max_count = max_count.max(1);
    if !min.is_finite() || !max.is_finite() {
        return NumericTicks {
            ticks: Vec::new(),
            magnitude: 0,
            step: 0.0,
        };
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    // A span that overflows has no usable step.
    if span == 0.0 || !span.is_finite() {
        return single_tick(min, support_line);
    }

    let limit = max_count as f64;
    let mut magnitude = 0;
    while magnitude < MAX_MAGNITUDE && 10_f64.powi(magnitude) < span {
        magnitude += 1;
    }
    while magnitude > MIN_MAGNITUDE && span / (5.0 * 10_f64.powi(magnitude - 1)) < limit {
        magnitude -= 1;
    }

    let unit = 10_f64.powi(magnitude);
    let step = [1.0, 2.0, 5.0]
        .into_iter()
        .map(|f| f * unit)
        .find(|s| span / s <= limit)
        .unwrap_or(5.0 * unit);
    if !step.is_finite() {
        return single_tick(min, support_line);
    }

    let mut offset = min - (min / step).floor() * step;
    if offset > step / 1.25 {
        offset -= step;
    }
    let start = min - offset;
    let slack = ROUNDING_SLACK * unit;
    let precision = label_precision(magnitude);

    // At most one position falls before `min`, and `span / step <= max_count`.
    let mut ticks = Vec::new();
    for i in (0_u32..).take(max_count + 2) {
        let pos = start + f64::from(i) * step;
        if !pos.is_finite() || pos > max + slack || ticks.len() > max_count {
            break;
        }
        if pos >= min - slack {
            ticks.push(number_tick(pos, precision, support_line));
        }
    }
    if ticks.is_empty() {
        ticks.push(number_tick(min, precision, support_line));
    }

    NumericTicks {
        ticks,
        magnitude,
        step,
    }
}

fn single_tick(value: f64, support_line: bool) -> NumericTicks {
    NumericTicks {
        ticks: alloc::vec![number_tick(value, label_precision(0), support_line)],
        magnitude: 0,
        step: 0.0,
    }
}

/// Ticks for an angular axis: the eight multiples of π/4 in `[0, 2π)`.
pub fn angular_ticks(support_line: bool) -> NumericTicks {
    const LABELS: [&str; 8] = ["0", "π/4", "π/2", "3π/4", "π", "5π/4", "3π/2", "7π/4"];
    let step = core::f64::consts::FRAC_PI_4;
    let ticks = LABELS
        .iter()
        .zip(0_u8..)
        .map(|(label, i)| Tick::new(f64::from(i) * step, *label).with_support_line(support_line))
        .collect();
    NumericTicks {
        ticks,
        magnitude: 0,
        step,
    }
}

fn number_tick(pos: f64, precision: usize, support_line: bool) -> Tick {
    Tick::new(pos, format_number(pos, precision)).with_support_line(support_line)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn values(t: &NumericTicks) -> Vec<f64> {
        t.ticks
            .iter()
            .map(|t| t.position.as_number().unwrap())
            .collect()
    }

    #[test]
    fn zero_to_hundred_in_three_hundred_units_steps_by_twenty() {
        let ticks = NumericTickGenerator::new(50.0).generate(300.0, 0.0, 100.0, false);
        assert_eq!(ticks.step, 20.0);
        assert_eq!(values(&ticks), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(ticks.ticks[1].label, "20");
    }

    #[test]
    fn max_tick_count_is_at_least_one() {
        assert_eq!(max_tick_count(10.0, 50.0), 1);
        assert_eq!(max_tick_count(300.0, 50.0), 6);
        assert_eq!(max_tick_count(f64::NAN, 50.0), 1);
    }

    #[test]
    fn small_ranges_get_decimal_labels() {
        let ticks = numeric_ticks(5, 0.0, 1.0, true);
        assert_eq!(ticks.step, 0.2);
        assert_eq!(ticks.precision(), 2);
        assert_eq!(ticks.ticks[1].label, "0.20");
        assert!(ticks.ticks.iter().all(|t| t.support_line));
    }

    #[test]
    fn first_tick_is_aligned_to_the_step() {
        let ticks = numeric_ticks(6, 3.0, 97.0, false);
        assert_eq!(ticks.step, 20.0);
        assert_eq!(values(&ticks), [20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn near_multiple_minimum_keeps_its_tick() {
        // 0.3 / 0.1 rounds below 3, which would otherwise drop the leading tick.
        let ticks = numeric_ticks(5, 0.3, 0.7, false);
        let v = values(&ticks);
        assert!((v[0] - 0.3).abs() < 1e-12, "{v:?}");
        assert_eq!(ticks.ticks[0].label, "0.30");
    }

    #[test]
    fn degenerate_range_yields_one_tick() {
        let ticks = numeric_ticks(6, 4.0, 4.0, false);
        assert_eq!(values(&ticks), [4.0]);
    }

    #[test]
    fn overflowing_span_yields_one_tick() {
        let ticks = numeric_ticks(6, -1.7e308, 1.7e308, false);
        assert_eq!(values(&ticks), [-1.7e308]);

        let ticks = numeric_ticks(6, -f64::MAX, f64::MAX, true);
        assert_eq!(ticks.ticks.len(), 1);
    }

    #[test]
    fn near_limit_bounds_stay_finite() {
        let ticks = numeric_ticks(6, -8.0e307, 8.0e307, false);
        let positions = values(&ticks);
        assert!(!positions.is_empty() && positions.len() <= 7);
        assert!(positions.iter().all(|p| p.is_finite()));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn negative_zero_is_not_printed() {
        assert_eq!(format_number(-1e-17, 2), "0.00");
        assert_eq!(format_number(-1.5, 1), "-1.5");
    }

    #[test]
    fn angular_ticks_are_quarter_pi_multiples() {
        let ticks = angular_ticks(false);
        assert_eq!(ticks.ticks.len(), 8);
        let last = ticks.ticks[7].position.as_number().unwrap();
        assert!((last - 7.0 * core::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert_eq!(ticks.ticks[4].label, "π");
    }
}
