// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeDelta, Utc};
use kurbo::Size;
use plotline_ticks::{DomainValue, numeric_ticks, temporal_ticks};
use proptest::prelude::*;

use crate::{AxisId, AxisRange, Chart, ChartSpec, IndependentKind, Point, SeriesSpec};

fn instant(seconds: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(seconds)
}

proptest! {
    #[test]
    fn numeric_ticks_are_bounded_and_increasing(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        max_count in 1usize..20,
    ) {
        let max = min + span;
        let ticks = numeric_ticks(max_count, min, max, false);
        prop_assert!(!ticks.ticks.is_empty());
        prop_assert!(ticks.ticks.len() <= max_count + 1);
        let positions: Vec<f64> = ticks
            .ticks
            .iter()
            .filter_map(|t| t.position.as_number())
            .collect();
        prop_assert_eq!(positions.len(), ticks.ticks.len());
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let slack = span * 5e-3;
        prop_assert!(positions[0] >= min - slack);
        prop_assert!(positions[positions.len() - 1] <= max + slack);
    }

    #[test]
    fn numeric_ticks_near_the_float_limit_terminate(
        min in -f64::MAX..-1.0e300,
        max in 1.0e300f64..f64::MAX,
        max_count in 1usize..20,
    ) {
        let ticks = numeric_ticks(max_count, min, max, false);
        prop_assert!(!ticks.ticks.is_empty());
        prop_assert!(ticks.ticks.len() <= max_count + 1);
        let positions: Vec<f64> = ticks
            .ticks
            .iter()
            .filter_map(|t| t.position.as_number())
            .collect();
        prop_assert!(positions.iter().all(|p| p.is_finite()));
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn temporal_ticks_stay_in_range(
        start in 0i64..2_000_000_000,
        span in 1i64..400_000_000,
        max_count in 1usize..12,
    ) {
        let (min, max) = (instant(start), instant(start + span));
        let ticks = temporal_ticks(max_count, min, max, false);
        let instants: Vec<_> = ticks
            .ticks
            .iter()
            .filter_map(|t| t.position.as_instant())
            .collect();
        prop_assert!(!instants.is_empty());
        for pair in instants.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(instants.iter().all(|t| *t >= min && *t <= max));
    }

    #[test]
    fn geometry_depends_only_on_state(
        points in proptest::collection::vec((-1000.0f64..1000.0, -50.0f64..50.0), 1..40),
        width in 50.0f64..800.0,
    ) {
        let chart = Chart::new(
            ChartSpec::cartesian(IndependentKind::Numeric).with_size(Size::new(width, 300.0)),
        );
        let line = chart.add_series(SeriesSpec::line("line")).unwrap();
        let bars = chart.add_series(SeriesSpec::bar("bars")).unwrap();
        let batch: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        line.add_points(batch.clone()).unwrap();
        bars.add_points(batch).unwrap();
        let before = chart.visible_geometry();

        chart.resize(Size::new(width, 300.0));
        prop_assert_eq!(&chart.visible_geometry(), &before);

        line.add_points(vec![Point::new(5000.0, 1.0e4)]).unwrap();
        prop_assert_ne!(&chart.visible_geometry(), &before);
        line.delete_numeric_range(5000.0, 5000.0).unwrap();
        prop_assert_eq!(&chart.visible_geometry(), &before);
    }

    #[test]
    fn cartesian_projection_inverts(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
    ) {
        let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Numeric));
        chart
            .set_range(AxisId::Independent, AxisRange::numeric(-100.0, 100.0).unwrap())
            .unwrap();
        chart
            .set_range(AxisId::Dependent, AxisRange::numeric(-100.0, 100.0).unwrap())
            .unwrap();
        let (x2, y2) = chart.plot_to_domain(chart.domain_to_plot(x, y));
        prop_assert!((x - x2).abs() < 1e-9);
        prop_assert!((y - y2).abs() < 1e-9);
    }

    #[test]
    fn polar_projection_inverts(
        angle in 0.0f64..6.28,
        radius in 0.5f64..50.0,
        rotation in -3.0f64..3.0,
    ) {
        let chart = Chart::new(ChartSpec::polar(IndependentKind::Numeric).with_rotation(rotation));
        chart
            .set_range(AxisId::Dependent, AxisRange::numeric(0.0, 50.0).unwrap())
            .unwrap();
        let (a, r) = chart.plot_to_domain(chart.domain_to_plot(angle, radius));
        prop_assert!((a - angle).abs() < 1e-6, "{} -> {}", angle, a);
        prop_assert!((r - radius).abs() < 1e-6, "{} -> {}", radius, r);
    }

    #[test]
    fn proportional_total_counts_visible_slices(
        values in proptest::collection::vec((0.1f64..100.0, any::<bool>()), 1..12),
    ) {
        let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Proportional));
        let shares = chart.add_series(SeriesSpec::proportional("shares")).unwrap();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, (v, _))| Point::new(format!("c{i}"), *v))
            .collect();
        shares.add_points(points).unwrap();
        for (i, (_, shown)) in values.iter().enumerate() {
            if !shown {
                shares.set_point_visible(&format!("c{i}"), false).unwrap();
            }
        }

        let expected: f64 = values.iter().filter(|(_, shown)| *shown).map(|(v, _)| v).sum();
        let total = shares.total().unwrap();
        prop_assert!((total - expected).abs() < 1e-9);

        let rects = shares.geometry().rects;
        prop_assert_eq!(rects.len(), values.iter().filter(|(_, shown)| *shown).count());
        let covered: f64 = rects.iter().map(|r| r.rect.width()).sum();
        if rects.is_empty() {
            prop_assert_eq!(covered, 0.0);
        } else {
            prop_assert!((covered - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn stacks_reach_the_sum_of_their_children(
        children in proptest::collection::vec(
            proptest::collection::vec(0.0f64..100.0, 3),
            1..5,
        ),
    ) {
        let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Categorical));
        let stack = chart.add_series(SeriesSpec::stacked_bar("stack")).unwrap();
        for (i, values) in children.iter().enumerate() {
            let child = format!("child{i}");
            stack.add_stacked_child(&child).unwrap();
            let points = ["a", "b", "c"]
                .iter()
                .zip(values)
                .map(|(c, v)| Point::new(*c, *v))
                .collect();
            stack.add_stacked_points(&child, points).unwrap();
        }

        let totals = stack.stack_totals();
        prop_assert_eq!(totals.len(), 3);
        for (k, (category, total)) in totals.iter().enumerate() {
            let expected: f64 = children.iter().map(|values| values[k]).sum();
            prop_assert_eq!(category, &DomainValue::from(["a", "b", "c"][k]));
            prop_assert!((total - expected).abs() < 1e-9);
        }

        let highest = totals.iter().map(|(_, t)| *t).fold(0.0, f64::max);
        if highest > 0.0 {
            let range = chart.axis(AxisId::Dependent).range().clone();
            let AxisRange::Numeric { min, max } = range else {
                return Err(TestCaseError::fail("dependent axis is not numeric"));
            };
            prop_assert_eq!(min, 0.0);
            prop_assert!((max - highest).abs() < 1e-9);
        }
    }
}
