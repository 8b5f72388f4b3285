// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `plotline_charts`.
//!
//! Run with `RUST_LOG=debug` to see each recompute pass.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use chrono::{TimeDelta, TimeZone, Utc};
use kurbo::Size;
use plotline_charts::{
    AxisId, BoxPoint, CandleStick, Chart, ChartError, ChartSpec, DataPoint, IndependentKind,
    Point, SeriesSpec, Shape, VisibleGeometry,
};
use plotline_ticks::PolarDirection;

fn main() -> Result<(), ChartError> {
    env_logger::init();

    line_and_area()?;
    grouped_bars()?;
    candles()?;
    boxes()?;
    pie()?;
    concurrent_feeds()?;
    Ok(())
}

fn line_and_area() -> Result<(), ChartError> {
    let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Numeric));
    let passes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&passes);
    chart.on_data_change(move || {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let line = chart.add_series(SeriesSpec::line("signal"))?;
    let area = chart.add_series(SeriesSpec::area("envelope"))?;
    let wave: Vec<Point> = (0..=40)
        .map(|i| {
            let x = f64::from(i) * 0.25;
            Point::new(x, x.sin() * 10.0)
        })
        .collect();
    line.add_points(wave.clone())?;
    area.add_points(wave.iter().map(|p| Point::new(p.independent.clone(), p.value.abs())).collect())?;

    println!("line/area: {} recompute passes", passes.load(Ordering::Relaxed));
    print_ticks(&chart);
    print_geometry(&chart.visible_geometry());
    let plotted = chart.domain_to_plot(2.0, 1.0);
    println!("  area covers (2, 1): {}", area.fill_contains(2.0, 1.0));
    println!("  (2, 1) -> {plotted:?} -> {:?}", chart.plot_to_domain(plotted));
    Ok(())
}

fn grouped_bars() -> Result<(), ChartError> {
    let chart = Chart::new(
        ChartSpec::cartesian(IndependentKind::Categorical).with_size(Size::new(600.0, 300.0)),
    );
    let sales = chart.add_series(SeriesSpec::bar("sales"))?;
    sales.add_points(vec![
        Point::new("north", 12.0),
        Point::new("south", 7.5),
        Point::new("west", 9.0),
    ])?;

    let stack = chart.add_series(SeriesSpec::stacked_bar("costs"))?;
    stack.add_stacked_child("staff")?;
    stack.add_stacked_child("rent")?;
    stack.add_stacked_points("staff", vec![Point::new("north", 4.0), Point::new("south", 3.0)])?;
    stack.add_stacked_points("rent", vec![Point::new("north", 2.0), Point::new("west", 5.0)])?;

    // A repeated name is rejected and leaves the chart unchanged.
    if let Err(err) = chart.add_series(SeriesSpec::line("sales")) {
        println!("grouped bars: {err}");
    }
    println!("grouped bars: stack totals {:?}", stack.stack_totals());
    print_ticks(&chart);
    print_geometry(&chart.visible_geometry());
    Ok(())
}

fn candles() -> Result<(), ChartError> {
    let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Temporal));
    let series = chart.add_series(SeriesSpec::candle_stick("ohlc"))?;
    let day = TimeDelta::days(1);
    let Some(start) = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).single() else {
        return Ok(());
    };
    let prices = [
        (100.0, 104.0, 98.0, 105.0),
        (104.0, 101.0, 100.0, 106.0),
        (101.0, 101.0, 99.5, 102.0),
        (101.0, 108.0, 101.0, 109.0),
    ];
    let candles = prices
        .iter()
        .zip(0..)
        .map(|(&(open, close, low, high), i)| {
            let t = start + day * i;
            CandleStick::new(t, t + day, open, close, low, high)
        })
        .collect();
    series.add_candles(candles)?;

    println!("candles:");
    print_ticks(&chart);
    let axis = chart.axis(AxisId::Independent);
    println!("  tooltip for start: {}", axis.tooltip(&start.into()));
    for r in series.geometry().rects {
        println!("  body {:?} ({:?})", r.rect, r.trend);
    }
    Ok(())
}

fn boxes() -> Result<(), ChartError> {
    let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Categorical));
    let series = chart.add_series(SeriesSpec::box_plot("latency"))?;
    series.add_boxes(vec![
        BoxPoint::new("api", [18.0, 19.3, 21.5, 23.4, 25.1]).with_outliers([31.0, 40.0]),
        BoxPoint::new("db", [5.0, 6.2, 7.0, 9.1, 12.0]),
    ])?;
    println!("boxes:");
    print_geometry(&chart.visible_geometry());
    Ok(())
}

fn pie() -> Result<(), ChartError> {
    let chart = Chart::new(
        ChartSpec::polar(IndependentKind::Proportional)
            .with_rotation(-core::f64::consts::FRAC_PI_2)
            .with_direction(PolarDirection::Clockwise),
    );
    let inner = chart.add_series(SeriesSpec::proportional("2024"))?;
    let outer = chart.add_series(SeriesSpec::proportional("2025"))?;
    inner.add_points(vec![Point::new("a", 3.0), Point::new("b", 1.0), Point::new("c", 4.0)])?;
    outer.add_points(vec![Point::new("a", 2.0), Point::new("b", 2.0)])?;
    inner.set_point_visible("c", false)?;

    println!("pie: inner total {:?}", inner.total());
    print_geometry(&chart.visible_geometry());
    Ok(())
}

fn concurrent_feeds() -> Result<(), ChartError> {
    let chart = Chart::new(ChartSpec::cartesian(IndependentKind::Numeric));
    let sensors = ["left", "right"]
        .into_iter()
        .map(|name| chart.add_series(SeriesSpec::scatter(name)))
        .collect::<Result<Vec<_>, _>>()?;
    for (k, sensor) in sensors.iter().enumerate() {
        let next = Arc::new(AtomicUsize::new(0));
        sensor.set_pull(move || {
            let i = next.fetch_add(1, Ordering::Relaxed);
            #[allow(clippy::cast_possible_truncation, reason = "demo indices are small")]
            let x = i as u32;
            vec![DataPoint::from(Point::new(f64::from(x), (k + 1) as f64 * f64::from(x)))]
        });
    }

    thread::scope(|scope| {
        for sensor in &sensors {
            scope.spawn(move || {
                for _ in 0..25 {
                    if let Err(err) = sensor.pull() {
                        println!("  {}: {err}", sensor.name());
                        return;
                    }
                }
            });
        }
    });

    let removed = chart.remove_series("right")?;
    println!(
        "concurrent feeds: left {} points, right detached: {}",
        sensors[0].len(),
        !removed.is_attached()
    );
    if let Err(err) = removed.pull() {
        println!("  {err}");
    }
    print_ticks(&chart);
    Ok(())
}

fn print_ticks(chart: &Chart) {
    for id in [AxisId::Independent, AxisId::Dependent] {
        let labels: Vec<_> = chart.ticks(id).into_iter().map(|t| t.label).collect();
        println!("  {id:?} ticks: {}", labels.join(", "));
    }
}

fn print_geometry(geometry: &VisibleGeometry) {
    for p in &geometry.primitives {
        let series = &geometry.series[p.series];
        match &p.shape {
            Shape::Point(pt) => println!("  [{}] {series} point {pt:?}", p.z_index),
            Shape::Segment(l) => println!("  [{}] {series} segment {:?} -> {:?}", p.z_index, l.p0, l.p1),
            Shape::Rect(r) => println!("  [{}] {series} rect {:?}", p.z_index, r.rect),
            Shape::Sector(s) => println!(
                "  [{}] {series} sector start {:.3} sweep {:.3} r {:.1}..{:.1}",
                p.z_index, s.start_angle, s.sweep_angle, s.inner_radius, s.outer_radius
            ),
            Shape::Fill(path) => println!("  [{}] {series} fill with {} elements", p.z_index, path.elements().len()),
        }
    }
}
