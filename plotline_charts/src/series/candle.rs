// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candle-stick series.

use kurbo::{Point as PlotPoint, Rect};

use super::Frame;
use crate::data::CandleStick;
use crate::extent::{Extent, IndependentExtent, span_of};
use crate::geometry::SeriesGeometry;

#[derive(Clone, Debug, Default)]
pub(crate) struct CandleSeries {
    pub(crate) candles: Vec<CandleStick>,
}

impl CandleSeries {
    pub(super) fn extent(&self) -> Extent {
        Extent {
            independent: IndependentExtent::of(
                self.candles
                    .iter()
                    .flat_map(|c| [&c.interval_start, &c.interval_end]),
            ),
            dependent: span_of(self.candles.iter().flat_map(|c| [c.low, c.high])),
        }
    }

    /// A body rect from open to close across the interval, and a wick from low to high at its
    /// middle.
    pub(super) fn derive(&self, frame: &Frame) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        for c in &self.candles {
            let (Some(x0), Some(x1)) = (
                frame.independent.to_n(&c.interval_start),
                frame.independent.to_n(&c.interval_end),
            ) else {
                continue;
            };
            let mid = 0.5 * (x0 + x1);
            out.segment(
                PlotPoint::new(mid, c.low),
                PlotPoint::new(mid, c.high),
                frame.window,
            );
            let body = Rect::new(x0, c.open.min(c.close), x1, c.open.max(c.close));
            out.rect(body, c.trend(), frame.window);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisRange, AxisRole};
    use crate::data::Trend;
    use plotline_ticks::DomainKind;

    #[test]
    fn bodies_carry_the_trend() {
        let mut independent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        independent
            .set_range(AxisRange::numeric(0.0, 4.0).unwrap())
            .unwrap();
        let dependent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        let frame = Frame {
            independent,
            dependent,
            window: Rect::new(0.0, 0.0, 4.0, 100.0),
            base: 0.0,
        };
        let series = CandleSeries {
            candles: vec![
                CandleStick::new(0.0, 1.0, 10.0, 20.0, 5.0, 25.0),
                CandleStick::new(2.0, 3.0, 30.0, 15.0, 10.0, 35.0),
            ],
        };
        let g = series.derive(&frame);
        assert_eq!(g.rects[0].rect, Rect::new(0.0, 10.0, 1.0, 20.0));
        assert_eq!(g.rects[0].trend, Trend::Rising);
        assert_eq!(g.rects[1].trend, Trend::Falling);
        assert_eq!(g.segments[1].p0, PlotPoint::new(2.5, 10.0));
        assert_eq!(series.extent().dependent, Some((5.0, 35.0)));
        assert_eq!(
            series.extent().independent,
            IndependentExtent::Numeric(0.0, 3.0)
        );
    }
}
