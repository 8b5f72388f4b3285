// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-and-whisker series.

use kurbo::{Line, Point as PlotPoint, Rect};
use smallvec::SmallVec;

use super::{Frame, Layout, LayoutRequest};
use crate::data::{BoxPoint, Trend};
use crate::extent::{Extent, IndependentExtent, span_of};
use crate::geometry::SeriesGeometry;

/// Smallest divisor of the independent span used for box width.
const MIN_BOX_DIVISOR: usize = 5;

/// Boxes on continuous axes are `span / box_width_divisor(max_outliers)` wide.
pub(crate) fn box_width_divisor(max_outliers: usize) -> usize {
    max_outliers.max(MIN_BOX_DIVISOR)
}

#[derive(Clone, Debug, Default)]
pub(crate) struct BoxSeries {
    pub(crate) boxes: Vec<BoxPoint>,
}

impl BoxSeries {
    pub(super) fn extent(&self) -> Extent {
        Extent {
            independent: IndependentExtent::of(self.boxes.iter().map(|b| &b.independent)),
            dependent: span_of(
                self.boxes
                    .iter()
                    .flat_map(|b| [b.minimum, b.maximum].into_iter().chain(b.outliers.iter().copied())),
            ),
        }
    }

    pub(super) fn layout_request(&self) -> LayoutRequest {
        LayoutRequest::Box {
            max_outliers: self.boxes.iter().map(|b| b.outliers.len()).max().unwrap_or(0),
        }
    }

    /// Box from Q1 to Q3, a median line, whiskers with caps, and one point per outlier.
    pub(super) fn derive(&self, frame: &Frame, layout: Layout) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        let half = 0.5 * layout.width;
        for b in &self.boxes {
            let Some(x) = frame.independent.to_n(&b.independent) else {
                continue;
            };
            let x = x + layout.offset;
            out.rect(
                Rect::new(x - half, b.first_quartile, x + half, b.third_quartile),
                Trend::Flat,
                frame.window,
            );
            let h = |y0: f64, y1: f64, w: f64| {
                Line::new(PlotPoint::new(x - w, y0), PlotPoint::new(x + w, y1))
            };
            let mut strokes: SmallVec<[Line; 5]> = SmallVec::new();
            strokes.push(h(b.median, b.median, half));
            // A whisker that ends on the box is dropped with its cap.
            if b.minimum < b.first_quartile {
                strokes.push(h(b.minimum, b.first_quartile, 0.0));
                strokes.push(h(b.minimum, b.minimum, 0.5 * half));
            }
            if b.maximum > b.third_quartile {
                strokes.push(h(b.third_quartile, b.maximum, 0.0));
                strokes.push(h(b.maximum, b.maximum, 0.5 * half));
            }
            for l in strokes {
                out.segment(l.p0, l.p1, frame.window);
            }
            for &o in &b.outliers {
                out.point(PlotPoint::new(x, o), frame.window);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisRange, AxisRole};
    use plotline_ticks::DomainKind;

    #[test]
    fn box_shape() {
        let mut independent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        independent
            .set_range(AxisRange::numeric(0.0, 10.0).unwrap())
            .unwrap();
        let dependent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        let frame = Frame {
            independent,
            dependent,
            window: Rect::new(0.0, 0.0, 10.0, 100.0),
            base: 0.0,
        };
        let series = BoxSeries {
            boxes: vec![
                BoxPoint::new(5.0, [18.0, 19.3, 21.5, 23.4, 25.12]).with_outliers([40.0, 2.0]),
            ],
        };
        let g = series.derive(
            &frame,
            Layout {
                width: 2.0,
                offset: 0.0,
            },
        );
        assert_eq!(g.rects[0].rect, Rect::new(4.0, 19.3, 6.0, 23.4));
        assert_eq!(g.segments.len(), 5);
        assert_eq!(g.segments[0].p0, PlotPoint::new(4.0, 21.5));
        assert_eq!(g.segments[2].p0, PlotPoint::new(4.5, 18.0));
        assert_eq!(g.segments[4].p0, PlotPoint::new(4.5, 25.12));
        assert_eq!(g.points.len(), 2);
        assert_eq!(series.extent().dependent, Some((2.0, 40.0)));
        assert_eq!(
            series.layout_request(),
            LayoutRequest::Box { max_outliers: 2 }
        );
    }

    #[test]
    fn whiskers_that_end_on_the_box_are_dropped() {
        let mut independent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        independent
            .set_range(AxisRange::numeric(0.0, 10.0).unwrap())
            .unwrap();
        let dependent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        let frame = Frame {
            independent,
            dependent,
            window: Rect::new(0.0, 0.0, 10.0, 100.0),
            base: 0.0,
        };
        let layout = Layout {
            width: 2.0,
            offset: 0.0,
        };
        let lower_only = BoxSeries {
            boxes: vec![BoxPoint::new(5.0, [10.0, 12.0, 15.0, 20.0, 20.0])],
        };
        let g = lower_only.derive(&frame, layout);
        assert_eq!(g.segments.len(), 3);
        assert_eq!(g.segments[1].p0, PlotPoint::new(5.0, 10.0));
        assert_eq!(g.segments[1].p1, PlotPoint::new(5.0, 12.0));

        let flat = BoxSeries {
            boxes: vec![BoxPoint::new(5.0, [7.0, 7.0, 7.0, 7.0, 7.0])],
        };
        let g = flat.derive(&frame, layout);
        assert_eq!(g.segments.len(), 1);
        assert_eq!(g.rects.len(), 1);
    }
}
