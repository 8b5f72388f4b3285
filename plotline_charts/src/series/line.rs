// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and area series.

use kurbo::Point as PlotPoint;

use super::Frame;
use crate::data::Point;
use crate::extent::{Extent, IndependentExtent, span_of, union_span};
use crate::geometry::SeriesGeometry;

pub(super) fn points_extent(points: &[Point]) -> Extent {
    Extent {
        independent: IndependentExtent::of(points.iter().map(|p| &p.independent)),
        dependent: span_of(points.iter().map(|p| p.value)),
    }
}

fn polyline(positions: &[PlotPoint], frame: &Frame, out: &mut SeriesGeometry) {
    for pair in positions.windows(2) {
        out.segment(pair[0], pair[1], frame.window);
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct LineSeries {
    pub(crate) points: Vec<Point>,
}

impl LineSeries {
    pub(super) fn extent(&self) -> Extent {
        points_extent(&self.points)
    }

    pub(super) fn derive(&self, frame: &Frame) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        polyline(&frame.positions(&self.points), frame, &mut out);
        out
    }
}

#[derive(Clone, Debug)]
pub(crate) struct AreaSeries {
    pub(crate) points: Vec<Point>,
    /// Explicit fill base; the frame base otherwise.
    pub(crate) base: Option<f64>,
    pub(crate) line_visible: bool,
    /// Unclipped plot positions and base from the last derivation, for hit testing.
    positions: Vec<PlotPoint>,
    resolved_base: f64,
}

impl Default for AreaSeries {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            base: None,
            line_visible: true,
            positions: Vec::new(),
            resolved_base: 0.0,
        }
    }
}

impl AreaSeries {
    pub(super) fn extent(&self) -> Extent {
        let mut extent = points_extent(&self.points);
        extent.dependent = union_span(extent.dependent, self.base.map(|b| (b, b)));
        extent
    }

    pub(super) fn derive(&mut self, frame: &Frame) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        self.positions = frame.positions(&self.points);
        self.resolved_base = self.base.unwrap_or(frame.base);
        if self.line_visible {
            polyline(&self.positions, frame, &mut out);
        }
        if let [first, .., last] = self.positions[..] {
            let mut polygon = Vec::with_capacity(self.positions.len() + 2);
            polygon.push(PlotPoint::new(first.x, self.resolved_base));
            polygon.extend_from_slice(&self.positions);
            polygon.push(PlotPoint::new(last.x, self.resolved_base));
            out.fill(&polygon, frame.window);
        }
        out
    }

    /// Whether `(x, y)` lies between the base and the line.
    pub(super) fn fill_contains(&self, x: f64, y: f64) -> bool {
        let i = self.positions.partition_point(|p| p.x < x);
        let value = match (i.checked_sub(1).map(|j| self.positions[j]), self.positions.get(i)) {
            (_, Some(b)) if b.x == x => b.y,
            (Some(a), Some(b)) => a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x),
            _ => return false,
        };
        let (lo, hi) = if value < self.resolved_base {
            (value, self.resolved_base)
        } else {
            (self.resolved_base, value)
        };
        y >= lo && y <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisRange, AxisRole};
    use kurbo::Rect;
    use plotline_ticks::DomainKind;

    fn frame(x: (f64, f64), y: (f64, f64)) -> Frame {
        let mut independent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        independent.set_range(AxisRange::numeric(x.0, x.1).unwrap()).unwrap();
        let mut dependent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        dependent.set_range(AxisRange::numeric(y.0, y.1).unwrap()).unwrap();
        Frame {
            independent,
            dependent,
            window: Rect::new(x.0, y.0, x.1, y.1),
            base: 0.0,
        }
    }

    #[test]
    fn line_segments_are_clipped() {
        let line = LineSeries {
            points: vec![Point::new(-10.0, -10.0), Point::new(10.0, 10.0)],
        };
        let g = line.derive(&frame((0.0, 5.0), (0.0, 5.0)));
        assert_eq!(g.segments.len(), 1);
        assert_eq!(g.segments[0].p0, PlotPoint::new(0.0, 0.0));
        assert_eq!(g.segments[0].p1, PlotPoint::new(5.0, 5.0));
    }

    #[test]
    fn area_fill_query() {
        let mut area = AreaSeries {
            points: vec![
                Point::new(0.0, 2.0),
                Point::new(2.0, 4.0),
                Point::new(4.0, -2.0),
            ],
            ..AreaSeries::default()
        };
        let g = area.derive(&frame((0.0, 4.0), (-5.0, 5.0)));
        assert_eq!(g.fills.len(), 1);
        assert_eq!(g.segments.len(), 2);
        assert!(area.fill_contains(1.0, 2.9));
        assert!(!area.fill_contains(1.0, 3.1));
        assert!(area.fill_contains(2.0, 4.0));
        // Below the base where the line dips under it.
        assert!(area.fill_contains(3.9, -1.0));
        assert!(!area.fill_contains(3.9, 1.0));
        assert!(!area.fill_contains(5.0, 0.0));
    }

    #[test]
    fn explicit_base_and_hidden_outline() {
        let mut area = AreaSeries {
            points: vec![Point::new(0.0, 2.0), Point::new(2.0, 2.0)],
            base: Some(1.0),
            line_visible: false,
            ..AreaSeries::default()
        };
        let g = area.derive(&frame((0.0, 2.0), (0.0, 5.0)));
        assert!(g.segments.is_empty());
        assert!(!area.fill_contains(1.0, 0.5));
        assert!(area.fill_contains(1.0, 1.5));
        assert_eq!(area.extent().dependent, Some((1.0, 2.0)));
    }
}
