// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter and lollipop series.

use kurbo::Point as PlotPoint;

use super::Frame;
use super::line::points_extent;
use crate::data::Point;
use crate::extent::{Extent, union_span};
use crate::geometry::SeriesGeometry;

#[derive(Clone, Debug, Default)]
pub(crate) struct ScatterSeries {
    pub(crate) points: Vec<Point>,
}

impl ScatterSeries {
    pub(super) fn extent(&self) -> Extent {
        points_extent(&self.points)
    }

    pub(super) fn derive(&self, frame: &Frame) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        for p in frame.positions(&self.points) {
            out.point(p, frame.window);
        }
        out
    }
}

#[derive(Clone, Debug)]
pub(crate) struct LollipopSeries {
    pub(crate) points: Vec<Point>,
    pub(crate) line_visible: bool,
}

impl Default for LollipopSeries {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            line_visible: true,
        }
    }
}

impl LollipopSeries {
    /// Stems start at zero, so zero is always in range.
    pub(super) fn extent(&self) -> Extent {
        let mut extent = points_extent(&self.points);
        if extent.dependent.is_some() {
            extent.dependent = union_span(extent.dependent, Some((0.0, 0.0)));
        }
        extent
    }

    pub(super) fn derive(&self, frame: &Frame) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        for p in frame.positions(&self.points) {
            if self.line_visible {
                out.segment(PlotPoint::new(p.x, frame.base), p, frame.window);
            }
            out.point(p, frame.window);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisRange, AxisRole};
    use kurbo::Rect;
    use plotline_ticks::DomainKind;

    fn frame() -> Frame {
        let mut independent = Axis::new(AxisRole::Linear, DomainKind::Categorical, None);
        independent
            .set_range(AxisRange::categorical(["a", "b"]))
            .unwrap();
        let dependent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        Frame {
            independent,
            dependent,
            window: Rect::new(0.0, 0.0, 100.0, 100.0),
            base: 0.0,
        }
    }

    #[test]
    fn lollipop_stems_start_at_the_base() {
        let mut s = LollipopSeries {
            points: vec![Point::new("a", 40.0), Point::new("b", 150.0)],
            ..LollipopSeries::default()
        };
        let g = s.derive(&frame());
        assert_eq!(g.points, [PlotPoint::new(25.0, 40.0)]);
        assert_eq!(g.segments.len(), 2);
        assert_eq!(g.segments[1].p1, PlotPoint::new(75.0, 100.0));

        s.line_visible = false;
        assert!(s.derive(&frame()).segments.is_empty());
        assert_eq!(s.extent().dependent, Some((0.0, 150.0)));
    }

    #[test]
    fn scatter_drops_unknown_categories() {
        let s = ScatterSeries {
            points: vec![Point::new("a", 1.0), Point::new("zzz", 1.0)],
        };
        assert_eq!(s.derive(&frame()).points.len(), 1);
    }
}
