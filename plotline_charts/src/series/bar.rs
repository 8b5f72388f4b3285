// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar and stacked bar series.

use hashbrown::HashMap;
use kurbo::Rect;
use plotline_ticks::DomainValue;

use super::line::points_extent;
use super::{Frame, Layout, LayoutRequest, Selection};
use crate::data::{Constraints, IndependentKey, Point, Trend, insert_batch};
use crate::error::{ChartError, Result};
use crate::extent::{Extent, IndependentExtent, span_of, union_span};
use crate::geometry::SeriesGeometry;

/// Share of the smallest gap between neighbouring positions that a default-width bar covers.
const GAP_FILL: f64 = 0.8;

/// Default bar width in domain units (seconds for time): a share of the smallest gap between
/// distinct positions, or of one unit (one day) when there is no gap.
fn default_width<'a>(values: impl Iterator<Item = &'a DomainValue>) -> f64 {
    let mut temporal = false;
    let mut xs: Vec<f64> = values
        .filter_map(|v| match v {
            DomainValue::Number(x) => Some(*x),
            DomainValue::Instant(t) => {
                temporal = true;
                Some(t.timestamp_micros() as f64 / 1e6)
            }
            DomainValue::Category(_) => None,
        })
        .collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    let gap = xs
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min);
    let gap = match (gap.is_finite(), temporal) {
        (true, _) => gap,
        (false, true) => 86_400.0,
        (false, false) => 1.0,
    };
    GAP_FILL * gap
}

fn bar_rect(x: f64, layout: Layout, from: f64, to: f64) -> Rect {
    let half = 0.5 * layout.width;
    let x = x + layout.offset;
    Rect::new(x - half, from, x + half, to)
}

#[derive(Clone, Debug, Default)]
pub(crate) struct BarSeries {
    pub(crate) points: Vec<Point>,
    pub(crate) width: Option<f64>,
    pub(crate) offset: Option<f64>,
}

impl BarSeries {
    /// Bars start at zero and are padded by half a bar along the independent axis.
    pub(super) fn extent(&self) -> Extent {
        let mut extent = points_extent(&self.points);
        if extent.dependent.is_some() {
            extent.dependent = union_span(extent.dependent, Some((0.0, 0.0)));
        }
        let half = 0.5 * self.width.unwrap_or_else(|| self.default_width());
        extent.independent = extent.independent.padded(half);
        extent
    }

    fn default_width(&self) -> f64 {
        default_width(self.points.iter().map(|p| &p.independent))
    }

    pub(super) fn layout_request(&self) -> LayoutRequest {
        LayoutRequest::Bar {
            width: self.width,
            offset: self.offset,
            default_width: self.default_width(),
        }
    }

    pub(super) fn derive(&self, frame: &Frame, layout: Layout) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        for p in frame.positions(&self.points) {
            out.rect(bar_rect(p.x, layout, frame.base, p.y), Trend::Flat, frame.window);
        }
        out
    }
}

#[derive(Clone, Debug)]
struct StackChild {
    name: String,
    points: Vec<Point>,
    visible: bool,
}

/// Named children stacked per independent position, in child order.
#[derive(Clone, Debug, Default)]
pub(crate) struct StackedBarSeries {
    children: Vec<StackChild>,
    pub(crate) width: Option<f64>,
    pub(crate) offset: Option<f64>,
}

impl StackedBarSeries {
    pub(super) fn add_child(&mut self, name: &str) -> Result<()> {
        if self.children.iter().any(|c| c.name == name) {
            return Err(ChartError::DuplicateName(name.into()));
        }
        self.children.push(StackChild {
            name: name.into(),
            points: Vec::new(),
            visible: true,
        });
        Ok(())
    }

    fn child_mut(&mut self, name: &str) -> Result<&mut StackChild> {
        self.children
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ChartError::UnknownSeries(name.into()))
    }

    pub(super) fn add(
        &mut self,
        child: &str,
        points: Vec<Point>,
        constraints: &Constraints,
    ) -> Result<usize> {
        insert_batch(&mut self.child_mut(child)?.points, points, constraints)
    }

    pub(super) fn set_child_visible(&mut self, child: &str, visible: bool) -> Result<()> {
        self.child_mut(child)?.visible = visible;
        Ok(())
    }

    pub(super) fn child_names(&self) -> Vec<String> {
        self.children.iter().map(|c| c.name.clone()).collect()
    }

    pub(super) fn len(&self) -> usize {
        self.children.iter().map(|c| c.points.len()).sum()
    }

    pub(super) fn delete(&mut self, selection: &Selection) -> usize {
        let mut removed = 0;
        for child in &mut self.children {
            let before = child.points.len();
            child.points.retain(|p| !selection.matches(&p.independent));
            removed += before - child.points.len();
        }
        removed
    }

    fn visible_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.children
            .iter()
            .filter(|c| c.visible)
            .flat_map(|c| &c.points)
    }

    /// Walks visible children in order, calling `f(point, start, end)` for each stacked value.
    ///
    /// Returns the stack heights per position in first-seen order.
    fn stack(&self, mut f: impl FnMut(&Point, f64, f64)) -> Vec<(DomainValue, f64)> {
        let mut index: HashMap<IndependentKey, usize> = HashMap::new();
        let mut totals: Vec<(DomainValue, f64)> = Vec::new();
        for p in self.visible_points() {
            let slot = *index
                .entry(IndependentKey::from(&p.independent))
                .or_insert_with(|| {
                    totals.push((p.independent.clone(), 0.0));
                    totals.len() - 1
                });
            let start = totals[slot].1;
            let end = start + p.value;
            f(p, start, end);
            totals[slot].1 = end;
        }
        totals
    }

    pub(super) fn totals(&self) -> Vec<(DomainValue, f64)> {
        self.stack(|_, _, _| {})
    }

    pub(super) fn extent(&self) -> Extent {
        let mut dependent = None;
        self.stack(|_, start, end| {
            dependent = union_span(dependent, span_of([start, end]));
        });
        let half = 0.5 * self.width.unwrap_or_else(|| self.default_width());
        Extent {
            independent: IndependentExtent::of(self.visible_points().map(|p| &p.independent))
                .padded(half),
            dependent,
        }
    }

    fn default_width(&self) -> f64 {
        default_width(self.visible_points().map(|p| &p.independent))
    }

    pub(super) fn layout_request(&self) -> LayoutRequest {
        LayoutRequest::Bar {
            width: self.width,
            offset: self.offset,
            default_width: self.default_width(),
        }
    }

    pub(super) fn derive(&self, frame: &Frame, layout: Layout) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        self.stack(|p, start, end| {
            if let Some(x) = frame.independent.to_n(&p.independent) {
                out.rect(bar_rect(x, layout, start, end), Trend::Flat, frame.window);
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisRange, AxisRole};
    use plotline_ticks::DomainKind;

    const CATEGORICAL: Constraints = Constraints {
        independent: DomainKind::Categorical,
        angular: false,
        non_negative: false,
    };

    fn frame(categories: &[&str], max: f64) -> Frame {
        let mut independent = Axis::new(AxisRole::Linear, DomainKind::Categorical, None);
        independent
            .set_range(AxisRange::categorical(categories.iter().copied()))
            .unwrap();
        let mut dependent = Axis::new(AxisRole::Linear, DomainKind::Numeric, None);
        dependent
            .set_range(AxisRange::numeric(0.0, max).unwrap())
            .unwrap();
        Frame {
            independent,
            dependent,
            window: Rect::new(0.0, 0.0, 100.0, max),
            base: 0.0,
        }
    }

    #[test]
    fn default_width_uses_the_smallest_gap() {
        let xs = [1.0, 3.0, 4.0, 4.0, 10.0].map(DomainValue::Number);
        assert!((default_width(xs.iter()) - 0.8).abs() < 1e-12);
        assert_eq!(default_width([DomainValue::Number(2.0)].iter()), 0.8);
    }

    #[test]
    fn bars_are_centred_on_their_band() {
        let bars = BarSeries {
            points: vec![Point::new("a", 10.0), Point::new("b", 20.0)],
            ..BarSeries::default()
        };
        let layout = Layout {
            width: 40.0,
            offset: 0.0,
        };
        let g = bars.derive(&frame(&["a", "b"], 50.0), layout);
        assert_eq!(g.rects[0].rect, Rect::new(5.0, 0.0, 45.0, 10.0));
        assert_eq!(g.rects[1].rect, Rect::new(55.0, 0.0, 95.0, 20.0));
    }

    #[test]
    fn children_stack_in_order() {
        let mut s = StackedBarSeries::default();
        s.add_child("low").unwrap();
        s.add_child("high").unwrap();
        assert_eq!(s.add_child("low"), Err(ChartError::DuplicateName("low".into())));
        s.add("low", vec![Point::new("a", 1.0), Point::new("b", 2.0)], &CATEGORICAL)
            .unwrap();
        s.add("high", vec![Point::new("b", 3.0), Point::new("c", 4.0)], &CATEGORICAL)
            .unwrap();
        assert!(matches!(
            s.add("nope", vec![Point::new("a", 1.0)], &CATEGORICAL),
            Err(ChartError::UnknownSeries(_))
        ));

        let totals = s.totals();
        assert_eq!(
            totals,
            [
                (DomainValue::from("a"), 1.0),
                (DomainValue::from("b"), 5.0),
                (DomainValue::from("c"), 4.0),
            ]
        );
        let layout = Layout {
            width: 10.0,
            offset: 0.0,
        };
        let g = s.derive(&frame(&["a", "b", "c"], 10.0), layout);
        let tops: Vec<_> = g.rects.iter().map(|r| (r.rect.y0, r.rect.y1)).collect();
        assert_eq!(tops, [(0.0, 1.0), (0.0, 2.0), (2.0, 5.0), (0.0, 4.0)]);

        s.set_child_visible("low", false).unwrap();
        assert_eq!(s.totals()[0], (DomainValue::from("b"), 3.0));
        assert_eq!(s.extent().dependent, Some((0.0, 4.0)));
    }
}
