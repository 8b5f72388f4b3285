// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional (pie / share) series.
//!
//! Each visible category takes `value / total` of the independent interval, laid out in
//! insertion order from its start. Hiding a slice removes it from the total, so the remaining
//! slices still cover the whole interval.

use hashbrown::HashSet;
use kurbo::Rect;

use super::{Frame, Layout, Selection};
use crate::data::{Constraints, Point, Trend, insert_batch};
use crate::error::{ChartError, Result};
use crate::geometry::SeriesGeometry;

#[derive(Clone, Debug, Default)]
pub(crate) struct ProportionalSeries {
    pub(crate) points: Vec<Point>,
    hidden: HashSet<String>,
    total: f64,
}

impl ProportionalSeries {
    fn is_visible(&self, p: &Point) -> bool {
        p.independent
            .as_category()
            .is_some_and(|c| !self.hidden.contains(c))
    }

    /// Keeps `total` equal to the sum of visible values.
    fn refresh_total(&mut self) {
        self.total = self
            .points
            .iter()
            .filter(|p| self.is_visible(p))
            .map(|p| p.value)
            .sum();
    }

    pub(super) fn total(&self) -> f64 {
        self.total
    }

    pub(super) fn add(&mut self, points: Vec<Point>, constraints: &Constraints) -> Result<usize> {
        let added = insert_batch(&mut self.points, points, constraints)?;
        self.refresh_total();
        Ok(added)
    }

    pub(super) fn delete(&mut self, selection: &Selection) -> usize {
        let before = self.points.len();
        self.points.retain(|p| !selection.matches(&p.independent));
        let points = &self.points;
        self.hidden
            .retain(|c| points.iter().any(|p| p.independent.as_category() == Some(c.as_str())));
        self.refresh_total();
        before - self.points.len()
    }

    pub(super) fn set_point_visible(&mut self, category: &str, visible: bool) -> Result<()> {
        if !self
            .points
            .iter()
            .any(|p| p.independent.as_category() == Some(category))
        {
            return Err(ChartError::constraint(format!(
                "no slice for category `{category}`"
            )));
        }
        if visible {
            self.hidden.remove(category);
        } else {
            self.hidden.insert(category.into());
        }
        self.refresh_total();
        Ok(())
    }

    /// One rect per visible slice: `x` spans its share of the independent interval and `y`
    /// spans the row `[offset, offset + width]` assigned by the layout.
    pub(super) fn derive(&self, frame: &Frame, layout: Layout) -> SeriesGeometry {
        let mut out = SeriesGeometry::default();
        if self.total <= 0.0 {
            return out;
        }
        let (n0, n1) = frame.independent.n_range();
        let span = n1 - n0;
        let mut acc = 0.0;
        for p in self.points.iter().filter(|p| self.is_visible(p)) {
            let share = p.value / self.total;
            let rect = Rect::new(
                n0 + acc * span,
                layout.offset,
                n0 + (acc + share) * span,
                layout.offset + layout.width,
            );
            out.rect(rect, Trend::Flat, frame.window);
            acc += share;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisRole};
    use plotline_ticks::DomainKind;

    const SHARES: Constraints = Constraints {
        independent: DomainKind::Categorical,
        angular: false,
        non_negative: true,
    };

    fn frame() -> Frame {
        Frame {
            independent: Axis::new(AxisRole::Linear, DomainKind::Numeric, Some((0.0, 1.0))),
            dependent: Axis::new(AxisRole::Linear, DomainKind::Numeric, Some((0.0, 1.0))),
            window: Rect::new(0.0, 0.0, 1.0, 1.0),
            base: 0.0,
        }
    }

    #[test]
    fn hiding_a_slice_shifts_later_slices() {
        let mut s = ProportionalSeries::default();
        s.add(
            vec![
                Point::new("a", 1.0),
                Point::new("b", 1.0),
                Point::new("c", 2.0),
            ],
            &SHARES,
        )
        .unwrap();
        assert_eq!(s.total(), 4.0);
        let row = Layout {
            width: 1.0,
            offset: 0.0,
        };
        let g = s.derive(&frame(), row);
        assert_eq!(g.rects[2].rect, Rect::new(0.5, 0.0, 1.0, 1.0));

        s.set_point_visible("a", false).unwrap();
        assert_eq!(s.total(), 3.0);
        let g = s.derive(&frame(), row);
        assert_eq!(g.rects.len(), 2);
        assert!((g.rects[1].rect.x0 - 1.0 / 3.0).abs() < 1e-12);

        s.set_point_visible("a", true).unwrap();
        assert_eq!(s.total(), 4.0);
        assert!(s.set_point_visible("zzz", false).is_err());
    }

    #[test]
    fn negative_shares_are_rejected() {
        let mut s = ProportionalSeries::default();
        assert!(s.add(vec![Point::new("a", -1.0)], &SHARES).is_err());
        assert_eq!(s.total(), 0.0);
        assert!(s.derive(&frame(), Layout::default()).is_empty());
    }

    #[test]
    fn deleting_hidden_slices_keeps_the_total() {
        let mut s = ProportionalSeries::default();
        s.add(vec![Point::new("a", 1.0), Point::new("b", 2.0)], &SHARES)
            .unwrap();
        s.set_point_visible("b", false).unwrap();
        assert_eq!(s.delete(&Selection::Categories(vec!["b".into()])), 1);
        assert_eq!(s.total(), 1.0);
        assert!(s.hidden.is_empty());
    }
}
