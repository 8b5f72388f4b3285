// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived geometry.
//!
//! Series derive a [`SeriesGeometry`] in plot coordinates (x along the independent axis, y along
//! the dependent axis), already clipped to the axis window. The chart projects those shapes into
//! the plot plane as a [`VisibleGeometry`].

use kurbo::{BezPath, CircleSegment, Line, Point, Rect};
use plotline_ticks::Plane;

use crate::clip::{clip_point, clip_polygon, clip_rect, clip_segment};
use crate::data::Trend;
use crate::z_order;

/// A rectangle tagged with the trend of the candle it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    /// The rectangle.
    pub rect: Rect,
    /// [`Trend::Flat`] unless this is a candle body.
    pub trend: Trend,
}

/// Shapes of one series in plot coordinates, clipped to the window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesGeometry {
    /// Markers.
    pub points: Vec<Point>,
    /// Lines, stems, whiskers and wicks.
    pub segments: Vec<Line>,
    /// Bars, boxes, candle bodies and proportional slices.
    pub rects: Vec<RectShape>,
    /// Closed polygons (area fills).
    pub fills: Vec<Vec<Point>>,
}

impl SeriesGeometry {
    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.segments.is_empty()
            && self.rects.is_empty()
            && self.fills.is_empty()
    }

    pub(crate) fn point(&mut self, p: Point, window: Rect) {
        self.points.extend(clip_point(p, window));
    }

    pub(crate) fn segment(&mut self, a: Point, b: Point, window: Rect) {
        self.segments.extend(clip_segment(Line::new(a, b), window));
    }

    pub(crate) fn rect(&mut self, rect: Rect, trend: Trend, window: Rect) {
        self.rects.extend(
            clip_rect(rect, window).map(|rect| RectShape { rect, trend }),
        );
    }

    pub(crate) fn fill(&mut self, polygon: &[Point], window: Rect) {
        let clipped = clip_polygon(polygon, window);
        if clipped.len() >= 3 {
            self.fills.push(clipped);
        }
    }
}

/// A projected shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A marker position.
    Point(Point),
    /// A straight segment.
    Segment(Line),
    /// A Cartesian rectangle.
    Rect(RectShape),
    /// A polar rectangle: an annular sector.
    Sector(CircleSegment),
    /// A closed filled path.
    Fill(BezPath),
}

/// A projected shape with its owner and drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Index into [`VisibleGeometry::series`].
    pub series: usize,
    /// See [`crate::z_order`].
    pub z_index: i32,
    /// The shape, in plot-plane coordinates.
    pub shape: Shape,
}

/// Everything a chart currently shows, in plot-plane coordinates.
///
/// Primitives are sorted by `z_index`; within one index they keep series order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleGeometry {
    /// Series names, in chart order.
    pub series: Vec<String>,
    /// Projected shapes.
    pub primitives: Vec<Primitive>,
}

impl VisibleGeometry {
    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All marker positions.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.primitives.iter().filter_map(|p| match p.shape {
            Shape::Point(pt) => Some(pt),
            _ => None,
        })
    }

    /// All segments.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.primitives.iter().filter_map(|p| match p.shape {
            Shape::Segment(l) => Some(l),
            _ => None,
        })
    }

    /// All Cartesian rectangles.
    pub fn rects(&self) -> impl Iterator<Item = RectShape> + '_ {
        self.primitives.iter().filter_map(|p| match p.shape {
            Shape::Rect(r) => Some(r),
            _ => None,
        })
    }

    /// All polar sectors.
    pub fn sectors(&self) -> impl Iterator<Item = CircleSegment> + '_ {
        self.primitives.iter().filter_map(|p| match p.shape {
            Shape::Sector(s) => Some(s),
            _ => None,
        })
    }

    /// All fills.
    pub fn fills(&self) -> impl Iterator<Item = &BezPath> + '_ {
        self.primitives.iter().filter_map(|p| match &p.shape {
            Shape::Fill(path) => Some(path),
            _ => None,
        })
    }

    /// Primitives belonging to the named series.
    pub fn series_primitives<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Primitive> + 'a {
        let index = self.series.iter().position(|s| s == name);
        self.primitives
            .iter()
            .filter(move |p| Some(p.series) == index)
    }

    pub(crate) fn push_series(&mut self, name: &str, geometry: &SeriesGeometry, plane: &Plane) {
        let series = self.series.len();
        self.series.push(name.into());
        let mut push = |z_index, shape| {
            self.primitives.push(Primitive {
                series,
                z_index,
                shape,
            });
        };
        for fill in &geometry.fills {
            push(z_order::SERIES_FILL, Shape::Fill(project_polygon(fill, plane)));
        }
        for r in &geometry.rects {
            let shape = match plane {
                Plane::Cartesian(c) => Shape::Rect(RectShape {
                    rect: Rect::from_points(
                        c.forward(r.rect.x0, r.rect.y0),
                        c.forward(r.rect.x1, r.rect.y1),
                    ),
                    trend: r.trend,
                }),
                Plane::Polar(p) => {
                    Shape::Sector(p.sector(r.rect.x0, r.rect.x1, r.rect.y0, r.rect.y1))
                }
            };
            push(z_order::SERIES_FILL, shape);
        }
        for l in &geometry.segments {
            let projected = Line::new(plane.forward(l.p0.x, l.p0.y), plane.forward(l.p1.x, l.p1.y));
            push(z_order::SERIES_STROKE, Shape::Segment(projected));
        }
        for p in &geometry.points {
            push(z_order::SERIES_POINTS, Shape::Point(plane.forward(p.x, p.y)));
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.primitives.sort_by_key(|p| p.z_index);
        self
    }
}

fn project_polygon(polygon: &[Point], plane: &Plane) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in polygon.iter().enumerate() {
        let q = plane.forward(p.x, p.y);
        if i == 0 {
            path.move_to(q);
        } else {
            path.line_to(q);
        }
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use plotline_ticks::CartesianPlane;

    #[test]
    fn primitives_are_ordered_by_layer() {
        let plane = Plane::Cartesian(CartesianPlane::new(
            (0.0, 10.0),
            (0.0, 10.0),
            Size::new(100.0, 100.0),
        ));
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut a = SeriesGeometry::default();
        a.point(Point::new(1.0, 1.0), window);
        a.segment(Point::new(0.0, 0.0), Point::new(20.0, 20.0), window);
        let mut b = SeriesGeometry::default();
        b.rect(Rect::new(2.0, 0.0, 4.0, 5.0), Trend::Flat, window);

        let mut visible = VisibleGeometry::default();
        visible.push_series("a", &a, &plane);
        visible.push_series("b", &b, &plane);
        let visible = visible.finish();
        let z: Vec<_> = visible.primitives.iter().map(|p| p.z_index).collect();
        assert_eq!(
            z,
            [z_order::SERIES_FILL, z_order::SERIES_STROKE, z_order::SERIES_POINTS]
        );
        let rect = visible.rects().next().unwrap().rect;
        assert_eq!(rect, Rect::new(20.0, 50.0, 40.0, 100.0));
        assert_eq!(visible.series_primitives("a").count(), 2);
        let seg = visible.segments().next().unwrap();
        assert_eq!(seg.p1, Point::new(100.0, 0.0));
    }

    #[test]
    fn clipped_away_shapes_are_not_recorded() {
        let window = Rect::new(0.0, 0.0, 1.0, 1.0);
        let mut g = SeriesGeometry::default();
        g.point(Point::new(2.0, 2.0), window);
        g.fill(&[Point::new(2.0, 2.0), Point::new(3.0, 2.0), Point::new(3.0, 3.0)], window);
        assert!(g.is_empty());
    }
}
