// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipping of plot-coordinate shapes to the visible window.
//!
//! All tests are inclusive: a shape touching the window edge is kept.

use kurbo::{Line, Point, Rect};

fn inside(p: Point, w: Rect) -> bool {
    p.x >= w.x0 && p.x <= w.x1 && p.y >= w.y0 && p.y <= w.y1
}

fn transpose(p: Point) -> Point {
    Point::new(p.y, p.x)
}

/// Keeps `p` if it lies in `window`.
pub(crate) fn clip_point(p: Point, window: Rect) -> Option<Point> {
    inside(p, window).then_some(p)
}

/// Clips a segment to `window`, or drops it if no part is visible.
///
/// Clips against x first, then y. An endpoint outside a bound slides along the segment onto the
/// bound.
pub(crate) fn clip_segment(segment: Line, window: Rect) -> Option<Line> {
    let (a, b) = clip_x(segment.p0, segment.p1, window.x0, window.x1)?;
    let (a, b) = clip_x(transpose(a), transpose(b), window.y0, window.y1)?;
    Some(Line::new(transpose(a), transpose(b)))
}

fn clip_x(a: Point, b: Point, lo: f64, hi: f64) -> Option<(Point, Point)> {
    if (a.x < lo && b.x < lo) || (a.x > hi && b.x > hi) {
        return None;
    }
    // Both ends cannot be on the same side here, so `to.x != from.x` whenever we interpolate.
    let slide = |from: Point, to: Point| {
        let bound = if from.x < lo {
            lo
        } else if from.x > hi {
            hi
        } else {
            return from;
        };
        let y = from.y + (to.y - from.y) * (bound - from.x) / (to.x - from.x);
        Point::new(bound, y)
    };
    Some((slide(a, b), slide(b, a)))
}

/// Intersects a rectangle with `window`, or drops it if they do not touch.
pub(crate) fn clip_rect(rect: Rect, window: Rect) -> Option<Rect> {
    let r = rect.abs();
    if r.x1 < window.x0 || r.x0 > window.x1 || r.y1 < window.y0 || r.y0 > window.y1 {
        return None;
    }
    Some(Rect::new(
        r.x0.max(window.x0),
        r.y0.max(window.y0),
        r.x1.min(window.x1),
        r.y1.min(window.y1),
    ))
}

/// Clips a closed polygon to `window` (Sutherland–Hodgman).
///
/// Returns an empty vector when nothing is visible.
pub(crate) fn clip_polygon(polygon: &[Point], window: Rect) -> Vec<Point> {
    let mut out = polygon.to_vec();
    let edges: [(fn(Point) -> f64, f64, bool); 4] = [
        (|p| p.x, window.x0, true),
        (|p| p.x, window.x1, false),
        (|p| p.y, window.y0, true),
        (|p| p.y, window.y1, false),
    ];
    for (coord, bound, keep_above) in edges {
        if out.is_empty() {
            break;
        }
        let keeps = |p: Point| {
            if keep_above {
                coord(p) >= bound
            } else {
                coord(p) <= bound
            }
        };
        let crossing = |a: Point, b: Point| {
            let t = (bound - coord(a)) / (coord(b) - coord(a));
            a.lerp(b, t)
        };
        let input = core::mem::take(&mut out);
        let mut prev = input[input.len() - 1];
        for &cur in &input {
            match (keeps(prev), keeps(cur)) {
                (true, true) => out.push(cur),
                (true, false) => out.push(crossing(prev, cur)),
                (false, true) => {
                    out.push(crossing(prev, cur));
                    out.push(cur);
                }
                (false, false) => {}
            }
            prev = cur;
        }
    }
    out
}
