// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection from axis coordinates into the plot plane.
//!
//! Both planes take plot coordinates (already normalised by the axes) and produce points in a
//! plot rectangle of a given [`Size`], with the origin in the top-left corner and y growing
//! downwards. Every forward mapping has an exact inverse for hit-testing.

use core::f64::consts::{PI, TAU};

use kurbo::{CircleSegment, Point, Size};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale::LinearMap;

/// Which plane a chart is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaneKind {
    /// Two independent linear axes.
    Cartesian,
    /// Angle + radius around the plot centre.
    Polar,
}

/// Direction in which polar angles increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolarDirection {
    /// Increasing angles turn from +x towards +y.
    #[default]
    CounterClockwise,
    /// Increasing angles turn from +y towards +x.
    Clockwise,
}

impl PolarDirection {
    fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// A Cartesian plane: x maps onto `[0, width]`, y onto `[height, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianPlane {
    x: LinearMap,
    y: LinearMap,
}

impl CartesianPlane {
    /// Creates a plane for the given axis intervals and plot size.
    pub fn new(x_domain: (f64, f64), y_domain: (f64, f64), size: Size) -> Self {
        Self {
            x: LinearMap::new(x_domain, (0.0, size.width)),
            y: LinearMap::new(y_domain, (size.height, 0.0)),
        }
    }

    /// The horizontal mapping.
    pub fn x_map(&self) -> LinearMap {
        self.x
    }

    /// The vertical mapping.
    pub fn y_map(&self) -> LinearMap {
        self.y
    }

    /// Projects `(x, y)` into the plot.
    pub fn forward(&self, x: f64, y: f64) -> Point {
        Point::new(self.x.map(x), self.y.map(y))
    }

    /// Inverse of [`CartesianPlane::forward`].
    pub fn inverse(&self, p: Point) -> (f64, f64) {
        (self.x.invert(p.x), self.y.invert(p.y))
    }

    /// Where the two axis lines cross, given each axis' origin.
    ///
    /// Origins outside the axis intervals are clamped, so the crossing always lies on the plot
    /// rectangle.
    pub fn crossing(&self, x_origin: f64, y_origin: f64) -> Point {
        self.forward(
            self.x.clamp_to_domain(x_origin),
            self.y.clamp_to_domain(y_origin),
        )
    }
}

/// A polar plane centred in the plot rectangle.
///
/// Angles map linearly onto `[0, 2π)` and are then rotated by `rotation` radians and oriented by
/// `direction`. Radii map linearly onto `[0, radius_max]` where `radius_max` is half the shorter
/// side of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarPlane {
    angle: LinearMap,
    radius: LinearMap,
    center: Point,
    rotation: f64,
    direction: PolarDirection,
}

impl PolarPlane {
    /// Creates a plane for the given angular and radial intervals.
    pub fn new(
        angle_domain: (f64, f64),
        radius_domain: (f64, f64),
        size: Size,
        rotation: f64,
        direction: PolarDirection,
    ) -> Self {
        let radius_max = 0.5 * size.width.min(size.height);
        Self {
            angle: LinearMap::new(angle_domain, (0.0, TAU)),
            radius: LinearMap::new(radius_domain, (0.0, radius_max)),
            center: Point::new(0.5 * size.width, 0.5 * size.height),
            rotation,
            direction,
        }
    }

    /// Plot centre.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Largest drawable radius.
    pub fn radius_max(&self) -> f64 {
        self.radius.range().1
    }

    /// Plane angle (radians, after rotation and direction) for an angular coordinate.
    pub fn plane_angle(&self, a: f64) -> f64 {
        self.rotation + self.direction.sign() * self.angle.map(a)
    }

    /// Plane radius for a radial coordinate. May be negative below the radial interval.
    pub fn plane_radius(&self, r: f64) -> f64 {
        self.radius.map(r)
    }

    /// Projects `(angle, radius)` into the plot.
    ///
    /// A negative plane radius is drawn on the opposite side: the angle turns by π and the
    /// radius is negated.
    pub fn forward(&self, a: f64, r: f64) -> Point {
        let mut phi = self.plane_angle(a);
        let mut rr = self.plane_radius(r);
        if rr < 0.0 {
            phi += PI;
            rr = -rr;
        }
        Point::new(
            self.center.x + rr * phi.cos(),
            self.center.y + rr * phi.sin(),
        )
    }

    /// Inverse of [`PolarPlane::forward`].
    ///
    /// Angles come back normalised into the angular interval's image of `[0, 2π)`, and radii are
    /// never below the start of the radial interval.
    pub fn inverse(&self, p: Point) -> (f64, f64) {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let rr = dx.hypot(dy);
        let phi = dy.atan2(dx);
        let mut a = self.direction.sign() * (phi - self.rotation);
        a -= (a / TAU).floor() * TAU;
        if TAU - a < 1e-9 {
            a = 0.0;
        }
        (self.angle.invert(a), self.radius.invert(rr))
    }

    /// The annular sector covering `[a0, a1] x [r0, r1]`.
    pub fn sector(&self, a0: f64, a1: f64, r0: f64, r1: f64) -> CircleSegment {
        let mut start = self.plane_angle(a0);
        let sweep = self.plane_angle(a1) - start;
        let (mut inner, mut outer) = (self.plane_radius(r0), self.plane_radius(r1));
        if inner > outer {
            core::mem::swap(&mut inner, &mut outer);
        }
        if outer <= 0.0 {
            start += PI;
            (inner, outer) = (-outer, -inner);
        }
        CircleSegment::new(self.center, outer, inner.max(0.0), start, sweep)
    }
}

/// A projection plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Plane {
    /// See [`CartesianPlane`].
    Cartesian(CartesianPlane),
    /// See [`PolarPlane`].
    Polar(PolarPlane),
}

impl Plane {
    /// The kind of this plane.
    pub fn kind(&self) -> PlaneKind {
        match self {
            Self::Cartesian(_) => PlaneKind::Cartesian,
            Self::Polar(_) => PlaneKind::Polar,
        }
    }

    /// Projects an (independent, dependent) coordinate pair into the plot.
    pub fn forward(&self, x: f64, y: f64) -> Point {
        match self {
            Self::Cartesian(p) => p.forward(x, y),
            Self::Polar(p) => p.forward(x, y),
        }
    }

    /// Inverse of [`Plane::forward`].
    pub fn inverse(&self, p: Point) -> (f64, f64) {
        match self {
            Self::Cartesian(c) => c.inverse(p),
            Self::Polar(c) => c.inverse(p),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cartesian_round_trip() {
        let plane = CartesianPlane::new((-5.0, 5.0), (0.0, 100.0), Size::new(400.0, 300.0));
        let p = plane.forward(2.5, 40.0);
        assert!(close(p.x, 300.0));
        assert!(close(p.y, 180.0));
        let (x, y) = plane.inverse(p);
        assert!(close(x, 2.5) && close(y, 40.0));
    }

    #[test]
    fn crossing_is_clamped_into_the_plot() {
        let plane = CartesianPlane::new((10.0, 20.0), (0.0, 100.0), Size::new(400.0, 300.0));
        let c = plane.crossing(0.0, 50.0);
        assert!(close(c.x, 0.0));
        assert!(close(c.y, 150.0));
    }

    #[test]
    fn polar_quarter_turn() {
        let plane = PolarPlane::new(
            (0.0, TAU),
            (0.0, 10.0),
            Size::new(200.0, 200.0),
            0.0,
            PolarDirection::CounterClockwise,
        );
        let p = plane.forward(core::f64::consts::FRAC_PI_2, 10.0);
        assert!(close(p.x, 100.0));
        assert!(close(p.y, 200.0));
    }

    #[test]
    fn polar_round_trip_with_rotation_and_clockwise() {
        let plane = PolarPlane::new(
            (0.0, 360.0),
            (0.0, 50.0),
            Size::new(300.0, 200.0),
            1.0,
            PolarDirection::Clockwise,
        );
        for (a, r) in [(0.0, 10.0), (45.0, 25.0), (190.0, 49.0), (359.0, 1.0)] {
            let (a2, r2) = plane.inverse(plane.forward(a, r));
            assert!(close(a2, a), "{a} -> {a2}");
            assert!(close(r2, r), "{r} -> {r2}");
        }
    }

    #[test]
    fn negative_radius_flips_the_angle() {
        let plane = PolarPlane::new(
            (0.0, TAU),
            (0.0, 10.0),
            Size::new(200.0, 200.0),
            0.0,
            PolarDirection::CounterClockwise,
        );
        let p = plane.forward(0.0, -5.0);
        assert!(close(p.x, 50.0));
        assert!(close(p.y, 100.0));
    }

    #[test]
    fn sector_spans_angle_and_radius() {
        let plane = PolarPlane::new(
            (0.0, 4.0),
            (0.0, 10.0),
            Size::new(200.0, 200.0),
            0.0,
            PolarDirection::CounterClockwise,
        );
        let s = plane.sector(1.0, 2.0, 2.0, 8.0);
        assert!(close(s.start_angle, core::f64::consts::FRAC_PI_2));
        assert!(close(s.sweep_angle, core::f64::consts::FRAC_PI_2));
        assert!(close(s.inner_radius, 20.0));
        assert!(close(s.outer_radius, 80.0));
    }
}
