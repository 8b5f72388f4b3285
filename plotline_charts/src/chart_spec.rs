// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! A [`ChartSpec`] fixes everything about a chart that cannot change after creation: the plane,
//! the independent axis kind, and the layout constants used by every recompute pass. The plot
//! size is the only setting that can change later, through [`crate::Chart::resize`].

use core::f64::consts::TAU;

use kurbo::Size;
use plotline_ticks::{
    DEFAULT_NUMERIC_LABEL_SPACE, DEFAULT_TEMPORAL_LABEL_SPACE, DomainKind, PlaneKind,
    PolarDirection,
};

use crate::data::Constraints;
use crate::series::SeriesKind;

/// Kind of a chart's independent axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndependentKind {
    /// Numbers (angles in `[0, 2π]` on a polar chart).
    Numeric,
    /// UTC instants.
    Temporal,
    /// Category labels.
    Categorical,
    /// Shares of a whole (pie or stacked-ratio charts). Points carry category labels.
    Proportional,
}

impl IndependentKind {
    /// The kind of independent value series on this chart must carry.
    pub fn domain_kind(self) -> DomainKind {
        match self {
            Self::Numeric => DomainKind::Numeric,
            Self::Temporal => DomainKind::Temporal,
            Self::Categorical | Self::Proportional => DomainKind::Categorical,
        }
    }
}

/// Minimum plot-space per tick label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSpacing {
    /// For numeric axes.
    pub numeric: f64,
    /// For temporal axes.
    pub temporal: f64,
}

impl Default for TickSpacing {
    fn default() -> Self {
        Self {
            numeric: DEFAULT_NUMERIC_LABEL_SPACE,
            temporal: DEFAULT_TEMPORAL_LABEL_SPACE,
        }
    }
}

/// Orientation of a polar plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarSpec {
    /// Plane angle (radians) of the angular axis start.
    pub rotation: f64,
    /// Direction of increasing angles.
    pub direction: PolarDirection,
}

/// Immutable chart configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSpec {
    /// Cartesian or polar.
    pub plane: PlaneKind,
    /// Independent axis kind.
    pub independent: IndependentKind,
    /// Initial plot size.
    pub size: Size,
    /// Tick label spacing.
    pub spacing: TickSpacing,
    /// Polar orientation; ignored on Cartesian charts.
    pub polar: PolarSpec,
    /// Share of a category band that bar-like series fill together.
    pub bar_band_fill: f64,
}

impl ChartSpec {
    /// Default plot size.
    pub const DEFAULT_SIZE: Size = Size::new(400.0, 300.0);
    /// Default [`ChartSpec::bar_band_fill`].
    pub const DEFAULT_BAR_BAND_FILL: f64 = 1.0;

    /// A Cartesian chart.
    pub fn cartesian(independent: IndependentKind) -> Self {
        Self::new(PlaneKind::Cartesian, independent)
    }

    /// A polar chart.
    pub fn polar(independent: IndependentKind) -> Self {
        Self::new(PlaneKind::Polar, independent)
    }

    fn new(plane: PlaneKind, independent: IndependentKind) -> Self {
        Self {
            plane,
            independent,
            size: Self::DEFAULT_SIZE,
            spacing: TickSpacing::default(),
            polar: PolarSpec::default(),
            bar_band_fill: Self::DEFAULT_BAR_BAND_FILL,
        }
    }

    /// Sets the initial plot size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the tick label spacing.
    pub fn with_spacing(mut self, spacing: TickSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the polar rotation, in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.polar.rotation = rotation;
        self
    }

    /// Sets the polar direction.
    pub fn with_direction(mut self, direction: PolarDirection) -> Self {
        self.polar.direction = direction;
        self
    }

    /// Sets the share of a category band filled by bars. Clamped to `[0, 1]`.
    pub fn with_bar_band_fill(mut self, fill: f64) -> Self {
        self.bar_band_fill = fill.clamp(0.0, 1.0);
        self
    }

    /// Whether series of `kind` can be drawn on this chart.
    pub fn accepts(&self, kind: SeriesKind) -> bool {
        match self.independent {
            IndependentKind::Proportional => kind == SeriesKind::Proportional,
            IndependentKind::Categorical => {
                !matches!(kind, SeriesKind::Proportional | SeriesKind::CandleStick)
                    && !(self.plane == PlaneKind::Polar && kind == SeriesKind::Box)
            }
            IndependentKind::Numeric | IndependentKind::Temporal => match self.plane {
                PlaneKind::Cartesian => kind != SeriesKind::Proportional,
                PlaneKind::Polar => !matches!(
                    kind,
                    SeriesKind::Proportional | SeriesKind::CandleStick | SeriesKind::Box
                ),
            },
        }
    }

    /// Whether numeric independent values are angles.
    pub(crate) fn angular(&self) -> bool {
        self.plane == PlaneKind::Polar && self.independent == IndependentKind::Numeric
    }

    /// Fixed independent interval for angular and proportional charts.
    pub(crate) fn fixed_independent(&self) -> Option<(f64, f64)> {
        match (self.independent, self.plane) {
            (IndependentKind::Proportional, PlaneKind::Cartesian) => Some((0.0, 1.0)),
            (IndependentKind::Proportional, PlaneKind::Polar) => Some((0.0, TAU)),
            (IndependentKind::Numeric, PlaneKind::Polar) => Some((0.0, TAU)),
            _ => None,
        }
    }

    pub(crate) fn constraints(&self) -> Constraints {
        Constraints {
            independent: self.independent.domain_kind(),
            angular: self.angular(),
            non_negative: self.plane == PlaneKind::Polar
                || self.independent == IndependentKind::Proportional,
        }
    }

    pub(crate) fn plane_name(&self) -> &'static str {
        match self.plane {
            PlaneKind::Cartesian => "cartesian",
            PlaneKind::Polar => "polar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let spec = ChartSpec::cartesian(IndependentKind::Numeric);
        assert_eq!(spec.size, Size::new(400.0, 300.0));
        assert_eq!(spec.spacing.numeric, 50.0);
        assert_eq!(spec.spacing.temporal, 90.0);
        assert_eq!(spec.bar_band_fill, 1.0);
        assert!(!spec.constraints().non_negative);
    }

    #[test]
    fn series_compatibility() {
        let polar = ChartSpec::polar(IndependentKind::Numeric);
        assert!(polar.accepts(SeriesKind::Bar));
        assert!(!polar.accepts(SeriesKind::CandleStick));
        assert!(!polar.accepts(SeriesKind::Box));
        assert!(polar.constraints().angular);

        let pie = ChartSpec::polar(IndependentKind::Proportional);
        assert!(pie.accepts(SeriesKind::Proportional));
        assert!(!pie.accepts(SeriesKind::Line));

        let cat = ChartSpec::cartesian(IndependentKind::Categorical);
        assert!(cat.accepts(SeriesKind::Box));
        assert!(!cat.accepts(SeriesKind::CandleStick));
        assert!(!cat.accepts(SeriesKind::Proportional));
    }
}
