// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by mutating chart and series operations.

use plotline_ticks::DomainValue;
use thiserror::Error;

use crate::chart_spec::IndependentKind;
use crate::series::SeriesKind;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ChartError> = core::result::Result<T, E>;

/// Why a mutation was rejected.
///
/// A rejected call leaves the chart and the series exactly as they were.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartError {
    /// A data batch contained no points.
    #[error("data batch is empty")]
    EmptyInput,
    /// A value lies outside what the chart or series accepts.
    #[error("domain constraint violated: {0}")]
    DomainConstraintViolation(String),
    /// An explicit range with `min > max`.
    #[error("invalid range: {min} is greater than {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: DomainValue,
        /// Requested upper bound.
        max: DomainValue,
    },
    /// A series (or stacked child) name is already taken.
    #[error("name `{0}` is already in use")]
    DuplicateName(String),
    /// The series has been removed from its chart, or the chart is gone.
    #[error("series `{0}` is not attached to a chart")]
    Detached(String),
    /// No series with this name exists on the chart.
    #[error("no series named `{0}`")]
    UnknownSeries(String),
    /// The series kind cannot be drawn on this chart.
    #[error("{series:?} series cannot be drawn on a {plane} {chart:?} chart")]
    IncompatibleSeries {
        /// Kind of the rejected series.
        series: SeriesKind,
        /// Plane of the chart, `"cartesian"` or `"polar"`.
        plane: &'static str,
        /// Independent axis kind of the chart.
        chart: IndependentKind,
    },
    /// The operation does not apply to this kind of series.
    #[error("`{operation}` is not supported by {kind:?} series `{series}`")]
    UnsupportedOperation {
        /// Series name.
        series: String,
        /// Series kind.
        kind: SeriesKind,
        /// Operation name.
        operation: &'static str,
    },
}

impl ChartError {
    pub(crate) fn constraint(msg: impl Into<String>) -> Self {
        Self::DomainConstraintViolation(msg.into())
    }
}
