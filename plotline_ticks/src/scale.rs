// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear mapping between a domain interval and a range interval.

/// A linear mapping from a continuous domain to a continuous range.
///
/// Either interval may be reversed (e.g. a screen-space y range running from the bottom edge up
/// to `0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearMap {
    /// Creates a new map sending `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    ///
    /// A zero-width range maps everything to the start of the domain.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (y - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the domain interval (as authored).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range interval (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Clamps `x` into the domain interval, whichever way round it is.
    pub fn clamp_to_domain(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        x.clamp(d0.min(d1), d0.max(d1))
    }
}
