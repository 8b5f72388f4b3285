// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain values and ticks.

extern crate alloc;

use alloc::string::String;

use chrono::{DateTime, Utc};

/// A value in a series' native unit.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainValue {
    /// A plain number.
    Number(f64),
    /// A point in time (UTC).
    Instant(DateTime<Utc>),
    /// A category label.
    Category(String),
}

/// The three kinds of [`DomainValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// [`DomainValue::Number`].
    Numeric,
    /// [`DomainValue::Instant`].
    Temporal,
    /// [`DomainValue::Category`].
    Categorical,
}

impl DomainValue {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Number(_) => DomainKind::Numeric,
            Self::Instant(_) => DomainKind::Temporal,
            Self::Category(_) => DomainKind::Categorical,
        }
    }

    /// Returns the number, if this is a [`DomainValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the instant, if this is a [`DomainValue::Instant`].
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Instant(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the label, if this is a [`DomainValue::Category`].
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Category(c) => Some(c),
            _ => None,
        }
    }
}

impl core::fmt::Display for DomainValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Instant(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Self::Category(c) => f.write_str(c),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for DomainValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Category(String::from(value))
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// A single axis tick.
///
/// `label_position` and `line_position` usually equal `position`. Categorical ticks are the
/// exception: the label sits in the middle of the band and the line on its leading edge, both
/// expressed as [`DomainValue::Number`] plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// The tick value.
    pub position: DomainValue,
    /// Where the label is anchored.
    pub label_position: DomainValue,
    /// Where the tick line is drawn.
    pub line_position: DomainValue,
    /// Whether a full-span gridline is drawn at `line_position`.
    pub support_line: bool,
    /// Display text.
    pub label: String,
}

impl Tick {
    /// Creates a tick whose label and line sit at `position`, without a support line.
    pub fn new(position: impl Into<DomainValue>, label: impl Into<String>) -> Self {
        let position = position.into();
        Self {
            label_position: position.clone(),
            line_position: position.clone(),
            position,
            support_line: false,
            label: label.into(),
        }
    }

    /// Sets the support-line flag.
    pub fn with_support_line(mut self, support_line: bool) -> Self {
        self.support_line = support_line;
        self
    }

    /// Sets the label anchor.
    pub fn with_label_position(mut self, position: impl Into<DomainValue>) -> Self {
        self.label_position = position.into();
        self
    }

    /// Sets the line position.
    pub fn with_line_position(mut self, position: impl Into<DomainValue>) -> Self {
        self.line_position = position.into();
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn tick_positions_default_to_the_tick_value() {
        let t = Tick::new(2.5, "2.5");
        assert_eq!(t.label_position, DomainValue::Number(2.5));
        assert_eq!(t.line_position, DomainValue::Number(2.5));
        assert!(!t.support_line);
    }

    #[test]
    fn instants_display_as_iso_8601() {
        let t = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(DomainValue::from(t).to_string(), "1970-01-01T00:00:00.000Z");
        assert_eq!(DomainValue::from("apples").kind(), DomainKind::Categorical);
    }
}
