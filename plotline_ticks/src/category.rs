// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical ticks and band positions.

extern crate alloc;

use alloc::vec::Vec;

use crate::domain::{DomainValue, Tick};

/// Width of one band when `count` categories share `[n_min, n_max]`.
///
/// Returns `0` for an empty category list.
pub fn band_size(n_min: f64, n_max: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (n_max - n_min) / count as f64
}

/// Plot coordinate of the centre of band `index`.
///
/// With no categories this returns `n_min`.
pub fn band_center(n_min: f64, n_max: f64, count: usize, index: usize) -> f64 {
    n_min + band_size(n_min, n_max, count) * (index as f64 + 0.5)
}

/// One tick per category, in order.
///
/// The tick's `position` is the category itself; its label is centred in the band and its line
/// sits on the band's leading edge.
pub fn categorical_ticks<S: AsRef<str>>(
    categories: &[S],
    n_min: f64,
    n_max: f64,
    support_line: bool,
) -> Vec<Tick> {
    let band = band_size(n_min, n_max, categories.len());
    categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let c = c.as_ref();
            Tick::new(DomainValue::from(c), c)
                .with_label_position(n_min + band * (i as f64 + 0.5))
                .with_line_position(n_min + band * i as f64)
                .with_support_line(support_line)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn labels_are_centred_and_lines_on_the_leading_edge() {
        let ticks = categorical_ticks(&["a", "b", "c", "d"], 0.0, 100.0, false);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[1].position, DomainValue::from("b"));
        assert_eq!(ticks[1].label_position, DomainValue::Number(37.5));
        assert_eq!(ticks[1].line_position, DomainValue::Number(25.0));
    }

    #[test]
    fn empty_categories_map_to_min() {
        assert_eq!(band_center(3.0, 9.0, 0, 0), 3.0);
        assert!(categorical_ticks::<&str>(&[], 0.0, 1.0, true).is_empty());
    }
}
