// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use statrs::statistics::{Data, Median, Statistics};

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Population standard deviation (ddof = 0), numpy's `np.std` default.
pub fn population_std(values: &[f64]) -> f64 {
    values.iter().population_std_dev()
}

/// Sample variance (ddof = 1).
pub fn sample_variance(values: &[f64]) -> f64 {
    values.iter().variance()
}

pub fn median(values: &[f64]) -> f64 {
    Data::new(values.to_vec()).median()
}

/// Biased (population) skewness `g1 = m3 / m2^(3/2)`, as returned by
/// `scipy.stats.skew` with default arguments.
///
/// Zero-spread data has no defined skewness; 0 is returned so that Doane's
/// rule degrades to Sturges' rule.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let (mut m2, mut m3) = (0.0_f64, 0.0_f64);
    for &v in values {
        let d = v - mu;
        m2 += d * d;
        m3 += d * d * d;
    }
    m2 /= n;
    m3 /= n;
    if m2 <= 0.0 {
        return 0.0;
    }
    m3 / m2.powf(1.5)
}

/// Smallest and largest finite value. Returns `None` for empty input.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
