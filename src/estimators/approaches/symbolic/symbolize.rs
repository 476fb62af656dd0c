// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of real-valued samples onto symbols `1..=c`.

use std::str::FromStr;

use ndarray::Array1;

use crate::estimators::approaches::common_nd::dataset::Sequence;
use crate::estimators::diagnostics::{Degeneracy, Diagnostics};
use crate::estimators::error::{InvalidParameterError, Result};
use crate::estimators::utils::stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolizationMethod {
    /// Equal-width partitions of `[min, max]`.
    Linear,
    /// Equal-frequency partitions by rank.
    Uniform,
    /// One-dimensional k-means clustering.
    KMeans,
    /// Maximum entropy partitioning: thresholds at the `k / c` quantiles.
    #[default]
    Mep,
}

impl FromStr for SymbolizationMethod {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "uniform" => Ok(Self::Uniform),
            "kmeans" => Ok(Self::KMeans),
            "mep" => Ok(Self::Mep),
            _ => Err(InvalidParameterError::UnknownMethod {
                kind: "symbolization",
                name: s.to_string(),
                expected: "linear, uniform, kmeans, mep",
            }),
        }
    }
}

/// Stopping rule of the k-means symbolization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KMeansOptions {
    pub max_iterations: usize,
    /// Stop once no center moves by more than this.
    pub tolerance: f64,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-4,
        }
    }
}

/// A sequence of symbols in `1..=num_symbols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbolization {
    pub symbols: Array1<usize>,
    pub num_symbols: usize,
}

/// Symbolize `sequence` into `c > 1` symbols.
pub fn symbolize(
    sequence: &Sequence,
    c: usize,
    method: SymbolizationMethod,
    diagnostics: &mut Diagnostics,
) -> Result<Symbolization> {
    symbolize_with(sequence, c, method, KMeansOptions::default(), diagnostics)
}

/// [`symbolize`] with explicit k-means options.
pub fn symbolize_with(
    sequence: &Sequence,
    c: usize,
    method: SymbolizationMethod,
    kmeans: KMeansOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Symbolization> {
    if c <= 1 {
        return Err(InvalidParameterError::out_of_range("c", c as f64, "an integer > 1"));
    }
    let x = sequence.as_slice();
    let symbols = match method {
        SymbolizationMethod::Linear => linear(x, c, diagnostics),
        SymbolizationMethod::Uniform => uniform(x, c),
        SymbolizationMethod::KMeans => kmeans_symbols(x, c, kmeans, diagnostics),
        SymbolizationMethod::Mep => mep(x, c),
    };
    Ok(Symbolization {
        symbols: Array1::from(symbols),
        num_symbols: c,
    })
}

fn sorted(x: &[f64]) -> Vec<f64> {
    let mut s = x.to_vec();
    s.sort_by(f64::total_cmp);
    s
}

/// Indices that sort `x` ascending; ties keep their original order.
fn stable_argsort(x: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..x.len()).collect();
    idx.sort_by(|&i, &j| x[i].total_cmp(&x[j]));
    idx
}

fn linear(x: &[f64], c: usize, diagnostics: &mut Diagnostics) -> Vec<usize> {
    let (lo, hi) = stats::min_max(x).unwrap_or((0.0, 0.0));
    let width = (hi - lo) / c as f64;
    if width == 0.0 {
        diagnostics.push(Degeneracy::ZeroVariance { what: "sequence" });
        return vec![1; x.len()];
    }
    x.iter()
        .map(|&v| {
            let above = (1..c).filter(|&k| v >= lo + k as f64 * width).count();
            (above + 1).min(c)
        })
        .collect()
}

fn uniform(x: &[f64], c: usize) -> Vec<usize> {
    let n = x.len();
    let mut out = vec![0; n];
    for (rank, i) in stable_argsort(x).into_iter().enumerate() {
        out[i] = rank * c / n + 1;
    }
    out
}

fn mep(x: &[f64], c: usize) -> Vec<usize> {
    let n = x.len();
    let s = sorted(x);
    let thresholds: Vec<f64> = (1..c).map(|k| s[(k * n).div_ceil(c) - 1]).collect();
    x.iter()
        .map(|&v| 1 + thresholds.iter().filter(|&&t| v > t).count())
        .collect()
}

/// Index of the nearest center; ties go to the lower index.
fn nearest(v: f64, centers: &[f64]) -> usize {
    let mut best = 0;
    for (k, &ck) in centers.iter().enumerate().skip(1) {
        if (v - ck).abs() < (v - centers[best]).abs() {
            best = k;
        }
    }
    best
}

fn kmeans_symbols(
    x: &[f64],
    c: usize,
    options: KMeansOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<usize> {
    let n = x.len();
    let s = sorted(x);
    let mut centers: Vec<f64> = (0..c)
        .map(|k| s[(((k as f64 + 0.5) / c as f64) * n as f64) as usize])
        .collect();

    let mut converged = false;
    let mut shift = f64::INFINITY;
    let mut iterations = 0;
    while iterations < options.max_iterations {
        iterations += 1;
        let mut sums = vec![0.0; c];
        let mut counts = vec![0usize; c];
        for &v in x {
            let k = nearest(v, &centers);
            sums[k] += v;
            counts[k] += 1;
        }
        shift = 0.0;
        for k in 0..c {
            // an empty cluster keeps its center
            if counts[k] > 0 {
                let updated = sums[k] / counts[k] as f64;
                shift = f64::max(shift, (updated - centers[k]).abs());
                centers[k] = updated;
            }
        }
        if shift <= options.tolerance {
            converged = true;
            break;
        }
    }
    tracing::debug!(iterations, shift, converged, "k-means symbolization");
    if !converged {
        diagnostics.push(Degeneracy::KMeansNotConverged { iterations, shift });
    }

    centers.sort_by(f64::total_cmp);
    x.iter().map(|&v| nearest(v, &centers) + 1).collect()
}
