// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Histogram bin-count rules and equal-width histograms.

use std::str::FromStr;

use crate::estimators::diagnostics::{Degeneracy, Diagnostics};
use crate::estimators::error::{InvalidParameterError, Result};
use crate::estimators::utils::stats;

/// Rule choosing the number of histogram bins from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinRule {
    /// `ceil(log2 N + 1)`
    #[default]
    Sturges,
    /// `ceil(2 N^(1/3))`
    Rice,
    /// `ceil(sqrt N)`
    Sqrt,
    /// Doane's skewness-corrected Sturges rule.
    Doanes,
    /// A fixed bin count, greater than one.
    Fixed(usize),
}

impl BinRule {
    pub(crate) fn validate(self) -> Result<Self> {
        match self {
            Self::Fixed(n) if n <= 1 => Err(InvalidParameterError::out_of_range(
                "bins",
                n as f64,
                "an integer > 1",
            )),
            _ => Ok(self),
        }
    }
}

impl FromStr for BinRule {
    type Err = InvalidParameterError;

    /// Case-insensitive rule name, or a plain integer for [`BinRule::Fixed`].
    fn from_str(s: &str) -> Result<Self> {
        let rule = match s.trim().to_ascii_lowercase().as_str() {
            "sturges" => Self::Sturges,
            "rice" => Self::Rice,
            "sqrt" => Self::Sqrt,
            "doanes" | "doane" => Self::Doanes,
            other => match other.parse::<usize>() {
                Ok(n) => Self::Fixed(n),
                Err(_) => {
                    return Err(InvalidParameterError::UnknownMethod {
                        kind: "bin rule",
                        name: s.to_string(),
                        expected: "sturges, rice, sqrt, doanes or an integer > 1",
                    });
                }
            },
        };
        rule.validate()
    }
}

/// Number of bins `rule` yields for `data`.
pub fn bin_count(data: &[f64], rule: BinRule) -> Result<usize> {
    rule.validate()?;
    if data.is_empty() {
        return Err(InvalidParameterError::EmptyData { name: "distances" });
    }
    let n = data.len() as f64;
    let bins = match rule {
        BinRule::Sturges => (n.log2() + 1.0).ceil(),
        BinRule::Rice => (2.0 * n.cbrt()).ceil(),
        BinRule::Sqrt => n.sqrt().ceil(),
        // Below three points the skewness correction is undefined.
        BinRule::Doanes if data.len() < 3 => (n.log2() + 1.0).ceil(),
        BinRule::Doanes => {
            let sigma = (6.0 * (n - 2.0) / ((n + 1.0) * (n + 3.0))).sqrt();
            let g1 = stats::skewness(data);
            (1.0 + n.log2() + (1.0 + g1.abs() / sigma).log2()).ceil()
        }
        BinRule::Fixed(n) => return Ok(n),
    };
    Ok(bins as usize)
}

/// Equal-width histogram over `[min, max]`; the last bin is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub counts: Vec<usize>,
    /// `bins + 1` edges.
    pub edges: Vec<f64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Relative frequencies of the non-empty bins, in bin order.
    ///
    /// Empty bins are reported as [`Degeneracy::EmptyBins`]; a sum that does
    /// not round to one at six decimals as [`Degeneracy::ProbabilitySumMismatch`].
    pub fn probabilities(&self, diagnostics: &mut Diagnostics) -> Vec<f64> {
        let total = self.total() as f64;
        let probs: Vec<f64> = self
            .counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| c as f64 / total)
            .collect();
        let empty = self.bins() - probs.len();
        if empty > 0 {
            diagnostics.push(Degeneracy::EmptyBins {
                empty,
                total: self.bins(),
            });
        }
        let sum: f64 = probs.iter().sum();
        if (sum * 1e6).round() / 1e6 != 1.0 {
            diagnostics.push(Degeneracy::ProbabilitySumMismatch { sum });
        }
        probs
    }
}

/// Histogram of `data` with `bins` equal-width bins.
///
/// Constant data lands in the first bin and is reported as
/// [`Degeneracy::ZeroVariance`].
pub fn histogram(data: &[f64], bins: usize, diagnostics: &mut Diagnostics) -> Result<Histogram> {
    if bins == 0 {
        return Err(InvalidParameterError::NonPositive { name: "bins" });
    }
    let (lo, hi) = stats::min_max(data).ok_or(InvalidParameterError::EmptyData {
        name: "histogram data",
    })?;
    let mut counts = vec![0usize; bins];

    if hi == lo {
        diagnostics.push(Degeneracy::ZeroVariance { what: "histogram data" });
        counts[0] = data.len();
        let edges = (0..=bins).map(|k| lo + k as f64).collect();
        return Ok(Histogram { counts, edges });
    }

    let width = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|k| lo + k as f64 * width).collect();
    edges.push(hi);

    let scale = bins as f64 / (hi - lo);
    for &v in data {
        let mut k = (((v - lo) * scale) as usize).min(bins - 1);
        // Rounding in the index computation can disagree with the edges.
        if k > 0 && v < edges[k] {
            k -= 1;
        } else if k + 1 < bins && v >= edges[k + 1] {
            k += 1;
        }
        counts[k] += 1;
    }
    tracing::trace!(bins, lo, hi, "histogram");
    Ok(Histogram { counts, edges })
}
