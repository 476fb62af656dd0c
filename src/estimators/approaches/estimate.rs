// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of counts and probabilities into entropy values.
//!
//! All functions follow IEEE-754 semantics: a zero count gives `+inf` or NaN,
//! never a panic. `0 ln 0` is taken as `0`, and a zero entropy is always `+0.0`.

use ndarray::Array1;

use crate::estimators::diagnostics::{Degeneracy, Diagnostics};
use crate::estimators::utils::LogBase;

use super::matching::counter::MatchCounts;

/// `-ln(a / b) / ln(base)`.
#[inline]
pub fn ratio_entropy(a: f64, b: f64, base: LogBase) -> f64 {
    // `+ 0.0` turns the `-0.0` of `A == B` into `0.0`
    -(a / b).ln() / base.ln() + 0.0
}

/// Per-dimension entropies `-ln(A[k] / B[k])`, recording every undefined
/// (non-finite) dimension.
pub fn ratio_entropies(
    counts: &MatchCounts,
    base: LogBase,
    diagnostics: &mut Diagnostics,
) -> Array1<f64> {
    let mut out = Array1::<f64>::zeros(counts.a.len());
    for (k, (&a, &b)) in counts.a.iter().zip(counts.b.iter()).enumerate() {
        let (a, b) = (a as f64, b as f64);
        let h = ratio_entropy(a, b, base);
        if !h.is_finite() {
            diagnostics.push(Degeneracy::UndefinedRatio { dimension: k, a, b });
        }
        out[k] = h;
    }
    out
}

#[inline]
fn plogp(p: f64) -> f64 {
    if p > 0.0 { p * p.ln() } else { 0.0 }
}

/// Shannon entropy `-sum p ln p / ln(base)`; zero probabilities contribute nothing.
pub fn shannon_entropy(probabilities: &[f64], base: LogBase) -> f64 {
    -probabilities.iter().map(|&p| plogp(p)).sum::<f64>() / base.ln() + 0.0
}

/// Entropy of a Bernoulli(`p`) variable.
pub fn binary_entropy(p: f64, base: LogBase) -> f64 {
    -(plogp(p) + plogp(1.0 - p)) / base.ln() + 0.0
}
