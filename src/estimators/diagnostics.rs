// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric degeneracy reporting.
//!
//! Degenerate inputs (no matching pairs, constant data, empty histogram bins)
//! yield NaN or infinite values following IEEE-754 arithmetic. They are not
//! errors, but each occurrence is logged through `tracing` and recorded on the
//! returned [`EntropyResult`] so that callers can detect silently degenerate
//! values.

use std::fmt;

/// A recoverable numeric degeneracy observed while estimating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Degeneracy {
    /// `A / B` could not be turned into a finite entropy at this dimension.
    UndefinedRatio { dimension: usize, a: f64, b: f64 },
    /// Histogram bins without any observation (dropped from the sum).
    EmptyBins { empty: usize, total: usize },
    /// Bin probabilities did not sum to one (rounded to 6 decimals).
    ProbabilitySumMismatch { sum: f64 },
    /// Data (or a channel of it) has zero spread.
    ZeroVariance { what: &'static str },
    /// No pair of vectors was similar, or all of them were.
    NoSimilarPatterns { probability: f64 },
    /// Lloyd iterations stopped at the iteration limit.
    KMeansNotConverged { iterations: usize, shift: f64 },
    /// No symbol follows any occurrence of a pattern.
    NoTransitions { patterns: usize },
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedRatio { dimension, a, b } => write!(
                f,
                "undefined ratio at dimension {dimension}: A = {a}, B = {b}"
            ),
            Self::EmptyBins { empty, total } => write!(f, "{empty}/{total} bins were empty"),
            Self::ProbabilitySumMismatch { sum } => {
                write!(f, "potential error estimating probabilities (sum = {sum})")
            }
            Self::ZeroVariance { what } => write!(f, "{what} has zero variance"),
            Self::NoSimilarPatterns { probability } => write!(
                f,
                "global probability of similar patterns is {probability}"
            ),
            Self::KMeansNotConverged { iterations, shift } => write!(
                f,
                "k-means did not converge after {iterations} iterations (last shift {shift})"
            ),
            Self::NoTransitions { patterns } => {
                write!(f, "{patterns} pattern(s) have no following symbol")
            }
        }
    }
}

/// Collected diagnostics of one estimation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Degeneracy>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degeneracy and emit it as a `tracing` warning.
    pub fn push(&mut self, degeneracy: Degeneracy) {
        tracing::warn!(%degeneracy, "degenerate entropy estimate");
        self.items.push(degeneracy);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Degeneracy> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Degeneracy> {
        self.items
    }
}

/// Output of an estimator: the scalar, variant-specific auxiliary values and
/// any degeneracies observed on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyResult<A> {
    /// Entropy estimate; NaN or infinite when the estimate is undefined.
    pub value: f64,
    pub auxiliary: A,
    pub diagnostics: Vec<Degeneracy>,
}

impl<A> EntropyResult<A> {
    pub(crate) fn new(value: f64, auxiliary: A, diagnostics: Diagnostics) -> Self {
        Self {
            value,
            auxiliary,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// True when no degeneracy was recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drop the auxiliary values.
    pub fn into_value(self) -> f64 {
        self.value
    }
}
