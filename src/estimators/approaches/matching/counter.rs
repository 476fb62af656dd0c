// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Match counting by delay-wise extension.
//!
//! Counting starts from one-sample matches (`|x[i] - y[j]| <= r`) and extends
//! each matching pair one delay at a time while the samples keep matching. A
//! pair can only match at dimension `k + 1` if it already matches at `k`, so the
//! candidates for the next dimension are exactly the survivors of the previous
//! one. The extension budget of row `i` shrinks near the end of the series so
//! that no sample past the boundary is ever read.

use ndarray::Array1;

use super::super::common_nd::distance::{MatchIndicatorMatrix, MatchMode};
use super::super::common_nd::embedding::EmbeddingParameters;

/// Matched length of one seed pair, in samples (`1..=m+1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairMatch {
    pub i: usize,
    pub j: usize,
    pub length: usize,
}

/// Per-pair matched lengths for every one-sample match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchLengths {
    pairs: Vec<PairMatch>,
    n_x: usize,
    n_y: usize,
    n_candidates: usize,
    params: EmbeddingParameters,
}

/// `A[k]` and `B[k]` for `k = 0..=m`.
///
/// `B[k]` counts pairs matching over `k` samples that can still be extended by
/// one delay (for `k = 0`, every evaluated pair); `A[k]` counts pairs matching
/// over `k + 1` samples. The sample entropy at dimension `m` is
/// `-ln(A[m] / B[m])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCounts {
    pub a: Array1<usize>,
    pub b: Array1<usize>,
}

impl MatchCounts {
    /// `A` at the embedding dimension (matches of length `m + 1`).
    pub fn a_m(&self) -> usize {
        self.a[self.a.len() - 1]
    }

    /// `B` at the embedding dimension (matches of length `m`).
    pub fn b_m(&self) -> usize {
        self.b[self.b.len() - 1]
    }
}

impl MatchLengths {
    pub fn pairs(&self) -> &[PairMatch] {
        &self.pairs
    }

    pub fn params(&self) -> EmbeddingParameters {
        self.params
    }

    /// Whether both indices of a pair leave room for `k` more delays.
    fn extendable(&self, p: &PairMatch, k: usize) -> bool {
        let reach = k * self.params.tau();
        p.i + reach < self.n_x && p.j + reach < self.n_y
    }

    pub fn counts(&self) -> MatchCounts {
        let m = self.params.m();
        let mut a = Array1::<usize>::zeros(m + 1);
        let mut b = Array1::<usize>::zeros(m + 1);
        b[0] = self.n_candidates;
        for p in &self.pairs {
            for k in 0..=m {
                if p.length > k {
                    a[k] += 1;
                }
                if k >= 1 && p.length >= k && self.extendable(p, k) {
                    b[k] += 1;
                }
            }
        }
        MatchCounts { a, b }
    }

    /// Pairs matching over `m + 1` samples.
    pub(crate) fn a_pairs(&self) -> impl Iterator<Item = &PairMatch> {
        let m = self.params.m();
        self.pairs.iter().filter(move |p| p.length > m)
    }

    /// Pairs matching over `m` samples with room for one more delay.
    pub(crate) fn b_pairs(&self) -> impl Iterator<Item = &PairMatch> {
        let m = self.params.m();
        self.pairs
            .iter()
            .filter(move |p| p.length >= m && self.extendable(p, m))
    }
}

/// Extend every seed pair of `seeds` delay by delay.
///
/// `seeds` must hold the one-sample matches of `x` against `y` (for self
/// matching `y` is `x` and `seeds` is strictly upper triangular).
pub fn extend_matches(
    x: &[f64],
    y: &[f64],
    seeds: &MatchIndicatorMatrix,
    params: EmbeddingParameters,
    r: f64,
) -> MatchLengths {
    let (m, tau) = (params.m(), params.tau());
    let (n_x, n_y) = (x.len(), y.len());
    debug_assert_eq!(seeds.n_rows(), n_x);
    debug_assert_eq!(seeds.n_cols(), n_y);
    debug_assert!(seeds.mode() == MatchMode::Cross || n_x == n_y);

    let mut pairs = Vec::with_capacity(seeds.count());
    for i in 0..seeds.n_rows() {
        let budget = m.min((n_x - 1 - i) / tau);
        for &j in seeds.row(i) {
            let mut length = 1;
            for k in 1..=budget {
                let yj = j + k * tau;
                if yj >= n_y || (x[i + k * tau] - y[yj]).abs() > r {
                    break;
                }
                length += 1;
            }
            pairs.push(PairMatch { i, j, length });
        }
    }
    MatchLengths {
        pairs,
        n_x,
        n_y,
        n_candidates: seeds.n_candidates(),
        params,
    }
}

/// Convenience wrapper returning only the counts.
pub fn count_matches(
    x: &[f64],
    y: &[f64],
    seeds: &MatchIndicatorMatrix,
    params: EmbeddingParameters,
    r: f64,
) -> MatchCounts {
    extend_matches(x, y, seeds, params, r).counts()
}
