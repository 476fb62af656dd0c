// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tolerance-based matching between delay vectors.
//!
//! Two vectors match when their Chebyshev (max-abs) distance is `<= r`. Within a
//! single set only pairs `i < j` are evaluated (no self-pairs, no double
//! counting); between two sets every `(i, j)` pair is evaluated.

use kiddo::ImmutableKdTree;
use kiddo::traits::DistanceMetric;
use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::estimators::error::{InvalidParameterError, Result};

/// Chebyshev distance metric (L-infinity norm) for kiddo.
pub struct Chebyshev;

impl<const K: usize> DistanceMetric<f64, K> for Chebyshev {
    fn dist(a: &[f64; K], b: &[f64; K]) -> f64 {
        let mut max = 0.0;
        for i in 0..K {
            let diff = (a[i] - b[i]).abs();
            if diff > max {
                max = diff;
            }
        }
        max
    }

    fn dist1(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }
}

/// Max-abs distance between two equally long vectors.
#[inline]
pub fn chebyshev(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0_f64, |acc, (x, y)| acc.max((x - y).abs()))
}

/// Chebyshev match with early exit.
#[inline]
pub fn is_match(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>, r: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= r)
}

/// Whether a match matrix was built within one set or between two sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Strict upper triangle only (`i < j`).
    SelfPairs,
    /// Every `(i, j)` pair.
    Cross,
}

/// Sparse boolean matrix of matching pairs. Each row stores the sorted column
/// indices of its matches.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchIndicatorMatrix {
    rows: Vec<Vec<usize>>,
    n_cols: usize,
    mode: MatchMode,
}

impl MatchIndicatorMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.rows
            .get(i)
            .is_some_and(|row| row.binary_search(&j).is_ok())
    }

    /// Number of `true` entries.
    pub fn count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of pairs that were evaluated: `N (N - 1) / 2` or `Nx Ny`.
    pub fn n_candidates(&self) -> usize {
        match self.mode {
            MatchMode::SelfPairs => self.n_rows() * self.n_rows().saturating_sub(1) / 2,
            MatchMode::Cross => self.n_rows() * self.n_cols,
        }
    }

    /// Iterate `(i, j)` in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&j| (i, j)))
    }

    pub fn to_dense(&self) -> Array2<bool> {
        let mut out = Array2::from_elem((self.n_rows(), self.n_cols), false);
        for (i, j) in self.pairs() {
            out[(i, j)] = true;
        }
        out
    }
}

/// All matching pairs `i < j` within one set (brute force, O(N^2)).
pub fn self_match_matrix(set: ArrayView2<'_, f64>, r: f64) -> MatchIndicatorMatrix {
    let n = set.nrows();
    let rows = (0..n)
        .map(|i| {
            let a = set.row(i);
            ((i + 1)..n).filter(|&j| is_match(a, set.row(j), r)).collect()
        })
        .collect();
    MatchIndicatorMatrix {
        rows,
        n_cols: n,
        mode: MatchMode::SelfPairs,
    }
}

/// Same result as [`self_match_matrix`] for a single column of values, using a
/// kd-tree range query to find candidates before the exact `<= r` check.
pub fn self_match_matrix_indexed(values: &[f64], r: f64) -> MatchIndicatorMatrix {
    MatchIndicatorMatrix {
        rows: indexed_rows(values, values, r, true),
        n_cols: values.len(),
        mode: MatchMode::SelfPairs,
    }
}

/// Brute-force [`match_matrix`] for two single columns of values.
pub fn match_matrix_columns(values_a: &[f64], values_b: &[f64], r: f64) -> MatchIndicatorMatrix {
    let rows = values_a
        .iter()
        .map(|&a| {
            values_b
                .iter()
                .enumerate()
                .filter(|&(_, &b)| (a - b).abs() <= r)
                .map(|(j, _)| j)
                .collect()
        })
        .collect();
    MatchIndicatorMatrix {
        rows,
        n_cols: values_b.len(),
        mode: MatchMode::Cross,
    }
}

/// Same result as [`match_matrix_columns`], using a kd-tree.
pub fn match_matrix_indexed(values_a: &[f64], values_b: &[f64], r: f64) -> MatchIndicatorMatrix {
    MatchIndicatorMatrix {
        rows: indexed_rows(values_a, values_b, r, false),
        n_cols: values_b.len(),
        mode: MatchMode::Cross,
    }
}

fn indexed_rows(query: &[f64], reference: &[f64], r: f64, upper_only: bool) -> Vec<Vec<usize>> {
    let points: Vec<[f64; 1]> = reference.iter().map(|&v| [v]).collect();
    let tree: ImmutableKdTree<f64, 1> = ImmutableKdTree::new_from_slice(&points);

    // Slightly inflated radius; the exact comparison below decides membership.
    let r_eps = r * (1.0 + 1e-9) + 1e-12;
    query
        .iter()
        .enumerate()
        .map(|(i, &q)| {
            let mut row: Vec<usize> = tree
                .within_unsorted::<Chebyshev>(&[q], r_eps)
                .into_iter()
                .map(|nb| nb.item as usize)
                .filter(|&j| (!upper_only || j > i) && (q - reference[j]).abs() <= r)
                .collect();
            row.sort_unstable();
            row
        })
        .collect()
}

/// All matching pairs between two sets of equal width.
pub fn match_matrix(
    set_a: ArrayView2<'_, f64>,
    set_b: ArrayView2<'_, f64>,
    r: f64,
) -> Result<MatchIndicatorMatrix> {
    check_widths(set_a, set_b)?;
    let rows = set_a
        .rows()
        .into_iter()
        .map(|a| {
            (0..set_b.nrows())
                .filter(|&j| is_match(a, set_b.row(j), r))
                .collect()
        })
        .collect();
    Ok(MatchIndicatorMatrix {
        rows,
        n_cols: set_b.nrows(),
        mode: MatchMode::Cross,
    })
}

/// Count matching pairs `i < j` without materialising the matrix.
pub fn count_self_matches(set: ArrayView2<'_, f64>, r: f64) -> usize {
    let n = set.nrows();
    let mut count = 0usize;
    for i in 0..n {
        let a = set.row(i);
        for j in (i + 1)..n {
            if is_match(a, set.row(j), r) {
                count += 1;
            }
        }
    }
    count
}

/// Chebyshev distances of all pairs `i < j`, row-major.
pub fn self_distances(set: ArrayView2<'_, f64>) -> Vec<f64> {
    let n = set.nrows();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        let a = set.row(i);
        for j in (i + 1)..n {
            out.push(chebyshev(a, set.row(j)));
        }
    }
    out
}

/// Chebyshev distances of all `(i, j)` pairs, row-major.
pub fn cross_distances(set_a: ArrayView2<'_, f64>, set_b: ArrayView2<'_, f64>) -> Result<Vec<f64>> {
    check_widths(set_a, set_b)?;
    let mut out = Vec::with_capacity(set_a.nrows() * set_b.nrows());
    for a in set_a.rows() {
        for b in set_b.rows() {
            out.push(chebyshev(a, b));
        }
    }
    Ok(out)
}

/// Angular distance `acos(cos_sim) / pi` in `[0, 1]`.
///
/// NaN when either vector has zero norm.
pub fn angular_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let dot = a.dot(&b);
    let norm = a.dot(&a).sqrt() * b.dot(&b).sqrt();
    if norm == 0.0 {
        return f64::NAN;
    }
    (dot / norm).clamp(-1.0, 1.0).acos() / std::f64::consts::PI
}

/// Count pairs `i < j` whose angular distance is strictly below `r`.
pub fn count_self_similar(set: ArrayView2<'_, f64>, r: f64) -> usize {
    let n = set.nrows();
    let norms: Vec<f64> = set.rows().into_iter().map(|v| v.dot(&v).sqrt()).collect();
    let mut count = 0usize;
    for i in 0..n {
        if norms[i] == 0.0 {
            continue;
        }
        let a = set.row(i);
        for j in (i + 1)..n {
            if norms[j] == 0.0 {
                continue;
            }
            let cos = (a.dot(&set.row(j)) / (norms[i] * norms[j])).clamp(-1.0, 1.0);
            if cos.acos() / std::f64::consts::PI < r {
                count += 1;
            }
        }
    }
    count
}

fn check_widths(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> Result<()> {
    if a.ncols() != b.ncols() {
        return Err(InvalidParameterError::DimensionMismatch {
            name: "delay vector width",
            expected: a.ncols(),
            got: b.ncols(),
        });
    }
    Ok(())
}
