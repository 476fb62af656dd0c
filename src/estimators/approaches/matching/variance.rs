// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::counter::{MatchLengths, PairMatch};

/// Variance of the conditional probability `CP = A / B` at dimension `m`.
///
/// `Vcp = CP (1 - CP) / B + (Ka - Kb CP^2) / B^2`, where `Ka` counts unordered
/// pairs of `A`-matches that share an index within `m tau` samples and `Kb`
/// does the same for `B`-matches within `(m - 1) tau` samples. With fewer than
/// two matches the corresponding overlap count is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalVariance {
    pub vcp: f64,
    pub ka: usize,
    pub kb: usize,
}

fn overlaps(p: &PairMatch, q: &PairMatch, threshold: usize) -> bool {
    let near = |a: usize, b: usize| a.abs_diff(b) <= threshold;
    near(q.i, p.i) || near(q.j, p.i) || near(q.i, p.j) || near(q.j, p.j)
}

/// Number of unordered overlapping pairs. Quadratic in the number of matches.
fn overlap_count(pairs: &[&PairMatch], threshold: usize) -> usize {
    if pairs.len() < 2 {
        return 0;
    }
    let mut count = 0;
    for (k, p) in pairs.iter().enumerate() {
        count += pairs[k + 1..]
            .iter()
            .filter(|q| overlaps(p, q, threshold))
            .count();
    }
    count
}

pub fn conditional_variance(lengths: &MatchLengths) -> ConditionalVariance {
    let params = lengths.params();
    let (m, tau) = (params.m(), params.tau());

    let a_pairs: Vec<&PairMatch> = lengths.a_pairs().collect();
    let b_pairs: Vec<&PairMatch> = lengths.b_pairs().collect();
    let ka = overlap_count(&a_pairs, m * tau);
    let kb = overlap_count(&b_pairs, (m - 1) * tau);

    let a = a_pairs.len() as f64;
    let b = b_pairs.len() as f64;
    let cp = a / b;
    let vcp = cp * (1.0 - cp) / b + (ka as f64 - kb as f64 * cp * cp) / (b * b);
    ConditionalVariance { vcp, ka, kb }
}
