// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::test_helpers::{gaussian_series, uniform_series};
use embedding_entropy::estimators::approaches::common_nd::distance::{
    match_matrix, match_matrix_indexed, self_distances, self_match_matrix,
    self_match_matrix_indexed,
};

fn column(x: &[f64]) -> Array2<f64> {
    Array2::from_shape_vec((x.len(), 1), x.to_vec()).unwrap()
}

#[test]
fn kd_tree_and_brute_force_agree_on_noise() {
    for seed in 0..3 {
        let x = gaussian_series(500, seed);
        let col = column(&x);
        for r in [0.0, 0.05, 0.2, 1.0] {
            assert_eq!(
                self_match_matrix(col.view(), r),
                self_match_matrix_indexed(&x, r),
                "seed {seed}, r {r}"
            );
        }
    }
}

#[test]
fn kd_tree_handles_exact_ties() {
    // quantized values: many pairs sit exactly at distance r
    let x: Vec<f64> = uniform_series(300, 0.0, 10.0, 11).iter().map(|v| v.floor() * 0.5).collect();
    let col = column(&x);
    for r in [0.5, 1.0] {
        assert_eq!(self_match_matrix(col.view(), r), self_match_matrix_indexed(&x, r));
        let y: Vec<f64> = x.iter().rev().take(120).copied().collect();
        let brute = match_matrix(col.view(), column(&y).view(), r).unwrap();
        assert_eq!(brute, match_matrix_indexed(&x, &y, r));
    }
}

#[test]
fn self_matrix_never_exceeds_pair_count() {
    let x = uniform_series(60, -1.0, 1.0, 3);
    let mm = self_match_matrix(column(&x).view(), 10.0);
    assert_eq!(mm.count(), 60 * 59 / 2);
    assert_eq!(mm.n_candidates(), 60 * 59 / 2);
    assert_eq!(self_distances(column(&x).view()).len(), mm.count());
}
