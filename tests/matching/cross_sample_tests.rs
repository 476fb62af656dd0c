// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{assert_relative_eq, gaussian_series, same_value, sine_two_periods};
use embedding_entropy::estimators::approaches::{MatchStrategy, SampleEntropyConfig};
use embedding_entropy::estimators::entropy::Entropy;
use embedding_entropy::estimators::{EntropyEstimator, GlobalValue};

#[test]
fn swapping_the_series_keeps_the_value() {
    let x = gaussian_series(300, 1);
    let y = gaussian_series(220, 2);
    let cfg = SampleEntropyConfig::default();
    let xy = Entropy::cross_sample(x.clone(), y.clone(), cfg).unwrap().estimate();
    let yx = Entropy::cross_sample(y, x, cfg).unwrap().estimate();
    assert_eq!(xy.auxiliary.counts, yx.auxiliary.counts);
    assert_relative_eq!(xy.value, yx.value, max_relative = 1e-12);
}

#[test]
fn all_pairs_are_candidates() {
    let (x, y) = (gaussian_series(120, 3), gaussian_series(80, 4));
    let out = Entropy::cross_sample(x, y, SampleEntropyConfig::default())
        .unwrap()
        .estimate();
    assert_eq!(out.auxiliary.counts.b[0], 120 * 80);
}

#[test]
fn coupled_series_are_more_regular_than_independent_ones() {
    let x = sine_two_periods(300);
    let shifted: Vec<f64> = x.iter().map(|v| v + 0.01).collect();
    let noise = gaussian_series(300, 5);
    let cfg = SampleEntropyConfig::default();
    let coupled = Entropy::cross_sample(x.clone(), shifted, cfg).unwrap().global_value();
    let independent = Entropy::cross_sample(x, noise, cfg).unwrap().global_value();
    assert!(coupled < independent, "{coupled} vs {independent}");
}

#[test]
fn strategies_agree() {
    let x = gaussian_series(500, 6);
    let y = gaussian_series(450, 7);
    let cfg = SampleEntropyConfig::default().with_variance(true);
    let brute_cfg = cfg.with_strategy(MatchStrategy::BruteForce);
    let brute = Entropy::cross_sample(x.clone(), y.clone(), brute_cfg)
        .unwrap()
        .estimate();
    let tree = Entropy::cross_sample(x, y, cfg.with_strategy(MatchStrategy::KdTree))
        .unwrap()
        .estimate();
    assert_eq!(brute.auxiliary.counts, tree.auxiliary.counts);
    assert!(same_value(brute.value, tree.value));
}

#[test]
fn each_series_must_fit_an_extended_vector() {
    let cfg = SampleEntropyConfig::default().with_embedding(3, 4);
    assert!(Entropy::cross_sample(gaussian_series(100, 0), gaussian_series(12, 1), cfg).is_err());
    assert!(Entropy::cross_sample(gaussian_series(13, 0), gaussian_series(100, 1), cfg).is_ok());
}
