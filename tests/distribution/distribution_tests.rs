// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{assert_abs_diff_eq, gaussian_series};
use embedding_entropy::estimators::approaches::{BinRule, DistributionConfig};
use embedding_entropy::estimators::entropy::Entropy;
use embedding_entropy::estimators::{Degeneracy, EntropyEstimator, GlobalValue, LogBase};

fn alternating(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i % 2) as f64).collect()
}

// Concentration holds for regular series; identical noise scores close to independent noise.
#[test]
fn regular_series_cross_distances_concentrate() {
    let x = alternating(100);
    let out = Entropy::cross_distribution(x.clone(), x, DistributionConfig::default())
        .unwrap()
        .estimate();
    assert_eq!(out.auxiliary.bins, 15);
    assert!(out.auxiliary.probabilities[0] >= 0.49);
    assert!(out.value < 0.3);

    let (y1, y2) = (gaussian_series(100, 1), gaussian_series(100, 2));
    let independent = Entropy::cross_distribution(y1, y2, DistributionConfig::default())
        .unwrap()
        .global_value();
    assert!(independent > out.value);
    assert!(independent > 0.5 && independent <= 1.0, "{independent}");
}

#[test]
fn normalized_value_does_not_depend_on_base() {
    let x = gaussian_series(300, 3);
    let nats = DistributionConfig::default().with_base(LogBase::Natural);
    let a = Entropy::distribution(x.clone(), nats).unwrap().global_value();
    let b = Entropy::distribution(x, DistributionConfig::default()).unwrap().global_value();
    assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    assert!(a > 0.0 && a <= 1.0);
}

#[test]
fn distance_sets_have_expected_sizes() {
    let cfg = DistributionConfig::default().with_embedding(3, 2);
    let single = Entropy::distribution(gaussian_series(50, 0), cfg).unwrap();
    // 50 - 4 = 46 vectors
    assert_eq!(single.distances().len(), 46 * 45 / 2);
    let cross =
        Entropy::cross_distribution(gaussian_series(50, 0), gaussian_series(30, 1), cfg).unwrap();
    assert_eq!(cross.distances().len(), 46 * 26);
}

#[test]
fn unnormalized_value_is_histogram_entropy() {
    let cfg = DistributionConfig::default().with_bins(BinRule::Fixed(8)).with_normalize(false);
    let out = Entropy::distribution(gaussian_series(200, 5), cfg).unwrap().estimate();
    let h: f64 = -out.auxiliary.probabilities.iter().map(|p| p * p.log2()).sum::<f64>();
    assert_eq!(out.auxiliary.bins, 8);
    assert_abs_diff_eq!(out.value, h, epsilon = 1e-12);
    assert!(out.value <= 3.0 + 1e-12);
}

#[test]
fn constant_series_is_degenerate() {
    let out = Entropy::distribution(vec![2.5; 40], DistributionConfig::default())
        .unwrap()
        .estimate();
    assert_eq!(out.value, 0.0);
    assert!(out.diagnostics.iter().any(|d| matches!(d, Degeneracy::ZeroVariance { .. })));
}

#[test]
fn unknown_rule_or_short_series_fail() {
    assert!("nope".parse::<BinRule>().is_err());
    let cfg = DistributionConfig::default().with_bins(BinRule::Fixed(1));
    assert!(Entropy::distribution(gaussian_series(40, 0), cfg).is_err());
    let cfg = DistributionConfig::default().with_embedding(2, 10);
    assert!(Entropy::distribution(gaussian_series(11, 0), cfg).is_err());
}
