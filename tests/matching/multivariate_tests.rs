// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{Array2, assert_abs_diff_eq, gaussian_channels};
use embedding_entropy::estimators::approaches::matching::multivariate::ChannelNormalization;
use embedding_entropy::estimators::approaches::{
    MultivariateCosineEntropyConfig, MultivariateEmbedding, MultivariateSampleEntropyConfig,
};
use embedding_entropy::estimators::entropy::Entropy;
use embedding_entropy::estimators::{EntropyEstimator, GlobalValue};

fn sinusoids(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, 2), |(i, k)| {
        let t = i as f64;
        if k == 0 { (0.5 * t).sin() + 1.5 } else { (0.3 * t).cos() + 2.0 }
    })
}

#[test]
fn multivariate_sample_entropy_of_sinusoids() {
    let cfg = MultivariateSampleEntropyConfig::default();
    let out = Entropy::multivariate_sample(sinusoids(40), cfg).unwrap().estimate();
    assert_eq!((out.auxiliary.matches_m, out.auxiliary.matches_m1), (2, 3));
    assert_abs_diff_eq!(out.value, 0.9942522733438669, epsilon = 1e-10);
}

#[test]
fn z_scoring_removes_scale_and_offset() {
    let data = gaussian_channels(200, 3, 21);
    let scaled = data.mapv(|v| 4.0 * v - 7.0);
    let cfg =
        MultivariateSampleEntropyConfig::default().with_normalization(ChannelNormalization::ZScore);
    let a = Entropy::multivariate_sample(data, cfg.clone()).unwrap().estimate();
    let b = Entropy::multivariate_sample(scaled, cfg).unwrap().estimate();
    assert_eq!(a.auxiliary.matches_m, b.auxiliary.matches_m);
    assert_eq!(a.auxiliary.matches_m1, b.auxiliary.matches_m1);
}

#[test]
fn per_channel_embedding_is_checked() {
    let data = gaussian_channels(50, 2, 0);
    let three = MultivariateEmbedding::new(vec![2, 2, 2], vec![1, 1, 1], 3).unwrap();
    let cfg = MultivariateSampleEntropyConfig::default().with_embedding(three);
    assert!(Entropy::multivariate_sample(data.clone(), cfg).is_err());
    assert!(MultivariateEmbedding::new(vec![2, 2], vec![1], 2).is_err());

    let mixed = MultivariateEmbedding::new(vec![3, 2], vec![2, 1], 2).unwrap();
    let cfg = MultivariateSampleEntropyConfig::default().with_embedding(mixed);
    assert!(Entropy::multivariate_sample(data, cfg).is_ok());
}

#[test]
fn cosine_entropy_of_sinusoids() {
    let est =
        Entropy::multivariate_cosine(sinusoids(40), MultivariateCosineEntropyConfig::default())
            .unwrap();
    let out = est.estimate();
    assert_eq!((out.auxiliary.matches_m, out.auxiliary.matches_m1), (391, 1326));
    assert_abs_diff_eq!(out.value, 0.9965155430801282, epsilon = 1e-10);
    assert_eq!(est.global_value(), out.value);
}

#[test]
fn cosine_entropy_is_bounded_in_bits() {
    for seed in 0..3 {
        let cfg = MultivariateCosineEntropyConfig::default()
            .with_normalization(ChannelNormalization::SubtractMean);
        let v = Entropy::multivariate_cosine(gaussian_channels(150, 3, seed), cfg)
            .unwrap()
            .global_value();
        assert!((0.0..=1.0).contains(&v), "seed {seed}: {v}");
    }
}
