// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::array;

use crate::test_helpers::{assert_abs_diff_eq, gaussian_series, same_value, sine_two_periods};
use embedding_entropy::estimators::approaches::{MatchStrategy, SampleEntropyConfig, Tolerance};
use embedding_entropy::estimators::entropy::Entropy;
use embedding_entropy::estimators::{
    Degeneracy, DimensionValues, EntropyEstimator, GlobalValue, LogBase,
};

#[test]
fn sine_counts_and_value() {
    let est = Entropy::sample(sine_two_periods(200), SampleEntropyConfig::default()).unwrap();
    let out = est.estimate();
    assert_eq!(out.auxiliary.counts.a, array![2771, 2374, 1986]);
    assert_eq!(out.auxiliary.counts.b, array![19900, 2754, 2362]);
    assert_abs_diff_eq!(out.value, 0.17338615215218978, epsilon = 1e-12);
    assert!(out.value < std::f64::consts::LN_2);
    assert!(out.is_clean());
}

#[test]
fn noise_is_less_regular_than_sine() {
    let sine = Entropy::sample(sine_two_periods(200), SampleEntropyConfig::default()).unwrap();
    for seed in [1, 2, 3] {
        let noise =
            Entropy::sample(gaussian_series(1000, seed), SampleEntropyConfig::default()).unwrap();
        let h = noise.global_value();
        assert!(h > sine.global_value(), "seed {seed}: {h}");
        assert!(h > 1.8 && h < 2.6, "seed {seed}: {h}");
    }
}

#[test]
fn repeated_estimates_are_identical() {
    let config = SampleEntropyConfig::default().with_variance(true);
    let est = Entropy::sample(gaussian_series(400, 42), config).unwrap();
    assert_eq!(est.estimate(), est.estimate());
}

#[test]
fn counts_bounded_by_pair_count() {
    let n = 300;
    for m in 1..=4 {
        let cfg = SampleEntropyConfig::default().with_embedding(m, 2);
        let out = Entropy::sample(gaussian_series(n, 7), cfg).unwrap().estimate();
        let (a, b) = (&out.auxiliary.counts.a, &out.auxiliary.counts.b);
        assert_eq!(b[0], n * (n - 1) / 2);
        for k in 0..=m {
            assert!(b[k] <= n * (n - 1) / 2);
            // a pair extended to k + 1 samples was first extendable at k
            if k >= 1 {
                assert!(a[k] <= b[k]);
            }
        }
    }
}

#[test]
fn counts_grow_with_radius() {
    for seed in 0..4 {
        let x = gaussian_series(250, seed);
        let mut previous: Option<(usize, usize)> = None;
        for r in [0.05, 0.1, 0.2, 0.4, 0.8] {
            let cfg = SampleEntropyConfig::default().with_tolerance(Tolerance::Absolute(r));
            let c = Entropy::sample(x.clone(), cfg).unwrap().estimate().auxiliary.counts;
            let now = (c.a_m(), c.b_m());
            if let Some((a, b)) = previous {
                assert!(now.0 >= a && now.1 >= b, "seed {seed}, r {r}");
            }
            previous = Some(now);
        }
    }
}

#[test]
fn monotone_series_has_undefined_value() {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let cfg = SampleEntropyConfig::default().with_tolerance(Tolerance::Absolute(0.5));
    let out = Entropy::sample(x, cfg).unwrap().estimate();
    assert!(out.value.is_nan());
    assert!(
        out.diagnostics
            .iter()
            .any(|d| matches!(d, Degeneracy::UndefinedRatio { dimension: 2, .. }))
    );
}

#[test]
fn kd_tree_matches_brute_force() {
    let x = gaussian_series(600, 9);
    let base = SampleEntropyConfig::default().with_variance(true);
    let brute = Entropy::sample(x.clone(), base.with_strategy(MatchStrategy::BruteForce))
        .unwrap()
        .estimate();
    let tree = Entropy::sample(x, base.with_strategy(MatchStrategy::KdTree))
        .unwrap()
        .estimate();
    assert_eq!(brute.auxiliary.counts, tree.auxiliary.counts);
    assert!(same_value(brute.value, tree.value));
    assert_eq!(brute.auxiliary.variance, tree.auxiliary.variance);
}

#[test]
fn dimension_values_follow_the_base() {
    let x = sine_two_periods(200);
    let nats = Entropy::sample(x.clone(), SampleEntropyConfig::default()).unwrap();
    let bits = Entropy::sample(x, SampleEntropyConfig::default().with_base(LogBase::BITS)).unwrap();
    let (n, b) = (nats.dimension_values(), bits.dimension_values());
    assert_eq!(n.len(), 3);
    for k in 0..3 {
        assert_abs_diff_eq!(b[k], n[k] / std::f64::consts::LN_2, epsilon = 1e-12);
    }
}

#[test]
fn invalid_configurations_are_rejected() {
    let x = gaussian_series(50, 0);
    let cfg = SampleEntropyConfig::default();
    assert!(Entropy::sample(x.clone(), cfg.with_embedding(0, 1)).is_err());
    assert!(Entropy::sample(x.clone(), cfg.with_embedding(2, 0)).is_err());
    assert!(Entropy::sample(x.clone(), cfg.with_embedding(5, 10)).is_err());
    assert!(Entropy::sample(x.clone(), cfg.with_tolerance(Tolerance::Absolute(-0.1))).is_err());
    assert!(Entropy::sample(x, cfg.with_base(LogBase::Base(0.0))).is_err());
    assert!(Entropy::sample(vec![1.0; 10], cfg).is_err());
}
