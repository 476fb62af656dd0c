// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{assert_abs_diff_eq, gaussian_series, uniform_series};
use embedding_entropy::estimators::InvalidParameterError;
use embedding_entropy::estimators::approaches::distribution::{BinRule, bin_count, histogram};
use embedding_entropy::estimators::diagnostics::{Degeneracy, Diagnostics};

#[test]
fn rule_counts_depend_only_on_length_for_sturges_rice_sqrt() {
    for data in [gaussian_series(1000, 0), uniform_series(1000, -5.0, 5.0, 1)] {
        assert_eq!(bin_count(&data, BinRule::Sturges).unwrap(), 11);
        assert_eq!(bin_count(&data, BinRule::Sqrt).unwrap(), 32);
        assert_eq!(bin_count(&data, BinRule::Rice).unwrap(), 20);
    }
}

#[test]
fn rule_names_parse() {
    assert_eq!("Sturges".parse::<BinRule>().unwrap(), BinRule::Sturges);
    assert_eq!(" doanes ".parse::<BinRule>().unwrap(), BinRule::Doanes);
    assert_eq!("25".parse::<BinRule>().unwrap(), BinRule::Fixed(25));
    assert!(matches!(
        "freedman".parse::<BinRule>(),
        Err(InvalidParameterError::UnknownMethod { .. })
    ));
    assert!("1".parse::<BinRule>().is_err());
}

#[test]
fn histogram_keeps_every_sample() {
    let data = gaussian_series(2000, 4);
    let mut diag = Diagnostics::new();
    let h = histogram(&data, 20, &mut diag).unwrap();
    assert_eq!(h.bins(), 20);
    assert_eq!(h.total(), 2000);
    assert_eq!(h.edges.len(), 21);
    let p = h.probabilities(&mut diag);
    assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn empty_bins_are_dropped_and_reported() {
    // two clusters far apart leave the middle bins empty
    let mut data = vec![0.0; 10];
    data.extend(vec![1.0; 10]);
    let mut diag = Diagnostics::new();
    let h = histogram(&data, 5, &mut diag).unwrap();
    assert_eq!(h.counts, vec![10, 0, 0, 0, 10]);
    let p = h.probabilities(&mut diag);
    assert_eq!(p, vec![0.5, 0.5]);
    assert!(diag.iter().any(|d| matches!(d, Degeneracy::EmptyBins { empty: 3, total: 5 })));
}
