// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{Array2, gaussian_series, same_value, sine_two_periods};
use embedding_entropy::estimators::approaches::SampleEntropyConfig;
use embedding_entropy::estimators::entropy::Entropy;
use embedding_entropy::estimators::GlobalValue;

#[test]
fn rows_match_individual_estimates() {
    let rows = [sine_two_periods(200), gaussian_series(200, 1), gaussian_series(200, 2)];
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    let data = Array2::from_shape_vec((3, 200), flat).unwrap();
    let cfg = SampleEntropyConfig::default();

    let batch = Entropy::sample_rows(data, cfg).unwrap();
    assert_eq!(batch.n_rows(), 3);
    let values = batch.global_values();
    for (row, &v) in rows.iter().zip(values.iter()) {
        let single = Entropy::sample(row.clone(), cfg).unwrap().global_value();
        assert!(same_value(v, single));
    }
    let estimates = batch.estimates();
    assert_eq!(estimates[0].auxiliary.counts.b[2], 2362);
}

#[test]
fn one_short_row_fails_the_batch() {
    let data = Array2::from_shape_fn((4, 12), |(i, j)| (i * j) as f64);
    let cfg = SampleEntropyConfig::default().with_embedding(2, 6);
    assert!(Entropy::sample_rows(data, cfg).is_err());
}
