// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, s};

use embedding_entropy::estimators::approaches::common_nd::dataset::{
    MIN_SAMPLES, MultivariateData, Sequence,
};
use embedding_entropy::estimators::error::InvalidParameterError;

#[test]
fn sequence_length_boundary() {
    let short: Vec<f64> = (0..MIN_SAMPLES).map(|i| i as f64).collect();
    assert!(matches!(
        Sequence::new(short),
        Err(InvalidParameterError::SequenceTooShort { min: 10, got: 10 })
    ));
    let ok: Vec<f64> = (0..=MIN_SAMPLES).map(|i| i as f64).collect();
    assert_eq!(Sequence::new(ok).unwrap().len(), 11);
}

#[test]
fn non_finite_samples_are_rejected_with_their_index() {
    let mut v = vec![0.5; 20];
    v[7] = f64::INFINITY;
    assert!(matches!(
        Sequence::new(v),
        Err(InvalidParameterError::NonFiniteSample { index: 7, .. })
    ));
    let mut m = Array2::<f64>::zeros((12, 2));
    m[(3, 1)] = f64::NAN;
    assert!(MultivariateData::new(m).is_err());
}

#[test]
fn strided_input_is_made_contiguous() {
    let base = Array1::from_iter((0..40).map(|i| i as f64));
    let strided = base.slice(s![..;2]).to_owned();
    let seq = Sequence::new(strided).unwrap();
    assert_eq!(seq.as_slice()[3], 6.0);
}

#[test]
fn channels_must_share_length() {
    let a = Sequence::new(vec![1.0; 12]).unwrap();
    let b = Sequence::new(vec![2.0; 13]).unwrap();
    assert!(matches!(
        MultivariateData::from_channels(&[a.clone(), b]),
        Err(InvalidParameterError::DimensionMismatch { .. })
    ));
    let data = MultivariateData::from_channels(&[a.clone(), a]).unwrap();
    assert_eq!((data.n_samples(), data.n_channels()), (12, 2));
    assert!(MultivariateData::from_channels(&[]).is_err());
}
