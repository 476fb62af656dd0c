// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};

use crate::estimators::approaches::common_nd::dataset::{MultivariateData, Sequence};
use crate::estimators::approaches::distribution::{
    CrossDistributionEntropy, DistributionConfig, DistributionEntropy,
};
use crate::estimators::approaches::matching::batch::SampleEntropyBatchRows;
use crate::estimators::approaches::matching::cosine::{
    MultivariateCosineEntropy, MultivariateCosineEntropyConfig,
};
use crate::estimators::approaches::matching::cross_sample::CrossSampleEntropy;
use crate::estimators::approaches::matching::multivariate::{
    MultivariateSampleEntropy, MultivariateSampleEntropyConfig,
};
use crate::estimators::approaches::matching::sample::{SampleEntropy, SampleEntropyConfig};
use crate::estimators::approaches::symbolic::{SymbolicDynamicConfig, SymbolicDynamicEntropy};
use crate::estimators::error::Result;

/// Entropy estimation methods for time series
///
/// This struct provides static methods for creating entropy estimators. Each
/// one validates the data and the configuration eagerly, so a returned
/// estimator always produces a value (possibly NaN or infinite, with
/// diagnostics) when estimated.
pub struct Entropy;

impl Entropy {
    /// Creates a sample entropy estimator for a single series
    ///
    /// # Arguments
    ///
    /// * `data` - More than 10 finite samples
    /// * `config` - Embedding, tolerance and log base; see [`SampleEntropyConfig`]
    ///
    /// # Errors
    ///
    /// Fails when the series is too short, holds non-finite samples, or
    /// `m * tau >= N`.
    pub fn sample(
        data: impl Into<Array1<f64>>,
        config: SampleEntropyConfig,
    ) -> Result<SampleEntropy> {
        SampleEntropy::new(Sequence::new(data)?, config)
    }

    /// Creates a cross-sample entropy estimator between two series
    ///
    /// A relative tolerance is resolved against the pooled standard deviation
    /// of both series.
    pub fn cross_sample(
        x: impl Into<Array1<f64>>,
        y: impl Into<Array1<f64>>,
        config: SampleEntropyConfig,
    ) -> Result<CrossSampleEntropy> {
        CrossSampleEntropy::new(Sequence::new(x)?, Sequence::new(y)?, config)
    }

    /// Sample entropy of each row of `data`.
    pub fn sample_rows(
        data: Array2<f64>,
        config: SampleEntropyConfig,
    ) -> Result<SampleEntropyBatchRows> {
        SampleEntropyBatchRows::new(data, config)
    }

    /// Creates a distribution entropy estimator over pairwise distances of one series
    pub fn distribution(
        data: impl Into<Array1<f64>>,
        config: DistributionConfig,
    ) -> Result<DistributionEntropy> {
        DistributionEntropy::new(Sequence::new(data)?, config)
    }

    /// Creates a cross-distribution entropy estimator
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - The two series; lengths may differ
    /// * `config` - Embedding, bin rule, log base and normalization
    pub fn cross_distribution(
        x: impl Into<Array1<f64>>,
        y: impl Into<Array1<f64>>,
        config: DistributionConfig,
    ) -> Result<CrossDistributionEntropy> {
        CrossDistributionEntropy::new(Sequence::new(x)?, Sequence::new(y)?, config)
    }

    /// Creates a multivariate sample entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Rows are samples, columns are channels
    /// * `config` - Per-channel embedding, radius and channel normalization
    pub fn multivariate_sample(
        data: Array2<f64>,
        config: MultivariateSampleEntropyConfig,
    ) -> Result<MultivariateSampleEntropy> {
        MultivariateSampleEntropy::new(MultivariateData::new(data)?, config)
    }

    /// Creates a multivariate cosine similarity entropy estimator
    pub fn multivariate_cosine(
        data: Array2<f64>,
        config: MultivariateCosineEntropyConfig,
    ) -> Result<MultivariateCosineEntropy> {
        MultivariateCosineEntropy::new(MultivariateData::new(data)?, config)
    }

    /// Creates a symbolic dynamic entropy estimator
    pub fn symbolic_dynamic(
        data: impl Into<Array1<f64>>,
        config: SymbolicDynamicConfig,
    ) -> Result<SymbolicDynamicEntropy> {
        SymbolicDynamicEntropy::new(Sequence::new(data)?, config)
    }
}
