// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::binning::{BinRule, bin_count, histogram};
use crate::estimators::approaches::common_nd::dataset::Sequence;
use crate::estimators::approaches::common_nd::distance::{cross_distances, self_distances};
use crate::estimators::approaches::common_nd::embedding::{
    DelayVectorSet, EmbeddingParameters, embed,
};
use crate::estimators::approaches::estimate::shannon_entropy;
use crate::estimators::diagnostics::{Diagnostics, EntropyResult};
use crate::estimators::error::{InvalidParameterError, Result};
use crate::estimators::traits::EntropyEstimator;
use crate::estimators::utils::LogBase;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionConfig {
    pub m: usize,
    pub tau: usize,
    pub bins: BinRule,
    pub log_base: LogBase,
    /// Divide by `log(bins)`, the entropy of a uniform histogram.
    pub normalize: bool,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            m: 2,
            tau: 1,
            bins: BinRule::Sturges,
            log_base: LogBase::BITS,
            normalize: true,
        }
    }
}

impl DistributionConfig {
    pub fn with_embedding(mut self, m: usize, tau: usize) -> Self {
        self.m = m;
        self.tau = tau;
        self
    }

    pub fn with_bins(mut self, bins: BinRule) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    fn validated(&self) -> Result<EmbeddingParameters> {
        self.bins.validate()?;
        self.log_base.validate()?;
        EmbeddingParameters::new(self.m, self.tau)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionAux {
    /// Probabilities of the non-empty bins.
    pub probabilities: Array1<f64>,
    /// Number of bins, empty ones included.
    pub bins: usize,
}

/// Shannon entropy of a distance histogram, optionally normalized by `log(bins)`.
fn distance_entropy(
    distances: &[f64],
    config: &DistributionConfig,
) -> EntropyResult<DistributionAux> {
    let mut diagnostics = Diagnostics::new();
    let bins = bin_count(distances, config.bins)
        .and_then(|b| histogram(distances, b, &mut diagnostics))
        .unwrap_or_else(|_| unreachable!("distance sets are non-empty and the rule was validated"));
    tracing::debug!(
        distances = distances.len(),
        bins = bins.bins(),
        rule = ?config.bins,
        "distance histogram"
    );

    let probabilities = bins.probabilities(&mut diagnostics);
    let mut value = shannon_entropy(&probabilities, config.log_base);
    if config.normalize {
        value /= config.log_base.log(bins.bins() as f64);
    }
    EntropyResult::new(
        value,
        DistributionAux {
            probabilities: Array1::from(probabilities),
            bins: bins.bins(),
        },
        diagnostics,
    )
}

/// Distribution entropy of one series: the entropy of the histogram of
/// Chebyshev distances between all pairs `i < j` of delay vectors.
#[derive(Debug, Clone)]
pub struct DistributionEntropy {
    vectors: DelayVectorSet,
    config: DistributionConfig,
}

impl DistributionEntropy {
    /// Requires at least two delay vectors.
    pub fn new(sequence: Sequence, config: DistributionConfig) -> Result<Self> {
        let params = config.validated()?;
        let vectors = embed_at_least(&sequence, params, 2)?;
        Ok(Self { vectors, config })
    }

    /// Pairwise distances the histogram is built from.
    pub fn distances(&self) -> Vec<f64> {
        self_distances(self.vectors.view())
    }
}

impl EntropyEstimator for DistributionEntropy {
    type Auxiliary = DistributionAux;

    fn estimate(&self) -> EntropyResult<DistributionAux> {
        distance_entropy(&self.distances(), &self.config)
    }
}

/// Cross-distribution entropy: the entropy of the histogram of Chebyshev
/// distances between every delay vector of `x` and every delay vector of `y`.
#[derive(Debug, Clone)]
pub struct CrossDistributionEntropy {
    x: DelayVectorSet,
    y: DelayVectorSet,
    config: DistributionConfig,
}

impl CrossDistributionEntropy {
    pub fn new(x: Sequence, y: Sequence, config: DistributionConfig) -> Result<Self> {
        let params = config.validated()?;
        let x = embed_at_least(&x, params, 1)?;
        let y = embed_at_least(&y, params, 1)?;
        Ok(Self { x, y, config })
    }

    /// Cross distances in row-major `(i, j)` order.
    pub fn distances(&self) -> Vec<f64> {
        cross_distances(self.x.view(), self.y.view())
            .unwrap_or_else(|_| unreachable!("both sets have width m"))
    }
}

impl EntropyEstimator for CrossDistributionEntropy {
    type Auxiliary = DistributionAux;

    fn estimate(&self) -> EntropyResult<DistributionAux> {
        distance_entropy(&self.distances(), &self.config)
    }
}

/// Embed `sequence`, requiring at least `min` delay vectors.
fn embed_at_least(
    sequence: &Sequence,
    params: EmbeddingParameters,
    min: usize,
) -> Result<DelayVectorSet> {
    let set = embed(sequence, params)?;
    if set.n_vectors() < min {
        return Err(InvalidParameterError::InsufficientPoints {
            m: params.m(),
            tau: params.tau(),
            n: sequence.len(),
            required: params.span() + min,
        });
    }
    Ok(set)
}
