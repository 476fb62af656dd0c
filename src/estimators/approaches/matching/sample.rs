// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Axis};

use super::counter::{MatchCounts, extend_matches};
use super::variance::{ConditionalVariance, conditional_variance};
use super::{MatchStrategy, Tolerance};
use crate::estimators::approaches::common_nd::dataset::Sequence;
use crate::estimators::approaches::common_nd::distance::{
    self_match_matrix, self_match_matrix_indexed,
};
use crate::estimators::approaches::common_nd::embedding::EmbeddingParameters;
use crate::estimators::approaches::estimate::ratio_entropies;
use crate::estimators::diagnostics::{Degeneracy, Diagnostics, EntropyResult};
use crate::estimators::error::Result;
use crate::estimators::traits::{DimensionValues, EntropyEstimator};
use crate::estimators::utils::LogBase;

/// Configuration of [`SampleEntropy`] and [`super::cross_sample::CrossSampleEntropy`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleEntropyConfig {
    pub m: usize,
    pub tau: usize,
    pub tolerance: Tolerance,
    pub log_base: LogBase,
    /// Also compute the variance of the conditional probability (quadratic in
    /// the number of matches).
    pub variance: bool,
    pub strategy: MatchStrategy,
}

impl Default for SampleEntropyConfig {
    fn default() -> Self {
        Self {
            m: 2,
            tau: 1,
            tolerance: Tolerance::default(),
            log_base: LogBase::Natural,
            variance: false,
            strategy: MatchStrategy::Auto,
        }
    }
}

impl SampleEntropyConfig {
    pub fn with_embedding(mut self, m: usize, tau: usize) -> Self {
        self.m = m;
        self.tau = tau;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Shorthand for an absolute radius.
    pub fn with_r(self, r: f64) -> Self {
        self.with_tolerance(Tolerance::Absolute(r))
    }

    pub fn with_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    pub fn with_variance(mut self, variance: bool) -> Self {
        self.variance = variance;
        self
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub(crate) fn validated(&self) -> Result<EmbeddingParameters> {
        self.tolerance.validate()?;
        self.log_base.validate()?;
        EmbeddingParameters::new(self.m, self.tau)
    }
}

/// Auxiliary output of sample entropy estimators.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleEntropyAux {
    /// Entropy at dimensions `0..=m`; the last entry is the estimate.
    pub per_dimension: Array1<f64>,
    pub counts: MatchCounts,
    /// Resolved tolerance radius.
    pub r: f64,
    pub variance: Option<ConditionalVariance>,
}

/// Sample entropy `-ln(A / B)` of a single series.
///
/// `B` counts pairs of `m`-dimensional delay vectors within Chebyshev distance
/// `r` (self-matches excluded, every pair counted once) and `A` counts those
/// pairs that still match at dimension `m + 1`. Lower values indicate a more
/// regular signal.
///
/// A zero count yields NaN (or `+inf`) together with a diagnostic instead of an
/// error.
#[derive(Debug, Clone)]
pub struct SampleEntropy {
    sequence: Sequence,
    params: EmbeddingParameters,
    config: SampleEntropyConfig,
}

impl SampleEntropy {
    /// Validate `config` against `sequence`. Requires `m * tau < N`.
    pub fn new(sequence: Sequence, config: SampleEntropyConfig) -> Result<Self> {
        let params = config.validated()?;
        params.require_extension(sequence.len())?;
        Ok(Self {
            sequence,
            params,
            config,
        })
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn config(&self) -> &SampleEntropyConfig {
        &self.config
    }

    pub fn params(&self) -> EmbeddingParameters {
        self.params
    }
}

impl EntropyEstimator for SampleEntropy {
    type Auxiliary = SampleEntropyAux;

    fn estimate(&self) -> EntropyResult<SampleEntropyAux> {
        let mut diagnostics = Diagnostics::new();
        let x = self.sequence.as_slice();
        let std = self.sequence.std();
        if std == 0.0 {
            diagnostics.push(Degeneracy::ZeroVariance { what: "sequence" });
        }
        let r = self.config.tolerance.resolve(std);
        let indexed = self.config.strategy.use_index(x.len());
        tracing::debug!(
            n = x.len(),
            m = self.params.m(),
            tau = self.params.tau(),
            r,
            indexed,
            "sample entropy"
        );

        let seeds = if indexed {
            self_match_matrix_indexed(x, r)
        } else {
            self_match_matrix(self.sequence.view().insert_axis(Axis(1)), r)
        };
        let lengths = extend_matches(x, x, &seeds, self.params, r);
        let counts = lengths.counts();
        let per_dimension = ratio_entropies(&counts, self.config.log_base, &mut diagnostics);
        let variance = self.config.variance.then(|| conditional_variance(&lengths));

        let value = per_dimension[self.params.m()];
        EntropyResult::new(
            value,
            SampleEntropyAux {
                per_dimension,
                counts,
                r,
                variance,
            },
            diagnostics,
        )
    }
}

impl DimensionValues for SampleEntropy {
    fn dimension_values(&self) -> Array1<f64> {
        self.estimate().auxiliary.per_dimension
    }
}
