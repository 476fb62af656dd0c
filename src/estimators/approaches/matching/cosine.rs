// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::multivariate::{
    ChannelNormalization, MultivariateMatchAux, normalize_channels, pair_count, pooled_extended,
    resolve_embedding,
};
use crate::estimators::approaches::common_nd::dataset::MultivariateData;
use crate::estimators::approaches::common_nd::distance::count_self_similar;
use crate::estimators::approaches::common_nd::embedding::MultivariateEmbedding;
use crate::estimators::approaches::estimate::binary_entropy;
use crate::estimators::diagnostics::{Degeneracy, Diagnostics, EntropyResult};
use crate::estimators::error::{InvalidParameterError, Result};
use crate::estimators::traits::EntropyEstimator;
use crate::estimators::utils::LogBase;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultivariateCosineEntropyConfig {
    /// `None` means `m = 2`, `tau = 1` on every channel.
    pub embedding: Option<MultivariateEmbedding>,
    /// Angular distance threshold in `(0, 1)`.
    pub r: f64,
    pub log_base: LogBase,
    pub normalization: ChannelNormalization,
}

impl Default for MultivariateCosineEntropyConfig {
    fn default() -> Self {
        Self {
            embedding: None,
            r: 0.1,
            log_base: LogBase::BITS,
            normalization: ChannelNormalization::None,
        }
    }
}

impl MultivariateCosineEntropyConfig {
    pub fn with_embedding(mut self, embedding: MultivariateEmbedding) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_r(mut self, r: f64) -> Self {
        self.r = r;
        self
    }

    pub fn with_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    pub fn with_normalization(mut self, normalization: ChannelNormalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Multivariate cosine similarity entropy.
///
/// Two composite delay vectors are similar when their angular distance
/// `acos(cos) / pi` is strictly below `r`. The estimate is the binary entropy
/// of the fraction of similar pairs among the pooled `m + 1` vectors. Zero-norm
/// vectors are never similar to anything.
#[derive(Debug, Clone)]
pub struct MultivariateCosineEntropy {
    data: MultivariateData,
    embedding: MultivariateEmbedding,
    rows: usize,
    config: MultivariateCosineEntropyConfig,
}

impl MultivariateCosineEntropy {
    pub fn new(data: MultivariateData, config: MultivariateCosineEntropyConfig) -> Result<Self> {
        if config.r.is_nan() || config.r <= 0.0 || config.r >= 1.0 {
            return Err(InvalidParameterError::out_of_range("r", config.r, "0 < r < 1"));
        }
        config.log_base.validate()?;
        let (embedding, rows) = resolve_embedding(config.embedding.as_ref(), &data)?;
        Ok(Self {
            data,
            embedding,
            rows,
            config,
        })
    }

    pub fn embedding(&self) -> &MultivariateEmbedding {
        &self.embedding
    }
}

impl EntropyEstimator for MultivariateCosineEntropy {
    type Auxiliary = MultivariateMatchAux;

    fn estimate(&self) -> EntropyResult<MultivariateMatchAux> {
        let mut diagnostics = Diagnostics::new();
        let data = normalize_channels(&self.data, self.config.normalization, &mut diagnostics);
        let rows = self.rows;
        tracing::debug!(
            channels = data.n_channels(),
            rows,
            r = self.config.r,
            "multivariate cosine entropy"
        );

        let base = self.embedding.delay_matrix(&data, rows);
        let matches_m = count_self_similar(base.view(), self.config.r);
        let pooled = pooled_extended(&self.embedding, &data, rows);
        let matches_m1 = count_self_similar(pooled.view(), self.config.r);

        let b0 = matches_m as f64 / pair_count(rows);
        let b1 = matches_m1 as f64 / pair_count(pooled.nrows());
        if b1 == 0.0 || b1 == 1.0 {
            diagnostics.push(Degeneracy::NoSimilarPatterns { probability: b1 });
        }
        EntropyResult::new(
            binary_entropy(b1, self.config.log_base),
            MultivariateMatchAux {
                b0,
                b1,
                matches_m,
                matches_m1,
                rows,
            },
            diagnostics,
        )
    }
}
