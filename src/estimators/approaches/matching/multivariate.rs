// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multivariate sample entropy and the channel preprocessing shared with the
//! cosine similarity variant.
//!
//! Every channel `k` gets its own embedding dimension `m_k` and delay `tau_k`.
//! A composite delay vector concatenates the per-channel delay vectors of one
//! time index. For the `m + 1` level, each channel in turn is extended by one
//! delay while the others keep `m_k`; the `Dn` extended sets are pooled and
//! matched against each other as one set.

use std::str::FromStr;

use ndarray::{Array2, s};

use crate::estimators::approaches::common_nd::dataset::MultivariateData;
use crate::estimators::approaches::common_nd::distance::count_self_matches;
use crate::estimators::approaches::common_nd::embedding::MultivariateEmbedding;
use crate::estimators::approaches::estimate::ratio_entropy;
use crate::estimators::diagnostics::{Degeneracy, Diagnostics, EntropyResult};
use crate::estimators::error::{InvalidParameterError, Result, check_radius};
use crate::estimators::traits::EntropyEstimator;
use crate::estimators::utils::{LogBase, stats};

/// Per-channel preprocessing applied before embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelNormalization {
    #[default]
    None,
    /// Divide each channel by its standard deviation.
    UnitVariance,
    SubtractMedian,
    SubtractMean,
    /// Subtract the mean and divide by the standard deviation, per channel.
    ZScore,
    /// Z-score against the mean and standard deviation of the whole matrix.
    GlobalZScore,
}

impl FromStr for ChannelNormalization {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "unit_variance" | "unitvariance" => Ok(Self::UnitVariance),
            "subtract_median" | "median" => Ok(Self::SubtractMedian),
            "subtract_mean" | "mean" => Ok(Self::SubtractMean),
            "zscore" | "z_score" => Ok(Self::ZScore),
            "global_zscore" | "global" => Ok(Self::GlobalZScore),
            _ => Err(InvalidParameterError::UnknownMethod {
                kind: "channel normalization",
                name: s.to_string(),
                expected: "none, unit_variance, subtract_median, subtract_mean, zscore, global_zscore",
            }),
        }
    }
}

/// Apply `normalization` to a copy of `data`.
///
/// Channels with zero spread are only centered, never divided, and reported as
/// [`Degeneracy::ZeroVariance`].
pub fn normalize_channels(
    data: &MultivariateData,
    normalization: ChannelNormalization,
    diagnostics: &mut Diagnostics,
) -> MultivariateData {
    let mut out = data.clone();
    if normalization == ChannelNormalization::None {
        return out;
    }
    let values = out.data_mut();

    if normalization == ChannelNormalization::GlobalZScore {
        let flat: Vec<f64> = values.iter().copied().collect();
        let (mu, sd) = (stats::mean(&flat), stats::population_std(&flat));
        if sd == 0.0 {
            diagnostics.push(Degeneracy::ZeroVariance { what: "data matrix" });
            values.mapv_inplace(|v| v - mu);
        } else {
            values.mapv_inplace(|v| (v - mu) / sd);
        }
        return out;
    }

    for mut column in values.columns_mut() {
        let channel: Vec<f64> = column.iter().copied().collect();
        let (shift, scale) = match normalization {
            ChannelNormalization::UnitVariance => (0.0, stats::population_std(&channel)),
            ChannelNormalization::SubtractMedian => (stats::median(&channel), 1.0),
            ChannelNormalization::SubtractMean => (stats::mean(&channel), 1.0),
            ChannelNormalization::ZScore => {
                (stats::mean(&channel), stats::population_std(&channel))
            }
            ChannelNormalization::None | ChannelNormalization::GlobalZScore => (0.0, 1.0),
        };
        if scale == 0.0 {
            diagnostics.push(Degeneracy::ZeroVariance { what: "channel" });
            column.mapv_inplace(|v| v - shift);
        } else {
            column.mapv_inplace(|v| (v - shift) / scale);
        }
    }
    out
}

/// Stack the `Dn` extended delay matrices into one `(Dn * rows, width + 1)` set.
pub(crate) fn pooled_extended(
    embedding: &MultivariateEmbedding,
    data: &MultivariateData,
    rows: usize,
) -> Array2<f64> {
    let channels = embedding.n_channels();
    let mut pooled = Array2::<f64>::zeros((channels * rows, embedding.width() + 1));
    for k in 0..channels {
        let block = embedding.extended_matrix(data, rows, k);
        pooled.slice_mut(s![k * rows..(k + 1) * rows, ..]).assign(&block);
    }
    pooled
}

/// `n (n - 1) / 2` as a float.
#[inline]
pub(crate) fn pair_count(n: usize) -> f64 {
    n as f64 * (n as f64 - 1.0) / 2.0
}

/// Validate an optional per-channel embedding against the data and return it
/// with the number of usable rows.
pub(crate) fn resolve_embedding(
    embedding: Option<&MultivariateEmbedding>,
    data: &MultivariateData,
) -> Result<(MultivariateEmbedding, usize)> {
    let channels = data.n_channels();
    let embedding = match embedding {
        Some(e) if e.n_channels() != channels => {
            return Err(InvalidParameterError::DimensionMismatch {
                name: "embedding channels",
                expected: channels,
                got: e.n_channels(),
            });
        }
        Some(e) => e.clone(),
        None => MultivariateEmbedding::uniform(channels),
    };
    let rows = embedding.extendable_rows(data.n_samples())?;
    Ok((embedding, rows))
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultivariateSampleEntropyConfig {
    /// `None` means `m = 2`, `tau = 1` on every channel.
    pub embedding: Option<MultivariateEmbedding>,
    /// Absolute Chebyshev radius, applied after normalization.
    pub r: f64,
    pub log_base: LogBase,
    pub normalization: ChannelNormalization,
}

impl Default for MultivariateSampleEntropyConfig {
    fn default() -> Self {
        Self {
            embedding: None,
            r: 0.2,
            log_base: LogBase::Natural,
            normalization: ChannelNormalization::None,
        }
    }
}

impl MultivariateSampleEntropyConfig {
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

/// Match statistics of the multivariate estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultivariateMatchAux {
    /// Fraction of matching pairs at dimension `m`.
    pub b0: f64,
    /// Fraction of matching pairs among the pooled `m + 1` vectors.
    pub b1: f64,
    pub matches_m: usize,
    pub matches_m1: usize,
    /// Rows per delay matrix (`N - max(m tau)`).
    pub rows: usize,
}

/// Multivariate sample entropy `-ln(B1 / B0)`.
#[derive(Debug, Clone)]
pub struct MultivariateSampleEntropy {
    data: MultivariateData,
    embedding: MultivariateEmbedding,
    rows: usize,
    config: MultivariateSampleEntropyConfig,
}

impl MultivariateSampleEntropy {
    pub fn new(data: MultivariateData, config: MultivariateSampleEntropyConfig) -> Result<Self> {
        check_radius("r", config.r)?;
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

impl EntropyEstimator for MultivariateSampleEntropy {
    type Auxiliary = MultivariateMatchAux;

    fn estimate(&self) -> EntropyResult<MultivariateMatchAux> {
        let mut diagnostics = Diagnostics::new();
        let data = normalize_channels(&self.data, self.config.normalization, &mut diagnostics);
        let rows = self.rows;
        tracing::debug!(
            channels = data.n_channels(),
            rows,
            r = self.config.r,
            normalization = ?self.config.normalization,
            "multivariate sample entropy"
        );

        let base = self.embedding.delay_matrix(&data, rows);
        let matches_m = count_self_matches(base.view(), self.config.r);
        let pooled = pooled_extended(&self.embedding, &data, rows);
        let matches_m1 = count_self_matches(pooled.view(), self.config.r);

        let b0 = matches_m as f64 / pair_count(rows);
        let b1 = matches_m1 as f64 / pair_count(pooled.nrows());
        let value = ratio_entropy(b1, b0, self.config.log_base);
        if !value.is_finite() {
            diagnostics.push(Degeneracy::UndefinedRatio {
                dimension: self.embedding.width(),
                a: b1,
                b: b0,
            });
        }
        EntropyResult::new(
            value,
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
