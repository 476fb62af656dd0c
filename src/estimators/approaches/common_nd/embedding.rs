// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delay (Takens) embedding of univariate and multichannel series.

use ndarray::{Array2, ArrayView1, ArrayView2};

use super::dataset::{MultivariateData, Sequence};
use crate::estimators::error::{InvalidParameterError, Result, check_positive};

/// Embedding dimension `m` and time delay `tau`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawEmbeddingParameters")
)]
pub struct EmbeddingParameters {
    m: usize,
    tau: usize,
}

/// Unchecked wire form, deserialized through [`EmbeddingParameters::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEmbeddingParameters {
    m: usize,
    tau: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEmbeddingParameters> for EmbeddingParameters {
    type Error = InvalidParameterError;

    fn try_from(raw: RawEmbeddingParameters) -> Result<Self> {
        Self::new(raw.m, raw.tau)
    }
}

impl Default for EmbeddingParameters {
    fn default() -> Self {
        Self { m: 2, tau: 1 }
    }
}

impl EmbeddingParameters {
    pub fn new(m: usize, tau: usize) -> Result<Self> {
        check_positive("m", m)?;
        check_positive("tau", tau)?;
        Ok(Self { m, tau })
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn tau(&self) -> usize {
        self.tau
    }

    /// Span in samples covered by one delay vector, minus one.
    pub fn span(&self) -> usize {
        (self.m - 1) * self.tau
    }

    /// Number of delay vectors for a series of length `n`, if any.
    pub fn n_vectors(&self, n: usize) -> Option<usize> {
        n.checked_sub(self.span()).filter(|&nx| nx > 0)
    }

    /// Fail unless at least one vector of dimension `m + 1` fits, i.e. `m * tau < n`.
    pub fn require_extension(&self, n: usize) -> Result<()> {
        if self.m * self.tau >= n {
            return Err(InvalidParameterError::InsufficientPoints {
                m: self.m,
                tau: self.tau,
                n,
                required: self.m * self.tau,
            });
        }
        Ok(())
    }
}

/// Delay vectors of a single series, shape `(N - (m-1) tau, m)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayVectorSet {
    vectors: Array2<f64>,
    params: EmbeddingParameters,
}

impl DelayVectorSet {
    pub fn n_vectors(&self) -> usize {
        self.vectors.nrows()
    }

    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    pub fn params(&self) -> EmbeddingParameters {
        self.params
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.vectors.row(i)
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.vectors.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.vectors
    }
}

/// Embed a validated sequence.
pub fn embed(sequence: &Sequence, params: EmbeddingParameters) -> Result<DelayVectorSet> {
    embed_slice(sequence.as_slice(), params)
}

/// Embed a raw buffer; row `i` is `[x[i], x[i+tau], ..., x[i+(m-1) tau]]`.
pub fn embed_slice(values: &[f64], params: EmbeddingParameters) -> Result<DelayVectorSet> {
    let n = values.len();
    let nx = params
        .n_vectors(n)
        .ok_or(InvalidParameterError::InsufficientPoints {
            m: params.m,
            tau: params.tau,
            n,
            required: params.span(),
        })?;
    let vectors = Array2::from_shape_fn((nx, params.m), |(i, k)| values[i + k * params.tau]);
    Ok(DelayVectorSet { vectors, params })
}

/// Per-channel embedding dimensions and delays of a multichannel series.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMultivariateEmbedding")
)]
pub struct MultivariateEmbedding {
    ms: Vec<usize>,
    taus: Vec<usize>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMultivariateEmbedding {
    ms: Vec<usize>,
    taus: Vec<usize>,
}

/// The channel count is taken from `ms`; it is checked against the data on use.
#[cfg(feature = "serde")]
impl TryFrom<RawMultivariateEmbedding> for MultivariateEmbedding {
    type Error = InvalidParameterError;

    fn try_from(raw: RawMultivariateEmbedding) -> Result<Self> {
        let channels = raw.ms.len();
        Self::new(raw.ms, raw.taus, channels)
    }
}

impl MultivariateEmbedding {
    /// `ms` and `taus` must both hold one positive entry per channel.
    pub fn new(ms: Vec<usize>, taus: Vec<usize>, channels: usize) -> Result<Self> {
        for (name, v) in [("m", &ms), ("tau", &taus)] {
            if v.len() != channels {
                return Err(InvalidParameterError::DimensionMismatch {
                    name,
                    expected: channels,
                    got: v.len(),
                });
            }
            for &x in v.iter() {
                check_positive(name, x)?;
            }
        }
        Ok(Self { ms, taus })
    }

    /// `m = 2`, `tau = 1` on every channel.
    pub fn uniform(channels: usize) -> Self {
        Self {
            ms: vec![2; channels],
            taus: vec![1; channels],
        }
    }

    pub fn ms(&self) -> &[usize] {
        &self.ms
    }

    pub fn taus(&self) -> &[usize] {
        &self.taus
    }

    pub fn n_channels(&self) -> usize {
        self.ms.len()
    }

    /// Total width of a delay vector (`sum(m)`).
    pub fn width(&self) -> usize {
        self.ms.iter().sum()
    }

    /// Rows usable at dimension `m` and `m + 1` on every channel: `N - max(m tau)`.
    pub fn extendable_rows(&self, n: usize) -> Result<usize> {
        let reach = self
            .ms
            .iter()
            .zip(&self.taus)
            .map(|(m, t)| m * t)
            .max()
            .unwrap_or(0);
        n.checked_sub(reach)
            .filter(|&rows| rows > 1)
            .ok_or(InvalidParameterError::InsufficientPoints {
                m: self.ms.iter().copied().max().unwrap_or(0),
                tau: self.taus.iter().copied().max().unwrap_or(0),
                n,
                required: reach + 1,
            })
    }

    /// Concatenated per-channel delay vectors for time indices `0..rows`.
    pub fn delay_matrix(&self, data: &MultivariateData, rows: usize) -> Array2<f64> {
        self.build(data.view(), rows, None)
    }

    /// Like [`Self::delay_matrix`] but channel `channel` carries `m + 1` delays.
    pub fn extended_matrix(
        &self,
        data: &MultivariateData,
        rows: usize,
        channel: usize,
    ) -> Array2<f64> {
        self.build(data.view(), rows, Some(channel))
    }

    fn build(&self, data: ArrayView2<'_, f64>, rows: usize, extend: Option<usize>) -> Array2<f64> {
        let width = self.width() + usize::from(extend.is_some());
        let mut out = Array2::<f64>::zeros((rows, width));
        let mut col = 0;
        for (k, (&m, &tau)) in self.ms.iter().zip(&self.taus).enumerate() {
            let m = if extend == Some(k) { m + 1 } else { m };
            for p in 0..m {
                for i in 0..rows {
                    out[(i, col)] = data[(i + p * tau, k)];
                }
                col += 1;
            }
        }
        out
    }
}
