// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::estimators::error::{InvalidParameterError, Result};
use crate::estimators::utils::stats;

/// Minimum number of samples is `MIN_SAMPLES + 1`.
pub const MIN_SAMPLES: usize = 10;

fn check_finite<'a>(values: impl IntoIterator<Item = &'a f64>) -> Result<()> {
    for (index, &value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(InvalidParameterError::NonFiniteSample { index, value });
        }
    }
    Ok(())
}

/// A validated, immutable 1D time series: more than 10 finite samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: Array1<f64>,
}

impl Sequence {
    pub fn new(values: impl Into<Array1<f64>>) -> Result<Self> {
        let values = values.into();
        if values.len() <= MIN_SAMPLES {
            return Err(InvalidParameterError::SequenceTooShort {
                min: MIN_SAMPLES,
                got: values.len(),
            });
        }
        check_finite(values.iter())?;
        // Keep a contiguous buffer so slices are always available.
        let values = if values.is_standard_layout() {
            values
        } else {
            values.as_standard_layout().to_owned()
        };
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a `Sequence` holds more than 10 samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values
            .as_slice()
            .unwrap_or_else(|| unreachable!("Sequence buffers are contiguous"))
    }

    /// Population standard deviation.
    pub fn std(&self) -> f64 {
        stats::population_std(self.as_slice())
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for Sequence {
    type Error = InvalidParameterError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<Array1<f64>> for Sequence {
    type Error = InvalidParameterError;

    fn try_from(values: Array1<f64>) -> Result<Self> {
        Self::new(values)
    }
}

/// A validated multichannel time series (rows = samples, columns = channels).
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariateData {
    data: Array2<f64>,
}

impl MultivariateData {
    pub fn new(data: Array2<f64>) -> Result<Self> {
        if data.nrows() <= MIN_SAMPLES {
            return Err(InvalidParameterError::SequenceTooShort {
                min: MIN_SAMPLES,
                got: data.nrows(),
            });
        }
        if data.ncols() == 0 {
            return Err(InvalidParameterError::EmptyData { name: "channels" });
        }
        check_finite(data.iter())?;
        Ok(Self { data })
    }

    /// Stack equally long sequences as channels.
    pub fn from_channels(channels: &[Sequence]) -> Result<Self> {
        let first = channels
            .first()
            .ok_or(InvalidParameterError::EmptyData { name: "channels" })?;
        let n = first.len();
        let mut data = Array2::<f64>::zeros((n, channels.len()));
        for (k, ch) in channels.iter().enumerate() {
            if ch.len() != n {
                return Err(InvalidParameterError::DimensionMismatch {
                    name: "channel length",
                    expected: n,
                    got: ch.len(),
                });
            }
            data.column_mut(k).assign(&ch.view());
        }
        Ok(Self { data })
    }

    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_channels(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn channel(&self, k: usize) -> ArrayView1<'_, f64> {
        self.data.index_axis(Axis(1), k)
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array2<f64> {
        &mut self.data
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}
