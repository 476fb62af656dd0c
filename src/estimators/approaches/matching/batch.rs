// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::sample::{SampleEntropy, SampleEntropyAux, SampleEntropyConfig};
use crate::estimators::approaches::common_nd::dataset::Sequence;
use crate::estimators::diagnostics::EntropyResult;
use crate::estimators::error::Result;
use crate::estimators::traits::{EntropyEstimator, GlobalValue};

/// Row-wise batch sample entropy.
///
/// Each row of a 2D array is an independent series estimated with the same
/// configuration. With the `parallel` feature rows are distributed over the
/// rayon pool; the results do not depend on it.
pub struct SampleEntropyBatchRows {
    estimators: Vec<SampleEntropy>,
}

impl SampleEntropyBatchRows {
    /// Validates every row up front; the first invalid row fails the batch.
    pub fn new(data: Array2<f64>, config: SampleEntropyConfig) -> Result<Self> {
        let estimators = data
            .rows()
            .into_iter()
            .map(|row| SampleEntropy::new(Sequence::new(row.to_owned())?, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { estimators })
    }

    pub fn n_rows(&self) -> usize {
        self.estimators.len()
    }

    /// Full results for each row.
    pub fn estimates(&self) -> Vec<EntropyResult<SampleEntropyAux>> {
        #[cfg(feature = "parallel")]
        {
            self.estimators.par_iter().map(|e| e.estimate()).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.estimators.iter().map(|e| e.estimate()).collect()
        }
    }

    /// Sample entropy of each row.
    pub fn global_values(&self) -> Array1<f64> {
        #[cfg(feature = "parallel")]
        let values: Vec<f64> = self.estimators.par_iter().map(|e| e.global_value()).collect();
        #[cfg(not(feature = "parallel"))]
        let values: Vec<f64> = self.estimators.iter().map(|e| e.global_value()).collect();
        Array1::from(values)
    }
}
