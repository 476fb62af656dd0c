// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::counter::extend_matches;
use super::sample::{SampleEntropyAux, SampleEntropyConfig};
use super::variance::conditional_variance;
use crate::estimators::approaches::common_nd::dataset::Sequence;
use crate::estimators::approaches::common_nd::distance::{
    match_matrix_columns, match_matrix_indexed,
};
use crate::estimators::approaches::common_nd::embedding::EmbeddingParameters;
use crate::estimators::approaches::estimate::ratio_entropies;
use crate::estimators::diagnostics::{Degeneracy, Diagnostics, EntropyResult};
use crate::estimators::error::Result;
use crate::estimators::traits::{DimensionValues, EntropyEstimator};
use crate::estimators::utils::stats;

/// Pooled standard deviation of two samples,
/// `sqrt((var1 (N1 - 1) + var2 (N2 - 1)) / (N1 + N2 - 1))` with sample variances.
pub fn pooled_std(x: &[f64], y: &[f64]) -> f64 {
    let (n1, n2) = (x.len() as f64, y.len() as f64);
    let pooled = stats::sample_variance(x) * (n1 - 1.0) + stats::sample_variance(y) * (n2 - 1.0);
    (pooled / (n1 + n2 - 1.0)).sqrt()
}

/// Cross-sample entropy between two series.
///
/// Counts matches of delay vectors of `x` against every delay vector of `y`
/// (all `Nx * Ny` pairs), so the series may differ in length. A relative
/// tolerance is resolved against [`pooled_std`].
#[derive(Debug, Clone)]
pub struct CrossSampleEntropy {
    x: Sequence,
    y: Sequence,
    params: EmbeddingParameters,
    config: SampleEntropyConfig,
}

impl CrossSampleEntropy {
    pub fn new(x: Sequence, y: Sequence, config: SampleEntropyConfig) -> Result<Self> {
        let params = config.validated()?;
        params.require_extension(x.len())?;
        params.require_extension(y.len())?;
        Ok(Self { x, y, params, config })
    }

    pub fn config(&self) -> &SampleEntropyConfig {
        &self.config
    }
}

impl EntropyEstimator for CrossSampleEntropy {
    type Auxiliary = SampleEntropyAux;

    fn estimate(&self) -> EntropyResult<SampleEntropyAux> {
        let mut diagnostics = Diagnostics::new();
        let (x, y) = (self.x.as_slice(), self.y.as_slice());
        let std = pooled_std(x, y);
        if std == 0.0 {
            diagnostics.push(Degeneracy::ZeroVariance { what: "pooled sequences" });
        }
        let r = self.config.tolerance.resolve(std);
        let indexed = self.config.strategy.use_index(x.len().max(y.len()));
        tracing::debug!(n_x = x.len(), n_y = y.len(), r, indexed, "cross-sample entropy");

        let seeds = if indexed {
            match_matrix_indexed(x, y, r)
        } else {
            match_matrix_columns(x, y, r)
        };
        let lengths = extend_matches(x, y, &seeds, self.params, r);
        let counts = lengths.counts();
        let per_dimension = ratio_entropies(&counts, self.config.log_base, &mut diagnostics);
        let variance = self.config.variance.then(|| conditional_variance(&lengths));

        EntropyResult::new(
            per_dimension[self.params.m()],
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

impl DimensionValues for CrossSampleEntropy {
    fn dimension_values(&self) -> Array1<f64> {
        self.estimate().auxiliary.per_dimension
    }
}
